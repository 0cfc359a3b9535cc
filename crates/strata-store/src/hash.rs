//! Deterministic hashing of published project state.
//!
//! FNV-1a over every committed object, in map order. Two projects with
//! the same hash hold the same interpretation data; tests use this to
//! check that abandoned transactions leave no trace. Not a cryptographic
//! hash.

use strata_core::{Domain, Point3};

use crate::fault::Context;
use crate::project::Project;
use crate::property::PropertyOwner;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
    }
    hash
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

/// Length-prefixed, so `("ab", "c")` and `("a", "bc")` differ.
fn fnv1a_str(hash: u64, s: &str) -> u64 {
    fnv1a_bytes(fnv1a_u64(hash, s.len() as u64), s.as_bytes())
}

fn fnv1a_point(hash: u64, p: Point3) -> u64 {
    let hash = fnv1a_u64(hash, p.x.to_bits());
    let hash = fnv1a_u64(hash, p.y.to_bits());
    fnv1a_u64(hash, p.z.to_bits())
}

fn domain_tag(d: Domain) -> u64 {
    match d {
        Domain::Time => 0,
        Domain::Depth => 1,
    }
}

fn fnv1a_ids(mut hash: u64, ids: impl ExactSizeIterator<Item = u64>) -> u64 {
    hash = fnv1a_u64(hash, ids.len() as u64);
    for id in ids {
        hash = fnv1a_u64(hash, id);
    }
    hash
}

/// Hash the committed state of a project.
///
/// Covers the generation, the id counter, every horizon, fault, property
/// and collection, and the volume registry (ids and names; volume
/// samples are immutable and not hashed).
pub fn project_hash(project: &Project) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_str(hash, project.name());
    hash = fnv1a_u64(hash, project.generation().0);
    hash = fnv1a_u64(hash, project.next_id);

    for (id, v) in project.volumes() {
        hash = fnv1a_u64(hash, id.0);
        hash = fnv1a_str(hash, v.name());
    }

    for h in project.horizons() {
        hash = fnv1a_u64(hash, h.id().0);
        hash = fnv1a_str(hash, h.name());
        hash = fnv1a_u64(hash, domain_tag(h.domain()));
        for p in h.projections() {
            hash = fnv1a_u64(hash, p.survey().0 as u64);
            hash = fnv1a_u64(hash, p.points().len() as u64);
            for &pt in p.points() {
                hash = fnv1a_point(hash, pt);
            }
            hash = fnv1a_ids(hash, p.properties().iter().map(|id| id.0));
        }
    }

    for f in project.faults() {
        hash = fnv1a_u64(hash, f.id().0);
        hash = fnv1a_str(hash, f.name());
        hash = fnv1a_u64(hash, domain_tag(f.domain()));
        for line in f.polylines() {
            hash = fnv1a_u64(hash, line.len() as u64);
            for cp in line.points() {
                hash = fnv1a_point(hash, cp.geometry);
                hash = match cp.context {
                    Context::Unset => fnv1a_u64(hash, 0),
                    Context::Volume(v) => fnv1a_u64(fnv1a_u64(hash, 1), v.0),
                    Context::SeismicLine(l) => fnv1a_u64(fnv1a_u64(hash, 2), l.0),
                };
            }
        }
        hash = fnv1a_ids(hash, f.properties().iter().map(|id| id.0));
    }

    for p in project.properties() {
        hash = fnv1a_u64(hash, p.id().0);
        hash = fnv1a_str(hash, p.name());
        hash = fnv1a_str(hash, p.template().name());
        hash = match p.owner() {
            PropertyOwner::Horizon { horizon, survey } => {
                fnv1a_u64(fnv1a_u64(fnv1a_u64(hash, 0), horizon.0), survey.0 as u64)
            }
            PropertyOwner::Fault(f) => fnv1a_u64(fnv1a_u64(hash, 1), f.0),
        };
        for r in p.records() {
            hash = fnv1a_point(hash, r.geometry());
            hash = fnv1a_u64(hash, r.value().to_bits() as u64);
        }
    }

    for &root in project.roots() {
        hash = fnv1a_u64(hash, root.0);
    }
    let mut stack: Vec<_> = project.roots().iter().rev().copied().collect();
    while let Some(id) = stack.pop() {
        if let Some(c) = project.collection(id) {
            hash = fnv1a_u64(hash, id.0);
            hash = fnv1a_str(hash, c.name());
            hash = fnv1a_ids(hash, c.faults().iter().map(|f| f.0));
            hash = fnv1a_ids(hash, c.children().iter().map(|c| c.0));
            stack.extend(c.children().iter().rev().copied());
        }
    }

    hash
}
