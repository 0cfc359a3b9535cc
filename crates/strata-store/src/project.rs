//! The interpretation project and its builder.

use std::sync::Arc;

use indexmap::IndexMap;
use strata_core::{
    CollectionId, Domain, FaultId, HorizonId, Point3, ProjectGeneration, PropertyId, SurveyId,
    VolumeId,
};
use strata_grid::Volume;

use crate::collection::InterpretationCollection;
use crate::error::StoreError;
use crate::fault::{FaultInterpretation, FaultPolyline};
use crate::horizon::{HorizonInterpretation, HorizonInterpretation3D};
use crate::property::PropertySurface;
use crate::transaction::Transaction;

/// Published project state.
///
/// Read accessors return the committed view. All changes after
/// [`ProjectBuilder::build`] go through [`Project::begin`].
///
/// Object maps are `IndexMap`s so every enumeration follows insertion
/// order and extraction results are reproducible.
pub struct Project {
    name: String,
    pub(crate) next_id: u64,
    pub(crate) generation: ProjectGeneration,
    pub(crate) volumes: IndexMap<VolumeId, Arc<dyn Volume>>,
    pub(crate) horizons: IndexMap<HorizonId, HorizonInterpretation>,
    pub(crate) faults: IndexMap<FaultId, FaultInterpretation>,
    pub(crate) properties: IndexMap<PropertyId, PropertySurface>,
    pub(crate) collections: IndexMap<CollectionId, InterpretationCollection>,
    pub(crate) roots: Vec<CollectionId>,
}

impl Project {
    /// Start building a project.
    pub fn builder(name: impl Into<String>) -> ProjectBuilder {
        ProjectBuilder {
            project: Project {
                name: name.into(),
                next_id: 1,
                generation: ProjectGeneration(0),
                volumes: IndexMap::new(),
                horizons: IndexMap::new(),
                faults: IndexMap::new(),
                properties: IndexMap::new(),
                collections: IndexMap::new(),
                roots: Vec::new(),
            },
        }
    }

    /// Open a transaction.
    ///
    /// The transaction borrows the project mutably for its whole
    /// lifetime; commit it to publish, drop it to abandon.
    pub fn begin(&mut self) -> Transaction<'_> {
        Transaction::new(self)
    }

    /// Project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of committed transactions.
    pub fn generation(&self) -> ProjectGeneration {
        self.generation
    }

    /// Look up a volume.
    pub fn volume(&self, id: VolumeId) -> Option<&Arc<dyn Volume>> {
        self.volumes.get(&id)
    }

    /// All volumes, in registration order.
    pub fn volumes(&self) -> impl Iterator<Item = (VolumeId, &Arc<dyn Volume>)> {
        self.volumes.iter().map(|(&id, v)| (id, v))
    }

    /// Look up a horizon.
    pub fn horizon(&self, id: HorizonId) -> Option<&HorizonInterpretation> {
        self.horizons.get(&id)
    }

    /// All horizons, in registration order.
    pub fn horizons(&self) -> impl Iterator<Item = &HorizonInterpretation> {
        self.horizons.values()
    }

    /// Look up a fault.
    pub fn fault(&self, id: FaultId) -> Option<&FaultInterpretation> {
        self.faults.get(&id)
    }

    /// All faults, in registration order.
    pub fn faults(&self) -> impl Iterator<Item = &FaultInterpretation> {
        self.faults.values()
    }

    /// Look up a property surface.
    pub fn property(&self, id: PropertyId) -> Option<&PropertySurface> {
        self.properties.get(&id)
    }

    /// All property surfaces, in creation order.
    pub fn properties(&self) -> impl Iterator<Item = &PropertySurface> {
        self.properties.values()
    }

    /// Look up a collection.
    pub fn collection(&self, id: CollectionId) -> Option<&InterpretationCollection> {
        self.collections.get(&id)
    }

    /// Top-level collections, in insertion order.
    pub fn roots(&self) -> &[CollectionId] {
        &self.roots
    }

    /// Total number of collections in the tree.
    pub fn collection_count(&self) -> usize {
        self.collections.len()
    }
}

/// Loads objects into a new [`Project`].
///
/// Population stands in for the host application's data loading and is
/// not subject to the transaction discipline; once built, the project
/// only changes through transactions.
pub struct ProjectBuilder {
    project: Project,
}

impl ProjectBuilder {
    fn alloc(&mut self) -> u64 {
        let id = self.project.next_id;
        self.project.next_id += 1;
        id
    }

    /// Register a volume.
    pub fn add_volume(&mut self, volume: impl Volume) -> VolumeId {
        self.add_shared_volume(Arc::new(volume))
    }

    /// Register a volume that is shared with other owners.
    pub fn add_shared_volume(&mut self, volume: Arc<dyn Volume>) -> VolumeId {
        let id = VolumeId(self.alloc());
        self.project.volumes.insert(id, volume);
        id
    }

    /// Register a horizon interpretation with no projections yet.
    pub fn add_horizon(&mut self, name: impl Into<String>, domain: Domain) -> HorizonId {
        let id = HorizonId(self.alloc());
        self.project
            .horizons
            .insert(id, HorizonInterpretation::new(id, name.into(), domain));
        id
    }

    /// Attach the projection of `horizon` onto `survey`.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownHorizon`] or [`StoreError::DuplicateProjection`].
    pub fn add_projection(
        &mut self,
        horizon: HorizonId,
        survey: SurveyId,
        points: Vec<Point3>,
    ) -> Result<(), StoreError> {
        let h = self
            .project
            .horizons
            .get_mut(&horizon)
            .ok_or(StoreError::UnknownHorizon { horizon })?;
        if h.has_projection(survey) {
            return Err(StoreError::DuplicateProjection { horizon, survey });
        }
        h.insert_projection(HorizonInterpretation3D::new(survey, points));
        Ok(())
    }

    /// Create a collection under `parent`, or a new root when `parent`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownCollection`] if `parent` does not exist.
    pub fn add_collection(
        &mut self,
        parent: Option<CollectionId>,
        name: impl Into<String>,
    ) -> Result<CollectionId, StoreError> {
        if let Some(p) = parent {
            if !self.project.collections.contains_key(&p) {
                return Err(StoreError::UnknownCollection { collection: p });
            }
        }
        let id = CollectionId(self.alloc());
        self.project
            .collections
            .insert(id, InterpretationCollection::new(id, name.into()));
        match parent {
            Some(p) => {
                if let Some(parent) = self.project.collections.get_mut(&p) {
                    parent.push_child(id);
                }
            }
            None => self.project.roots.push(id),
        }
        Ok(id)
    }

    /// Create a fault inside `collection`.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownCollection`] if `collection` does not exist.
    pub fn add_fault(
        &mut self,
        collection: CollectionId,
        name: impl Into<String>,
        domain: Domain,
        polylines: Vec<FaultPolyline>,
    ) -> Result<FaultId, StoreError> {
        if !self.project.collections.contains_key(&collection) {
            return Err(StoreError::UnknownCollection { collection });
        }
        let id = FaultId(self.alloc());
        self.project.faults.insert(
            id,
            FaultInterpretation::new(id, name.into(), domain, polylines),
        );
        if let Some(c) = self.project.collections.get_mut(&collection) {
            c.push_fault(id);
        }
        Ok(id)
    }

    /// Finish loading.
    pub fn build(self) -> Project {
        self.project
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_grid::SeismicCube;

    #[test]
    fn ids_are_unique_across_kinds() {
        let mut b = Project::builder("p");
        let v = b.add_volume(
            SeismicCube::builder()
                .extents(1, 1, 1)
                .samples(vec![0.0])
                .build()
                .unwrap(),
        );
        let h = b.add_horizon("H", Domain::Time);
        let c = b.add_collection(None, "root").unwrap();
        let f = b.add_fault(c, "F", Domain::Time, vec![]).unwrap();
        let raw = [v.0, h.0, c.0, f.0];
        for (n, a) in raw.iter().enumerate() {
            assert!(raw[n + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn tree_links_children_and_roots() {
        let mut b = Project::builder("p");
        let r1 = b.add_collection(None, "r1").unwrap();
        let r2 = b.add_collection(None, "r2").unwrap();
        let child = b.add_collection(Some(r1), "child").unwrap();
        let p = b.build();
        assert_eq!(p.roots(), &[r1, r2]);
        assert_eq!(p.collection(r1).unwrap().children(), &[child]);
        assert!(p.collection(r2).unwrap().is_leaf());
        assert_eq!(p.collection_count(), 3);
    }

    #[test]
    fn builder_rejects_unknown_parents_and_duplicate_projections() {
        let mut b = Project::builder("p");
        assert_eq!(
            b.add_collection(Some(CollectionId(99)), "x").unwrap_err(),
            StoreError::UnknownCollection {
                collection: CollectionId(99)
            }
        );
        assert!(b.add_fault(CollectionId(99), "F", Domain::Time, vec![]).is_err());
        let h = b.add_horizon("H", Domain::Depth);
        b.add_projection(h, SurveyId(1), vec![]).unwrap();
        assert_eq!(
            b.add_projection(h, SurveyId(1), vec![]).unwrap_err(),
            StoreError::DuplicateProjection {
                horizon: h,
                survey: SurveyId(1)
            }
        );
        assert_eq!(
            b.add_projection(HorizonId(1234), SurveyId(1), vec![]).unwrap_err(),
            StoreError::UnknownHorizon {
                horizon: HorizonId(1234)
            }
        );
    }
}
