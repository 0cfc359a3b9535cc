//! Attribute propagation across the fault collection tree.

use std::sync::Arc;

use strata_core::{CollectionId, FaultId, InputRole, PropertyId, Template, VolumeId};
use strata_grid::Volume;
use strata_store::{Context, ObjectRef, Project, PropertyOwner, Transaction, TxError};

use crate::config::FaultPropagation;
use crate::error::{missing, ExtractError};
use crate::report::PropagationReport;
use crate::sampler::sample_records;

const OPERATION: &str = "fault propagation";

/// Samples one volume onto every fault reachable from the project's root
/// collections.
///
/// The tree is walked pre-order: the faults of a collection first, then
/// its children, both in insertion order. Every fault is visited once.
/// For each fault in the volume's domain the propagator
///
/// 1. locks the fault,
/// 2. finds the property keyed by `(name, volume template)` and locks it,
///    or creates it,
/// 3. points every polyline point's context at the volume and stores the
///    polylines back,
/// 4. resets the property to undefined and samples the volume onto it.
///
/// Faults in another domain are counted and left alone.
pub struct FaultPropagator {
    volume_id: VolumeId,
    volume: Arc<dyn Volume>,
    name: String,
    template: Template,
}

impl FaultPropagator {
    /// Create a propagator writing property `name` from `volume`.
    pub fn new(volume_id: VolumeId, volume: Arc<dyn Volume>, name: impl Into<String>) -> Self {
        let template = volume.template().clone();
        Self {
            volume_id,
            volume,
            name: name.into(),
            template,
        }
    }

    /// Property name written on each fault.
    pub fn property_name(&self) -> &str {
        &self.name
    }

    /// Walk the whole tree inside `tx`.
    ///
    /// Nothing is committed here; on error the caller drops `tx` and the
    /// project is unchanged.
    ///
    /// # Errors
    ///
    /// Any [`TxError`] from the store.
    pub fn run(&self, tx: &mut Transaction<'_>) -> Result<PropagationReport, TxError> {
        let mut report = PropagationReport::default();
        let mut pending: Vec<CollectionId> = tx.roots().iter().rev().copied().collect();
        while let Some(id) = pending.pop() {
            let Some(collection) = tx.collection(id) else {
                continue;
            };
            let faults = collection.faults().to_vec();
            pending.extend(collection.children().iter().rev().copied());
            report.collections_visited += 1;
            for fault in faults {
                self.visit_fault(tx, fault, &mut report)?;
            }
        }
        Ok(report)
    }

    fn visit_fault(
        &self,
        tx: &mut Transaction<'_>,
        id: FaultId,
        report: &mut PropagationReport,
    ) -> Result<(), TxError> {
        report.faults_visited += 1;
        let fault = tx.fault(id).ok_or(TxError::UnknownObject {
            object: ObjectRef::Fault(id),
        })?;
        if fault.domain() != self.volume.domain() {
            report.faults_skipped += 1;
            tracing::debug!(
                fault = %id,
                fault_domain = %fault.domain(),
                volume_domain = %self.volume.domain(),
                "skipping fault in another domain"
            );
            return Ok(());
        }

        tx.lock(id)?;
        let property = self.find_or_create(tx, id, report)?;

        let mut polylines = tx
            .fault(id)
            .map(|f| f.polylines().to_vec())
            .unwrap_or_default();
        for line in &mut polylines {
            for point in line.points_mut() {
                point.context = Context::Volume(self.volume_id);
            }
        }
        tx.set_polylines(id, polylines)?;

        let surface = tx.property_mut(property)?;
        surface.reset_values();
        let stats = sample_records(self.volume.as_ref(), surface.records_mut());
        report.stats += stats;
        report.faults_updated += 1;
        tracing::debug!(
            fault = %id,
            property = %property,
            visited = stats.visited,
            sampled = stats.sampled,
            "sampled fault property"
        );
        Ok(())
    }

    fn find_or_create(
        &self,
        tx: &mut Transaction<'_>,
        fault: FaultId,
        report: &mut PropagationReport,
    ) -> Result<PropertyId, TxError> {
        match tx.find_property(fault, &self.name, &self.template)? {
            Some(existing) => {
                tx.lock(existing)?;
                report.properties_reused += 1;
                Ok(existing)
            }
            None => {
                let created =
                    tx.create_named_property(PropertyOwner::Fault(fault), &self.name, &self.template)?;
                report.properties_created += 1;
                Ok(created)
            }
        }
    }
}

/// Sample a volume onto every fault in the project, in one transaction.
///
/// # Errors
///
/// - [`ExtractError::Config`] for a blank property name.
/// - [`ExtractError::MissingInput`] if the volume is absent.
/// - [`ExtractError::Transaction`] if the store rejects an operation; the
///   transaction is abandoned and no fault changes.
pub fn propagate_fault_attribute(
    project: &mut Project,
    request: &FaultPropagation,
) -> Result<PropagationReport, ExtractError> {
    request.validate()?;
    let volume = project
        .volume(request.volume)
        .map(Arc::clone)
        .ok_or_else(|| missing(OPERATION, InputRole::Volume))?;
    let propagator = FaultPropagator::new(request.volume, volume, request.property_name.as_str());

    let mut tx = project.begin();
    let mut report = propagator.run(&mut tx)?;
    report.generation = tx.commit().generation;
    Ok(report)
}
