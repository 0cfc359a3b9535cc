//! Lock-then-commit transactions over a [`Project`].
//!
//! A [`Transaction`] stages copy-on-write clones of every object it
//! locks. Mutating accessors only reach staged clones, so nothing is
//! visible in the project until [`Transaction::commit`] moves the
//! staging set over in one step. Dropping an uncommitted transaction
//! discards the staging set and leaves the project untouched.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use strata_core::{
    CollectionId, FaultId, HorizonId, Point3, ProjectGeneration, PropertyId, Template, VolumeId,
};
use strata_grid::Volume;

use crate::collection::InterpretationCollection;
use crate::error::TxError;
use crate::fault::{FaultInterpretation, FaultPolyline};
use crate::horizon::HorizonInterpretation;
use crate::project::Project;
use crate::property::{PropertyOwner, PropertySurface};

/// A lockable project object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectRef {
    /// A horizon interpretation (including all of its projections).
    Horizon(HorizonId),
    /// A fault interpretation.
    Fault(FaultId),
    /// A property surface.
    Property(PropertyId),
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizon(id) => write!(f, "{id}"),
            Self::Fault(id) => write!(f, "{id}"),
            Self::Property(id) => write!(f, "{id}"),
        }
    }
}

impl From<HorizonId> for ObjectRef {
    fn from(id: HorizonId) -> Self {
        Self::Horizon(id)
    }
}

impl From<FaultId> for ObjectRef {
    fn from(id: FaultId) -> Self {
        Self::Fault(id)
    }
}

impl From<PropertyId> for ObjectRef {
    fn from(id: PropertyId) -> Self {
        Self::Property(id)
    }
}

/// Result of a [`Transaction::lock`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    /// The object was not locked before this call.
    Acquired,
    /// The object was already locked (or created) in this transaction.
    AlreadyLocked,
}

/// What a commit published.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitSummary {
    /// Project generation after the commit.
    pub generation: ProjectGeneration,
    /// Horizons written back.
    pub horizons_written: usize,
    /// Faults written back.
    pub faults_written: usize,
    /// Pre-existing properties written back.
    pub properties_written: usize,
    /// Properties created by this transaction.
    pub properties_created: usize,
}

/// An open mutation scope on a project.
///
/// Created by [`Project::begin`]. Every object must be
/// [`lock`](Self::lock)ed before it is mutated; locking twice is a no-op.
/// Reads through the transaction see staged state first, then the
/// published project.
#[must_use = "dropping a transaction without commit() discards its changes"]
pub struct Transaction<'a> {
    project: &'a mut Project,
    horizons: IndexMap<HorizonId, HorizonInterpretation>,
    faults: IndexMap<FaultId, FaultInterpretation>,
    properties: IndexMap<PropertyId, PropertySurface>,
    created: Vec<PropertyId>,
    next_id: u64,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(project: &'a mut Project) -> Self {
        let next_id = project.next_id;
        Self {
            project,
            horizons: IndexMap::new(),
            faults: IndexMap::new(),
            properties: IndexMap::new(),
            created: Vec::new(),
            next_id,
            finished: false,
        }
    }

    // ── Locking ────────────────────────────────────────────────────

    /// Lock an object for mutation, staging a copy of its published
    /// state.
    ///
    /// # Errors
    ///
    /// [`TxError::UnknownObject`] if the object does not exist.
    pub fn lock(&mut self, object: impl Into<ObjectRef>) -> Result<LockState, TxError> {
        let object = object.into();
        if self.is_locked(object) {
            return Ok(LockState::AlreadyLocked);
        }
        let unknown = TxError::UnknownObject { object };
        match object {
            ObjectRef::Horizon(id) => {
                let h = self.project.horizons.get(&id).ok_or(unknown)?.clone();
                self.horizons.insert(id, h);
            }
            ObjectRef::Fault(id) => {
                let f = self.project.faults.get(&id).ok_or(unknown)?.clone();
                self.faults.insert(id, f);
            }
            ObjectRef::Property(id) => {
                let p = self.project.properties.get(&id).ok_or(unknown)?.clone();
                self.properties.insert(id, p);
            }
        }
        Ok(LockState::Acquired)
    }

    /// Returns `true` if the object is locked (or was created) in this
    /// transaction.
    pub fn is_locked(&self, object: impl Into<ObjectRef>) -> bool {
        match object.into() {
            ObjectRef::Horizon(id) => self.horizons.contains_key(&id),
            ObjectRef::Fault(id) => self.faults.contains_key(&id),
            ObjectRef::Property(id) => self.properties.contains_key(&id),
        }
    }

    /// Number of staged objects (locked plus created).
    pub fn staged_count(&self) -> usize {
        self.horizons.len() + self.faults.len() + self.properties.len()
    }

    fn exists(&self, object: ObjectRef) -> bool {
        match object {
            ObjectRef::Horizon(id) => self.project.horizons.contains_key(&id),
            ObjectRef::Fault(id) => self.project.faults.contains_key(&id),
            ObjectRef::Property(id) => {
                self.project.properties.contains_key(&id) || self.properties.contains_key(&id)
            }
        }
    }

    /// Error for an object that is not staged.
    fn unstaged(&self, object: ObjectRef) -> TxError {
        if self.exists(object) {
            TxError::NotLocked { object }
        } else {
            TxError::UnknownObject { object }
        }
    }

    // ── Reads ──────────────────────────────────────────────────────

    /// Look up a volume. Volumes are read-only.
    pub fn volume(&self, id: VolumeId) -> Option<&Arc<dyn Volume>> {
        self.project.volumes.get(&id)
    }

    /// Look up a horizon, staged copy first.
    pub fn horizon(&self, id: HorizonId) -> Option<&HorizonInterpretation> {
        self.horizons
            .get(&id)
            .or_else(|| self.project.horizons.get(&id))
    }

    /// Look up a fault, staged copy first.
    pub fn fault(&self, id: FaultId) -> Option<&FaultInterpretation> {
        self.faults.get(&id).or_else(|| self.project.faults.get(&id))
    }

    /// Look up a property surface, staged copy first.
    pub fn property(&self, id: PropertyId) -> Option<&PropertySurface> {
        self.properties
            .get(&id)
            .or_else(|| self.project.properties.get(&id))
    }

    /// Look up a collection. Collections are read-only.
    pub fn collection(&self, id: CollectionId) -> Option<&InterpretationCollection> {
        self.project.collections.get(&id)
    }

    /// Top-level collections of the project.
    pub fn roots(&self) -> &[CollectionId] {
        &self.project.roots
    }

    /// Find the property of `fault` keyed by `(name, template)`.
    ///
    /// # Errors
    ///
    /// [`TxError::UnknownObject`] if the fault does not exist.
    pub fn find_property(
        &self,
        fault: FaultId,
        name: &str,
        template: &Template,
    ) -> Result<Option<PropertyId>, TxError> {
        let f = self.fault(fault).ok_or(TxError::UnknownObject {
            object: ObjectRef::Fault(fault),
        })?;
        Ok(f.properties().iter().copied().find(|&pid| {
            self.property(pid)
                .is_some_and(|p| p.matches_key(name, template))
        }))
    }

    // ── Mutations ──────────────────────────────────────────────────

    /// Mutable access to a locked property surface.
    ///
    /// # Errors
    ///
    /// [`TxError::NotLocked`] or [`TxError::UnknownObject`].
    pub fn property_mut(&mut self, id: PropertyId) -> Result<&mut PropertySurface, TxError> {
        let object = ObjectRef::Property(id);
        if !self.properties.contains_key(&id) {
            return Err(self.unstaged(object));
        }
        self.properties
            .get_mut(&id)
            .ok_or(TxError::UnknownObject { object })
    }

    /// Replace the polylines of a locked fault.
    ///
    /// # Errors
    ///
    /// [`TxError::NotLocked`] or [`TxError::UnknownObject`].
    pub fn set_polylines(
        &mut self,
        fault: FaultId,
        polylines: Vec<FaultPolyline>,
    ) -> Result<(), TxError> {
        let object = ObjectRef::Fault(fault);
        if !self.faults.contains_key(&fault) {
            return Err(self.unstaged(object));
        }
        let f = self
            .faults
            .get_mut(&fault)
            .ok_or(TxError::UnknownObject { object })?;
        f.set_polylines(polylines);
        Ok(())
    }

    /// Create a property on a locked owner, named after its template.
    ///
    /// See [`create_named_property`](Self::create_named_property).
    pub fn create_property(
        &mut self,
        owner: PropertyOwner,
        template: &Template,
    ) -> Result<PropertyId, TxError> {
        self.create_named_property(owner, template.name(), template)
    }

    /// Create a property on a locked owner.
    ///
    /// One undefined record is seeded per owner point: the projection's
    /// nodes for a horizon, every polyline point in order for a fault.
    /// The new property counts as locked.
    ///
    /// # Errors
    ///
    /// - [`TxError::NotLocked`] / [`TxError::UnknownObject`] for the owner.
    /// - [`TxError::MissingProjection`] if a horizon owner has no
    ///   projection on the survey.
    /// - [`TxError::DuplicateProperty`] if a fault owner already has a
    ///   property keyed by `(name, template)`.
    pub fn create_named_property(
        &mut self,
        owner: PropertyOwner,
        name: &str,
        template: &Template,
    ) -> Result<PropertyId, TxError> {
        let points: Vec<Point3> = match owner {
            PropertyOwner::Horizon { horizon, survey } => {
                let Some(h) = self.horizons.get(&horizon) else {
                    return Err(self.unstaged(ObjectRef::Horizon(horizon)));
                };
                let projection = h
                    .resolve(survey)
                    .ok_or(TxError::MissingProjection { horizon, survey })?;
                projection.points().to_vec()
            }
            PropertyOwner::Fault(fault) => {
                if !self.faults.contains_key(&fault) {
                    return Err(self.unstaged(ObjectRef::Fault(fault)));
                }
                if self.find_property(fault, name, template)?.is_some() {
                    return Err(TxError::DuplicateProperty {
                        fault,
                        name: name.to_string(),
                        template: template.clone(),
                    });
                }
                self.faults
                    .get(&fault)
                    .map(|f| f.points().map(|p| p.geometry).collect())
                    .unwrap_or_default()
            }
        };

        let id = PropertyId(self.next_id);
        match owner {
            PropertyOwner::Horizon { horizon, survey } => {
                if let Some(p) = self
                    .horizons
                    .get_mut(&horizon)
                    .and_then(|h| h.resolve_mut(survey))
                {
                    p.push_property(id);
                }
            }
            PropertyOwner::Fault(fault) => {
                if let Some(f) = self.faults.get_mut(&fault) {
                    f.push_property(id);
                }
            }
        }
        self.next_id += 1;
        self.properties.insert(
            id,
            PropertySurface::seeded(id, name.to_string(), template.clone(), owner, points),
        );
        self.created.push(id);
        Ok(id)
    }

    /// Rename a locked property.
    ///
    /// # Errors
    ///
    /// - [`TxError::NotLocked`] / [`TxError::UnknownObject`].
    /// - [`TxError::DuplicateProperty`] if the property belongs to a fault
    ///   that already has another property with the new key.
    pub fn set_property_name(&mut self, id: PropertyId, name: &str) -> Result<(), TxError> {
        let object = ObjectRef::Property(id);
        let Some(p) = self.properties.get(&id) else {
            return Err(self.unstaged(object));
        };
        if let PropertyOwner::Fault(fault) = p.owner() {
            let template = p.template().clone();
            if let Some(other) = self.find_property(fault, name, &template)? {
                if other != id {
                    return Err(TxError::DuplicateProperty {
                        fault,
                        name: name.to_string(),
                        template,
                    });
                }
            }
        }
        let p = self
            .properties
            .get_mut(&id)
            .ok_or(TxError::UnknownObject { object })?;
        p.set_name(name.to_string());
        Ok(())
    }

    // ── Completion ─────────────────────────────────────────────────

    /// Publish every staged change and bump the project generation.
    pub fn commit(mut self) -> CommitSummary {
        let horizons = std::mem::take(&mut self.horizons);
        let faults = std::mem::take(&mut self.faults);
        let properties = std::mem::take(&mut self.properties);
        let created = std::mem::take(&mut self.created);

        let summary = CommitSummary {
            generation: ProjectGeneration(self.project.generation.0 + 1),
            horizons_written: horizons.len(),
            faults_written: faults.len(),
            properties_written: properties.len() - created.len(),
            properties_created: created.len(),
        };

        self.project.horizons.extend(horizons);
        self.project.faults.extend(faults);
        self.project.properties.extend(properties);
        self.project.next_id = self.next_id;
        self.project.generation = summary.generation;
        self.finished = true;

        tracing::info!(
            generation = summary.generation.0,
            horizons = summary.horizons_written,
            faults = summary.faults_written,
            properties = summary.properties_written,
            created = summary.properties_created,
            "transaction committed"
        );
        summary
    }

    /// Discard every staged change. Equivalent to dropping.
    pub fn abandon(self) {}
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished && self.staged_count() > 0 {
            tracing::debug!(
                staged = self.staged_count(),
                created = self.created.len(),
                "transaction abandoned without commit"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fault::{Context, ContextPoint};
    use crate::hash::project_hash;
    use strata_core::{Domain, SurveyId};
    use strata_grid::SeismicCube;

    struct Fixture {
        project: Project,
        horizon: HorizonId,
        fault: FaultId,
    }

    fn fixture() -> Fixture {
        let mut b = Project::builder("tx");
        b.add_volume(
            SeismicCube::builder()
                .extents(2, 2, 2)
                .samples(vec![0.0; 8])
                .build()
                .unwrap(),
        );
        let horizon = b.add_horizon("H1", Domain::Time);
        b.add_projection(
            horizon,
            SurveyId(0),
            vec![Point3::new(0.0, 0.0, 1.0), Point3::new(1.0, 1.0, 1.0)],
        )
        .unwrap();
        let root = b.add_collection(None, "root").unwrap();
        let fault = b
            .add_fault(
                root,
                "F1",
                Domain::Time,
                vec![FaultPolyline::from_positions([
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(0.0, 1.0, 1.0),
                    Point3::new(1.0, 1.0, 1.0),
                ])],
            )
            .unwrap();
        Fixture {
            project: b.build(),
            horizon,
            fault,
        }
    }

    fn seismic() -> Template {
        Template::new("Seismic")
    }

    #[test]
    fn relock_is_a_no_op() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        assert_eq!(tx.lock(fx.fault).unwrap(), LockState::Acquired);
        assert_eq!(tx.lock(fx.fault).unwrap(), LockState::AlreadyLocked);
        assert_eq!(tx.staged_count(), 1);
    }

    #[test]
    fn lock_unknown_object_fails() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        assert_eq!(
            tx.lock(FaultId(999)).unwrap_err(),
            TxError::UnknownObject {
                object: ObjectRef::Fault(FaultId(999))
            }
        );
    }

    #[test]
    fn mutation_requires_lock() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        assert_eq!(
            tx.set_polylines(fx.fault, vec![]).unwrap_err(),
            TxError::NotLocked {
                object: ObjectRef::Fault(fx.fault)
            }
        );
        assert_eq!(
            tx.create_property(PropertyOwner::Fault(fx.fault), &seismic())
                .unwrap_err(),
            TxError::NotLocked {
                object: ObjectRef::Fault(fx.fault)
            }
        );
        assert_eq!(
            tx.property_mut(PropertyId(4242)).unwrap_err(),
            TxError::UnknownObject {
                object: ObjectRef::Property(PropertyId(4242))
            }
        );
    }

    #[test]
    fn created_horizon_property_is_seeded_undefined() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        tx.lock(fx.horizon).unwrap();
        let owner = PropertyOwner::Horizon {
            horizon: fx.horizon,
            survey: SurveyId(0),
        };
        let id = tx.create_property(owner, &seismic()).unwrap();
        assert!(tx.is_locked(id));
        let p = tx.property(id).unwrap();
        assert_eq!(p.len(), 2);
        assert_eq!(p.name(), "Seismic");
        assert_eq!(p.defined_count(), 0);
        let summary = tx.commit();
        assert_eq!(summary.properties_created, 1);
        assert_eq!(summary.horizons_written, 1);
        assert_eq!(summary.generation, ProjectGeneration(1));
        let proj = fx.project.horizon(fx.horizon).unwrap().resolve(SurveyId(0)).unwrap();
        assert_eq!(proj.properties(), &[id]);
    }

    #[test]
    fn missing_projection_is_reported() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        tx.lock(fx.horizon).unwrap();
        let owner = PropertyOwner::Horizon {
            horizon: fx.horizon,
            survey: SurveyId(7),
        };
        assert_eq!(
            tx.create_property(owner, &seismic()).unwrap_err(),
            TxError::MissingProjection {
                horizon: fx.horizon,
                survey: SurveyId(7)
            }
        );
    }

    #[test]
    fn fault_property_keys_are_unique() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        tx.lock(fx.fault).unwrap();
        let owner = PropertyOwner::Fault(fx.fault);
        let a = tx.create_named_property(owner, "amp", &seismic()).unwrap();
        assert_eq!(tx.property(a).unwrap().len(), 3);
        assert!(matches!(
            tx.create_named_property(owner, "amp", &seismic()),
            Err(TxError::DuplicateProperty { .. })
        ));
        let b = tx.create_property(owner, &seismic()).unwrap();
        assert!(matches!(
            tx.set_property_name(b, "amp"),
            Err(TxError::DuplicateProperty { .. })
        ));
        tx.set_property_name(b, "amp2").unwrap();
        assert_eq!(tx.find_property(fx.fault, "amp", &seismic()).unwrap(), Some(a));
        assert_eq!(tx.find_property(fx.fault, "amp2", &seismic()).unwrap(), Some(b));
        assert_eq!(
            tx.find_property(fx.fault, "amp", &Template::new("Other")).unwrap(),
            None
        );
    }

    #[test]
    fn reads_see_staged_state() {
        let mut fx = fixture();
        let mut tx = fx.project.begin();
        tx.lock(fx.fault).unwrap();
        let mut lines = tx.fault(fx.fault).unwrap().polylines().to_vec();
        for p in lines[0].points_mut() {
            p.context = Context::Volume(VolumeId(1));
        }
        tx.set_polylines(fx.fault, lines).unwrap();
        assert!(tx
            .fault(fx.fault)
            .unwrap()
            .points()
            .all(|p| p.context == Context::Volume(VolumeId(1))));
        tx.commit();
        assert!(fx
            .project
            .fault(fx.fault)
            .unwrap()
            .points()
            .all(|p| p.context == Context::Volume(VolumeId(1))));
    }

    #[test]
    fn dropped_transaction_leaves_project_unchanged() {
        let mut fx = fixture();
        let before = project_hash(&fx.project);
        {
            let mut tx = fx.project.begin();
            tx.lock(fx.fault).unwrap();
            tx.lock(fx.horizon).unwrap();
            let id = tx
                .create_property(PropertyOwner::Fault(fx.fault), &seismic())
                .unwrap();
            tx.property_mut(id).unwrap().records_mut()[0].set_value(1.0);
            tx.set_polylines(
                fx.fault,
                vec![FaultPolyline::new(vec![ContextPoint::new(Point3::default())])],
            )
            .unwrap();
        }
        assert_eq!(project_hash(&fx.project), before);
        assert_eq!(fx.project.generation(), ProjectGeneration(0));
        assert_eq!(fx.project.properties().count(), 0);
    }

    #[test]
    fn ids_allocated_in_abandoned_transaction_are_reused() {
        let mut fx = fixture();
        let owner = PropertyOwner::Fault(fx.fault);
        let first = {
            let mut tx = fx.project.begin();
            tx.lock(fx.fault).unwrap();
            let id = tx.create_property(owner, &seismic()).unwrap();
            tx.abandon();
            id
        };
        let mut tx = fx.project.begin();
        tx.lock(fx.fault).unwrap();
        assert_eq!(tx.create_property(owner, &seismic()).unwrap(), first);
    }
}
