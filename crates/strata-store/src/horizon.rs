//! Horizon interpretations and their per-survey projections.

use indexmap::IndexMap;
use strata_core::{Domain, HorizonId, Point3, PropertyId, SurveyId};

/// A named horizon interpretation.
///
/// The interpretation itself is survey-independent; sampling happens on
/// a [`HorizonInterpretation3D`], its projection onto one survey's
/// lateral grid, obtained with [`resolve`](Self::resolve).
#[derive(Clone, Debug)]
pub struct HorizonInterpretation {
    id: HorizonId,
    name: String,
    domain: Domain,
    projections: IndexMap<SurveyId, HorizonInterpretation3D>,
}

impl HorizonInterpretation {
    pub(crate) fn new(id: HorizonId, name: String, domain: Domain) -> Self {
        Self {
            id,
            name,
            domain,
            projections: IndexMap::new(),
        }
    }

    /// Identifier of this horizon.
    pub fn id(&self) -> HorizonId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vertical domain.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The projection onto `survey`, if the horizon has been interpreted
    /// there.
    pub fn resolve(&self, survey: SurveyId) -> Option<&HorizonInterpretation3D> {
        self.projections.get(&survey)
    }

    pub(crate) fn resolve_mut(&mut self, survey: SurveyId) -> Option<&mut HorizonInterpretation3D> {
        self.projections.get_mut(&survey)
    }

    /// All projections, in insertion order.
    pub fn projections(&self) -> impl Iterator<Item = &HorizonInterpretation3D> {
        self.projections.values()
    }

    /// Returns `true` if a projection for `survey` exists.
    pub fn has_projection(&self, survey: SurveyId) -> bool {
        self.projections.contains_key(&survey)
    }

    pub(crate) fn insert_projection(&mut self, projection: HorizonInterpretation3D) {
        self.projections.insert(projection.survey, projection);
    }
}

/// Projection of a horizon onto one survey's lateral grid.
///
/// Holds the interpreted nodes and the property surfaces created on
/// them.
#[derive(Clone, Debug)]
pub struct HorizonInterpretation3D {
    survey: SurveyId,
    points: Vec<Point3>,
    properties: Vec<PropertyId>,
}

impl HorizonInterpretation3D {
    pub(crate) fn new(survey: SurveyId, points: Vec<Point3>) -> Self {
        Self {
            survey,
            points,
            properties: Vec::new(),
        }
    }

    /// Survey of this projection.
    pub fn survey(&self) -> SurveyId {
        self.survey
    }

    /// Interpreted nodes, in insertion order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Properties owned by this projection, in creation order.
    pub fn properties(&self) -> &[PropertyId] {
        &self.properties
    }

    pub(crate) fn push_property(&mut self, id: PropertyId) {
        self.properties.push(id);
    }
}
