//! Fault interpretations: polylines of context points plus properties.

use strata_core::{Domain, FaultId, LineId, Point3, PropertyId, VolumeId};

/// The object a fault point's geometry is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Context {
    /// No context assigned yet.
    #[default]
    Unset,
    /// A 3D seismic volume.
    Volume(VolumeId),
    /// A 2D seismic line.
    SeismicLine(LineId),
}

/// A fault point together with its resolution context.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContextPoint {
    /// World position.
    pub geometry: Point3,
    /// What the position was picked on.
    pub context: Context,
}

impl ContextPoint {
    /// A point with no context.
    pub fn new(geometry: Point3) -> Self {
        Self {
            geometry,
            context: Context::Unset,
        }
    }

    /// A point picked on `context`.
    pub fn with_context(geometry: Point3, context: Context) -> Self {
        Self { geometry, context }
    }
}

/// An ordered run of context points tracing a fault stick.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FaultPolyline {
    points: Vec<ContextPoint>,
}

impl FaultPolyline {
    /// Build a polyline from its points.
    pub fn new(points: Vec<ContextPoint>) -> Self {
        Self { points }
    }

    /// Build a polyline of context-free points.
    pub fn from_positions(positions: impl IntoIterator<Item = Point3>) -> Self {
        Self {
            points: positions.into_iter().map(ContextPoint::new).collect(),
        }
    }

    /// The points, in order.
    pub fn points(&self) -> &[ContextPoint] {
        &self.points
    }

    /// Mutable access to the points.
    pub fn points_mut(&mut self) -> &mut [ContextPoint] {
        &mut self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polyline has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A fault interpretation.
///
/// Properties are keyed by `(name, template)`; the store rejects a second
/// property with the same key on the same fault.
#[derive(Clone, Debug)]
pub struct FaultInterpretation {
    id: FaultId,
    name: String,
    domain: Domain,
    polylines: Vec<FaultPolyline>,
    properties: Vec<PropertyId>,
}

impl FaultInterpretation {
    pub(crate) fn new(
        id: FaultId,
        name: String,
        domain: Domain,
        polylines: Vec<FaultPolyline>,
    ) -> Self {
        Self {
            id,
            name,
            domain,
            polylines,
            properties: Vec::new(),
        }
    }

    /// Identifier of this fault.
    pub fn id(&self) -> FaultId {
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

    /// The polylines, in order.
    pub fn polylines(&self) -> &[FaultPolyline] {
        &self.polylines
    }

    pub(crate) fn set_polylines(&mut self, polylines: Vec<FaultPolyline>) {
        self.polylines = polylines;
    }

    /// Every point of every polyline, in polyline order.
    pub fn points(&self) -> impl Iterator<Item = &ContextPoint> {
        self.polylines.iter().flat_map(|p| p.points.iter())
    }

    /// Properties owned by this fault, in creation order.
    pub fn properties(&self) -> &[PropertyId] {
        &self.properties
    }

    pub(crate) fn push_property(&mut self, id: PropertyId) {
        self.properties.push(id);
    }
}
