//! Property surfaces: ordered point records carrying one scalar each.

use strata_core::{FaultId, HorizonId, Point3, PropertyId, SurveyId, Template};

/// One point of a property surface.
///
/// The geometry is fixed when the surface is created; only the value
/// changes. A freshly created record holds NaN ("undefined").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyPointRecord {
    geometry: Point3,
    value: f32,
}

impl PropertyPointRecord {
    /// Create an undefined record at `geometry`.
    pub fn undefined(geometry: Point3) -> Self {
        Self {
            geometry,
            value: f32::NAN,
        }
    }

    /// Position of this record.
    pub fn geometry(&self) -> Point3 {
        self.geometry
    }

    /// Current value (NaN when undefined).
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Overwrite the value.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Returns `true` if the value is still undefined.
    pub fn is_undefined(&self) -> bool {
        self.value.is_nan()
    }
}

/// The object a property surface is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyOwner {
    /// The projection of a horizon onto one survey.
    Horizon {
        /// Owning horizon.
        horizon: HorizonId,
        /// Survey of the owning projection.
        survey: SurveyId,
    },
    /// A fault interpretation.
    Fault(FaultId),
}

/// An ordered collection of point records with a name and template.
///
/// The record count and order are fixed at creation: extractions write
/// values in place and never resize or reorder.
#[derive(Clone, Debug)]
pub struct PropertySurface {
    id: PropertyId,
    name: String,
    template: Template,
    owner: PropertyOwner,
    records: Vec<PropertyPointRecord>,
}

impl PropertySurface {
    /// Seed a surface with one undefined record per point.
    pub(crate) fn seeded(
        id: PropertyId,
        name: String,
        template: Template,
        owner: PropertyOwner,
        points: impl IntoIterator<Item = Point3>,
    ) -> Self {
        Self {
            id,
            name,
            template,
            owner,
            records: points.into_iter().map(PropertyPointRecord::undefined).collect(),
        }
    }

    /// Identifier of this surface.
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// Template of the stored quantity.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Owning object.
    pub fn owner(&self) -> PropertyOwner {
        self.owner
    }

    /// Returns `true` if this surface is keyed by `(name, template)`.
    pub fn matches_key(&self, name: &str, template: &Template) -> bool {
        self.name == name && &self.template == template
    }

    /// The point records, in creation order.
    pub fn records(&self) -> &[PropertyPointRecord] {
        &self.records
    }

    /// Mutable access to the point records.
    ///
    /// A slice, so callers can rewrite values but not change the count.
    pub fn records_mut(&mut self) -> &mut [PropertyPointRecord] {
        &mut self.records
    }

    /// Set every value back to undefined.
    pub fn reset_values(&mut self) {
        for r in &mut self.records {
            r.value = f32::NAN;
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the surface has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records holding a defined value.
    pub fn defined_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_undefined()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> PropertySurface {
        PropertySurface::seeded(
            PropertyId(7),
            "amp".into(),
            Template::new("Seismic"),
            PropertyOwner::Fault(FaultId(1)),
            [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
        )
    }

    #[test]
    fn seeded_records_are_undefined() {
        let s = surface();
        assert_eq!(s.len(), 2);
        assert!(s.records().iter().all(PropertyPointRecord::is_undefined));
        assert_eq!(s.defined_count(), 0);
    }

    #[test]
    fn reset_values_clears_defined() {
        let mut s = surface();
        s.records_mut()[1].set_value(3.0);
        assert_eq!(s.defined_count(), 1);
        s.reset_values();
        assert_eq!(s.defined_count(), 0);
        assert_eq!(s.records()[1].geometry(), Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn key_matching() {
        let s = surface();
        assert!(s.matches_key("amp", &Template::new("Seismic")));
        assert!(!s.matches_key("amp", &Template::new("Velocity")));
        assert!(!s.matches_key("other", &Template::new("Seismic")));
    }
}
