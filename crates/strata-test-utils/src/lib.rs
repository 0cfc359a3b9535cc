//! Test utilities and mock types for strata development.
//!
//! Provides [`MockVolume`], a sparse [`Volume`] whose traces are set one
//! by one, and the reusable project fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use strata_core::{Domain, Index3, IndexDouble3, Point3, SurveyId, Template};
use strata_grid::{Trace, Volume};

/// Sparse mock volume with an identity position mapping.
///
/// `index_at_position` returns `(x, y, z)` unchanged, so tests can place
/// points directly on grid nodes. Only traces added with
/// [`set_trace`](MockVolume::set_trace) exist; every other lateral
/// position inside the extents reads as a lateral miss.
pub struct MockVolume {
    name: String,
    domain: Domain,
    template: Template,
    survey: SurveyId,
    extents: Index3,
    traces: HashMap<(i64, i64), Vec<f32>>,
}

impl MockVolume {
    /// Create an empty mock with the given extents.
    pub fn new(ni: i64, nj: i64, nk: i64) -> Self {
        Self {
            name: "mock".to_string(),
            domain: Domain::Time,
            template: Template::new("Seismic (default)"),
            survey: SurveyId(0),
            extents: Index3::new(ni, nj, nk),
            traces: HashMap::new(),
        }
    }

    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_survey(mut self, survey: SurveyId) -> Self {
        self.survey = survey;
        self
    }

    /// Pre-populate the trace at `(i, j)`.
    ///
    /// The trace may be shorter than the K extent; reads past its end
    /// behave as depth misses.
    pub fn set_trace(&mut self, i: i64, j: i64, samples: Vec<f32>) {
        self.traces.insert((i, j), samples);
    }

    /// Number of populated traces.
    pub fn trace_count(&self) -> usize {
        self.traces.len()
    }
}

impl Volume for MockVolume {
    fn name(&self) -> &str {
        &self.name
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn template(&self) -> &Template {
        &self.template
    }

    fn survey(&self) -> SurveyId {
        self.survey
    }

    fn num_samples_ijk(&self) -> Index3 {
        self.extents
    }

    fn index_at_position(&self, position: Point3) -> IndexDouble3 {
        IndexDouble3::new(position.x, position.y, position.z)
    }

    fn trace(&self, i: i64, j: i64) -> Option<Trace<'_>> {
        if !self.contains_lateral(i, j) {
            return None;
        }
        self.traces.get(&(i, j)).map(|s| Trace::new(s))
    }
}
