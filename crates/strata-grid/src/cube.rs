//! In-memory regular seismic cube.

use strata_core::{Domain, Index3, IndexDouble3, Point3, SurveyId, Template};

use crate::error::GridError;
use crate::trace::Trace;
use crate::transform::IndexTransform;
use crate::volume::Volume;

/// A regular 3D seismic cube held in memory.
///
/// Samples are stored I-major, then J, then K: the trace of cell
/// `(i, j)` is the contiguous run starting at `(i * nj + j) * nk`.
///
/// # Examples
///
/// ```
/// use strata_core::Domain;
/// use strata_grid::{SeismicCube, Volume};
///
/// let cube = SeismicCube::builder()
///     .domain(Domain::Time)
///     .extents(4, 3, 10)
///     .samples_from_fn(|_i, _j, k| k as f32)
///     .build()
///     .unwrap();
/// assert_eq!(cube.trace(2, 1).unwrap().sample(7), Some(7.0));
/// assert!(cube.trace(4, 0).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SeismicCube {
    name: String,
    domain: Domain,
    template: Template,
    survey: SurveyId,
    transform: IndexTransform,
    ni: u32,
    nj: u32,
    nk: u32,
    samples: Vec<f32>,
}

impl SeismicCube {
    /// Template assigned when the builder is not given one.
    pub const DEFAULT_TEMPLATE: &'static str = "Seismic (default)";

    /// Start building a cube.
    pub fn builder() -> CubeBuilder {
        CubeBuilder {
            name: "cube".to_string(),
            domain: Domain::Time,
            template: Template::new(Self::DEFAULT_TEMPLATE),
            survey: SurveyId(0),
            transform: IndexTransform::unit(),
            extents: None,
            samples: SampleSource::Unset,
        }
    }

    /// The cube's position-to-index transform.
    pub fn transform(&self) -> &IndexTransform {
        &self.transform
    }

    /// World position of an integer grid node.
    pub fn position_of(&self, index: Index3) -> Point3 {
        self.transform.position_at(IndexDouble3::new(
            index.i as f64,
            index.j as f64,
            index.k as f64,
        ))
    }

    fn trace_offset(&self, i: i64, j: i64) -> Option<usize> {
        if !self.contains_lateral(i, j) {
            return None;
        }
        let (i, j) = (i as usize, j as usize);
        Some((i * self.nj as usize + j) * self.nk as usize)
    }
}

impl Volume for SeismicCube {
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
        Index3::new(self.ni as i64, self.nj as i64, self.nk as i64)
    }

    fn index_at_position(&self, position: Point3) -> IndexDouble3 {
        self.transform.index_at(position)
    }

    fn trace(&self, i: i64, j: i64) -> Option<Trace<'_>> {
        let start = self.trace_offset(i, j)?;
        let end = start + self.nk as usize;
        self.samples.get(start..end).map(Trace::new)
    }
}

enum SampleSource {
    Unset,
    Buffer(Vec<f32>),
    Generated(Box<dyn Fn(u32, u32, u32) -> f32>),
}

/// Builder for [`SeismicCube`].
///
/// Extents and samples are required; everything else has a default
/// (time domain, survey 0, unit transform).
pub struct CubeBuilder {
    name: String,
    domain: Domain,
    template: Template,
    survey: SurveyId,
    transform: IndexTransform,
    extents: Option<(u32, u32, u32)>,
    samples: SampleSource,
}

impl CubeBuilder {
    /// Set the cube name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the vertical domain (default: time).
    pub fn domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Set the sample template.
    pub fn template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// Set the survey the cube belongs to (default: survey 0).
    pub fn survey(mut self, survey: SurveyId) -> Self {
        self.survey = survey;
        self
    }

    /// Set the position-to-index transform (default: identity).
    pub fn transform(mut self, transform: IndexTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Set the grid extents `(NumI, NumJ, NumK)`.
    pub fn extents(mut self, ni: u32, nj: u32, nk: u32) -> Self {
        self.extents = Some((ni, nj, nk));
        self
    }

    /// Supply the sample buffer in I, J, K order.
    pub fn samples(mut self, samples: Vec<f32>) -> Self {
        self.samples = SampleSource::Buffer(samples);
        self
    }

    /// Generate every sample from its `(i, j, k)` index at build time.
    pub fn samples_from_fn(mut self, f: impl Fn(u32, u32, u32) -> f32 + 'static) -> Self {
        self.samples = SampleSource::Generated(Box::new(f));
        self
    }

    /// Build the cube, validating extents and sample count.
    ///
    /// # Errors
    ///
    /// - [`GridError::MissingParameter`] if extents or samples were not set.
    /// - [`GridError::EmptyExtent`] if any extent is zero.
    /// - [`GridError::SampleCountMismatch`] if the buffer length is wrong.
    pub fn build(self) -> Result<SeismicCube, GridError> {
        let (ni, nj, nk) = self
            .extents
            .ok_or(GridError::MissingParameter { name: "extents" })?;
        if ni == 0 || nj == 0 || nk == 0 {
            return Err(GridError::EmptyExtent {
                extents: (ni, nj, nk),
            });
        }
        let expected = ni as usize * nj as usize * nk as usize;
        let samples = match self.samples {
            SampleSource::Unset => return Err(GridError::MissingParameter { name: "samples" }),
            SampleSource::Buffer(buf) => buf,
            SampleSource::Generated(f) => {
                let mut buf = Vec::with_capacity(expected);
                for i in 0..ni {
                    for j in 0..nj {
                        for k in 0..nk {
                            buf.push(f(i, j, k));
                        }
                    }
                }
                buf
            }
        };
        if samples.len() != expected {
            return Err(GridError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(SeismicCube {
            name: self.name,
            domain: self.domain,
            template: self.template,
            survey: self.survey,
            transform: self.transform,
            ni,
            nj,
            nk,
            samples,
        })
    }
}
