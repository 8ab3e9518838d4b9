//! Read-only, in-memory catalog of light samples.
//!
//! The catalog is supplied as static, pre-validated data. Loading only
//! deserialises it; no cleaning or range checks happen here.

use crate::{LightSample, MarkerStyle, NightMode, Position, ReductionRate, Resolution};

/// Errors raised while loading a catalog.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The payload was not a JSON array of samples.
    #[error("failed to decode light sample catalog: {source}")]
    Decode {
        /// Decoder error returned by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// An immutable collection of [`LightSample`] values.
///
/// # Examples
/// ```
/// use luminight_core::{LightCatalog, LightSample, Position};
///
/// let catalog = LightCatalog::new(vec![
///     LightSample::new(1, "A", 0.0, 0.0, 2000, 50.0),
///     LightSample::new(2, "B", 10.0, 10.0, 2020, 80.0),
/// ]);
/// assert_eq!(catalog.eligible(2010).count(), 1);
///
/// let here = Position::new(10.0, 10.0);
/// let nearest = catalog.resolve(Some(&here), 2025).expect("resolved");
/// assert_eq!(nearest.sample.name, "B");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightCatalog {
    samples: Vec<LightSample>,
}

impl LightCatalog {
    /// Wrap an existing set of samples.
    #[must_use]
    pub const fn new(samples: Vec<LightSample>) -> Self {
        Self { samples }
    }

    /// Decode a catalog from a JSON array of samples.
    ///
    /// # Errors
    /// Returns [`CatalogError::Decode`] when the payload is not a JSON array
    /// of sample objects.
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        let samples: Vec<LightSample> = serde_json::from_reader(reader)
            .map_err(|source| CatalogError::Decode { source })?;
        log::debug!("loaded {} light samples", samples.len());
        Ok(Self::new(samples))
    }

    /// All samples in catalog order.
    #[must_use]
    pub fn samples(&self) -> &[LightSample] {
        &self.samples
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the catalog holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples visible for the selected `year`, in catalog order.
    pub fn eligible(&self, year: i32) -> impl Iterator<Item = &LightSample> + '_ {
        self.samples
            .iter()
            .filter(move |sample| sample.is_eligible(year))
    }

    /// Nearest eligible sample to `position`; see [`crate::resolve_nearest`].
    #[must_use]
    pub fn resolve(&self, position: Option<&Position>, year: i32) -> Option<Resolution<'_>> {
        crate::resolve_nearest(&self.samples, position, year)
    }

    /// Marker styles for every sample, eligible or not, in catalog order.
    #[must_use]
    pub fn markers(&self, year: i32, mode: NightMode, rate: ReductionRate) -> Vec<MarkerStyle> {
        self.samples
            .iter()
            .map(|sample| MarkerStyle::for_sample(sample, year, mode, rate))
            .collect()
    }
}

impl From<Vec<LightSample>> for LightCatalog {
    fn from(samples: Vec<LightSample>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<LightSample> for LightCatalog {
    fn from_iter<I: IntoIterator<Item = LightSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
