//! Selectable year range for the historical timeline.

use thiserror::Error;

/// First year offered by the timeline.
pub const DEFAULT_MIN_YEAR: i32 = 1990;
/// Last year offered by the timeline; also the initial selection.
pub const DEFAULT_MAX_YEAR: i32 = 2025;

/// Inclusive range of selectable years.
///
/// # Examples
/// ```
/// use luminight_core::YearRange;
///
/// let range = YearRange::default();
/// assert_eq!(range.default_year(), 2025);
/// assert_eq!(range.clamp(1850), 1990);
/// assert!(range.contains(2001));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearRange {
    min: i32,
    max: i32,
}

/// Errors returned by [`YearRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum YearRangeError {
    /// The first year came after the last.
    #[error("year range start {min} is after its end {max}")]
    Inverted {
        /// Requested first year.
        min: i32,
        /// Requested last year.
        max: i32,
    },
}

impl YearRange {
    /// Validate and construct a range.
    ///
    /// # Errors
    /// Returns [`YearRangeError::Inverted`] when `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, YearRangeError> {
        if min > max {
            return Err(YearRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// First selectable year.
    #[must_use]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Last selectable year.
    #[must_use]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Year selected before the user moves the slider.
    #[must_use]
    pub const fn default_year(self) -> i32 {
        self.max
    }

    /// Whether `year` lies within the range.
    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Snap `year` into the range.
    #[must_use]
    pub fn clamp(self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}
