//! Nearest-sample resolution for an observer position and year ceiling.
//!
//! Resolution filters the catalog to samples whose year does not exceed the
//! selected year, then picks the one with the smallest great-circle distance
//! to the observer. It is a linear scan; catalogs are small and static, so no
//! spatial index is kept between calls.

use log::debug;

use crate::{LightSample, Position, haversine_km};

/// The sample chosen for an observer together with its distance.
///
/// # Examples
/// ```
/// use luminight_core::{LightSample, Position, resolve_nearest};
///
/// let samples = vec![
///     LightSample::new(1, "A", 0.0, 0.0, 2000, 50.0),
///     LightSample::new(2, "B", 10.0, 10.0, 2000, 80.0),
/// ];
/// let here = Position::new(0.0, 0.0);
///
/// let nearest = resolve_nearest(&samples, Some(&here), 2025).expect("sample A is eligible");
/// assert_eq!(nearest.sample.name, "A");
/// assert_eq!(nearest.distance_km, 0.0);
///
/// assert!(resolve_nearest(&samples, Some(&here), 1999).is_none());
/// assert!(resolve_nearest(&samples, None, 2025).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resolution<'a> {
    /// The nearest eligible sample.
    pub sample: &'a LightSample,
    /// Great-circle distance from the observer in kilometres.
    pub distance_km: f64,
}

/// Find the eligible sample closest to `position`.
///
/// Returns `None` when `position` is absent, when `samples` is empty, or when
/// every sample is newer than `year_ceiling`. Distances are compared with a
/// strict `<`, so among equidistant samples the first one in iteration order
/// wins.
#[must_use]
pub fn resolve_nearest<'a, I>(
    samples: I,
    position: Option<&Position>,
    year_ceiling: i32,
) -> Option<Resolution<'a>>
where
    I: IntoIterator<Item = &'a LightSample>,
{
    let origin = position?.coord();
    let nearest = samples
        .into_iter()
        .filter(|sample| sample.is_eligible(year_ceiling))
        .map(|sample| Resolution {
            sample,
            distance_km: haversine_km(origin, sample.location()),
        })
        .fold(None, |closest: Option<Resolution<'a>>, candidate| match closest {
            Some(best) if is_no_closer(candidate.distance_km, best.distance_km) => Some(best),
            _ => Some(candidate),
        });

    match nearest {
        Some(found) => debug!(
            "resolved sample {} ({}) at {:.3} km for year {}",
            found.sample.id, found.sample.name, found.distance_km, year_ceiling
        ),
        None => debug!("no sample eligible for year {year_ceiling}"),
    }
    nearest
}

/// Only a strictly smaller distance displaces the current best. NaN never
/// does, which can only happen for coordinates outside the documented ranges.
fn is_no_closer(candidate_km: f64, best_km: f64) -> bool {
    candidate_km >= best_km || candidate_km.is_nan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::two_sample_catalog;
    use rstest::rstest;

    #[rstest]
    fn absent_position_short_circuits() {
        let samples = two_sample_catalog();
        assert!(resolve_nearest(&samples, None, 2025).is_none());
    }

    #[rstest]
    fn empty_catalog_yields_nothing() {
        let samples: Vec<LightSample> = Vec::new();
        let here = Position::new(0.0, 0.0);
        assert!(resolve_nearest(&samples, Some(&here), 2025).is_none());
    }

    #[rstest]
    #[case(2025, Some("A"))]
    #[case(2000, Some("A"))]
    #[case(1999, None)]
    fn year_ceiling_filters_samples(#[case] ceiling: i32, #[case] expected: Option<&str>) {
        let samples = two_sample_catalog();
        let here = Position::new(0.0, 0.0);
        let name = resolve_nearest(&samples, Some(&here), ceiling).map(|r| r.sample.name.clone());
        assert_eq!(name.as_deref(), expected);
    }

    #[rstest]
    fn newer_sample_is_invisible_even_when_closer() {
        let samples = vec![
            LightSample::new(1, "old-far", 5.0, 5.0, 1995, 10.0),
            LightSample::new(2, "new-near", 0.0, 0.0, 2020, 90.0),
        ];
        let here = Position::new(0.0, 0.0);
        let found = resolve_nearest(&samples, Some(&here), 2010).expect("old sample eligible");
        assert_eq!(found.sample.id, 1);
        assert!(found.distance_km > 700.0);
    }

    #[rstest]
    fn ties_keep_the_first_sample_in_catalog_order() {
        let samples = vec![
            LightSample::new(1, "east", 0.0, 1.0, 2000, 10.0),
            LightSample::new(2, "west", 0.0, -1.0, 2000, 20.0),
            LightSample::new(3, "east-again", 0.0, 1.0, 2000, 30.0),
        ];
        let here = Position::new(0.0, 0.0);
        for _ in 0..3 {
            let found = resolve_nearest(&samples, Some(&here), 2000).expect("resolved");
            assert_eq!(found.sample.id, 1);
        }
    }

    #[rstest]
    fn accepts_any_iterator_of_samples() {
        let samples = two_sample_catalog();
        let here = Position::new(9.0, 9.0);
        let found = resolve_nearest(samples.iter().rev(), Some(&here), 2025).expect("resolved");
        assert_eq!(found.sample.name, "B");
    }
}
