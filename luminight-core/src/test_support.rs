//! Sample catalogs shared by unit, behaviour and property tests.

use crate::LightSample;

/// Two samples a few hundred kilometres apart, both from the year 2000.
///
/// `A` sits on the null island at intensity 50; `B` sits at (10, 10) with
/// intensity 80.
#[must_use]
pub fn two_sample_catalog() -> Vec<LightSample> {
    vec![
        LightSample::new(1, "A", 0.0, 0.0, 2000, 50.0),
        LightSample::new(2, "B", 10.0, 10.0, 2000, 80.0),
    ]
}

/// A small regional catalog spanning several years.
#[must_use]
pub fn regional_catalog() -> Vec<LightSample> {
    vec![
        LightSample::new(10, "Cedar Valley", 37.10, -112.50, 1992, 18.0),
        LightSample::new(11, "Cedar Valley", 37.10, -112.50, 2012, 34.0),
        LightSample::new(12, "Cedar Valley", 37.10, -112.50, 2024, 47.0),
        LightSample::new(20, "Harbour District", 37.80, -122.40, 1995, 71.0),
        LightSample::new(21, "Harbour District", 37.80, -122.40, 2022, 88.0),
        LightSample::new(30, "Silver Mesa", 36.20, -109.90, 2005, 9.0),
    ]
}
