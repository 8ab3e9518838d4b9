#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for sky metric derivation using rstest-bdd.

use std::cell::{Cell, RefCell};

use luminight_core::{IntensityLevel, ReductionRate, SkyMetrics, build_metrics};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state for scoring scenarios.
#[derive(Debug, Default)]
struct MetricsWorld {
    intensity: Cell<f64>,
    metrics: RefCell<Option<SkyMetrics>>,
}

#[fixture]
fn world() -> MetricsWorld {
    MetricsWorld::default()
}

fn computed(world: &MetricsWorld) -> SkyMetrics {
    world.metrics.borrow().expect("metrics should be computed")
}

#[given("a light intensity of {intensity}")]
fn given_intensity(world: &MetricsWorld, intensity: f64) {
    world.intensity.set(intensity);
}

#[when("the sky metrics are computed")]
fn when_computed(world: &MetricsWorld) {
    world.metrics.replace(Some(build_metrics(world.intensity.get())));
}

#[when("the restored sky metrics are computed with a reduction rate of {rate}")]
fn when_restored(world: &MetricsWorld, rate: f64) {
    let rate = ReductionRate::new(rate).expect("valid reduction rate");
    let restored = rate.apply(world.intensity.get());
    world.metrics.replace(Some(build_metrics(f64::from(restored))));
}

#[then("the Bortle score is {score}")]
fn then_bortle(world: &MetricsWorld, score: u8) {
    assert_eq!(computed(world).bortle_score, score);
}

#[then("the visible star estimate is {stars}")]
fn then_stars(world: &MetricsWorld, stars: u32) {
    assert_eq!(computed(world).stars_visible, stars);
}

#[then("the area light score is {score}")]
fn then_area(world: &MetricsWorld, score: u8) {
    assert_eq!(computed(world).area_light_score, score);
}

#[then("the intensity level is {level}")]
fn then_level(world: &MetricsWorld, level: String) {
    let expected: IntensityLevel = level
        .trim_matches('"')
        .parse()
        .expect("known intensity level");
    assert_eq!(computed(world).intensity_level, expected);
}

#[scenario(path = "tests/features/sky_metrics.feature", index = 0)]
fn pristine_sky(world: MetricsWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sky_metrics.feature", index = 1)]
fn saturated_sky(world: MetricsWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sky_metrics.feature", index = 2)]
fn clamped_readings(world: MetricsWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/sky_metrics.feature", index = 3)]
fn restored_bright_sample(world: MetricsWorld) {
    let _ = world;
}
