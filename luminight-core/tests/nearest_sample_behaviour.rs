#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for nearest-sample resolution using rstest-bdd.

use std::cell::RefCell;

use luminight_core::{LightCatalog, LightSample, Position};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Outcome of a resolution, detached from the catalog borrow.
#[derive(Debug, Clone, PartialEq)]
struct Resolved {
    name: String,
    distance_km: f64,
}

/// World state for resolver scenarios.
#[derive(Debug, Default)]
struct ResolverWorld {
    samples: RefCell<Vec<LightSample>>,
    position: RefCell<Option<Position>>,
    outcome: RefCell<Option<Resolved>>,
}

#[fixture]
fn world() -> ResolverWorld {
    ResolverWorld::default()
}

fn unquote(text: &str) -> String {
    text.trim_matches('"').to_owned()
}

#[given("the two-sample catalog")]
fn given_two_samples(world: &ResolverWorld) {
    world.samples.replace(vec![
        LightSample::new(1, "A", 0.0, 0.0, 2000, 50.0),
        LightSample::new(2, "B", 10.0, 10.0, 2000, 80.0),
    ]);
}

#[given("an empty catalog")]
fn given_empty(world: &ResolverWorld) {
    world.samples.replace(Vec::new());
}

#[given("a sample {name} at latitude {lat} and longitude {lon} from year {year}")]
fn given_sample(world: &ResolverWorld, name: String, lat: f64, lon: f64, year: i32) {
    let mut samples = world.samples.borrow_mut();
    let id = u64::try_from(samples.len()).expect("small catalog") + 100;
    samples.push(LightSample::new(id, unquote(&name), lat, lon, year, 40.0));
}

#[given("the observer is at latitude {lat} and longitude {lon}")]
fn given_observer(world: &ResolverWorld, lat: f64, lon: f64) {
    world.position.replace(Some(Position::new(lat, lon)));
}

#[when("the nearest sample is resolved for year {year}")]
fn when_resolved(world: &ResolverWorld, year: i32) {
    let catalog = LightCatalog::new(world.samples.borrow().clone());
    let position = world.position.borrow();
    let outcome = catalog
        .resolve(position.as_ref(), year)
        .map(|resolution| Resolved {
            name: resolution.sample.name.clone(),
            distance_km: resolution.distance_km,
        });
    world.outcome.replace(outcome);
}

#[then("the resolved sample is {name}")]
fn then_sample(world: &ResolverWorld, name: String) {
    let outcome = world.outcome.borrow();
    let resolved = outcome.as_ref().expect("a sample should resolve");
    assert_eq!(resolved.name, unquote(&name));
}

#[then("the resolved distance is {km} km")]
fn then_distance(world: &ResolverWorld, km: f64) {
    let outcome = world.outcome.borrow();
    let resolved = outcome.as_ref().expect("a sample should resolve");
    assert!(
        (resolved.distance_km - km).abs() < 1e-9,
        "distance {} differs from {km}",
        resolved.distance_km
    );
}

#[then("no sample is resolved")]
fn then_none(world: &ResolverWorld) {
    assert!(world.outcome.borrow().is_none());
}

#[scenario(path = "tests/features/nearest_sample.feature", index = 0)]
fn observer_on_sample(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_sample.feature", index = 1)]
fn year_predates_catalog(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_sample.feature", index = 2)]
fn unknown_position(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_sample.feature", index = 3)]
fn newer_samples_ignored(world: ResolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/nearest_sample.feature", index = 4)]
fn ties_keep_catalog_order(world: ResolverWorld) {
    let _ = world;
}
