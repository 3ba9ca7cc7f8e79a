use std::{
    collections::HashMap,
    env,
    error::Error,
    ops::Range,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

pub const TEMPERATURE_RANGE: Range<f32> = -130.0..200.0;
pub const HUMIDITY_RANGE: Range<f32> = 0.0..100.0;
pub const PRESSURE_RANGE: Range<f32> = 25.0..33.0;

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Seed registered for `key`, read once from the env var of the same name or drawn at random.
fn seed_for(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(key)?))
}

/// Draws a plausible `(temperature, humidity, pressure)` reading.
pub fn gen_reading(rng: &mut impl Rng) -> (f32, f32, f32) {
    (
        rng.gen_range(TEMPERATURE_RANGE),
        rng.gen_range(HUMIDITY_RANGE),
        rng.gen_range(PRESSURE_RANGE),
    )
}
