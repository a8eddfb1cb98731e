//! Randomized operation sequences checked against `std::collections::HashMap`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scalar_map::{FingerprintState, Scalar, ScalarMap};
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Hashable mirror of a scalar key. Floats are generated without NaN or
/// negative zero, so bit equality matches IEEE equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ModelKey {
    Integer(i32),
    Float(u64),
    Text(String),
}

impl ModelKey {
    fn to_scalar(&self) -> Scalar {
        match self {
            ModelKey::Integer(v) => Scalar::Integer(*v),
            ModelKey::Float(bits) => Scalar::Float(f64::from_bits(*bits)),
            ModelKey::Text(s) => Scalar::Text(s.clone()),
        }
    }
}

fn random_key(rng: &mut StdRng) -> ModelKey {
    match rng.random_range(0..3) {
        0 => ModelKey::Integer(rng.random_range(-50..50)),
        // Quarter steps put four keys behind every truncated fingerprint.
        1 => ModelKey::Float((f64::from(rng.random_range(-200..200)) / 4.0).to_bits()),
        _ => ModelKey::Text(format!("k{}", rng.random_range(0..100))),
    }
}

fn random_value(rng: &mut StdRng) -> Scalar {
    match rng.random_range(0..3) {
        0 => Scalar::Integer(rng.random()),
        1 => Scalar::Float(rng.random_range(-1.0e6..1.0e6)),
        _ => Scalar::Text(format!("v{}", rng.random_range(0..1_000_000))),
    }
}

fn run_model<S: BuildHasher>(mut map: ScalarMap<S>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut model: HashMap<ModelKey, Scalar> = HashMap::new();

    for _ in 0..5_000 {
        match rng.random_range(0..100) {
            0..=44 => {
                let batch = rng.random_range(0..8);
                let keys: Vec<_> = (0..batch).map(|_| random_key(&mut rng)).collect();
                let values: Vec<_> = (0..batch).map(|_| random_value(&mut rng)).collect();

                for (k, v) in keys.iter().zip(&values) {
                    model.insert(k.clone(), v.clone());
                }
                map.insert_batch(keys.iter().map(ModelKey::to_scalar).collect(), values)
                    .unwrap();
            }
            45..=69 => {
                let keys: Vec<_> = (0..rng.random_range(0..8))
                    .map(|_| random_key(&mut rng))
                    .collect();
                let expected: Vec<_> = keys.iter().map(|k| model.get(k).cloned()).collect();
                let scalars: Vec<_> = keys.iter().map(ModelKey::to_scalar).collect();

                assert_eq!(map.get_batch(&scalars), expected);
            }
            70..=97 => {
                let keys: Vec<_> = (0..rng.random_range(0..8))
                    .map(|_| random_key(&mut rng))
                    .collect();
                let scalars: Vec<_> = keys.iter().map(ModelKey::to_scalar).collect();

                let mut removed = 0;
                for k in &keys {
                    if model.remove(k).is_some() {
                        removed += 1;
                    }
                }
                assert_eq!(map.remove_batch(&scalars), removed);
            }
            _ => {
                model.clear();
                map.clear();
            }
        }

        assert_eq!(map.len(), model.len());
    }

    let mut entries = 0;
    for (key, value) in map.iter() {
        let model_key = match key {
            Scalar::Integer(v) => ModelKey::Integer(*v),
            Scalar::Float(v) => ModelKey::Float(v.to_bits()),
            Scalar::Text(s) => ModelKey::Text(s.clone()),
        };
        assert_eq!(model.get(&model_key), Some(value));
        entries += 1;
    }
    assert_eq!(entries, model.len());
}

#[test]
fn test_matches_std_hashmap_default_hasher() {
    for seed in 0..8 {
        run_model(ScalarMap::new(), seed);
    }
}

#[test]
fn test_matches_std_hashmap_pass_through_hasher() {
    for seed in 100..108 {
        run_model(ScalarMap::with_capacity_and_hasher(2, FingerprintState), seed);
    }
}
