//! Heterogeneous-key hash map over tagged scalars
//!
//! This crate provides a hash map whose keys and values are [`Scalar`]s:
//! a 32-bit integer, a double or an owned string. It is meant to sit behind
//! a host environment (an interpreter or a statistics runtime) that hands over
//! vectors of such scalars and keeps maps alive across many calls.
//!
//! # Features
//!
//! - **Tagged Keys**: integers, floats and text share one map and never
//!   compare equal across variants
//! - **Exact Equality**: IEEE-754 for floats, byte equality for text
//! - **Batch Operations**: insert, lookup and removal over key sequences
//! - **Handles**: a [`Registry`] owns maps and hands out [`MapHandle`]s with
//!   explicit finalization
//! - **Flexible Hashing**: any `BuildHasher` can mix the scalar fingerprint
//!
//! # Example
//!
//! ```rust
//! use scalar_map::{Registry, Scalar};
//!
//! let mut registry = Registry::new();
//! let map = registry.init();
//!
//! registry
//!     .insert(
//!         map,
//!         vec![Scalar::from("a"), Scalar::from("b")],
//!         vec![Scalar::Integer(1), Scalar::Integer(2)],
//!     )
//!     .unwrap();
//!
//! let found = registry
//!     .get(map, &[Scalar::from("a"), Scalar::from("c")])
//!     .unwrap();
//! assert_eq!(found, vec![Some(Scalar::Integer(1)), None]);
//!
//! registry.remove(map, &[Scalar::from("a")]).unwrap();
//! assert_eq!(registry.keys(map).unwrap(), vec![Scalar::from("b")]);
//! assert_eq!(registry.values(map).unwrap(), vec![Scalar::Integer(2)]);
//!
//! registry.finalize(map).unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod hasher;
mod map;
pub mod marshal;
mod registry;
mod scalar;

pub use config::{
    MapConfig, DEFAULT_BUCKETS, DEFAULT_MAX_LOAD_FACTOR, MAX_BUCKETS, MIN_LOAD_FACTOR,
};
pub use error::MapError;
pub use hasher::{FingerprintHasher, FingerprintState};
pub use map::{Iter, Keys, ScalarMap, Values};
pub use registry::{MapHandle, Registry};
pub use scalar::{fnv1a, Scalar};
