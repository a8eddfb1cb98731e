//! Opaque handles for maps whose lifetime is driven by a host.
//!
//! A host cannot hold a `ScalarMap` directly, so the [`Registry`] owns every
//! map and hands out [`MapHandle`]s. A handle stays valid until it is passed
//! to [`Registry::finalize`]. Slots are reused after finalization with a new
//! generation, so a stale handle is reported as
//! [`MapError::InvalidHandle`] instead of reaching a newer map.

use crate::config::MapConfig;
use crate::error::MapError;
use crate::map::ScalarMap;
use crate::scalar::Scalar;
use core::fmt;
use core::hash::BuildHasher;
use foldhash::fast::FixedState;

/// Opaque reference to a map owned by a [`Registry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapHandle {
    index: usize,
    generation: u64,
}

impl MapHandle {
    /// A handle that never refers to a live map
    pub const NULL: MapHandle = MapHandle {
        index: 0,
        generation: 0,
    };

    /// Returns true for [`MapHandle::NULL`]
    pub fn is_null(&self) -> bool {
        self.generation == 0
    }
}

impl fmt::Display for MapHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "null")
        } else {
            write!(f, "map#{}@{}", self.index, self.generation)
        }
    }
}

struct Slot<S> {
    generation: u64,
    map: Option<ScalarMap<S>>,
}

/// Owner of every map created through [`init`](Registry::init)
///
/// # Examples
///
/// ```
/// use scalar_map::{Registry, Scalar};
///
/// let mut registry = Registry::new();
/// let handle = registry.init();
///
/// registry
///     .insert(handle, vec!["a".into(), "b".into()], vec![1.into(), 2.into()])
///     .unwrap();
/// assert_eq!(registry.size(handle).unwrap(), 2);
/// assert_eq!(
///     registry.get(handle, &[Scalar::from("a"), Scalar::from("c")]).unwrap(),
///     vec![Some(Scalar::Integer(1)), None]
/// );
///
/// registry.finalize(handle).unwrap();
/// assert!(registry.size(handle).is_err());
/// ```
pub struct Registry<S = FixedState> {
    slots: Vec<Slot<S>>,
    free: Vec<usize>,
    config: MapConfig,
    hasher: S,
}

impl Registry<FixedState> {
    /// Creates an empty registry whose maps use default sizing
    pub fn new() -> Self {
        Self::from_parts(MapConfig::new(), FixedState::default())
    }

    /// Creates an empty registry whose maps use the given configuration
    pub fn with_config(config: MapConfig) -> Result<Self, MapError> {
        Self::with_config_and_hasher(config, FixedState::default())
    }
}

impl Default for Registry<FixedState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BuildHasher + Clone> Registry<S> {
    /// Creates an empty registry whose maps use the given configuration and
    /// a clone of the given hasher
    pub fn with_config_and_hasher(config: MapConfig, hasher: S) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self::from_parts(config, hasher))
    }

    fn from_parts(config: MapConfig, hasher: S) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            config,
            hasher,
        }
    }

    /// Allocates a new empty map and returns its handle
    pub fn init(&mut self) -> MapHandle {
        let map = ScalarMap::from_parts(self.config, self.hasher.clone());

        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.map = Some(map);
                MapHandle {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len();
                self.slots.push(Slot {
                    generation: 1,
                    map: Some(map),
                });
                MapHandle {
                    index,
                    generation: 1,
                }
            }
        };

        log::trace!("initialized {} ({} live)", handle, self.live());
        handle
    }

    /// Destroys the map behind `handle`
    ///
    /// Each handle can be finalized once. Later calls, and calls with a null
    /// or foreign handle, fail with [`MapError::InvalidHandle`].
    pub fn finalize(&mut self, handle: MapHandle) -> Result<(), MapError> {
        let slot = self
            .slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .ok_or(MapError::InvalidHandle(handle))?;

        let map = slot.map.take().ok_or(MapError::InvalidHandle(handle))?;
        slot.generation += 1;
        self.free.push(handle.index);
        drop(map);

        log::trace!("finalized {} ({} live)", handle, self.live());
        Ok(())
    }

    /// Number of maps that have not been finalized
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Borrows the map behind `handle`
    pub fn map(&self, handle: MapHandle) -> Result<&ScalarMap<S>, MapError> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.map.as_ref())
            .ok_or(MapError::InvalidHandle(handle))
    }

    /// Mutably borrows the map behind `handle`
    pub fn map_mut(&mut self, handle: MapHandle) -> Result<&mut ScalarMap<S>, MapError> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.map.as_mut())
            .ok_or(MapError::InvalidHandle(handle))
    }

    /// Upserts `keys[i] -> values[i]` for every index
    pub fn insert(
        &mut self,
        handle: MapHandle,
        keys: Vec<Scalar>,
        values: Vec<Scalar>,
    ) -> Result<(), MapError> {
        self.map_mut(handle)?.insert_batch(keys, values)
    }

    /// Looks up every key, returning `None` where a key is absent
    pub fn get(&self, handle: MapHandle, keys: &[Scalar]) -> Result<Vec<Option<Scalar>>, MapError> {
        Ok(self.map(handle)?.get_batch(keys))
    }

    /// Removes every key that is present; absent keys are ignored
    pub fn remove(&mut self, handle: MapHandle, keys: &[Scalar]) -> Result<(), MapError> {
        self.map_mut(handle)?.remove_batch(keys);
        Ok(())
    }

    /// Returns every key in traversal order
    pub fn keys(&self, handle: MapHandle) -> Result<Vec<Scalar>, MapError> {
        Ok(self.map(handle)?.keys().cloned().collect())
    }

    /// Returns every value in the same traversal order as [`keys`](Self::keys)
    pub fn values(&self, handle: MapHandle) -> Result<Vec<Scalar>, MapError> {
        Ok(self.map(handle)?.values().cloned().collect())
    }

    /// Removes every entry from the map
    pub fn clear(&mut self, handle: MapHandle) -> Result<(), MapError> {
        self.map_mut(handle)?.clear();
        Ok(())
    }

    /// Returns the number of entries in the map
    pub fn size(&self, handle: MapHandle) -> Result<usize, MapError> {
        Ok(self.map(handle)?.len())
    }
}
