use crate::error::MapError;

/// Default number of buckets in a fresh table
pub const DEFAULT_BUCKETS: usize = 64;

/// Default load factor threshold for growing (75%)
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor threshold (25%)
pub const MIN_LOAD_FACTOR: f64 = 0.25;

/// Largest bucket array a table allocates or grows to (2^28)
pub const MAX_BUCKETS: usize = 1 << 28;

/// Sizing options for a [`ScalarMap`](crate::ScalarMap)
///
/// The bucket count is rounded up to the next power of two. The table doubles
/// its bucket array once `len > buckets * max_load_factor` and never shrinks.
///
/// ```
/// use scalar_map::MapConfig;
///
/// let config = MapConfig::new().initial_buckets(1000).max_load_factor(1.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.bucket_count(), 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// Buckets allocated up front
    pub initial_buckets: usize,
    /// Entries per bucket tolerated before the table grows
    pub max_load_factor: f64,
}

impl MapConfig {
    /// Creates the default configuration
    pub const fn new() -> Self {
        Self {
            initial_buckets: DEFAULT_BUCKETS,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }

    /// Sets the initial bucket count
    pub const fn initial_buckets(mut self, buckets: usize) -> Self {
        self.initial_buckets = buckets;
        self
    }

    /// Sets the load factor threshold
    pub const fn max_load_factor(mut self, load_factor: f64) -> Self {
        self.max_load_factor = load_factor;
        self
    }

    /// Checks the load factor is finite and at least [`MIN_LOAD_FACTOR`],
    /// and that `initial_buckets` does not exceed [`MAX_BUCKETS`]
    pub fn validate(&self) -> Result<(), MapError> {
        if !self.max_load_factor.is_finite() || self.max_load_factor < MIN_LOAD_FACTOR {
            return Err(MapError::InvalidConfig(format!(
                "max_load_factor must be finite and at least {}, got {}",
                MIN_LOAD_FACTOR, self.max_load_factor
            )));
        }
        if self.initial_buckets > MAX_BUCKETS {
            return Err(MapError::InvalidConfig(format!(
                "initial_buckets must be at most {}, got {}",
                MAX_BUCKETS, self.initial_buckets
            )));
        }
        Ok(())
    }

    /// Bucket count actually allocated for `initial_buckets`
    ///
    /// Always a power of two between 1 and [`MAX_BUCKETS`].
    pub fn bucket_count(&self) -> usize {
        self.initial_buckets.clamp(1, MAX_BUCKETS).next_power_of_two()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new()
    }
}
