//! Conversion between host-native vectors and [`Scalar`]s.
//!
//! Hosts pass homogeneous vectors of integers, doubles or strings. Anything
//! else is rejected here so the map only ever sees the three scalar variants.
//! Results go back as one [`HostValue`] per element, with
//! [`HostValue::Missing`] standing in for absent lookups.

use crate::error::MapError;
use crate::scalar::Scalar;

/// A homogeneous vector as handed over by a host
#[derive(Debug, Clone, PartialEq)]
pub enum HostVector {
    /// Signed 32-bit integers
    Integer(Vec<i32>),
    /// Double-precision floats
    Real(Vec<f64>),
    /// Strings, copied into the map on insert
    ///
    /// Elements must be valid UTF-8. Hosts holding Latin-1 or other encodings
    /// re-encode before building the vector; raw bytes are not carried through.
    Character(Vec<String>),
    /// Any other host type, carrying its host-side name and element count
    Unsupported {
        /// Host-side type name, reported in the error
        type_name: String,
        /// Number of elements in the host vector
        len: usize,
    },
}

impl HostVector {
    /// Number of elements, including for unsupported host types
    pub fn len(&self) -> usize {
        match self {
            HostVector::Integer(v) => v.len(),
            HostVector::Real(v) => v.len(),
            HostVector::Character(v) => v.len(),
            HostVector::Unsupported { len, .. } => *len,
        }
    }

    /// Returns true if the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts every element into a [`Scalar`]
    ///
    /// Fails with [`MapError::UnsupportedVariant`] for unsupported host types.
    pub fn into_scalars(self) -> Result<Vec<Scalar>, MapError> {
        match self {
            HostVector::Integer(v) => Ok(v.into_iter().map(Scalar::Integer).collect()),
            HostVector::Real(v) => Ok(v.into_iter().map(Scalar::Float).collect()),
            HostVector::Character(v) => Ok(v.into_iter().map(Scalar::Text).collect()),
            HostVector::Unsupported { type_name, .. } => {
                log::debug!("rejected host vector of type {}", type_name);
                Err(MapError::UnsupportedVariant(type_name))
            }
        }
    }
}

/// A single host-native value returned to the host
#[derive(Debug, Clone, PartialEq)]
pub enum HostValue {
    /// Integer scalar
    Integer(i32),
    /// Double scalar
    Real(f64),
    /// String scalar
    Character(String),
    /// The host's null sentinel, used for keys that were not found
    Missing,
}

impl From<Scalar> for HostValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Integer(v) => HostValue::Integer(v),
            Scalar::Float(v) => HostValue::Real(v),
            Scalar::Text(s) => HostValue::Character(s),
        }
    }
}

impl From<Option<Scalar>> for HostValue {
    fn from(scalar: Option<Scalar>) -> Self {
        scalar.map_or(HostValue::Missing, HostValue::from)
    }
}

/// Converts lookup results into host values, one per queried key
pub fn to_host_list(results: Vec<Option<Scalar>>) -> Vec<HostValue> {
    results.into_iter().map(HostValue::from).collect()
}

/// Converts enumerated keys or values into host values
pub fn scalars_to_host_list(scalars: Vec<Scalar>) -> Vec<HostValue> {
    scalars.into_iter().map(HostValue::from).collect()
}
