//! Tagged scalar values and their hashing rules.

use core::fmt;
use core::hash::{Hash, Hasher};

/// FNV-1a 32-bit offset basis
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime
const FNV_PRIME: u32 = 0x0100_0193;

/// Computes the 32-bit FNV-1a hash of a byte sequence.
///
/// Every byte is XORed into the state and then multiplied by the FNV prime.
/// No length prefix or terminator is mixed in.
///
/// ```
/// use scalar_map::fnv1a;
///
/// assert_eq!(fnv1a(b""), 0x811c_9dc5);
/// assert_eq!(fnv1a(b"a"), 0xe40c_292c);
/// ```
#[inline]
pub fn fnv1a(bytes: &[u8]) -> u32 {
    let mut h = FNV_OFFSET_BASIS;
    for &b in bytes {
        h ^= u32::from(b);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h
}

/// A value that is exactly one of integer, float or text
///
/// Values of different variants never compare equal: `Integer(1)`,
/// `Float(1.0)` and `Text("1")` are three distinct keys. Float equality is
/// IEEE-754 equality, so `NaN` is unequal to itself and `-0.0 == 0.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// 32-bit signed integer
    Integer(i32),
    /// Double-precision float
    Float(f64),
    /// Owned UTF-8 text, compared and hashed byte for byte
    ///
    /// Only UTF-8 is representable. A host with Latin-1 or other non-UTF-8
    /// strings must re-encode them before building a key, so two host strings
    /// are equal keys exactly when their UTF-8 encodings match.
    Text(String),
}

impl Scalar {
    /// Name of the variant, as reported in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Integer(_) => "integer",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
        }
    }

    /// Raw hash of the value before the table's hash builder mixes it.
    ///
    /// Floats are truncated toward zero into an `i64` (saturating, `NaN`
    /// becomes 0) before hashing. `1.0` and `1.9` therefore share a
    /// fingerprint and land in the same bucket. This only affects bucket
    /// distribution: equality stays exact, so such keys remain distinct
    /// entries. It is intentional and must not be "fixed" to a bitwise hash,
    /// which would break `-0.0 == 0.0`.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        match self {
            Scalar::Integer(v) => *v as i64 as u64,
            Scalar::Float(v) => *v as i64 as u64,
            Scalar::Text(s) => u64::from(fnv1a(s.as_bytes())),
        }
    }

    /// Returns the integer payload, if this is an integer
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Scalar::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float payload, if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text payload, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl Hash for Scalar {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Integer(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}
