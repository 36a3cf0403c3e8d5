//! Coerced parameter values.
//!
//! Actions receive their arguments as `ParamValue`s instead of raw strings,
//! so a declared `Int` parameter arrives as an integer and an accessor asking
//! for the wrong kind gets a checked failure rather than a silent cast.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single coerced command parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Raw text (untyped or string-typed positions)
    Str(String),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// Floating point
    Float(f64),
    /// Boolean
    Bool(bool),
    /// A value drawn from a declared symbol set, stored with the canonical
    /// declared spelling.
    Symbol(String),
}

impl ParamValue {
    /// The name of the stored kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Str(_) => "string",
            ParamValue::Int(_) => "int",
            ParamValue::Long(_) => "long",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::Symbol(_) => "symbol",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            ParamValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            ParamValue::Symbol(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) | ParamValue::Symbol(s) => f.write_str(s),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Long(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ParamValue::Str("x".into()).kind(), "string");
        assert_eq!(ParamValue::Int(1).kind(), "int");
        assert_eq!(ParamValue::Long(1).kind(), "long");
        assert_eq!(ParamValue::Float(1.0).kind(), "float");
        assert_eq!(ParamValue::Bool(true).kind(), "bool");
        assert_eq!(ParamValue::Symbol("A".into()).kind(), "symbol");
    }

    #[test]
    fn test_accessors_are_strict() {
        let v = ParamValue::Int(7);
        assert_eq!(v.as_int(), Some(7));
        assert_eq!(v.as_long(), None);
        assert_eq!(v.as_str(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Symbol("DETAILED".into()).to_string(), "DETAILED");
        assert_eq!(ParamValue::Float(2.5).to_string(), "2.5");
    }
}
