//! Parameter validation and coercion.
//!
//! `check` is the sole gate deciding whether a token sequence satisfies an
//! action's declared types; `parse` then coerces the tokens into a
//! [`Parameters`] value addressable by index or alias. `parse` does not
//! re-validate: calling it on tokens `check` would reject stores the
//! offending token as a raw string.

use std::collections::HashMap;

use tiller_api::ParamValue;

use crate::error::ParamError;

/// A declared parameter type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamType {
    /// Any token.
    Str,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    Long,
    /// Floating point.
    Float,
    /// `true` or `false`, case-insensitive.
    Bool,
    /// One of a closed set of symbolic values, matched case-insensitively.
    Symbols(Vec<String>),
}

impl ParamType {
    /// Declare an enum-like parameter from its symbolic values.
    pub fn symbols<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamType::Symbols(values.into_iter().map(Into::into).collect())
    }
}

/// Check a token sequence against the declared types.
///
/// Fails when there are fewer tokens than declared types; extra trailing
/// tokens are permitted (they stay untyped). Each typed position must be
/// lexically compatible: numerics must parse, booleans must equal
/// `true`/`false` ignoring case, symbols must match one declared value
/// ignoring case.
pub fn check(tokens: &[String], types: &[ParamType]) -> bool {
    if tokens.len() < types.len() {
        return false;
    }

    types.iter().zip(tokens).all(|(ty, token)| match ty {
        ParamType::Str => true,
        ParamType::Int => token.parse::<i32>().is_ok(),
        ParamType::Long => token.parse::<i64>().is_ok(),
        ParamType::Float => token.parse::<f64>().is_ok(),
        ParamType::Bool => {
            token.eq_ignore_ascii_case("true") || token.eq_ignore_ascii_case("false")
        }
        ParamType::Symbols(values) => values.iter().any(|v| v.eq_ignore_ascii_case(token)),
    })
}

/// Coerce tokens into typed values per the declared types.
///
/// Positions beyond the declared type list keep the raw string. Symbol
/// matches store the canonical declared spelling, not the user's casing.
/// Only meaningful after a successful [`check`].
pub fn parse(tokens: &[String], types: &[ParamType], aliases: &[String]) -> Parameters {
    let values = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| coerce(token, types.get(i)))
        .collect();

    let alias_lookup = aliases
        .iter()
        .enumerate()
        .map(|(i, alias)| (alias.clone(), i))
        .collect();

    Parameters {
        values,
        alias_lookup,
    }
}

fn coerce(token: &str, ty: Option<&ParamType>) -> ParamValue {
    let fallback = || ParamValue::Str(token.to_string());
    match ty {
        None | Some(ParamType::Str) => fallback(),
        Some(ParamType::Int) => token.parse().map(ParamValue::Int).unwrap_or_else(|_| fallback()),
        Some(ParamType::Long) => token.parse().map(ParamValue::Long).unwrap_or_else(|_| fallback()),
        Some(ParamType::Float) => token.parse().map(ParamValue::Float).unwrap_or_else(|_| fallback()),
        Some(ParamType::Bool) => ParamValue::Bool(token.eq_ignore_ascii_case("true")),
        Some(ParamType::Symbols(values)) => values
            .iter()
            .find(|v| v.eq_ignore_ascii_case(token))
            .map(|v| ParamValue::Symbol(v.clone()))
            .unwrap_or_else(fallback),
    }
}

/// A key into [`Parameters`]: a positional index or a declared alias.
pub trait ParamKey {
    fn resolve(&self, params: &Parameters) -> Option<usize>;
    fn describe(&self) -> String;
}

impl ParamKey for usize {
    fn resolve(&self, _params: &Parameters) -> Option<usize> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ParamKey for &str {
    fn resolve(&self, params: &Parameters) -> Option<usize> {
        params.alias_lookup.get(*self).copied()
    }

    fn describe(&self) -> String {
        (*self).to_string()
    }
}

/// The coerced arguments of one invocation.
///
/// Immutable; created fresh per invocation and discarded after the action
/// returns. Typed accessors fail with [`ParamError::TypeMismatch`] when the
/// stored kind disagrees with the requested one, and with
/// [`ParamError::Missing`] when the key resolves to nothing; use
/// `unwrap_or` on the result for a caller-supplied default.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    values: Vec<ParamValue>,
    alias_lookup: HashMap<String, usize>,
}

impl Parameters {
    /// A parameter set with no values, used for zero-argument invocations.
    pub fn empty() -> Self {
        Parameters {
            values: Vec::new(),
            alias_lookup: HashMap::new(),
        }
    }

    /// Number of coerced values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether a value exists at the given index.
    pub fn has(&self, index: usize) -> bool {
        index < self.values.len()
    }

    /// The index a declared alias maps to, if any.
    pub fn alias_index(&self, alias: &str) -> Option<usize> {
        self.alias_lookup.get(alias).copied()
    }

    /// Raw access by index or alias.
    pub fn get<K: ParamKey>(&self, key: K) -> Option<&ParamValue> {
        key.resolve(self).and_then(|i| self.values.get(i))
    }

    pub fn get_str<K: ParamKey>(&self, key: K) -> Result<&str, ParamError> {
        match self.lookup(&key)? {
            ParamValue::Str(s) => Ok(s),
            other => Err(mismatch(&key, "string", other)),
        }
    }

    pub fn get_int<K: ParamKey>(&self, key: K) -> Result<i32, ParamError> {
        match self.lookup(&key)? {
            ParamValue::Int(v) => Ok(*v),
            other => Err(mismatch(&key, "int", other)),
        }
    }

    pub fn get_long<K: ParamKey>(&self, key: K) -> Result<i64, ParamError> {
        match self.lookup(&key)? {
            ParamValue::Long(v) => Ok(*v),
            other => Err(mismatch(&key, "long", other)),
        }
    }

    pub fn get_float<K: ParamKey>(&self, key: K) -> Result<f64, ParamError> {
        match self.lookup(&key)? {
            ParamValue::Float(v) => Ok(*v),
            other => Err(mismatch(&key, "float", other)),
        }
    }

    pub fn get_bool<K: ParamKey>(&self, key: K) -> Result<bool, ParamError> {
        match self.lookup(&key)? {
            ParamValue::Bool(v) => Ok(*v),
            other => Err(mismatch(&key, "bool", other)),
        }
    }

    pub fn get_symbol<K: ParamKey>(&self, key: K) -> Result<&str, ParamError> {
        match self.lookup(&key)? {
            ParamValue::Symbol(s) => Ok(s),
            other => Err(mismatch(&key, "symbol", other)),
        }
    }

    fn lookup<K: ParamKey>(&self, key: &K) -> Result<&ParamValue, ParamError> {
        key.resolve(self)
            .and_then(|i| self.values.get(i))
            .ok_or_else(|| ParamError::Missing(key.describe()))
    }
}

fn mismatch<K: ParamKey>(key: &K, requested: &'static str, found: &ParamValue) -> ParamError {
    ParamError::TypeMismatch {
        key: key.describe(),
        requested,
        found: found.kind(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn names(aliases: &[&str]) -> Vec<String> {
        aliases.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_check_too_few_tokens() {
        assert!(!check(&toks(&["1"]), &[ParamType::Int, ParamType::Int]));
        assert!(!check(&[], &[ParamType::Str]));
    }

    #[test]
    fn test_check_extra_tokens_allowed() {
        assert!(check(&toks(&["1", "extra", "more"]), &[ParamType::Int]));
        assert!(check(&toks(&["anything"]), &[]));
    }

    #[test]
    fn test_check_numeric_kinds() {
        assert!(check(&toks(&["42"]), &[ParamType::Int]));
        assert!(!check(&toks(&["4.2"]), &[ParamType::Int]));
        assert!(check(&toks(&["9999999999"]), &[ParamType::Long]));
        assert!(!check(&toks(&["9999999999"]), &[ParamType::Int]));
        assert!(check(&toks(&["4.2"]), &[ParamType::Float]));
        assert!(!check(&toks(&["nope"]), &[ParamType::Float]));
    }

    #[test]
    fn test_check_bool_case_insensitive() {
        assert!(check(&toks(&["true"]), &[ParamType::Bool]));
        assert!(check(&toks(&["FALSE"]), &[ParamType::Bool]));
        assert!(!check(&toks(&["yes"]), &[ParamType::Bool]));
    }

    #[test]
    fn test_check_symbols_case_insensitive() {
        let level = ParamType::symbols(["MINIMAL", "NORMAL", "DETAILED"]);
        assert!(check(&toks(&["detailed"]), std::slice::from_ref(&level)));
        assert!(check(&toks(&["Normal"]), std::slice::from_ref(&level)));
        assert!(!check(&toks(&["verbose"]), std::slice::from_ref(&level)));
    }

    #[test]
    fn test_parse_coerces_each_kind() {
        let types = [
            ParamType::Str,
            ParamType::Int,
            ParamType::Long,
            ParamType::Float,
            ParamType::Bool,
        ];
        let params = parse(&toks(&["name", "3", "30", "2.5", "TRUE"]), &types, &[]);
        assert_eq!(params.get(0), Some(&ParamValue::Str("name".into())));
        assert_eq!(params.get(1), Some(&ParamValue::Int(3)));
        assert_eq!(params.get(2), Some(&ParamValue::Long(30)));
        assert_eq!(params.get(3), Some(&ParamValue::Float(2.5)));
        assert_eq!(params.get(4), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_parse_symbol_stores_canonical_spelling() {
        let types = [ParamType::symbols(["MINIMAL", "NORMAL", "DETAILED"])];
        let params = parse(&toks(&["detailed"]), &types, &[]);
        assert_eq!(params.get(0), Some(&ParamValue::Symbol("DETAILED".into())));
    }

    #[test]
    fn test_parse_extra_tokens_stay_strings() {
        let params = parse(&toks(&["1", "tail"]), &[ParamType::Int], &[]);
        assert_eq!(params.get(1), Some(&ParamValue::Str("tail".into())));
    }

    #[test]
    fn test_parse_after_check_never_falls_back() {
        let types = [ParamType::Int, ParamType::Float, ParamType::Bool];
        let tokens = toks(&["-7", "1e3", "False"]);
        assert!(check(&tokens, &types));
        let params = parse(&tokens, &types, &[]);
        assert_eq!(params.get_int(0), Ok(-7));
        assert_eq!(params.get_float(1), Ok(1000.0));
        assert_eq!(params.get_bool(2), Ok(false));
    }

    #[test]
    fn test_alias_lookup() {
        let types = [ParamType::Str, ParamType::Int];
        let params = parse(&toks(&["Michael", "18"]), &types, &names(&["name", "age"]));
        assert_eq!(params.get_str("name"), Ok("Michael"));
        assert_eq!(params.get_int("age"), Ok(18));
        assert_eq!(params.alias_index("age"), Some(1));
    }

    #[test]
    fn test_missing_key() {
        let params = parse(&toks(&["x"]), &[ParamType::Str], &[]);
        assert_eq!(params.get_str(5), Err(ParamError::Missing("5".into())));
        assert_eq!(
            params.get_str("nope"),
            Err(ParamError::Missing("nope".into()))
        );
        assert!(params.get(5).is_none());
    }

    #[test]
    fn test_type_mismatch_is_checked() {
        let params = parse(&toks(&["18"]), &[ParamType::Int], &names(&["age"]));
        assert_eq!(
            params.get_str("age"),
            Err(ParamError::TypeMismatch {
                key: "age".into(),
                requested: "string",
                found: "int",
            })
        );
        // Defaults come from the caller via unwrap_or.
        assert_eq!(params.get_int("missing").unwrap_or(21), 21);
    }

    #[test]
    fn test_empty_parameters() {
        let params = Parameters::empty();
        assert!(params.is_empty());
        assert!(!params.has(0));
        assert_eq!(params.len(), 0);
    }
}
