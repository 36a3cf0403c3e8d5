//! Console error types.

use thiserror::Error;

/// Registration-time validation failures, surfaced to the host when the
/// console is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("group keyword must not be empty")]
    EmptyGroupKeyword,

    #[error("duplicate group keyword: {0}")]
    DuplicateGroup(String),

    #[error("group '{0}' declares more than one root action")]
    DuplicateRoot(String),

    #[error("group '{0}' has no root action")]
    MissingRoot(String),

    #[error("group '{0}' already has a sub-action with keyword '{1}'")]
    DuplicateAction(String, String),
}

/// Typed parameter accessor failures.
///
/// These indicate a host programming error (asking for a kind the parameter
/// was not declared as, or for a parameter that was never declared); they
/// never reach the user through the dispatcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("no parameter '{0}'")]
    Missing(String),

    #[error("parameter '{key}' holds {found}, requested {requested}")]
    TypeMismatch {
        key: String,
        requested: &'static str,
        found: &'static str,
    },
}
