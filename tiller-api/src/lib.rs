//! Tiller API - Shared types for the tiller command console.
//!
//! This crate holds the data contract between a host application and the
//! console kernel: the coerced parameter value type, the output sink trait,
//! and the customizable response templates.

mod print;
mod response;
mod value;

pub use print::*;
pub use response::*;
pub use value::*;
