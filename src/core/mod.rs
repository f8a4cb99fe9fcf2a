pub mod accessors;
pub mod collections;
pub mod csv;
pub mod enums;
pub mod strings;
pub mod trace;

pub use crate::domain::model::{Field, Invoker, Method, TypeTag, Visibility};
pub use crate::domain::ports::{EnumSet, Introspect};
pub use crate::utils::error::Result;

/// Returned in place of an absent string.
pub const BLANK_STRING_VALUE: &str = "";
