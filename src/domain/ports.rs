use crate::domain::model::{Field, Method};

/// A closed, ordered set of named values.
pub trait EnumSet: Copy + PartialEq + 'static {
    /// Every member, in declaration order.
    const VARIANTS: &'static [Self];

    /// The registered string form of this member.
    fn canonical(&self) -> &'static str;

    /// Position in `VARIANTS`, or `None` when the member was left out of it.
    fn ordinal(&self) -> Option<usize> {
        Self::VARIANTS.iter().position(|variant| variant == self)
    }
}

/// A type that declares its fields and accessors up front.
pub trait Introspect: Sized + 'static {
    const TYPE_NAME: &'static str;

    /// Fields declared directly on this type, in declaration order.
    fn declared_fields() -> &'static [Field];

    fn methods() -> Vec<Method<Self>>;
}
