use crate::utils::error::{PasteboxError, Result};
use serde_json::Value;
use std::fmt;

/// Type descriptor for declared fields, accessor parameters and return types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Void,
    Bool,
    Int,
    Long,
    Double,
    Text,
}

impl TypeTag {
    /// Whether a dynamic value can be passed where this type is declared.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            TypeTag::Void => value.is_null(),
            TypeTag::Bool => value.is_boolean(),
            TypeTag::Int => value
                .as_i64()
                .is_some_and(|n| i32::try_from(n).is_ok()),
            TypeTag::Long => value.is_i64(),
            TypeTag::Double => value.is_number(),
            TypeTag::Text => value.is_string(),
        }
    }

    pub fn describe(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(n) if n.is_f64() => "double",
            Value::Number(_) => "integer",
            Value::String(_) => "text",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeTag::Void => "void",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Long => "long",
            TypeTag::Double => "double",
            TypeTag::Text => "text",
        };
        f.write_str(name)
    }
}

/// A field declared directly on an introspectable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: TypeTag,
}

impl Field {
    pub const fn new(name: &'static str, ty: TypeTag) -> Self {
        Self { name, ty }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

pub enum Invoker<T> {
    Get(fn(&T) -> Value),
    Set(fn(&mut T, Value) -> Result<()>),
}

impl<T> Clone for Invoker<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Invoker<T> {}

/// A statically declared accessor on `T`.
pub struct Method<T> {
    pub name: &'static str,
    pub params: &'static [TypeTag],
    pub return_type: TypeTag,
    pub visibility: Visibility,
    pub invoker: Invoker<T>,
}

impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Method<T> {}

impl<T> fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("return_type", &self.return_type)
            .field("visibility", &self.visibility)
            .finish()
    }
}

impl<T> Method<T> {
    pub fn getter(name: &'static str, return_type: TypeTag, get: fn(&T) -> Value) -> Self {
        Self {
            name,
            params: &[],
            return_type,
            visibility: Visibility::Public,
            invoker: Invoker::Get(get),
        }
    }

    pub fn setter(
        name: &'static str,
        param: &'static [TypeTag],
        set: fn(&mut T, Value) -> Result<()>,
    ) -> Self {
        Self {
            name,
            params: param,
            return_type: TypeTag::Void,
            visibility: Visibility::Public,
            invoker: Invoker::Set(set),
        }
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn invoke_get(&self, target: &T) -> Result<Value> {
        match self.invoker {
            Invoker::Get(get) => Ok(get(target)),
            Invoker::Set(_) => Err(PasteboxError::TypeMismatch {
                member: self.name.to_string(),
                expected: "getter".to_string(),
                found: "setter".to_string(),
            }),
        }
    }

    pub fn invoke_set(&self, target: &mut T, value: Value) -> Result<()> {
        let set = match self.invoker {
            Invoker::Set(set) => set,
            Invoker::Get(_) => {
                return Err(PasteboxError::TypeMismatch {
                    member: self.name.to_string(),
                    expected: "setter".to_string(),
                    found: "getter".to_string(),
                })
            }
        };

        if let Some(param) = self.params.first() {
            if !param.accepts(&value) {
                return Err(PasteboxError::TypeMismatch {
                    member: self.name.to_string(),
                    expected: param.to_string(),
                    found: TypeTag::describe(&value).to_string(),
                });
            }
        }

        set(target, value)
    }
}
