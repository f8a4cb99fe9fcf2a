use crate::core::BLANK_STRING_VALUE;
use crate::domain::model::{Method, TypeTag};
use crate::domain::ports::Introspect;
use crate::utils::error::{PasteboxError, Result};
use serde_json::Value;

fn prefixed_name(prefix: &str, field: &str, operation: &'static str) -> Result<String> {
    let mut chars = field.chars();
    let first = chars
        .next()
        .ok_or(PasteboxError::EmptyFieldName { operation })?;

    let mut name = String::with_capacity(prefix.len() + field.len());
    name.push_str(prefix);
    name.extend(first.to_uppercase());
    name.push_str(chars.as_str());
    Ok(name)
}

/// `"age"` becomes `"getAge"`.
pub fn prepare_getter_method_name(field: &str) -> Result<String> {
    prefixed_name("get", field, "prepare_getter_method_name")
}

/// `"age"` becomes `"setAge"`.
pub fn prepare_setter_method_name(field: &str) -> Result<String> {
    prefixed_name("set", field, "prepare_setter_method_name")
}

/// Names of the fields declared on `T`, in declaration order.
pub fn class_fields<T: Introspect>(_object: &T) -> Vec<&'static str> {
    T::declared_fields().iter().map(|field| field.name).collect()
}

fn resolve_method<T: Introspect>(name: &str, params: &[TypeTag]) -> Result<Method<T>> {
    tracing::trace!("Resolving {}.{}({:?})", T::TYPE_NAME, name, params);

    let method = T::methods()
        .into_iter()
        .find(|method| method.name == name && method.params == params)
        .ok_or_else(|| PasteboxError::NoSuchMethod {
            type_name: T::TYPE_NAME.to_string(),
            method: name.to_string(),
        })?;

    if !method.is_public() {
        return Err(PasteboxError::AccessDenied {
            type_name: T::TYPE_NAME.to_string(),
            member: name.to_string(),
        });
    }

    Ok(method)
}

/// Finds the public, parameterless `getX` accessor for `field`.
pub fn field_getter_method<T: Introspect>(field: &str, _object: &T) -> Result<Method<T>> {
    resolve_method::<T>(&prepare_getter_method_name(field)?, &[])
}

/// Finds the public `setX` accessor for `field` taking exactly one `param`.
pub fn field_setter_method<T: Introspect>(
    field: &str,
    param: TypeTag,
    _object: &T,
) -> Result<Method<T>> {
    resolve_method::<T>(&prepare_setter_method_name(field)?, &[param])
}

/// `"getAge"` becomes `"age"`. Names that do not start with `get`, and a
/// bare `get`, yield the blank sentinel.
pub fn field_name_from_getter(method_name: &str) -> String {
    let Some(rest) = method_name.strip_prefix("get") else {
        tracing::debug!("'{}' is not a getter name", method_name);
        return BLANK_STRING_VALUE.to_string();
    };

    let mut chars = rest.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => BLANK_STRING_VALUE.to_string(),
    }
}

pub fn field_name_from_getter_method<T>(method: &Method<T>) -> String {
    field_name_from_getter(method.name)
}

/// Compares the declared type of `field_name` with `expected`.
///
/// An absent `expected` is `Ok(false)` without looking the field up.
pub fn field_has_type<T: Introspect>(
    field_name: &str,
    expected: Option<TypeTag>,
    _object: &T,
) -> Result<bool> {
    let Some(expected) = expected else {
        return Ok(false);
    };

    let field = T::declared_fields()
        .iter()
        .find(|field| field.name == field_name)
        .ok_or_else(|| PasteboxError::NoSuchField {
            type_name: T::TYPE_NAME.to_string(),
            field: field_name.to_string(),
        })?;

    Ok(field.ty == expected)
}

pub fn method_has_return_type<T>(method: &Method<T>, expected: Option<TypeTag>) -> bool {
    expected.is_some_and(|expected| method.return_type == expected)
}

/// Resolves the getter for `field` and invokes it.
pub fn get_field_value<T: Introspect>(field: &str, object: &T) -> Result<Value> {
    field_getter_method(field, object)?.invoke_get(object)
}

/// Resolves the setter for `field` by the field's declared type and invokes it.
pub fn set_field_value<T: Introspect>(field: &str, value: Value, object: &mut T) -> Result<()> {
    let declared = T::declared_fields()
        .iter()
        .find(|candidate| candidate.name == field)
        .ok_or_else(|| PasteboxError::NoSuchField {
            type_name: T::TYPE_NAME.to_string(),
            field: field.to_string(),
        })?;

    field_setter_method(field, declared.ty, object)?.invoke_set(object, value)
}
