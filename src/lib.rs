pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::PasteboxConfig;
pub use crate::core::accessors::{
    class_fields, field_getter_method, field_has_type, field_name_from_getter,
    field_name_from_getter_method, field_setter_method, get_field_value, method_has_return_type,
    prepare_getter_method_name, prepare_setter_method_name, set_field_value,
};
pub use crate::core::collections::{
    array_contains_value, double_array_contains_value, int_array_contains_value, is_empty_array,
    long_array_contains_value, remove_element_from_string_array, string_array_contains_value,
};
pub use crate::core::csv::{
    concat_string_array_to_csv, split_csv_to_long_array, split_csv_to_string_array, CsvCodec,
};
pub use crate::core::enums::{includes_in_enum, is_in_enum, is_int_in_enum, is_variant_in_enum};
pub use crate::core::strings::{
    contains_only_alphanumeric, current_time_millis, equal_strings, is_empty_string,
    keep_alphanumeric_and_space, long_from_string_value, max_length, min_length,
    null_safe_string, pattern, remove_extra_spaces, remove_new_line_return_tab_with_space,
    remove_spaces, replace_multiple_space_with_single_space, replace_string_with_boolean,
};
pub use crate::core::trace::{
    anyhow_stack_trace_as_string, stack_trace_as_string, TraceFormatter, TraceReport,
};
pub use crate::core::BLANK_STRING_VALUE;
pub use crate::domain::model::{Field, Method, TypeTag};
pub use crate::domain::ports::{EnumSet, Introspect};
pub use crate::utils::error::{PasteboxError, Result};
