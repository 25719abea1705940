use http::{Method, StatusCode};

use crate::{
  generator::naming::{constants::RESPONSE_SUFFIX, identifiers::underscore_to_camel_case},
  swagger::{Operation, Schema},
};

/// The canonical reason phrase of a status code squashed into an identifier
/// fragment (`404` -> `NotFound`). Unknown codes yield an empty string.
pub(crate) fn status_text(code: u16) -> String {
  StatusCode::from_u16(code)
    .ok()
    .and_then(|status| status.canonical_reason())
    .unwrap_or_default()
    .chars()
    .filter(char::is_ascii_alphanumeric)
    .collect()
}

/// Name of the type generated for one response body: the schema's title, or
/// `<operation><StatusText>Response`.
pub(crate) fn response_type_name(operation_name: &str, code: u16, schema: &Schema) -> String {
  schema.title().map_or_else(
    || format!("{operation_name}{}{RESPONSE_SUFFIX}", status_text(code)),
    str::to_string,
  )
}

/// Prefix for the response types of an operation.
///
/// This is the `operationId` when present. Otherwise it is the lowercase
/// method followed by the camel-cased path (`GET /pets/{petId}` -> `getPetsPetId`).
pub(crate) fn operation_type_prefix(method: &Method, path: &str, operation: &Operation) -> String {
  if let Some(id) = operation.operation_id.as_deref().filter(|id| !id.is_empty()) {
    return id.to_string();
  }

  let snake: String = path
    .chars()
    .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
    .collect();
  format!("{}{}", method.as_str().to_ascii_lowercase(), underscore_to_camel_case(&snake))
}
