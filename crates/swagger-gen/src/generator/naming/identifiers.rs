use crate::{generator::naming::constants::ID_ACRONYM, swagger::Schema};

/// Converts `snake_case` to `CamelCase`.
///
/// The first character and every character following a run of underscores is
/// upper-cased; underscores are dropped and all other characters are kept as-is.
pub(crate) fn underscore_to_camel_case(source: &str) -> String {
  let mut result = String::with_capacity(source.len());
  let mut capitalize_next = true;

  for c in source.chars() {
    if c == '_' {
      capitalize_next = true;
      continue;
    }
    if capitalize_next {
      result.extend(c.to_uppercase());
      capitalize_next = false;
    } else {
      result.push(c);
    }
  }

  result
}

/// Converts `CamelCase` to `snake_case`.
///
/// An underscore is inserted before a non-lowercase character that directly
/// follows a lowercase one, so acronyms stay glued together (`HTTPServer` -> `httpserver`).
#[cfg(test)]
pub(crate) fn camel_case_to_underscore(source: &str) -> String {
  let mut result = String::with_capacity(source.len() + 4);
  let mut prev_was_lower = false;

  for c in source.chars() {
    let is_lower = c.is_lowercase();
    if !is_lower && prev_was_lower {
      result.push('_');
    }
    result.extend(c.to_lowercase());
    prev_was_lower = is_lower;
  }

  result
}

/// Converts a property name into an exported Go identifier.
///
/// `id` in any casing becomes `ID`; everything else goes through
/// [`underscore_to_camel_case`].
pub(crate) fn to_go_name(name: &str) -> String {
  if name.eq_ignore_ascii_case("id") {
    return ID_ACRONYM.to_string();
  }
  underscore_to_camel_case(name)
}

/// Resolves the Go field name for a property: its own `title` wins over the
/// converted property name.
pub(crate) fn field_name(prop_name: &str, prop_schema: &Schema) -> String {
  prop_schema
    .title()
    .map_or_else(|| to_go_name(prop_name), str::to_string)
}
