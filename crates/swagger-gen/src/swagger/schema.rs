use indexmap::IndexMap;
use serde::Deserialize;

pub(crate) const DEFINITIONS_REF_PREFIX: &str = "#/definitions/";
pub(crate) const NULLABLE_EXTENSION: &str = "x-nullable";

/// A Swagger 2.0 schema object.
///
/// Only the keywords the generator reads are modelled. Everything else, vendor
/// extensions included, lands in [`Schema::extensions`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
  #[serde(rename = "$ref", default)]
  pub reference: Option<String>,
  #[serde(rename = "type", default)]
  pub schema_type: SchemaTypes,
  #[serde(default)]
  pub format: Option<String>,
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub properties: IndexMap<String, Schema>,
  #[serde(default)]
  pub required: Vec<String>,
  #[serde(default)]
  pub additional_properties: Option<AdditionalProperties>,
  #[serde(default)]
  pub items: Option<SchemaItems>,
  #[serde(flatten)]
  pub extensions: IndexMap<String, serde_json::Value>,
}

impl Schema {
  /// Returns the title when it is set and non-empty.
  pub fn title(&self) -> Option<&str> {
    self.title.as_deref().filter(|title| !title.is_empty())
  }

  /// Returns the description when it is set and non-empty.
  pub fn description(&self) -> Option<&str> {
    self.description.as_deref().filter(|desc| !desc.is_empty())
  }

  pub fn format(&self) -> &str {
    self.format.as_deref().unwrap_or_default()
  }

  /// Returns the `$ref` target when it is set and non-empty.
  pub fn reference(&self) -> Option<&str> {
    self.reference.as_deref().filter(|r| !r.is_empty())
  }

  /// Reads a boolean vendor extension. Keys without the `x-` prefix are never
  /// treated as extensions.
  pub fn extension_bool(&self, key: &str) -> Option<bool> {
    if !key.starts_with("x-") {
      return None;
    }
    self.extensions.get(key).and_then(serde_json::Value::as_bool)
  }

  pub fn is_nullable(&self) -> bool {
    self.extension_bool(NULLABLE_EXTENSION).unwrap_or(false)
  }

  /// Whether `name` appears in this schema's own `required` list.
  pub fn requires(&self, name: &str) -> bool {
    self.required.iter().any(|required| required == name)
  }

  /// Returns the single item schema of an array, or `None` for a missing or
  /// tuple-style `items`.
  pub fn single_item(&self) -> Option<&Schema> {
    match self.items.as_ref()? {
      SchemaItems::Single(schema) => Some(schema),
      SchemaItems::Tuple(_) => None,
    }
  }
}

/// The `type` keyword, which Swagger allows as a single string or a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "StringOrList")]
pub struct SchemaTypes(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
  Single(String),
  List(Vec<String>),
}

impl From<StringOrList> for SchemaTypes {
  fn from(value: StringOrList) -> Self {
    match value {
      StringOrList::Single(single) => Self(vec![single]),
      StringOrList::List(list) => Self(list),
    }
  }
}

impl SchemaTypes {
  #[cfg(test)]
  pub fn new(types: impl IntoIterator<Item = impl Into<String>>) -> Self {
    Self(types.into_iter().map(Into::into).collect())
  }

  pub fn as_slice(&self) -> &[String] {
    &self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  #[cfg(test)]
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Returns the declared type when exactly one is present.
  pub fn single(&self) -> Option<&str> {
    match self.0.as_slice() {
      [single] => Some(single.as_str()),
      _ => None,
    }
  }
}

impl std::fmt::Display for SchemaTypes {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "[{}]", self.0.join(", "))
  }
}

/// `additionalProperties`: either a flag or the schema of the map values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Allowed(bool),
  Schema(Box<Schema>),
}

/// `items`: a single element schema, or the tuple form which the generator rejects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaItems {
  Tuple(Vec<Schema>),
  Single(Box<Schema>),
}

/// Returns the final path segment of a `$ref`, the name a referenced type is
/// generated under.
pub(crate) fn ref_base_name(reference: &str) -> &str {
  let trimmed = reference.trim_end_matches('/');
  trimmed.rsplit('/').next().unwrap_or(trimmed)
}

pub(crate) fn is_definition_ref(reference: &str) -> bool {
  reference.starts_with(DEFINITIONS_REF_PREFIX)
}
