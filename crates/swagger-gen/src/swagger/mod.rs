//! Swagger 2.0 document model.
//!
//! A deliberately small, read-only view of the document: definitions, paths
//! and the response schemas of each operation. Parsing is plain `serde`, so
//! the same model loads from JSON and YAML.

mod schema;


use std::collections::BTreeMap;

use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;

pub(crate) use schema::{is_definition_ref, ref_base_name};
pub use schema::{AdditionalProperties, Schema};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerSpec {
  #[serde(default)]
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub definitions: IndexMap<String, Schema>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
  pub get: Option<Operation>,
  pub put: Option<Operation>,
  pub post: Option<Operation>,
  pub delete: Option<Operation>,
  pub options: Option<Operation>,
  pub head: Option<Operation>,
  pub patch: Option<Operation>,
}

impl PathItem {
  /// Iterates the operations declared on this path, in a fixed method order.
  pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
    [
      (Method::GET, &self.get),
      (Method::PUT, &self.put),
      (Method::POST, &self.post),
      (Method::DELETE, &self.delete),
      (Method::OPTIONS, &self.options),
      (Method::HEAD, &self.head),
      (Method::PATCH, &self.patch),
    ]
    .into_iter()
    .filter_map(|(method, operation)| operation.as_ref().map(|op| (method, op)))
  }
}

/// One row of [`SwaggerSpec::operation_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationEntry {
  pub id: String,
  pub method: Method,
  pub path: String,
  pub summary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default)]
  pub operation_id: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub responses: Responses,
}

/// Responses keyed by numeric status code. The `default` response has no
/// status code and is not kept.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "IndexMap<String, Response>")]
pub struct Responses {
  pub status_codes: BTreeMap<u16, Response>,
}

impl TryFrom<IndexMap<String, Response>> for Responses {
  type Error = String;

  fn try_from(entries: IndexMap<String, Response>) -> Result<Self, Self::Error> {
    let mut responses = Responses::default();
    for (key, response) in entries {
      if key == "default" || key.starts_with("x-") {
        continue;
      }
      let code = key
        .parse::<u16>()
        .map_err(|_| format!("invalid response status code '{key}'"))?;
      responses.status_codes.insert(code, response);
    }
    Ok(responses)
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
  #[serde(default)]
  pub schema: Option<Schema>,
}

impl SwaggerSpec {
  pub fn definition(&self, name: &str) -> Option<&Schema> {
    self.definitions.get(name)
  }

  /// Visits every operation with the identifier it is addressed by: its
  /// `operationId`, or `"METHOD /path"` when the document gives none.
  pub fn for_each_operation<'a>(&'a self, mut visit: impl FnMut(String, Method, &'a str, &'a Operation)) {
    for (path, item) in &self.paths {
      for (method, operation) in item.operations() {
        let id = operation_identifier(&method, path, operation);
        visit(id, method, path.as_str(), operation);
      }
    }
  }

  /// Every operation with its address, sorted by id. Operations sharing an
  /// id keep their document order.
  pub fn operation_index(&self) -> Vec<OperationEntry> {
    let mut index = Vec::new();
    self.for_each_operation(|id, method, path, operation| {
      index.push(OperationEntry {
        id,
        method,
        path: path.to_string(),
        summary: operation.summary.clone().unwrap_or_default(),
      });
    });
    index.sort_by(|a, b| a.id.cmp(&b.id));
    index
  }

  /// Looks up an operation by the identifier [`SwaggerSpec::for_each_operation`] reports.
  pub fn operation(&self, id: &str) -> Option<(Method, &str, &Operation)> {
    let mut found = None;
    self.for_each_operation(|candidate, method, path, operation| {
      if found.is_none() && candidate == id {
        found = Some((method, path, operation));
      }
    });
    found
  }
}

fn operation_identifier(method: &Method, path: &str, operation: &Operation) -> String {
  match operation.operation_id.as_deref() {
    Some(id) if !id.is_empty() => id.to_string(),
    _ => format!("{} {path}", method.as_str()),
  }
}
