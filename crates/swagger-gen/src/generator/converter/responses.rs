use std::fmt::{Display, Formatter};

use super::{GenerationContext, arrays::ArrayBuilder, structs::StructBuilder};
use crate::{
  generator::{
    ast::TypeDecl,
    error::{GenerateError, GenerateResult},
    naming::responses::response_type_name,
  },
  swagger::Operation,
};

/// Why a response produced no type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SkipReason {
  NoSchema,
  /// The body is a `$ref`; its type comes from the definition it points at.
  Reference(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SkippedResponse {
  pub(crate) operation: String,
  pub(crate) status_code: u16,
  pub(crate) reason: SkipReason,
}

impl Display for SkippedResponse {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match &self.reason {
      SkipReason::NoSchema => write!(f, "{} {}: response has no body schema", self.operation, self.status_code),
      SkipReason::Reference(reference) => write!(
        f,
        "{} {}: response body references {reference}",
        self.operation, self.status_code
      ),
    }
  }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct GeneratedResponses {
  pub(crate) types: Vec<TypeDecl>,
  pub(crate) skipped: Vec<SkippedResponse>,
}

/// Generates one type per response body of an operation.
///
/// Only response bodies are covered; parameters produce no types.
#[derive(Debug, Clone)]
pub(crate) struct ResponseConverter {
  definitions_package: Option<String>,
}

impl ResponseConverter {
  pub(crate) fn new(definitions_package: Option<String>) -> Self {
    Self { definitions_package }
  }

  /// Walks the status-code responses in ascending order.
  ///
  /// Responses without a schema or with a `$ref` schema are skipped; an object
  /// body becomes a struct and an array body a named slice.
  pub(crate) fn generate(&self, operation_name: &str, operation: &Operation) -> GenerateResult<GeneratedResponses> {
    let mut output = GeneratedResponses::default();

    for (&status_code, response) in &operation.responses.status_codes {
      let Some(schema) = response.schema.as_ref() else {
        output.skipped.push(SkippedResponse {
          operation: operation_name.to_string(),
          status_code,
          reason: SkipReason::NoSchema,
        });
        continue;
      };

      if let Some(reference) = schema.reference() {
        output.skipped.push(SkippedResponse {
          operation: operation_name.to_string(),
          status_code,
          reason: SkipReason::Reference(reference.to_string()),
        });
        continue;
      }

      if schema.schema_type.len() > 1 {
        return Err(GenerateError::MultiTypeResponse {
          operation: operation_name.to_string(),
          types: schema.schema_type.to_string(),
        });
      }

      let name = response_type_name(operation_name, status_code, schema);
      let context = GenerationContext::with_definitions_package(self.definitions_package.clone());

      let mut types = match schema.schema_type.single() {
        Some("object") => StructBuilder::new(&context).build(&name, schema)?,
        Some("array") => ArrayBuilder::new(&context).build(&name, schema)?,
        _ => {
          return Err(GenerateError::UnsupportedResponseType {
            operation: operation_name.to_string(),
            types: schema.schema_type.to_string(),
          });
        }
      };
      output.types.append(&mut types);
    }

    Ok(output)
  }
}
