use thiserror::Error;

/// Fatal generation errors.
///
/// Schema errors carry the property path (the synthesized type-name prefix)
/// where the unsupported construct was met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
  #[error("definition `{0}` not found in spec")]
  DefinitionNotFound(String),

  #[error("operation `{0}` not found in spec")]
  OperationNotFound(String),

  #[error("{path}: multi-type schema not supported: {types}")]
  MultiTypeSchema { path: String, types: String },

  #[error("{path}: missing type and ref")]
  MissingTypeAndRef { path: String },

  #[error("{path}: integer format `{format}` not implemented")]
  UnsupportedIntegerFormat { path: String, format: String },

  #[error("{path}: array schema without a single `items` schema not supported")]
  UnsupportedArraySchema { path: String },

  #[error("{path}: type `{schema_type}` not supported")]
  UnsupportedType { path: String, schema_type: String },

  #[error("{operation}: multi-type response schema not supported: {types}")]
  MultiTypeResponse { operation: String, types: String },

  #[error("{operation}: response type {types} not supported")]
  UnsupportedResponseType { operation: String, types: String },

  #[error("failed to format Go source")]
  Format(#[from] std::fmt::Error),
}

pub type GenerateResult<T> = Result<T, GenerateError>;
