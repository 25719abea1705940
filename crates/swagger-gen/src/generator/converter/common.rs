use crate::{
  generator::ast::{GoType, TypeDecl},
  swagger::{is_definition_ref, ref_base_name},
};

/// A converted value plus the named types hoisted out while producing it.
///
/// Callers concatenate `inline_types` in the order they receive them, which
/// keeps the emitted declarations in depth-first discovery order.
#[derive(Debug, Clone)]
pub(crate) struct ConversionOutput<T> {
  pub result: T,
  pub inline_types: Vec<TypeDecl>,
}

impl<T> ConversionOutput<T> {
  pub(crate) fn new(result: T) -> Self {
    Self {
      result,
      inline_types: vec![],
    }
  }

  pub(crate) fn with_inline_types(result: T, inline_types: Vec<TypeDecl>) -> Self {
    Self { result, inline_types }
  }

  pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> ConversionOutput<U> {
    ConversionOutput {
      result: f(self.result),
      inline_types: self.inline_types,
    }
  }
}

impl<T: Into<TypeDecl>> ConversionOutput<T> {
  /// Flattens into declaration order: the primary type first, then its extras.
  pub(crate) fn into_decls(self) -> Vec<TypeDecl> {
    let mut types = Vec::with_capacity(1 + self.inline_types.len());
    types.push(self.result.into());
    types.extend(self.inline_types);
    types
  }
}

/// Settings for one top-level build.
///
/// A fresh context is made for every requested definition and every response,
/// so nothing discovered while building one declaration leaks into another.
#[derive(Debug, Clone, Default)]
pub(crate) struct GenerationContext {
  definitions_package: Option<String>,
}

impl GenerationContext {
  /// A context whose local definition references are qualified with `package`.
  pub(crate) fn with_definitions_package(package: Option<String>) -> Self {
    Self {
      definitions_package: package.filter(|p| !p.is_empty()),
    }
  }

  /// Resolves a `$ref` to the Go type it names.
  pub(crate) fn reference_type(&self, reference: &str) -> GoType {
    let name = ref_base_name(reference);
    match &self.definitions_package {
      Some(package) if is_definition_ref(reference) => GoType::qualified(package.as_str(), name),
      _ => GoType::named(name),
    }
  }
}
