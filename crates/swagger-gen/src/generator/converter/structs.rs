use itertools::Itertools;

use super::{ConversionOutput, GenerationContext, type_mapper::TypeMapper};
use crate::{
  generator::{
    ast::{Documentation, FieldDef, StructDef, TypeDecl},
    error::GenerateResult,
    naming::identifiers::field_name,
  },
  swagger::Schema,
};

/// Builds Go structs from object schemas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StructBuilder<'a> {
  type_mapper: TypeMapper<'a>,
}

impl<'a> StructBuilder<'a> {
  pub(crate) fn new(context: &'a GenerationContext) -> Self {
    Self {
      type_mapper: TypeMapper::new(context),
    }
  }

  /// Builds the struct for `schema` followed by every type hoisted out of its fields.
  pub(crate) fn build(&self, name: &str, schema: &Schema) -> GenerateResult<Vec<TypeDecl>> {
    Ok(self.build_struct(name, schema)?.into_decls())
  }

  /// Converts an object schema into a struct named by its title, or `name` when untitled.
  ///
  /// Fields follow the lexicographic order of the property names. Each field's
  /// type is resolved under the prefix `<StructName><FieldName>`, which is what
  /// inline objects nested in it end up being called.
  pub(crate) fn build_struct(&self, name: &str, schema: &Schema) -> GenerateResult<ConversionOutput<StructDef>> {
    let struct_name = schema.title().unwrap_or(name).to_string();

    let mut fields = Vec::with_capacity(schema.properties.len());
    let mut inline_types = vec![];

    for (prop_name, prop_schema) in schema.properties.iter().sorted_by_key(|(key, _)| *key) {
      let go_name = field_name(prop_name, prop_schema);
      let resolved = self.type_mapper.map(&format!("{struct_name}{go_name}"), prop_schema)?;

      // `required` is read from the property's own schema, not the parent's list.
      fields.push(
        FieldDef::builder()
          .name(go_name)
          .go_type(resolved.result)
          .json_key(prop_name.as_str())
          .required(prop_schema.requires(prop_name))
          .docs(Documentation::from_optional(prop_schema.description()))
          .build(),
      );
      inline_types.extend(resolved.inline_types);
    }

    let struct_def = StructDef::builder()
      .name(struct_name)
      .docs(Documentation::from_optional(schema.description()))
      .fields(fields)
      .build();

    Ok(ConversionOutput::with_inline_types(struct_def, inline_types))
  }
}
