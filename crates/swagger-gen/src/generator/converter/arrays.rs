use super::{ConversionOutput, GenerationContext, type_mapper::TypeMapper};
use crate::{
  generator::{
    ast::{Documentation, SliceDef, TypeDecl},
    error::{GenerateError, GenerateResult},
    naming::constants::ITEM_SUFFIX,
  },
  swagger::Schema,
};

/// Builds named slice types from top-level array schemas.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrayBuilder<'a> {
  type_mapper: TypeMapper<'a>,
}

impl<'a> ArrayBuilder<'a> {
  pub(crate) fn new(context: &'a GenerationContext) -> Self {
    Self {
      type_mapper: TypeMapper::new(context),
    }
  }

  /// Builds `type <name> []<Item>` plus the declarations of the item type.
  ///
  /// An untitled item is named `<name>Item`, so an inline object item becomes
  /// a struct of that name.
  pub(crate) fn build(&self, name: &str, schema: &Schema) -> GenerateResult<Vec<TypeDecl>> {
    let items = schema
      .single_item()
      .ok_or_else(|| GenerateError::UnsupportedArraySchema { path: name.to_string() })?;

    let item_name = items
      .title()
      .map_or_else(|| format!("{name}{ITEM_SUFFIX}"), str::to_string);
    let item = self.type_mapper.map(&item_name, items)?;

    let slice_def = SliceDef::builder()
      .name(name)
      .docs(Documentation::from_optional(schema.description()))
      .element(item.result)
      .build();

    Ok(ConversionOutput::with_inline_types(slice_def, item.inline_types).into_decls())
  }
}
