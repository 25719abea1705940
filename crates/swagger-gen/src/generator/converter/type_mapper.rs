use super::{ConversionOutput, GenerationContext, structs::StructBuilder};
use crate::{
  generator::{
    ast::{GoPrimitive, GoType},
    error::{GenerateError, GenerateResult},
  },
  swagger::{AdditionalProperties, Schema},
};

/// Maps schema nodes to Go type expressions.
///
/// `path` is the name prefix of the node being mapped: the enclosing type's
/// name followed by the field name. Inline objects are declared under that
/// name, and every error reports it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TypeMapper<'a> {
  context: &'a GenerationContext,
}

impl<'a> TypeMapper<'a> {
  pub(crate) fn new(context: &'a GenerationContext) -> Self {
    Self { context }
  }

  /// Maps `schema` to a type, returning any struct declarations hoisted out of it.
  ///
  /// `x-nullable: true` wraps whatever comes out in a pointer, once.
  pub(crate) fn map(&self, path: &str, schema: &Schema) -> GenerateResult<ConversionOutput<GoType>> {
    let output = self.map_shape(path, schema)?;
    if schema.is_nullable() {
      return Ok(output.map(GoType::pointer_to));
    }
    Ok(output)
  }

  fn map_shape(&self, path: &str, schema: &Schema) -> GenerateResult<ConversionOutput<GoType>> {
    let types = &schema.schema_type;
    if types.len() > 1 {
      return Err(GenerateError::MultiTypeSchema {
        path: path.to_string(),
        types: types.to_string(),
      });
    }

    let Some(schema_type) = types.single() else {
      return schema
        .reference()
        .map(|reference| ConversionOutput::new(self.context.reference_type(reference)))
        .ok_or_else(|| GenerateError::MissingTypeAndRef { path: path.to_string() });
    };

    match schema_type {
      "string" => Ok(ConversionOutput::new(GoPrimitive::String.into())),
      "integer" | "int" => Self::integer_type(path, schema.format()).map(ConversionOutput::new),
      "boolean" | "bool" => Ok(ConversionOutput::new(GoPrimitive::Bool.into())),
      "object" => self.map_object(path, schema),
      "array" => self.map_array(path, schema),
      other => Err(GenerateError::UnsupportedType {
        path: path.to_string(),
        schema_type: other.to_string(),
      }),
    }
  }

  fn integer_type(path: &str, format: &str) -> GenerateResult<GoType> {
    let primitive = match format {
      "uint8" => GoPrimitive::Uint8,
      "uint16" => GoPrimitive::Uint16,
      "uint32" => GoPrimitive::Uint32,
      "int64" | "" => GoPrimitive::Int64,
      other => {
        return Err(GenerateError::UnsupportedIntegerFormat {
          path: path.to_string(),
          format: other.to_string(),
        });
      }
    };
    Ok(primitive.into())
  }

  fn map_object(&self, path: &str, schema: &Schema) -> GenerateResult<ConversionOutput<GoType>> {
    if !schema.properties.is_empty() {
      let built = StructBuilder::new(self.context).build_struct(path, schema)?;
      let type_ref = GoType::named(built.result.name.as_str());
      return Ok(ConversionOutput::with_inline_types(type_ref, built.into_decls()));
    }

    match &schema.additional_properties {
      Some(AdditionalProperties::Schema(value_schema)) => Ok(self.map(path, value_schema)?.map(GoType::map_of)),
      Some(AdditionalProperties::Allowed(_)) => Ok(ConversionOutput::new(GoType::Interface.map_of())),
      None => Ok(ConversionOutput::new(GoType::Interface)),
    }
  }

  fn map_array(&self, path: &str, schema: &Schema) -> GenerateResult<ConversionOutput<GoType>> {
    let items = schema
      .single_item()
      .ok_or_else(|| GenerateError::UnsupportedArraySchema { path: path.to_string() })?;
    Ok(self.map(path, items)?.map(GoType::slice_of))
  }
}
