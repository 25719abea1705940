use crate::swagger::{Schema, SwaggerSpec};

pub(crate) const PETSTORE_YAML: &str = include_str!("../../fixtures/petstore.yaml");
pub(crate) const PETSTORE_JSON: &str = include_str!("../../fixtures/petstore.json");

pub(crate) fn petstore() -> SwaggerSpec {
  serde_yaml::from_str(PETSTORE_YAML).expect("petstore fixture should parse")
}

pub(crate) fn parse_schema(yaml: &str) -> Schema {
  serde_yaml::from_str(yaml).expect("test schema should parse")
}

pub(crate) fn parse_spec(yaml: &str) -> SwaggerSpec {
  serde_yaml::from_str(yaml).expect("test spec should parse")
}

pub(crate) fn names(types: &[crate::generator::ast::TypeDecl]) -> Vec<&str> {
  types.iter().map(crate::generator::ast::TypeDecl::name).collect()
}
