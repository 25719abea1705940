use crate::generator::ast::{FieldDef, GoPrimitive, GoType};

#[test]
fn optional_fields_carry_omitempty() {
  let field = FieldDef::builder()
    .name("Tag")
    .go_type(GoPrimitive::String.into())
    .json_key("tag")
    .build();

  assert_eq!(field.json_tag(), "tag,omitempty");
  assert_eq!(field.tag_literal(), "`json:\"tag,omitempty\"`");
}

#[test]
fn required_fields_omit_omitempty() {
  let field = FieldDef::builder()
    .name("Name")
    .go_type(GoType::from(GoPrimitive::String))
    .json_key("name")
    .required(true)
    .build();

  assert_eq!(field.tag_literal(), "`json:\"name\"`");
}
