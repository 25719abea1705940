use proptest::prelude::*;

use crate::{
  generator::naming::identifiers::{camel_case_to_underscore, field_name, to_go_name, underscore_to_camel_case},
  tests::common::parse_schema,
};

#[test]
fn test_go_names() {
  let cases = [
    ("name", "Name"),
    ("owner_id", "OwnerId"),
    ("zip_code", "ZipCode"),
    ("petId", "PetId"),
    ("a__b", "AB"),
    ("_leading", "Leading"),
    ("id", "ID"),
    ("Id", "ID"),
    ("ID", "ID"),
    ("iD", "ID"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_go_name(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_camel_to_underscore() {
  let cases = [
    ("OwnerId", "owner_id"),
    ("Name", "name"),
    ("HTTPServer", "httpserver"),
    ("petStoreURL", "pet_store_url"),
  ];
  for (input, expected) in cases {
    assert_eq!(camel_case_to_underscore(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn title_overrides_field_name() {
  let titled = parse_schema("type: string\ntitle: Nickname");
  assert_eq!(field_name("pet_name", &titled), "Nickname");

  let untitled = parse_schema("type: string");
  assert_eq!(field_name("pet_name", &untitled), "PetName");
}

proptest! {
  #[test]
  fn snake_case_survives_round_trip(name in "[a-z]{2,8}(_[a-z]{2,8}){0,3}") {
    let camel = underscore_to_camel_case(&name);
    prop_assert_eq!(camel_case_to_underscore(&camel), name.clone());
    prop_assert_eq!(underscore_to_camel_case(&camel_case_to_underscore(&camel)), camel);
  }

  #[test]
  fn id_maps_to_acronym_in_any_case(name in "[iI][dD]") {
    prop_assert_eq!(to_go_name(&name), "ID");
  }
}
