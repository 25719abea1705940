use crate::generator::{
  ast::{GoType, SliceDef, StructDef},
  converter::{ConversionOutput, GenerationContext},
};

#[test]
fn definition_refs_take_the_configured_package() {
  let context = GenerationContext::with_definitions_package(Some("models".to_string()));
  assert_eq!(
    context.reference_type("#/definitions/Pet"),
    GoType::qualified("models", "Pet")
  );
  assert_eq!(context.reference_type("#/parameters/Limit"), GoType::named("Limit"));
}

#[test]
fn empty_package_disables_qualification() {
  let context = GenerationContext::with_definitions_package(Some(String::new()));
  assert_eq!(context.reference_type("#/definitions/Pet"), GoType::named("Pet"));
  assert_eq!(
    GenerationContext::default().reference_type("#/definitions/Pet"),
    GoType::named("Pet")
  );
}

#[test]
fn into_decls_puts_primary_first() {
  let extra = StructDef::builder().name("PetOwner").build();
  let output = ConversionOutput::with_inline_types(StructDef::builder().name("Pet").build(), vec![extra.into()])
    .map(|def| SliceDef::builder().name(def.name).element(GoType::named("PetOwner")).build());

  let names: Vec<_> = output.into_decls().iter().map(|decl| decl.name().to_string()).collect();
  assert_eq!(names, vec!["Pet", "PetOwner"]);
}
