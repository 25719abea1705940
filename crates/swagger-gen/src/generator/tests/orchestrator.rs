use crate::{
  generator::{error::GenerateError, orchestrator::Orchestrator},
  tests::common::{names, parse_spec, petstore},
};

fn select(names: &[&str]) -> Vec<String> {
  names.iter().map(ToString::to_string).collect()
}

#[test]
fn test_orchestrator_metadata() {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let metadata = orchestrator.metadata();
  assert_eq!(metadata.title, "Swagger Petstore");
  assert_eq!(metadata.version, "1.0.0");
}

#[test]
fn test_orchestrator_generate_empty_selection() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let output = orchestrator.generate(&[], &[])?;

  assert!(output.types.is_empty());
  assert_eq!(output.stats.types_generated, 0);
  assert_eq!(output.stats.definitions_generated, 0);
  assert_eq!(output.stats.operations_converted, 0);
  Ok(())
}

#[test]
fn selection_order_and_duplicates_do_not_matter() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);

  let forward = orchestrator.generate(&select(&["Pet", "Owner"]), &select(&["listPets"]))?;
  let shuffled = orchestrator.generate(&select(&["Owner", "Pet", "Owner"]), &select(&["listPets", "listPets"]))?;

  assert_eq!(forward.types, shuffled.types);
  assert_eq!(
    names(&forward.types),
    vec![
      "Owner",
      "OwnerAddress",
      "Pet",
      "listPetsOKResponse",
      "listPetsOKResponseItem"
    ]
  );
  assert_eq!(
    orchestrator.render("swagger.yaml", &forward.types)?,
    orchestrator.render("swagger.yaml", &shuffled.types)?
  );
  Ok(())
}

#[test]
fn array_definitions_become_slices() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let output = orchestrator.generate(&select(&["Pets", "Tags"]), &[])?;

  assert_eq!(names(&output.types), vec!["Pets", "Tags", "Item"]);
  assert_eq!(output.stats.slices_generated, 2);
  assert_eq!(output.stats.structs_generated, 1);
  assert_eq!(output.stats.types_generated, 3);
  assert_eq!(output.stats.definitions_generated, 2);

  let code = orchestrator.render("swagger.yaml", &output.types)?;
  assert!(code.contains("// A list of pets.\ntype Pets []Pet\n"));
  assert!(code.contains("type Tags []Item\n\ntype Item struct {\n\tLabel string `json:\"label,omitempty\"`\n}\n"));
  Ok(())
}

#[test]
fn definitions_ignore_the_qualifier() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "api", Some("models".to_string()));
  let output = orchestrator.generate(&select(&["Pets"]), &[])?;

  let code = orchestrator.render("swagger.yaml", &output.types)?;
  assert!(code.contains("type Pets []Pet\n"));
  assert!(!code.contains("import"));
  Ok(())
}

#[test]
fn unknown_definition_aborts() {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let err = orchestrator.generate(&select(&["Pet", "Unicorn"]), &[]).unwrap_err();

  assert_eq!(err, GenerateError::DefinitionNotFound("Unicorn".to_string()));
  assert_eq!(err.to_string(), "definition `Unicorn` not found in spec");
}

#[test]
fn unknown_operation_aborts() {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let err = orchestrator.generate(&[], &select(&["adoptPet"])).unwrap_err();

  assert_eq!(err.to_string(), "operation `adoptPet` not found in spec");
}

#[test]
fn skipped_responses_are_counted() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let output = orchestrator.generate(&[], &select(&["createPets", "showPetById"]))?;

  assert_eq!(output.stats.operations_converted, 2);
  assert_eq!(output.stats.skipped_responses.len(), 2);
  assert_eq!(names(&output.types), vec!["showPetByIdNotFoundResponse"]);
  Ok(())
}

#[test]
fn multi_type_definition_names_the_node() {
  let spec = parse_spec(
    r"
swagger: '2.0'
info: { title: t, version: '1' }
paths: {}
definitions:
  Mixed:
    type: object
    properties:
      value:
        type: [string, integer]
",
  );
  let err = Orchestrator::new(spec, "types", None)
    .generate(&select(&["Mixed"]), &[])
    .unwrap_err();

  assert_eq!(
    err,
    GenerateError::MultiTypeSchema {
      path: "MixedValue".to_string(),
      types: "[string, integer]".to_string(),
    }
  );
}
