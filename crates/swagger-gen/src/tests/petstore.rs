use crate::{
  generator::{error::GenerateError, orchestrator::Orchestrator},
  swagger::SwaggerSpec,
  tests::common::{PETSTORE_JSON, names, petstore},
};

fn select(names: &[&str]) -> Vec<String> {
  names.iter().map(ToString::to_string).collect()
}

#[test]
fn pet_and_list_pets_render_as_go() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let output = orchestrator.generate(&select(&["Pet"]), &select(&["listPets"]))?;
  let code = orchestrator.render("petstore.yaml", &output.types)?;

  let expected = "\
// Code generated by swagger-gen from petstore.yaml. DO NOT EDIT.

package types

type Pet struct {
\tID   int64   `json:\"id,omitempty\"`
\tName string  `json:\"name\"`
\tTag  *string `json:\"tag,omitempty\"`
}

type listPetsOKResponse []listPetsOKResponseItem

type listPetsOKResponseItem struct {
\tTag string `json:\"tag,omitempty\"`
}
";
  assert_eq!(code, expected);
  Ok(())
}

#[test]
fn owner_hoists_inline_address() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let output = orchestrator.generate(&select(&["Owner"]), &[])?;

  assert_eq!(names(&output.types), vec!["Owner", "OwnerAddress"]);
  let code = orchestrator.render("petstore.yaml", &output.types)?;

  assert!(code.contains("// The person who owns one or more pets.\ntype Owner struct {\n"));
  assert!(code.contains("\tAddress OwnerAddress `json:\"address,omitempty\"`\n"));
  assert!(code.contains("\t// Name shown on receipts.\n\tDisplayName string"));
  assert!(code.contains("\tLabels      map[string]interface{} `json:\"labels,omitempty\"`\n"));
  assert!(code.contains("\tOwnerId     int64                  `json:\"owner_id,omitempty\"`\n"));
  assert!(code.contains("\tPets        []Pet                  `json:\"pets,omitempty\"`\n"));
  assert!(code.contains("\tZipCode    string `json:\"zip_code\"`\n"));
  Ok(())
}

#[test]
fn response_refs_are_qualified_and_imported() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "api", Some("models".to_string()));
  let output = orchestrator.generate(&[], &select(&["showPetById"]))?;

  assert_eq!(names(&output.types), vec!["showPetByIdNotFoundResponse"]);
  assert_eq!(output.stats.skipped_responses.len(), 1);
  assert_eq!(output.stats.skipped_responses[0].status_code, 200);

  let code = orchestrator.render("petstore.yaml", &output.types)?;
  assert!(code.contains("package api\n\nimport \"models\"\n"));
  assert!(code.contains("\tPet models.Pet `json:\"pet,omitempty\"`\n\t// Why the lookup failed\n\tReason string"));
  Ok(())
}

#[test]
fn operation_without_id_is_addressed_by_method_and_path() -> anyhow::Result<()> {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let output = orchestrator.generate(&[], &select(&["GET /stores/{storeId}/inventory"]))?;

  assert_eq!(names(&output.types), vec!["getStoresStoreIdInventoryOKResponse"]);
  Ok(())
}

#[test]
fn unsupported_integer_format_names_the_field() {
  let orchestrator = Orchestrator::new(petstore(), "types", None);
  let err = orchestrator.generate(&select(&["Error"]), &[]).unwrap_err();

  assert_eq!(
    err,
    GenerateError::UnsupportedIntegerFormat {
      path: "ErrorCode".to_string(),
      format: "int32".to_string(),
    }
  );
}

#[test]
fn json_and_yaml_fixtures_generate_identically() -> anyhow::Result<()> {
  let from_json: SwaggerSpec = serde_json::from_str(PETSTORE_JSON)?;
  let definitions = select(&["Owner", "Pet", "Pets", "Tags"]);
  let operations = select(&["listPets", "showPetById"]);

  let yaml_orchestrator = Orchestrator::new(petstore(), "types", Some("types".to_string()));
  let json_orchestrator = Orchestrator::new(from_json, "types", Some("types".to_string()));

  let yaml = yaml_orchestrator.generate(&definitions, &operations)?;
  let json = json_orchestrator.generate(&definitions, &operations)?;
  assert_eq!(
    yaml_orchestrator.render("petstore", &yaml.types)?,
    json_orchestrator.render("petstore", &json.types)?
  );
  Ok(())
}
