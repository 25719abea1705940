use std::path::PathBuf;

use crate::{
  tests::common::PETSTORE_YAML,
  ui::{
    Colors,
    cli::GenerateArgs,
    colors::Theme,
    commands::{GenerateConfig, generate_code},
  },
};

fn args(dir: &std::path::Path) -> GenerateArgs {
  GenerateArgs {
    spec: dir.join("petstore.yaml"),
    package: "types".to_string(),
    definitions: vec![],
    operations: vec![],
    output: dir.join("out").join("types.go"),
    definitions_package: "types".to_string(),
    verbose: false,
    quiet: true,
  }
}

fn quiet_colors() -> Colors {
  Colors::new(false, Theme::Dark)
}

#[test]
fn selections_are_sorted_and_deduplicated() {
  let mut raw = args(&PathBuf::from("."));
  raw.definitions = vec!["Pet".into(), " Owner".into(), "Pet".into(), String::new()];
  raw.operations = vec!["showPetById".into(), "listPets".into()];

  let config = GenerateConfig::from_args(raw);
  assert_eq!(config.definitions, vec!["Owner", "Pet"]);
  assert_eq!(config.operations, vec!["listPets", "showPetById"]);
}

#[test]
fn qualifier_matching_package_or_empty_is_dropped() {
  let config = GenerateConfig::from_args(args(&PathBuf::from(".")));
  assert_eq!(config.definitions_package, None);

  let mut raw = args(&PathBuf::from("."));
  raw.package = "api".to_string();
  raw.definitions_package = String::new();
  assert_eq!(GenerateConfig::from_args(raw).definitions_package, None);

  let mut raw = args(&PathBuf::from("."));
  raw.package = "api".to_string();
  assert_eq!(
    GenerateConfig::from_args(raw).definitions_package.as_deref(),
    Some("types")
  );
}

#[test]
fn staging_file_sits_next_to_output() {
  assert_eq!(
    super::staging_path(&PathBuf::from("gen/types.go")),
    PathBuf::from("gen/.types.go.tmp")
  );
}

#[tokio::test]
async fn writes_generated_file() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  tokio::fs::write(dir.path().join("petstore.yaml"), PETSTORE_YAML).await?;

  let mut raw = args(dir.path());
  raw.definitions = vec!["Pet".into()];
  raw.operations = vec!["listPets".into()];
  let config = GenerateConfig::from_args(raw);
  let output = config.output.clone();

  generate_code(config, &quiet_colors()).await?;

  let code = tokio::fs::read_to_string(&output).await?;
  assert!(code.starts_with("// Code generated by swagger-gen from "));
  assert!(code.contains("package types\n"));
  assert!(code.contains("type Pet struct {\n"));
  assert!(code.contains("type listPetsOKResponse []listPetsOKResponseItem\n"));
  assert!(!output.with_file_name(".types.go.tmp").exists());
  Ok(())
}

#[tokio::test]
async fn unknown_definition_writes_nothing() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  tokio::fs::write(dir.path().join("petstore.yaml"), PETSTORE_YAML).await?;

  let mut raw = args(dir.path());
  raw.definitions = vec!["Pet".into(), "Unicorn".into()];
  let config = GenerateConfig::from_args(raw);
  let output = config.output.clone();

  let err = generate_code(config, &quiet_colors()).await.unwrap_err();
  assert_eq!(err.to_string(), "definition `Unicorn` not found in spec");
  assert!(!output.exists());
  assert!(!output.with_file_name(".types.go.tmp").exists());
  Ok(())
}

#[tokio::test]
async fn failed_run_keeps_previous_output() -> anyhow::Result<()> {
  let dir = tempfile::tempdir()?;
  tokio::fs::write(dir.path().join("petstore.yaml"), PETSTORE_YAML).await?;

  let mut raw = args(dir.path());
  raw.operations = vec!["adoptPet".into()];
  let config = GenerateConfig::from_args(raw);
  tokio::fs::create_dir_all(dir.path().join("out")).await?;
  tokio::fs::write(&config.output, "previous").await?;
  let output = config.output.clone();

  assert!(generate_code(config, &quiet_colors()).await.is_err());
  assert_eq!(tokio::fs::read_to_string(&output).await?, "previous");
  Ok(())
}
