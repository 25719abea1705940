use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use itertools::Itertools;

use crate::{
  generator::{
    ast::TypeDecl,
    orchestrator::{GenerationStats, Orchestrator},
  },
  swagger::SwaggerSpec,
  ui::{Colors, cli::GenerateArgs},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub spec: PathBuf,
  pub package: String,
  pub definitions: Vec<String>,
  pub operations: Vec<String>,
  pub output: PathBuf,
  pub definitions_package: Option<String>,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  /// Normalises the command line: selections are trimmed, sorted and
  /// deduplicated, and a qualifier that is empty or names the output package
  /// itself is dropped.
  pub fn from_args(args: GenerateArgs) -> Self {
    let GenerateArgs {
      spec,
      package,
      definitions,
      operations,
      output,
      definitions_package,
      verbose,
      quiet,
    } = args;

    let definitions_package = Some(definitions_package.trim().to_string())
      .filter(|qualifier| !qualifier.is_empty() && *qualifier != package);

    Self {
      spec,
      package,
      definitions: normalize_selection(definitions),
      operations: normalize_selection(operations),
      output,
      definitions_package,
      verbose,
      quiet,
    }
  }

  async fn load_spec(&self) -> anyhow::Result<SwaggerSpec> {
    SpecLoader::load(&self.spec).await
  }

  fn create_orchestrator(&self, spec: SwaggerSpec) -> Orchestrator {
    Orchestrator::new(spec, self.package.clone(), self.definitions_package.clone())
  }

  /// Writes `code` next to the destination first and renames it into place,
  /// so a failed write never leaves a truncated output file.
  async fn write_output(&self, code: String) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await?;
    }

    let staging = staging_path(&self.output);
    tokio::fs::write(&staging, code)
      .await
      .with_context(|| format!("failed to write {}", staging.display()))?;

    if let Err(err) = tokio::fs::rename(&staging, &self.output).await {
      let _ = tokio::fs::remove_file(&staging).await;
      return Err(err).with_context(|| format!("failed to write {}", self.output.display()));
    }
    Ok(())
  }
}

fn normalize_selection(names: Vec<String>) -> Vec<String> {
  names
    .into_iter()
    .map(|name| name.trim().to_string())
    .filter(|name| !name.is_empty())
    .sorted()
    .dedup()
    .collect()
}

fn staging_path(output: &Path) -> PathBuf {
  let file_name = output
    .file_name()
    .map_or_else(|| "output".to_string(), |name| name.to_string_lossy().into_owned());
  output.with_file_name(format!(".{file_name}.tmp"))
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn detail(&self, message: &str) {
    if self.config.verbose {
      println!("           {message}");
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn warn(&self, message: &str) {
    if !self.config.quiet {
      eprintln!("{} {message}", "Warning:".with(self.colors.accent()));
    }
  }

  fn log_loading(&self) {
    self.info(&format!("Loading Swagger spec from: {}", self.config.spec.display()));
  }

  fn log_generating(&self, orchestrator: &Orchestrator) {
    let metadata = orchestrator.metadata();
    if !metadata.title.is_empty() {
      self.detail(&format!("{} {}", metadata.title, metadata.version));
    }
    if self.config.definitions.is_empty() && self.config.operations.is_empty() {
      self.warn("no definitions or operations selected; the output will only hold the package clause");
    }
    self.info(&format!("Generating Go types for package {}...", self.config.package));
  }

  fn log_types(&self, types: &[TypeDecl]) {
    for ty in types {
      let kind = match ty {
        TypeDecl::Struct(_) => "struct",
        TypeDecl::Slice(_) => "slice",
      };
      self.detail(&format!("{} {}", kind.with(self.colors.accent()), ty.name()));
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Types generated:", stats.types_generated.to_string());
    self.stat("", format!("{} structs", stats.structs_generated));
    self.stat("", format!("{} slices", stats.slices_generated));
    self.stat("Definitions generated:", stats.definitions_generated.to_string());
    self.stat("Operations converted:", stats.operations_converted.to_string());

    if !stats.skipped_responses.is_empty() {
      self.stat("Responses skipped:", stats.skipped_responses.len().to_string());
      for skipped in &stats.skipped_responses {
        self.detail(&skipped.to_string());
      }
    }
  }

  fn log_writing(&self) {
    self.info(&format!("Writing to: {}", self.config.output.display()));
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        "Successfully generated Go types".with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let spec = config.load_spec().await?;

  let orchestrator = config.create_orchestrator(spec);
  logger.log_generating(&orchestrator);

  let output = orchestrator.generate(&config.definitions, &config.operations)?;
  logger.log_types(&output.types);
  logger.print_statistics(&output.stats);

  let code = orchestrator.render(&config.spec.display().to_string(), &output.types)?;

  logger.log_writing();
  config.write_output(code).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests;
