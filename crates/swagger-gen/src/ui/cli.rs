use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "swagger-gen")]
#[command(author, version, about = "Swagger 2.0 to Go type generator")]
#[command(styles = Colors::clap_styles())]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Commands>,

  #[command(flatten)]
  pub generate: GenerateArgs,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a Swagger document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

/// Options for the default generate action.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
  /// Path to the Swagger document (`.yaml`/`.yml` is read as YAML, anything else as JSON)
  #[arg(short = 'f', long, value_name = "FILE", default_value = "swagger.yaml")]
  pub spec: PathBuf,

  /// Go package name of the generated file
  #[arg(long, value_name = "NAME", default_value = "types")]
  pub package: String,

  /// Definitions to generate (repeatable, comma-separated)
  #[arg(short = 'd', long = "definition", value_name = "NAMES", value_delimiter = ',')]
  pub definitions: Vec<String>,

  /// Operation ids to generate response types for (repeatable, comma-separated)
  #[arg(short = 'p', long, value_name = "IDS", value_delimiter = ',')]
  pub operations: Vec<String>,

  /// Path where the generated Go code will be written
  #[arg(short, long, value_name = "FILE", default_value = "types.go")]
  pub output: PathBuf,

  /// Package qualifying definition references from operation responses (empty disables)
  #[arg(long, value_name = "NAME", default_value = "types")]
  pub definitions_package: String,

  /// Enable verbose output with per-type progress
  #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List every definition with its declared type
  Definitions {
    /// Path to the Swagger document
    #[arg(short = 'f', long, value_name = "FILE", default_value = "swagger.yaml")]
    spec: PathBuf,
  },
  /// List every operation with its method and path
  Operations {
    /// Path to the Swagger document
    #[arg(short = 'f', long, value_name = "FILE", default_value = "swagger.yaml")]
    spec: PathBuf,
  },
}
