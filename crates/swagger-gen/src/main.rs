#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
use clap::Parser;

use crate::ui::{Cli, Colors, Commands, ListCommands, colors};

mod generator;
mod swagger;
mod ui;
mod utils;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let colors = Colors::new(colors::colors_enabled(cli.color), colors::detect_theme(cli.theme));

  match cli.command {
    Some(Commands::List { list_command }) => match list_command {
      ListCommands::Definitions { spec } => ui::commands::list_definitions(&spec, &colors).await?,
      ListCommands::Operations { spec } => ui::commands::list_operations(&spec, &colors).await?,
    },
    None => {
      let config = ui::commands::GenerateConfig::from_args(cli.generate);
      ui::commands::generate_code(config, &colors).await?;
    }
  }

  Ok(())
}
