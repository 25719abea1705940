use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  swagger::{Schema, SwaggerSpec},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::spec::SpecLoader,
};

fn new_table(headers: &[&str], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(colors.label().into_comfy()));
  }
  table.set_header(row);
  table
}

/// The declared type of a definition as shown in listings.
fn describe_type(schema: &Schema) -> String {
  if let Some(reference) = schema.reference() {
    return reference.to_string();
  }
  match schema.schema_type.len() {
    0 => "-".to_string(),
    1 => schema.schema_type.as_slice().join(""),
    _ => schema.schema_type.to_string(),
  }
}

/// Rows of `(name, type, title)` sorted by definition name.
pub(crate) fn definition_rows(spec: &SwaggerSpec) -> Vec<(String, String, String)> {
  spec
    .definitions
    .iter()
    .sorted_by_key(|(name, _)| *name)
    .map(|(name, schema)| {
      (
        name.clone(),
        describe_type(schema),
        schema.title().unwrap_or_default().to_string(),
      )
    })
    .collect()
}

pub async fn list_definitions(spec_path: &Path, colors: &Colors) -> anyhow::Result<()> {
  let spec = SpecLoader::load(spec_path).await?;
  let mut table = new_table(&["DEFINITION", "TYPE", "TITLE"], colors);

  for (name, schema_type, title) in definition_rows(&spec) {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(name)
        .fg(colors.value().into_comfy())
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(schema_type).fg(colors.accent().into_comfy()));
    row.add_cell(Cell::new(title).fg(colors.timestamp().into_comfy()));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

pub async fn list_operations(spec_path: &Path, colors: &Colors) -> anyhow::Result<()> {
  let spec = SpecLoader::load(spec_path).await?;
  let mut table = new_table(&["OPERATION ID", "METHOD", "PATH", "SUMMARY"], colors);

  for entry in spec.operation_index() {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(entry.id)
        .fg(colors.value().into_comfy())
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(entry.method.as_str())
        .fg(colors.accent().into_comfy())
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(entry.path).fg(colors.label().into_comfy()));
    row.add_cell(Cell::new(entry.summary).fg(colors.timestamp().into_comfy()));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}
