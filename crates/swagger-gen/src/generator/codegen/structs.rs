use genco::{lang::go, quote};

use crate::generator::ast::{FieldDef, GoType, SliceDef, StructDef};

use super::doc_comments;

pub(crate) fn generate_struct(def: &StructDef, package: &str) -> go::Tokens {
  let docs = doc_comments(def.docs.lines());

  if def.fields.is_empty() {
    return quote! {
      $(for line in docs join ($['\r']) => $line)
      type $(def.name.as_str()) $("struct{}")
    };
  }

  let lines: Vec<go::Tokens> = field_runs(&def.fields)
    .into_iter()
    .flat_map(|run| aligned_fields(run, package))
    .collect();

  quote! {
    $(for line in docs join ($['\r']) => $line)
    type $(def.name.as_str()) struct {
      $(for line in lines join ($['\r']) => $line)
    }
  }
}

pub(crate) fn generate_slice(def: &SliceDef, package: &str) -> go::Tokens {
  let docs = doc_comments(def.docs.lines());
  let slice = type_tokens(&def.element.relative_to(package).slice_of());

  quote! {
    $(for line in docs join ($['\r']) => $line)
    type $(def.name.as_str()) $slice
  }
}

/// Writes a type expression. Qualified names become genco imports so the
/// file header picks up their packages.
pub(crate) fn type_tokens(ty: &GoType) -> go::Tokens {
  let mut tokens = go::Tokens::new();
  append_type(&mut tokens, ty);
  tokens
}

fn append_type(tokens: &mut go::Tokens, ty: &GoType) {
  match ty {
    GoType::Primitive(primitive) => tokens.append(primitive.to_string()),
    GoType::Named {
      package: Some(package),
      name,
    } => tokens.append(go::import(package.clone(), name.clone())),
    GoType::Named { package: None, name } => tokens.append(name.clone()),
    GoType::Slice(inner) => {
      tokens.append("[]");
      append_type(tokens, inner);
    }
    GoType::Map(value) => {
      tokens.append("map[string]");
      append_type(tokens, value);
    }
    GoType::Pointer(inner) => {
      tokens.append("*");
      append_type(tokens, inner);
    }
    GoType::Interface => tokens.append("interface{}"),
  }
}

/// Splits fields into alignment runs. A field with a doc comment starts a new
/// run, mirroring how gofmt stops column alignment at comment lines.
fn field_runs(fields: &[FieldDef]) -> Vec<&[FieldDef]> {
  let mut runs = vec![];
  let mut start = 0;
  for (idx, field) in fields.iter().enumerate() {
    if idx > start && !field.docs.is_empty() {
      runs.push(&fields[start..idx]);
      start = idx;
    }
  }
  runs.push(&fields[start..]);
  runs
}

/// One token line per doc comment and field. Columns are padded by character
/// count, so names outside ASCII line up too.
fn aligned_fields(run: &[FieldDef], package: &str) -> Vec<go::Tokens> {
  let columns: Vec<(&FieldDef, GoType, usize)> = run
    .iter()
    .map(|field| {
      let ty = field.go_type.relative_to(package);
      let width = ty.to_string().chars().count();
      (field, ty, width)
    })
    .collect();

  let name_width = run.iter().map(|field| field.name.chars().count()).max().unwrap_or_default();
  let type_width = columns.iter().map(|(_, _, width)| *width).max().unwrap_or_default();

  let mut lines = vec![];
  for (field, ty, width) in columns {
    lines.extend(doc_comments(field.docs.lines()).into_iter().map(|line| quote!($line)));

    let mut line = go::Tokens::new();
    line.append(format!("{:<name_width$}", field.name));
    line.space();
    line.append(type_tokens(&ty));
    if width < type_width {
      line.append(" ".repeat(type_width - width));
    }
    line.space();
    line.append(field.tag_literal());
    lines.push(line);
  }
  lines
}
