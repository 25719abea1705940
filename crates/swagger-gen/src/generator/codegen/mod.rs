//! Go source emitter.
//!
//! Declarations are assembled as `genco` Go tokens; genco collects the
//! imports of qualified references and lays out the package clause. Struct
//! field columns are aligned the way gofmt would align them.

use genco::{
  fmt,
  lang::go::{self, Go},
  quote,
};

use super::{ast::TypeDecl, error::GenerateResult};

pub mod structs;


pub(crate) const GENERATOR_NAME: &str = "swagger-gen";

/// A Go source file under construction.
#[derive(Debug, Clone)]
pub(crate) struct GoFile<'a> {
  package: &'a str,
  source: Option<&'a str>,
  types: &'a [TypeDecl],
}

impl<'a> GoFile<'a> {
  pub(crate) fn new(package: &'a str, types: &'a [TypeDecl]) -> Self {
    Self {
      package,
      source: None,
      types,
    }
  }

  /// Names the schema document in the generated-code marker.
  #[must_use]
  pub(crate) fn with_source(mut self, source: &'a str) -> Self {
    self.source = Some(source);
    self
  }

  /// The marker line Go tooling recognizes as generated code.
  pub(crate) fn header(&self) -> String {
    match self.source {
      Some(source) => format!("// Code generated by {GENERATOR_NAME} from {source}. DO NOT EDIT."),
      None => format!("// Code generated by {GENERATOR_NAME}. DO NOT EDIT."),
    }
  }

  /// All declarations, one blank line apart.
  pub(crate) fn tokens(&self) -> go::Tokens {
    let declarations = self.types.iter().map(|ty| match ty {
      TypeDecl::Struct(def) => structs::generate_struct(def, self.package),
      TypeDecl::Slice(def) => structs::generate_slice(def, self.package),
    });

    quote! {
      $(for declaration in declarations join ($['\n']) => $declaration)
    }
  }

  pub(crate) fn render(&self) -> GenerateResult<String> {
    let config = go::Config::default().with_package(self.package.to_string());
    let body = format_go(&self.tokens(), &config)?;
    Ok(format!("{}\n\n{body}", self.header()))
  }
}

/// Formats tokens as a Go file with tab indentation, ending in one newline.
pub(crate) fn format_go(tokens: &go::Tokens, config: &go::Config) -> GenerateResult<String> {
  let format = fmt::Config::from_lang::<Go>().with_indentation(fmt::Indentation::Tab);
  let mut writer = fmt::FmtWriter::new(String::new());
  tokens.format_file(&mut writer.as_formatter(&format), config)?;

  let mut code = writer.into_inner().trim_end().to_string();
  code.push('\n');
  Ok(code)
}

/// Doc lines as `//` comments.
fn doc_comments(lines: &[String]) -> Vec<String> {
  lines
    .iter()
    .map(|line| {
      if line.is_empty() {
        "//".to_string()
      } else {
        format!("// {line}")
      }
    })
    .collect()
}
