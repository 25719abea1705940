/// Doc comment text attached to a declaration or field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  /// Splits a schema description into comment lines. Escaped `\n` sequences
  /// left in by some spec authors count as line breaks too.
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    let text = input.replace("\\n", "\n");
    Self {
      lines: text.trim_end().lines().map(|line| line.trim_end().to_string()).collect(),
    }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&str>) -> Self {
    desc.map_or_else(Self::default, Self::from_raw)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }
}
