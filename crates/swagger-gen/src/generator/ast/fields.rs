use crate::generator::ast::{Documentation, GoType};

pub const OMIT_EMPTY: &str = "omitempty";

/// One field of a generated Go struct.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct FieldDef {
  #[builder(into)]
  pub name: String,
  pub go_type: GoType,
  /// The property name as written in the document; the wire name.
  #[builder(into)]
  pub json_key: String,
  #[builder(default)]
  pub required: bool,
  #[builder(default)]
  pub docs: Documentation,
}

impl FieldDef {
  /// Value of the `json` struct tag.
  #[must_use]
  pub fn json_tag(&self) -> String {
    if self.required {
      self.json_key.clone()
    } else {
      format!("{},{OMIT_EMPTY}", self.json_key)
    }
  }

  /// The full backquoted tag literal, e.g. `` `json:"name,omitempty"` ``.
  #[must_use]
  pub fn tag_literal(&self) -> String {
    format!("`json:\"{}\"`", self.json_tag())
  }
}
