mod documentation;
mod fields;
mod types;

#[cfg(test)]
mod tests;

pub use documentation::Documentation;
pub use fields::FieldDef;
pub use types::{GoPrimitive, GoType};

/// Go struct definition
#[derive(Debug, Clone, Default, PartialEq, Eq, bon::Builder)]
pub struct StructDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  #[builder(default)]
  pub fields: Vec<FieldDef>,
}

/// Named slice type, `type Name []Elem`
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct SliceDef {
  #[builder(into)]
  pub name: String,
  #[builder(default)]
  pub docs: Documentation,
  pub element: GoType,
}

/// A top-level type declaration in the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDecl {
  Struct(StructDef),
  Slice(SliceDef),
}

impl TypeDecl {
  #[must_use]
  pub fn name(&self) -> &str {
    match self {
      Self::Struct(def) => &def.name,
      Self::Slice(def) => &def.name,
    }
  }

  #[cfg(test)]
  pub fn as_struct(&self) -> Option<&StructDef> {
    match self {
      Self::Struct(def) => Some(def),
      Self::Slice(_) => None,
    }
  }

  #[cfg(test)]
  pub fn as_slice(&self) -> Option<&SliceDef> {
    match self {
      Self::Slice(def) => Some(def),
      Self::Struct(_) => None,
    }
  }
}

impl From<StructDef> for TypeDecl {
  fn from(def: StructDef) -> Self {
    Self::Struct(def)
  }
}

impl From<SliceDef> for TypeDecl {
  fn from(def: SliceDef) -> Self {
    Self::Slice(def)
  }
}
