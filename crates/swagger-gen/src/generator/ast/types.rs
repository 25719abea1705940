use std::fmt;

use strum::Display;

/// Go builtin types the generator can emit.
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum GoPrimitive {
  String,
  Bool,
  Int64,
  Uint8,
  Uint16,
  Uint32,
}

/// A Go type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoType {
  Primitive(GoPrimitive),
  /// A declared type, optionally qualified by the package it lives in.
  Named { package: Option<String>, name: String },
  Slice(Box<GoType>),
  /// `map[string]V`; keys are always strings.
  Map(Box<GoType>),
  /// Marks a value that may be absent or null.
  Pointer(Box<GoType>),
  /// `interface{}`, for schemas that say nothing about their shape.
  Interface,
}

impl GoType {
  pub fn named(name: impl Into<String>) -> Self {
    Self::Named {
      package: None,
      name: name.into(),
    }
  }

  pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
    Self::Named {
      package: Some(package.into()),
      name: name.into(),
    }
  }

  #[must_use]
  pub fn slice_of(self) -> Self {
    Self::Slice(Box::new(self))
  }

  #[must_use]
  pub fn map_of(self) -> Self {
    Self::Map(Box::new(self))
  }

  #[must_use]
  pub fn pointer_to(self) -> Self {
    Self::Pointer(Box::new(self))
  }

  /// The expression as written inside `package`: references into that
  /// package drop their qualifier.
  #[must_use]
  pub fn relative_to(&self, package: &str) -> Self {
    match self {
      Self::Named {
        package: Some(qualifier),
        name,
      } if qualifier == package => Self::named(name.clone()),
      Self::Slice(inner) => inner.relative_to(package).slice_of(),
      Self::Map(value) => value.relative_to(package).map_of(),
      Self::Pointer(inner) => inner.relative_to(package).pointer_to(),
      Self::Primitive(_) | Self::Named { .. } | Self::Interface => self.clone(),
    }
  }
}

impl From<GoPrimitive> for GoType {
  fn from(primitive: GoPrimitive) -> Self {
    Self::Primitive(primitive)
  }
}

impl fmt::Display for GoType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Primitive(primitive) => write!(f, "{primitive}"),
      Self::Named {
        package: Some(package),
        name,
      } => write!(f, "{package}.{name}"),
      Self::Named { package: None, name } => f.write_str(name),
      Self::Slice(inner) => write!(f, "[]{inner}"),
      Self::Map(value) => write!(f, "map[string]{value}"),
      Self::Pointer(inner) => write!(f, "*{inner}"),
      Self::Interface => f.write_str("interface{}"),
    }
  }
}
