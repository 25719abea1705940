use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::swagger::SwaggerSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }

  /// Parses a Swagger 2.0 document in this format.
  pub fn parse(self, content: &[u8]) -> anyhow::Result<SwaggerSpec> {
    match self {
      Self::Json => Ok(serde_json::from_slice(content)?),
      Self::Yaml => Ok(serde_yaml::from_slice(content)?),
    }
  }
}

pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path).await?;
    Ok(Self {
      file,
      format: SpecFormat::from_path(path),
    })
  }

  pub fn parse(&self) -> anyhow::Result<SwaggerSpec> {
    self.format.parse(self.file.as_slice())
  }

  /// Opens and parses `path` in one step.
  pub async fn load(path: &Path) -> anyhow::Result<SwaggerSpec> {
    let load = async { Self::open(path).await?.parse() };
    load
      .await
      .with_context(|| format!("failed to load spec file {}", path.display()))
  }
}
