//! Material documents stored as RON.

use std::path::{Path, PathBuf};

use matgrid_core::material::PbrMaterial;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize material: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn load(path: &Path) -> Result<PbrMaterial, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_owned(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| DocumentError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// Loads the document, or a fresh material named after the file when it does
/// not exist yet.
pub fn load_or_new(path: &Path) -> Result<PbrMaterial, DocumentError> {
    match load(path) {
        Err(DocumentError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "material".to_owned());
            log::info!("{} not found, starting with new material \"{name}\"", path.display());
            Ok(PbrMaterial::new(name))
        }
        other => other,
    }
}

pub fn save(path: &Path, material: &PbrMaterial) -> Result<(), DocumentError> {
    let content = ron::ser::to_string_pretty(material, ron::ser::PrettyConfig::default())?;
    std::fs::write(path, content).map_err(|source| DocumentError::Write {
        path: path.to_owned(),
        source,
    })?;
    log::info!("Saved {}", path.display());
    Ok(())
}
