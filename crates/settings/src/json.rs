use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to prepare directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn read<T: DeserializeOwned>(path: &Path) -> Result<T, JsonFileError> {
    let contents = fs::read_to_string(path).map_err(|source| JsonFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| JsonFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` as pretty-printed UTF-8 JSON and writes it atomically.
/// Non-ASCII text is written unescaped, so the files stay hand-editable.
pub fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), JsonFileError> {
    let payload = serde_json::to_string_pretty(value).map_err(|source| JsonFileError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| JsonFileError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, payload.as_bytes()).map_err(|source| JsonFileError::Write {
        path: tmp_path.clone(),
        source,
    })?;
    fs::rename(&tmp_path, path).map_err(|source| JsonFileError::Write {
        path: path.to_path_buf(),
        source,
    })
}
