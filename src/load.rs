use serde::de::DeserializeOwned;
use thiserror::Error;

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::{catalogue::PriceEntry, sales::SaleRecord};

/// Errors from reading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("invalid JSON format in file '{}'", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("reading '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a JSON array of `T` from the file at `path`.
///
/// # Errors
///
/// Returns errors if:
/// * The file does not exist
/// * The file cannot be opened or read
/// * The contents are not a JSON array of `T`
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        if source.is_io() {
            LoadError::Io {
                path: path.to_path_buf(),
                source: source.into(),
            }
        } else {
            LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Reads a price catalogue file.
///
/// # Errors
///
/// See [`load_json`].
pub fn load_catalogue(path: impl AsRef<Path>) -> Result<Vec<PriceEntry>, LoadError> {
    load_json(path)
}

/// Reads a sales record file.
///
/// # Errors
///
/// See [`load_json`].
pub fn load_sales(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>, LoadError> {
    load_json(path)
}
