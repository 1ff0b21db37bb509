use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("no parent dir for {}", .0.display())]
    NoParent(PathBuf),
    #[error("cannot serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot replace {}: {}", path.display(), source.error)]
    Persist {
        path: PathBuf,
        source: tempfile::PersistError,
    },
}

/// Load a whole transcript document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Atomic write: write to temp file in same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(StoreError::NoParent(path.to_path_buf())),
    };
    fs::create_dir_all(parent).map_err(write_err)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(data).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Render `value` as JSON with four-space indentation and a trailing newline.
/// Non-ASCII text is written as-is, not escaped.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Serialize `value` as indented JSON and write it atomically to `path`.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let data = to_pretty_json(value)?;
    write_atomic(path, &data)
}
