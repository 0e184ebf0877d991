//! Label pool ("set") storage.
//!
//! A set is a named, line-delimited UTF-8 text file `<name>.txt` inside one
//! base directory. The base directory is always passed in explicitly.
//!
//! Loading is lenient: an unknown name yields an empty pool rather than an
//! error, blank lines are skipped and repeated lines are kept once. Any other
//! I/O failure is reported as [`StoreError::Io`].

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Extension of set files on disk.
pub const SET_EXTENSION: &str = "txt";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid set name {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Access to named label pools.
pub trait SetStore {
    /// Names of all stored sets, sorted.
    fn list_names(&self) -> Result<Vec<String>>;

    /// Entries of a set; empty when the set does not exist.
    fn load_lines(&self, name: &str) -> Result<Vec<String>>;

    /// Create a new set. Returns `false` if one with this name already exists.
    fn save(&self, name: &str, lines: &[String]) -> Result<bool>;

    /// Remove a set. Returns `false` if it did not exist.
    fn delete(&self, name: &str) -> Result<bool>;

    /// Replace the entries of an existing set. Returns `false` if it did not exist.
    fn replace(&self, name: &str, lines: &[String]) -> Result<bool> {
        if !self.delete(name)? {
            return Ok(false);
        }
        self.save(name, lines)
    }
}

/// Sets stored as `<base_dir>/<name>.txt`.
#[derive(Debug, Clone)]
pub struct FileSetStore {
    base_dir: PathBuf,
}

impl FileSetStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of a set file. Rejects names that would escape the base directory.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let trimmed = name.trim();
        let invalid = trimmed.is_empty()
            || trimmed != name
            || trimmed.starts_with('.')
            || trimmed.contains(['/', '\\', '\0']);
        if invalid {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.{}", name, SET_EXTENSION)))
    }
}

/// Set name of a file: the stem of a `<name>.txt` file, `None` for anything
/// else, so every listed name resolves back through [`FileSetStore::path_for`].
fn name_from_file(file_name: &str) -> Option<&str> {
    let path = Path::new(file_name);
    if path.extension()? != SET_EXTENSION {
        return None;
    }
    let stem = path.file_stem()?.to_str()?;
    if stem.trim().is_empty() || stem.trim() != stem || stem.starts_with('.') {
        None
    } else {
        Some(stem)
    }
}

/// Non-blank lines, first occurrence only, trailing `\r` and surrounding
/// whitespace removed.
pub fn normalize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(lines.len());
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty() && seen.insert(*line))
        .map(str::to_string)
        .collect()
}

impl SetStore for FileSetStore {
    fn list_names(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.base_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(&self.base_dir)(e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(io_err(&self.base_dir))?;
            let is_file = entry
                .file_type()
                .map_err(io_err(&entry.path()))?
                .is_file();
            if !is_file {
                continue;
            }
            let file_name = entry.file_name();
            if let Some(name) = file_name.to_str().and_then(name_from_file) {
                names.push(name.to_string());
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn load_lines(&self, name: &str) -> Result<Vec<String>> {
        let path = self.path_for(name)?;
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(set = name, "set not found, using empty pool");
                return Ok(Vec::new());
            }
            Err(e) => return Err(io_err(&path)(e)),
        };
        let lines: Vec<&str> = text.lines().collect();
        Ok(normalize_lines(&lines))
    }

    fn save(&self, name: &str, lines: &[String]) -> Result<bool> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.base_dir).map_err(io_err(&self.base_dir))?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(io_err(&path)(e)),
        };

        let mut body = String::new();
        for line in normalize_lines(lines) {
            body.push_str(&line);
            body.push('\n');
        }
        file.write_all(body.as_bytes()).map_err(io_err(&path))?;
        file.flush().map_err(io_err(&path))?;

        info!(set = name, path = %path.display(), "saved set");
        Ok(true)
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(set = name, "deleted set");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_err(&path)(e)),
        }
    }
}
