// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where sequences come from.
//!
//! The analyses only ever see `&[u8]`. This module is the seam between them and
//! the outside world: a named source that can produce the whole content at once.
//! Files and in-memory buffers are provided; anything else implements the trait.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SequenceError;

/// A named, fully materializable sequence.
pub trait SequenceSource {
    /// Human-facing name used in logs and errors.
    fn name(&self) -> &str;

    /// Produce the full content.
    fn load(&self) -> Result<Vec<u8>, SequenceError>;
}

/// A sequence backed by a file on disk, read as raw bytes.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        FileSource { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SequenceSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<u8>, SequenceError> {
        fs::read(&self.path).map_err(|source| SequenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// A sequence already in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    name: String,
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        MemorySource {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl SequenceSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<u8>, SequenceError> {
        Ok(self.bytes.clone())
    }
}

/// Load every source in order.
///
/// Strict mode returns the first failure. Lenient mode logs a warning and
/// substitutes an empty sequence, so one unreadable input doesn't sink the run.
pub fn load_all<S: SequenceSource>(sources: &[S], lenient: bool) -> Result<Vec<Vec<u8>>, SequenceError> {
    sources
        .iter()
        .map(|source| match source.load() {
            Ok(bytes) => {
                debug!(source = source.name(), len = bytes.len(), "loaded sequence");
                Ok(bytes)
            }
            Err(e) if lenient => {
                warn!(source = source.name(), error = %e, "treating unreadable source as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        })
        .collect()
}
