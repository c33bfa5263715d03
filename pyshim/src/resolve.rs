use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ShimError};
use crate::variant::Variant;

/// The two payload paths derived from a base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidates {
    pub compiled: PathBuf,
    pub source: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub variant: Variant,
    pub path: PathBuf,
}

impl Candidates {
    pub fn for_base(base: &Path) -> Self {
        Self {
            compiled: with_suffix(base, Variant::Compiled.suffix()),
            source: with_suffix(base, Variant::Source.suffix()),
        }
    }

    pub fn path(&self, variant: Variant) -> &Path {
        match variant {
            Variant::Compiled => &self.compiled,
            Variant::Source => &self.source,
        }
    }

    /// Picks the first existing candidate in precedence order, compiled first.
    pub fn select(&self, only: Option<Variant>) -> Result<Selection> {
        let order: &[Variant] = match only {
            Some(Variant::Compiled) => &[Variant::Compiled],
            Some(Variant::Source) => &[Variant::Source],
            None => &[Variant::Compiled, Variant::Source],
        };

        for &variant in order {
            let path = self.path(variant);
            if is_payload(path) {
                debug!(?variant, path = %path.display(), "selected payload");
                return Ok(Selection {
                    variant,
                    path: path.to_path_buf(),
                });
            }
            debug!(?variant, path = %path.display(), "candidate missing");
        }

        Err(self.not_found())
    }

    pub fn not_found(&self) -> ShimError {
        ShimError::PayloadNotFound {
            compiled: self.compiled.clone(),
            source_path: self.source.clone(),
        }
    }
}

/// Regular file, following symlinks.
pub fn is_payload(path: &Path) -> bool {
    path.is_file()
}

// Appends rather than replacing any existing extension: `a.b` -> `a.b.pyc`.
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut raw = OsString::from(base.as_os_str());
    raw.push(suffix);
    PathBuf::from(raw)
}
