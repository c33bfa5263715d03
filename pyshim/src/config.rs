use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::variant::Variant;

pub const INTERPRETER_ENV: &str = "PYSHIM_PYTHON";
pub const DEFAULT_INTERPRETER: &str = "python";

/// Everything a dispatch needs, resolved up front so the library never reads
/// `argv[0]` or the environment itself.
#[derive(Clone, Debug)]
pub struct ShimConfig {
    /// Path the `.pyc` / `.py` suffixes are appended to.
    pub base: PathBuf,
    /// Program used to run the compiled variant.
    pub interpreter: OsString,
    /// Restrict the lookup to a single variant.
    pub only: Option<Variant>,
}

impl ShimConfig {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            interpreter: OsString::from(DEFAULT_INTERPRETER),
            only: None,
        }
    }

    /// Like [`ShimConfig::new`], taking the interpreter from `PYSHIM_PYTHON` when set.
    pub fn from_env(base: impl Into<PathBuf>) -> Self {
        let config = Self::new(base);
        match env::var_os(INTERPRETER_ENV) {
            Some(interpreter) if !interpreter.is_empty() => config.with_interpreter(interpreter),
            _ => config,
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<OsString>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_only(mut self, only: Option<Variant>) -> Self {
        self.only = only;
        self
    }
}

/// Derives the lookup base from the shim's `argv[0]`.
///
/// A bare name (no separator) means the shim was found through `PATH`, so the
/// first `PATH` entry holding a file of that name wins, the way a shell fills
/// in `$0`. Anything else is used verbatim; symlinks are left unresolved.
pub fn invocation_base(argv0: &OsStr, path_var: Option<&OsStr>) -> PathBuf {
    let invoked = Path::new(argv0);
    if has_separator(invoked) {
        return invoked.to_path_buf();
    }

    path_var
        .into_iter()
        .flat_map(env::split_paths)
        .map(|dir| {
            // An empty entry means the working directory.
            if dir.as_os_str().is_empty() {
                Path::new(".").join(invoked)
            } else {
                dir.join(invoked)
            }
        })
        .find(|candidate| candidate.is_file())
        .unwrap_or_else(|| invoked.to_path_buf())
}

fn has_separator(path: &Path) -> bool {
    path.components().count() > 1 || path.has_root()
}
