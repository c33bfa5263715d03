use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when no payload (or no interpreter) could be found.
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit status used when the payload exists but could not be executed.
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

#[derive(Error, Debug)]
pub enum ShimError {
    #[error("Can't find {} or {}", .compiled.display(), .source_path.display())]
    PayloadNotFound {
        compiled: PathBuf,
        source_path: PathBuf,
    },

    #[error("failed to execute {}: {source}", .program.to_string_lossy())]
    Spawn {
        program: OsString,
        #[source]
        source: io::Error,
    },

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}

impl ShimError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ShimError::PayloadNotFound { .. } => EXIT_NOT_FOUND,
            ShimError::Spawn { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                io::ErrorKind::PermissionDenied => EXIT_NOT_EXECUTABLE,
                _ => 1,
            },
            ShimError::Report(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_both_candidates() {
        let err = ShimError::PayloadNotFound {
            compiled: PathBuf::from("./billable_job_stats.pyc"),
            source_path: PathBuf::from("./billable_job_stats.py"),
        };
        assert_eq!(
            err.to_string(),
            "Can't find ./billable_job_stats.pyc or ./billable_job_stats.py"
        );
        assert_eq!(err.exit_code(), EXIT_NOT_FOUND);
    }

    #[test]
    fn spawn_errors_map_like_a_shell() {
        let spawn = |kind| ShimError::Spawn {
            program: OsString::from("python"),
            source: io::Error::from(kind),
        };
        assert_eq!(spawn(io::ErrorKind::NotFound).exit_code(), 127);
        assert_eq!(spawn(io::ErrorKind::PermissionDenied).exit_code(), 126);
        assert_eq!(spawn(io::ErrorKind::Interrupted).exit_code(), 1);
    }
}
