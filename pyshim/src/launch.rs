use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, warn};

use crate::error::{Result, ShimError};
use crate::resolve::Selection;
use crate::variant::Variant;

/// Builds the child command for a selection: the compiled variant goes
/// through the interpreter, the source variant is executed directly.
pub fn command_for(selection: &Selection, interpreter: &OsStr, args: &[OsString]) -> Command {
    let mut command = match selection.variant {
        Variant::Compiled => {
            let mut command = Command::new(interpreter);
            command.arg(&selection.path);
            command
        }
        Variant::Source => Command::new(executable_path(&selection.path)),
    };
    command.args(args);
    command
}

// A bare program name is searched on PATH by `Command`, so anchor it to the
// working directory the existence check looked in.
fn executable_path(path: &Path) -> PathBuf {
    if path.components().count() == 1 && !path.has_root() {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

/// Full argv the child will see, for display.
pub fn command_line(selection: &Selection, interpreter: &OsStr, args: &[OsString]) -> Vec<OsString> {
    let command = command_for(selection, interpreter, args);
    std::iter::once(command.get_program().to_os_string())
        .chain(command.get_args().map(OsStr::to_os_string))
        .collect()
}

/// Runs the selection with inherited stdio and blocks until it exits.
pub fn run(selection: &Selection, interpreter: &OsStr, args: &[OsString]) -> Result<i32> {
    let mut command = command_for(selection, interpreter, args);
    debug!(program = ?command.get_program(), argc = args.len(), "spawning payload");

    let status = command.status().map_err(|source| ShimError::Spawn {
        program: command.get_program().to_os_string(),
        source,
    })?;

    let code = exit_code(status);
    debug!(code, "payload exited");
    Ok(code)
}

/// Exit status the shim should report for a finished child. A child killed by
/// signal N maps to 128 + N, as in POSIX shells.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!(signal, "payload terminated by signal");
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(variant: Variant, path: &str) -> Selection {
        Selection {
            variant,
            path: PathBuf::from(path),
        }
    }

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn compiled_runs_through_interpreter() {
        let line = command_line(
            &selection(Variant::Compiled, "./billable_job_stats.pyc"),
            OsStr::new("python3"),
            &args(&["--month=2024-01"]),
        );
        assert_eq!(line, args(&["python3", "./billable_job_stats.pyc", "--month=2024-01"]));
    }

    #[test]
    fn source_is_executed_directly() {
        let line = command_line(
            &selection(Variant::Source, "./billable_job_stats.py"),
            OsStr::new("python3"),
            &args(&["--user", "jdoe", "a b"]),
        );
        assert_eq!(line, args(&["./billable_job_stats.py", "--user", "jdoe", "a b"]));
    }

    #[test]
    fn bare_source_is_anchored_to_working_directory() {
        let line = command_line(
            &selection(Variant::Source, "confirm_jobIDs.py"),
            OsStr::new("python3"),
            &[],
        );
        assert_eq!(line, vec![PathBuf::from(".").join("confirm_jobIDs.py").into_os_string()]);

        let line = command_line(
            &selection(Variant::Compiled, "confirm_jobIDs.pyc"),
            OsStr::new("python3"),
            &[],
        );
        assert_eq!(line, args(&["python3", "confirm_jobIDs.pyc"]));
    }

    #[cfg(unix)]
    #[test]
    fn signal_maps_to_shell_convention() {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status: low 7 bits carry the terminating signal.
        assert_eq!(exit_code(ExitStatus::from_raw(15)), 143);
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
    }
}
