pub mod config;
pub mod error;
pub mod launch;
pub mod logger;
pub mod report;
pub mod resolve;
pub mod variant;

use std::ffi::OsString;

pub use config::{ShimConfig, invocation_base};
pub use error::{Result, ShimError};
pub use report::{CandidateInfo, Resolution};
pub use resolve::{Candidates, Selection};
pub use variant::Variant;

/// Selects the payload for `config.base` and runs it with `args`, returning
/// the exit status the caller should terminate with.
pub fn dispatch(config: &ShimConfig, args: &[OsString]) -> Result<i32> {
    let candidates = Candidates::for_base(&config.base);
    let selection = candidates.select(config.only)?;
    launch::run(&selection, &config.interpreter, args)
}

/// Describes what [`dispatch`] would do, without executing anything.
pub fn resolve(config: &ShimConfig, args: &[OsString]) -> Resolution {
    let candidates = Candidates::for_base(&config.base);
    let info = |variant| {
        let path = candidates.path(variant);
        CandidateInfo {
            path: path.display().to_string(),
            exists: resolve::is_payload(path),
        }
    };

    let selection = candidates.select(config.only).ok();
    let command = selection
        .as_ref()
        .map(|selection| {
            launch::command_line(selection, &config.interpreter, args)
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    Resolution {
        base: config.base.display().to_string(),
        compiled: info(Variant::Compiled),
        source: info(Variant::Source),
        selected: selection.map(|selection| selection.variant),
        command,
    }
}
