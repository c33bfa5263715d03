use std::env;
use std::ffi::OsString;
use std::process::exit;

use pyshim::{ShimConfig, ShimError, dispatch, invocation_base, logger};

fn main() {
    logger::init_logger(false);

    let mut argv = env::args_os();
    let argv0 = argv.next().unwrap_or_else(|| OsString::from("pyshim"));
    let args: Vec<OsString> = argv.collect();

    let base = invocation_base(&argv0, env::var_os("PATH").as_deref());
    let config = ShimConfig::from_env(base);

    match dispatch(&config, &args) {
        Ok(code) => exit(code),
        Err(err @ ShimError::PayloadNotFound { .. }) => {
            println!("{}", err);
            exit(err.exit_code());
        }
        Err(err) => {
            eprintln!("{}: {}", argv0.to_string_lossy(), err);
            exit(err.exit_code());
        }
    }
}
