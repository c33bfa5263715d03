use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pyshim::config::{DEFAULT_INTERPRETER, INTERPRETER_ENV};
use pyshim::error::EXIT_NOT_FOUND;
use pyshim::{Candidates, Resolution, ShimConfig, ShimError, Variant, dispatch, logger, resolve};

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let code = match cli.command {
        Command::Resolve { target, json } => run_resolve(&target, json),
        Command::Run { target, args } => run_dispatch(&target, &args),
    };

    match code {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("pyshim-ctl: {}", err);
            exit(err.exit_code());
        }
    }
}

fn run_resolve(target: &Target, json: bool) -> Result<i32, ShimError> {
    let resolution = resolve(&target.config(), &[]);
    let code = if resolution.selected.is_some() { 0 } else { EXIT_NOT_FOUND };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print_resolution(&resolution, &Candidates::for_base(&target.base));
    }
    Ok(code)
}

fn run_dispatch(target: &Target, args: &[OsString]) -> Result<i32, ShimError> {
    match dispatch(&target.config(), args) {
        Err(err @ ShimError::PayloadNotFound { .. }) => {
            println!("{}", err);
            Ok(err.exit_code())
        }
        other => other,
    }
}

fn print_resolution(resolution: &Resolution, candidates: &Candidates) {
    let mark = |exists| if exists { "found" } else { "missing" };
    println!("base:     {}", resolution.base);
    println!("compiled: {} ({})", resolution.compiled.path, mark(resolution.compiled.exists));
    println!("source:   {} ({})", resolution.source.path, mark(resolution.source.exists));
    match resolution.selected {
        Some(variant) => {
            let name = variant
                .to_possible_value()
                .map(|value| value.get_name().to_owned())
                .unwrap_or_default();
            println!("selected: {}", name);
            println!("command:  {}", resolution.command.join(" "));
        }
        None => println!("{}", candidates.not_found()),
    }
}

#[derive(Parser)]
#[command(name = "pyshim-ctl")]
#[command(about = "Inspect and run pyshim payload dispatch", long_about = None)]
struct Cli {
    /// Log dispatch decisions to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show which payload variant would run, without running it
    Resolve {
        #[command(flatten)]
        target: Target,

        /// Print the resolution as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Dispatch to the payload exactly as the shim would
    Run {
        #[command(flatten)]
        target: Target,

        /// Arguments forwarded verbatim to the payload
        #[arg(last = true)]
        args: Vec<OsString>,
    },
}

#[derive(Args)]
struct Target {
    /// Base path the .pyc / .py suffixes are appended to
    base: PathBuf,

    /// Interpreter for the compiled variant
    #[arg(long, env = INTERPRETER_ENV, default_value = DEFAULT_INTERPRETER)]
    interpreter: OsString,

    /// Only consider one variant
    #[arg(long, value_enum)]
    only: Option<Variant>,
}

impl Target {
    fn config(&self) -> ShimConfig {
        ShimConfig::new(&self.base)
            .with_interpreter(&self.interpreter)
            .with_only(self.only)
    }
}
