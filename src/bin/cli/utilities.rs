//! Utility functions

use clap::Error;
use colored::Colorize as _;
use rand::Rng as _;
use tracing_subscriber::EnvFilter;

macro_rules! clap_err_result_msg {
    ($e:expr, $m:expr, $t:expr) => {
        match $e {
            Ok(val) => Ok::<_, Error>(val),
            Err(e) => return Err(Error::raw($t, format!("{}: {}", $m, e))),
        }
    };

    ($e:expr,  $m:expr) => {
        clap_err_result_msg!($e, $m, clap::error::ErrorKind::InvalidValue)
    };
}
pub(super) use clap_err_result_msg;

pub(super) fn print_title(title: &str) {
    eprintln!("{}", title.green().bold());
}

/// Install the tracing subscriber on stderr. `RUST_LOG` sets the filter, `warn` if unset.
pub(super) fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns a seed. If no seed is provided, a random seed is generated and printed.
pub(super) fn get_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::thread_rng().gen();
            eprintln!("{}: {}", "Seed".blue(), seed);
            seed
        }
    }
}

/// Write `contents` to `path`, or to stdout if no path is given.
pub(super) fn write_output(path: Option<&std::path::Path>, contents: &str, title: &str) -> Result<(), Error> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)?;
            eprintln!("{} {:?}", format!("{} saved to", title).blue(), path.display());
            Ok(())
        }
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}
