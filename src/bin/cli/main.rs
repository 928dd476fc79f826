//! # Shamir Secret Recovery Command Line Interface
//!
//! ```
//! Usage: shamir [OPTIONS] [COMMAND]
//!
//! Commands:
//!   recover  Shamir secret recovery -- recover the secret from a share document
//!   split    Shamir secret recovery -- split a secret into a share document
//!   decode   Shamir secret recovery -- decode a share value to decimal
//!   help     Print this message or the help of the given subcommand(s)
//!
//! Options:
//!   -v, --verbose  Log decoded and selected shares
//!   -h, --help     Print help
//!   -V, --version  Print version
//! ```
//!
//! ## Recover
//!
//! ```
//! $ shamir recover data/testcase1.json
//! Recovering secret.
//! Reading share document from file: data/testcase1.json
//!
//! Decoded Points (first 3 used):
//! x=1, y=4
//! x=2, y=7
//! x=3, y=12
//!
//! Secret (c) = 3
//! ```
//!
//! ## Split
//!
//! ```
//! $ shamir split --secret 1234 -n 5 -k 3 --base 16 -o shares.json
//! Splitting secret.
//! Seed: 9152710382546137810
//! Share document saved to "shares.json"
//! ```
//!
//! ## Decode
//!
//! ```
//! $ shamir decode ff --base 16
//! 255
//! ```

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use colored::Colorize as _;
use decode::Decode;
use recover::Recover;
use split::Split;

mod decode;
mod recover;
mod split;
mod utilities;

#[derive(Parser)]
#[command(version, about("Shamir secret recovery over the integers"))]
pub struct Cli {
    /// Log decoded and selected shares
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Recover(Recover),
    Split(Split),
    Decode(Decode),
}

fn main() {
    let cli = Cli::parse();
    utilities::init_logging(cli.verbose);

    let res = match &cli.command {
        Some(Commands::Recover(recover)) => recover.recover_secret(),
        Some(Commands::Split(split)) => split.split_secret(),
        Some(Commands::Decode(decode)) => decode.decode_value(),
        // Print help
        None => {
            let _ = Cli::command().print_help();
            Ok(())
        }
    };

    if let Err(e) = res {
        eprintln!("{}", e.to_string().red());
        std::process::exit(1);
    }

    std::process::exit(0);
}
