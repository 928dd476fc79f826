//! Recover

use std::path::PathBuf;

use clap::{ArgAction, Error, Parser};
use colored::Colorize as _;

use rshamir::{
    api::recover_from_path,
    lagrange::Division,
    shamir::{RecoveryOptions, Selection},
};

use crate::utilities::{clap_err_result_msg, print_title};

#[derive(Parser)]
#[command(version, about("Shamir secret recovery -- recover the secret from a share document"), long_about = None)]
pub struct Recover {
    /// Share document file (JSON)
    #[arg(value_name = "FILE", env = "SHAMIR_DOCUMENT")]
    pub document: PathBuf,

    /// Number of shares to interpolate. Defaults to `keys.k` of the document
    #[arg(short = 'k', long, env = "SHAMIR_THRESHOLD")]
    pub threshold: Option<usize>,

    /// Comma separated share indices to use instead of the first k
    #[arg(long, value_delimiter = ',', value_name = "INDICES")]
    pub select: Option<Vec<u64>>,

    /// Truncate every Lagrange term toward zero instead of failing on an inexact division
    #[arg(long, action = ArgAction::SetTrue, env = "SHAMIR_TRUNCATE")]
    pub truncate: bool,
}

impl Recover {
    fn options(&self) -> RecoveryOptions {
        RecoveryOptions {
            threshold: self.threshold,
            selection: match &self.select {
                Some(indices) => Selection::Indices(indices.clone()),
                None => Selection::First,
            },
            division: if self.truncate {
                Division::Truncate
            } else {
                Division::Exact
            },
        }
    }

    pub fn recover_secret(&self) -> Result<(), Error> {
        print_title("Recovering secret.");
        eprintln!(
            "{}: {}",
            "Reading share document from file".blue(),
            self.document.display()
        );

        let recovery = clap_err_result_msg!(
            recover_from_path(&self.document, &self.options()),
            "Could not recover secret"
        )?;

        eprintln!(
            "\n{}",
            format!("Decoded Points (first {} used):", recovery.threshold).blue()
        );
        for share in &recovery.used {
            println!("{}", share);
        }

        eprint!("\n{}", "Secret (c) = ".blue());
        println!("{}", recovery.secret);

        Ok(())
    }
}
