//! Split

use std::path::PathBuf;

use clap::{Error, Parser};
use num_bigint::{BigInt, BigUint};
use rand::{rngs::StdRng, SeedableRng as _};

use rshamir::{
    constants::params::{PARAM_DEFAULT_BASE, PARAM_DEFAULT_COEFFICIENT_BITS},
    document::ShareDocument,
    shamir::share,
};

use crate::utilities::{clap_err_result_msg, get_seed, print_title, write_output};

#[derive(Parser)]
#[command(version, about("Shamir secret recovery -- split a secret into a share document"), long_about = None)]
pub struct Split {
    /// Secret to share, a non-negative decimal integer
    #[arg(short, long)]
    pub secret: BigUint,

    /// Number of shares
    #[arg(short)]
    pub n: usize,

    /// Threshold, the number of shares needed to recover the secret
    #[arg(short)]
    pub k: usize,

    /// Base the share values are written in
    #[arg(short, long, default_value_t = PARAM_DEFAULT_BASE)]
    pub base: u32,

    /// Bit size bound of the random polynomial coefficients
    #[arg(long, default_value_t = PARAM_DEFAULT_COEFFICIENT_BITS)]
    pub bits: u64,

    /// Seed for the coefficient sampling
    #[arg(long, env = "SHAMIR_SEED")]
    pub seed: Option<u64>,

    /// Output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Split {
    pub fn split_secret(&self) -> Result<(), Error> {
        print_title("Splitting secret.");
        let mut rng = StdRng::seed_from_u64(get_seed(self.seed));

        let secret = BigInt::from(self.secret.clone());
        let shares = clap_err_result_msg!(
            share(&secret, self.n, self.k, self.bits, &mut rng),
            "Could not split secret"
        )?;
        let document = clap_err_result_msg!(
            ShareDocument::from_shares(&shares, self.k, self.base),
            "Could not build share document"
        )?;
        let json = clap_err_result_msg!(document.to_json(), "Could not serialise share document")?;

        write_output(self.output.as_deref(), &json, "Share document")?;
        Ok(())
    }
}
