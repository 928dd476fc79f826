use clap::{Error, Parser};

use rshamir::{arith::radix::decode, constants::params::PARAM_DEFAULT_BASE};

use crate::utilities::clap_err_result_msg;

#[derive(Parser)]
#[command(version, about("Shamir secret recovery -- decode a share value to decimal"), long_about = None)]
pub struct Decode {
    /// Digit string, case-insensitive
    pub digits: String,

    /// Base of the digit string, between 2 and 36
    #[arg(short, long, default_value_t = PARAM_DEFAULT_BASE)]
    pub base: u32,
}

impl Decode {
    pub fn decode_value(&self) -> Result<(), Error> {
        let value = clap_err_result_msg!(
            decode(&self.digits, self.base),
            "Could not decode digits"
        )?;
        println!("{}", value);
        Ok(())
    }
}
