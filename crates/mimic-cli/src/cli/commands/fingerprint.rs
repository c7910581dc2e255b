use mimic_core::fingerprint::fingerprint;

use super::super::args::RequestArgs;
use crate::exit_codes::SUCCESS;

pub fn run(args: &RequestArgs) -> i32 {
    println!("{}", fingerprint(&args.to_request()));
    SUCCESS
}
