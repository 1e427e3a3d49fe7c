//! `mdt hash [--strict] <text...>`. The hash goes to stdout so it can be piped.

use crate::dna::{dna_hash, dna_hash_strict};
use std::process::ExitCode;

/// Rejections go straight to stderr; the configured outputs may be empty.
#[must_use]
pub fn cmd_hash(text: &[String], strict: bool) -> ExitCode {
    let input = text.join(" ");
    if !strict {
        println!("{}", dna_hash(&input));
        return ExitCode::SUCCESS;
    }

    match dna_hash_strict(&input) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("mdt: {e}");
            ExitCode::FAILURE
        }
    }
}
