//! `databag-apply` — apply dot-path edits to a JSON document.
//!
//! Usage:
//!   databag-apply '<edits-object-json>'
//!
//! The document is read from stdin. The edits are the first argument: a
//! JSON object mapping dot-paths to replacement values, applied in the
//! order they appear.

use std::io::{self, Read, Write};
use databag::cli::apply_edits;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let edits = match args.get(1) {
        Some(e) => e.clone(),
        None => {
            eprintln!("First argument must be a JSON object of edits.");
            std::process::exit(1);
        }
    };

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match apply_edits(buf.trim(), &edits) {
        Ok(result) => {
            io::stdout().write_all(result.as_bytes()).unwrap();
            io::stdout().write_all(b"\n").unwrap();
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
