//! The local quote ledger: a text file that only ever grows.
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use quote_common::Result;

/// Render a bid as the ledger line, without the trailing newline.
pub fn format_entry(bid: f64) -> String {
    format!("Dólar: {:.2}", bid)
}

/// Append `entry` plus a newline to `path`, creating the file if it is missing.
///
/// The line goes out in a single write so a failure never leaves half an entry behind.
pub fn append_entry(path: &Path, entry: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(format!("{entry}\n").as_bytes())?;
    Ok(())
}
