//! Output helpers.
//!
//! Results go to stdout as JSON or tab-separated rows; status messages go
//! to stderr so stdout stays pipeable.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a follow-up hint.
pub fn hint(msg: &str) {
    eprintln!("  {}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a header row followed by data rows, tab-separated.
pub fn rows<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) {
    let header = headers.iter().map(AsRef::as_ref).collect::<Vec<_>>().join("\t");
    println!("{}", header.bold());
    for row in rows {
        println!("{}", row.join("\t"));
    }
}
