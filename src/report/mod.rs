// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command output: console text or serialized documents

pub mod formatter;
pub mod output;

use anyhow::Result;
use serde::Serialize;

pub use formatter::{LookupResult, ReportFormatter, Resolution};
pub use output::{OutputFormat, ReportOutputFormat};

/// Print `value` as a document when `format` asks for one, otherwise call
/// `text` to print it for humans.
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&ReportFormatter),
) -> Result<()> {
    match format.document() {
        Some(document) => {
            println!("{}", document.serialize(value)?);
        }
        None => text(&ReportFormatter::new()),
    }
    Ok(())
}
