//! # Document Printing
//!
//! Indented JSON dumps under a banner, one per document in the flow.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Write `value` as indented JSON under a `***** name *****` banner.
pub fn nice_print<W: Write, T: Serialize>(out: &mut W, name: &str, value: &T) -> Result<()> {
    write!(out, "\n***** {name} *****\n\n")?;
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
