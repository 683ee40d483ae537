//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print rows as a table, or the raw payload wrapped in JSON metadata.
///
/// `Pretty` adds a bold heading and a row count around the table.
pub fn print_rows<R: Tabled, P: Serialize + ?Sized>(
    rows: &[R],
    raw: &P,
    heading: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", json::format_json(raw)?),
        OutputFormat::Table => println!("{}", table::format_table(rows)),
        OutputFormat::Pretty => {
            use colored::Colorize;
            println!("{}", heading.bold());
            println!("{}", table::format_table(rows));
            if !rows.is_empty() {
                println!("{}", format!("{} total", rows.len()).dimmed());
            }
        }
    }
    Ok(())
}
