//! List command implementation

use super::ListCommands;
use crate::input::InputFormat;
use anyhow::Result;
use scriptid_core::{language_ranges, Language};
use std::io::{self, Write};

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match subcommand {
        ListCommands::Languages => write_languages(&mut out)?,
        ListCommands::Formats => write_formats(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Languages in tie-break order with their code point ranges
pub fn write_languages(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Supported languages:")?;
    for language in Language::ALL {
        let ranges: Vec<String> = language_ranges(language)
            .iter()
            .map(|r| format!("U+{:04X}..U+{:04X}", r.start, r.stop - 1))
            .collect();
        writeln!(
            out,
            "  {:<4} {:<10} {}",
            language.code(),
            language.name(),
            ranges.join(", ")
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Unrecognised cells default to '{}'",
        Language::default().code()
    )?;
    Ok(())
}

/// Input formats and whether this build can read them
pub fn write_formats(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Supported input formats:")?;
    for format in InputFormat::ALL {
        let status = if format.is_available() {
            ""
        } else {
            " (not available in this build)"
        };
        writeln!(
            out,
            "  {:<10} → {}_lang output{}",
            format.as_str(),
            format.output_extension(),
            status
        )?;
    }
    Ok(())
}
