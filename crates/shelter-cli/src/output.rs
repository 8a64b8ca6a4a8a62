use std::io::Write;

use shelter_types::AdoptionReport;

use crate::args::EXIT_INVALID_INPUT;

/// Print `report` as pretty JSON and pick the exit code.
///
/// Lists go to `out` with code 0; errors go to `err` with
/// [`EXIT_INVALID_INPUT`].
pub fn emit_report(
    report: &AdoptionReport,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<u8> {
    let json = serde_json::to_string_pretty(report)?;
    if report.is_error() {
        writeln!(err, "{json}")?;
        Ok(EXIT_INVALID_INPUT)
    } else {
        writeln!(out, "{json}")?;
        Ok(0)
    }
}
