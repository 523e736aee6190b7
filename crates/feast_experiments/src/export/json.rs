use std::io::Write;

use crate::metrics::SimulationResult;

/// One pretty-printed array of runs, newline terminated.
pub(crate) fn write_results(
    results: &[SimulationResult],
    mut out: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(&mut out, results)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
