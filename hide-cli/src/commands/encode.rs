use anyhow::{Context, Result};
use hide_core::encoder::EmbedReport;
use tracing::info;

pub fn execute(input: &str, data: &str, output: &str) -> Result<()> {
    run(input, data, output).map(|_| ())
}

/// Hide `data` in `input`, writing the result to `output`
pub fn run(input: &str, data: &str, output: &str) -> Result<EmbedReport> {
    info!(
        "Encoding {} characters from {} into {}",
        data.chars().count(),
        input,
        output
    );

    let report = hide_core::encode_file(input, data, output)
        .with_context(|| format!("Failed to encode data into {}", input))?;

    info!(
        "Wrote {} ({} pixels used, {} channel values changed)",
        output, report.pixels_written, report.channels_changed
    );

    Ok(report)
}
