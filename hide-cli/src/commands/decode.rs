use anyhow::{Context, Result};
use tracing::info;

pub fn execute(input: &str, raw: bool) -> Result<()> {
    let decoded = run(input)?;
    println!("{}", render(&decoded, raw));
    Ok(())
}

/// Line printed for recovered text, bare when `raw`
pub fn render(decoded: &str, raw: bool) -> String {
    if raw {
        decoded.to_string()
    } else {
        format!("Decoded data: {}", decoded)
    }
}

/// Recover the text hidden in `input`
pub fn run(input: &str) -> Result<String> {
    info!("Decoding data from {}", input);

    let decoded = hide_core::decode_file(input)
        .with_context(|| format!("Failed to decode data from {}", input))?;

    info!("Recovered {} characters", decoded.chars().count());

    Ok(decoded)
}
