use anyhow::{Context, Result};
use colored::*;
use hide_core::StegoImage;
use tracing::info;

/// What `inspect` found in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    pub width: u32,
    pub height: u32,
    pub color: String,
    pub capacity: usize,
    pub groups_scanned: usize,
    pub payload: Option<String>,
}

pub fn execute(input: &str) -> Result<()> {
    let report = run(input)?;

    println!("\n=== Inspection Results ===");
    println!("Dimensions:        {}x{}", report.width, report.height);
    println!("Colour type:       {}", report.color);
    println!("Capacity:          {} characters", report.capacity);
    println!("Groups scanned:    {}", report.groups_scanned);

    match &report.payload {
        Some(text) => {
            println!("{} Terminated payload found", "✓".green());
            println!("Payload:           {}", text);
        }
        None => println!("{} No terminated payload found", "✗".red()),
    }

    Ok(())
}

/// Scan `input` without failing when it carries no payload
pub fn run(input: &str) -> Result<InspectReport> {
    info!("Inspecting {}", input);

    let image = StegoImage::open(input)
        .with_context(|| format!("Failed to open image: {}", input))?;
    let inspection = image
        .inspect()
        .with_context(|| format!("Failed to scan image: {}", input))?;
    let (width, height) = image.dimensions();

    Ok(InspectReport {
        width,
        height,
        color: format!("{:?}", image.color_type()),
        capacity: image.group_capacity(),
        groups_scanned: inspection.groups_scanned,
        payload: inspection.terminated.then(|| inspection.text()),
    })
}
