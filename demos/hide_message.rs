//! Hide a message in a generated image and read it back

use hide_core::{decode_file, encode_file};
use image::{Rgb, RgbImage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Hide Example\n");

    // Gradient canvas so the parity changes are spread over varied values
    let canvas = RgbImage::from_fn(64, 64, |x, y| Rgb([(x * 4) as u8, (y * 4) as u8, 128]));
    canvas.save("example_canvas.png")?;

    let message = "Meet at the old mill at noon.";
    let report = encode_file("example_canvas.png", message, "example_hidden.png")?;

    println!(
        "Embedded {} characters in {} pixels ({} channel values changed)",
        report.groups, report.pixels_written, report.channels_changed
    );

    let recovered = decode_file("example_hidden.png")?;
    println!("Recovered: {}", recovered);
    assert_eq!(recovered, message);

    println!("\nUse 'hide decode example_hidden.png' to read it back");

    Ok(())
}
