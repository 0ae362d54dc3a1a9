//! Fuzzing entry points for hide-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_extract

use hide_core::{decoder::extract_bytes, encoder::encode, Payload, Pixel, PixelGrid};

/// Interpret arbitrary bytes as a one-row RGB grid
fn grid_from_bytes(data: &[u8]) -> PixelGrid<u8> {
    let pixels: Vec<_> = data
        .chunks_exact(3)
        .map(|c| Pixel::new(c[0], c[1], c[2]))
        .collect();
    let width = pixels.len() as u32;
    PixelGrid::new(width, 1, pixels).expect("width matches pixel count")
}

pub fn fuzz_extract(data: &[u8]) {
    // Try to extract - should never panic
    let _ = extract_bytes(&grid_from_bytes(data));
}

pub fn fuzz_payload(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Payload::from_text(text);
    }
}

/// Split input into a payload and a cover; an encoded cover must decode back
pub fn fuzz_round_trip(data: &[u8]) {
    let Some((&len, rest)) = data.split_first() else {
        return;
    };
    let split = (len as usize).min(rest.len());
    let (payload, cover) = rest.split_at(split);

    let Ok(payload) = Payload::from_bytes(payload) else {
        return;
    };

    if let Ok((encoded, _)) = encode(&grid_from_bytes(cover), &payload) {
        let decoded = extract_bytes(&encoded).expect("encoded grid must decode");
        assert_eq!(decoded, payload.as_bytes());
    }
}
