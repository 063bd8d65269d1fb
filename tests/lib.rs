//! Tests for the top-level helpers.

use ctexrip::{contains_webp, extract_frame};

mod common;
use common::{ctex_with, webp_frame};

#[test]
fn detects_embedded_webp() {
    assert!(contains_webp(&ctex_with(&webp_frame(b"VP8 "))));
}

#[test]
fn rejects_riff_of_other_form_type() {
    let mut wave = webp_frame(b"fmt ");
    wave[8..12].copy_from_slice(b"WAVE");
    assert!(!contains_webp(&wave));
}

#[test]
fn rejects_empty() {
    assert!(!contains_webp(&[]));
}

#[test]
fn extract_frame_is_pure() {
    let data = ctex_with(&webp_frame(b"abc"));
    let (frame, name) = extract_frame(&data, "hud.png-1.ctex").unwrap();
    assert_eq!(name, "hud.png");
    assert_eq!(&data[frame.range()], &webp_frame(b"abc")[..]);
}
