//! Marker scanning and frame location tests.

use ctexrip::riff::{check_candidate, marker_offsets, Rejection};
use ctexrip::{locate_frame, ExtractError, SignatureScanner};

mod common;
use common::{ctex_with, webp_frame};

#[test]
fn scanner_reports_every_hit_without_filtering() {
    let mut data = b"RIFFRIFF".to_vec();
    data.extend(webp_frame(b"VP8 "));
    assert_eq!(marker_offsets(&data), vec![0, 4, 8]);
}

#[test]
fn scanner_is_lazy_and_restartable() {
    let data = b"..RIFF..RIFF..";
    let mut s = SignatureScanner::starting_at(data, 3);
    assert_eq!(s.next(), Some(8));
    assert_eq!(s.next(), None);
    assert_eq!(s.next_from(0), Some(2));
}

#[test]
fn frame_found_inside_container() {
    let frame = webp_frame(b"VP8L\x2f\x00\x00\x00");
    let data = ctex_with(&frame);
    let f = locate_frame(&data).unwrap();
    assert_eq!(f.offset, 36);
    assert_eq!(f.payload(&data).unwrap(), &frame[..]);
}

#[test]
fn truncated_candidate_then_valid_frame() {
    // First candidate declares far more bytes than exist; the second is valid.
    let mut data = Vec::new();
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&0x7fff_ffffu32.to_le_bytes());
    data.extend_from_slice(b"WEBP");
    let good = webp_frame(b"VP8X0123456789");
    let start = data.len();
    data.extend_from_slice(&good);
    assert!(matches!(check_candidate(&data, 0), Err(Rejection::Overrun { .. })));
    let f = locate_frame(&data).unwrap();
    assert_eq!(f.offset, start);
    assert_eq!(&data[f.range()], &good[..]);
}

#[test]
fn marker_at_tail_is_short_header() {
    let data = b"xxxxRIFF\x04\x00";
    assert_eq!(check_candidate(data, 4), Err(Rejection::ShortHeader));
    assert!(matches!(
        locate_frame(data),
        Err(ExtractError::NotFound {
            truncated_candidates: 0
        })
    ));
}

#[test]
fn first_valid_frame_wins() {
    let a = webp_frame(b"first");
    let b = webp_frame(b"second");
    let mut data = a.clone();
    data.extend_from_slice(&b);
    let f = locate_frame(&data).unwrap();
    assert_eq!(f.offset, 0);
    assert_eq!(f.len(), a.len());
}

#[test]
fn zero_declared_size_is_header_only() {
    // size 0 is structurally valid: frame is just marker + size field.
    let mut data = b"RIFF\x00\x00\x00\x00WEBP".to_vec();
    data.push(0);
    let f = locate_frame(&data).unwrap();
    assert_eq!(f.range(), 0..8);
}
