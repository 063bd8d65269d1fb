//! Shared builders for synthetic containers.

#![allow(dead_code)]

/// `RIFF <len+4> WEBP <body>`.
pub fn webp_frame(body: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(b"RIFF");
    v.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
    v.extend_from_slice(b"WEBP");
    v.extend_from_slice(body);
    v
}

/// Minimal GST2-style texture header followed by `frame` and some trailing bytes.
pub fn ctex_with(frame: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(b"GST2");
    v.extend_from_slice(&1u32.to_le_bytes());
    v.extend_from_slice(&64u32.to_le_bytes());
    v.extend_from_slice(&64u32.to_le_bytes());
    v.extend_from_slice(&[0u8; 16]);
    v.extend_from_slice(&(frame.len() as u32).to_le_bytes());
    v.extend_from_slice(frame);
    v.extend_from_slice(&[0xEEu8; 7]);
    v
}
