//! RIFF/WebP frame validation.
//!
//! Header layout: `"RIFF" | size: u32 LE | "WEBP"`. `size` counts the bytes after the
//! first 8 (marker + size field), so the whole frame is `[offset, offset + 8 + size)`.
//! Sub-chunks (`VP8 `, `VP8L`, `VP8X`, ...) are not inspected.

use std::ops::Range;

use crate::error::ExtractError;
use crate::riff::scanner::SignatureScanner;

/// RIFF container marker.
pub const RIFF_MARKER: &[u8; 4] = b"RIFF";
/// Form type that identifies a WebP payload.
pub const WEBP_TAG: &[u8; 4] = b"WEBP";
/// Marker + size field; `declared_size` is measured from here.
pub const RIFF_HEADER_LEN: usize = 8;
/// Marker + size field + form type.
pub const MIN_FRAME_HEADER: usize = 12;

/// A structurally valid frame inside a container buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// Offset of the `RIFF` marker.
    pub offset: usize,
    /// Little-endian size field as stored.
    pub declared_size: u32,
}

impl Frame {
    /// Byte range of the frame in its buffer (header included).
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.offset + RIFF_HEADER_LEN + self.declared_size as usize
    }

    #[inline]
    pub fn len(&self) -> usize {
        RIFF_HEADER_LEN + self.declared_size as usize
    }

    /// Always false: a frame holds at least its 8 header bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The frame bytes, unmodified. `data` must be the buffer the frame was located in.
    pub fn payload<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        data.get(self.range())
    }
}

/// Why a marker hit was not accepted as a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Fewer than 12 bytes from the marker to the end of the buffer.
    ShortHeader,
    /// Bytes 8..12 are not `WEBP`.
    TagMismatch,
    /// Declared size runs past the end of the buffer.
    Overrun { declared: u32, available: usize },
}

#[inline]
fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    let bytes = data.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Validate the frame header at `offset` (where a marker was found).
pub fn check_candidate(data: &[u8], offset: usize) -> Result<Frame, Rejection> {
    let header_end = offset
        .checked_add(MIN_FRAME_HEADER)
        .ok_or(Rejection::ShortHeader)?;
    if header_end > data.len() {
        return Err(Rejection::ShortHeader);
    }
    if &data[offset + RIFF_HEADER_LEN..header_end] != WEBP_TAG {
        return Err(Rejection::TagMismatch);
    }
    let declared = read_u32_le(data, offset + 4).ok_or(Rejection::ShortHeader)?;
    let available = data.len() - offset - RIFF_HEADER_LEN;
    if declared as usize > available {
        return Err(Rejection::Overrun {
            declared,
            available,
        });
    }
    Ok(Frame {
        offset,
        declared_size: declared,
    })
}

/// Find the first structurally valid WebP frame scanning forward from offset 0.
///
/// Every rejected candidate resumes the search one byte after its marker, so a
/// later valid frame is still found behind false positives and truncated headers.
pub fn locate_frame(data: &[u8]) -> Result<Frame, ExtractError> {
    let mut scanner = SignatureScanner::new(data);
    let mut truncated_candidates = 0usize;
    let mut pos = 0usize;
    while let Some(offset) = scanner.next_from(pos) {
        match check_candidate(data, offset) {
            Ok(frame) => return Ok(frame),
            Err(Rejection::Overrun { .. }) => truncated_candidates += 1,
            Err(Rejection::ShortHeader | Rejection::TagMismatch) => {}
        }
        pos = offset + 1;
    }
    Err(ExtractError::NotFound {
        truncated_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webp(body: &[u8]) -> Vec<u8> {
        let mut v = Vec::new();
        v.extend_from_slice(RIFF_MARKER);
        v.extend_from_slice(&((body.len() + 4) as u32).to_le_bytes());
        v.extend_from_slice(WEBP_TAG);
        v.extend_from_slice(body);
        v
    }

    #[test]
    fn accepts_exact_fit() {
        let data = webp(b"VP8 data");
        let frame = check_candidate(&data, 0).unwrap();
        assert_eq!(frame.range(), 0..data.len());
        assert_eq!(frame.payload(&data), Some(&data[..]));
    }

    #[test]
    fn rejects_short_header() {
        assert_eq!(check_candidate(b"RIFF\x04\0\0\0WEB", 0), Err(Rejection::ShortHeader));
    }

    #[test]
    fn rejects_other_form_types() {
        let mut data = webp(b"abcd");
        data[8..12].copy_from_slice(b"WAVE");
        assert_eq!(check_candidate(&data, 0), Err(Rejection::TagMismatch));
    }

    #[test]
    fn rejects_overrun_by_one() {
        let mut data = webp(b"abcd");
        let declared = u32::from_le_bytes([data[4], data[5], data[6], data[7]]) + 1;
        data[4..8].copy_from_slice(&declared.to_le_bytes());
        assert_eq!(
            check_candidate(&data, 0),
            Err(Rejection::Overrun {
                declared,
                available: 8
            })
        );
    }

    #[test]
    fn max_declared_size_does_not_overflow() {
        let mut data = webp(b"");
        data[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(check_candidate(&data, 0), Err(Rejection::Overrun { .. })));
    }

    #[test]
    fn skips_false_positive_marker_inside_data() {
        let mut data = b"junkRIFFnotwebp!".to_vec();
        let start = data.len();
        data.extend(webp(b"VP8L"));
        let frame = locate_frame(&data).unwrap();
        assert_eq!(frame.offset, start);
    }

    #[test]
    fn not_found_counts_truncated_candidates() {
        let mut data = webp(b"abcd");
        data.truncate(data.len() - 1);
        match locate_frame(&data) {
            Err(ExtractError::NotFound {
                truncated_candidates,
            }) => assert_eq!(truncated_candidates, 1),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
