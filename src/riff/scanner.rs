//! Literal marker search over a raw byte buffer.
//!
//! No alignment is assumed and nothing is filtered: marker bytes that happen to
//! appear inside unrelated payload data are reported like any other hit, and it
//! is up to the caller to validate the surrounding frame.

use memchr::memmem::Finder;

use super::frame::RIFF_MARKER;

/// Lazy iterator over every offset at which a marker starts, in strictly increasing order.
///
/// Restartable: [`SignatureScanner::next_from`] repositions the cursor and returns
/// the next hit at or after the given offset.
#[derive(Clone)]
pub struct SignatureScanner<'a> {
    data: &'a [u8],
    finder: Finder<'a>,
    pos: usize,
}

impl<'a> SignatureScanner<'a> {
    /// Scan `data` for the `RIFF` marker from offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self::starting_at(data, 0)
    }

    /// Scan `data` for the `RIFF` marker from `start`. A start past the end yields nothing.
    pub fn starting_at(data: &'a [u8], start: usize) -> Self {
        Self::with_marker(data, RIFF_MARKER, start)
    }

    /// Scan for an arbitrary marker.
    pub fn with_marker(data: &'a [u8], marker: &'a [u8], start: usize) -> Self {
        Self {
            data,
            finder: Finder::new(marker),
            pos: start,
        }
    }

    /// Next marker offset at or after `pos`; the cursor moves just past the hit.
    pub fn next_from(&mut self, pos: usize) -> Option<usize> {
        self.pos = pos;
        self.next()
    }

    /// Current cursor (where the next search begins).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Iterator for SignatureScanner<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.pos > self.data.len() {
            return None;
        }
        match self.finder.find(&self.data[self.pos..]) {
            Some(i) => {
                let offset = self.pos + i;
                self.pos = offset + 1;
                Some(offset)
            }
            None => {
                // Exhausted; park the cursor past the end so later calls stay cheap.
                self.pos = self.data.len() + 1;
                None
            }
        }
    }
}

impl std::fmt::Debug for SignatureScanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureScanner")
            .field("len", &self.data.len())
            .field("marker", &String::from_utf8_lossy(self.finder.needle()))
            .field("pos", &self.pos)
            .finish()
    }
}

/// Convenience: all `RIFF` marker offsets in `data`.
pub fn marker_offsets(data: &[u8]) -> Vec<usize> {
    SignatureScanner::new(data).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_unaligned_markers_in_order() {
        let data = b"xRIFFyyRIFFzzzRIFF";
        assert_eq!(marker_offsets(data), vec![1, 7, 14]);
    }

    #[test]
    fn empty_when_marker_absent() {
        assert!(marker_offsets(b"RIF FRIF").is_empty());
        assert!(marker_offsets(b"").is_empty());
    }

    #[test]
    fn restart_from_offset() {
        let data = b"RIFF....RIFF";
        let mut s = SignatureScanner::new(data);
        assert_eq!(s.next_from(0), Some(0));
        assert_eq!(s.next_from(1), Some(8));
        assert_eq!(s.next_from(9), None);
        assert_eq!(s.next_from(0), Some(0));
    }

    #[test]
    fn start_past_end_yields_nothing() {
        let data = b"RIFF";
        assert_eq!(SignatureScanner::starting_at(data, 4).next(), None);
        assert_eq!(SignatureScanner::starting_at(data, 100).next(), None);
    }

    #[test]
    fn custom_marker() {
        let data = b"..WEBP..WEBP";
        let hits: Vec<_> = SignatureScanner::with_marker(data, b"WEBP", 3).collect();
        assert_eq!(hits, vec![8]);
    }
}
