//! RIFF chunk location: marker scanning and WebP frame validation.
//! See https://developers.google.com/speed/webp/docs/riff_container

mod frame;
mod scanner;

pub use frame::{
    check_candidate, locate_frame, Frame, Rejection, MIN_FRAME_HEADER, RIFF_HEADER_LEN,
    RIFF_MARKER, WEBP_TAG,
};
pub use scanner::{marker_offsets, SignatureScanner};
