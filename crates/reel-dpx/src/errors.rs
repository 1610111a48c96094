/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use reel_core::bytestream::RByteIoError;

use crate::constants::DPX_IDENTIFIER_BE;

/// Errors that can occur during DPX decoding
///
/// All of them are terminal, the decoder never retries an operation
/// that produced one of these.
pub enum DpxDecodeErrors {
    /// First four bytes are not `SDPX`
    WrongMagicBytes(u32),
    /// A dimension exceeds the configured maximum, (supported, found)
    LargeDimensions(usize, usize),
    /// The per-row or whole-image byte size does not fit in a `usize`
    OverflowingDimensions(usize, usize),
    /// Width or height is zero
    ZeroDimensions,
    /// Pixel data ended before the last row was read
    PrematureEnd,
    /// The row buffer could not be allocated
    OutOfMemory,
    /// The output passed to `decode_into` cannot hold the image, (expected, found)
    TooSmallOutputArray(usize, usize),
    /// Generic message
    Generic(&'static str),
    /// An I/O error from the underlying byte source
    IoErrors(RByteIoError)
}

impl Debug for DpxDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            DpxDecodeErrors::WrongMagicBytes(bytes) => {
                writeln!(
                    f,
                    "Expected {:?} but found {:?}, not a DPX image",
                    DPX_IDENTIFIER_BE.to_be_bytes(),
                    bytes.to_be_bytes()
                )
            }
            DpxDecodeErrors::LargeDimensions(supported, found) => {
                writeln!(
                    f,
                    "Too large dimensions, supported {supported} but found {found}"
                )
            }
            DpxDecodeErrors::OverflowingDimensions(width, height) => {
                writeln!(
                    f,
                    "Image dimensions too large: width {width} x height {height}"
                )
            }
            DpxDecodeErrors::ZeroDimensions => {
                writeln!(f, "Zero found where not expected")
            }
            DpxDecodeErrors::PrematureEnd => {
                writeln!(f, "Premature end of DPX pixel data")
            }
            DpxDecodeErrors::OutOfMemory => {
                writeln!(
                    f,
                    "There was not enough memory to complete the operation"
                )
            }
            DpxDecodeErrors::TooSmallOutputArray(expected, found) => {
                writeln!(
                    f,
                    "Too small of an output array, expected at least length {expected} but found {found}"
                )
            }
            DpxDecodeErrors::Generic(reason) => {
                writeln!(f, "{reason}")
            }
            DpxDecodeErrors::IoErrors(e) => {
                writeln!(f, "I/O error: {:?}", e)
            }
        }
    }
}

impl Display for DpxDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<&'static str> for DpxDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::Generic(r)
    }
}

impl From<RByteIoError> for DpxDecodeErrors {
    fn from(r: RByteIoError) -> Self {
        Self::IoErrors(r)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DpxDecodeErrors {}
