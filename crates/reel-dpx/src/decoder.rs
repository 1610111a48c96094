/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The DPX decoding pipeline.
//!
//! Decoding is split into three steps that run strictly in order:
//! header reading ([`decode_headers`](DpxDecoder::decode_headers)),
//! geometry validation (part of header reading, plus the checked size
//! computations) and row streaming
//! ([`decode_into`](DpxDecoder::decode_into)), which reads one scanline
//! at a time and converts its samples to host-native order.

use alloc::vec;
use alloc::vec::Vec;

use reel_core::bit_depth::BitDepth;
use reel_core::bytestream::{RByteReaderTrait, RReader};
use reel_core::colorspace::ColorSpace;
use reel_core::log::trace;
use reel_core::options::DecoderOptions;

use crate::constants::{
    DPX_DIMENSIONS_OFFSET, DPX_IDENTIFIER_BE, DPX_NUM_CHANNELS, DPX_SAMPLE_SIZE
};
use crate::errors::DpxDecodeErrors;

const DPX_COLORSPACE: ColorSpace = ColorSpace::RGBA;
const DPX_BIT_DEPTH: BitDepth = BitDepth::Sixteen;

/// Probe some bytes to see
/// if they consist of a DPX image
pub fn probe_dpx(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..4) {
        return magic_bytes == b"SDPX";
    }
    false
}

/// Number of bytes in one scanline, or `None` if the
/// computation would overflow.
///
/// A row holds `width` pixels of four `u16` samples each.
fn checked_row_size(width: usize) -> Option<usize> {
    width
        .checked_mul(DPX_NUM_CHANNELS)?
        .checked_mul(DPX_SAMPLE_SIZE)
}

/// Convert one scanline of big-endian samples to host-native order.
///
/// Kept free of any I/O so it can be tested on its own.
fn convert_row(input: &[u8], output: &mut [u16]) {
    for (sample, bytes) in output.iter_mut().zip(input.chunks_exact(2)) {
        *sample = u16::from_be_bytes(bytes.try_into().unwrap());
    }
}

/// A simple DPX reader.
///
/// This decodes the uncompressed 16-bit RGBA variant of the format,
/// returning pixels in host-native byte order. See the crate
/// documentation for the exact layout it expects.
pub struct DpxDecoder<T>
where
    T: RByteReaderTrait
{
    stream:          RReader<T>,
    options:         DecoderOptions,
    width:           usize,
    height:          usize,
    data_offset:     usize,
    decoded_headers: bool
}

impl<T> DpxDecoder<T>
where
    T: RByteReaderTrait
{
    /// Create a new decoder that reads a DPX encoded file
    /// from `T` and returns pixels
    ///
    /// # Arguments
    /// - data: Data source, it has to implement the `RByteReaderTrait`
    pub fn new(data: T) -> DpxDecoder<T> {
        Self::new_with_options(data, DecoderOptions::default())
    }

    /// Creates a new decoder with options that influence decoding routines
    ///
    /// # Arguments
    /// - data: Data source
    /// - options: Custom options for the decoder
    pub fn new_with_options(data: T, options: DecoderOptions) -> DpxDecoder<T> {
        DpxDecoder {
            stream: RReader::new(data),
            options,
            width: 0,
            height: 0,
            data_offset: 0,
            decoded_headers: false
        }
    }

    /// Decode headers from the encoded image
    ///
    /// This confirms that the stream is a DPX image and extracts the
    /// image geometry and the location of the pixel data, validating
    /// the geometry against the configured limits before anything is
    /// allocated.
    pub fn decode_headers(&mut self) -> Result<(), DpxDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        // Check identifier
        let magic = self.stream.get_u32_be_err()?;

        if magic != DPX_IDENTIFIER_BE {
            return Err(DpxDecodeErrors::WrongMagicBytes(magic));
        }

        // offset to the start of the image data
        let data_offset = self.stream.get_u32_be_err()? as usize;

        // pixels per line and lines per element sit at a fixed offset
        // in the generic image header
        self.stream.set_position(DPX_DIMENSIONS_OFFSET)?;

        let width = self.stream.get_u32_be_err()? as usize;
        let height = self.stream.get_u32_be_err()? as usize;

        if width == 0 || height == 0 {
            return Err(DpxDecodeErrors::ZeroDimensions);
        }

        if width > self.options.max_width() {
            return Err(DpxDecodeErrors::LargeDimensions(
                self.options.max_width(),
                width
            ));
        }

        if height > self.options.max_height() {
            return Err(DpxDecodeErrors::LargeDimensions(
                self.options.max_height(),
                height
            ));
        }

        // a row must fit in memory before we ever size a buffer from it
        if checked_row_size(width).is_none() {
            return Err(DpxDecodeErrors::OverflowingDimensions(width, height));
        }

        self.width = width;
        self.height = height;
        self.data_offset = data_offset;
        self.decoded_headers = true;

        trace!("Image width: {}", self.width);
        trace!("Image height: {}", self.height);
        trace!("Image data offset: {}", self.data_offset);

        Ok(())
    }

    /// Return the number of `u16` samples required to hold the
    /// decoded image
    ///
    /// # Returns
    /// - `Some(usize)`: Minimum length for a buffer needed to decode the image
    /// - `None`: Indicates the image headers were not decoded or the
    ///   `width*height*4` calculation overflows a usize
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            self.width
                .checked_mul(self.height)?
                .checked_mul(DPX_NUM_CHANNELS)
        } else {
            None
        }
    }

    /// Decode into a pre-allocated buffer
    ///
    /// It is an error if the buffer is smaller than
    /// [`output_buffer_size()`](Self::output_buffer_size)
    ///
    /// If the buffer is bigger than expected, the end padding is ignored.
    ///
    /// Rows are written in increasing row order; when the pixel data ends
    /// early the call fails with
    /// [`PrematureEnd`](crate::errors::DpxDecodeErrors::PrematureEnd) and
    /// the buffer must not be treated as a complete image.
    pub fn decode_into(&mut self, buffer: &mut [u16]) -> Result<(), DpxDecodeErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buffer_size()
            .ok_or(DpxDecodeErrors::OverflowingDimensions(self.width, self.height))?;

        if buffer.len() < output_size {
            return Err(DpxDecodeErrors::TooSmallOutputArray(
                output_size,
                buffer.len()
            ));
        }

        // cannot fail, decode_headers checked it
        let row_size = checked_row_size(self.width)
            .ok_or(DpxDecodeErrors::OverflowingDimensions(self.width, self.height))?;

        let samples_per_row = self.width * DPX_NUM_CHANNELS;

        // one scanline of big-endian bytes, reused for every row
        let mut row: Vec<u8> = Vec::new();
        row.try_reserve_exact(row_size)
            .map_err(|_| DpxDecodeErrors::OutOfMemory)?;
        row.resize(row_size, 0);

        self.stream.set_position(self.data_offset)?;

        for out_row in buffer
            .chunks_exact_mut(samples_per_row)
            .take(self.height)
        {
            self.stream
                .read_exact_bytes(&mut row)
                .map_err(|_| DpxDecodeErrors::PrematureEnd)?;

            convert_row(&row, out_row);
        }

        Ok(())
    }

    /// Decode a DPX file returning raw pixels in host-native
    /// byte order or an error
    ///
    /// # Returns
    /// - `Ok(Vec<u16>)`: `width * height * 4` samples, R,G,B,A, row-major
    /// - `Err(E)`: An error if it occurred during decoding
    pub fn decode(&mut self) -> Result<Vec<u16>, DpxDecodeErrors> {
        self.decode_headers()?;

        let output_size = self
            .output_buffer_size()
            .ok_or(DpxDecodeErrors::OverflowingDimensions(self.width, self.height))?;

        let mut buffer = vec![0; output_size];

        self.decode_into(&mut buffer)?;

        Ok(buffer)
    }

    /// Get image width and height respectively or `None` if the
    /// headers haven't been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Return the image colorspace
    ///
    /// This is always RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        DPX_COLORSPACE
    }

    /// Return the image bit depth
    ///
    /// This is always 16
    pub const fn bit_depth(&self) -> BitDepth {
        DPX_BIT_DEPTH
    }

    /// Byte offset at which the pixel data starts, or `None` if the
    /// headers haven't been decoded
    pub const fn data_offset(&self) -> Option<usize> {
        if self.decoded_headers {
            return Some(self.data_offset);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use reel_core::bytestream::RCursor;
    use reel_core::options::DecoderOptions;

    use super::{convert_row, probe_dpx, DpxDecoder};
    use crate::errors::DpxDecodeErrors;

    /// Lay out a minimal file: header up to byte 780, pixel
    /// data immediately after it.
    fn make_dpx(width: u32, height: u32, rows: &[u8]) -> Vec<u8> {
        let mut out = vec![0_u8; 780];
        out[0..4].copy_from_slice(b"SDPX");
        out[4..8].copy_from_slice(&780_u32.to_be_bytes());
        out[772..776].copy_from_slice(&width.to_be_bytes());
        out[776..780].copy_from_slice(&height.to_be_bytes());
        out.extend_from_slice(rows);
        out
    }

    #[test]
    fn probe_matches_magic_only() {
        assert!(probe_dpx(b"SDPX anything"));
        assert!(!probe_dpx(b"XPDS"));
        assert!(!probe_dpx(b"SD"));
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let data = b"JUNK data that is not a dpx stream";
        let mut decoder = DpxDecoder::new(RCursor::new(data));

        let err = decoder.decode_headers().unwrap_err();
        assert!(matches!(err, DpxDecodeErrors::WrongMagicBytes(_)));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let data = make_dpx(0, 1, &[]);
        let mut decoder = DpxDecoder::new(RCursor::new(&data));

        let err = decoder.decode_headers().unwrap_err();
        assert!(matches!(err, DpxDecodeErrors::ZeroDimensions));
    }

    #[test]
    fn dimensions_over_the_ceiling_are_rejected() {
        let data = make_dpx(9, 1, &[]);
        let options = DecoderOptions::default().set_max_width(8);
        let mut decoder = DpxDecoder::new_with_options(RCursor::new(&data), options);

        let err = decoder.decode_headers().unwrap_err();
        assert!(matches!(err, DpxDecodeErrors::LargeDimensions(8, 9)));
    }

    #[test]
    fn oversized_pixel_count_is_rejected_before_allocating() {
        // each dimension fits a usize row but their product does not
        let data = make_dpx(u32::MAX, u32::MAX, &[]);
        let options = DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX);
        let mut decoder = DpxDecoder::new_with_options(RCursor::new(&data), options);

        decoder.decode_headers().unwrap();
        let err = decoder.decode().unwrap_err();
        assert!(matches!(err, DpxDecodeErrors::OverflowingDimensions(_, _)));
    }

    #[test]
    fn samples_are_converted_to_native_order() {
        let row = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let data = make_dpx(1, 1, &row);

        let mut decoder = DpxDecoder::new(RCursor::new(&data));
        let pixels = decoder.decode().unwrap();

        assert_eq!(pixels, vec![0x0102, 0x0304, 0x0506, 0x0708]);
    }

    #[test]
    fn rows_are_written_in_input_order() {
        // four one-pixel rows tagged with distinct sentinels
        let mut rows = Vec::new();
        for sentinel in [10_u16, 20, 30, 40] {
            for _ in 0..4 {
                rows.extend_from_slice(&sentinel.to_be_bytes());
            }
        }
        let data = make_dpx(1, 4, &rows);

        let mut decoder = DpxDecoder::new(RCursor::new(&data));
        let pixels = decoder.decode().unwrap();

        assert_eq!(
            pixels,
            vec![10, 10, 10, 10, 20, 20, 20, 20, 30, 30, 30, 30, 40, 40, 40, 40]
        );
    }

    #[test]
    fn missing_rows_fail_with_premature_end() {
        // two rows declared, one row present
        let row = [0_u8; 8];
        let data = make_dpx(1, 2, &row);

        let mut decoder = DpxDecoder::new(RCursor::new(&data));
        let err = decoder.decode().unwrap_err();

        assert!(matches!(err, DpxDecodeErrors::PrematureEnd));
    }

    #[test]
    fn truncated_header_fails_with_io_error() {
        let mut decoder = DpxDecoder::new(RCursor::new(b"SDPX"));

        let err = decoder.decode_headers().unwrap_err();
        assert!(matches!(err, DpxDecodeErrors::IoErrors(_)));
    }

    #[test]
    fn too_small_output_is_rejected() {
        let row = [0_u8; 8];
        let data = make_dpx(1, 1, &row);

        let mut decoder = DpxDecoder::new(RCursor::new(&data));
        let mut output = [0_u16; 3];

        let err = decoder.decode_into(&mut output).unwrap_err();
        assert!(matches!(err, DpxDecodeErrors::TooSmallOutputArray(4, 3)));
    }

    #[test]
    fn convert_row_swaps_big_endian_pairs() {
        let input = [0x00, 0x01, 0xFF, 0xFE];
        let mut output = [0_u16; 2];

        convert_row(&input, &mut output);
        assert_eq!(output, [0x0001, 0xFFFE]);
    }

    #[test]
    fn headers_are_only_decoded_once() {
        let row = [0_u8; 8];
        let data = make_dpx(1, 1, &row);

        let mut decoder = DpxDecoder::new(RCursor::new(&data));
        decoder.decode_headers().unwrap();
        decoder.decode_headers().unwrap();

        assert_eq!(decoder.dimensions(), Some((1, 1)));
        assert_eq!(decoder.data_offset(), Some(780));
    }
}
