/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::BufReader;

use reel_core::bit_depth::BitDepth;
use reel_core::bytestream::RCursor;
use reel_core::colorspace::ColorSpace;
use reel_core::options::DecoderOptions;
use reel_dpx::errors::DpxDecodeErrors;
use reel_dpx::{probe_dpx, DpxDecoder};

use crate::{hash, synthesize_dpx};

/// Pixel data at 8192, where scanners usually put it.
const REALISTIC_DATA_OFFSET: u32 = 8192;

#[test]
fn decode_two_pixel_frame() {
    // one black pixel and one red pixel, both fully opaque
    let samples = [0, 0, 0, 65535, 65535, 0, 0, 65535];
    let data = synthesize_dpx(2, 1, REALISTIC_DATA_OFFSET, &samples);

    assert!(probe_dpx(&data));

    let mut decoder = DpxDecoder::new(RCursor::new(&data));
    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((2, 1)));
    assert_eq!(decoder.colorspace(), ColorSpace::RGBA);
    assert_eq!(decoder.bit_depth(), BitDepth::Sixteen);

    // R,G,B,A per pixel, host-native order
    assert_eq!(pixels, vec![0, 0, 0, 65535, 65535, 0, 0, 65535]);
}

fn gradient_samples(width: usize, height: usize) -> Vec<u16> {
    let mut samples = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            let value = ((y * width + x) * 7) as u16;
            samples.extend_from_slice(&[value, value.wrapping_add(1), value.wrapping_add(2), u16::MAX]);
        }
    }
    samples
}

#[test]
fn decode_gradient_frame() {
    let (width, height) = (64_usize, 32_usize);
    let expected = gradient_samples(width, height);
    let data = synthesize_dpx(width as u32, height as u32, REALISTIC_DATA_OFFSET, &expected);

    let mut decoder = DpxDecoder::new(RCursor::new(&data));
    let pixels = decoder.decode().unwrap();

    assert_eq!(pixels.len(), width * height * 4);
    assert_eq!(hash(&pixels), hash(&expected));
    // spot check the corners
    assert_eq!(&pixels[..4], &expected[..4]);
    assert_eq!(&pixels[pixels.len() - 4..], &expected[expected.len() - 4..]);
}

#[test]
fn std_readers_decode_the_same_pixels() {
    let expected = gradient_samples(16, 16);
    let data = synthesize_dpx(16, 16, REALISTIC_DATA_OFFSET, &expected);

    let mut from_cursor = DpxDecoder::new(std::io::Cursor::new(data.clone()));
    let mut from_bufreader = DpxDecoder::new(BufReader::new(std::io::Cursor::new(data)));

    let a = from_cursor.decode().unwrap();
    let b = from_bufreader.decode().unwrap();

    assert_eq!(hash(&a), hash(&b));
    assert_eq!(hash(&a), hash(&expected));
}

#[test]
fn missing_final_row_is_a_premature_end() {
    let (width, height) = (8_usize, 8_usize);
    let mut samples = gradient_samples(width, height);
    // drop the final row
    samples.truncate(width * (height - 1) * 4);

    let data = synthesize_dpx(width as u32, height as u32, REALISTIC_DATA_OFFSET, &samples);

    let mut decoder = DpxDecoder::new(RCursor::new(&data));
    let err = decoder.decode().unwrap_err();

    assert!(matches!(err, DpxDecodeErrors::PrematureEnd));
}

#[test]
fn configured_ceiling_rejects_before_reading_rows() {
    let samples = gradient_samples(16, 2);
    let data = synthesize_dpx(16, 2, REALISTIC_DATA_OFFSET, &samples);

    let options = DecoderOptions::default().set_max_width(15);
    let mut decoder = DpxDecoder::new_with_options(RCursor::new(&data), options);

    let err = decoder.decode().unwrap_err();
    assert!(matches!(err, DpxDecodeErrors::LargeDimensions(15, 16)));
}
