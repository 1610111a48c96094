/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end tests for the reel decoders.
//!
//! There is no DPX corpus small enough to check in, so the streams
//! decoded here are synthesized in memory, laid out the way film
//! scanners write them, and the decoded output is compared against
//! independently constructed expectations.

#![allow(unused_imports, unused)]

use xxhash_rust::xxh3::xxh3_128;

mod dpx;

/// Hash a decoded buffer of samples, used to compare
/// large buffers without drowning assertion output.
pub fn hash(data: &[u16]) -> u128 {
    let mut bytes = Vec::with_capacity(data.len() * 2);

    for sample in data {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    xxh3_128(&bytes)
}

/// Synthesize a DPX stream: magic, image data offset, geometry at the
/// fixed header offset, pixel samples written big-endian at `data_offset`.
pub fn synthesize_dpx(width: u32, height: u32, data_offset: u32, samples: &[u16]) -> Vec<u8> {
    assert!(data_offset >= 780, "data offset would overlap the header");

    let mut out = vec![0_u8; data_offset as usize];

    out[0..4].copy_from_slice(b"SDPX");
    out[4..8].copy_from_slice(&data_offset.to_be_bytes());
    out[772..776].copy_from_slice(&width.to_be_bytes());
    out[776..780].copy_from_slice(&height.to_be_bytes());

    for sample in samples {
        out.extend_from_slice(&sample.to_be_bytes());
    }
    out
}
