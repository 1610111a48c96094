/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple DPX (Digital Picture Exchange) decoder.
//!
//! DPX is the raster container used to move scanned film frames through
//! post-production pipelines. The full standard carries a large header and
//! many encodings; this crate reads the one variant the format is most
//! often archived in by intermediate tools, and nothing else:
//!
//! ```text
//! ╔═════════╤═══════════════════════════════════════════════════════════╗
//! ║ Bytes   │ Description                                               ║
//! ╠═════════╪═══════════════════════════════════════════════════════════╣
//! ║ 0..4    │ "SDPX" magic value                                        ║
//! ╟─────────┼───────────────────────────────────────────────────────────╢
//! ║ 4..8    │ 32-Bit BE unsigned integer (offset to image data)         ║
//! ╟─────────┼───────────────────────────────────────────────────────────╢
//! ║ 772..776│ 32-Bit BE unsigned integer (width)                        ║
//! ╟─────────┼───────────────────────────────────────────────────────────╢
//! ║ 776..780│ 32-Bit BE unsigned integer (height)                       ║
//! ╟─────────┼───────────────────────────────────────────────────────────╢
//! ║ data    │ 4x16-Bit BE unsigned integers [RGBA] / pixel, row-major,  ║
//! ║         │ uncompressed, starting at the image data offset           ║
//! ╚═════════╧═══════════════════════════════════════════════════════════╝
//! ```
//!
//! Ten and twelve bit variants, packed samples, little-endian files and
//! compressed image elements are not supported, decoding such a file will
//! read garbage pixels or fail with a truncation error.
//!
//! Decoded samples are always returned in host-native byte order.
//!
//! # Example
//! - Reading a dpx file
//! ```no_run
//! use reel_core::bytestream::RCursor;
//! use reel_dpx::errors::DpxDecodeErrors;
//! use reel_dpx::DpxDecoder;
//!
//! fn main() -> Result<(), DpxDecodeErrors> {
//!     let file_contents = std::fs::read("scan.dpx").unwrap();
//!     let mut decoder = DpxDecoder::new(RCursor::new(&file_contents));
//!     let pixels: Vec<u16> = decoder.decode()?;
//!     Ok(())
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;
pub extern crate reel_core;

pub use decoder::{probe_dpx, DpxDecoder};

mod constants;
pub mod decoder;
pub mod errors;
