/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// `SDPX`, the big-endian file identifier.
pub const DPX_IDENTIFIER_BE: u32 = 0x5344_5058;

/// Byte offset of the pixels-per-line field in the generic image
/// header, immediately followed by lines-per-element.
pub(crate) const DPX_DIMENSIONS_OFFSET: usize = 772;

/// R,G,B,A
pub(crate) const DPX_NUM_CHANNELS: usize = 4;

/// Each sample is a `u16`
pub(crate) const DPX_SAMPLE_SIZE: usize = core::mem::size_of::<u16>();
