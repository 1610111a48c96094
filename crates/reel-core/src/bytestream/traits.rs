/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits for reading images in the reel family of decoders.

use crate::bytestream::reader::{RByteIoError, RSeekFrom};

/// The de-facto input trait implemented for readers.
///
/// This provides the basic functions needed for quick and sometimes
/// heap free I/O for the decoders with easy support for extending it
/// to multiple implementations.
///
/// # Considerations
///
/// If you have an in memory buffer, prefer [`RCursor`](crate::bytestream::RCursor)
/// over [`Cursor`](std::io::Cursor). We implement this trait for `RCursor` and for
/// anything that implements `BufRead` + `Seek`; `Cursor` falls in the latter and
/// pays for the generality on functions like
/// [`read_byte_no_error`](crate::bytestream::RByteReaderTrait::read_byte_no_error).
pub trait RByteReaderTrait {
    /// Read a single byte from the source and return
    /// `0` if we can't read the byte, e.g because of EOF
    ///
    /// The implementation should try to be as fast as possible as this is called
    /// from some hot loops where it may become the bottleneck
    fn read_byte_no_error(&mut self) -> u8;
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Arguments
    ///  - `buf`: Buffer to fill with bytes from the underlying reader
    /// ## Errors
    /// In case of an error, the implementation should not increment the internal position
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), RByteIoError>;
    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// This is the same as [`read_exact_bytes`](Self::read_exact_bytes) but implemented as a
    /// separate method to allow some implementations to optimize it to cost fewer instructions
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), RByteIoError>;
    /// Read exact bytes required to fill `buf` or leave `buf` untouched if the source
    /// cannot fill it completely
    fn read_const_bytes_no_error<const N: usize>(&mut self, buf: &mut [u8; N]);
    /// Read bytes into `buf` returning how many bytes were read or an error if one occurred
    ///
    /// This doesn't guarantee that `buf` will be filled with bytes, for such a guarantee see
    /// [`read_exact_bytes`](Self::read_exact_bytes)
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, RByteIoError>;
    /// Seek into a new position from the buffer
    ///
    /// This is similar to the [seek](std::io::Seek::seek) function in the [Seek](std::io::Seek)
    /// trait but implemented to work for no-std environments
    fn r_seek(&mut self, from: RSeekFrom) -> Result<u64, RByteIoError>;
    /// Report whether we are at the end of a stream.
    ///
    /// ## Warning
    /// This may cause an additional syscall e.g when we are reading from a file, hence
    /// use it with care
    fn is_eof(&mut self) -> Result<bool, RByteIoError>;
    /// Return the current position of the inner cursor.
    ///
    /// This can be used to check the advancement of the cursor
    fn r_position(&mut self) -> Result<u64, RByteIoError>;
}
