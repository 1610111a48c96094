#![cfg(feature = "std")]

use std::io;
use std::io::{BufRead, BufReader, Read, Seek};

use crate::bytestream::reader::{RByteIoError, RSeekFrom};
use crate::bytestream::RByteReaderTrait;

impl<T> RByteReaderTrait for std::io::Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        let mut buf = [0];
        let _ = self.read(&mut buf);
        buf[0]
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), RByteIoError> {
        self.read_exact(buf).map_err(RByteIoError::from)
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), RByteIoError> {
        self.read_exact(buf).map_err(RByteIoError::from)
    }

    #[inline(always)]
    fn read_const_bytes_no_error<const N: usize>(&mut self, buf: &mut [u8; N]) {
        let _ = self.read_exact(buf);
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, RByteIoError> {
        self.read(buf).map_err(RByteIoError::from)
    }

    #[inline(always)]
    fn r_seek(&mut self, from: RSeekFrom) -> Result<u64, RByteIoError> {
        self.seek(from.to_std_seek()).map_err(RByteIoError::from)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, RByteIoError> {
        Ok(self.position() as usize >= self.get_ref().as_ref().len())
    }

    #[inline(always)]
    fn r_position(&mut self) -> Result<u64, RByteIoError> {
        Ok(self.position())
    }
}

impl<T: io::Read + io::Seek> RByteReaderTrait for BufReader<T> {
    #[inline(always)]
    fn read_byte_no_error(&mut self) -> u8 {
        let mut buf = [0];
        let _ = self.read(&mut buf);
        buf[0]
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), RByteIoError> {
        self.read_exact(buf).map_err(RByteIoError::from)
    }

    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), RByteIoError> {
        self.read_exact(buf).map_err(RByteIoError::from)
    }

    fn read_const_bytes_no_error<const N: usize>(&mut self, buf: &mut [u8; N]) {
        let _ = self.read_exact(buf);
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, RByteIoError> {
        self.read(buf).map_err(RByteIoError::from)
    }

    fn r_seek(&mut self, from: RSeekFrom) -> Result<u64, RByteIoError> {
        self.seek(from.to_std_seek()).map_err(RByteIoError::from)
    }

    fn is_eof(&mut self) -> Result<bool, RByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(RByteIoError::from)
    }

    fn r_position(&mut self) -> Result<u64, RByteIoError> {
        self.stream_position().map_err(RByteIoError::from)
    }
}
