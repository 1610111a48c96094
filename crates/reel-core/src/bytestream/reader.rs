pub(crate) mod cursor;
pub(crate) mod std_readers;

pub use cursor::RCursor;

use crate::bytestream::RByteReaderTrait;

/// Enumeration of possible methods to seek within an I/O object.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum RSeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    ///
    /// It is possible to seek beyond the end of an object, but it's an error to
    /// seek before byte 0.
    Current(i64)
}

impl RSeekFrom {
    /// Convert to [SeekFrom](std::io::SeekFrom) from the `std::io` library
    ///
    /// This is only present when the std feature is present
    #[cfg(feature = "std")]
    pub(crate) fn to_std_seek(self) -> std::io::SeekFrom {
        match self {
            RSeekFrom::Start(pos) => std::io::SeekFrom::Start(pos),
            RSeekFrom::End(pos) => std::io::SeekFrom::End(pos),
            RSeekFrom::Current(pos) => std::io::SeekFrom::Current(pos)
        }
    }
}

/// Errors surfaced by byte sources.
pub enum RByteIoError {
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    // requested, available
    NotEnoughBytes(usize, usize),
    Generic(&'static str),
    SeekError(&'static str)
}

impl core::fmt::Debug for RByteIoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            RByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            RByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            RByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
            RByteIoError::SeekError(err) => {
                writeln!(f, "Seek error: {err}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for RByteIoError {
    fn from(value: std::io::Error) -> Self {
        RByteIoError::StdIoError(value)
    }
}

impl From<&'static str> for RByteIoError {
    fn from(value: &'static str) -> Self {
        RByteIoError::Generic(value)
    }
}

/// A reader wrapping a byte source with endian aware integer reads.
///
/// Decoders own one of these for the duration of a decode and pull
/// headers and pixel rows through it.
pub struct RReader<T: RByteReaderTrait> {
    inner: T
}

impl<T: RByteReaderTrait> RReader<T> {
    pub fn new(source: T) -> RReader<T> {
        RReader { inner: source }
    }

    /// Destroy this reader returning the underlying source of the
    /// bytes from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, RByteIoError> {
        self.inner.r_seek(RSeekFrom::Current(num as i64))
    }

    #[inline(always)]
    pub fn rewind(&mut self, num: usize) -> Result<u64, RByteIoError> {
        self.inner.r_seek(RSeekFrom::Current(-(num as i64)))
    }

    #[inline(always)]
    pub fn seek(&mut self, from: RSeekFrom) -> Result<u64, RByteIoError> {
        self.inner.r_seek(from)
    }

    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), RByteIoError> {
        self.seek(RSeekFrom::Start(position as u64))?;

        Ok(())
    }

    #[inline(always)]
    pub fn read_u8(&mut self) -> u8 {
        self.inner.read_byte_no_error()
    }

    #[inline(always)]
    pub fn read_u8_err(&mut self) -> Result<u8, RByteIoError> {
        let mut buf = [0];
        self.inner.read_exact_bytes(&mut buf)?;
        Ok(buf[0])
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], RByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        match self.inner.read_const_bytes(&mut byte_store) {
            Ok(_) => Ok(byte_store),
            Err(e) => Err(e)
        }
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, RByteIoError> {
        self.inner.is_eof()
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, RByteIoError> {
        self.inner.r_position()
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), RByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, RByteIoError> {
        self.inner.read_bytes(buf)
    }
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$int_type:tt) => {
        impl<T: RByteReaderTrait> RReader<T> {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> $int_type {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                self.inner.read_const_bytes_no_error(&mut space);

                match mode {
                    Mode::BE => $int_type::from_be_bytes(space),
                    Mode::LE => $int_type::from_le_bytes(space)
                }
            }

            #[inline(always)]
            fn $name2(&mut self, mode: Mode) -> Result<$int_type, RByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                match self.inner.read_const_bytes(&mut space) {
                    Ok(_) => match mode {
                        Mode::BE => Ok($int_type::from_be_bytes(space)),
                        Mode::LE => Ok($int_type::from_le_bytes(space))
                    },
                    Err(e) => Err(e)
                }
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, RByteIoError> {
                self.$name2(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name4(&mut self) -> Result<$int_type, RByteIoError> {
                self.$name2(Mode::LE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning 0 if the underlying buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name5(&mut self) -> $int_type {
                self.$name(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning 0 if the underlying buffer does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name6(&mut self) -> $int_type {
                self.$name(Mode::LE)
            }
        }
    };
}

get_single_type!(
    get_u16_inner_or_default,
    get_u16_inner_or_die,
    get_u16_be_err,
    get_u16_le_err,
    get_u16_be,
    get_u16_le,
    u16
);
get_single_type!(
    get_u32_inner_or_default,
    get_u32_inner_or_die,
    get_u32_be_err,
    get_u32_le_err,
    get_u32_be,
    get_u32_le,
    u32
);

#[cfg(feature = "std")]
impl<T> std::io::Read for RReader<T>
where
    T: RByteReaderTrait
{
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        use std::io::ErrorKind;
        self.read_bytes(buf)
            .map_err(|e| std::io::Error::new(ErrorKind::Other, format!("{:?}", e)))
    }
}
