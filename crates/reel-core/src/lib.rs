//! Core routines shared by the reel family of crates
//!
//! This crate provides the infrastructure consumed by the
//! film-image decoders under the `reel` umbrella.
//!
//! It currently contains
//!
//! - A bytestream reader with endian aware reads
//! - Colorspace and bit depth information shared by images
//! - Image decoder options
//!
//! This library is `#[no_std]` with the `alloc` feature needed for defining `Vec`
//! which we need for storing decoded bytes.
//!
//!
//! # Features
//!  - `std`: Enables byte sources backed by [`std::io`] readers.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod log;
pub mod options;
pub mod serde;
