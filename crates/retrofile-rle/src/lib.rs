/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A run length decoder for retro assets
//!
//! This crate decodes run length encoded regions of a byte stream into
//! a caller provided buffer, with 8 bit and 4 bit (nibble) packing.
//!
//! The decoder reads through [`ByteStreamTrait`](retrofile_core::bytestream::ByteStreamTrait)
//! so it works the same over files, embedded assets and in-memory buffers.
//!
//! # Features
//! - `no_std` by default with `alloc`
//! - Never writes past the destination, overflowing runs are reported as errors
//! - Optional BMP style escape codes (end of line, end of bitmap, delta and absolute runs)
//!
//! # Example
//! ```
//! use retrofile_core::bytestream::MemoryBlobStream;
//! use retrofile_rle::{decode_rle, RleOptions};
//!
//! let mut out = [0; 8];
//! let written = decode_rle(MemoryBlobStream::new(&[0x05, 0xAB]), &RleOptions::default(), &mut out).unwrap();
//!
//! assert_eq!(&out[..written], &[0xAB; 5]);
//! ```
#![no_std]
#![macro_use]
extern crate alloc;

pub use crate::decoder::{decode_rle, RleDecoder};
pub use crate::errors::RleDecodeErrors;
pub use crate::options::{Packing, RleOptions};

mod decoder;
mod errors;
mod options;
mod utils;
