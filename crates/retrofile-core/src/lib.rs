/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the retrofile crates
//!
//! This crate provides the byte stream layer used by
//! the decoders under the `retrofile` umbrella
//!
//! It currently contains
//!
//! - A stream trait with a uniform contract for reading, seeking and writing
//! - A read-only memory backend for assets embedded into the binary
//!   together with the named resource table that indexes them
//! - A writable in-memory buffer backend
//! - A file backend (behind the `std` feature)
//! - An endian aware reader wrapper
//!
//! This library is `#[no_std]` with `alloc` needed for the writable
//! buffer and for formatted writes.
//!
//! # Features
//!  - `std`: Enables the file backend and `std::error::Error` impls
//!
//!  - `log`: Forwards the internal log macros to the `log` crate
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bytestream;
pub mod log;
pub mod path;
pub mod serde;
