/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte streams with a pluggable backend
//!
//! All backends implement [`ByteStreamTrait`], code that consumes bytes
//! (e.g. the run length decoder) only ever sees the trait and is therefore
//! oblivious to whether bytes come from a file, an embedded asset or an
//! in-memory buffer.
//!
//! Backends are picked by whoever composes the program through
//! [`StreamBackend`], either a [`ResourceTable`] of embedded assets
//! or a [`FileBackend`] rooted at some directory.
pub use buffer::MemoryBufferStream;
pub use errors::{ErrorKind, StreamError};
#[cfg(feature = "std")]
pub use file::{FileBackend, FileStream};
pub use memory::MemoryBlobStream;
pub use reader::StreamReader;
pub use table::{ResourceEntry, ResourceTable};
pub use traits::{ByteStreamTrait, StreamBackend};

mod buffer;
mod errors;
mod file;
mod memory;
mod reader;
mod table;
mod traits;

/// Enumeration of possible methods to seek within a stream.
///
/// It is analogous to the [SeekFrom](std::io::SeekFrom) in the std library but
/// it's here to allow this to work in no-std crates
///
/// Unlike `std`, seeking beyond the end of a stream is an error,
/// the cursor is always within `[0, length]`
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub enum SeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    End(i64),

    /// Sets the offset to the current position plus the specified number of
    /// bytes.
    Current(i64)
}

impl SeekFrom {
    /// Resolve this seek into an absolute position for a stream
    /// whose cursor is at `cursor` and which holds `length` bytes
    ///
    /// # Returns
    /// - `Ok(u64)`: The new absolute position
    /// - `Err(StreamError::OutOfRange)`: If the position would be negative or past `length`
    pub fn resolve(self, cursor: u64, length: u64) -> Result<u64, StreamError> {
        let target = match self {
            SeekFrom::Start(position) => i128::from(position),
            SeekFrom::End(delta) => i128::from(length) + i128::from(delta),
            SeekFrom::Current(delta) => i128::from(cursor) + i128::from(delta)
        };
        if target < 0 || target > i128::from(length) {
            return Err(StreamError::OutOfRange(target, length));
        }
        // bounded by length above, which is a u64
        Ok(target as u64)
    }
}

/// The access a stream was opened with
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OpenMode {
    /// Only reads and seeks are allowed
    Read,
    /// Reads, seeks and inserting writes are allowed
    Write
}

impl OpenMode {
    pub const fn is_writable(self) -> bool {
        matches!(self, OpenMode::Write)
    }
}

/// The backend a stream handle is bound to
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StreamKind {
    /// A file on a real filesystem
    File,
    /// A read-only byte range embedded into the program
    MemoryBlob,
    /// An owned, growable in-memory buffer
    MemoryBuffer
}

/// Byte order of multi-byte integers stored in a stream
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum ByteOrder {
    /// Least significant byte first
    #[default]
    Lsbf,
    /// Most significant byte first
    Msbf
}

impl ByteOrder {
    /// The byte order of the machine we are running on
    pub const fn native() -> ByteOrder {
        if cfg!(target_endian = "little") {
            ByteOrder::Lsbf
        } else {
            ByteOrder::Msbf
        }
    }
}
