/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

/// The broad category of a failure
///
/// Every error surfaced by the retrofile crates maps onto exactly
/// one of these, so callers can decide on recovery (e.g. falling back to
/// another backend on `NotFound`) without matching on every variant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    /// Named resource is absent from the table or the disk
    NotFound,
    /// A write was attempted on a handle that cannot support it
    ReadOnlyViolation,
    /// A read needed at least one byte but none were left
    EndOfStream,
    /// A seek target was outside `[0, length]`
    OutOfRange,
    /// A buffer could not be allocated
    AllocationFailure,
    /// A decode would write past the destination capacity
    BufferOverflow,
    /// Truncated or structurally invalid input
    MalformedInput,
    /// The handle was already closed
    Closed,
    /// Decoder options cannot be used on this stream, the input itself may be fine
    InvalidOptions,
    /// Any other platform I/O failure
    Io
}

/// Errors that can occur when operating on a stream
#[non_exhaustive]
pub enum StreamError {
    /// No resource with this name exists in the backend
    NotFound(String),
    /// The handle was opened read-only or the backend cannot write
    ReadOnly,
    /// A read requested bytes but the cursor was at the end
    EndOfStream,
    /// A read required more bytes than left in the stream
    /// requested, available
    NotEnoughBytes(usize, usize),
    /// Seek target, stream length
    OutOfRange(i128, u64),
    /// The buffer passed in cannot hold the result
    /// needed, found
    NotEnoughBuffer(usize, usize),
    /// Allocation of the given number of bytes failed
    AllocationFailed(usize),
    /// Operation on a handle that was already closed
    Closed,
    TryFromIntError(core::num::TryFromIntError),
    #[cfg(feature = "std")]
    StdIoError(std::io::Error)
}

impl StreamError {
    /// Map this error onto the shared error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            StreamError::NotFound(_) => ErrorKind::NotFound,
            StreamError::ReadOnly => ErrorKind::ReadOnlyViolation,
            StreamError::EndOfStream | StreamError::NotEnoughBytes(..) => ErrorKind::EndOfStream,
            StreamError::OutOfRange(..) | StreamError::TryFromIntError(_) => ErrorKind::OutOfRange,
            StreamError::NotEnoughBuffer(..) => ErrorKind::BufferOverflow,
            StreamError::AllocationFailed(_) => ErrorKind::AllocationFailure,
            StreamError::Closed => ErrorKind::Closed,
            #[cfg(feature = "std")]
            StreamError::StdIoError(_) => ErrorKind::Io
        }
    }
}

impl Debug for StreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            StreamError::NotFound(name) => {
                writeln!(f, "Resource \"{name}\" not found")
            }
            StreamError::ReadOnly => {
                writeln!(f, "Cannot write to a read-only stream")
            }
            StreamError::EndOfStream => {
                writeln!(f, "End of stream reached")
            }
            StreamError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            StreamError::OutOfRange(target, length) => {
                writeln!(
                    f,
                    "Seek to {target} is outside of the stream bounds [0, {length}]"
                )
            }
            StreamError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to hold {expected} bytes, buffer size is {found}"
                )
            }
            StreamError::AllocationFailed(size) => {
                writeln!(f, "Could not allocate {size} bytes")
            }
            StreamError::Closed => {
                writeln!(f, "Stream handle was already closed")
            }
            StreamError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {}", err)
            }
            #[cfg(feature = "std")]
            StreamError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
        }
    }
}

impl Display for StreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StreamError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for StreamError {
    fn from(value: std::io::Error) -> Self {
        use std::io::ErrorKind as IoKind;

        match value.kind() {
            IoKind::NotFound => StreamError::NotFound(alloc::string::ToString::to_string(&value)),
            IoKind::PermissionDenied => StreamError::ReadOnly,
            IoKind::UnexpectedEof => StreamError::EndOfStream,
            IoKind::OutOfMemory => StreamError::AllocationFailed(0),
            _ => StreamError::StdIoError(value)
        }
    }
}

impl From<core::num::TryFromIntError> for StreamError {
    fn from(value: core::num::TryFromIntError) -> Self {
        StreamError::TryFromIntError(value)
    }
}
