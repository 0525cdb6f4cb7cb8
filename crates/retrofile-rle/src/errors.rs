/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use retrofile_core::bytestream::{ErrorKind, StreamError};

/// Errors that can occur when decoding a run length stream
#[non_exhaustive]
pub enum RleDecodeErrors {
    /// The next run would write past the output, expected at least
    /// a size but the output is another size
    BufferOverflow(usize, usize),
    /// The input ended in the middle of a token, the value is the
    /// offset of the byte that was missing
    MalformedInput(u64),
    /// Could not allocate this many bytes for the output
    AllocationFailure(usize),
    /// The options do not describe a layout this stream can be decoded with
    UnsupportedOptions(&'static str),
    IoErrors(StreamError)
}

impl RleDecodeErrors {
    /// Map this error onto the shared error taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BufferOverflow(..) => ErrorKind::BufferOverflow,
            Self::MalformedInput(_) => ErrorKind::MalformedInput,
            Self::UnsupportedOptions(_) => ErrorKind::InvalidOptions,
            Self::AllocationFailure(_) => ErrorKind::AllocationFailure,
            Self::IoErrors(err) => err.kind()
        }
    }
}

impl Debug for RleDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferOverflow(expected, found) => {
                writeln!(
                    f,
                    "Output buffer too small, expected at least {} but found {}",
                    expected, found
                )
            }
            Self::MalformedInput(position) => {
                writeln!(f, "Input ends in the middle of a token at offset {position}")
            }
            Self::AllocationFailure(size) => {
                writeln!(f, "Could not allocate {size} bytes for the output")
            }
            Self::UnsupportedOptions(message) => {
                writeln!(f, "Unsupported options: {}", message)
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for RleDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<StreamError> for RleDecodeErrors {
    fn from(value: StreamError) -> Self {
        RleDecodeErrors::IoErrors(value)
    }
}

impl core::error::Error for RleDecodeErrors {}
