/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for opening, reading and writing streams in retrofile
//!
//! This exposes the traits implemented by every backend
//! and the seam through which a backend is chosen at startup.

use core::fmt::Arguments;

use crate::bytestream::{OpenMode, SeekFrom, StreamError, StreamKind};

/// The de-facto stream trait implemented by every backend.
///
/// A handle always keeps its cursor within `[0, length]`, every operation
/// that would violate that fails instead of clamping silently.
///
/// Handles are closed with [`close`](Self::close), any operation
/// after that (including a second close) fails with [`StreamError::Closed`].
/// Dropping a handle without closing it releases its resources too.
pub trait ByteStreamTrait {
    /// The backend this handle is bound to
    fn kind(&self) -> StreamKind;

    /// The access this handle was opened with
    fn mode(&self) -> OpenMode;

    /// Total addressable size of the stream in bytes
    fn length(&self) -> Result<u64, StreamError>;

    /// Current position of the cursor
    fn cursor(&self) -> Result<u64, StreamError>;

    /// Number of bytes between the cursor and the end of the stream
    ///
    /// Loop driven readers use this to detect the end without
    /// probing the length directly.
    fn has_bytes(&self) -> Result<u64, StreamError> {
        Ok(self.length()?.saturating_sub(self.cursor()?))
    }

    /// Read a single byte, advancing the cursor by one
    ///
    /// ## Errors
    /// [`StreamError::EndOfStream`] if the cursor is at the end
    fn read_byte(&mut self) -> Result<u8, StreamError> {
        let mut byte = [0];
        self.read_block(&mut byte)?;
        Ok(byte[0])
    }

    /// Read up to `buf.len()` bytes returning how many bytes were copied
    ///
    /// Short reads at the end of the stream are reported through the
    /// returned count. An empty `buf` returns `Ok(0)`.
    ///
    /// ## Errors
    /// [`StreamError::EndOfStream`] if at least one byte was requested
    /// and none were left
    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, StreamError>;

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    ///
    /// ## Errors
    /// In case of an error, the cursor is not moved
    fn read_exact_block(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        let remaining = self.has_bytes()?;

        if (remaining as u128) < (buf.len() as u128) {
            return Err(StreamError::NotEnoughBytes(buf.len(), remaining as usize));
        }
        let mut filled = 0;

        while filled < buf.len() {
            filled += self.read_block(&mut buf[filled..])?;
        }
        Ok(())
    }

    /// Reposition the cursor returning the new absolute position
    ///
    /// ## Errors
    /// [`StreamError::OutOfRange`] if the target is negative or past the end,
    /// the cursor is left untouched
    fn seek(&mut self, from: SeekFrom) -> Result<u64, StreamError>;

    /// Read a line into `buf`
    ///
    /// Reads until a `\n` byte or until `buf.len() - 1` bytes were stored, whichever comes
    /// first, then stores a NUL byte after the data. The newline is consumed but not stored.
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of bytes stored before the NUL terminator
    /// - `Err(StreamError::EndOfStream)`: No bytes were left in the stream
    /// - `Err(StreamError::NotEnoughBuffer)`: `buf` cannot even hold the terminator
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        if buf.is_empty() {
            return Err(StreamError::NotEnoughBuffer(1, 0));
        }
        if self.has_bytes()? == 0 {
            return Err(StreamError::EndOfStream);
        }
        let mut stored = 0;

        while stored + 1 < buf.len() && self.has_bytes()? > 0 {
            let byte = self.read_byte()?;
            if byte == b'\n' {
                break;
            }
            buf[stored] = byte;
            stored += 1;
        }
        buf[stored] = 0;

        Ok(stored)
    }

    /// Insert `buf` at the cursor, shifting the rest of the stream forward
    ///
    /// The cursor and the length both grow by the number of bytes written
    ///
    /// ## Errors
    /// [`StreamError::ReadOnly`] if the handle is not writable
    fn write_block(&mut self, buf: &[u8]) -> Result<usize, StreamError>;

    /// Format `args` and insert them at the cursor
    ///
    /// Use it through the [`stream_printf`](crate::stream_printf) macro
    ///
    /// ## Errors
    /// [`StreamError::ReadOnly`] if the handle is not writable, nothing is formatted
    fn write_fmt_args(&mut self, args: Arguments<'_>) -> Result<(), StreamError> {
        if !self.mode().is_writable() {
            return Err(StreamError::ReadOnly);
        }
        let formatted = alloc::fmt::format(args);
        self.write_block(formatted.as_bytes())?;
        Ok(())
    }

    /// Release the resources held by this handle
    ///
    /// ## Errors
    /// [`StreamError::Closed`] if the handle was already closed
    fn close(&mut self) -> Result<(), StreamError>;

    /// Whether [`close`](Self::close) was already called on this handle
    fn is_closed(&self) -> bool;
}

/// A source of stream handles
///
/// This is how a program picks where its bytes come from, the backend is
/// constructed once at startup and handed to whoever needs to open resources.
pub trait StreamBackend {
    /// The handle type this backend produces
    type Stream: ByteStreamTrait;

    /// Open the resource called `name`
    ///
    /// ## Errors
    /// - [`StreamError::NotFound`]: No resource matches `name`
    /// - [`StreamError::ReadOnly`]: `mode` asks for writes the backend cannot provide
    fn open(&self, name: &str, mode: OpenMode) -> Result<Self::Stream, StreamError>;
}

impl<T: ByteStreamTrait + ?Sized> ByteStreamTrait for &mut T {
    #[inline(always)]
    fn kind(&self) -> StreamKind {
        (**self).kind()
    }
    #[inline(always)]
    fn mode(&self) -> OpenMode {
        (**self).mode()
    }
    #[inline(always)]
    fn length(&self) -> Result<u64, StreamError> {
        (**self).length()
    }
    #[inline(always)]
    fn cursor(&self) -> Result<u64, StreamError> {
        (**self).cursor()
    }
    #[inline(always)]
    fn has_bytes(&self) -> Result<u64, StreamError> {
        (**self).has_bytes()
    }
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, StreamError> {
        (**self).read_byte()
    }
    #[inline(always)]
    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        (**self).read_block(buf)
    }
    #[inline(always)]
    fn read_exact_block(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        (**self).read_exact_block(buf)
    }
    #[inline(always)]
    fn seek(&mut self, from: SeekFrom) -> Result<u64, StreamError> {
        (**self).seek(from)
    }
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        (**self).read_line(buf)
    }
    fn write_block(&mut self, buf: &[u8]) -> Result<usize, StreamError> {
        (**self).write_block(buf)
    }
    fn write_fmt_args(&mut self, args: Arguments<'_>) -> Result<(), StreamError> {
        (**self).write_fmt_args(args)
    }
    fn close(&mut self) -> Result<(), StreamError> {
        (**self).close()
    }
    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// Write formatted text into a writable stream
///
/// ```
/// use retrofile_core::bytestream::{ByteStreamTrait, MemoryBufferStream};
/// use retrofile_core::stream_printf;
///
/// let mut stream = MemoryBufferStream::new(Vec::new());
/// stream_printf!(stream, "width={} height={}", 32, 16).unwrap();
/// assert_eq!(stream.into_inner(), b"width=32 height=16");
/// ```
#[macro_export]
macro_rules! stream_printf {
    ($stream:expr, $($arg:tt)*) => {
        $crate::bytestream::ByteStreamTrait::write_fmt_args(&mut $stream, format_args!($($arg)*))
    };
}
