/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use crate::bytestream::{ByteStreamTrait, OpenMode, SeekFrom, StreamError, StreamKind};
use crate::log::trace;

/// A stream over an owned, growable buffer
///
/// Writes are inserting, bytes after the cursor are moved forward
/// to make room for the new ones.
pub struct MemoryBufferStream {
    data:   Vec<u8>,
    cursor: usize,
    mode:   OpenMode,
    closed: bool
}

impl MemoryBufferStream {
    /// Wrap `data` in a writable stream with the cursor at the start
    pub fn new(data: Vec<u8>) -> MemoryBufferStream {
        MemoryBufferStream {
            data,
            cursor: 0,
            mode: OpenMode::Write,
            closed: false
        }
    }
    /// Wrap `data` in a stream that rejects writes
    pub fn new_read_only(data: Vec<u8>) -> MemoryBufferStream {
        MemoryBufferStream {
            data,
            cursor: 0,
            mode: OpenMode::Read,
            closed: false
        }
    }

    /// Destroy this stream returning
    /// the underlying buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Borrow the contents of the stream
    pub fn get_ref(&self) -> &[u8] {
        &self.data
    }

    #[inline(always)]
    fn check_open(&self) -> Result<(), StreamError> {
        if self.closed {
            return Err(StreamError::Closed);
        }
        Ok(())
    }
}

impl ByteStreamTrait for MemoryBufferStream {
    fn kind(&self) -> StreamKind {
        StreamKind::MemoryBuffer
    }

    fn mode(&self) -> OpenMode {
        self.mode
    }

    fn length(&self) -> Result<u64, StreamError> {
        self.check_open()?;
        Ok(self.data.len() as u64)
    }

    fn cursor(&self) -> Result<u64, StreamError> {
        self.check_open()?;
        Ok(self.cursor as u64)
    }

    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        self.check_open()?;

        if buf.is_empty() {
            return Ok(0);
        }
        let remaining = &self.data[self.cursor..];
        if remaining.is_empty() {
            return Err(StreamError::EndOfStream);
        }
        let amount = core::cmp::min(buf.len(), remaining.len());
        buf[..amount].copy_from_slice(&remaining[..amount]);
        self.cursor += amount;

        Ok(amount)
    }

    fn seek(&mut self, from: SeekFrom) -> Result<u64, StreamError> {
        self.check_open()?;
        let position = from.resolve(self.cursor as u64, self.data.len() as u64)?;
        self.cursor = position as usize;

        Ok(position)
    }

    fn write_block(&mut self, buf: &[u8]) -> Result<usize, StreamError> {
        self.check_open()?;

        if !self.mode.is_writable() {
            return Err(StreamError::ReadOnly);
        }
        if buf.is_empty() {
            return Ok(0);
        }
        trace!(
            "Inserting {} bytes at {} of {}",
            buf.len(),
            self.cursor,
            self.data.len()
        );
        self.data
            .try_reserve(buf.len())
            .map_err(|_| StreamError::AllocationFailed(buf.len()))?;

        let old_len = self.data.len();
        let end = self.cursor + buf.len();

        self.data.resize(old_len + buf.len(), 0);
        // shift the tail forward then fill the hole
        self.data.copy_within(self.cursor..old_len, end);
        self.data[self.cursor..end].copy_from_slice(buf);
        self.cursor = end;

        Ok(buf.len())
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.check_open()?;
        self.closed = true;
        self.cursor = 0;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
