/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteStreamTrait, OpenMode, SeekFrom, StreamError, StreamKind};

/// A read-only stream over borrowed bytes
///
/// This is the handle produced by a [`ResourceTable`](crate::bytestream::ResourceTable)
/// for assets embedded into the binary, but it can bind any slice.
///
/// The stream never allocates and never frees the bytes it reads from,
/// closing it only forgets the slice so that later accesses are detected.
///
/// # Example
/// ```
/// use retrofile_core::bytestream::{ByteStreamTrait, MemoryBlobStream};
///
/// let mut stream = MemoryBlobStream::new(&[0x05, 0xAB]);
/// assert_eq!(stream.read_byte().unwrap(), 0x05);
/// assert_eq!(stream.has_bytes().unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct MemoryBlobStream<'a> {
    data:   Option<&'a [u8]>,
    cursor: usize
}

impl<'a> MemoryBlobStream<'a> {
    /// Bind `data` as a read-only stream with the cursor at the start
    pub const fn new(data: &'a [u8]) -> MemoryBlobStream<'a> {
        MemoryBlobStream {
            data:   Some(data),
            cursor: 0
        }
    }

    #[inline(always)]
    fn bound(&self) -> Result<&'a [u8], StreamError> {
        self.data.ok_or(StreamError::Closed)
    }

    /// Return the bytes between the cursor and the end of the stream
    /// without advancing the cursor
    pub fn remaining_slice(&self) -> Result<&'a [u8], StreamError> {
        let data = self.bound()?;
        Ok(&data[self.cursor..])
    }
}

impl<'a> ByteStreamTrait for MemoryBlobStream<'a> {
    #[inline(always)]
    fn kind(&self) -> StreamKind {
        StreamKind::MemoryBlob
    }

    #[inline(always)]
    fn mode(&self) -> OpenMode {
        OpenMode::Read
    }

    #[inline(always)]
    fn length(&self) -> Result<u64, StreamError> {
        Ok(self.bound()?.len() as u64)
    }

    #[inline(always)]
    fn cursor(&self) -> Result<u64, StreamError> {
        self.bound()?;
        Ok(self.cursor as u64)
    }

    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, StreamError> {
        let data = self.bound()?;

        match data.get(self.cursor) {
            Some(byte) => {
                self.cursor += 1;
                Ok(*byte)
            }
            None => Err(StreamError::EndOfStream)
        }
    }

    #[inline(always)]
    fn read_block(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        let data = self.bound()?;

        if buf.is_empty() {
            return Ok(0);
        }
        let start = core::cmp::min(self.cursor, data.len());
        let end = core::cmp::min(self.cursor + buf.len(), data.len());

        if start == end {
            return Err(StreamError::EndOfStream);
        }
        let slice = &data[start..end];
        buf[..slice.len()].copy_from_slice(slice);

        self.cursor = end;

        Ok(end - start)
    }

    fn seek(&mut self, from: SeekFrom) -> Result<u64, StreamError> {
        let data = self.bound()?;
        let position = from.resolve(self.cursor as u64, data.len() as u64)?;
        // resolve keeps position within the slice length
        self.cursor = position as usize;

        Ok(position)
    }

    fn write_block(&mut self, _: &[u8]) -> Result<usize, StreamError> {
        self.bound()?;
        Err(StreamError::ReadOnly)
    }

    fn write_fmt_args(&mut self, _: core::fmt::Arguments<'_>) -> Result<(), StreamError> {
        self.bound()?;
        Err(StreamError::ReadOnly)
    }

    fn close(&mut self) -> Result<(), StreamError> {
        self.bound()?;
        self.data = None;
        self.cursor = 0;
        Ok(())
    }

    #[inline(always)]
    fn is_closed(&self) -> bool {
        self.data.is_none()
    }
}
