/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ByteOrder, ByteStreamTrait, SeekFrom, StreamError};

/// An endian aware reader over any stream
///
/// Decoders wrap a handle in this to pull integers of a given width
/// out of it, the handle can be recovered with [`consume`](Self::consume).
pub struct StreamReader<T: ByteStreamTrait> {
    inner: T
}

impl<T: ByteStreamTrait> StreamReader<T> {
    pub fn new(source: T) -> StreamReader<T> {
        StreamReader { inner: source }
    }
    /// Destroy this reader returning
    /// the underlying stream
    /// from which we were reading
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }
    #[inline(always)]
    pub fn get_ref(&self) -> &T {
        &self.inner
    }
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, StreamError> {
        self.inner.seek(SeekFrom::Current(i64::try_from(num)?))
    }
    #[inline(always)]
    pub fn rewind(&mut self, num: usize) -> Result<u64, StreamError> {
        self.inner.seek(SeekFrom::Current(-i64::try_from(num)?))
    }
    #[inline(always)]
    pub fn seek(&mut self, from: SeekFrom) -> Result<u64, StreamError> {
        self.inner.seek(from)
    }
    #[inline]
    pub fn set_position(&mut self, position: u64) -> Result<(), StreamError> {
        self.seek(SeekFrom::Start(position))?;

        Ok(())
    }
    #[inline(always)]
    pub fn position(&self) -> Result<u64, StreamError> {
        self.inner.cursor()
    }
    /// Number of bytes left between the cursor and the end
    #[inline(always)]
    pub fn remaining(&self) -> Result<u64, StreamError> {
        self.inner.has_bytes()
    }
    #[inline(always)]
    pub fn eof(&self) -> Result<bool, StreamError> {
        Ok(self.inner.has_bytes()? == 0)
    }
    /// Read a single byte returning 0 if the stream is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        self.inner.read_byte().unwrap_or(0)
    }
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, StreamError> {
        self.inner.read_byte()
    }
    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], StreamError> {
        let mut byte_store: [u8; N] = [0; N];
        self.inner.read_exact_block(&mut byte_store)?;
        Ok(byte_store)
    }
    #[inline(always)]
    pub fn get_fixed_bytes_or_zero<const N: usize>(&mut self) -> [u8; N] {
        self.read_fixed_bytes_or_error().unwrap_or([0; N])
    }

    /// Read an integer of `buf.len()` bytes stored in `order`, leaving
    /// it in `buf` in the byte order of the running machine
    ///
    /// This is the width agnostic form of the `get_*` functions,
    /// useful for odd sized fields (e.g. 24 bit offsets)
    ///
    /// ## Errors
    /// [`StreamError::NotEnoughBytes`] if fewer than `buf.len()` bytes remain,
    /// the cursor is not moved in that case
    pub fn read_int(&mut self, buf: &mut [u8], order: ByteOrder) -> Result<(), StreamError> {
        self.inner.read_exact_block(buf)?;

        if order != ByteOrder::native() {
            buf.reverse();
        }
        Ok(())
    }

    pub fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        self.inner.read_line(buf)
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), StreamError> {
        self.inner.read_exact_block(buf)
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, StreamError> {
        self.inner.read_block(buf)
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
        impl<T:ByteStreamTrait> StreamReader<T>
        {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> $int_type
            {
                self.$name2(mode).unwrap_or(0)
            }

            #[inline(always)]
            fn $name2(&mut self, mode: Mode) -> Result<$int_type, StreamError>
            {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let space = self.read_fixed_bytes_or_error::<SIZE_OF_VAL>()?;

                match mode {
                    Mode::BE => Ok($int_type::from_be_bytes(space)),
                    Mode::LE => Ok($int_type::from_le_bytes(space))
                }
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying stream cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, StreamError>
            {
                self.$name2(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying stream cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name4(&mut self) -> Result<$int_type, StreamError>
            {
                self.$name2(Mode::LE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning 0 if the underlying stream does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name5(&mut self) -> $int_type
            {
                self.$name(Mode::BE)
            }
            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning 0 if the underlying stream does not have enough bytes for a ",stringify!($int_type)," read.")]
            #[inline(always)]
            pub fn $name6(&mut self) -> $int_type
            {
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
get_single_type!(
    get_u64_inner_or_default,
    get_u64_inner_or_die,
    get_u64_be_err,
    get_u64_le_err,
    get_u64_be,
    get_u64_le,
    u64
);
