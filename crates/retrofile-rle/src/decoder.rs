/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Run length decoder
//!
//! The encoded region is a sequence of `(count, value)` tokens,
//!
//! * With 8 bit packing, `value` is written `count` times to the output.
//! * With 4 bit packing, `count` output bytes are written alternating between the
//!   high and low nibble of `value`, starting with the high one.
//!
//! When escapes are enabled a zero count instead introduces an escape sequence,
//! the second byte gives the details
//!   * 0: end of line
//!   * 1: end of bitmap
//!   * 2: "Delta", the *next* two bytes are unsigned offsets to the
//!     right and down of where the output should move to.
//!   * 3+: "Absolute", the second byte gives a count of how many pixels follow
//!     that we'll output without repetition. The absolute sequences
//!     always have a padding byte on the ending if the byte count is odd.
//!
//! Without escapes a zero count token is skipped.
use alloc::vec::Vec;

use log::error;
use retrofile_core::bytestream::{ByteStreamTrait, SeekFrom, StreamReader};
use retrofile_core::log::{trace, warn};

use crate::errors::RleDecodeErrors;
use crate::options::{Packing, RleOptions};
use crate::utils::{expand_nibbles, fill_run};

/// A run length decoder
///
/// The decoder reads from any [`ByteStreamTrait`] handle, pass `&mut handle`
/// to keep ownership of the stream after decoding.
///
/// # Example
/// ```
/// use retrofile_core::bytestream::MemoryBlobStream;
/// use retrofile_rle::{Packing, RleDecoder, RleOptions};
///
/// let options = RleOptions::default().set_packing(Packing::FourBit);
/// let mut decoder = RleDecoder::new_with_options(MemoryBlobStream::new(&[0x04, 0x12]), options);
///
/// let pixels = decoder.decode(16).unwrap();
/// assert_eq!(pixels, [1, 2, 1, 2]);
/// ```
pub struct RleDecoder<T: ByteStreamTrait> {
    bytes:   StreamReader<T>,
    options: RleOptions
}

impl<T: ByteStreamTrait> RleDecoder<T> {
    /// Create a decoder reading the whole stream as 8 bit runs
    pub fn new(stream: T) -> RleDecoder<T> {
        RleDecoder::new_with_options(stream, RleOptions::default())
    }
    /// Create a new decoder instance with specified options
    pub fn new_with_options(stream: T, options: RleOptions) -> RleDecoder<T> {
        RleDecoder {
            bytes: StreamReader::new(stream),
            options
        }
    }

    pub const fn options(&self) -> &RleOptions {
        &self.options
    }

    /// Destroy the decoder returning the stream it was reading from
    pub fn into_inner(self) -> T {
        self.bytes.consume()
    }

    /// Move to the start of the region and return how many input bytes make it up
    fn seek_region(&mut self) -> Result<usize, RleDecodeErrors> {
        let offset = self.options.get_offset();
        self.bytes.seek(SeekFrom::Start(offset))?;

        let available = self.bytes.remaining()?;
        let wanted = self.options.get_input_len();

        if wanted != usize::MAX && (wanted as u64) > available {
            warn!(
                "Region of {} bytes at {} exceeds the stream, only {} bytes are available",
                wanted, offset, available
            );
        }
        // clamped by available, which fits in wanted's type
        Ok(core::cmp::min(wanted as u64, available) as usize)
    }

    /// Read the `(count, value)` pair starting at `consumed`
    #[inline(always)]
    fn read_token(
        &mut self, consumed: &mut usize, input_len: usize
    ) -> Result<(u8, u8), RleDecodeErrors> {
        let count = self.bytes.get_u8_err()?;
        *consumed += 1;

        if *consumed >= input_len {
            let position = self.options.get_offset() + *consumed as u64;
            error!("Input ends after a count byte, missing value at {}", position);
            return Err(RleDecodeErrors::MalformedInput(position));
        }
        let value = self.bytes.get_u8_err()?;
        *consumed += 1;

        Ok((count, value))
    }

    /// Compute how many output bytes the encoded region expands to
    ///
    /// This walks the tokens without writing anything, the stream is
    /// left after the region.
    ///
    /// Only plain run streams can be sized up front, with escapes
    /// the output size depends on the bitmap height which the stream
    /// does not carry
    pub fn output_buf_size(&mut self) -> Result<usize, RleDecodeErrors> {
        if self.options.get_escapes() {
            return Err(RleDecodeErrors::UnsupportedOptions(
                "Cannot size an escaped stream, output size depends on the bitmap height"
            ));
        }
        let input_len = self.seek_region()?;
        let mut consumed = 0;
        let mut size: usize = 0;

        while consumed < input_len {
            let (count, _) = self.read_token(&mut consumed, input_len)?;
            size += usize::from(count);
        }
        Ok(size)
    }

    /// Decode into a freshly allocated buffer of `capacity` bytes
    ///
    /// The returned buffer is truncated to the number of bytes decoded
    ///
    /// ## Errors
    /// [`RleDecodeErrors::AllocationFailure`] if `capacity` bytes cannot be
    /// allocated, plus everything [`decode_into`](Self::decode_into) returns
    pub fn decode(&mut self, capacity: usize) -> Result<Vec<u8>, RleDecodeErrors> {
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(capacity)
            .map_err(|_| RleDecodeErrors::AllocationFailure(capacity))?;
        pixels.resize(capacity, 0);

        let written = self.decode_into(&mut pixels)?;
        pixels.truncate(written);

        Ok(pixels)
    }

    /// Decode the encoded region into `out` returning the number of bytes written
    ///
    /// Nothing is ever written past the end of `out`, if a run would
    /// not fit the decode stops with [`RleDecodeErrors::BufferOverflow`].
    /// On failure the contents of `out` are unspecified.
    ///
    /// With escapes the returned size is the offset one past the last pixel
    /// written, pixels skipped by deltas or line ends are left untouched.
    pub fn decode_into(&mut self, out: &mut [u8]) -> Result<usize, RleDecodeErrors> {
        let input_len = self.seek_region()?;

        trace!(
            "Decoding {} bytes at {} as {:?} runs into {} bytes",
            input_len,
            self.options.get_offset(),
            self.options.get_packing(),
            out.len()
        );

        if self.options.get_escapes() {
            self.decode_escaped(input_len, out)
        } else {
            self.decode_runs(input_len, out)
        }
    }

    fn decode_runs(&mut self, input_len: usize, out: &mut [u8]) -> Result<usize, RleDecodeErrors> {
        let packing = self.options.get_packing();
        let mut consumed = 0;
        let mut written = 0;

        while consumed < input_len {
            let (count, value) = self.read_token(&mut consumed, input_len)?;

            if count == 0 {
                continue;
            }
            let end = written + usize::from(count);

            if end > out.len() {
                error!(
                    "Run of {} at {} goes past the output of {} bytes",
                    count,
                    written,
                    out.len()
                );
                return Err(RleDecodeErrors::BufferOverflow(end, out.len()));
            }
            fill_run(packing, value, &mut out[written..end]);
            written = end;
        }
        Ok(written)
    }

    fn decode_escaped(
        &mut self, input_len: usize, out: &mut [u8]
    ) -> Result<usize, RleDecodeErrors> {
        let width = self.options.get_line_width();

        if width == 0 {
            return Err(RleDecodeErrors::UnsupportedOptions(
                "Line width must be set to decode escaped runs"
            ));
        }
        let packing = self.options.get_packing();
        let mut consumed = 0;
        let mut line: usize = 0;
        let mut pos: usize = 0;
        let mut high_water = 0;

        while consumed < input_len {
            let (p1, p2) = self.read_token(&mut consumed, input_len)?;

            let (num_pixels, literal) = match (p1, p2) {
                (0, 0) => {
                    // end of line
                    line = line.saturating_add(1);
                    pos = 0;
                    continue;
                }
                (0, 1) => {
                    // end of bitmap
                    return Ok(high_water);
                }
                (0, 2) => {
                    // delta
                    if consumed + 2 > input_len {
                        let position = self.options.get_offset() + input_len as u64;
                        error!("Delta escape is cut short at {}", position);
                        return Err(RleDecodeErrors::MalformedInput(position));
                    }
                    let dx = self.bytes.get_u8_err()?;
                    let dy = self.bytes.get_u8_err()?;
                    consumed += 2;

                    pos = pos.saturating_add(usize::from(dx));
                    line = line.saturating_add(usize::from(dy));
                    continue;
                }
                (0, n) => (usize::from(n), true),
                (n, _) => (usize::from(n), false)
            };

            let row_end = pos.saturating_add(num_pixels);

            if row_end > width {
                return Err(RleDecodeErrors::BufferOverflow(row_end, width));
            }
            let end = line
                .checked_mul(width)
                .and_then(|row| row.checked_add(pos))
                .and_then(|start| start.checked_add(num_pixels))
                .ok_or(RleDecodeErrors::BufferOverflow(usize::MAX, out.len()))?;
            let start = end - num_pixels;

            if end > out.len() {
                error!(
                    "Run of {} at line {} goes past the output of {} bytes",
                    num_pixels,
                    line,
                    out.len()
                );
                return Err(RleDecodeErrors::BufferOverflow(end, out.len()));
            }

            if literal {
                let data_len = match packing {
                    Packing::EightBit => num_pixels,
                    Packing::FourBit => (num_pixels + 1) / 2
                };
                if consumed + data_len > input_len {
                    let position = self.options.get_offset() + input_len as u64;
                    error!("Absolute run of {} pixels is cut short at {}", num_pixels, position);
                    return Err(RleDecodeErrors::MalformedInput(position));
                }
                match packing {
                    Packing::EightBit => {
                        self.bytes.read_exact_bytes(&mut out[start..end])?;
                    }
                    Packing::FourBit => {
                        // 255 pixels at most, two per byte
                        let mut packed = [0_u8; 128];
                        self.bytes.read_exact_bytes(&mut packed[..data_len])?;
                        expand_nibbles(&packed[..data_len], &mut out[start..end]);
                    }
                }
                consumed += data_len;

                // absolute runs are padded to a whole number of words
                if data_len & 1 == 1 && consumed < input_len {
                    self.bytes.skip(1)?;
                    consumed += 1;
                }
            } else {
                fill_run(packing, p2, &mut out[start..end]);
            }
            pos += num_pixels;
            high_water = high_water.max(end);
        }
        warn!("RLE warning, no end of bitmap code");

        Ok(high_water)
    }
}

/// Decode a run length encoded region of `stream` into `out`
///
/// This is a shorthand for creating a [`RleDecoder`] with `options`
/// and calling [`decode_into`](RleDecoder::decode_into) on it.
///
/// # Returns
/// - `Ok(usize)`: Number of bytes written to `out`
/// - `Err(RleDecodeErrors::BufferOverflow)`: A run would not fit into `out`
/// - `Err(RleDecodeErrors::MalformedInput)`: The region ends in the middle of a token
pub fn decode_rle<T: ByteStreamTrait>(
    stream: T, options: &RleOptions, out: &mut [u8]
) -> Result<usize, RleDecodeErrors> {
    RleDecoder::new_with_options(stream, *options).decode_into(out)
}
