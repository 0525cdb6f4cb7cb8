/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Options controlling how a run length stream is decoded

/// How decoded pixels are packed in the value byte of a run
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Packing {
    /// Each run repeats the whole value byte
    #[default]
    EightBit,
    /// Each run alternates between the high and the low nibble
    /// of the value byte, writing one nibble per output byte
    FourBit
}

impl Packing {
    /// Number of bits a single pixel occupies in the input
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Packing::EightBit => 8,
            Packing::FourBit => 4
        }
    }
    /// Map a bit depth to a packing, `None` for unsupported depths
    pub const fn from_depth(depth: u8) -> Option<Packing> {
        match depth {
            8 => Some(Packing::EightBit),
            4 => Some(Packing::FourBit),
            _ => None
        }
    }
}

/// Decoder options
///
/// Options are built with the `set_` functions which consume
/// and return the options so that they can be chained
///
/// ```
/// use retrofile_rle::{Packing, RleOptions};
///
/// let options = RleOptions::new(16, 128).set_packing(Packing::FourBit);
/// assert_eq!(options.get_offset(), 16);
/// assert_eq!(options.get_input_len(), 128);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RleOptions {
    offset:     u64,
    input_len:  usize,
    packing:    Packing,
    escapes:    bool,
    line_width: usize
}

impl Default for RleOptions {
    /// Decode the whole stream from its start as 8 bit runs
    fn default() -> Self {
        RleOptions {
            offset:     0,
            input_len:  usize::MAX,
            packing:    Packing::EightBit,
            escapes:    false,
            line_width: 0
        }
    }
}

impl RleOptions {
    /// Decode `input_len` bytes of input starting at `offset`
    pub fn new(offset: u64, input_len: usize) -> RleOptions {
        RleOptions::default()
            .set_offset(offset)
            .set_input_len(input_len)
    }

    /// Where the encoded region starts in the stream
    pub const fn get_offset(&self) -> u64 {
        self.offset
    }
    /// Set the position of the first token in the stream
    pub fn set_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Size of the encoded region
    ///
    /// Default is `usize::MAX`, i.e. everything up to the end of the stream
    pub const fn get_input_len(&self) -> usize {
        self.input_len
    }
    /// Set how many input bytes make up the encoded region
    ///
    /// The region is clamped to the end of the stream
    pub fn set_input_len(mut self, input_len: usize) -> Self {
        self.input_len = input_len;
        self
    }

    pub const fn get_packing(&self) -> Packing {
        self.packing
    }
    pub fn set_packing(mut self, packing: Packing) -> Self {
        self.packing = packing;
        self
    }

    /// Whether a zero count introduces an escape code
    ///
    /// Default is false, in that case zero count tokens are skipped
    pub const fn get_escapes(&self) -> bool {
        self.escapes
    }
    /// Treat zero counts as escape codes
    ///
    /// This is the flavour of run length coding found in BMP
    /// files, where runs are laid out on rows of [`line_width`](Self::set_line_width)
    /// pixels and escapes mark row ends, skips and literal runs.
    pub fn set_escapes(mut self, yes: bool) -> Self {
        self.escapes = yes;
        self
    }

    /// Pixels per output row, only used with escapes
    pub const fn get_line_width(&self) -> usize {
        self.line_width
    }
    pub fn set_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }
}
