/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use libfuzzer_sys::fuzz_target;
use retrofile_core::bytestream::MemoryBlobStream;
use retrofile_rle::{Packing, RleDecoder, RleOptions};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // first byte picks the mode, the rest is the encoded stream
    let options = RleOptions::default()
        .set_offset(1)
        .set_packing(if data[0] & 1 == 0 { Packing::EightBit } else { Packing::FourBit })
        .set_escapes(data[0] & 2 != 0)
        .set_line_width(usize::from(data[0] >> 2) + 1);

    let mut out = [0_u8; 512];
    let mut decoder = RleDecoder::new_with_options(MemoryBlobStream::new(data), options);
    let _ = decoder.decode_into(&mut out);
});
