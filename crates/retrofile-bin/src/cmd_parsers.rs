/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use retrofile_rle::{Packing, RleOptions};

use crate::cmd_args::PackingArg;

pub mod global_options;

/// Build decoder options from the command line
pub fn get_decoder_options(options: &ArgMatches) -> RleOptions {
    let offset = options.get_one::<u64>("offset").copied().unwrap_or(0);
    let length = options.get_one::<usize>("length").copied();
    let packing = options
        .get_one::<PackingArg>("packing")
        .map_or(Packing::EightBit, |packing| packing.0);
    let width = options.get_one::<usize>("width").copied().unwrap_or(0);

    let mut decoder_options = RleOptions::default()
        .set_offset(offset)
        .set_packing(packing)
        .set_escapes(options.get_flag("escapes"))
        .set_line_width(width);

    if let Some(length) = length {
        decoder_options = decoder_options.set_input_len(length);
    }
    decoder_options
}
