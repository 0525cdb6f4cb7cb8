/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::options::Packing;

/// Fill `out` with a single run of `value`
///
/// For four bit packing the high nibble comes first and nibbles alternate,
/// so an odd sized run ends on a high nibble.
pub(crate) fn fill_run(packing: Packing, value: u8, out: &mut [u8]) {
    match packing {
        Packing::EightBit => out.fill(value),
        Packing::FourBit => {
            let (high, low) = (value >> 4, value & 0x0f);
            let mut out_iter = out.chunks_exact_mut(2);

            (&mut out_iter).for_each(|out_vals| {
                out_vals[0] = high;
                out_vals[1] = low;
            });

            if let [last] = out_iter.into_remainder() {
                *last = high;
            }
        }
    }
}

/// Expand packed nibbles from `input` into one byte per nibble in `out`
///
/// Stops when either `input` or `out` runs out, whichever comes first.
pub(crate) fn expand_nibbles(input: &[u8], out: &mut [u8]) {
    let mut in_iter = input.iter();
    let mut out_iter = out.chunks_exact_mut(2);

    // The ordering of the iterators is important:
    // `out_iter` must come before `in_iter` so that `in_iter` is not advanced
    // when `out_iter` is less than 2 bytes long
    (&mut out_iter)
        .zip(&mut in_iter)
        .for_each(|(out_vals, in_val)| {
            out_vals[0] = (in_val >> 4) & 0x0f;
            out_vals[1] = in_val & 0x0f;
        });

    // handle the remainder at the end where the output is a single byte long
    if let Some(in_val) = in_iter.next() {
        if let [last] = out_iter.into_remainder() {
            *last = (in_val >> 4) & 0x0f;
        }
    }
}
