/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::warn;
use retrofile_core::bytestream::{ByteStreamTrait, OpenMode, StreamBackend, StreamError};
use retrofile_rle::{RleDecoder, RleOptions};

use crate::serde::Metadata;

/// Probe a resource, extract metadata, and print it to standard output.
///
/// The decoded size is only reported for plain run streams,
/// a region that does not decode cleanly is reported without one.
pub fn probe_resource<B: StreamBackend>(
    backend: &B, name: &str, options: &RleOptions
) -> Result<String, StreamError> {
    let mut stream = backend.open(name, OpenMode::Read)?;
    let kind = stream.kind();
    let length = stream.length()?;

    let decoded_size = if options.get_escapes() {
        None
    } else {
        match RleDecoder::new_with_options(&mut stream, *options).output_buf_size() {
            Ok(size) => Some(size),
            Err(err) => {
                warn!("Could not size \"{}\": {:?}", name, err);
                None
            }
        }
    };
    stream.close()?;

    let metadata = Metadata::new(name, kind, length, options, decoded_size);

    serde_json::to_string_pretty(&metadata)
        .map_err(|err| StreamError::from(std::io::Error::other(err)))
}
