/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use log::info;
use retrofile_core::bytestream::{ByteStreamTrait, FileStream, StreamError};
use retrofile_core::path::asset_path;

/// Name decoded output is written to when `-o` is absent
///
/// This is the resource name with its extension swapped for `.raw`
pub fn default_output_name(resource: &str) -> PathBuf {
    let mut name = asset_path(resource, true);
    name.push_str(".raw");
    PathBuf::from(name)
}

/// Write `data` to a fresh file at `path`
pub fn write_output(path: &Path, data: &[u8]) -> Result<(), StreamError> {
    let mut stream = FileStream::open_write(path)?;
    stream.write_block(data)?;
    stream.close()?;

    info!("Wrote {} bytes to {:?}", data.len(), path);
    Ok(())
}
