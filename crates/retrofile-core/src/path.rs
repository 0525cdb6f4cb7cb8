/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Helpers for naming assets

use alloc::string::String;

/// The longest asset name, in bytes, that backends are expected to handle
pub const MAX_PATH_LEN: usize = 256;

/// Copy an asset name, bounded to [`MAX_PATH_LEN`] bytes
///
/// Names longer than the bound are cut on the last char boundary
/// that fits. If `trim_ext` is set, the last extension (the final `.`
/// and whatever follows it) is removed, a leading dot as in `.hidden` is
/// not treated as an extension.
///
/// ```
/// use retrofile_core::path::asset_path;
///
/// assert_eq!(asset_path("gfx/tiles.rle", true), "gfx/tiles");
/// assert_eq!(asset_path("gfx/tiles.rle", false), "gfx/tiles.rle");
/// ```
pub fn asset_path(src: &str, trim_ext: bool) -> String {
    let mut end = src.len().min(MAX_PATH_LEN);

    while !src.is_char_boundary(end) {
        end -= 1;
    }
    let mut name = &src[..end];

    if trim_ext {
        let file_start = name.rfind('/').map_or(0, |pos| pos + 1);

        if let Some(dot) = name[file_start..].rfind('.') {
            if dot > 0 {
                name = &name[..file_start + dot];
            }
        }
    }
    String::from(name)
}
