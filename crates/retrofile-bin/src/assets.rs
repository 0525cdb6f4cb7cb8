/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Assets compiled into the binary, opened with `--backend embedded`

use retrofile_core::bytestream::ResourceTable;
use retrofile_core::resource_table;

pub static ASSETS: ResourceTable<'static> = resource_table! {
    "tiles.rle" => include_bytes!("../assets/tiles.rle"),
    "sprite.rle" => include_bytes!("../assets/sprite.rle"),
    "title.rle" => include_bytes!("../assets/title.rle"),
    "title.txt" => include_bytes!("../assets/title.txt"),
};
