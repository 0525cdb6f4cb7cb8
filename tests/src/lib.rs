/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use retrofile_rle::{Packing, RleOptions};
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod backends;
mod rle;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPacking {
    Eight,
    Four
}

impl JsonPacking {
    pub fn to_packing(self) -> Packing {
        match self {
            Self::Eight => Packing::EightBit,
            Self::Four => Packing::FourBit
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:          String,
    pub packing:       JsonPacking,
    #[serde(default)]
    pub escapes:       bool,
    #[serde(default)]
    pub width:         usize,
    pub capacity:      Option<usize>,
    pub expected_len:  usize,
    pub expected_head: Vec<u8>,
    pub comment:       Option<String>
}

impl TestEntry {
    pub fn options(&self) -> RleOptions {
        RleOptions::default()
            .set_packing(self.packing.to_packing())
            .set_escapes(self.escapes)
            .set_line_width(self.width)
    }
    pub fn capacity(&self) -> usize {
        self.capacity.unwrap_or(self.expected_len)
    }
}

/// Get the parent directory from which this
/// crate is compiled from
pub fn sample_path() -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"));
    // get parent path
    path.parent().unwrap().to_owned()
}

pub fn assets_path() -> PathBuf {
    sample_path().join("crates/retrofile-bin/assets")
}

pub fn read_manifest() -> Vec<TestEntry> {
    let file = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/rle.json");
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
