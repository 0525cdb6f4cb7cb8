/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use retrofile_core::bytestream::StreamKind;
use retrofile_rle::RleOptions;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// What `--probe` prints for a resource
pub struct Metadata<'a> {
    name:         &'a str,
    kind:         StreamKind,
    length:       u64,
    options:      &'a RleOptions,
    decoded_size: Option<usize>
}

impl<'a> Metadata<'a> {
    pub fn new(
        name: &'a str, kind: StreamKind, length: u64, options: &'a RleOptions,
        decoded_size: Option<usize>
    ) -> Metadata<'a> {
        Metadata {
            name,
            kind,
            length,
            options,
            decoded_size
        }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 6)?;

        state.serialize_field("name", self.name)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("length", &self.length)?;
        state.serialize_field("offset", &self.options.get_offset())?;
        state.serialize_field(
            "bits_per_pixel",
            &self.options.get_packing().bits_per_pixel()
        )?;
        state.serialize_field("decoded_size", &self.decoded_size)?;

        state.end()
    }
}
