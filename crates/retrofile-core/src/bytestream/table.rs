/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::ToString;

use crate::bytestream::{MemoryBlobStream, OpenMode, StreamBackend, StreamError};
use crate::log::{debug, error};

/// A single named asset embedded into the program
#[derive(Copy, Clone, Debug)]
pub struct ResourceEntry<'a> {
    name: &'a str,
    data: &'a [u8]
}

impl<'a> ResourceEntry<'a> {
    pub const fn new(name: &'a str, data: &'a [u8]) -> ResourceEntry<'a> {
        ResourceEntry { name, data }
    }
    pub const fn name(&self) -> &'a str {
        self.name
    }
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }
    /// Size of the asset in bytes
    pub const fn len(&self) -> usize {
        self.data.len()
    }
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An immutable, ordered table of named assets
///
/// This is a read-only virtual filesystem whose "files" are byte ranges
/// compiled into the binary, usually built with the [`resource_table`](crate::resource_table)
/// macro over `include_bytes!` data.
///
/// Lookups are a linear scan by exact name. Names must be unique within a
/// table, the caller building it is responsible for that. Debug builds
/// assert it when an entry is opened.
///
/// # Example
/// ```
/// use retrofile_core::bytestream::{ByteStreamTrait, OpenMode, ResourceTable, StreamBackend};
/// use retrofile_core::resource_table;
///
/// static ASSETS: ResourceTable<'static> = resource_table! {
///     "tiles.rle" => &[0x05, 0xAB],
///     "font.rle" => &[0x02, 0x11, 0x02, 0x22],
/// };
///
/// let stream = ASSETS.open("font.rle", OpenMode::Read).unwrap();
/// assert_eq!(stream.length().unwrap(), 4);
/// assert!(ASSETS.open("missing.rle", OpenMode::Read).is_err());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ResourceTable<'a> {
    entries: &'a [ResourceEntry<'a>]
}

impl<'a> ResourceTable<'a> {
    pub const fn new(entries: &'a [ResourceEntry<'a>]) -> ResourceTable<'a> {
        ResourceTable { entries }
    }

    /// Find the entry called `name`
    pub fn find(&self, name: &str) -> Option<&ResourceEntry<'a>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Bind the entry called `name` to a read-only stream
    ///
    /// ## Errors
    /// [`StreamError::NotFound`] if no entry is called `name`
    pub fn open_blob(&self, name: &str) -> Result<MemoryBlobStream<'a>, StreamError> {
        match self.entries.iter().position(|entry| entry.name == name) {
            Some(index) => {
                let entry = &self.entries[index];
                debug_assert!(
                    self.entries[index + 1..].iter().all(|other| other.name != name),
                    "resource table has more than one entry called \"{}\"",
                    name
                );
                debug!(
                    "found \"{}\" at table index {} ({} bytes)",
                    name,
                    index,
                    entry.len()
                );
                Ok(MemoryBlobStream::new(entry.data))
            }
            None => {
                error!("\"{}\" is not in the resource table", name);
                Err(StreamError::NotFound(name.to_string()))
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceEntry<'a>> {
        self.entries.iter()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> StreamBackend for ResourceTable<'a> {
    type Stream = MemoryBlobStream<'a>;

    fn open(&self, name: &str, mode: OpenMode) -> Result<Self::Stream, StreamError> {
        if mode.is_writable() {
            error!("cannot open \"{}\" for writing, embedded assets are read-only", name);
            return Err(StreamError::ReadOnly);
        }
        self.open_blob(name)
    }
}

/// Build a [`ResourceTable`] from `name => bytes` pairs
///
/// The result is a constant expression over `'static` data so it can
/// initialize a `static`
#[macro_export]
macro_rules! resource_table {
    ($($name:expr => $data:expr),* $(,)?) => {{
        const ENTRIES: &[$crate::bytestream::ResourceEntry<'static>] = &[
            $($crate::bytestream::ResourceEntry::new($name, $data)),*
        ];
        $crate::bytestream::ResourceTable::new(ENTRIES)
    }};
}
