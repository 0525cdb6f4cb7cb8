/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use retrofile_core::bytestream::{
    ByteStreamTrait, FileBackend, MemoryBufferStream, OpenMode, ResourceEntry, ResourceTable,
    StreamBackend
};
use retrofile_core::stream_printf;
use retrofile_rle::RleDecoder;

use crate::{assets_path, hash, read_manifest, TestEntry};

fn decode_hash<T: ByteStreamTrait>(stream: T, entry: &TestEntry) -> u128 {
    let pixels = RleDecoder::new_with_options(stream, entry.options())
        .decode(entry.capacity())
        .unwrap();
    hash(&pixels)
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn backends_decode_identically() {
    let manifest = read_manifest();
    let contents: Vec<Vec<u8>> = manifest
        .iter()
        .map(|entry| read(assets_path().join(&entry.name)).unwrap())
        .collect();

    let entries: Vec<ResourceEntry> = manifest
        .iter()
        .zip(&contents)
        .map(|(entry, data)| ResourceEntry::new(&entry.name, data))
        .collect();
    let table = ResourceTable::new(&entries);
    let files = FileBackend::new(assets_path());

    for (entry, data) in manifest.iter().zip(&contents) {
        let from_file = decode_hash(files.open(&entry.name, OpenMode::Read).unwrap(), entry);
        let from_table = decode_hash(table.open(&entry.name, OpenMode::Read).unwrap(), entry);
        let from_buffer = decode_hash(MemoryBufferStream::new_read_only(data.clone()), entry);

        assert_eq!(from_file, from_table, "file and table differ for {}", entry.name);
        assert_eq!(from_file, from_buffer, "file and buffer differ for {}", entry.name);
    }
}

#[test]
fn written_files_read_back_through_every_backend() {
    let dir = tempfile::tempdir().unwrap();
    let files = FileBackend::new(dir.path());

    let mut stream = files.open("notes.txt", OpenMode::Write).unwrap();
    stream_printf!(stream, "tiles={}\n", 16).unwrap();
    stream.write_block(b"sprite=16\n").unwrap();
    stream.close().unwrap();

    let on_disk = read(dir.path().join("notes.txt")).unwrap();

    let mut buffer = MemoryBufferStream::new(Vec::new());
    stream_printf!(buffer, "tiles={}\n", 16).unwrap();
    buffer.write_block(b"sprite=16\n").unwrap();

    assert_eq!(hash(&on_disk), hash(buffer.get_ref()));

    let mut reread = files.open("notes.txt", OpenMode::Read).unwrap();
    let mut line = [0; 16];
    assert_eq!(reread.read_line(&mut line).unwrap(), 8);
    assert_eq!(&line[..9], b"tiles=16\0");
}
