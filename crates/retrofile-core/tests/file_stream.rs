/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "std")]

use std::fs;

use retrofile_core::bytestream::{
    ByteStreamTrait, ErrorKind, FileBackend, FileStream, OpenMode, SeekFrom, StreamBackend,
    StreamKind
};
use retrofile_core::stream_printf;

const DATA: [u8; 8] = [0xff, 0xee, 0x33, 0x77, 0x12, 0x34, 0x56, 0x78];

fn backend_with(name: &str, contents: &[u8]) -> (tempfile::TempDir, FileBackend) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(name), contents).unwrap();
    let backend = FileBackend::new(dir.path());
    (dir, backend)
}

#[test]
fn open_and_read_file() {
    let (_dir, backend) = backend_with("tiles.rle", &DATA);
    let mut stream = backend.open("tiles.rle", OpenMode::Read).unwrap();

    assert_eq!(stream.kind(), StreamKind::File);
    assert_eq!(stream.length().unwrap(), 8);

    let mut buf = [0; 5];
    assert_eq!(stream.read_block(&mut buf).unwrap(), 5);
    assert_eq!(buf, DATA[..5]);
    // short read at the end
    assert_eq!(stream.read_block(&mut buf).unwrap(), 3);
    assert_eq!(&buf[..3], &DATA[5..]);
    assert_eq!(
        stream.read_block(&mut buf).unwrap_err().kind(),
        ErrorKind::EndOfStream
    );
}

#[test]
fn missing_file_is_not_found() {
    let (_dir, backend) = backend_with("tiles.rle", &DATA);
    let err = backend.open("font.rle", OpenMode::Read).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn seek_is_bounded() {
    let (_dir, backend) = backend_with("tiles.rle", &DATA);
    let mut stream = backend.open("tiles.rle", OpenMode::Read).unwrap();

    assert_eq!(stream.seek(SeekFrom::End(-2)).unwrap(), 6);
    assert_eq!(stream.read_byte().unwrap(), 0x56);

    let err = stream.seek(SeekFrom::Current(10)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(stream.cursor().unwrap(), 7);
    assert_eq!(stream.read_byte().unwrap(), 0x78);
}

#[test]
fn read_only_file_rejects_writes() {
    let (dir, backend) = backend_with("tiles.rle", &DATA);
    let mut stream = backend.open("tiles.rle", OpenMode::Read).unwrap();

    let err = stream.write_block(&[1, 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReadOnlyViolation);
    let err = stream_printf!(stream, "{}", 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ReadOnlyViolation);

    stream.close().unwrap();
    assert_eq!(fs::read(dir.path().join("tiles.rle")).unwrap(), DATA);
}

#[test]
fn writes_insert_at_cursor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut stream = FileStream::open_write(&path).unwrap();
    stream.write_block(b"width=32\n").unwrap();
    stream_printf!(stream, "height={}\n", 16).unwrap();

    stream.seek(SeekFrom::Start(0)).unwrap();
    stream.write_block(b"# header\n").unwrap();
    assert_eq!(stream.cursor().unwrap(), 9);

    let mut line = [0; 32];
    assert_eq!(stream.read_line(&mut line).unwrap(), 8);
    assert_eq!(&line[..9], b"width=32\0");

    stream.close().unwrap();
    assert_eq!(
        fs::read(&path).unwrap(),
        b"# header\nwidth=32\nheight=16\n".to_vec()
    );
}

#[test]
fn closed_file_rejects_everything() {
    let (_dir, backend) = backend_with("tiles.rle", &DATA);
    let mut stream = backend.open("tiles.rle", OpenMode::Read).unwrap();
    stream.close().unwrap();

    assert!(stream.is_closed());
    assert_eq!(stream.read_byte().unwrap_err().kind(), ErrorKind::Closed);
    assert_eq!(stream.cursor().unwrap_err().kind(), ErrorKind::Closed);
    assert_eq!(stream.close().unwrap_err().kind(), ErrorKind::Closed);
}
