/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use retrofile_core::bytestream::{FileBackend, MemoryBlobStream, OpenMode, StreamBackend};
use retrofile_rle::RleDecoder;

use crate::{assets_path, read_manifest};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_rle() {
    let paths = read_manifest();
    let backend = FileBackend::new(assets_path());

    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let stream = backend.open(&path.name, OpenMode::Read).unwrap();
        let mut decoder = RleDecoder::new_with_options(stream, path.options());

        let pixels = decoder.decode(path.capacity()).unwrap();

        if pixels.len() != path.expected_len || !pixels.starts_with(&path.expected_head) {
            error = true;
            files.push(path.to_owned());
            // report error
            let err = format!(
                "Output mismatch for file {:?}\nExpected {} bytes starting with {:?} but found {:?}\nConfig:{:#?}",
                path.name, path.expected_len, path.expected_head, pixels, path
            );
            eprintln!("{}\n", err);
        }
    }
    if error {
        panic!("Errors found during test decoding\n {:#?}", files);
    }
}

#[test]
fn truncated_assets_are_malformed() {
    use retrofile_core::bytestream::ErrorKind;

    for path in read_manifest() {
        let contents = read(assets_path().join(&path.name)).unwrap();
        // a dangling count byte, whatever the mode
        let mut truncated = contents.clone();
        truncated.push(0x04);

        let mut out = vec![0; path.capacity()];
        let result = RleDecoder::new_with_options(MemoryBlobStream::new(&truncated), path.options())
            .decode_into(&mut out);

        if path.escapes {
            // the end of bitmap code stops decoding before the dangling byte
            assert_eq!(result.unwrap(), path.expected_len, "{}", path.name);
        } else {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::MalformedInput, "{}", path.name);
        }
    }
}
