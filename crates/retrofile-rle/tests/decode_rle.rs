/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use retrofile_core::bytestream::{
    ByteStreamTrait, ErrorKind, FileBackend, MemoryBlobStream, MemoryBufferStream, OpenMode,
    StreamBackend
};
use retrofile_rle::{decode_rle, Packing, RleDecodeErrors, RleDecoder, RleOptions};

fn decode_blob(data: &[u8], options: RleOptions, out: &mut [u8]) -> Result<usize, RleDecodeErrors> {
    decode_rle(MemoryBlobStream::new(data), &options, out)
}

#[test]
fn eight_bit_run() {
    let mut out = [0; 8];
    let written = decode_blob(&[0x05, 0xAB], RleOptions::default(), &mut out).unwrap();

    assert_eq!(written, 5);
    assert_eq!(&out[..5], &[0xAB; 5]);
    assert_eq!(&out[5..], &[0; 3]);
}

#[test]
fn four_bit_run_alternates_nibbles() {
    let options = RleOptions::default().set_packing(Packing::FourBit);
    let mut out = [0; 4];

    let written = decode_blob(&[0x04, 0x12], options, &mut out).unwrap();
    assert_eq!(written, 4);
    assert_eq!(out, [1, 2, 1, 2]);
}

#[test]
fn odd_four_bit_run_ends_on_high_nibble() {
    let options = RleOptions::default().set_packing(Packing::FourBit);
    let mut out = [0xFF; 4];

    let written = decode_blob(&[0x03, 0x12], options, &mut out).unwrap();
    assert_eq!(written, 3);
    assert_eq!(out, [1, 2, 1, 0xFF]);
}

#[test]
fn runs_concatenate() {
    let mut out = [0; 6];
    let written = decode_blob(&[0x02, 0x11, 0x03, 0x22, 0x01, 0x33], RleOptions::default(), &mut out)
        .unwrap();

    assert_eq!(written, 6);
    assert_eq!(out, [0x11, 0x11, 0x22, 0x22, 0x22, 0x33]);
}

#[test]
fn overflow_keeps_sentinel() {
    let mut out = [0; 5];
    out[4] = 0x5A;

    let err = decode_blob(&[0x05, 0xAB], RleOptions::default(), &mut out[..4]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferOverflow);
    assert_eq!(out[4], 0x5A);
}

#[test]
fn count_without_value_is_malformed() {
    let mut out = [0; 16];

    let err = decode_blob(&[0x05, 0xAB, 0x03], RleOptions::default(), &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    // the declared region ends on a count even though the stream goes on
    let options = RleOptions::new(0, 3);
    let err = decode_blob(&[0x05, 0xAB, 0x03, 0xCD], options, &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn zero_count_is_skipped() {
    let mut out = [0; 4];
    let written = decode_blob(&[0x00, 0xFF, 0x02, 0x11], RleOptions::default(), &mut out).unwrap();

    assert_eq!(written, 2);
    assert_eq!(&out[..2], &[0x11, 0x11]);
}

#[test]
fn region_starts_at_offset() {
    let data = [0xFF, 0xFF, 0x02, 0x33, 0x01, 0x44];
    let mut out = [0; 4];

    let written = decode_blob(&data, RleOptions::new(2, 2), &mut out).unwrap();
    assert_eq!(written, 2);
    assert_eq!(&out[..2], &[0x33, 0x33]);

    let err = decode_blob(&data, RleOptions::new(7, 2), &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn empty_region_writes_nothing() {
    let mut out = [0x77; 2];
    assert_eq!(decode_blob(&[], RleOptions::default(), &mut out).unwrap(), 0);
    assert_eq!(out, [0x77; 2]);
}

#[test]
fn decoder_borrows_the_stream() {
    let data = [0x02, 0x10, 0x02, 0x20];
    let mut stream = MemoryBlobStream::new(&data);
    let mut out = [0; 4];

    let written = decode_rle(&mut stream, &RleOptions::new(0, 2), &mut out).unwrap();
    assert_eq!(written, 2);
    // the stream is still ours, positioned after the region
    assert_eq!(stream.cursor().unwrap(), 2);
    assert_eq!(stream.read_byte().unwrap(), 0x02);
}

#[test]
fn decode_allocates_and_truncates() {
    let mut decoder = RleDecoder::new(MemoryBlobStream::new(&[0x03, 0x09, 0x01, 0x08]));

    assert_eq!(decoder.output_buf_size().unwrap(), 4);
    assert_eq!(decoder.decode(64).unwrap(), [9, 9, 9, 8]);

    let err = decoder.decode(2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferOverflow);
}

#[test]
fn backends_decode_identically() {
    let data = [0x04, 0x12, 0x00, 0x00, 0x03, 0xCD, 0x07, 0x5A];
    let options = RleOptions::default().set_packing(Packing::FourBit);

    let mut from_blob = [0; 32];
    let blob_len = decode_blob(&data, options, &mut from_blob).unwrap();

    let mut from_buffer = [0; 32];
    let buffer_len = decode_rle(
        MemoryBufferStream::new_read_only(data.to_vec()),
        &options,
        &mut from_buffer
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tiles.rle"), data).unwrap();
    let file = FileBackend::new(dir.path())
        .open("tiles.rle", OpenMode::Read)
        .unwrap();
    let mut from_file = [0; 32];
    let file_len = decode_rle(file, &options, &mut from_file).unwrap();

    assert_eq!(blob_len, 14);
    assert_eq!(blob_len, buffer_len);
    assert_eq!(blob_len, file_len);
    assert_eq!(from_blob, from_buffer);
    assert_eq!(from_blob, from_file);
}

#[test]
fn escaped_eight_bit_rows() {
    // run, end of line, absolute run of three with a pad byte, end of bitmap
    let data = [
        0x03, 0xAA, 0x00, 0x00, 0x00, 0x03, 0x01, 0x02, 0x03, 0x00, 0x00, 0x01,
    ];
    let options = RleOptions::default().set_escapes(true).set_line_width(4);
    let mut out = [0xEE; 8];

    let written = decode_blob(&data, options, &mut out).unwrap();
    assert_eq!(written, 7);
    assert_eq!(out, [0xAA, 0xAA, 0xAA, 0xEE, 0x01, 0x02, 0x03, 0xEE]);
}

#[test]
fn escaped_four_bit_delta_and_absolute() {
    let data = [
        // delta one right, one down
        0x00, 0x02, 0x01, 0x01, //
        // run of three
        0x03, 0x12, //
        // end of line then an absolute run of three pixels in two bytes
        0x00, 0x00, 0x00, 0x03, 0x45, 0x60, //
        // end of bitmap
        0x00, 0x01,
    ];
    let options = RleOptions::default()
        .set_escapes(true)
        .set_line_width(4)
        .set_packing(Packing::FourBit);
    let mut out = [0; 12];

    let written = decode_blob(&data, options, &mut out).unwrap();
    assert_eq!(written, 11);
    assert_eq!(out, [0, 0, 0, 0, 0, 1, 2, 1, 4, 5, 6, 0]);
}

#[test]
fn escaped_run_past_row_overflows() {
    let options = RleOptions::default().set_escapes(true).set_line_width(4);
    let mut out = [0; 16];

    let err = decode_blob(&[0x05, 0x11], options, &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferOverflow);
}

#[test]
fn escapes_need_a_line_width() {
    let options = RleOptions::default().set_escapes(true);
    let mut out = [0; 16];

    let err = decode_blob(&[0x02, 0x11], options, &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOptions);

    let err = RleDecoder::new_with_options(MemoryBlobStream::new(&[]), options)
        .output_buf_size()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidOptions);
}

#[test]
fn huge_line_width_does_not_wrap_the_output_position() {
    let data = [
        // end of line, then a delta of 10 pixels right
        0x00, 0x00, //
        0x00, 0x02, 0x0A, 0x00, //
        0x05, 0x11, //
        0x00, 0x01,
    ];
    let options = RleOptions::default()
        .set_escapes(true)
        .set_line_width(usize::MAX - 12);
    let mut out = [0; 16];

    let err = decode_blob(&data, options, &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferOverflow);
}

#[test]
fn deltas_past_the_output_overflow() {
    let data = [
        0x00, 0x02, 0xFF, 0xFF, //
        0x00, 0x02, 0xFF, 0xFF, //
        0x01, 0x11, //
        0x00, 0x01,
    ];
    let options = RleOptions::default()
        .set_escapes(true)
        .set_line_width(usize::MAX / 2);
    let mut out = [0; 16];

    let err = decode_blob(&data, options, &mut out).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferOverflow);
}
