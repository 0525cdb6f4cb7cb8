/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info};
use retrofile_core::bytestream::{ByteStreamTrait, FileBackend, OpenMode, StreamBackend};
use retrofile_rle::{RleDecodeErrors, RleDecoder, RleOptions};

use crate::assets::ASSETS;
use crate::cmd_args::BackendChoice;
use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{default_output_name, write_output};
use crate::probe_files::probe_resource;

/// Output capacity for escaped streams when `--capacity` is absent
const DEFAULT_ESCAPED_CAPACITY: usize = 1 << 16;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), RleDecodeErrors> {
    if cmd_opts.list {
        list_embedded_resources();
        return Ok(());
    }
    let options = get_decoder_options(args);
    let capacity = args.get_one::<usize>("capacity").copied();

    info!("Creating workflows from input");

    match cmd_opts.backend {
        BackendChoice::File => {
            let backend = FileBackend::new(&cmd_opts.root);
            debug!("Opening resources under {:?}", backend.root());
            exec_with_backend(&backend, args, cmd_opts, &options, capacity)
        }
        BackendChoice::Embedded => {
            debug!("Opening resources from {} embedded assets", ASSETS.len());
            exec_with_backend(&ASSETS, args, cmd_opts, &options, capacity)
        }
    }
}

fn exec_with_backend<B: StreamBackend>(
    backend: &B, args: &ArgMatches, cmd_opts: &CmdOptions, options: &RleOptions,
    capacity: Option<usize>
) -> Result<(), RleDecodeErrors> {
    let inputs: Vec<&String> = args.get_many::<String>("in").into_iter().flatten().collect();
    let mut outputs = args.get_many::<String>("out").into_iter().flatten();

    for in_name in inputs {
        let out_file = outputs.next();

        if cmd_opts.probe {
            println!("{}", probe_resource(backend, in_name, options)?);
            continue;
        }
        let out_path = out_file.map_or_else(|| default_output_name(in_name), PathBuf::from);

        let pixels = decode_resource(backend, in_name, options, capacity)?;
        write_output(&out_path, &pixels)?;

        info!(
            "Decoded {} into {} bytes at {:?}",
            in_name,
            pixels.len(),
            out_path
        );
    }
    Ok(())
}

/// Open `name` on `backend` and decode it with `options`
///
/// Without an explicit `capacity` plain runs are sized from the input first
pub fn decode_resource<B: StreamBackend>(
    backend: &B, name: &str, options: &RleOptions, capacity: Option<usize>
) -> Result<Vec<u8>, RleDecodeErrors> {
    let mut stream = backend.open(name, OpenMode::Read)?;
    let mut decoder = RleDecoder::new_with_options(&mut stream, *options);

    let capacity = match capacity {
        Some(capacity) => capacity,
        None if options.get_escapes() => DEFAULT_ESCAPED_CAPACITY,
        None => decoder.output_buf_size()?
    };
    debug!("Decoding {} into {} bytes", name, capacity);

    let pixels = decoder.decode(capacity)?;
    stream.close()?;

    Ok(pixels)
}

fn list_embedded_resources() {
    for entry in ASSETS.iter() {
        println!("{}\t{}", entry.name(), entry.len());
    }
}
