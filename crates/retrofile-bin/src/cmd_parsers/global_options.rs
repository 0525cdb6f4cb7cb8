/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_args::BackendChoice;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub backend: BackendChoice,
    pub root:    PathBuf,
    pub probe:   bool,
    pub list:    bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            backend: BackendChoice::File,
            root:    PathBuf::from("."),
            probe:   false,
            list:    false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(backend) = options.get_one::<BackendChoice>("backend") {
        if options.value_source("backend") == Some(CommandLine) {
            info!("Setting backend to be {:?}", backend);
        }
        cmd_options.backend = *backend;
    }
    if let Some(root) = options.get_one::<String>("root") {
        cmd_options.root = PathBuf::from(root);
    }
    if options.get_flag("probe") {
        info!("Probing resources, no output will be written");
        cmd_options.probe = true;
    }
    cmd_options.list = options.get_flag("list");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
