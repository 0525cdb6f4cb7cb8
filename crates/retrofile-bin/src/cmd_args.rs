/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use retrofile_rle::Packing;

/// Where resources are opened from
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BackendChoice {
    /// Files under a root directory
    File,
    /// Assets compiled into this binary
    Embedded
}

impl ValueEnum for BackendChoice {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::File, Self::Embedded]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::File => PossibleValue::new("file"),
            Self::Embedded => PossibleValue::new("embedded")
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PackingArg(pub Packing);

impl ValueEnum for PackingArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[PackingArg(Packing::EightBit), PackingArg(Packing::FourBit)]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self.0 {
            Packing::EightBit => PossibleValue::new("8").help("One pixel per value byte"),
            Packing::FourBit => PossibleValue::new("4").help("Two pixels per value byte")
        })
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("retrofile")
        .about("Decode run length encoded assets from files or from the assets embedded in this binary")
        .arg(Arg::new("in")
            .short('i')
            .help("Name of the resource to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required_unless_present("list"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write the decoded bytes to")
            .long_help("File to write the decoded bytes to.\nDefaults to the input name with its extension replaced by .raw")
            .action(ArgAction::Append))
        .arg(Arg::new("backend")
            .long("backend")
            .help_heading("SOURCE")
            .help("Where resources are opened from")
            .default_value("file")
            .value_parser(value_parser!(BackendChoice)))
        .arg(Arg::new("root")
            .long("root")
            .help_heading("SOURCE")
            .help("Directory file resources are resolved against")
            .default_value("."))
        .arg(Arg::new("list")
            .long("list")
            .help_heading("SOURCE")
            .action(ArgAction::SetTrue)
            .help("Print the names of the embedded resources and exit"))
        .arg(Arg::new("offset")
            .long("offset")
            .help_heading("DECODING")
            .help("Byte offset of the encoded region")
            .default_value("0")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("length")
            .long("length")
            .help_heading("DECODING")
            .help("Size of the encoded region in bytes, defaults to the rest of the resource")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("packing")
            .long("packing")
            .help_heading("DECODING")
            .help("Bits per decoded pixel in the input")
            .default_value("8")
            .value_parser(value_parser!(PackingArg)))
        .arg(Arg::new("capacity")
            .long("capacity")
            .help_heading("DECODING")
            .help("Size of the output buffer in bytes")
            .long_help("Size of the output buffer in bytes.\nPlain runs are sized from the input when this is absent, escaped runs default to 64 KiB")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("escapes")
            .long("escapes")
            .help_heading("DECODING")
            .action(ArgAction::SetTrue)
            .requires("width")
            .help("Treat zero counts as BMP style escape codes"))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("DECODING")
            .help("Pixels per row for escaped runs")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print resource metadata as JSON instead of writing output"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[cfg(test)]
mod tests {
    use retrofile_rle::Packing;

    use crate::cmd_args::{create_cmd_args, BackendChoice, PackingArg};

    #[test]
    fn defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["retrofile", "-i", "tiles.rle"])
            .unwrap();

        assert_eq!(
            *matches.get_one::<BackendChoice>("backend").unwrap(),
            BackendChoice::File
        );
        assert_eq!(
            *matches.get_one::<PackingArg>("packing").unwrap(),
            PackingArg(Packing::EightBit)
        );
        assert_eq!(*matches.get_one::<u64>("offset").unwrap(), 0);
        assert!(matches.get_one::<usize>("length").is_none());
    }

    #[test]
    fn escapes_require_width() {
        let result = create_cmd_args().try_get_matches_from(["retrofile", "-i", "a.rle", "--escapes"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_needs_no_input() {
        let matches = create_cmd_args()
            .try_get_matches_from(["retrofile", "--list", "--backend", "embedded"])
            .unwrap();
        assert!(matches.get_flag("list"));
    }
}
