// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use dualseam::{PixelBuffer, SeamCarver};
use std::process;

extern crate clap;
extern crate image;

use clap::{value_t, App, Arg, ArgMatches};
use failure::Error;
use log::LevelFilter;

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

// A target dimension defaults to the current one, i.e. "leave this
// axis alone".
fn target(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    if matches.is_present(name) {
        Ok(value_t!(matches, name, u32)?)
    } else {
        Ok(current)
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    // Both are required by clap.
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?;
    let mut carver = SeamCarver::new(PixelBuffer::from_image(&image)?);
    let width = target(matches, "width", carver.width())?;
    let height = target(matches, "height", carver.height())?;

    carver.carve_to(width, height)?;
    carver.into_buffer().to_rgb_image().save(output)?;
    Ok(())
}

fn main() {
    let matches = App::new("dualseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .short("W")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .takes_value(true)
                .help("Target height in pixels (default: unchanged)"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more; repeat for more detail"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("dualseam: {}", err);
        process::exit(1);
    }
}
