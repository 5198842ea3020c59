// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamresize::{seamcarve, RasterImage};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::process;

use clap::{App, Arg, ArgMatches, ErrorKind};
use log::info;

const DIMENSION_RULE: &str = "WIDTH and HEIGHT must be less than or equal to original";

// Bad arguments exit with EXIT_USAGE; unreadable or unwritable files
// and broken images with EXIT_FAILURE.
const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

enum Failure {
    Usage,
    Fatal(String),
}

// A dimension must be a positive integer no larger than the original.
fn dimension(matches: &ArgMatches, name: &str, original: u32) -> Option<u32> {
    match matches.value_of(name) {
        None => Some(original),
        Some(v) => v.parse::<u32>().ok().filter(|&d| d > 0 && d <= original),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Failure> {
    let infile = matches.value_of("IN_FILE").unwrap_or_default();
    let outfile = matches.value_of("OUT_FILE").unwrap_or_default();

    let rdr = fs::File::open(infile)
        .map(BufReader::new)
        .map_err(|e| Failure::Fatal(format!("Error opening file: {}: {}", infile, e)))?;
    let mut image = RasterImage::read(rdr)
        .map_err(|e| Failure::Fatal(format!("Error reading {}: {}", infile, e)))?;
    let (width, height) = (image.width(), image.height());

    let new_width = dimension(matches, "WIDTH", width).ok_or(Failure::Usage)?;
    let new_height = dimension(matches, "HEIGHT", height).ok_or(Failure::Usage)?;

    info!(
        "carving {} from {}x{} to {}x{}",
        infile, width, height, new_width, new_height
    );
    seamcarve(&mut image, new_width, new_height).map_err(|e| Failure::Fatal(e.to_string()))?;

    let wtr = fs::File::create(outfile)
        .map(BufWriter::new)
        .map_err(|e| Failure::Fatal(format!("Error opening file: {}: {}", outfile, e)))?;
    image
        .write(wtr)
        .map_err(|e| Failure::Fatal(format!("Error writing {}: {}", outfile, e)))?;
    info!("wrote {}", outfile);
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("resize")
        .version("0.1.0")
        .about("Shrink a plain-text PPM image by seam carving")
        .after_help(DIMENSION_RULE)
        .arg(
            Arg::with_name("IN_FILE")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUT_FILE")
                .help("Where to write the resized image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("WIDTH")
                .help("The new width")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("HEIGHT")
                .help("The new height; defaults to the original height")
                .index(4),
        )
        .get_matches_safe()
        .unwrap_or_else(|e| match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                eprintln!("{}", e.message);
                process::exit(EXIT_USAGE);
            }
        });

    match run(&matches) {
        Ok(()) => (),
        Err(Failure::Usage) => {
            eprintln!("{}\n{}", matches.usage(), DIMENSION_RULE);
            process::exit(EXIT_USAGE);
        }
        Err(Failure::Fatal(msg)) => {
            eprintln!("{}", msg);
            process::exit(EXIT_FAILURE);
        }
    }
}
