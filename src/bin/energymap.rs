// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamresize::{compute_energy, energy_to_image, RasterImage};
use std::fs;
use std::io;
use std::io::BufReader;
use std::process;

use clap::{App, Arg};
use failure::Error;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use log::info;

fn run(path: &str) -> Result<(), Error> {
    let rdr = BufReader::new(fs::File::open(path)?);
    let image = RasterImage::read(rdr)?;
    let energy = compute_energy(&image);
    info!("energy of {}: peak {}", path, energy.max());
    let newmap = energy_to_image(&energy);
    let (width, height) = newmap.dimensions();

    let stdout = io::stdout();
    PNMEncoder::new(stdout.lock())
        .with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary))
        .encode(
            newmap.into_raw().as_slice(),
            width,
            height,
            ColorType::Gray(8),
        )?;
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("energymap")
        .version("0.1.0")
        .about("Write the seam-carving energy of a plain-text PPM image as a PGM")
        .arg(
            Arg::with_name("pnmfile")
                .help("The image to analyse")
                .required(true)
                .index(1),
        )
        .get_matches();

    let path = matches.value_of("pnmfile").unwrap_or_default();
    if let Err(e) = run(path) {
        eprintln!("{}: {}", path, e);
        process::exit(1);
    }
}
