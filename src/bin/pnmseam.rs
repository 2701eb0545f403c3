// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pnmseam::{processed_path, save_energy_map, Graymap, SeamCarver};
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{crate_version, value_t, App, Arg, ArgMatches};
use tracing::info;
use tracing_subscriber::EnvFilter;

// -v overrides RUST_LOG; otherwise RUST_LOG wins, falling back to
// warnings, or to info when seams are to be logged.
fn init_logging(verbosity: u64, seams: bool) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(if seams { "info" } else { "warn" })),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let input = PathBuf::from(matches.value_of_os("pnmfile").unwrap_or_default());
    let vertical = value_t!(matches, "vertical", u32).unwrap_or_else(|e| e.exit());
    let horizontal = value_t!(matches, "horizontal", u32).unwrap_or_else(|e| e.exit());
    let log_seams = matches.is_present("seams");

    let graymap = Graymap::open(&input)?;
    let (width, height) = graymap.pixels().dimensions();
    info!(path = %input.display(), width, height, max = graymap.max_value(), "loaded");

    if let Some(energy_path) = matches.value_of_os("energy-map") {
        save_energy_map(graymap.pixels(), energy_path)?;
    }

    let carved = SeamCarver::new(graymap.pixels()).carve_with(vertical, horizontal, |seam| {
        if log_seams {
            info!(
                orientation = %seam.orientation(),
                cost = seam.cost(),
                "seam {:?}",
                seam.coordinates().collect::<Vec<_>>()
            );
        }
    })?;
    let carved = graymap.with_pixels(carved)?;

    match matches.value_of_os("output") {
        Some(out) if out == OsStr::new("-") => carved.write(io::stdout().lock())?,
        Some(out) => {
            carved.save(out)?;
            info!(path = %PathBuf::from(out).display(), "wrote carved image");
        }
        None => {
            let out = processed_path(&input);
            carved.save(&out)?;
            info!(path = %out.display(), "wrote carved image");
        }
    }
    Ok(())
}

fn main() {
    let matches = App::new("pnmseam")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving for plain-text portable graymaps")
        .arg(
            Arg::with_name("pnmfile")
                .help("The P2 graymap to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("vertical")
                .help("How many top-to-bottom seams to remove (narrows the image)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("horizontal")
                .help("How many left-to-right seams to remove (shortens the image)")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; '-' for stdout [default: <pnmfile>_processed]")
                .short("o")
                .long("output")
                .value_name("PATH")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy-map")
                .help("Also write the input's energy map as an image, e.g. energy.png")
                .long("energy-map")
                .value_name("PATH")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seams")
                .help("Log the coordinates of every seam removed")
                .long("seams"),
        )
        .arg(
            Arg::with_name("verbose")
                .help("More logging; repeat for more")
                .short("v")
                .multiple(true),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"), matches.is_present("seams"));

    if let Err(err) = run(&matches) {
        eprintln!("pnmseam: {}", err);
        process::exit(1);
    }
}
