// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Plain-text portable graymaps
//!
//! Reads and writes the `P2` flavour of PGM: the magic number, the
//! width and height, the maximum gray value, and then `width *
//! height` intensities, all as whitespace-separated decimal text.  A
//! `#` starts a comment that runs to the end of the line.

use crate::error::{Result, SeamError};
use crate::twodmap::TwoDimensionalMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const MAGIC: &str = "P2";
const COMMENT: &str = "# carved by pnmseam";

fn bad_format(reason: &str) -> SeamError {
    SeamError::BadFormat {
        reason: reason.to_string(),
    }
}

/// A grayscale image and the maximum value its intensities may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graymap {
    max_value: u16,
    pixels: TwoDimensionalMap<u16>,
}

impl Graymap {
    /// Pair a map of intensities with its maximum, refusing any
    /// intensity above that maximum.
    pub fn new(pixels: TwoDimensionalMap<u16>, max_value: u16) -> Result<Self> {
        if max_value == 0 {
            return Err(bad_format("the maximum gray value must be at least 1"));
        }
        if let Some(&value) = pixels.as_slice().iter().find(|&&p| p > max_value) {
            return Err(SeamError::ValueOutOfRange {
                value: u64::from(value),
                max: u32::from(max_value),
            });
        }
        Ok(Graymap { max_value, pixels })
    }

    /// Replace the pixels, keeping the maximum.  Used to wrap a carved
    /// image back up for writing.
    pub fn with_pixels(&self, pixels: TwoDimensionalMap<u16>) -> Result<Self> {
        Graymap::new(pixels, self.max_value)
    }

    /// The maximum gray value.
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    /// The intensities.
    pub fn pixels(&self) -> &TwoDimensionalMap<u16> {
        &self.pixels
    }

    /// Surrender the intensities.
    pub fn into_pixels(self) -> TwoDimensionalMap<u16> {
        self.pixels
    }

    /// Parse the text of a plain PGM file.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = text
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .flat_map(str::split_whitespace);

        match tokens.next() {
            Some(MAGIC) => (),
            Some(other) => {
                return Err(SeamError::BadFormat {
                    reason: format!("expected {}, found {}", MAGIC, other),
                })
            }
            None => return Err(bad_format("the file is empty")),
        }

        let mut header = |field: &str| -> Result<u32> {
            let token = tokens.next().ok_or_else(|| SeamError::BadFormat {
                reason: format!("missing {}", field),
            })?;
            token.parse().map_err(|_| SeamError::BadFormat {
                reason: format!("{} {:?} is not a number", field, token),
            })
        };
        let width = header("width")?;
        let height = header("height")?;
        let max_value = header("maximum gray value")?;
        let max_value = match max_value {
            1..=65535 => max_value as u16,
            _ => return Err(bad_format("the maximum gray value must be between 1 and 65535")),
        };

        // A run of digits too long for u64 is still a number, just one
        // that is certainly out of range.
        let values = tokens
            .map(|token| match token.parse::<u64>() {
                Ok(value) => Ok(value),
                Err(_) if token.bytes().all(|b| b.is_ascii_digit()) => Ok(u64::MAX),
                Err(_) => Err(SeamError::BadFormat {
                    reason: format!("intensity {:?} is not a number", token),
                }),
            })
            .collect::<Result<Vec<u64>>>()?;

        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| bad_format("the image dimensions are too large"))?;
        if values.len() != expected {
            return Err(SeamError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }

        let intensities = values
            .into_iter()
            .map(|value| match value {
                v if v <= u64::from(max_value) => Ok(v as u16),
                v => Err(SeamError::ValueOutOfRange {
                    value: v,
                    max: u32::from(max_value),
                }),
            })
            .collect::<Result<Vec<u16>>>()?;

        debug!(width, height, max_value, "read graymap");
        Ok(Graymap {
            max_value,
            pixels: TwoDimensionalMap::from_vec(width, height, intensities)?,
        })
    }

    /// Read a plain PGM from any reader.
    pub fn read<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Graymap::parse(&text)
    }

    /// Read a plain PGM file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Graymap::read(BufReader::new(File::open(path)?))
    }

    /// Write as a plain PGM: magic, a comment, dimensions, maximum,
    /// then one row of intensities per line.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let (width, height) = self.pixels.dimensions();
        writeln!(writer, "{}", MAGIC)?;
        writeln!(writer, "{}", COMMENT)?;
        writeln!(writer, "{} {}", width, height)?;
        writeln!(writer, "{}", self.max_value)?;
        write!(writer, "{}", self.pixels)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a plain PGM file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write(BufWriter::new(File::create(path)?))
    }
}

/// The default output path for an input: `_processed` goes in front
/// of the first `.` of the file name, or on the end if there isn't
/// one.  `images/cat.pgm` becomes `images/cat_processed.pgm`.
pub fn processed_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let processed = match name.find('.') {
        Some(dot) => format!("{}_processed{}", &name[..dot], &name[dot..]),
        None => format!("{}_processed", name),
    };
    path.with_file_name(processed)
}
