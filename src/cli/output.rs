//! Module handling the destination of finished images.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use macrofill::{format_for_path, ImageFormat};
use time::macros::format_description;
use time::OffsetDateTime;


/// Directory where the images go when no output is given.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "out";


/// Where to write the finished image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File(PathBuf),
}

impl Target {
    /// Interpret the --output flag value. Single dash means standard output.
    pub fn parse(s: &str) -> Self {
        match s {
            "-" => Target::Stdout,
            path => Target::File(PathBuf::from(path)),
        }
    }

    /// Timestamped file in the default output directory for given macro.
    pub fn default_for(macro_name: &str) -> Result<Self, time::error::Format> {
        default_path(DEFAULT_OUTPUT_DIRECTORY, macro_name, OffsetDateTime::now_utc())
            .map(Target::File)
    }

    /// Image format implied by the target, if any.
    pub fn format(&self) -> Option<ImageFormat> {
        match *self {
            Target::Stdout => None,
            Target::File(ref path) => format_for_path(path),
        }
    }

    /// Write image bytes to the target, creating missing directories on the way.
    pub fn write(&self, bytes: &[u8]) -> io::Result<()> {
        match *self {
            Target::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Target::File(ref path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    if !dir.exists() {
                        debug!("Creating output directory {}", dir.display());
                        fs::create_dir_all(dir)?;
                    }
                }
                fs::write(path, bytes)
            }
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Target::Stdout => write!(fmt, "standard output"),
            Target::File(ref path) => write!(fmt, "{}", path.display()),
        }
    }
}


/// Path of an output PNG file for the macro, stamped with given UTC time.
pub fn default_path<D: AsRef<Path>>(directory: D,
                                    macro_name: &str,
                                    at: OffsetDateTime) -> Result<PathBuf, time::error::Format> {
    let timestamp = at.to_offset(time::UtcOffset::UTC).format(format_description!(
        "[year][month][day][hour][minute][second][subsecond digits:6]"))?;
    Ok(directory.as_ref().join(format!("{}-{}.png", macro_name, timestamp)))
}
