//! Data structures for command-line arguments.

use std::path::PathBuf;

use thiserror::Error;

use crate::output::Target;


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// Name of the image macro to fill.
    ///
    /// If absent, the user will be asked to pick one.
    pub macro_name: Option<String>,
    /// Texts for the macro's boxes.
    ///
    /// If empty, the user will be prompted for every one of them.
    pub texts: Vec<String>,

    /// JSON file with the macro definitions.
    pub macros_file: PathBuf,
    /// Directory to load template images from.
    pub template_directory: PathBuf,
    /// Directory to load fonts from.
    pub font_directory: PathBuf,

    /// Where to write the finished image.
    ///
    /// If absent, a timestamped file in the default output directory is used.
    pub output: Option<Target>,

    /// Whether to only list the available macros.
    pub list: bool,
    /// Whether to draw the debug outlines of text boxes.
    pub debug: bool,
    /// Whether text that cannot fit its box is an error.
    pub strict: bool,
    pub jpeg_quality: Option<u8>,
}

#[allow(dead_code)]
impl Options {
    #[inline]
    pub fn verbose(&self) -> bool { self.verbosity > 0 }
    #[inline]
    pub fn quiet(&self) -> bool { self.verbosity < 0 }
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// General error when parsing the arguments.
    #[error("invalid arguments: {0}")]
    Parse(#[from] clap::Error),
}
