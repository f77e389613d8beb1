//! Top-level application error.

use std::io;
use std::path::PathBuf;

use exitcode::ExitCode;
use macrofill::{EngineBuildError, FillError, FontError, TemplateError};
use thiserror::Error;


/// Error that ends the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot read macro definitions from {}: {}", .0.display(), .1)]
    MacrosFile(PathBuf, #[source] io::Error),
    #[error("invalid macro definitions in {}: {}", .0.display(), .1)]
    MacrosJson(PathBuf, #[source] serde_json::Error),
    #[error("no image macros defined in {}", .0.display())]
    NoMacros(PathBuf),
    #[error("unknown image macro `{0}`")]
    UnknownMacro(String),
    #[error("cannot read input: {0}")]
    Input(#[source] io::Error),
    #[error("invalid configuration: {0}")]
    Engine(#[from] EngineBuildError),
    #[error("{0}")]
    Fill(#[from] FillError),
    #[error("cannot name the output file: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("cannot write the image to {0}: {1}")]
    Output(String, #[source] io::Error),
}

impl AppError {
    /// Exit code that the program should end with.
    pub fn exit_code(&self) -> ExitCode {
        match *self {
            AppError::MacrosFile(..) => exitcode::NOINPUT,
            AppError::MacrosJson(..) | AppError::NoMacros(_) => exitcode::DATAERR,
            AppError::UnknownMacro(_) | AppError::Engine(_) => exitcode::USAGE,
            AppError::Input(_) => exitcode::NOINPUT,
            AppError::Fill(ref e) => match *e {
                FillError::Template(_, TemplateError::File(_)) |
                FillError::Font(_, FontError::File(_)) => exitcode::NOINPUT,
                FillError::Encode(_) => exitcode::UNAVAILABLE,
                _ => exitcode::DATAERR,
            },
            AppError::Timestamp(_) => exitcode::SOFTWARE,
            AppError::Output(..) => exitcode::CANTCREAT,
        }
    }
}
