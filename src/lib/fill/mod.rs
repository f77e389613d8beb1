//! Module implementing the filling of image macros with text.

mod engine;
mod error;
mod output;
mod task;


pub use self::engine::{Builder as EngineBuilder,
                       BuildError as EngineBuildError,
                       Config as EngineConfig,
                       DEFAULT_JPEG_QUALITY,
                       Engine};
pub use self::error::FillError;
pub use self::output::FillOutput;
