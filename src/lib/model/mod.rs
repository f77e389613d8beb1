//! Module defining the data model of image macros.

mod constants;
mod de;
mod types;


pub use self::constants::*;
pub use self::de::ColorParseError;
pub use self::types::*;
