//!
//! macrofill  -- Text fitted onto image macro templates
//!

             extern crate css_color_parser;
             extern crate glob;
             extern crate image;
             extern crate itertools;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
             extern crate lru_cache;
#[macro_use] extern crate maplit;
             extern crate rusttype;
             extern crate serde;
#[macro_use] extern crate serde_derive;
             extern crate thiserror;
             extern crate unicode_normalization;


#[cfg(test)] #[macro_use] extern crate serde_json;
#[cfg(test)]              extern crate serde_test;
#[cfg(test)] #[macro_use] extern crate speculoos;


mod fill;
mod model;
mod resources;
mod style;
mod text;
mod util;


pub use crate::fill::*;
pub use crate::model::*;
pub use crate::resources::*;
pub use crate::style::*;
pub use crate::text::*;
pub use crate::util::cache::*;

/// Image formats of templates & output, as understood by the `image` crate.
pub use image::ImageFormat;
