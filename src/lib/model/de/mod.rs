//! Deserializers for data model types.

mod color;
mod geometry;

#[cfg(test)]
mod tests;


pub use self::color::ColorParseError;
