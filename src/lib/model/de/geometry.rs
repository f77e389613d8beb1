//! Deserializers for the Point and Dimensions types.
//!
//! Both are pairs of numbers that can be given either as a two-element array
//! or as a map with named coordinates.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Visitor};

use super::super::{Dimensions, Point};


const EXPECTING_LENGTH_MSG: &str = "2";


/// Type that is deserialized from a pair of numbers.
trait Pair: Sized {
    type Coord: for<'de> Deserialize<'de>;

    /// What the visitor expects, for error messages.
    const EXPECTING_MSG: &'static str;
    /// Canonical names of both coordinates.
    const FIELDS: &'static [&'static str];

    /// Index of the coordinate named by given map key, if any.
    fn field_index(key: &str) -> Option<usize>;

    fn from_pair(first: Self::Coord, second: Self::Coord) -> Self;
}

impl Pair for Point {
    type Coord = i32;
    const EXPECTING_MSG: &'static str = "array of [x, y] or map with `x` and `y`";
    const FIELDS: &'static [&'static str] = &["x", "y"];

    fn field_index(key: &str) -> Option<usize> {
        match key {
            "x" => Some(0),
            "y" => Some(1),
            _ => None,
        }
    }

    fn from_pair(x: i32, y: i32) -> Self {
        Point::new(x, y)
    }
}

impl Pair for Dimensions {
    type Coord = u32;
    const EXPECTING_MSG: &'static str =
        "array of [width, height] or map with `width` and `height`";
    const FIELDS: &'static [&'static str] = &["width", "height"];

    fn field_index(key: &str) -> Option<usize> {
        match key {
            "width" | "w" => Some(0),
            "height" | "h" => Some(1),
            _ => None,
        }
    }

    fn from_pair(width: u32, height: u32) -> Self {
        Dimensions::new(width, height)
    }
}


impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(PairVisitor::<Point>(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Dimensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(PairVisitor::<Dimensions>(PhantomData))
    }
}


struct PairVisitor<P>(PhantomData<P>);
impl<'de, P: Pair> Visitor<'de> for PairVisitor<P> {
    type Value = P;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", P::EXPECTING_MSG)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        if let Some(size) = seq.size_hint() {
            if size != 2 {
                return Err(de::Error::invalid_length(size, &EXPECTING_LENGTH_MSG));
            }
        }

        let first = seq.next_element::<P::Coord>()?
            .ok_or_else(|| de::Error::invalid_length(0, &EXPECTING_LENGTH_MSG))?;
        let second = seq.next_element::<P::Coord>()?
            .ok_or_else(|| de::Error::invalid_length(1, &EXPECTING_LENGTH_MSG))?;
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(3, &EXPECTING_LENGTH_MSG));
        }
        Ok(P::from_pair(first, second))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        let mut coords: [Option<P::Coord>; 2] = [None, None];
        while let Some(key) = map.next_key::<String>()? {
            let key = key.trim().to_lowercase();
            let index = P::field_index(&key)
                .ok_or_else(|| de::Error::unknown_field(&key, P::FIELDS))?;
            if coords[index].is_some() {
                return Err(de::Error::duplicate_field(P::FIELDS[index]));
            }
            coords[index] = Some(map.next_value()?);
        }

        let first = coords[0].take().ok_or_else(|| de::Error::missing_field(P::FIELDS[0]))?;
        let second = coords[1].take().ok_or_else(|| de::Error::missing_field(P::FIELDS[1]))?;
        Ok(P::from_pair(first, second))
    }
}
