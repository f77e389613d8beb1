//! Deserializer for the Color type.

use std::fmt;
use std::str::FromStr;

use css_color_parser::Color as CssColor;
use serde::de::{self, Deserialize, Visitor};
use thiserror::Error;

use super::super::Color;


const FIELDS: &[&str] = &["r", "g", "b", "a"];
const EXPECTING_MSG: &str = "CSS color string or array/map of RGB(A) values";
const EXPECTING_LENGTH_MSG: &str = "3 or 4";

/// Names that mean no color at all.
const NO_FILL_NAMES: &[&str] = &["none", "transparent"];
/// Hex prefixes accepted besides the CSS `#`.
const ALT_HEX_PREFIXES: &[&str] = &["0x", "$"];


impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: de::Deserializer<'de>
    {
        deserializer.deserialize_any(ColorVisitor)
    }
}

struct ColorVisitor;
impl<'de> Visitor<'de> for ColorVisitor {
    type Value = Color;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", EXPECTING_MSG)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let color = Color::from_str(v).map_err(|e| {
            warn!("Failed to parse color `{}`: {}", v, e);
            E::custom(e)
        })?;
        Ok(color)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where A: de::SeqAccess<'de>
    {
        // Preemptively check for length.
        if let Some(size) = seq.size_hint() {
            if size != 3 && size != 4 {
                return Err(de::Error::invalid_length(size, &EXPECTING_LENGTH_MSG));
            }
        }

        let mut channels = Vec::with_capacity(FIELDS.len());
        while let Some(elem) = seq.next_element::<u8>()? {
            channels.push(elem);

            // Immediately signal any length errors.
            if channels.len() > FIELDS.len() {
                return Err(de::Error::invalid_length(channels.len(), &EXPECTING_LENGTH_MSG));
            }
        }
        match channels[..] {
            [r, g, b] => Ok(Color::rgb(r, g, b)),
            [r, g, b, a] => Ok(Color(r, g, b, a)),
            _ => Err(de::Error::invalid_length(channels.len(), &EXPECTING_LENGTH_MSG)),
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where A: de::MapAccess<'de>
    {
        // Preemptively check for length.
        if let Some(size) = map.size_hint() {
            if size != 3 && size != 4 {
                return Err(de::Error::invalid_length(size, &EXPECTING_LENGTH_MSG));
            }
        }

        let (mut r, mut g, mut b, mut a) = (None, None, None, None);
        while let Some(key) = map.next_key::<String>()? {
            let key = key.trim().to_lowercase();
            let (slot, field) = match key.as_str() {
                "r" | "red" => (&mut r, "r"),
                "g" | "green" => (&mut g, "g"),
                "b" | "blue" => (&mut b, "b"),
                "a" | "alpha" => (&mut a, "a"),
                key => return Err(de::Error::unknown_field(key, FIELDS)),
            };
            if slot.is_some() {
                return Err(de::Error::duplicate_field(field));
            }
            *slot = Some(map.next_value::<u8>()?);
        }

        let r = r.ok_or_else(|| de::Error::missing_field("r"))?;
        let g = g.ok_or_else(|| de::Error::missing_field("g"))?;
        let b = b.ok_or_else(|| de::Error::missing_field("b"))?;
        Ok(Color(r, g, b, a.unwrap_or(0xff)))
    }
}


impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        let s = v.trim().to_lowercase();
        if NO_FILL_NAMES.contains(&s.as_str()) {
            return Ok(Color::none());
        }

        let css = css_hex(&s).ok_or_else(|| ColorParseError::HexLength(v.to_owned()))?;
        let parsed: CssColor = css.parse()
            .map_err(|_| ColorParseError::Css(v.to_owned()))?;
        let alpha = (parsed.a.max(0.0).min(1.0) * 255.0).round() as u8;
        Ok(Color(parsed.r, parsed.g, parsed.b, alpha))
    }
}

/// Rewrite the `0x` & `$` hex notations as CSS `#` ones.
/// Those only allow the full six digit form.
fn css_hex(s: &str) -> Option<String> {
    let digits = ALT_HEX_PREFIXES.iter().find_map(|p| s.strip_prefix(p));
    match digits {
        Some(d) if d.len() == 6 => Some(format!("#{}", d)),
        Some(_) => None,
        None => Some(s.to_owned()),
    }
}


/// Error that may occur while parsing a Color from a string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string is not a valid CSS color.
    #[error("invalid CSS color syntax: `{0}`")]
    Css(String),
    /// Hex color with a non-CSS prefix that isn't six digits long.
    #[error("hex color `{0}` must have exactly six digits")]
    HexLength(String),
}
