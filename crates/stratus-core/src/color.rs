//! Color handling for Stratus diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Colors are accepted in any CSS syntax and emitted as
//! hexadecimal strings, which every Graphviz output format understands.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{DynamicColor, Srgb};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as `#rrggbb`, or `#rrggbbaa` when it is not opaque.
    ///
    /// # Examples
    ///
    /// ```
    /// use stratus_core::color::Color;
    ///
    /// assert_eq!(Color::new("rgb(255, 128, 0)").unwrap().to_hex(), "#ff8000");
    /// assert_eq!(Color::new("rgba(255, 255, 255, 0)").unwrap().to_hex(), "#ffffff00");
    /// ```
    pub fn to_hex(self) -> String {
        let rgba = self.color.to_alpha_color::<Srgb>().to_rgba8();
        if rgba.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#7B8794").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_hex(), "#000000");
    }

    #[test]
    fn test_to_hex_normalizes_css_syntax() {
        assert_eq!(Color::new("#E5F5FD").unwrap().to_hex(), "#e5f5fd");
        assert_eq!(Color::new("red").unwrap().to_hex(), "#ff0000");
        assert_eq!(Color::new("rgb(0, 0, 255)").unwrap().to_hex(), "#0000ff");
    }

    #[test]
    fn test_to_hex_keeps_translucency() {
        let color = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
        let hex = color.to_hex();
        assert_eq!(hex.len(), 9);
        assert!(hex.starts_with("#ff0000"));
    }

    #[test]
    fn test_display_matches_hex() {
        let color = Color::new("orange").unwrap();
        assert_eq!(color.to_string(), color.to_hex());
    }

    #[test]
    fn test_eq_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Color::new("red").unwrap());
        assert!(set.contains(&Color::new("red").unwrap()));
        assert!(!set.contains(&Color::new("blue").unwrap()));
    }
}
