//! Buffer cap and join styles, and their resolution to integer codes.
//!
//! Styles may be given as the enum itself, as a case-insensitive name such as `"round"`, or as
//! a raw integer code. All three forms resolve to the same code.

use std::fmt::Display;
use std::str::FromStr;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use phf::phf_map;
use serde::{Deserialize, Serialize};

use crate::error::{ConstructiveError, Result};

/// How the ends of open curves are capped when buffering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
#[serde(rename_all = "lowercase")]
pub enum BufferCapStyle {
    #[default]
    Round = 1,
    Flat = 2,
    Square = 3,
}

/// How convex corners are connected when buffering.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
#[serde(rename_all = "lowercase")]
pub enum BufferJoinStyle {
    #[default]
    Round = 1,
    Mitre = 2,
    Bevel = 3,
}

static CAP_STYLES: phf::Map<&'static str, BufferCapStyle> = phf_map! {
    "round" => BufferCapStyle::Round,
    "flat" => BufferCapStyle::Flat,
    "square" => BufferCapStyle::Square,
};

static JOIN_STYLES: phf::Map<&'static str, BufferJoinStyle> = phf_map! {
    "round" => BufferJoinStyle::Round,
    "mitre" => BufferJoinStyle::Mitre,
    "bevel" => BufferJoinStyle::Bevel,
};

/// A closed set of named buffer styles with integer codes.
pub trait BufferStyle: Copy + Into<i32> + FromStr<Err = ConstructiveError> {
    /// The parameter name reported in errors.
    const PARAMETER: &'static str;
}

impl BufferStyle for BufferCapStyle {
    const PARAMETER: &'static str = "cap_style";
}

impl BufferStyle for BufferJoinStyle {
    const PARAMETER: &'static str = "join_style";
}

fn lookup<S: Copy>(
    table: &phf::Map<&'static str, S>,
    parameter: &'static str,
    name: &str,
) -> Result<S> {
    table
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .ok_or_else(|| ConstructiveError::InvalidEnumValue {
            parameter,
            value: name.to_string(),
        })
}

impl FromStr for BufferCapStyle {
    type Err = ConstructiveError;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&CAP_STYLES, Self::PARAMETER, s)
    }
}

impl FromStr for BufferJoinStyle {
    type Err = ConstructiveError;

    fn from_str(s: &str) -> Result<Self> {
        lookup(&JOIN_STYLES, Self::PARAMETER, s)
    }
}

impl Display for BufferCapStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferCapStyle::Round => write!(f, "round"),
            BufferCapStyle::Flat => write!(f, "flat"),
            BufferCapStyle::Square => write!(f, "square"),
        }
    }
}

impl Display for BufferJoinStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferJoinStyle::Round => write!(f, "round"),
            BufferJoinStyle::Mitre => write!(f, "mitre"),
            BufferJoinStyle::Bevel => write!(f, "bevel"),
        }
    }
}

/// A single style value in any of its accepted forms.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue<S> {
    Style(S),
    Name(String),
    /// A raw code. It is passed to the kernel without validation.
    Code(i32),
}

impl<S: BufferStyle> StyleValue<S> {
    /// Resolve to the canonical integer code.
    pub fn resolve(&self) -> Result<i32> {
        match self {
            StyleValue::Style(style) => Ok((*style).into()),
            StyleValue::Name(name) => Ok(name.parse::<S>()?.into()),
            StyleValue::Code(code) => Ok(*code),
        }
    }
}

impl<S> From<&str> for StyleValue<S> {
    fn from(value: &str) -> Self {
        StyleValue::Name(value.to_string())
    }
}

impl<S> From<String> for StyleValue<S> {
    fn from(value: String) -> Self {
        StyleValue::Name(value)
    }
}

impl<S> From<i32> for StyleValue<S> {
    fn from(value: i32) -> Self {
        StyleValue::Code(value)
    }
}

/// A style parameter: one value, or (invalidly, for buffer) an array of values.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleParam<S> {
    Scalar(StyleValue<S>),
    Array(Vec<StyleValue<S>>),
}

impl<S: BufferStyle> StyleParam<S> {
    /// Resolve a scalar value to its code. Arrays are not inspected and yield `None`.
    pub(crate) fn resolve_scalar(&self) -> Result<Option<i32>> {
        match self {
            StyleParam::Scalar(value) => value.resolve().map(Some),
            StyleParam::Array(_) => Ok(None),
        }
    }
}

impl<S> From<StyleValue<S>> for StyleParam<S> {
    fn from(value: StyleValue<S>) -> Self {
        StyleParam::Scalar(value)
    }
}

impl<S> From<&str> for StyleParam<S> {
    fn from(value: &str) -> Self {
        StyleParam::Scalar(value.into())
    }
}

impl<S> From<String> for StyleParam<S> {
    fn from(value: String) -> Self {
        StyleParam::Scalar(value.into())
    }
}

impl<S> From<i32> for StyleParam<S> {
    fn from(value: i32) -> Self {
        StyleParam::Scalar(value.into())
    }
}

impl<S> From<Vec<StyleValue<S>>> for StyleParam<S> {
    fn from(value: Vec<StyleValue<S>>) -> Self {
        StyleParam::Array(value)
    }
}

impl<S> From<Vec<&str>> for StyleParam<S> {
    fn from(value: Vec<&str>) -> Self {
        StyleParam::Array(value.into_iter().map(StyleValue::from).collect())
    }
}

impl<S> From<Vec<i32>> for StyleParam<S> {
    fn from(value: Vec<i32>) -> Self {
        StyleParam::Array(value.into_iter().map(StyleValue::from).collect())
    }
}

/// Implementation that accepts the style enum itself
macro_rules! from_style_impl {
    ($type:ty) => {
        impl From<$type> for StyleValue<$type> {
            fn from(value: $type) -> Self {
                StyleValue::Style(value)
            }
        }

        impl From<$type> for StyleParam<$type> {
            fn from(value: $type) -> Self {
                StyleParam::Scalar(StyleValue::Style(value))
            }
        }
    };
}

from_style_impl!(BufferCapStyle);
from_style_impl!(BufferJoinStyle);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(i32::from(BufferCapStyle::Round), 1);
        assert_eq!(i32::from(BufferCapStyle::Flat), 2);
        assert_eq!(i32::from(BufferCapStyle::Square), 3);
        assert_eq!(i32::from(BufferJoinStyle::Round), 1);
        assert_eq!(i32::from(BufferJoinStyle::Mitre), 2);
        assert_eq!(i32::from(BufferJoinStyle::Bevel), 3);
        assert_eq!(BufferJoinStyle::try_from(3).unwrap(), BufferJoinStyle::Bevel);
        assert!(BufferCapStyle::try_from(4).is_err());
    }

    #[test]
    fn round_is_default_and_not_a_fallback() {
        assert_eq!(BufferCapStyle::default(), BufferCapStyle::Round);
        assert_eq!(BufferJoinStyle::default(), BufferJoinStyle::Round);
        // the default variant does not absorb unknown codes
        assert!(BufferCapStyle::try_from(0).is_err());
        assert!(BufferJoinStyle::try_from(9).is_err());
    }

    #[test]
    fn case_insensitive() {
        for name in ["ROUND", "round", "Round", "rOuNd"] {
            assert_eq!(name.parse::<BufferCapStyle>().unwrap(), BufferCapStyle::Round);
        }
        assert_eq!("MITRE".parse::<BufferJoinStyle>().unwrap(), BufferJoinStyle::Mitre);
    }

    #[test]
    fn unknown_name() {
        let err = "hexagon".parse::<BufferCapStyle>().unwrap_err();
        assert!(matches!(
            err,
            ConstructiveError::InvalidEnumValue { parameter: "cap_style", ref value } if value == "hexagon"
        ));
        // names are not shared between the two sets
        assert!("mitre".parse::<BufferCapStyle>().is_err());
        assert!("flat".parse::<BufferJoinStyle>().is_err());
    }

    #[test]
    fn forms_resolve_identically() {
        let forms: Vec<StyleValue<BufferCapStyle>> = vec![
            BufferCapStyle::Flat.into(),
            "flat".into(),
            "FLAT".into(),
            2i32.into(),
        ];
        for form in forms {
            assert_eq!(form.resolve().unwrap(), 2);
        }
    }

    #[test]
    fn raw_codes_pass_through() {
        let value: StyleValue<BufferJoinStyle> = 42i32.into();
        assert_eq!(value.resolve().unwrap(), 42);
    }

    #[test]
    fn arrays_are_not_inspected() {
        let param: StyleParam<BufferCapStyle> = vec!["hexagon"].into();
        assert_eq!(param.resolve_scalar().unwrap(), None);
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&BufferJoinStyle::Mitre).unwrap(),
            "\"mitre\""
        );
        let style: BufferCapStyle = serde_json::from_str("\"square\"").unwrap();
        assert_eq!(style, BufferCapStyle::Square);
        assert_eq!(style.to_string(), "square");
    }
}
