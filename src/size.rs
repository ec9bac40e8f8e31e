//! Pixel sizes used by load options.
//!
//! [`MaxSize`] bounds decode resolution; [`Resize`] is the exact target a
//! processor crops or scales to. They are separate types so one cannot be
//! passed where the other is expected. Both reject zero dimensions at
//! construction, so a stored size is always positive.

use core::fmt;
use core::num::NonZeroU32;
use core::str::FromStr;

use crate::LoadError;

/// Upper bound on decoded dimensions, used to pick a downsampling factor.
///
/// Only ever shrinks the decode; a source smaller than the bound decodes at
/// full resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaxSize {
    width: u32,
    height: u32,
}

/// Exact post-decode target handed to an [`ImageProcessor`](crate::ImageProcessor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Resize {
    width: u32,
    height: u32,
}

fn check(what: &'static str, width: u32, height: u32) -> Result<(), LoadError> {
    if width == 0 || height == 0 {
        return Err(LoadError::invalid_dimension(what, width, height));
    }
    Ok(())
}

/// Split `"800x600"` into its two numbers.
fn parse_dimensions(s: &str) -> Result<(u32, u32), LoadError> {
    let s = s.trim();
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| LoadError::Parse(format!("expected WIDTHxHEIGHT, got {s:?}")))?;
    let width = w
        .trim()
        .parse()
        .map_err(|e| LoadError::Parse(format!("bad width {w:?}: {e}")))?;
    let height = h
        .trim()
        .parse()
        .map_err(|e| LoadError::Parse(format!("bad height {h:?}: {e}")))?;
    Ok((width, height))
}

macro_rules! size_impls {
    ($ty:ident, $what:literal) => {
        impl $ty {
            /// Create a size. Both dimensions must be non-zero.
            pub fn new(width: u32, height: u32) -> Result<Self, LoadError> {
                check($what, width, height)?;
                Ok(Self { width, height })
            }

            /// Width in pixels.
            pub fn width(&self) -> u32 {
                self.width
            }

            /// Height in pixels.
            pub fn height(&self) -> u32 {
                self.height
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}x{}", self.width, self.height)
            }
        }

        impl FromStr for $ty {
            type Err = LoadError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (width, height) = parse_dimensions(s)?;
                Self::new(width, height)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <RawSize as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw.width, raw.height).map_err(<D::Error as serde::de::Error>::custom)
            }
        }
    };
}

size_impls!(MaxSize, "max size");
size_impls!(Resize, "resize");

impl MaxSize {
    pub(crate) fn from_nonzero(width: NonZeroU32, height: NonZeroU32) -> Self {
        Self {
            width: width.get(),
            height: height.get(),
        }
    }
}

/// Unvalidated wire form, checked by `new` before it becomes a size.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSize {
    width: u32,
    height: u32,
}
