//! Device display metrics used to derive a default decode bound.

use core::num::NonZeroU32;

use crate::{LoadError, MaxSize};

/// Visible viewport size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayMetrics {
    width_pixels: NonZeroU32,
    height_pixels: NonZeroU32,
}

impl DisplayMetrics {
    /// Both dimensions must be non-zero.
    pub fn new(width_pixels: u32, height_pixels: u32) -> Result<Self, LoadError> {
        match (NonZeroU32::new(width_pixels), NonZeroU32::new(height_pixels)) {
            (Some(width_pixels), Some(height_pixels)) => Ok(Self {
                width_pixels,
                height_pixels,
            }),
            _ => Err(LoadError::invalid_dimension(
                "display",
                width_pixels,
                height_pixels,
            )),
        }
    }

    pub fn width_pixels(&self) -> u32 {
        self.width_pixels.get()
    }

    pub fn height_pixels(&self) -> u32 {
        self.height_pixels.get()
    }

    /// One and a half times the viewport, fractional pixels truncated.
    ///
    /// `n + n / 2` equals `floor(n * 1.5)` for every `u32`; saturates at `u32::MAX`.
    pub fn default_max_size(&self) -> MaxSize {
        MaxSize::from_nonzero(
            scale_one_and_half(self.width_pixels),
            scale_one_and_half(self.height_pixels),
        )
    }
}

fn scale_one_and_half(n: NonZeroU32) -> NonZeroU32 {
    n.saturating_add(n.get() / 2)
}
