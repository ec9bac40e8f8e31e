//! Pluggable post-decode processing.

use imgref::ImgVec;
use rgb::RGBA8;

use crate::Resize;

/// A decoded image as handed between decoder, processor and caller.
pub type Bitmap = ImgVec<RGBA8>;

/// Transforms a decoded bitmap, typically cropping or scaling it to a [`Resize`] target.
///
/// Implementations are shared between option sets through `Arc` and must not
/// change behaviour after construction.
pub trait ImageProcessor: Send + Sync {
    /// Stable identifier of this processor and its parameters.
    ///
    /// Two processors with the same key must produce the same output for the
    /// same input, since the key is part of [`LoadOptions::cache_key`](crate::LoadOptions::cache_key).
    fn key(&self) -> &str;

    /// Produce the final bitmap. `resize` is `None` when the options carry no target.
    fn process(&self, bitmap: Bitmap, resize: Option<Resize>) -> Bitmap;
}
