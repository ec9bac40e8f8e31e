//! Per-request load options.
//!
//! [`LoadOptions`] carries everything the load pipeline needs to turn fetched
//! bytes into a final bitmap: the decode bound, an optional resize target and
//! processor, the animated-GIF policy, and the embedded [`DownloadOptions`].
//!
//! Options are mutable for their whole life. Setters return `&mut Self` so
//! they chain, and each setter touches only its own field:
//!
//! ```
//! use zenload::{DisplayMetrics, LoadOptions, RequestLevel};
//!
//! let metrics = DisplayMetrics::new(1080, 1920)?;
//! let mut options = LoadOptions::new(&metrics);
//! options
//!     .set_resize_dimensions(300, 300)?
//!     .set_decode_gif_image(false)
//!     .set_request_level(RequestLevel::Local);
//!
//! assert_eq!(options.max_size().map(|s| s.width()), Some(1620));
//! # Ok::<(), zenload::LoadError>(())
//! ```
//!
//! Options handed to a load that may run on another thread should be cloned
//! first; there is no internal locking.

use std::sync::Arc;
use core::fmt;

use crate::{
    DisplayMetrics, DownloadOptions, ImageProcessor, LoadError, MaxSize, RequestLevel, Resize,
};

/// Decode, resize and processing options for one image load.
///
/// `Clone` is a field-wise copy; the processor `Arc` is shared, sizes are `Copy`.
#[derive(Clone)]
pub struct LoadOptions {
    download: DownloadOptions,
    max_size: Option<MaxSize>,
    resize: Option<Resize>,
    image_processor: Option<Arc<dyn ImageProcessor>>,
    decode_gif_image: bool,
}

impl LoadOptions {
    /// Options for a device with the given display, bounding decodes to 1.5x the viewport.
    ///
    /// Everything else takes its default: no resize, no processor, GIFs
    /// decoded as animations, disk cache on, [`RequestLevel::Net`].
    pub fn new(metrics: &DisplayMetrics) -> Self {
        let max_size = metrics.default_max_size();
        log::debug!(
            "load options for {}x{} display: max size {}",
            metrics.width_pixels(),
            metrics.height_pixels(),
            max_size
        );
        Self {
            max_size: Some(max_size),
            ..Self::blank()
        }
    }

    /// An independent copy of `source`. Same as `source.clone()`.
    pub fn from_options(source: &LoadOptions) -> Self {
        let mut options = Self::blank();
        options.copy_of(source);
        options
    }

    fn blank() -> Self {
        Self {
            download: DownloadOptions::default(),
            max_size: None,
            resize: None,
            image_processor: None,
            decode_gif_image: true,
        }
    }

    /// Overwrite every field, including the download-level ones, with `source`'s values.
    pub fn copy_of(&mut self, source: &LoadOptions) -> &mut Self {
        self.max_size = source.max_size;
        self.resize = source.resize;
        self.image_processor = source.image_processor.clone();
        self.decode_gif_image = source.decode_gif_image;
        self.download.copy_of(&source.download);
        log::debug!("copied load options [{}]", self.cache_key());
        self
    }

    /// Decode bound used to pick a downsampling factor.
    pub fn max_size(&self) -> Option<MaxSize> {
        self.max_size
    }

    /// Replace the decode bound. `None` decodes at full resolution.
    pub fn set_max_size(&mut self, max_size: impl Into<Option<MaxSize>>) -> &mut Self {
        self.max_size = max_size.into();
        self
    }

    /// Replace the decode bound with a `width` x `height` size.
    ///
    /// Fails without touching the options if either dimension is zero.
    pub fn set_max_size_dimensions(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<&mut Self, LoadError> {
        let size = MaxSize::new(width, height)?;
        Ok(self.set_max_size(size))
    }

    /// Target the processor crops or scales to.
    pub fn resize(&self) -> Option<Resize> {
        self.resize
    }

    /// Replace the resize target. Ignored by the pipeline unless a processor is set.
    pub fn set_resize(&mut self, resize: impl Into<Option<Resize>>) -> &mut Self {
        self.resize = resize.into();
        self
    }

    /// Replace the resize target with a `width` x `height` size.
    ///
    /// Fails without touching the options if either dimension is zero.
    pub fn set_resize_dimensions(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<&mut Self, LoadError> {
        let size = Resize::new(width, height)?;
        Ok(self.set_resize(size))
    }

    pub fn image_processor(&self) -> Option<&Arc<dyn ImageProcessor>> {
        self.image_processor.as_ref()
    }

    /// Replace the processor. `None` means decoded bitmaps pass through untouched.
    pub fn set_image_processor(
        &mut self,
        processor: Option<Arc<dyn ImageProcessor>>,
    ) -> &mut Self {
        self.image_processor = processor;
        self
    }

    /// Whether animated GIFs are decoded as animations rather than their first frame.
    pub fn decode_gif_image(&self) -> bool {
        self.decode_gif_image
    }

    pub fn set_decode_gif_image(&mut self, decode_gif_image: bool) -> &mut Self {
        self.decode_gif_image = decode_gif_image;
        self
    }

    pub fn disk_cache_enabled(&self) -> bool {
        self.download.disk_cache_enabled()
    }

    pub fn set_enable_disk_cache(&mut self, enable: bool) -> &mut Self {
        self.download.set_enable_disk_cache(enable);
        self
    }

    pub fn request_level(&self) -> RequestLevel {
        self.download.request_level()
    }

    pub fn set_request_level(&mut self, level: RequestLevel) -> &mut Self {
        self.download.set_request_level(level);
        self
    }

    /// The embedded download-level options.
    pub fn download_options(&self) -> &DownloadOptions {
        &self.download
    }

    /// Key fragment for the fields that change the produced bitmap.
    ///
    /// Loads of the same source with equal keys yield equal bitmaps, so a
    /// memory cache can append this to the source URI. Disk cache and request
    /// level only decide where bytes come from and are left out.
    pub fn cache_key(&self) -> String {
        let mut key = String::new();
        if let Some(max_size) = self.max_size {
            key.push_str(&format!("max={max_size};"));
        }
        if let Some(resize) = self.resize {
            key.push_str(&format!("resize={resize};"));
        }
        if let Some(processor) = &self.image_processor {
            key.push_str("proc=");
            key.push_str(processor.key());
            key.push(';');
        }
        key.push_str(if self.decode_gif_image {
            "gif=anim"
        } else {
            "gif=still"
        });
        key
    }
}

impl PartialEq for LoadOptions {
    /// Field-wise; processors compare by identity.
    fn eq(&self, other: &Self) -> bool {
        let same_processor = match (&self.image_processor, &other.image_processor) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_processor
            && self.download == other.download
            && self.max_size == other.max_size
            && self.resize == other.resize
            && self.decode_gif_image == other.decode_gif_image
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("download", &self.download)
            .field("max_size", &self.max_size)
            .field("resize", &self.resize)
            .field(
                "image_processor",
                &self.image_processor.as_ref().map(|p| p.key()),
            )
            .field("decode_gif_image", &self.decode_gif_image)
            .finish()
    }
}
