//! How a load reads its options: decode planning and post-decode processing.
//!
//! Fetching, caching and the decoder itself live outside this crate. They
//! consult a [`LoadPipeline`] at two points:
//!
//! 1. before decoding, [`LoadPipeline::plan`] turns the source header into a
//!    [`DecodePlan`] (downsampling factor and frame policy);
//! 2. after decoding, [`LoadPipeline::finish`] runs the configured
//!    [`ImageProcessor`](crate::ImageProcessor), or passes the bitmap through.
//!
//! ```
//! use zenload::pipeline::{FrameMode, LoadPipeline, SourceInfo};
//! use zenload::{DisplayMetrics, ImageFormat, LoadOptions};
//!
//! let options = LoadOptions::new(&DisplayMetrics::new(1000, 2000)?);
//! let plan = LoadPipeline::new(&options).plan(&SourceInfo::new(6000, 4000, Some(ImageFormat::Gif)))?;
//! assert_eq!(plan.sample_size, 4);
//! assert_eq!((plan.width, plan.height), (1500, 1000));
//! assert_eq!(plan.frames, FrameMode::Animated);
//! # Ok::<(), zenload::LoadError>(())
//! ```

mod sample;

use crate::{Bitmap, ImageFormat, LoadError, LoadOptions};

/// What the decoder knows about a source before decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    /// `None` when the format could not be identified.
    pub format: Option<ImageFormat>,
}

impl SourceInfo {
    pub fn new(width: u32, height: u32, format: Option<ImageFormat>) -> Self {
        Self {
            width,
            height,
            format,
        }
    }

    /// Source info with the format sniffed from the leading bytes of the data.
    pub fn from_header(header: &[u8], width: u32, height: u32) -> Self {
        Self::new(width, height, ImageFormat::detect(header))
    }
}

/// Which frames the decoder should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameMode {
    /// Decode every frame (animated GIF with GIF decoding enabled).
    Animated,
    /// Decode a single still bitmap.
    FirstFrame,
}

/// Decoder instructions derived from [`LoadOptions`] and a [`SourceInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct DecodePlan {
    /// Power-of-two downsampling factor; 1 decodes at full resolution.
    pub sample_size: u32,
    /// Expected decoded width (source width divided by `sample_size`, at least 1).
    pub width: u32,
    /// Expected decoded height.
    pub height: u32,
    pub frames: FrameMode,
}

/// Read-only view of [`LoadOptions`] used while a load is in flight.
#[derive(Clone, Copy, Debug)]
pub struct LoadPipeline<'a> {
    options: &'a LoadOptions,
}

impl<'a> LoadPipeline<'a> {
    pub fn new(options: &'a LoadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &'a LoadOptions {
        self.options
    }

    /// Plan the decode of `source`.
    ///
    /// The source is shrunk by the smallest power of two that fits it within
    /// the options' max size. GIF sources decode as animations only when
    /// [`LoadOptions::decode_gif_image`] is set; everything else decodes
    /// its first frame.
    pub fn plan(&self, source: &SourceInfo) -> Result<DecodePlan, LoadError> {
        if source.width == 0 || source.height == 0 {
            return Err(LoadError::invalid_dimension(
                "source",
                source.width,
                source.height,
            ));
        }

        let sample_size = sample::sample_size(source.width, source.height, self.options.max_size());
        let frames = match source.format {
            Some(ImageFormat::Gif) if self.options.decode_gif_image() => FrameMode::Animated,
            _ => FrameMode::FirstFrame,
        };
        let plan = DecodePlan {
            sample_size,
            width: sample::sampled(source.width, sample_size),
            height: sample::sampled(source.height, sample_size),
            frames,
        };
        log::debug!(
            "decode plan for {}x{} {:?}: sample {} -> {}x{}, {:?}",
            source.width,
            source.height,
            source.format,
            plan.sample_size,
            plan.width,
            plan.height,
            plan.frames
        );
        Ok(plan)
    }

    /// Apply the configured processor to a decoded bitmap.
    ///
    /// Without a processor the bitmap is returned unchanged, even when a
    /// resize target is set.
    pub fn finish(&self, bitmap: Bitmap) -> Bitmap {
        match self.options.image_processor() {
            Some(processor) => processor.process(bitmap, self.options.resize()),
            None => {
                log::trace!(
                    "no image processor, passing {}x{} bitmap through",
                    bitmap.width(),
                    bitmap.height()
                );
                bitmap
            }
        }
    }
}
