//! Decode downsampling math.

use crate::MaxSize;

/// Smallest power-of-two factor that brings `width` x `height` within `max`.
///
/// Returns 1 when there is no bound or the source already fits; the factor
/// only ever shrinks the decode.
pub(crate) fn sample_size(width: u32, height: u32, max: Option<MaxSize>) -> u32 {
    let Some(max) = max else {
        return 1;
    };
    let mut sample = 1u32;
    while width / sample > max.width() || height / sample > max.height() {
        match sample.checked_mul(2) {
            Some(next) => sample = next,
            None => break,
        }
    }
    sample
}

/// Dimension after decoding with `sample`, never below one pixel.
pub(crate) fn sampled(dimension: u32, sample: u32) -> u32 {
    (dimension / sample).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn max(w: u32, h: u32) -> Option<MaxSize> {
        Some(MaxSize::new(w, h).unwrap())
    }

    #[test]
    fn no_bound_is_full_resolution() {
        assert_eq!(sample_size(8000, 6000, None), 1);
    }

    #[test]
    fn fitting_source_is_not_upscaled() {
        assert_eq!(sample_size(100, 100, max(1500, 3000)), 1);
        assert_eq!(sample_size(1500, 3000, max(1500, 3000)), 1);
    }

    #[test]
    fn halves_until_within_bound() {
        assert_eq!(sample_size(3000, 3000, max(1500, 3000)), 2);
        assert_eq!(sample_size(4000, 3000, max(1500, 3000)), 4);
        assert_eq!(sample_size(1000, 12004, max(1500, 3000)), 8);
    }

    #[test]
    fn huge_source_tiny_bound() {
        assert_eq!(sample_size(u32::MAX, u32::MAX, max(1, 1)), 1 << 31);
    }

    #[test]
    fn sampled_floor() {
        assert_eq!(sampled(4000, 4), 1000);
        assert_eq!(sampled(3, 4), 1);
    }

    proptest! {
        #[test]
        fn result_fits_and_is_minimal(
            w in 1u32..100_000, h in 1u32..100_000,
            mw in 1u32..5_000, mh in 1u32..5_000,
        ) {
            let s = sample_size(w, h, max(mw, mh));
            prop_assert!(s.is_power_of_two());
            prop_assert!(w / s <= mw && h / s <= mh);
            if s > 1 {
                let half = s / 2;
                prop_assert!(w / half > mw || h / half > mh);
            }
        }
    }
}
