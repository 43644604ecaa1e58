//! Source-over compositing on 8-bit RGBA pixels
//!
//! Pixels hold straight (non-premultiplied) alpha. Coverage accumulates as
//! `out_a = a + dst_a * (1 - a)` and color as
//! `out = (src * a + dst * dst_a * (1 - a)) / out_a`, rounded to nearest.
//! Over an opaque destination this reduces to `src * a + dst * (1 - a)`.
//! The boundary factors are exact: `a = 0` leaves the destination untouched,
//! `a = 1` replaces it with the source at full coverage, and a fully
//! transparent destination takes the source color unchanged.

use crate::io::error::{MosaicError, Result};
use image::Rgba;

/// Default coverage of the per-cell color overlay
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.63;

/// Blend factor in `[0, 1]` used for the per-cell color overlay
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Overlay coverage used when none is configured
    pub const DEFAULT: Self = Self(DEFAULT_OVERLAY_OPACITY);
    /// Fully transparent overlay
    pub const TRANSPARENT: Self = Self(0.0);
    /// Fully opaque overlay
    pub const OPAQUE: Self = Self(1.0);

    /// Create an opacity from a fraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidOpacity` if `value` is NaN or outside `[0, 1]`
    pub fn new(value: f32) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(MosaicError::InvalidOpacity { value })
        }
    }

    /// Opacity equivalent to an 8-bit alpha value
    pub fn from_alpha(alpha: u8) -> Self {
        Self(f32::from(alpha) / 255.0)
    }

    /// Fraction in `[0, 1]`
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Nearest 8-bit alpha value
    pub fn as_alpha(self) -> u8 {
        (self.0 * 255.0).round() as u8
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Composite `src` over `dst`
///
/// The blend factor is the source pixel's own alpha unless `alpha_override`
/// supplies one, in which case the source alpha channel is ignored.
pub fn blend(dst: Rgba<u8>, src: Rgba<u8>, alpha_override: Option<Opacity>) -> Rgba<u8> {
    let a = alpha_override.map_or_else(|| f32::from(src.0[3]) / 255.0, Opacity::value);

    if a <= 0.0 {
        return dst;
    }
    if a >= 1.0 {
        let [r, g, b, _] = src.0;
        return Rgba([r, g, b, u8::MAX]);
    }

    let [sr, sg, sb, _] = src.0;
    let [dr, dg, db, da] = dst.0;

    match da {
        0 => Rgba([sr, sg, sb, to_byte(a * 255.0)]),
        u8::MAX => Rgba([
            mix_channel(dr, sr, a),
            mix_channel(dg, sg, a),
            mix_channel(db, sb, a),
            u8::MAX,
        ]),
        _ => {
            let dst_a = f32::from(da) / 255.0;
            let under = dst_a * (1.0 - a);
            let out_a = a + under;
            let over = |d: u8, s: u8| to_byte(f32::from(s).mul_add(a, f32::from(d) * under) / out_a);
            Rgba([over(dr, sr), over(dg, sg), over(db, sb), to_byte(out_a * 255.0)])
        }
    }
}

/// Composite a whole row of `src` pixels over `dst`, pairwise
///
/// Both slices hold packed RGBA bytes; trailing bytes beyond the shorter
/// slice are left untouched.
pub fn blend_row(dst: &mut [u8], src: &[u8], alpha_override: Option<Opacity>) {
    for (dst_px, src_px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let (Ok(d), Ok(s)) = (<[u8; 4]>::try_from(&*dst_px), <[u8; 4]>::try_from(src_px)) else {
            continue;
        };
        dst_px.copy_from_slice(&blend(Rgba(d), Rgba(s), alpha_override).0);
    }
}

/// Composite one uniform color over every pixel of a packed RGBA row
pub fn tint_row(dst: &mut [u8], color: Rgba<u8>, opacity: Opacity) {
    for dst_px in dst.chunks_exact_mut(4) {
        let Ok(d) = <[u8; 4]>::try_from(&*dst_px) else {
            continue;
        };
        dst_px.copy_from_slice(&blend(Rgba(d), color, Some(opacity)).0);
    }
}

// d + a * (s - d) over an opaque destination
fn mix_channel(dst: u8, src: u8, a: f32) -> u8 {
    let d = f32::from(dst);
    let s = f32::from(src);
    to_byte(a.mul_add(s - d, d))
}

fn to_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
