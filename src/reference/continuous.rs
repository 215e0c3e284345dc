//! Floating-point resampler that evaluates the continuous filter directly.
//!
//! Shares sampling geometry with the packed-kernel engine but skips Q14 quantization
//! and keeps the intermediate image unrounded and premultiplied. Useful as an oracle
//! and as the CPU counterpart of per-fragment shader implementations.

use crate::{
    filter::catalog::FilterKind,
    foundation::core::{CHANNELS, ImageSize},
    foundation::error::ResizeResult,
    kernel::generate::AxisGeometry,
    resize::alpha::has_alpha,
    resize::options::ResizeOptions,
};

type Px = [f64; CHANNELS];

struct AxisTaps {
    first: usize,
    weights: Vec<f64>,
}

fn axis_taps(filter: FilterKind, src_size: u32, dst_size: u32, offset: f64) -> Vec<AxisTaps> {
    let geom = AxisGeometry::new(filter, src_size, f64::from(dst_size) / f64::from(src_size));
    (0..dst_size)
        .map(|d| {
            let center = geom.center(d, offset);
            let Some((first, last)) = geom.span(center) else {
                return AxisTaps {
                    first: 0,
                    weights: Vec::new(),
                };
            };
            let mut weights: Vec<f64> = (first..=last).map(|p| geom.weight(p, center)).collect();
            let total: f64 = weights.iter().sum();
            if total.abs() <= f64::EPSILON {
                weights.clear();
            } else {
                weights.iter_mut().for_each(|w| *w /= total);
            }
            AxisTaps {
                first: first as usize,
                weights,
            }
        })
        .collect()
}

fn weighted_sum(taps: &AxisTaps, sample: impl Fn(usize) -> Px) -> Px {
    let mut acc = [0.0; CHANNELS];
    for (i, &w) in taps.weights.iter().enumerate() {
        let px = sample(taps.first + i);
        for c in 0..CHANNELS {
            acc[c] += px[c] * w;
        }
    }
    acc
}

/// Resize with unquantized weights and `f64` intermediates.
///
/// Accepts the same inputs as [`resize_with`](crate::resize_with) (the threading
/// options are ignored) and follows the same path selection, so outputs agree with the
/// fixed-point engine up to rounding.
#[tracing::instrument(skip(src, opts), fields(filter = %opts.filter))]
pub fn resize_reference(
    src: &[u8],
    src_size: ImageSize,
    dst_size: ImageSize,
    opts: &ResizeOptions,
) -> ResizeResult<Vec<u8>> {
    opts.validate()?;
    let src_size = ImageSize::new(src_size.width, src_size.height)?;
    let dst_size = ImageSize::new(dst_size.width, dst_size.height)?;
    src_size.check_buffer(src, "source")?;

    let premultiplied = has_alpha(src, opts.opaque_alpha_min);
    let input: Vec<Px> = src
        .chunks_exact(CHANNELS)
        .map(|p| {
            let a = f64::from(p[3]);
            let k = if premultiplied { a / 255.0 } else { 1.0 };
            [
                f64::from(p[0]) * k,
                f64::from(p[1]) * k,
                f64::from(p[2]) * k,
                a,
            ]
        })
        .collect();

    let (sw, sh) = (src_size.width as usize, src_size.height as usize);
    let (dw, dh) = (dst_size.width as usize, dst_size.height as usize);
    let taps_x = axis_taps(opts.filter, src_size.width, dst_size.width, opts.offset_x);
    let taps_y = axis_taps(opts.filter, src_size.height, dst_size.height, opts.offset_y);

    let mut tmp = Vec::<Px>::with_capacity(dw * sh);
    for y in 0..sh {
        let row = &input[y * sw..(y + 1) * sw];
        tmp.extend(taps_x.iter().map(|t| weighted_sum(t, |s| row[s])));
    }

    let mut out = vec![0u8; dst_size.byte_len()?];
    for (y, taps) in taps_y.iter().enumerate() {
        for x in 0..dw {
            let v = weighted_sum(taps, |s| tmp[s * dw + x]);
            let idx = (y * dw + x) * CHANNELS;
            out[idx..idx + CHANNELS].copy_from_slice(&finish(v, premultiplied));
        }
    }
    Ok(out)
}

fn finish(v: Px, premultiplied: bool) -> [u8; CHANNELS] {
    fn to_u8(v: f64) -> u8 {
        v.round().clamp(0.0, 255.0) as u8
    }

    if !premultiplied {
        return [to_u8(v[0]), to_u8(v[1]), to_u8(v[2]), 255];
    }
    let alpha = to_u8(v[3]);
    if alpha == 0 {
        return [0; CHANNELS];
    }
    let k = 255.0 / v[3];
    [to_u8(v[0] * k), to_u8(v[1] * k), to_u8(v[2] * k), alpha]
}

#[cfg(test)]
#[path = "../../tests/unit/reference/continuous.rs"]
mod tests;
