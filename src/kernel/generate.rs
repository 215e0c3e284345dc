use crate::{
    filter::catalog::FilterKind,
    foundation::core::MAX_DIMENSION,
    foundation::error::{ResizeError, ResizeResult},
    foundation::math::{Q14_ONE, to_fixed_q14},
    kernel::packed::PackedKernels,
};

/// Sampling geometry shared by every destination pixel of one axis.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AxisGeometry {
    filter: FilterKind,
    scale_inv: f64,
    scale_clamped: f64,
    src_window: f64,
    last_src: i64,
}

impl AxisGeometry {
    pub(crate) fn new(filter: FilterKind, src_size: u32, scale: f64) -> Self {
        // Upscaling keeps the filter at its native width.
        let scale_clamped = scale.min(1.0);
        Self {
            filter,
            scale_inv: 1.0 / scale,
            scale_clamped,
            src_window: filter.window() / scale_clamped,
            last_src: i64::from(src_size) - 1,
        }
    }

    pub(crate) fn max_taps(&self) -> usize {
        ((self.src_window + 1.0) * 2.0).floor() as usize
    }

    /// Source coordinate sampled by the centre of destination pixel `dst_px`.
    pub(crate) fn center(&self, dst_px: u32, offset: f64) -> f64 {
        (f64::from(dst_px) + 0.5) * self.scale_inv + offset
    }

    /// Inclusive source index range inside the support window, clamped to the axis.
    pub(crate) fn span(&self, center: f64) -> Option<(i64, i64)> {
        let first = ((center - self.src_window).floor() as i64).max(0);
        let last = ((center + self.src_window).ceil() as i64).min(self.last_src);
        (first <= last).then_some((first, last))
    }

    /// Unnormalized weight of source pixel `p` for a sample at `center`.
    pub(crate) fn weight(&self, p: i64, center: f64) -> f64 {
        self.filter.eval(((p as f64 + 0.5) - center) * self.scale_clamped)
    }
}

/// Build one quantized, trimmed kernel per destination pixel along a single axis.
///
/// Destination pixel `d` samples the source at `(d + 0.5) / scale + offset`. On
/// downscale the filter is stretched by `1 / scale`; on upscale it keeps its native
/// width. Weights are normalized per record, quantized to Q14 and compensated so each
/// record sums to exactly [`Q14_ONE`].
#[tracing::instrument(level = "debug")]
pub fn generate_kernels(
    filter: FilterKind,
    src_size: u32,
    dst_size: u32,
    scale: f64,
    offset: f64,
) -> ResizeResult<PackedKernels> {
    if src_size == 0 || dst_size == 0 {
        return Err(ResizeError::validation(format!(
            "kernel axis sizes must be > 0 (src={src_size}, dst={dst_size})"
        )));
    }
    if src_size > MAX_DIMENSION {
        return Err(ResizeError::validation(format!(
            "kernel source size {src_size} exceeds {MAX_DIMENSION}"
        )));
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ResizeError::validation("kernel scale must be finite and > 0"));
    }
    if !offset.is_finite() {
        return Err(ResizeError::validation("kernel offset must be finite"));
    }

    let geom = AxisGeometry::new(filter, src_size, scale);
    let max_taps = geom.max_taps();
    let mut out = PackedKernels::with_capacity(
        dst_size as usize,
        (max_taps.min(src_size as usize) + 2) * dst_size as usize,
    );
    let mut float_taps = Vec::<f64>::with_capacity(max_taps);
    let mut fixed_taps = Vec::<i16>::with_capacity(max_taps);
    let mut degenerate = 0usize;

    for dst_px in 0..dst_size {
        let center = geom.center(dst_px, offset);
        let Some((first, last)) = geom.span(center) else {
            out.push_empty();
            degenerate += 1;
            continue;
        };

        float_taps.clear();
        let mut total = 0.0f64;
        for p in first..=last {
            let w = geom.weight(p, center);
            total += w;
            float_taps.push(w);
        }
        if total.abs() <= f64::EPSILON {
            out.push_empty();
            degenerate += 1;
            continue;
        }

        fixed_taps.clear();
        let mut acc: i32 = 0;
        for &w in &float_taps {
            let q = to_fixed_q14(w / total);
            acc += i32::from(q);
            fixed_taps.push(q);
        }
        let delta = Q14_ONE - acc;
        if delta != 0 {
            let mid = fixed_taps.len() / 2;
            let new_mid = (i32::from(fixed_taps[mid]) + delta)
                .clamp(i32::from(i16::MIN), i32::from(i16::MAX));
            fixed_taps[mid] = new_mid as i16;
        }

        let Some(lead) = fixed_taps.iter().position(|&w| w != 0) else {
            out.push_empty();
            degenerate += 1;
            continue;
        };
        let tail = fixed_taps.iter().rposition(|&w| w != 0).unwrap_or(lead);
        out.push_record((first as usize + lead) as i16, &fixed_taps[lead..=tail]);
    }

    if degenerate > 0 {
        tracing::debug!(degenerate, dst_size, "degenerate kernel records emitted");
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/generate.rs"]
mod tests;
