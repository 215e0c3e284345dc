use rayon::prelude::*;

use crate::{
    foundation::core::CHANNELS,
    foundation::error::{ResizeError, ResizeResult},
    foundation::math::{div_round_u8, q14_to_u8},
    kernel::packed::{KernelRecord, PackedKernels},
};

/// Direction a convolution pass walks its kernel taps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Taps are consecutive pixels within a row.
    Horizontal,
    /// Taps are the same column in consecutive rows.
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ConvolveMode {
    Fast,
    Premultiplied,
}

/// Geometry of one convolution pass.
///
/// `src_axis` is the source length along `axis`, `cross` the length of the untouched
/// axis and `dst_axis` the destination length along `axis`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ConvolvePass<'k> {
    pub(crate) axis: Axis,
    pub(crate) src_axis: usize,
    pub(crate) cross: usize,
    pub(crate) dst_axis: usize,
    pub(crate) kernels: &'k PackedKernels,
}

impl ConvolvePass<'_> {
    fn validate(&self, src: &[u8], dst: &[u8]) -> ResizeResult<()> {
        if self.kernels.len() != self.dst_axis {
            return Err(ResizeError::validation(format!(
                "kernel table has {} records, expected {}",
                self.kernels.len(),
                self.dst_axis
            )));
        }
        let src_len = plane_len(self.src_axis, self.cross, "source")?;
        let dst_len = plane_len(self.dst_axis, self.cross, "destination")?;
        if src.len() != src_len || dst.len() != dst_len {
            return Err(ResizeError::validation(format!(
                "convolution buffers are {}/{} bytes, expected {src_len}/{dst_len}",
                src.len(),
                dst.len()
            )));
        }
        if let Some(max) = self.kernels.max_source_index()
            && max >= self.src_axis
        {
            return Err(ResizeError::convolution(format!(
                "kernel reads source index {max} past axis length {}",
                self.src_axis
            )));
        }
        Ok(())
    }

    pub(crate) fn run(
        &self,
        src: &[u8],
        dst: &mut [u8],
        mode: ConvolveMode,
        pool: Option<&rayon::ThreadPool>,
    ) -> ResizeResult<()> {
        self.validate(src, dst)?;
        if dst.is_empty() {
            return Ok(());
        }
        match mode {
            ConvolveMode::Fast => self.run_with(src, dst, FastPixel, pool),
            ConvolveMode::Premultiplied => self.run_with(src, dst, PremultipliedPixel, pool),
        }
        Ok(())
    }

    fn run_with<P: PixelOp>(
        &self,
        src: &[u8],
        dst: &mut [u8],
        op: P,
        pool: Option<&rayon::ThreadPool>,
    ) {
        let kernels = self.kernels;
        match self.axis {
            Axis::Horizontal => {
                let src_row_bytes = self.src_axis * CHANNELS;
                for_each_row(dst, self.dst_axis * CHANNELS, pool, |y, row| {
                    let base = y * src_row_bytes;
                    for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
                        op.apply(kernels.record(x), out, src, base, CHANNELS);
                    }
                });
            }
            Axis::Vertical => {
                let stride = self.cross * CHANNELS;
                for_each_row(dst, stride, pool, |y, row| {
                    let rec = kernels.record(y);
                    for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
                        op.apply(rec, out, src, x * CHANNELS, stride);
                    }
                });
            }
        }
    }
}

fn plane_len(axis_len: usize, cross: usize, what: &str) -> ResizeResult<usize> {
    axis_len
        .checked_mul(CHANNELS)
        .and_then(|row| row.checked_mul(cross))
        .ok_or_else(|| {
            ResizeError::validation(format!(
                "{what} plane of {axis_len}x{cross} rgba8 pixels overflows usize"
            ))
        })
}

fn for_each_row<F>(dst: &mut [u8], row_bytes: usize, pool: Option<&rayon::ThreadPool>, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    match pool {
        Some(pool) => pool.install(|| {
            dst.par_chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }),
        None => dst
            .chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| f(y, row)),
    }
}

/// Computes one output pixel from the taps of `rec`.
///
/// Source tap `s` starts at byte `base + s * stride` of `src`.
trait PixelOp: Copy + Send + Sync {
    fn apply(
        self,
        rec: KernelRecord<'_>,
        out: &mut [u8],
        src: &[u8],
        base: usize,
        stride: usize,
    );
}

#[derive(Clone, Copy)]
struct FastPixel;

impl PixelOp for FastPixel {
    fn apply(
        self,
        rec: KernelRecord<'_>,
        out: &mut [u8],
        src: &[u8],
        base: usize,
        stride: usize,
    ) {
        let mut acc = [0i64; CHANNELS];
        let mut idx = base + rec.shift * stride;
        for &w in rec.weights {
            let px = &src[idx..idx + CHANNELS];
            let w = i64::from(w);
            for c in 0..CHANNELS {
                acc[c] += i64::from(px[c]) * w;
            }
            idx += stride;
        }
        for c in 0..CHANNELS {
            out[c] = q14_to_u8(acc[c]);
        }
    }
}

#[derive(Clone, Copy)]
struct PremultipliedPixel;

impl PixelOp for PremultipliedPixel {
    fn apply(
        self,
        rec: KernelRecord<'_>,
        out: &mut [u8],
        src: &[u8],
        base: usize,
        stride: usize,
    ) {
        let mut acc = [0i64; CHANNELS];
        let mut idx = base + rec.shift * stride;
        for &w in rec.weights {
            let px = &src[idx..idx + CHANNELS];
            let wa = i64::from(w) * i64::from(px[3]);
            acc[0] += i64::from(px[0]) * wa;
            acc[1] += i64::from(px[1]) * wa;
            acc[2] += i64::from(px[2]) * wa;
            acc[3] += wa;
            idx += stride;
        }

        let alpha = q14_to_u8(acc[3]);
        if alpha == 0 {
            out.fill(0);
            return;
        }
        out[0] = div_round_u8(acc[0], acc[3]);
        out[1] = div_round_u8(acc[1], acc[3]);
        out[2] = div_round_u8(acc[2], acc[3]);
        out[3] = alpha;
    }
}

/// Convolve `src` along `axis` treating every channel independently.
///
/// Intended for fully opaque input. For [`Axis::Horizontal`] `src` is
/// `src_axis × cross` pixels (width × height) and `dst` is `dst_axis × cross`; for
/// [`Axis::Vertical`] `src` is `cross × src_axis` and `dst` is `cross × dst_axis`.
/// Records with no taps produce an all-zero pixel.
pub fn convolve(
    src: &[u8],
    dst: &mut [u8],
    axis: Axis,
    src_axis: usize,
    cross: usize,
    dst_axis: usize,
    kernels: &PackedKernels,
) -> ResizeResult<()> {
    ConvolvePass {
        axis,
        src_axis,
        cross,
        dst_axis,
        kernels,
    }
    .run(src, dst, ConvolveMode::Fast, None)
}

/// Convolve `src` along `axis` with colour premultiplied by alpha.
///
/// Same geometry as [`convolve`]. Colour is weighted by each tap's alpha, so fully
/// transparent pixels contribute no colour; the result is un-premultiplied and pixels
/// whose accumulated alpha rounds to zero come out as `[0, 0, 0, 0]`.
pub fn convolve_premultiplied(
    src: &[u8],
    dst: &mut [u8],
    axis: Axis,
    src_axis: usize,
    cross: usize,
    dst_axis: usize,
    kernels: &PackedKernels,
) -> ResizeResult<()> {
    ConvolvePass {
        axis,
        src_axis,
        cross,
        dst_axis,
        kernels,
    }
    .run(src, dst, ConvolveMode::Premultiplied, None)
}

#[cfg(test)]
#[path = "../../tests/unit/convolve/engine.rs"]
mod tests;
