use crate::{
    convolve::engine::{Axis, ConvolveMode, ConvolvePass},
    filter::catalog::FilterKind,
    foundation::core::ImageSize,
    foundation::error::{ResizeError, ResizeResult},
    kernel::generate::generate_kernels,
    kernel::packed::PackedKernels,
    resize::alpha::{has_alpha, reset_alpha},
    resize::options::ResizeOptions,
};

/// Resize a tightly packed RGBA8 buffer with `filter` and default options.
///
/// Returns a new `dst_width × dst_height` RGBA8 buffer. Fully opaque input takes the
/// straight convolution path and comes back with every alpha at 255; anything else is
/// convolved premultiplied so transparent pixels never bleed colour.
pub fn resize(
    src: &[u8],
    src_width: u32,
    src_height: u32,
    dst_width: u32,
    dst_height: u32,
    filter: FilterKind,
) -> ResizeResult<Vec<u8>> {
    resize_with(
        src,
        ImageSize::new(src_width, src_height)?,
        ImageSize::new(dst_width, dst_height)?,
        &ResizeOptions::with_filter(filter),
    )
}

/// Resize a tightly packed RGBA8 buffer from `src_size` to `dst_size`.
///
/// Pipeline:
/// 1. scan alpha to pick the fast or premultiplied path
/// 2. build horizontal and vertical kernel tables
/// 3. horizontal pass into a `dst.width × src.height` intermediate
/// 4. vertical pass into the `dst.width × dst.height` output
/// 5. on the fast path, force output alpha to 255
///
/// With `opts.parallel` set, a thread pool is built for this call only; use
/// [`resize_on_pool`] to reuse one across calls.
#[tracing::instrument(skip(src, opts), fields(filter = %opts.filter))]
pub fn resize_with(
    src: &[u8],
    src_size: ImageSize,
    dst_size: ImageSize,
    opts: &ResizeOptions,
) -> ResizeResult<Vec<u8>> {
    let plan = ResizePlan::new(src, src_size, dst_size, opts)?;
    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };
    plan.execute(src, pool.as_ref())
}

/// Like [`resize_with`], but splits both passes across rows on a caller-owned pool.
///
/// `opts.parallel` and `opts.threads` are ignored; the pool decides the worker count.
#[tracing::instrument(
    skip(src, opts, pool),
    fields(filter = %opts.filter, threads = pool.current_num_threads())
)]
pub fn resize_on_pool(
    src: &[u8],
    src_size: ImageSize,
    dst_size: ImageSize,
    opts: &ResizeOptions,
    pool: &rayon::ThreadPool,
) -> ResizeResult<Vec<u8>> {
    ResizePlan::new(src, src_size, dst_size, opts)?.execute(src, Some(pool))
}

/// Validated geometry, selected path and kernel tables for one resize.
struct ResizePlan {
    src_size: ImageSize,
    dst_size: ImageSize,
    tmp_size: ImageSize,
    mode: ConvolveMode,
    kernels_x: PackedKernels,
    kernels_y: PackedKernels,
}

impl ResizePlan {
    fn new(
        src: &[u8],
        src_size: ImageSize,
        dst_size: ImageSize,
        opts: &ResizeOptions,
    ) -> ResizeResult<Self> {
        opts.validate()?;
        let src_size = ImageSize::new(src_size.width, src_size.height)?;
        let dst_size = ImageSize::new(dst_size.width, dst_size.height)?;
        src_size.check_source_range()?;
        src_size.check_buffer(src, "source")?;
        let tmp_size = ImageSize::new(dst_size.width, src_size.height)?;
        tmp_size.byte_len()?;
        dst_size.byte_len()?;

        let mode = if has_alpha(src, opts.opaque_alpha_min) {
            ConvolveMode::Premultiplied
        } else {
            ConvolveMode::Fast
        };
        tracing::debug!(?mode, "selected convolution path");

        let kernels_x = generate_kernels(
            opts.filter,
            src_size.width,
            dst_size.width,
            f64::from(dst_size.width) / f64::from(src_size.width),
            opts.offset_x,
        )?;
        let kernels_y = generate_kernels(
            opts.filter,
            src_size.height,
            dst_size.height,
            f64::from(dst_size.height) / f64::from(src_size.height),
            opts.offset_y,
        )?;

        Ok(Self {
            src_size,
            dst_size,
            tmp_size,
            mode,
            kernels_x,
            kernels_y,
        })
    }

    fn execute(&self, src: &[u8], pool: Option<&rayon::ThreadPool>) -> ResizeResult<Vec<u8>> {
        let mut tmp = vec![0u8; self.tmp_size.byte_len()?];
        ConvolvePass {
            axis: Axis::Horizontal,
            src_axis: self.src_size.width as usize,
            cross: self.src_size.height as usize,
            dst_axis: self.dst_size.width as usize,
            kernels: &self.kernels_x,
        }
        .run(src, &mut tmp, self.mode, pool)?;

        let mut out = vec![0u8; self.dst_size.byte_len()?];
        ConvolvePass {
            axis: Axis::Vertical,
            src_axis: self.src_size.height as usize,
            cross: self.dst_size.width as usize,
            dst_axis: self.dst_size.height as usize,
            kernels: &self.kernels_y,
        }
        .run(&tmp, &mut out, self.mode, pool)?;

        if self.mode == ConvolveMode::Fast {
            reset_alpha(&mut out);
        }
        Ok(out)
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> ResizeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ResizeError::validation(
            "resize 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    tracing::debug!(?threads, "building resize thread pool");
    builder
        .build()
        .map_err(|e| ResizeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/resize/orchestrator.rs"]
mod tests;
