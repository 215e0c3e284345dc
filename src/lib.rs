//! Convresize resamples RGBA8 images with separable, fixed-point convolution.
//!
//! # Pipeline overview
//!
//! 1. **Kernels**: per axis, [`generate_kernels`] turns a continuous [`FilterKind`] into
//!    one normalized, Q14-quantized, trimmed record per destination pixel, packed into a
//!    single [`PackedKernels`] arena.
//! 2. **Convolve**: [`convolve`] / [`convolve_premultiplied`] apply a kernel table along
//!    one [`Axis`].
//! 3. **Resize**: [`resize`] / [`resize_with`] / [`resize_on_pool`] scan alpha, run the horizontal pass into
//!    an intermediate buffer and the vertical pass into the output.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: serial and parallel execution produce identical bytes.
//! - **Straight RGBA8 in and out**: premultiplication is internal to the alpha-aware path.
//! - **No IO**: decoding is left to the caller; [`resize_image`] adapts `image` buffers.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod convolve;
mod filter;
mod foundation;
mod kernel;
mod reference;
mod resize;

pub use convolve::engine::{Axis, convolve, convolve_premultiplied};
pub use filter::catalog::FilterKind;
pub use foundation::core::{CHANNELS, ImageSize, MAX_DIMENSION};
pub use foundation::error::{ResizeError, ResizeResult};
pub use foundation::math::{Q14_FRAC_BITS, Q14_ONE};
pub use kernel::generate::generate_kernels;
pub use kernel::packed::{KernelRecord, PackedKernels};
pub use reference::continuous::resize_reference;
pub use resize::alpha::{has_alpha, reset_alpha};
pub use resize::interop::resize_image;
pub use resize::options::ResizeOptions;
pub use resize::orchestrator::{resize, resize_on_pool, resize_with};
