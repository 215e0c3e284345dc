use crate::{
    foundation::core::ImageSize,
    foundation::error::{ResizeError, ResizeResult},
    resize::options::ResizeOptions,
    resize::orchestrator::resize_with,
};

/// Resize a decoded [`image::RgbaImage`] to `width × height`.
pub fn resize_image(
    img: &image::RgbaImage,
    width: u32,
    height: u32,
    opts: &ResizeOptions,
) -> ResizeResult<image::RgbaImage> {
    let src_size = ImageSize::new(img.width(), img.height())?;
    let dst_size = ImageSize::new(width, height)?;
    let out = resize_with(img.as_raw(), src_size, dst_size, opts)?;
    image::RgbaImage::from_raw(width, height, out).ok_or_else(|| {
        ResizeError::Other(anyhow::anyhow!(
            "resized buffer does not fit a {width}x{height} RgbaImage"
        ))
    })
}
