use super::*;
use crate::foundation::core::MAX_DIMENSION;

fn solid(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    px.repeat((w * h) as usize)
}

#[test]
fn solid_colour_survives_downscale_with_every_filter() {
    let src = solid(4, 4, [200, 100, 50, 255]);
    for filter in FilterKind::ALL {
        let out = resize(&src, 4, 4, 2, 2, filter).unwrap();
        assert_eq!(out, solid(2, 2, [200, 100, 50, 255]), "{filter}");
    }
}

#[test]
fn solid_translucent_colour_survives_upscale() {
    let src = solid(3, 2, [10, 220, 90, 77]);
    for filter in FilterKind::ALL {
        let out = resize(&src, 3, 2, 7, 5, filter).unwrap();
        assert_eq!(out, solid(7, 5, [10, 220, 90, 77]), "{filter}");
    }
}

#[test]
fn output_has_requested_dimensions() {
    let src = solid(5, 3, [1, 2, 3, 255]);
    let out = resize(&src, 5, 3, 11, 2, FilterKind::Hamming).unwrap();
    assert_eq!(out.len(), 11 * 2 * 4);
}

#[test]
fn invalid_geometry_fails_before_resizing() {
    let src = solid(2, 2, [0, 0, 0, 255]);
    assert!(resize(&src, 2, 2, 0, 2, FilterKind::Box).is_err());
    assert!(resize(&src, 0, 2, 2, 2, FilterKind::Box).is_err());
    let err = resize(&src, 3, 2, 2, 2, FilterKind::Box).unwrap_err();
    assert!(err.to_string().contains("source buffer has 16 bytes"));
}

#[test]
fn options_are_validated() {
    let src = solid(2, 2, [0, 0, 0, 255]);
    let size = ImageSize::new(2, 2).unwrap();
    let opts = ResizeOptions {
        offset_x: f64::NAN,
        ..ResizeOptions::default()
    };
    assert!(resize_with(&src, size, size, &opts).is_err());
}

#[test]
fn zero_thread_pool_is_rejected() {
    assert!(build_thread_pool(Some(0)).is_err());
    assert!(build_thread_pool(Some(1)).is_ok());
}

#[test]
fn parallel_option_runs_on_a_pool() {
    let src: Vec<u8> = (0..6 * 4 * 4).map(|i| (i * 7 % 256) as u8).collect();
    let size_in = ImageSize::new(6, 4).unwrap();
    let size_out = ImageSize::new(3, 9).unwrap();
    let serial = resize_with(&src, size_in, size_out, &ResizeOptions::default()).unwrap();
    let opts = ResizeOptions {
        parallel: true,
        threads: Some(2),
        ..ResizeOptions::default()
    };
    let pooled = resize_with(&src, size_in, size_out, &opts).unwrap();
    assert_eq!(serial, pooled);
}

#[test]
fn caller_pool_is_reused_across_resizes() {
    let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
    let size_in = ImageSize::new(6, 4).unwrap();
    for (i, size_out) in [(5, 7), (2, 2), (12, 3)].into_iter().enumerate() {
        let size_out = ImageSize::new(size_out.0, size_out.1).unwrap();
        let src: Vec<u8> = (0..6 * 4 * 4).map(|p| ((p * 13 + i * 29) % 256) as u8).collect();
        let serial = resize_with(&src, size_in, size_out, &ResizeOptions::default()).unwrap();
        let pooled =
            resize_on_pool(&src, size_in, size_out, &ResizeOptions::default(), &pool).unwrap();
        assert_eq!(serial, pooled);
    }
}

#[test]
fn destination_may_exceed_the_source_limit() {
    let src = solid(2, 1, [30, 60, 90, 255]);
    let wide = MAX_DIMENSION + 7;
    let out = resize(&src, 2, 1, wide, 1, FilterKind::Box).unwrap();
    assert_eq!(out, solid(wide, 1, [30, 60, 90, 255]));
}

#[test]
fn oversize_source_is_rejected() {
    let wide = MAX_DIMENSION + 1;
    let src = solid(wide, 1, [0, 0, 0, 255]);
    let err = resize(&src, wide, 1, 4, 1, FilterKind::Box).unwrap_err();
    assert!(matches!(err, ResizeError::Validation(_)));
    assert!(err.to_string().contains("source dimensions"));
}
