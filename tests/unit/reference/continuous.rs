use super::*;

#[test]
fn box_halving_is_an_exact_pair_average() {
    let src = vec![10u8, 20, 30, 255, 30, 40, 50, 255];
    let opts = ResizeOptions::with_filter(FilterKind::Box);
    let out = resize_reference(
        &src,
        ImageSize::new(2, 1).unwrap(),
        ImageSize::new(1, 1).unwrap(),
        &opts,
    )
    .unwrap();
    assert_eq!(out, vec![20, 30, 40, 255]);
}

#[test]
fn transparent_neighbours_do_not_tint() {
    let src = vec![255u8, 0, 0, 0, 0, 0, 255, 255];
    let opts = ResizeOptions::with_filter(FilterKind::Box);
    let out = resize_reference(
        &src,
        ImageSize::new(2, 1).unwrap(),
        ImageSize::new(1, 1).unwrap(),
        &opts,
    )
    .unwrap();
    assert_eq!(out, vec![0, 0, 255, 128]);
}

#[test]
fn taps_are_normalized() {
    for filter in FilterKind::ALL {
        for t in axis_taps(filter, 9, 4, 0.0) {
            let sum: f64 = t.weights.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{filter}: {sum}");
        }
    }
}

#[test]
fn far_offsets_produce_zero_pixels() {
    let src = vec![200u8; 4 * 4];
    let opts = ResizeOptions {
        offset_x: 50.0,
        ..ResizeOptions::with_filter(FilterKind::Hamming)
    };
    let out = resize_reference(
        &src,
        ImageSize::new(2, 2).unwrap(),
        ImageSize::new(2, 2).unwrap(),
        &opts,
    )
    .unwrap();
    assert!(out.iter().all(|&v| v == 0));
}
