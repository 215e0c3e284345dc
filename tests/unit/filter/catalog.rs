use super::*;

#[test]
fn names_round_trip_through_from_str() {
    for kind in FilterKind::ALL {
        assert_eq!(kind.name().parse::<FilterKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert_eq!(" Lanczos2 ".parse::<FilterKind>().unwrap(), FilterKind::Lanczos2);
}

#[test]
fn unknown_names_are_rejected() {
    let err = "bicubic".parse::<FilterKind>().unwrap_err();
    assert!(err.to_string().contains("unknown filter 'bicubic'"));
    assert!("".parse::<FilterKind>().is_err());
}

#[test]
fn filters_are_even_and_vanish_outside_window() {
    for kind in FilterKind::ALL {
        let w = kind.window();
        for i in 0..50 {
            let x = f64::from(i) * w / 25.0;
            assert_eq!(kind.eval(x), kind.eval(-x), "{kind} not even at {x}");
        }
        if kind != FilterKind::Box {
            assert_eq!(kind.eval(w), 0.0, "{kind} at window edge");
        }
        assert_eq!(kind.eval(w + 0.25), 0.0, "{kind} past window edge");
    }
}

#[test]
fn box_splits_exact_ties() {
    assert_eq!(FilterKind::Box.eval(0.5), 0.5);
    assert_eq!(FilterKind::Box.eval(-0.5), 0.5);
    assert_eq!(FilterKind::Box.eval(0.4999), 1.0);
}

#[test]
fn centre_weights_match_catalog() {
    assert_eq!(FilterKind::Box.eval(0.0), 1.0);
    assert_eq!(FilterKind::Hamming.eval(0.0), 1.0);
    assert_eq!(FilterKind::Lanczos2.eval(0.0), 1.0);
    assert_eq!(FilterKind::Lanczos3.eval(0.0), 1.0);
    assert_eq!(FilterKind::Mks2013.eval(0.0), 1.0625);
}

#[test]
fn mks2013_is_continuous_at_piece_boundaries() {
    let k = FilterKind::Mks2013;
    for edge in [0.5f64, 1.5] {
        let lo = k.eval(edge - 1e-9);
        let hi = k.eval(edge + 1e-9);
        assert!((lo - hi).abs() < 1e-6, "jump at {edge}: {lo} vs {hi}");
    }
}

#[test]
fn lanczos_crosses_zero_at_integers() {
    for kind in [FilterKind::Lanczos2, FilterKind::Lanczos3] {
        for n in 1..3 {
            assert!(kind.eval(f64::from(n)).abs() < 1e-12);
        }
    }
}

#[test]
fn serde_uses_catalog_names() {
    let json = serde_json::to_string(&FilterKind::Mks2013).unwrap();
    assert_eq!(json, "\"mks2013\"");
    let back: FilterKind = serde_json::from_str("\"hamming\"").unwrap();
    assert_eq!(back, FilterKind::Hamming);
}
