use super::*;

#[test]
fn ids_round_trip_through_from_id() {
    for kind in MotifKind::ALL {
        assert_eq!(MotifKind::from_id(kind.id()).unwrap(), kind);
    }
    assert_eq!(MotifKind::default(), MotifKind::BandedDiagonal);
}

#[test]
fn unknown_id_is_a_validation_error() {
    for id in [0u8, 4, 9] {
        let err = MotifKind::from_id(id).unwrap_err();
        assert!(matches!(err, MotionError::Validation(_)), "{err}");
    }
}

#[test]
fn export_names_follow_pattern_number() {
    assert_eq!(MotifKind::BandedDiagonal.export_file_name(), "pattern1.gif");
    assert_eq!(MotifKind::DiamondVine.export_file_name(), "pattern2.gif");
    assert_eq!(MotifKind::RadialPetal.export_file_name(), "pattern3.gif");
}

#[test]
fn grids_per_motif() {
    let shapes: Vec<_> = MotifKind::ALL
        .iter()
        .map(|k| (k.grid().cols, k.grid().rows, k.grid().bleed))
        .collect();
    assert_eq!(shapes, vec![(4, 4, true), (4, 4, false), (5, 5, false)]);
}

#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&MotifKind::RadialPetal).unwrap();
    assert_eq!(json, "\"radial_petal\"");
    let back: MotifKind = serde_json::from_str("\"diamond_vine\"").unwrap();
    assert_eq!(back, MotifKind::DiamondVine);
}

#[test]
fn every_cell_starts_with_a_background_fill() {
    let clock = FrameClock::fixed(0.0, 0.0, 0);
    for kind in MotifKind::ALL {
        let ops = kind.render_cell(Size::new(100.0, 100.0), &clock);
        assert!(matches!(ops.first(), Some(DrawOp::Fill { .. })), "{}", kind.name());
    }
}
