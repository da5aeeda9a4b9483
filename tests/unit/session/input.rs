use super::*;

#[test]
fn digit_keys_select_motifs() {
    assert_eq!(
        Command::from_key('1'),
        Some(Command::SelectMotif(MotifKind::BandedDiagonal))
    );
    assert_eq!(
        Command::from_key('2'),
        Some(Command::SelectMotif(MotifKind::DiamondVine))
    );
    assert_eq!(
        Command::from_key('3'),
        Some(Command::SelectMotif(MotifKind::RadialPetal))
    );
}

#[test]
fn r_in_either_case_records() {
    assert_eq!(Command::from_key('r'), Some(Command::StartRecording));
    assert_eq!(Command::from_key('R'), Some(Command::StartRecording));
}

#[test]
fn other_keys_are_ignored() {
    for key in ['0', '4', 'q', ' ', 'é'] {
        assert_eq!(Command::from_key(key), None, "{key:?}");
    }
}
