use crate::motif::MotifKind;

/// What a key press asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Switch to a motif and restart its cycle.
    SelectMotif(MotifKind),
    /// Restart the cycle and capture it as an animation.
    StartRecording,
}

impl Command {
    /// Map a key to a command. Unbound keys give `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::SelectMotif(MotifKind::BandedDiagonal)),
            '2' => Some(Self::SelectMotif(MotifKind::DiamondVine)),
            '3' => Some(Self::SelectMotif(MotifKind::RadialPetal)),
            'r' | 'R' => Some(Self::StartRecording),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/input.rs"]
mod tests;
