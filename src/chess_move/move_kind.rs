use std::fmt;
use std::str::FromStr;

/// Coarse classification of a move, as far as ordering and evaluation care.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum MoveKind {
    Quiet,
    Capture,
    EnPassant,
    PawnPromotion,
    Castle,
}

impl MoveKind {
    pub const ALL: [MoveKind; 5] = [
        MoveKind::Quiet,
        MoveKind::Capture,
        MoveKind::EnPassant,
        MoveKind::PawnPromotion,
        MoveKind::Castle,
    ];
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveKind::Quiet => "quiet",
            MoveKind::Capture => "capture",
            MoveKind::EnPassant => "en-passant",
            MoveKind::PawnPromotion => "promotion",
            MoveKind::Castle => "castle",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for MoveKind {
    type Err = ParseError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "quiet" => Ok(MoveKind::Quiet),
            "capture" => Ok(MoveKind::Capture),
            "en-passant" => Ok(MoveKind::EnPassant),
            "promotion" => Ok(MoveKind::PawnPromotion),
            "castle" => Ok(MoveKind::Castle),
            _ => Err(
                "invalid move kind; options are: quiet, capture, en-passant, promotion, castle",
            ),
        }
    }
}
