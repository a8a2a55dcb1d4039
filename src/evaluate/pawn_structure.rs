use crate::board::color::Color;
use crate::board::square::Square;

use super::weights::PawnStructureWeights;

/// One side's pawns, one rank bitmask per file.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PawnFiles([u8; 8]);

impl PawnFiles {
    #[inline(always)]
    pub fn add(&mut self, square: Square) {
        self.0[square.file() as usize] |= 1 << square.rank();
    }

    #[inline(always)]
    fn on_file(&self, file: i8) -> u32 {
        if (0..8).contains(&file) {
            self.0[file as usize] as u32
        } else {
            0
        }
    }
}

/// Counts of the structural pawn features for one side.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PawnStructure {
    /// Pawns with no friendly pawn on an adjacent file.
    pub isolated: u32,
    /// Pawns beyond the first on each file.
    pub doubled: u32,
    /// Pawns with no enemy pawn ahead of them on their own or an adjacent file.
    pub passed: u32,
    /// Pawns past the middle of the board from their own side.
    pub advanced: u32,
}

impl PawnStructure {
    pub fn analyze(color: Color, own: &PawnFiles, enemy: &PawnFiles) -> Self {
        let mut structure = Self::default();

        for file in 0..8i8 {
            let pawns = own.on_file(file);
            if pawns == 0 {
                continue;
            }

            let count = pawns.count_ones();
            structure.doubled += count - 1;

            if own.on_file(file - 1) == 0 && own.on_file(file + 1) == 0 {
                structure.isolated += count;
            }

            let blockers = enemy.on_file(file - 1) | enemy.on_file(file) | enemy.on_file(file + 1);
            for rank in (0..8u32).filter(|&rank| pawns & (1 << rank) != 0) {
                let ahead = match color {
                    Color::White => blockers >> (rank + 1),
                    Color::Black => blockers & ((1 << rank) - 1),
                };
                if ahead == 0 {
                    structure.passed += 1;
                }

                let is_advanced = match color {
                    Color::White => rank >= 4,
                    Color::Black => rank <= 3,
                };
                if is_advanced {
                    structure.advanced += 1;
                }
            }
        }

        structure
    }

    /// Weighted score in centipawns.
    pub fn score(&self, weights: &PawnStructureWeights) -> i32 {
        self.passed as i32 * weights.passed + self.advanced as i32 * weights.advanced
            - self.isolated as i32 * weights.isolated
            - self.doubled as i32 * weights.doubled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    fn pawns(squares: &[Square]) -> PawnFiles {
        let mut files = PawnFiles::default();
        for &square in squares {
            files.add(square);
        }
        files
    }

    #[test]
    fn test_no_pawns_is_neutral() {
        let structure = PawnStructure::analyze(Color::White, &pawns(&[]), &pawns(&[E7]));
        assert_eq!(PawnStructure::default(), structure);
        assert_eq!(0, structure.score(&PawnStructureWeights::default()));
    }

    #[test]
    fn test_starting_pawns_have_no_features() {
        let white = pawns(&[A2, B2, C2, D2, E2, F2, G2, H2]);
        let black = pawns(&[A7, B7, C7, D7, E7, F7, G7, H7]);
        assert_eq!(
            PawnStructure::default(),
            PawnStructure::analyze(Color::White, &white, &black)
        );
        assert_eq!(
            PawnStructure::default(),
            PawnStructure::analyze(Color::Black, &black, &white)
        );
    }

    #[test]
    fn test_isolated_and_doubled() {
        // a-file pair is doubled and isolated, c/d pair support each other
        let white = pawns(&[A2, A3, C2, D3]);
        let black = pawns(&[A7, C7, D7]);
        let structure = PawnStructure::analyze(Color::White, &white, &black);
        assert_eq!(2, structure.isolated);
        assert_eq!(1, structure.doubled);
        assert_eq!(0, structure.passed);
        assert_eq!(0, structure.advanced);
    }

    #[test]
    fn test_passed_pawn_ignores_enemy_pawns_behind_it() {
        let white = pawns(&[E5]);
        let black = pawns(&[D4, F3, A7]);
        let structure = PawnStructure::analyze(Color::White, &white, &black);
        assert_eq!(1, structure.passed);
        assert_eq!(1, structure.advanced);
        assert_eq!(1, structure.isolated);
    }

    #[test]
    fn test_adjacent_enemy_pawn_ahead_blocks_passage() {
        let white = pawns(&[E5]);
        let black = pawns(&[F6]);
        assert_eq!(0, PawnStructure::analyze(Color::White, &white, &black).passed);
    }

    #[test]
    fn test_black_advances_down_the_board() {
        let black = pawns(&[D3, H7]);
        let white = pawns(&[H2]);
        let structure = PawnStructure::analyze(Color::Black, &black, &white);
        // d3 is past the midline with nothing in front; h7 faces the h2 pawn
        assert_eq!(1, structure.passed);
        assert_eq!(1, structure.advanced);
        assert_eq!(2, structure.isolated);
    }

    #[test]
    fn test_pawn_on_last_rank_does_not_overflow() {
        let white = pawns(&[B8]);
        let black = pawns(&[A1]);
        let structure = PawnStructure::analyze(Color::White, &white, &black);
        assert_eq!(1, structure.passed);
        let structure = PawnStructure::analyze(Color::Black, &black, &white);
        assert_eq!(1, structure.passed);
    }

    #[test]
    fn test_score_weights_each_feature() {
        let structure = PawnStructure {
            isolated: 1,
            doubled: 2,
            passed: 3,
            advanced: 4,
        };
        let weights = PawnStructureWeights {
            isolated: 1,
            doubled: 10,
            passed: 100,
            advanced: 1000,
        };
        assert_eq!(300 + 4000 - 1 - 20, structure.score(&weights));
    }
}
