/// The kind of a piece, independent of its color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        Self::Pawn,
        Self::Knight,
        Self::Bishop,
        Self::Rook,
        Self::Queen,
        Self::King,
    ];

    /// Promotion choices offered on reaching the back rank, in the order a
    /// pawn-capture promotion is enumerated by move generation.
    pub const PROMOTIONS: [PieceType; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// Material value in pawn units. The king is priceless and never
    /// contributes to material.
    pub const fn material_value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// FEN-style letter, uppercase regardless of color.
    pub const fn as_letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

/// One side of the game.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    /// +1 for White (moves towards increasing row), -1 for Black.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row pawns of this color start on.
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row a pawn of this color promotes on.
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// This color's home back rank.
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// A piece sitting on a square: its kind, its owner, and whether it has ever
/// moved from its original square.
///
/// `has_moved` is used only for two things: castling eligibility (see
/// [`crate::board::Castling`]) and position fingerprints. A promotion always
/// produces a piece with `has_moved` set to `true`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceType,
    color: Color,
    has_moved: bool,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceType) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    pub const fn kind(self) -> PieceType {
        self.kind
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    pub const fn with_has_moved(self, has_moved: bool) -> Self {
        Self { has_moved, ..self }
    }

    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceType::Pawn)
    }

    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceType::King)
    }

    /// FEN-style letter: uppercase for White, lowercase for Black.
    pub fn as_letter(self) -> char {
        if self.color.is_white() {
            self.kind.as_letter()
        } else {
            self.kind.as_letter().to_ascii_lowercase()
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn material_values() {
        assert_eq!(PieceType::Pawn.material_value(), 1);
        assert_eq!(PieceType::Queen.material_value(), 9);
        assert_eq!(PieceType::King.material_value(), 0);
    }

    #[test]
    fn color_flip_is_involution() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn piece_letters() {
        assert_eq!(Piece::new(Color::White, PieceType::Knight).as_letter(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceType::Knight).as_letter(), 'n');
    }

    #[test]
    fn promotion_sets_has_moved() {
        let queen = Piece::new(Color::White, PieceType::Queen).with_has_moved(true);
        assert!(queen.has_moved());
    }
}
