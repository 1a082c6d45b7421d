use bitflags::bitflags;

use super::{Color, Square};

bitflags! {
    /// Which castling moves are still eligible given the move history of the
    /// game so far.
    ///
    /// This does not account for *temporary* reasons a castle may be
    /// forbidden right now (the king is in check, a square it passes
    /// through is attacked, there's a piece in the way) -- those are
    /// checked during move generation. This only tracks the permanent
    /// precondition: have the relevant king and rook ever moved, and is the
    /// rook still on its home square.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Castling: u8 {
        const WHITE_KINGSIDE  = 0b0001;
        const WHITE_QUEENSIDE = 0b0010;
        const BLACK_KINGSIDE  = 0b0100;
        const BLACK_QUEENSIDE = 0b1000;

        const WHITE = Self::WHITE_KINGSIDE.bits() | Self::WHITE_QUEENSIDE.bits();
        const BLACK = Self::BLACK_KINGSIDE.bits() | Self::BLACK_QUEENSIDE.bits();
    }
}

impl Castling {
    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::White => Self::WHITE,
            Color::Black => Self::BLACK,
        }
    }
}

/// The square the kingside/queenside rook starts on for `color`.
pub const fn kingside_rook_start(color: Color) -> Square {
    Square::new(color.back_rank(), 7).expect("back rank is always in range")
}

pub const fn queenside_rook_start(color: Color) -> Square {
    Square::new(color.back_rank(), 0).expect("back rank is always in range")
}

pub const fn king_start(color: Color) -> Square {
    Square::new(color.back_rank(), 4).expect("back rank is always in range")
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn for_color_splits_by_side() {
        assert_eq!(
            Castling::for_color(Color::White),
            Castling::WHITE_KINGSIDE | Castling::WHITE_QUEENSIDE
        );
        assert_eq!(
            Castling::for_color(Color::Black),
            Castling::BLACK_KINGSIDE | Castling::BLACK_QUEENSIDE
        );
    }

    #[test]
    fn rook_starts() {
        assert_eq!(kingside_rook_start(Color::White), Square::new(0, 7).unwrap());
        assert_eq!(queenside_rook_start(Color::Black), Square::new(7, 0).unwrap());
    }
}
