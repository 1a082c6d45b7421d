//! Centipawn-ish search scores, with a reserved range for encoding mate
//! distance.

use std::{
    fmt::{Display, Write},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub i32);

impl Score {
    /// Not `i32::MAX` so that negating or adding a small delta never
    /// overflows.
    pub const INF: Self = Self(i32::MAX / 2);

    pub const MATE: i32 = 100_000;
    const MATE_THRESHOLD: i32 = Self::MATE - 1_000;

    pub const fn get(self) -> i32 {
        self.0
    }

    /// The score negamax returns at a node where the side to move has just
    /// been checkmated, `ply` plies from the root. More negative at
    /// shallower plies, so the search prefers the shortest mate it finds
    /// when delivering, and the longest one when suffering.
    pub const fn mated_in(ply: u32) -> Self {
        Self(-Self::MATE + ply as i32)
    }

    pub const fn is_mate(self) -> bool {
        self.0.abs() > Self::MATE_THRESHOLD
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<i32> for Score {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Score {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Score {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = self.0.signum();
        let val = self.0.abs();

        f.write_char(if sign >= 0 { '+' } else { '-' })?;

        if val > Self::MATE_THRESHOLD {
            let plies_to_mate = Self::MATE - val;
            let moves_to_mate = plies_to_mate / 2 + 1;
            write!(f, "M{moves_to_mate}")
        } else {
            write!(f, "{:.2}", val as f64 / 100.0)
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mated_in_is_more_negative_at_shallower_ply() {
        assert!(Score::mated_in(1).get() < Score::mated_in(3).get());
    }

    #[test]
    fn is_mate_detects_mate_scores_only() {
        assert!(Score::mated_in(2).is_mate());
        assert!(!Score(350).is_mate());
    }

    #[test]
    fn display_formats_centipawns() {
        assert_eq!(Score(150).to_string(), "+1.50");
        assert_eq!(Score(-75).to_string(), "-0.75");
    }
}
