//! Test-only helpers shared across `chess_core` and `chess_engine`.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Asserts two collections contain the same elements, ignoring order.
///
/// Move lists are generated in an unspecified order (see move generation),
/// so tests that assert on "the set of legal moves" need this instead of
/// `assert_eq!` on the raw `Vec`/`ArrayVec`.
pub fn assert_in_any_order<T>(actual: impl IntoIterator<Item = T>, expected: impl IntoIterator<Item = T>)
where
    T: Eq + Hash + Debug,
{
    let actual: HashSet<T> = actual.into_iter().collect();
    let expected: HashSet<T> = expected.into_iter().collect();

    let missing: Vec<&T> = expected.difference(&actual).collect();
    let extra: Vec<&T> = actual.difference(&expected).collect();

    assert!(
        missing.is_empty() && extra.is_empty(),
        "sets differ: missing {missing:?}, unexpected {extra:?}"
    );
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn passes_when_sets_match_regardless_of_order() {
        assert_in_any_order(vec![3, 1, 2], vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "sets differ")]
    fn fails_when_sets_differ() {
        assert_in_any_order(vec![1, 2], vec![1, 2, 3]);
    }
}
