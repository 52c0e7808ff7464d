//! Neighborhood moves over visiting orders.
//!
//! Every move picks an ordered pair of distinct positions uniformly at
//! random and returns a new route; the input is never modified.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::AnnealError;

/// Move family used to generate candidate routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Neighborhood {
    /// Exchange the locations at two positions.
    Swap,
    /// Remove the location at `i` and reinsert it at `j`.
    ///
    /// `j` indexes the route *after* removal, so `j == n - 1` appends.
    Relocate,
    /// Reverse the segment between the two positions, inclusive (2-opt).
    #[default]
    Reverse,
}

impl Neighborhood {
    /// All move families, in declaration order.
    pub const ALL: [Neighborhood; 3] = [Self::Swap, Self::Relocate, Self::Reverse];

    /// Generates a random neighbor of `route`.
    ///
    /// Routes shorter than two locations are returned unchanged.
    pub fn generate<R: Rng>(&self, route: &[usize], rng: &mut R) -> Vec<usize> {
        match distinct_pair(route.len(), rng) {
            Some((i, j)) => self.apply(route, i, j),
            None => route.to_vec(),
        }
    }

    /// Applies the move at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn apply(&self, route: &[usize], i: usize, j: usize) -> Vec<usize> {
        let mut next = route.to_vec();
        match self {
            Self::Swap => next.swap(i, j),
            Self::Relocate => {
                let loc = next.remove(i);
                next.insert(j, loc);
            }
            Self::Reverse => {
                let (lo, hi) = if i <= j { (i, j) } else { (j, i) };
                next[lo..=hi].reverse();
            }
        }
        next
    }

    /// Every position pair worth applying on a route of `n` locations.
    ///
    /// Swap and reverse are symmetric in `(i, j)`, so only `i < j` is listed.
    /// Relocate lists every ordered pair with `i != j`.
    pub fn pairs(&self, n: usize) -> Vec<(usize, usize)> {
        match self {
            Self::Swap | Self::Reverse => (0..n)
                .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
                .collect(),
            Self::Relocate => (0..n)
                .flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j)))
                .collect(),
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Relocate => "relocate",
            Self::Reverse => "reverse",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Neighborhood {
    type Err = AnnealError;

    /// Accepts `swap`, `relocate` (alias `insert`) and `reverse`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "swap" => Ok(Self::Swap),
            "relocate" | "insert" => Ok(Self::Relocate),
            "reverse" => Ok(Self::Reverse),
            other => Err(AnnealError::Configuration(format!(
                "unknown neighborhood '{other}', expected swap, relocate or reverse"
            ))),
        }
    }
}

/// Uniform ordered pair of distinct indices in `0..n`, or `None` when `n < 2`.
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n - 1);
    if j >= i {
        j += 1;
    }
    Some((i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tsp::is_permutation;
    use proptest::prelude::*;
    use u_numflow::random::create_rng;

    #[test]
    fn test_swap() {
        let route = vec![0, 1, 2, 3, 4];
        assert_eq!(Neighborhood::Swap.apply(&route, 1, 3), vec![0, 3, 2, 1, 4]);
        assert_eq!(Neighborhood::Swap.apply(&route, 3, 1), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_relocate_forward_uses_post_removal_index() {
        let route = vec![0, 1, 2, 3, 4];
        // Remove 1 -> [0, 2, 3, 4], insert at 3 -> [0, 2, 3, 1, 4]
        assert_eq!(Neighborhood::Relocate.apply(&route, 1, 3), vec![0, 2, 3, 1, 4]);
        // j == n - 1 appends
        assert_eq!(Neighborhood::Relocate.apply(&route, 0, 4), vec![1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_relocate_backward() {
        let route = vec![0, 1, 2, 3, 4];
        assert_eq!(Neighborhood::Relocate.apply(&route, 3, 1), vec![0, 3, 1, 2, 4]);
        assert_eq!(Neighborhood::Relocate.apply(&route, 4, 0), vec![4, 0, 1, 2, 3]);
    }

    #[test]
    fn test_reverse_orders_positions() {
        let route = vec![0, 1, 2, 3, 4, 5];
        assert_eq!(Neighborhood::Reverse.apply(&route, 1, 4), vec![0, 4, 3, 2, 1, 5]);
        assert_eq!(Neighborhood::Reverse.apply(&route, 4, 1), vec![0, 4, 3, 2, 1, 5]);
        assert_eq!(Neighborhood::Reverse.apply(&route, 0, 5), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_generate_leaves_input_untouched() {
        let route = vec![4, 2, 0, 3, 1];
        let mut rng = create_rng(7);
        for nb in Neighborhood::ALL {
            let next = nb.generate(&route, &mut rng);
            assert_eq!(route, vec![4, 2, 0, 3, 1]);
            assert_ne!(next, route, "{nb} should change a 5-element route");
        }
    }

    #[test]
    fn test_generate_two_locations() {
        let mut rng = create_rng(3);
        assert_eq!(Neighborhood::Swap.generate(&[0, 1], &mut rng), vec![1, 0]);
        assert_eq!(Neighborhood::Reverse.generate(&[0, 1], &mut rng), vec![1, 0]);
        assert_eq!(Neighborhood::Relocate.generate(&[0, 1], &mut rng), vec![1, 0]);
    }

    #[test]
    fn test_generate_short_route_unchanged() {
        let mut rng = create_rng(3);
        assert_eq!(Neighborhood::Swap.generate(&[5], &mut rng), vec![5]);
        assert!(Neighborhood::Reverse.generate(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_distinct_pair_covers_all_pairs() {
        let mut rng = create_rng(42);
        let mut seen = [[false; 4]; 4];
        for _ in 0..2000 {
            let (i, j) = distinct_pair(4, &mut rng).unwrap();
            assert_ne!(i, j);
            seen[i][j] = true;
        }
        for (i, row) in seen.iter().enumerate() {
            for (j, &hit) in row.iter().enumerate() {
                assert_eq!(hit, i != j, "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_pairs_enumeration() {
        assert_eq!(
            Neighborhood::Swap.pairs(4),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert_eq!(Neighborhood::Reverse.pairs(4).len(), 6);
        assert_eq!(Neighborhood::Relocate.pairs(4).len(), 12);
        assert!(Neighborhood::Swap.pairs(1).is_empty());
        assert!(Neighborhood::Relocate.pairs(1).is_empty());
    }

    #[test]
    fn test_pairs_reach_every_random_neighbor() {
        let route = vec![3, 0, 4, 1, 2];
        let mut rng = create_rng(11);
        for nb in Neighborhood::ALL {
            let all: Vec<Vec<usize>> = nb
                .pairs(route.len())
                .into_iter()
                .map(|(i, j)| nb.apply(&route, i, j))
                .collect();
            for _ in 0..200 {
                let next = nb.generate(&route, &mut rng);
                assert!(all.contains(&next), "{nb} produced {next:?}");
            }
        }
    }

    #[test]
    fn test_parse_and_display() {
        for nb in Neighborhood::ALL {
            assert_eq!(nb.to_string().parse::<Neighborhood>(), Ok(nb));
        }
        assert_eq!("insert".parse::<Neighborhood>(), Ok(Neighborhood::Relocate));
        assert_eq!(" Reverse ".parse::<Neighborhood>(), Ok(Neighborhood::Reverse));
        assert!(matches!(
            "shuffle".parse::<Neighborhood>(),
            Err(AnnealError::Configuration(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_moves_preserve_permutation(n in 2usize..60, seed in any::<u64>(), steps in 1usize..20) {
            let mut rng = create_rng(seed);
            for nb in Neighborhood::ALL {
                let mut route: Vec<usize> = (0..n).rev().collect();
                for _ in 0..steps {
                    route = nb.generate(&route, &mut rng);
                    prop_assert!(is_permutation(&route, n));
                }
            }
        }
    }
}
