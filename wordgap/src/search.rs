use crate::positions::Positions;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the position lists are searched. All strategies give the same answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Compare every start with every end
    Naive,
    /// Drop positions that can't pair, then compare the rest
    Pruned,
    /// Pair each start with the next end after it
    #[default]
    Sweep,
}

impl Strategy {
    pub fn search(self, positions: &Positions) -> Option<usize> {
        let Positions { starts, ends } = positions;

        match self {
            Self::Naive => naive(starts, ends),
            Self::Pruned => pruned(starts, ends),
            Self::Sweep => sweep(starts, ends),
        }
    }
}

/// Number of words strictly between two positions.
pub fn distance(start: usize, end: usize) -> usize {
    end - start - 1
}

pub fn naive(starts: &[usize], ends: &[usize]) -> Option<usize> {
    starts
        .iter()
        .flat_map(|&s| ends.iter().filter(move |&&e| s < e).map(move |&e| distance(s, e)))
        .min()
}

pub fn pruned(starts: &[usize], ends: &[usize]) -> Option<usize> {
    let (first_start, last_end) = match (starts.first(), ends.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return None,
    };

    // A start at or after the last end, or an end at or before the first
    // start, is never part of a pair.
    let starts = &starts[..starts.partition_point(|&s| s < last_end)];
    let ends = &ends[ends.partition_point(|&e| e <= first_start)..];

    naive(starts, ends)
}

pub fn sweep(starts: &[usize], ends: &[usize]) -> Option<usize> {
    let mut best = None;

    // Every start has to be visited: the closest pair can sit anywhere, so the
    // first pair found is not necessarily the answer.
    for &start in starts.iter().rev() {
        let next = ends.partition_point(|&e| e <= start);
        let Some(&end) = ends.get(next) else {
            continue;
        };

        let gap = distance(start, end);
        if best.map_or(true, |b| gap < b) {
            best = Some(gap);
        }

        if best == Some(0) {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::positions::record;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;
    use word_stream::tokenize;

    const NUMBERS: &str = "1 2 3 2 1 1 4 2 2 3 4 1 1 5 3 4 1 1 3";
    const SHORTCUT_BUSTER: &str = "1 _ 6 x x 1 x x 6 x 1 x x 6";

    fn search(strategy: Strategy, text: &str, start: &str, end: &str) -> Option<usize> {
        strategy.search(&record(tokenize([text]), start, end, false))
    }

    #[rstest]
    fn numeric_tokens(
        #[values(Strategy::Naive, Strategy::Pruned, Strategy::Sweep)] strategy: Strategy,
    ) {
        assert_eq!(search(strategy, NUMBERS, "2", "4"), Some(1));
        assert_eq!(search(strategy, NUMBERS, "4", "3"), Some(2));
        assert_eq!(search(strategy, NUMBERS, "5", "1"), Some(2));
        assert_eq!(search(strategy, NUMBERS, "3", "5"), Some(3));
    }

    #[rstest]
    fn first_pair_found_is_not_the_closest(
        #[values(Strategy::Naive, Strategy::Pruned, Strategy::Sweep)] strategy: Strategy,
    ) {
        assert_eq!(search(strategy, SHORTCUT_BUSTER, "1", "6"), Some(1));
    }

    #[rstest]
    #[case(&[], &[1, 2])]
    #[case(&[1, 2], &[])]
    #[case(&[5, 9], &[1, 4])]
    #[case(&[3], &[3])]
    fn no_valid_pair(
        #[case] starts: &[usize],
        #[case] ends: &[usize],
        #[values(Strategy::Naive, Strategy::Pruned, Strategy::Sweep)] strategy: Strategy,
    ) {
        let positions = Positions {
            starts: starts.to_vec(),
            ends: ends.to_vec(),
        };

        assert_eq!(strategy.search(&positions), None);
    }

    #[rstest]
    #[case(&[2, 7, 10], &[0, 3, 8, 11], Some(0))]
    #[case(&[0, 5], &[3, 9], Some(2))]
    #[case(&[0, 4, 8], &[0, 4, 8], Some(3))]
    #[case(&[12], &[1, 2, 40], Some(27))]
    fn known_minimum(
        #[case] starts: &[usize],
        #[case] ends: &[usize],
        #[case] expected: Option<usize>,
        #[values(Strategy::Naive, Strategy::Pruned, Strategy::Sweep)] strategy: Strategy,
    ) {
        let positions = Positions {
            starts: starts.to_vec(),
            ends: ends.to_vec(),
        };

        assert_eq!(strategy.search(&positions), expected);
    }

    #[test]
    fn pruning_keeps_every_pairing_position() {
        // 0 and 9 can't pair; 4 and 7 can, and so can 2 and 7
        assert_eq!(pruned(&[2, 4, 9], &[0, 7]), Some(2));
        assert_eq!(pruned(&[2, 4, 9], &[0, 7]), naive(&[2, 4, 9], &[0, 7]));
    }

    #[test]
    fn strategies_agree_on_random_text() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let alphabet = ["a", "b", "c", "d", "--"];

        for _ in 0..500 {
            let len = rng.gen_range(0..40);
            let text = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect::<Vec<_>>()
                .join(" ");
            let start = alphabet[rng.gen_range(0..3)];
            let end = alphabet[rng.gen_range(0..3)];

            let expected = search(Strategy::Naive, &text, start, end);
            for skip_early_ends in [false, true] {
                let positions = record(tokenize([text.as_str()]), start, end, skip_early_ends);
                for strategy in [Strategy::Naive, Strategy::Pruned, Strategy::Sweep] {
                    assert_eq!(
                        strategy.search(&positions),
                        expected,
                        "{strategy:?} on '{text}' for ({start}, {end})"
                    );
                }
            }
        }
    }
}
