use std::fmt;

use log::info;

/// Number of ways to pick `k` items out of `n`, by Pascal's rule
///
/// Picking more items than there are yields 0.
pub fn possible_comb(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }
    possible_comb(n - 1, k) + possible_comb(n - 1, k - 1)
}

/// Whether `value` reads the same forwards and backwards, compared per `char`
pub fn palindrome(value: &str) -> bool {
    fn mirrored(chars: &[char]) -> bool {
        match chars {
            [] | [_] => true,
            [first, middle @ .., last] => first == last && mirrored(middle),
        }
    }

    let chars: Vec<char> = value.chars().collect();
    mirrored(&chars)
}

/// A single disk moved between two poles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move<'a> {
    pub disk: usize,
    pub from: &'a str,
    pub to: &'a str,
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Moved disk #{} from pole {} to pole {}", self.disk, self.from, self.to)
    }
}

/// Solves the Tower of Hanoi for `n` disks, returning every move in order
///
/// Disks are numbered from 0 (smallest). Moving `n` disks always takes
/// `2^n - 1` moves.
///
/// ```
/// use classics::algorithms::move_tower;
///
/// let moves = move_tower(3, "A", "B", "C");
/// assert_eq!(moves.len(), 7);
/// assert_eq!(moves[0].to_string(), "Moved disk #0 from pole A to pole B");
/// ```
pub fn move_tower<'a>(n: usize, src: &'a str, dst: &'a str, tmp: &'a str) -> Vec<Move<'a>> {
    fn step<'a>(n: usize, src: &'a str, dst: &'a str, tmp: &'a str, moves: &mut Vec<Move<'a>>) {
        if n == 0 {
            return;
        }
        step(n - 1, src, tmp, dst, moves);
        let m = Move {
            disk: n - 1,
            from: src,
            to: dst,
        };
        info!(target: "move_tower", "{m}");
        moves.push(m);
        step(n - 1, tmp, dst, src, moves);
    }

    let mut moves = Vec::new();
    step(n, src, dst, tmp, &mut moves);
    moves
}

/// Sorts by splitting around the median of the first, middle and last items
pub fn quick_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let pivot = median_of_three(&items[0], &items[items.len() / 2], &items[items.len() - 1]).clone();

    let below: Vec<T> = items.iter().filter(|x| **x < pivot).cloned().collect();
    let above: Vec<T> = items.iter().filter(|x| **x > pivot).cloned().collect();

    let mut sorted = quick_sort(&below);
    sorted.extend(items.iter().filter(|x| **x == pivot).cloned());
    sorted.extend(quick_sort(&above));
    sorted
}

fn median_of_three<'a, T: PartialOrd>(a: &'a T, b: &'a T, c: &'a T) -> &'a T {
    if (a <= b && b <= c) || (c <= b && b <= a) {
        b
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        a
    } else {
        c
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn combinations() {
        assert_eq!(possible_comb(5, 0), 1);
        assert_eq!(possible_comb(5, 5), 1);
        assert_eq!(possible_comb(5, 2), 10);
        assert_eq!(possible_comb(10, 3), 120);
        assert_eq!(possible_comb(3, 4), 0);
    }

    #[test]
    fn palindromes() {
        assert!(palindrome(""));
        assert!(palindrome("a"));
        assert!(palindrome("abba"));
        assert!(palindrome("racecar"));
        assert!(palindrome("été"));
        assert!(!palindrome("ab"));
        assert!(!palindrome("abca"));
    }

    #[test]
    fn hanoi() {
        let moves = move_tower(3, "A", "B", "C");
        let expected = [
            (0, "A", "B"),
            (1, "A", "C"),
            (0, "B", "C"),
            (2, "A", "B"),
            (0, "C", "A"),
            (1, "C", "B"),
            (0, "A", "B"),
        ];
        assert_eq!(moves.len(), expected.len());
        for (m, (disk, from, to)) in moves.iter().zip(expected) {
            assert_eq!(m, &Move { disk, from, to });
        }

        assert_eq!(move_tower(7, "A", "B", "C").len(), 127);
        assert!(move_tower(0, "A", "B", "C").is_empty());
    }

    #[test]
    fn hanoi_never_stacks_bigger_on_smaller() {
        let moves = move_tower(6, "A", "B", "C");
        let mut poles: [Vec<usize>; 3] = [(0..6).rev().collect(), vec![], vec![]];
        let idx = |p: &str| match p {
            "A" => 0,
            "B" => 1,
            _ => 2,
        };

        for m in &moves {
            let disk = poles[idx(m.from)].pop().unwrap();
            assert_eq!(disk, m.disk);
            if let Some(top) = poles[idx(m.to)].last() {
                assert!(*top > disk, "{m}");
            }
            poles[idx(m.to)].push(disk);
        }
        assert_eq!(poles[1], (0..6).rev().collect::<Vec<_>>());
    }

    #[test]
    fn sorting() {
        assert_eq!(quick_sort::<i32>(&[]), vec![]);
        assert_eq!(quick_sort(&[1]), vec![1]);
        assert_eq!(quick_sort(&[3, 1, 2]), vec![1, 2, 3]);
        assert_eq!(
            quick_sort(&[5, 3, 9, 1, 3, 7, 0, 5, 5, -2]),
            vec![-2, 0, 1, 3, 3, 5, 5, 5, 7, 9]
        );
        assert_eq!(quick_sort(&["pear", "apple", "fig"]), vec!["apple", "fig", "pear"]);
        assert_eq!(quick_sort(&[2.5, -1.0, 2.5]), vec![-1.0, 2.5, 2.5]);
    }
}
