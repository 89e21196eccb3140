//! k-subset enumeration over an ordered sequence.
//!
//! [`Combinations`] steps a strictly increasing index array through every
//! k-subset of `0..n` in lexicographic order. Each yielded selection is a
//! fresh `Vec`, so no two subsets share backing storage.

/// Iterator over every k-element index selection of `0..n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    fn k(&self) -> usize {
        self.indices.len()
    }

    /// Advances to the next selection; returns false once exhausted.
    fn step(&mut self) -> bool {
        let k = self.k();
        // rightmost position that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.step() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

/// Number of k-subsets of an n-element set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Materialises every k-subset of `items`, each preserving the relative
/// order of the chosen elements.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(binomial(items.len(), k));
    for selection in Combinations::new(items.len(), k) {
        out.push(selection.into_iter().map(|i| items[i].clone()).collect());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_in_lexicographic_index_order() {
        let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
        assert_eq!(combinations(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
        assert!(combinations(&[1, 2, 3], 4).is_empty());
        assert_eq!(combinations::<u8>(&[], 0).len(), 1);
    }

    #[test]
    fn binomial_matches_known_values() {
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(6, 5), 6);
        assert_eq!(binomial(7, 5), 21);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(3, 4), 0);
    }
}
