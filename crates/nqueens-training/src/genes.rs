//! Gene-level operators used by the evolution loop.
//!
//! - **Initialization**: [`random`] draws every gene uniformly from `[0, cell_count)`
//! - **Mutation**: [`mutate`] rewrites one uniformly chosen gene
//! - **Crossover**: [`crossover`] splices two parents at a single cut point
//!
//! None of these validate genes against the free cells left at decode time. An
//! ordinal that cannot be placed is scored naturally by the fitness function.

use nqueens_engine::Solution;
use rand::Rng;

/// Generates a solution of `len` genes, each uniform in `[0, cell_count)`.
///
/// # Panics
///
/// Panics if `cell_count` is zero and `len` is not.
pub fn random<R>(rng: &mut R, len: usize, cell_count: usize) -> Solution
where
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.random_range(0..cell_count)).collect()
}

/// Replaces one uniformly chosen gene with a new value in `[0, cell_count)`.
///
/// Empty solutions are left as they are.
pub fn mutate<R>(solution: &mut Solution, cell_count: usize, rng: &mut R)
where
    R: Rng + ?Sized,
{
    if solution.is_empty() {
        return;
    }
    let index = rng.random_range(0..solution.len());
    solution.genes_mut()[index] = rng.random_range(0..cell_count);
}

/// Single-point crossover.
///
/// Genes `0..point` come from `a`, genes `point..` from `b`.
///
/// # Panics
///
/// Panics if the parents differ in length or `point` exceeds it.
///
/// # Examples
///
/// ```
/// use nqueens_engine::Solution;
/// use nqueens_training::genes;
///
/// let a = Solution::from(vec![1, 2, 3, 4]);
/// let b = Solution::from(vec![5, 6, 7, 8]);
/// assert_eq!(genes::crossover(&a, &b, 1).genes(), [1, 6, 7, 8]);
/// assert_eq!(genes::crossover(&a, &b, 4), a);
/// ```
#[must_use]
pub fn crossover(a: &Solution, b: &Solution, point: usize) -> Solution {
    assert_eq!(a.len(), b.len());
    assert!(point <= a.len(), "cut point {point} beyond {} genes", a.len());
    a.genes()[..point]
        .iter()
        .chain(&b.genes()[point..])
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use nqueens_engine::SearchSeed;

    use super::*;

    #[test]
    fn test_random_genes_in_range() {
        let mut rng = SearchSeed::new(7).rng();
        for _ in 0..100 {
            let solution = random(&mut rng, 8, 64);
            assert_eq!(solution.len(), 8);
            assert!(solution.genes().iter().all(|gene| *gene < 64));
        }
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = random(&mut SearchSeed::new(1).rng(), 10, 100);
        let b = random(&mut SearchSeed::new(1).rng(), 10, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mutate_changes_at_most_one_gene() {
        let mut rng = SearchSeed::new(3).rng();
        let original = Solution::from(vec![0; 6]);
        for _ in 0..50 {
            let mut mutated = original.clone();
            mutate(&mut mutated, 36, &mut rng);
            assert_eq!(mutated.len(), original.len());
            let changed = std::iter::zip(original.genes(), mutated.genes())
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 1);
            assert!(mutated.genes().iter().all(|gene| *gene < 36));
        }
    }

    #[test]
    fn test_mutate_empty_is_noop() {
        let mut solution = Solution::from(vec![]);
        mutate(&mut solution, 16, &mut SearchSeed::new(0).rng());
        assert!(solution.is_empty());
    }

    #[test]
    fn test_crossover_every_cut_point() {
        let a = Solution::from(vec![10, 11, 12, 13, 14]);
        let b = Solution::from(vec![20, 21, 22, 23, 24]);
        for point in 0..=a.len() {
            let child = crossover(&a, &b, point);
            assert_eq!(child.len(), a.len());
            assert_eq!(child.genes()[..point], a.genes()[..point]);
            assert_eq!(child.genes()[point..], b.genes()[point..]);
        }
    }

    #[test]
    #[should_panic(expected = "cut point")]
    fn test_crossover_rejects_point_past_end() {
        let a = Solution::from(vec![1, 2]);
        let _ = crossover(&a, &a, 3);
    }
}
