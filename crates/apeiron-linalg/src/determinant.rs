//! Determinants by permutation expansion.
//!
//! Dispatch order: triangular fast path, closed forms for sizes 1-3
//! (Rule of Sarrus at 3), then the generalized Leibniz formula
//! `Σ_σ sign(σ) · ∏ᵢ M[σ(i), i]`. The expansion visits all n!
//! permutations; this factorial cost is a hard ceiling of the algorithm,
//! not something the kernel works around — callers must bound the input
//! size. `determinant_parallel` spreads the same sum across rayon workers
//! without changing its semantics.

use rayon::prelude::*;
use smallvec::SmallVec;

use apeiron_rings::{CommutativeRing, NumericError, Result, Ring};

use crate::matrix::Matrix;

/// Permutation scratch kept inline for every realistic matrix size.
type Perm = SmallVec<[usize; 12]>;

/// Largest size whose permutation space is rank-addressable in a `u64`.
const MAX_PARALLEL_SIZE: usize = 20;

impl<R: Ring> Matrix<R> {
    /// Computes the determinant.
    ///
    /// Triangular matrices short-circuit to the product of their
    /// diagonal; sizes above 3 pay the factorial-time Leibniz expansion.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the matrix is not square.
    pub fn determinant(&self) -> Result<R> {
        self.check_square()?;
        if self.is_triangular() {
            return Ok(self.diagonal_product());
        }
        match self.row_size() {
            1 => Ok(self.at(0, 0).clone()),
            2 => Ok(self.det2()),
            3 => Ok(self.det3()),
            _ => Ok(self.leibniz()),
        }
    }

    /// Determinant with the Leibniz sum spread across rayon workers.
    ///
    /// Permutations are addressed by Lehmer rank and their signs computed
    /// from inversion counts, so each worker evaluates an independent
    /// slice of the sum; the reduction is a commutative-associative ring
    /// sum and safe to reorder.
    ///
    /// # Errors
    ///
    /// `InvalidState` if the matrix is not square; `InvalidArgument` for
    /// sizes above 20, whose permutation ranks exceed `u64` (and whose
    /// expansion could never finish regardless).
    pub fn determinant_parallel(&self) -> Result<R>
    where
        R: CommutativeRing + Send + Sync,
    {
        self.check_square()?;
        if self.is_triangular() {
            return Ok(self.diagonal_product());
        }
        let n = self.row_size();
        if n <= 3 {
            return self.determinant();
        }
        if n > MAX_PARALLEL_SIZE {
            return Err(NumericError::argument(format!(
                "parallel expansion supports sizes up to {MAX_PARALLEL_SIZE}, got {n}"
            )));
        }

        let total = factorial(n);
        let det = (0..total)
            .into_par_iter()
            .map(|rank| {
                let (perm, inversions) = permutation_by_rank(n, rank);
                let term = self.permutation_term(&perm);
                if inversions % 2 == 0 {
                    term
                } else {
                    -term
                }
            })
            .reduce(R::zero, |a, b| a + b);
        Ok(det)
    }

    fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(NumericError::state(format!(
                "determinant requires a square matrix, got {}x{}",
                self.row_size(),
                self.column_size()
            )))
        }
    }

    fn diagonal_product(&self) -> R {
        (0..self.row_size()).fold(R::one(), |acc, i| acc * self.at(i, i).clone())
    }

    fn det2(&self) -> R {
        self.at(0, 0).clone() * self.at(1, 1).clone()
            - self.at(0, 1).clone() * self.at(1, 0).clone()
    }

    /// Rule of Sarrus: forward diagonals minus backward diagonals.
    fn det3(&self) -> R {
        let forward = self.at(0, 0).clone() * self.at(1, 1).clone() * self.at(2, 2).clone()
            + self.at(0, 1).clone() * self.at(1, 2).clone() * self.at(2, 0).clone()
            + self.at(0, 2).clone() * self.at(1, 0).clone() * self.at(2, 1).clone();
        let backward = self.at(0, 2).clone() * self.at(1, 1).clone() * self.at(2, 0).clone()
            + self.at(0, 0).clone() * self.at(1, 2).clone() * self.at(2, 1).clone()
            + self.at(0, 1).clone() * self.at(1, 0).clone() * self.at(2, 2).clone();
        forward - backward
    }

    /// Sequential Leibniz expansion via Heap's algorithm.
    ///
    /// Heap's enumeration reaches each next permutation by a single
    /// transposition, so the permutation sign flips with every step.
    fn leibniz(&self) -> R {
        let n = self.row_size();
        let mut perm: Perm = (0..n).collect();
        let mut counters: Perm = SmallVec::from_elem(0, n);

        let mut acc = self.permutation_term(&perm);
        let mut negative = false;
        let mut i = 1;
        while i < n {
            if counters[i] < i {
                if i % 2 == 0 {
                    perm.swap(0, i);
                } else {
                    perm.swap(counters[i], i);
                }
                negative = !negative;
                let term = self.permutation_term(&perm);
                acc = if negative { acc - term } else { acc + term };
                counters[i] += 1;
                i = 1;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }
        acc
    }

    /// `∏ᵢ M[σ(i), i]` for a 0-based permutation σ.
    fn permutation_term(&self, perm: &[usize]) -> R {
        perm.iter()
            .enumerate()
            .fold(R::one(), |acc, (col, &row)| acc * self.at(row, col).clone())
    }
}

fn factorial(n: usize) -> u64 {
    (2..=n as u64).product()
}

/// Decodes the permutation with the given Lehmer rank, together with its
/// inversion count (the sum of the Lehmer digits — each digit counts the
/// pairs inverted by choosing that element).
fn permutation_by_rank(n: usize, rank: u64) -> (Perm, u64) {
    let mut digits: Perm = SmallVec::with_capacity(n);
    let mut rest = rank;
    for base in 1..=n as u64 {
        #[allow(clippy::cast_possible_truncation)]
        digits.push((rest % base) as usize);
        rest /= base;
    }
    digits.reverse();

    let mut pool: Perm = (0..n).collect();
    let mut perm: Perm = SmallVec::with_capacity(n);
    let mut inversions = 0u64;
    for &d in &digits {
        inversions += d as u64;
        perm.push(pool.remove(d));
    }
    (perm, inversions)
}
