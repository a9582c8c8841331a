//! Property-based tests for LU factorization and triangular solves
//!
//! Covers: factorization invariants with and without pivoting, agreement of
//! the two substitution formulations, and residuals of the full solve.

use math_audio_lu::{
    Diagonal, LuError, Pivoting, lower_solve, lower_solve_deferred, lu_factor, lu_factor_no_pivot,
    lu_solve, upper_solve, upper_solve_deferred,
};
use ndarray::{Array1, Array2, Axis};
use proptest::prelude::*;

fn max_abs(a: &Array2<f64>) -> f64 {
    a.iter().fold(0.0, |m, v| m.max(v.abs()))
}

fn max_abs_vec(a: &Array1<f64>) -> f64 {
    a.iter().fold(0.0, |m, v| m.max(v.abs()))
}

/// Strictly diagonally dominant matrix built from raw entries; every leading
/// principal minor is nonzero
fn diagonally_dominant(n: usize, entries: Vec<f64>) -> Array2<f64> {
    let mut a = Array2::from_shape_vec((n, n), entries).unwrap();
    for i in 0..n {
        let row_sum: f64 = a.row(i).iter().map(|v| v.abs()).sum();
        a[[i, i]] = row_sum + 1.0;
    }
    a
}

fn dominant_system() -> impl Strategy<Value = (Array2<f64>, Array1<f64>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(-10.0f64..10.0, n * n),
            prop::collection::vec(-10.0f64..10.0, n),
        )
            .prop_map(move |(entries, b)| (diagonally_dominant(n, entries), Array1::from(b)))
    })
}

/// Diagonally dominant matrix with its rows shuffled, so elimination in
/// natural order usually picks poor pivots
fn shuffled_system() -> impl Strategy<Value = (Array2<f64>, Array1<f64>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(-10.0f64..10.0, n * n),
            prop::collection::vec(-10.0f64..10.0, n),
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
        )
            .prop_map(move |(entries, b, order)| {
                let a = diagonally_dominant(n, entries).select(Axis(0), &order);
                (a, Array1::from(b))
            })
    })
}

/// Unit lower triangular matrix with bounded multipliers
fn unit_lower_system() -> impl Strategy<Value = (Array2<f64>, Array1<f64>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0f64..1.0, n * n),
            prop::collection::vec(-10.0f64..10.0, n),
        )
            .prop_map(move |(entries, b)| {
                let l = Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
                    std::cmp::Ordering::Greater => entries[i * n + j],
                    std::cmp::Ordering::Equal => 1.0,
                    std::cmp::Ordering::Less => 0.0,
                });
                (l, Array1::from(b))
            })
    })
}

/// Upper triangular matrix with diagonal magnitudes in [1, 5)
fn upper_system() -> impl Strategy<Value = (Array2<f64>, Array1<f64>)> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(-1.0f64..1.0, n * n),
            prop::collection::vec(1.0f64..5.0, n),
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(-10.0f64..10.0, n),
        )
            .prop_map(move |(entries, diag, signs, y)| {
                let u = Array2::from_shape_fn((n, n), |(i, j)| {
                    if j > i {
                        entries[i * n + j]
                    } else if j == i {
                        if signs[i] { diag[i] } else { -diag[i] }
                    } else {
                        0.0
                    }
                });
                (u, Array1::from(y))
            })
    })
}

fn assert_unit_lower(l: &Array2<f64>) -> Result<(), TestCaseError> {
    let n = l.nrows();
    for i in 0..n {
        prop_assert_eq!(l[[i, i]], 1.0);
        for j in (i + 1)..n {
            prop_assert_eq!(l[[i, j]], 0.0);
        }
    }
    Ok(())
}

fn assert_upper(u: &Array2<f64>) -> Result<(), TestCaseError> {
    let n = u.nrows();
    for i in 0..n {
        for j in 0..i {
            prop_assert_eq!(u[[i, j]], 0.0);
        }
    }
    Ok(())
}

// ── Factorization Properties ─────────────────────────────────────────

proptest! {
    /// Without pivoting, A = L U for matrices with nonzero leading minors.
    #[test]
    fn no_pivot_reconstructs((a, _b) in dominant_system()) {
        let (l, u) = lu_factor_no_pivot(&a).unwrap();

        assert_unit_lower(&l)?;
        assert_upper(&u)?;
        let err = max_abs(&(&a - &l.dot(&u)));
        prop_assert!(err <= 1e-12 * (1.0 + max_abs(&a)), "||A - LU|| = {}", err);
    }

    /// With pivoting, A[p, :] = L U and p is a permutation of 0..n.
    #[test]
    fn pivoting_reconstructs((a, _b) in shuffled_system()) {
        let n = a.nrows();
        let factors = lu_factor(&a, Pivoting::Partial).unwrap();

        let mut sorted = factors.permutation().as_slice().to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());

        assert_unit_lower(factors.l())?;
        assert_upper(factors.u())?;
        prop_assert!(factors.l().iter().all(|v| v.abs() <= 1.0));

        let pa = factors.permutation().gather_rows(&a).unwrap();
        let err = max_abs(&(&pa - &factors.reconstruct()));
        prop_assert!(err <= 1e-12 * (1.0 + max_abs(&a)), "||A[p] - LU|| = {}", err);
    }

    /// Disabling pivoting matches the no-pivot factorizer exactly.
    #[test]
    fn pivoting_none_matches_no_pivot((a, _b) in dominant_system()) {
        let factors = lu_factor(&a, Pivoting::None).unwrap();
        let (l, u) = lu_factor_no_pivot(&a).unwrap();

        prop_assert!(factors.permutation().is_identity());
        prop_assert_eq!(factors.l(), &l);
        prop_assert_eq!(factors.u(), &u);
    }

    /// A zero in the leading position always stops the unpivoted path.
    #[test]
    fn zero_leading_pivot_is_fatal((a, _b) in dominant_system()) {
        prop_assume!(a.nrows() >= 2);
        let mut a = a;
        a[[0, 0]] = 0.0;

        prop_assert_eq!(lu_factor_no_pivot(&a), Err(LuError::ZeroPivot { column: 0 }));
    }
}

// ── Triangular Solver Properties ─────────────────────────────────────

proptest! {
    /// Unit forward substitution solves L y = b.
    #[test]
    fn lower_solve_unit_residual((l, b) in unit_lower_system()) {
        let y = lower_solve(&l, &b, Diagonal::Unit).unwrap();

        let err = max_abs_vec(&(&l.dot(&y) - &b));
        prop_assert!(err <= 1e-9 * (1.0 + max_abs_vec(&b)), "||Ly - b|| = {}", err);
    }

    /// Column-oriented and row-oriented forward substitution agree.
    #[test]
    fn lower_solve_variants_agree((l, b) in unit_lower_system()) {
        let unit = lower_solve(&l, &b, Diagonal::Unit).unwrap();
        let explicit = lower_solve(&l, &b, Diagonal::Explicit).unwrap();
        let deferred = lower_solve_deferred(&l, &b).unwrap();

        let scale = 1.0 + max_abs_vec(&unit);
        prop_assert!(max_abs_vec(&(&unit - &deferred)) <= 1e-10 * scale);
        prop_assert!(max_abs_vec(&(&unit - &explicit)) <= 1e-10 * scale);
    }

    /// Back substitution solves U x = y and both formulations agree.
    #[test]
    fn upper_solve_residual((u, y) in upper_system()) {
        let x = upper_solve(&u, &y, Diagonal::Explicit).unwrap();
        let deferred = upper_solve_deferred(&u, &y).unwrap();

        let err = max_abs_vec(&(&u.dot(&x) - &y));
        prop_assert!(err <= 1e-9 * (1.0 + max_abs_vec(&y)), "||Ux - y|| = {}", err);
        prop_assert!(max_abs_vec(&(&x - &deferred)) <= 1e-10 * (1.0 + max_abs_vec(&x)));
    }

    /// Any nonzero above the diagonal is rejected before computing.
    #[test]
    fn lower_solve_rejects_upper_entry((l, b) in unit_lower_system(), v in 0.5f64..2.0) {
        prop_assume!(l.nrows() >= 2);
        let mut l = l;
        l[[0, 1]] = v;

        prop_assert!(matches!(lower_solve(&l, &b, Diagonal::Unit), Err(LuError::NotTriangular(_))));
        prop_assert!(matches!(lower_solve_deferred(&l, &b), Err(LuError::NotTriangular(_))));
    }
}

// ── Solve Properties ─────────────────────────────────────────────────

proptest! {
    /// Well-conditioned systems solve to a residual near machine epsilon.
    #[test]
    fn lu_solve_small_residual((a, b) in shuffled_system()) {
        prop_assume!(max_abs_vec(&b) > 1e-3);
        let a0 = a.clone();
        let b0 = b.clone();

        let solution = lu_solve(&a, &b, Pivoting::Partial).unwrap();

        prop_assert!(solution.relative_residual < 1e-12,
            "relative residual = {}", solution.relative_residual);
        prop_assert_eq!(a, a0);
        prop_assert_eq!(b, b0);
    }

    /// Reusing the factors gives the same answer as the one-shot solve.
    #[test]
    fn factors_solve_matches_lu_solve((a, b) in shuffled_system()) {
        let factors = lu_factor(&a, Pivoting::Partial).unwrap();
        let x = factors.solve(&b).unwrap();
        let solution = lu_solve(&a, &b, Pivoting::Partial).unwrap();

        prop_assert_eq!(x, solution.x);
    }
}
