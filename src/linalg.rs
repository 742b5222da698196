//! `num::Float`-generic vector and dense-matrix primitives.
//!
//! All numeric operations are written in pure Rust over plain slices.
//! Matrix data is stored in column-major order throughout.
//! Shape violations are programming errors and fail by assertion.

use num_traits::Float;

/// Calculates 2-norm (or euclidean norm) of `x`.
///
/// Returns the calculated norm.
pub fn norm<F: Float>(x: &[F]) -> F
{
    let mut sum = F::zero();
    for u in x {
        sum = sum + *u * *u;
    }
    sum.sqrt()
}

/// Copies from a vector to another vector.
///
/// * `x` is a slice to copy.
/// * `y` is a slice being copied to.
///   `x` and `y` shall have the same length.
pub fn copy<F: Float>(x: &[F], y: &mut[F])
{
    assert_eq!(x.len(), y.len());

    for (u, v) in x.iter().zip(y) {
        *v = *u;
    }
}

/// Calculates \\(\alpha x\\).
///
/// * `alpha` is a scalar.
/// * `x` is a vector before entry, \\(\alpha x\\) on exit.
pub fn scale<F: Float>(alpha: F, x: &mut[F])
{
    for u in x {
        *u = alpha * *u;
    }
}

/// Calculates \\(\alpha x + y\\).
///
/// * `alpha` is a scalar.
/// * `x` is a vector.
/// * `y` is a vector before entry, \\(\alpha x + y\\) on exit.
///   `x` and `y` shall have the same length.
pub fn add<F: Float>(alpha: F, x: &[F], y: &mut[F])
{
    assert_eq!(x.len(), y.len());

    for (u, v) in x.iter().zip(y) {
        *v = *v + alpha * *u;
    }
}

/// Calculates \\(\alpha G x + \beta y\\).
///
/// * If `transpose` is `true`, calculates \\(\alpha G^T x + \beta y\\) instead.
/// * `n_row` is a number of rows of \\(G\\).
/// * `n_col` is a number of columns of \\(G\\).
/// * `mat` is a matrix \\(G\\), stored in column-major.
///   The length of `mat` shall be `n_row * n_col`.
/// * `x` is a vector.
///   The length of `x` shall be `n_col` (or `n_row` if `transpose` is `true`).
/// * `y` is a vector before entry, \\(\alpha G x + \beta y\\) on exit.
///   The length of `y` shall be `n_row` (or `n_col` if `transpose` is `true`).
pub fn transform_ge<F: Float>(transpose: bool, n_row: usize, n_col: usize, alpha: F, mat: &[F], x: &[F], beta: F, y: &mut[F])
{
    assert_eq!(mat.len(), n_row * n_col);
    if transpose {
        assert_eq!(x.len(), n_row);
        assert_eq!(y.len(), n_col);
    }
    else {
        assert_eq!(x.len(), n_col);
        assert_eq!(y.len(), n_row);
    }

    for r in 0.. y.len() {
        let mut mat_x = F::zero();
        for c in 0.. x.len() {
            let i = if transpose {r * n_row + c} else {c * n_row + r};
            mat_x = mat_x + mat[i] * x[c];
        }
        y[r] = alpha * mat_x + beta * y[r];
    }
}

//

/// Initial state for [`xor64`].
pub const XOR64_INIT: u64 = 88172645463325252;

/// Xorshift pseudo-random number, uniform in `[0.0, 1.0)`.
///
/// Deterministic given the same `state` sequence; used by tests and demos
/// that need reproducible random vectors.
pub fn xor64<F: Float>(state: &mut u64) -> F
{
    const MAX: f64 = (1_u128 << 64) as f64;
    *state = *state ^ (*state << 7);
    *state = *state ^ (*state >> 9);

    F::from(*state as f64 / MAX).unwrap()
}

//

#[test]
fn test_transform_ge1()
{
    use float_eq::assert_float_eq;

    let mat = &[ // column-major
        1., 4.,
        2., 5.,
        3., 6.,
    ];
    let x = &[1., -1., 2.];
    let y = &mut[1., 1.];

    transform_ge(false, 2, 3, 2., mat, x, 1., y);
    assert_float_eq!(y.as_ref(), [11., 23.].as_ref(), abs_all <= 1e-12);

    let xt = &[1., -1.];
    let yt = &mut[0.; 3];
    transform_ge(true, 2, 3, 1., mat, xt, 0., yt);
    assert_float_eq!(yt.as_ref(), [-3., -3., -3.].as_ref(), abs_all <= 1e-12);
}
