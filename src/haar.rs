//! Haar transform matrix
//!
//! Follows the recursive definition of the Haar matrix found in
//! <https://www.cis.upenn.edu/~cis515/cis515-20-sl-Haar.pdf> (page 154).

use num_traits::Float;
use crate::MatBuild;

//

/// Builds a discrete Haar transform matrix.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Returns an \\(N \times N\\) [`MatBuild`] where \\(N\\) is `n` rounded up to
/// a power of two, at least 2.
/// The matrix is built recursively from the base
/// \\(H_2 = \left[ \begin{matrix} 1 & 1 \\\\ 1 & -1 \end{matrix} \right]\\) as
/// \\(H_N = \left[ H_{N/2} \otimes \left[ \begin{matrix} 1 \\\\ 1 \end{matrix} \right]
/// \ \middle|\ I_{N/2} \otimes \left[ \begin{matrix} 1 \\\\ -1 \end{matrix} \right] \right]\\).
///
/// * `n` is the requested size.
/// * If `normalized` is `true`, columns are scaled so that the result is
///   orthonormal: \\(H^T H = I\\), and the adjoint inverts the transform.
pub fn haar_matrix<F: Float>(n: usize, normalized: bool) -> MatBuild<F>
{
    let n = n.max(2).next_power_of_two();

    let mut h = haar_unnormalized(n);

    if normalized {
        // one scale factor per resolution level, 2^(-(log2(N)-r)/2) for level r
        let lg = n.trailing_zeros() as usize;
        let f2 = F::one() + F::one();

        let mut d = vec![F::zero(); n];
        d[0] = F::from(n).unwrap().sqrt().recip();
        let mut start = 1;
        for r in 0.. lg {
            let s = f2.powi((lg - r) as i32).sqrt().recip();
            for c in start.. start + (1 << r) {
                d[c] = s;
            }
            start = start + (1 << r);
        }

        for c in 0.. n {
            for r in 0.. n {
                h[(r, c)] = h[(r, c)] * d[c];
            }
        }
    }

    h
}

fn haar_unnormalized<F: Float>(n: usize) -> MatBuild<F>
{
    if n == 2 {
        let seed = [F::one(), F::one(), F::one(), -F::one()];
        return MatBuild::new(2, 2).iter_rowmaj(&seed);
    }

    let half = n / 2;
    let prev = haar_unnormalized::<F>(half);

    let mut h = MatBuild::new(n, n);
    for c in 0.. half {
        // left half: each row of the previous matrix duplicated
        for r in 0.. half {
            h[(2 * r, c)] = prev[(r, c)];
            h[(2 * r + 1, c)] = prev[(r, c)];
        }
        // right half: block-diagonal [1; -1] pattern
        h[(2 * c, half + c)] = F::one();
        h[(2 * c + 1, half + c)] = -F::one();
    }

    h
}

/// Builds the dense matrix of the repeated 2D Haar transform of vectorized images.
///
/// Returns \\(H_{rows}^d \otimes H_{cols}^d\\) as [`MatBuild`],
/// mapping \\({\rm vec}(A)\\) of an \\(m \times n\\) image \\(A\\)
/// to \\({\rm vec}(H_m^d A (H_n^d)^T)\\) with orthonormal Haar factors.
/// Materializes the full Kronecker product; for anything but small reference
/// computations, use [`crate::KronOp`] instead.
///
/// * `m` is a number of image rows, rounded up to a power of two, at least 2.
/// * `n` is a number of image columns, likewise.
/// * `d` is how many times the transform is taken.
pub fn haar_matrix_2d<F: Float>(m: usize, n: usize, d: usize) -> MatBuild<F>
{
    let h_cols = haar_matrix(m, true).pow(d);
    let h_rows = haar_matrix(n, true).pow(d);

    h_rows.kron(&h_cols)
}

//

#[test]
fn test_haar1()
{
    use float_eq::assert_float_eq;

    let h = haar_matrix::<f64>(2, false);
    let h_ref = MatBuild::new(2, 2).iter_rowmaj(&[
        1.,  1.,
        1., -1.,
    ]);
    assert_float_eq!(h.as_ref(), h_ref.as_ref(), abs_all <= f64::EPSILON);

    // size rounds up to the next power of two
    let h = haar_matrix::<f64>(5, false);
    assert_eq!(h.size(), (8, 8));
    let h = haar_matrix::<f64>(1, true);
    assert_eq!(h.size(), (2, 2));
}

#[test]
fn test_haar_orthonormal1()
{
    use float_eq::assert_float_eq;

    for n in [2, 4, 8, 16] {
        let h = haar_matrix::<f64>(n, true);
        let prod = h.clone().transpose().matmul(&h);
        let eye = MatBuild::eye(n);
        assert_float_eq!(prod.as_ref(), eye.as_ref(), abs_all <= 1e-12);
    }
}
