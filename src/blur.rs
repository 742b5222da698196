//! Averaging-filter (box blur) matrix

use num_traits::Float;
use crate::MatBuild;

//

/// Builds a 1D averaging-filter matrix.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Returns an \\(m \times m\\) symmetric Toeplitz [`MatBuild`]
/// representing a box filter of the given width centered at each index:
/// entry \\((i, j)\\) is \\(1 / width\\) when \\(|i - j| \le halflen\\)
/// with \\(halflen = \lceil (width - 1) / 2 \rceil\\), zero otherwise.
///
/// Rows near the boundary have their window truncated and are NOT
/// renormalized, so their sums fall below 1.
///
/// * `m` is a number of rows and columns.
/// * `width` is the filter width and shall be at least 1.
///   `width` is expected odd; an even width is accepted but makes the
///   half-window asymmetric.
pub fn blur_matrix<F: Float>(m: usize, width: usize) -> MatBuild<F>
{
    assert!(width >= 1);

    if width % 2 == 0 {
        log::warn!("blur width {} is even, the averaging half-window is asymmetric", width);
    }

    let halflen = width / 2; // ceil((width - 1) / 2)
    let w_recip = F::from(width).unwrap().recip();
    let f0 = F::zero();

    MatBuild::new(m, m).by_fn(|r, c| {
        let dist = if r > c {r - c} else {c - r};
        if dist <= halflen {w_recip} else {f0}
    })
}

/// Builds the dense matrix of the separable 2D blur of vectorized images.
///
/// Returns \\(B_{rows} \otimes B_{cols}\\) as [`MatBuild`],
/// blurring the columns and rows of an \\(m \times n\\) image independently
/// with averaging filters of the same width.
/// Materializes the full Kronecker product; for anything but small reference
/// computations, use [`crate::KronOp`] instead.
///
/// * `m` is a number of image rows.
/// * `n` is a number of image columns.
/// * `width` is the filter width, as in [`blur_matrix`].
pub fn blur_matrix_2d<F: Float>(m: usize, n: usize, width: usize) -> MatBuild<F>
{
    let b_cols = blur_matrix(m, width);
    let b_rows = blur_matrix(n, width);

    b_rows.kron(&b_cols)
}

//

#[test]
fn test_blur1()
{
    use float_eq::assert_float_eq;

    let b = blur_matrix::<f64>(5, 3);
    let t = 1. / 3.;
    let b_ref = MatBuild::new(5, 5).iter_rowmaj(&[
        t,  t,  0., 0., 0.,
        t,  t,  t,  0., 0.,
        0., t,  t,  t,  0.,
        0., 0., t,  t,  t,
        0., 0., 0., t,  t,
    ]);
    assert_float_eq!(b.as_ref(), b_ref.as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_blur_symmetric1()
{
    use float_eq::assert_float_eq;

    for (m, width) in [(4, 3), (8, 5), (9, 7)] {
        let b = blur_matrix::<f64>(m, width);
        let bt = b.clone().transpose();
        assert_float_eq!(b.as_ref(), bt.as_ref(), abs_all <= f64::EPSILON);

        // each row holds at most 1 + halflen entries either side of the
        // diagonal, all equal to 1/width
        let halflen = width / 2;
        for r in 0.. m {
            let mut nonzero = 0;
            for c in 0.. m {
                if b[(r, c)] != 0. {
                    nonzero += 1;
                    assert_float_eq!(b[(r, c)], 1. / width as f64, abs <= 1e-12);
                    assert!(if r > c {r - c} else {c - r} <= halflen);
                }
            }
            assert!(nonzero <= 2 * halflen + 1);
        }
    }
}
