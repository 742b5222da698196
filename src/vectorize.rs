//! Image vectorization and intensity rescaling

use num_traits::Float;
use crate::linalg;
use crate::MatBuild;

//

/// Stacks the columns of an image into a vector.
///
/// Returns the column-major flattening of `im` as a vector of length
/// `rows * cols`: the entries of column 0 first, then column 1, and so on.
/// [`unvectorize`] is the exact inverse.
///
/// * `im` is an image as [`MatBuild`].
pub fn vectorize<F: Float>(im: &MatBuild<F>) -> Vec<F>
{
    let (m, n) = im.size();

    // MatBuild stores column-major, so this is the data array as-is
    let mut v = vec![F::zero(); m * n];
    linalg::copy(im.as_ref(), &mut v);
    v
}

/// Rebuilds an image from its column-stacked vector.
///
/// Returns the `m` \\(\times\\) `n` image whose columns are consecutive
/// segments of `v`. Exact inverse of [`vectorize`].
///
/// * `v` is a vector. The length of `v` shall be `m * n`.
/// * `m` is a number of rows.
/// * `n` is a number of columns.
pub fn unvectorize<F: Float>(v: &[F], m: usize, n: usize) -> MatBuild<F>
{
    assert_eq!(v.len(), m * n);

    MatBuild::new(m, n).iter_colmaj(v)
}

/// Linearly rescales image intensities onto `[0, 1]`.
///
/// Returns a fresh image with the input's `[min, max]` range mapped
/// affinely onto `[0, 1]`. A constant image maps to all zeros.
///
/// * `im` is an image as [`MatBuild`].
pub fn rescale<F: Float>(im: &MatBuild<F>) -> MatBuild<F>
{
    let (m, n) = im.size();

    let mut vmin = F::infinity();
    let mut vmax = F::neg_infinity();
    for v in im.as_ref() {
        vmin = vmin.min(*v);
        vmax = vmax.max(*v);
    }

    let range = vmax - vmin;
    if !(range > F::zero()) {
        return MatBuild::new(m, n);
    }

    MatBuild::new(m, n).by_fn(|r, c| {
        (im[(r, c)] - vmin) / range
    })
}

//

#[test]
fn test_vectorize_roundtrip1()
{
    let im = MatBuild::<f64>::new(3, 4).by_fn(|r, c| (r * 10 + c) as f64);

    let v = vectorize(&im);
    assert_eq!(v.len(), 12);
    // column-stacked: column 0 first
    assert_eq!(&v[0.. 3], &[0., 10., 20.]);
    assert_eq!(&v[3.. 6], &[1., 11., 21.]);

    let im2 = unvectorize(&v, 3, 4);
    assert_eq!(im.as_ref(), im2.as_ref()); // exact, no tolerance
}

#[test]
fn test_rescale1()
{
    use float_eq::assert_float_eq;

    let im = MatBuild::<f64>::new(2, 2).iter_rowmaj(&[
        -1., 0.,
         1., 3.,
    ]);
    let rs = rescale(&im);
    let rs_ref = MatBuild::<f64>::new(2, 2).iter_rowmaj(&[
        0.,   0.25,
        0.5,  1.,
    ]);
    assert_float_eq!(rs.as_ref(), rs_ref.as_ref(), abs_all <= 1e-12);

    // degenerate constant image
    let flat = MatBuild::<f64>::new(2, 2).by_fn(|_, _| 7.);
    let rs = rescale(&flat);
    assert_float_eq!(rs.as_ref(), [0.; 4].as_ref(), abs_all <= f64::EPSILON);
}
