//! Fast Kronecker-vector product and separable 2D operators

use num_traits::Float;
use crate::linalg;
use crate::{MatBuild, Operator, blur_matrix, haar_matrix};

//

/// Calculates \\(\alpha (A \otimes B) x + \beta y\\) without materializing \\(A \otimes B\\).
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Reshapes `x` column-major into \\(V\\) with `cols(B)` rows and `cols(A)` columns,
/// forms \\(W = B V\\) column by column,
/// and accumulates the column-wise Kronecker sum
/// \\(y_{[i_a \cdot rows(B) ..]} \mathrel{+}= \alpha A_{(i_a, j)} W_{(\cdot, j)}\\),
/// which is \\(\alpha\\,{\rm vec}(W A^T) + \beta y\\).
/// Peak scratch memory is `rows(B) * cols(A)`; the
/// `rows(A)*rows(B)` \\(\times\\) `cols(A)*cols(B)` product matrix never exists.
///
/// * `a` is a matrix \\(A\\).
/// * `b` is a matrix \\(B\\).
/// * `alpha` is a scalar \\(\alpha\\).
/// * `x` is a vector \\(x\\).
///   The length of `x` shall be `cols(A) * cols(B)`.
/// * `beta` is a scalar \\(\beta\\).
/// * `y` is a vector \\(y\\) before entry,
///   \\(\alpha (A \otimes B) x + \beta y\\) on exit.
///   The length of `y` shall be `rows(A) * rows(B)`.
pub fn transform_kron<F: Float>(a: &MatBuild<F>, b: &MatBuild<F>, alpha: F, x: &[F], beta: F, y: &mut[F])
{
    let (a_nr, a_nc) = a.size();
    let (b_nr, b_nc) = b.size();
    assert_eq!(x.len(), a_nc * b_nc);
    assert_eq!(y.len(), a_nr * b_nr);

    let f0 = F::zero();
    let f1 = F::one();

    // W = B V, where V is x reshaped column-major
    let mut w = vec![f0; b_nr * a_nc];
    for c in 0.. a_nc {
        let x_col = &x[c * b_nc .. c * b_nc + b_nc];
        let w_col = &mut w[c * b_nr .. c * b_nr + b_nr];
        linalg::transform_ge(false, b_nr, b_nc, f1, b.as_ref(), x_col, f0, w_col);
    }

    // y = alpha vec(W A^T) + beta y, one rows(B)-block per row of A
    for ra in 0.. a_nr {
        let y_blk = &mut y[ra * b_nr .. ra * b_nr + b_nr];
        linalg::scale(beta, y_blk);
        for c in 0.. a_nc {
            let w_col = &w[c * b_nr .. c * b_nr + b_nr];
            linalg::add(alpha * a[(ra, c)], w_col, y_blk);
        }
    }
}

/// Calculates \\((A \otimes B) x\\) into a fresh vector.
///
/// Returns the product of length `rows(A) * rows(B)`.
/// See [`transform_kron`].
pub fn kron_vec_prod<F: Float>(a: &MatBuild<F>, b: &MatBuild<F>, x: &[F]) -> Vec<F>
{
    let (a_nr, _) = a.size();
    let (b_nr, _) = b.size();

    let mut y = vec![F::zero(); a_nr * b_nr];
    transform_kron(a, b, F::one(), x, F::zero(), &mut y);
    y
}

//

/// Separable 2D operator
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Operator struct which owns a pair of per-axis factor matrices and
/// implements [`Operator`] as their Kronecker product \\(A \otimes B\\),
/// applied through [`transform_kron`].
/// Transposed copies of the factors are taken once at construction and
/// drive [`Operator::trans_op`].
#[derive(Clone)]
pub struct KronOp<F>
{
    a: MatBuild<F>,
    b: MatBuild<F>,
    a_t: MatBuild<F>,
    b_t: MatBuild<F>,
}

impl<F: Float> KronOp<F>
{
    /// Creates an instance.
    ///
    /// Returns the [`KronOp`] instance expressing \\(A \otimes B\\).
    /// * `a` is the rows factor \\(A\\).
    /// * `b` is the columns factor \\(B\\).
    pub fn new(a: MatBuild<F>, b: MatBuild<F>) -> Self
    {
        let a_t = a.clone().transpose();
        let b_t = b.clone().transpose();

        KronOp {
            a, b, a_t, b_t,
        }
    }

    /// Factor matrices.
    ///
    /// Returns references to \\(A\\) and \\(B\\).
    pub fn factors(&self) -> (&MatBuild<F>, &MatBuild<F>)
    {
        (&self.a, &self.b)
    }
}

impl<F: Float> Operator<F> for KronOp<F>
{
    fn size(&self) -> (usize, usize)
    {
        let (a_nr, a_nc) = self.a.size();
        let (b_nr, b_nc) = self.b.size();

        (a_nr * b_nr, a_nc * b_nc)
    }

    fn op(&self, alpha: F, x: &[F], beta: F, y: &mut[F])
    {
        transform_kron(&self.a, &self.b, alpha, x, beta, y);
    }

    fn trans_op(&self, alpha: F, x: &[F], beta: F, y: &mut[F])
    {
        transform_kron(&self.a_t, &self.b_t, alpha, x, beta, y);
    }
}

//

/// Builds the blur and Haar transform operator pair for square images.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Returns `(B, H)` where
/// `B` applies the separable 2D blur \\(B_{rows} \otimes B_{cols}\\)
/// (symmetric factors, so its adjoint equals the forward application), and
/// `H` applies the 2D orthonormal Haar transform \\(H_n \otimes H_n\\)
/// (orthonormal, so its adjoint inverts it).
///
/// * `n` is the image size and shall be a power of two for both operators
///   to act on vectors of length \\(n^2\\)
///   ([`haar_matrix`] rounds its size up otherwise).
/// * `blur_width` is the averaging filter width, as in [`blur_matrix`].
pub fn build_operators<F: Float>(n: usize, blur_width: usize) -> (KronOp<F>, KronOp<F>)
{
    let b_rows = blur_matrix(n, blur_width);
    let b_cols = blur_matrix(n, blur_width);
    let op_b = KronOp::new(b_rows, b_cols);

    let hn = haar_matrix(n, true);
    let op_h = KronOp::new(hn.clone(), hn);

    log::debug!("blur operator size {:?}, haar operator size {:?}", op_b.size(), op_h.size());

    (op_b, op_h)
}

//

#[test]
fn test_kron_vec_prod1()
{
    use float_eq::assert_float_eq;
    use crate::linalg::{xor64, XOR64_INIT};

    let mut state = XOR64_INIT;

    for n in [1, 2, 4, 8] {
        let a = MatBuild::<f64>::new(n, n).by_fn(|_, _| xor64(&mut state));
        let b = MatBuild::<f64>::new(n, n).by_fn(|_, _| xor64(&mut state));
        let x: Vec<f64> = (0.. n * n).map(|_| xor64(&mut state)).collect();

        let y = kron_vec_prod(&a, &b, &x);
        let y_ref = a.kron(&b).apply(&x);
        assert_float_eq!(y, y_ref, abs_all <= 1e-12);
    }
}

#[test]
fn test_kron_vec_prod_rect1()
{
    use float_eq::assert_float_eq;
    use crate::linalg::{xor64, XOR64_INIT};

    let mut state = XOR64_INIT;

    // non-square factors of unequal shapes
    let a = MatBuild::<f64>::new(3, 2).by_fn(|_, _| xor64(&mut state));
    let b = MatBuild::<f64>::new(2, 4).by_fn(|_, _| xor64(&mut state));
    let x: Vec<f64> = (0.. 2 * 4).map(|_| xor64(&mut state)).collect();

    let y = kron_vec_prod(&a, &b, &x);
    assert_eq!(y.len(), 3 * 2);
    let y_ref = a.kron(&b).apply(&x);
    assert_float_eq!(y, y_ref, abs_all <= 1e-12);

    // alpha/beta accumulation form
    let mut y2 = vec![1.; 3 * 2];
    transform_kron(&a, &b, 2., &x, -1., &mut y2);
    for (v, r) in y2.iter().zip(&y_ref) {
        assert_float_eq!(*v, 2. * *r - 1., abs <= 1e-12);
    }
}

#[test]
fn test_kron_trans_op1()
{
    use float_eq::assert_float_eq;
    use crate::linalg::{xor64, XOR64_INIT};

    let mut state = XOR64_INIT;

    let a = MatBuild::<f64>::new(3, 2).by_fn(|_, _| xor64(&mut state));
    let b = MatBuild::<f64>::new(2, 4).by_fn(|_, _| xor64(&mut state));
    let x: Vec<f64> = (0.. 3 * 2).map(|_| xor64(&mut state)).collect();

    let op = KronOp::new(a.clone(), b.clone());
    let y = op.apply_adjoint(&x);
    let y_ref = a.kron(&b).apply_adjoint(&x);
    assert_float_eq!(y, y_ref, abs_all <= 1e-12);
}
