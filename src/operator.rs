//! Linear operator

use num_traits::Float;

/// Linear operator trait
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Expresses a linear operator \\(K: \mathbb{R}^n \to \mathbb{R}^m\\)
/// (or a matrix \\(K \in \mathbb{R}^{m \times n}\\)).
///
/// Implementors are immutable and stateless beyond their construction-time data,
/// so repeated application never requires reconstruction.
pub trait Operator<F: Float>
{
    /// Size of \\(K\\).
    ///
    /// Returns a tuple of \\(m\\) and \\(n\\).
    fn size(&self) -> (usize, usize);

    /// Calculates \\(\alpha K x + \beta y\\).
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be \\(n\\).
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry,
    ///   \\(\alpha K x + \beta y\\) on exit.
    ///   The length of `y` shall be \\(m\\).
    fn op(&self, alpha: F, x: &[F], beta: F, y: &mut[F]);

    /// Calculates \\(\alpha K^T x + \beta y\\).
    ///
    /// * `alpha` is a scalar \\(\alpha\\).
    /// * `x` is a vector \\(x\\).
    ///   The length of `x` shall be \\(m\\).
    /// * `beta` is a scalar \\(\beta\\).
    /// * `y` is a vector \\(y\\) before entry,
    ///   \\(\alpha K^T x + \beta y\\) on exit.
    ///   The length of `y` shall be \\(n\\).
    fn trans_op(&self, alpha: F, x: &[F], beta: F, y: &mut[F]);

    /// Calculates \\(K x\\) into a fresh vector.
    ///
    /// Returns the product.
    /// * `x` is a vector \\(x\\) of length \\(n\\).
    fn apply(&self, x: &[F]) -> Vec<F>
    {
        let (m, _n) = self.size();

        let mut y = vec![F::zero(); m];
        self.op(F::one(), x, F::zero(), &mut y);
        y
    }

    /// Calculates \\(K^T x\\) into a fresh vector.
    ///
    /// Returns the product.
    /// * `x` is a vector \\(x\\) of length \\(m\\).
    fn apply_adjoint(&self, x: &[F]) -> Vec<F>
    {
        let (_m, n) = self.size();

        let mut y = vec![F::zero(); n];
        self.trans_op(F::one(), x, F::zero(), &mut y);
        y
    }
}

//

/// Extracts a row of an [`Operator`] without a dense representation.
///
/// Returns row `i` of \\(K\\) as a vector of length \\(n\\),
/// obtained by taking \\(K^T e_i\\) for the standard basis vector \\(e_i\\).
/// * `op` is the operator \\(K\\).
/// * `i` is the row index, starting at 0. It shall be less than \\(m\\).
pub fn operator_row<F: Float, O: Operator<F>>(op: &O, i: usize) -> Vec<F>
{
    let (m, _n) = op.size();
    assert!(i < m);

    let mut e = vec![F::zero(); m];
    e[i] = F::one();
    op.apply_adjoint(&e)
}
