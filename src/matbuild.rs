use std::ops::{Index, IndexMut, Deref};
use num_traits::Float;
use crate::linalg;
use crate::operator::Operator;

//

/// Matrix builder
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Dense matrix struct which owns a `Vec` of data array in column-major
/// and implements [`Operator`].
/// This struct relies on dynamic heap allocation.
///
/// Only intended for the small per-axis factor matrices of a [`crate::KronOp`]
/// and for dense reference computations on small sizes;
/// the large structured operators themselves are never stored this way.
#[derive(Clone)]
pub struct MatBuild<F>
{
    n_row: usize,
    n_col: usize,
    array: Vec<F>,
}

impl<F: Float> MatBuild<F>
{
    /// Creates an instance.
    ///
    /// Returns the [`MatBuild`] instance with zero data.
    /// * `n_row` is a number of rows.
    /// * `n_col` is a number of columns.
    pub fn new(n_row: usize, n_col: usize) -> Self
    {
        MatBuild {
            n_row,
            n_col,
            array: vec![F::zero(); n_row * n_col],
        }
    }

    /// Creates an identity matrix.
    ///
    /// Returns the \\(n \times n\\) identity as [`MatBuild`].
    /// * `n` is a number of rows and columns.
    pub fn eye(n: usize) -> Self
    {
        MatBuild::new(n, n).by_fn(|r, c| {
            if r == c {F::one()} else {F::zero()}
        })
    }

    /// Size of the matrix.
    ///
    /// Returns a tuple of a number of rows and columns.
    pub fn size(&self) -> (usize, usize)
    {
        (self.n_row, self.n_col)
    }

    /// Data by a function.
    ///
    /// * `func` takes a row and a column of the matrix and returns data of each element.
    pub fn set_by_fn<M>(&mut self, mut func: M)
    where M: FnMut(usize, usize) -> F
    {
        for c in 0.. self.n_col {
            for r in 0.. self.n_row {
                self[(r, c)] = func(r, c);
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_by_fn`].
    pub fn by_fn<M>(mut self, func: M) -> Self
    where M: FnMut(usize, usize) -> F
    {
        self.set_by_fn(func);
        self
    }

    /// Data by an iterator in column-major.
    ///
    /// * `iter` iterates matrix data in column-major.
    pub fn set_iter_colmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        let mut i = iter.into_iter();

        for c in 0.. self.n_col {
            for r in 0.. self.n_row {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    break;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_colmaj`].
    pub fn iter_colmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_iter_colmaj(iter);
        self
    }

    /// Data by an iterator in row-major.
    ///
    /// * `iter` iterates matrix data in row-major.
    pub fn set_iter_rowmaj<T, I>(&mut self, iter: T)
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        let mut i = iter.into_iter();

        for r in 0.. self.n_row {
            for c in 0.. self.n_col {
                if let Some(v) = i.next() {
                    self[(r, c)] = *v;
                }
                else {
                    break;
                }
            }
        }
    }
    /// Builder pattern of [`MatBuild::set_iter_rowmaj`].
    pub fn iter_rowmaj<T, I>(mut self, iter: T) -> Self
    where T: IntoIterator<Item=I>, I: Deref<Target=F>
    {
        self.set_iter_rowmaj(iter);
        self
    }

    /// Scales by \\(\alpha\\).
    ///
    /// * `alpha` is a scalar.
    pub fn set_scale(&mut self, alpha: F)
    {
        linalg::scale(alpha, &mut self.array);
    }
    /// Builder pattern of [`MatBuild::set_scale`].
    pub fn scale(mut self, alpha: F) -> Self
    {
        self.set_scale(alpha);
        self
    }

    /// Transposes in place.
    pub fn set_transpose(&mut self)
    {
        let mut array = vec![F::zero(); self.array.len()];
        for c in 0.. self.n_col {
            for r in 0.. self.n_row {
                array[r * self.n_col + c] = self[(r, c)];
            }
        }

        core::mem::swap(&mut self.n_row, &mut self.n_col);
        self.array = array;
    }
    /// Builder pattern of [`MatBuild::set_transpose`].
    ///
    /// Returns a transposed copy when chained after [`Clone::clone`].
    pub fn transpose(mut self) -> Self
    {
        self.set_transpose();
        self
    }

    /// Matrix product.
    ///
    /// Returns \\(S R\\) as a new [`MatBuild`],
    /// where \\(S\\) is `self` and \\(R\\) is `rhs`.
    /// The number of columns of `self` and rows of `rhs` shall agree.
    pub fn matmul(&self, rhs: &MatBuild<F>) -> MatBuild<F>
    {
        let (s_nr, s_nc) = self.size();
        let (r_nr, r_nc) = rhs.size();
        assert_eq!(s_nc, r_nr);

        let mut prod = MatBuild::new(s_nr, r_nc);
        for c in 0.. r_nc {
            let rhs_col = &rhs.array[c * r_nr .. c * r_nr + r_nr];
            let prod_col = &mut prod.array[c * s_nr .. c * s_nr + s_nr];
            linalg::transform_ge(false, s_nr, s_nc, F::one(), &self.array, rhs_col, F::zero(), prod_col);
        }
        prod
    }

    /// Matrix power.
    ///
    /// Returns \\(S^d\\) as a new [`MatBuild`], the identity if `d == 0`.
    /// The matrix shall be square.
    pub fn pow(&self, d: usize) -> MatBuild<F>
    {
        let (nr, nc) = self.size();
        assert_eq!(nr, nc);

        let mut prod = MatBuild::eye(nr);
        for _ in 0.. d {
            prod = prod.matmul(self);
        }
        prod
    }

    /// Kronecker product.
    ///
    /// Returns \\(S \otimes R\\) as a new [`MatBuild`].
    /// Materializes the full product; only use on small factors
    /// (dense reference computation, tests).
    pub fn kron(&self, rhs: &MatBuild<F>) -> MatBuild<F>
    {
        let (s_nr, s_nc) = self.size();
        let (r_nr, r_nc) = rhs.size();

        let mut prod = MatBuild::new(s_nr * r_nr, s_nc * r_nc);
        for sc in 0.. s_nc {
            for sr in 0.. s_nr {
                let v = self[(sr, sc)];
                for rc in 0.. r_nc {
                    for rr in 0.. r_nr {
                        prod[(sr * r_nr + rr, sc * r_nc + rc)] = v * rhs[(rr, rc)];
                    }
                }
            }
        }
        prod
    }

    fn index(&self, (r, c): (usize, usize)) -> usize
    {
        assert!(r < self.n_row);
        assert!(c < self.n_col);

        c * self.n_row + r
    }
}

//

impl<F: Float> Index<(usize, usize)> for MatBuild<F>
{
    type Output = F;
    fn index(&self, index: (usize, usize)) -> &Self::Output
    {
        let i = self.index(index);

        &self.array[i]
    }
}

impl<F: Float> IndexMut<(usize, usize)> for MatBuild<F>
{
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output
    {
        let i = self.index(index);

        &mut self.array[i]
    }
}

//

impl<F: Float> Operator<F> for MatBuild<F>
{
    fn size(&self) -> (usize, usize)
    {
        (self.n_row, self.n_col)
    }

    fn op(&self, alpha: F, x: &[F], beta: F, y: &mut[F])
    {
        if self.n_row > 0 && self.n_col > 0 {
            linalg::transform_ge(false, self.n_row, self.n_col, alpha, &self.array, x, beta, y);
        }
        else {
            linalg::scale(beta, y);
        }
    }

    fn trans_op(&self, alpha: F, x: &[F], beta: F, y: &mut[F])
    {
        if self.n_row > 0 && self.n_col > 0 {
            linalg::transform_ge(true, self.n_row, self.n_col, alpha, &self.array, x, beta, y);
        }
        else {
            linalg::scale(beta, y);
        }
    }
}

//

impl<F: Float> AsRef<[F]> for MatBuild<F>
{
    fn as_ref(&self) -> &[F]
    {
        &self.array
    }
}

impl<F: Float> AsMut<[F]> for MatBuild<F>
{
    fn as_mut(&mut self) -> &mut[F]
    {
        &mut self.array
    }
}

//

impl<F: Float + core::fmt::LowerExp> core::fmt::Debug for MatBuild<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();

        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            for r in 0.. nr {
                if r == 0 {
                    write!(f, "[")?;
                }
                else {
                    write!(f, " ")?;
                }

                for c in 0.. nc {
                    write!(f, " {:.3e}", self[(r, c)])?;
                }

                if r < nr - 1 {
                    writeln!(f)?;
                }
                else {
                    write!(f, " ] ({} x {})", nr, nc)?;
                }
            }
        }

        Ok(())
    }
}

impl<F: Float + core::fmt::LowerExp> core::fmt::Display for MatBuild<F>
{
    fn fmt(&self, f: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error>
    {
        let (nr, nc) = self.size();
        if nr == 0 || nc == 0 {
            write!(f, "[ ]")?;
        }
        else {
            write!(f, "[ {:.3e}", self[(0, 0)])?;
            if nc > 2 {
                write!(f, " ...")?;
            }
            if nc > 1 {
                write!(f, " {:.3e}", self[(0, nc - 1)])?;
            }

            if nr > 2 {
                writeln!(f)?;
                write!(f, "  ...")?;
            }

            if nr > 1 {
                writeln!(f)?;
                write!(f, "  {:.3e}", self[(nr - 1, 0)])?;
                if nc > 2 {
                    write!(f, " ...")?;
                }
                if nc > 1 {
                    write!(f, " {:.3e}", self[(nr - 1, nc - 1)])?;
                }
            }
            write!(f, " ]")?;
        }

        write!(f, " ({} x {})", nr, nc)?;

        Ok(())
    }
}

//

#[test]
fn test_matbuild1()
{
    use float_eq::assert_float_eq;

    let m = MatBuild::<f64>::new(2, 3).iter_rowmaj(&[
        1., 2., 3.,
        4., 5., 6.,
    ]);
    assert_float_eq!(m.as_ref(), [1., 4., 2., 5., 3., 6.].as_ref(), abs_all <= f64::EPSILON);

    let mt = m.clone().transpose();
    assert_eq!(mt.size(), (3, 2));
    assert_float_eq!(mt.as_ref(), [1., 2., 3., 4., 5., 6.].as_ref(), abs_all <= f64::EPSILON);

    let sq = m.matmul(&mt); // [[14, 32], [32, 77]]
    assert_float_eq!(sq.as_ref(), [14., 32., 32., 77.].as_ref(), abs_all <= 1e-12);
}

#[test]
fn test_matbuild_kron1()
{
    use float_eq::assert_float_eq;

    let a = MatBuild::<f64>::new(2, 2).iter_rowmaj(&[
        1., 2.,
        3., 4.,
    ]);
    let b = MatBuild::<f64>::new(1, 2).iter_rowmaj(&[
        5., 6.,
    ]);

    let k = a.kron(&b);
    assert_eq!(k.size(), (2, 4));
    let k_ref = MatBuild::<f64>::new(2, 4).iter_rowmaj(&[
         5.,  6., 10., 12.,
        15., 18., 20., 24.,
    ]);
    assert_float_eq!(k.as_ref(), k_ref.as_ref(), abs_all <= 1e-12);
}
