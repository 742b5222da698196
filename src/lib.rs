/*!
Kasumi ([霞](http://www.decodeunicode.org/en/u+971E) in Japanese) means haze.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate for Rust provides **Kronecker-structured linear operators** for image deblurring experiments:
a separable 2D box-blur and the 2D Haar wavelet transform,
applied to vectorized images without materializing their \\(n^2 \times n^2\\) dense form.

A separable 2D operator on an \\(m \times n\\) image acts on the column-stacked vector
\\({\rm vec}(X)\\) as a Kronecker product \\(A \otimes B\\) of two small per-axis factors,
and \\((A \otimes B)\\,{\rm vec}(X) = {\rm vec}(B X A^T)\\) lets it be applied with
two small matrix products instead of one huge one.

# General usage

1. Build per-axis factor matrices with [`blur_matrix`] and [`haar_matrix`]
   (or any [`MatBuild`] of your own).
1. Wrap a pair of factors into a [`KronOp`],
   or let [`build_operators`] produce the blur/Haar operator pair for an \\(n \times n\\) image.
1. [`vectorize`] an image, drive the [`Operator`] through
   [`Operator::apply`]/[`Operator::apply_adjoint`] (or the in-place
   [`Operator::op`]/[`Operator::trans_op`]), and [`unvectorize`] the result.
1. [`visualize`] intermediate images through any [`Render`] surface;
   [`GrayBmpRender`] writes grayscale bitmap files.

# Examples

Blurring a vectorized 4x4 image and returning to image form:

```
use float_eq::assert_float_eq;
use kasumi::*;

let n = 4;
let (op_b, _op_h) = build_operators::<f64>(n, 3);

let im = MatBuild::new(n, n).by_fn(|r, c| (r * n + c) as f64);
let v = vectorize(&im);

let blurred = op_b.apply(&v);
let im_b = unvectorize(&blurred, n, n);

// an interior entry is the 3x3 window average
assert_float_eq!(im_b[(1, 1)], (im[(1, 0)] + im[(1, 1)] + im[(1, 2)]
                              + im[(0, 0)] + im[(0, 1)] + im[(0, 2)]
                              + im[(2, 0)] + im[(2, 1)] + im[(2, 2)]) / 9., abs <= 1e-12);
```

`kasumi` uses the `log` crate; install any logger to see construction logs.
*/

pub mod linalg;

//

mod matbuild;

pub use matbuild::*;

//

mod operator;

pub use operator::*;

//

mod haar;

pub use haar::*;

//

mod blur;

pub use blur::*;

//

mod kron;

pub use kron::*;

//

mod vectorize;

pub use vectorize::*;

//

mod render;

pub use render::*;
