use kasumi::*;
use kasumi::linalg::{norm, xor64, XOR64_INIT};

/// Writes a synthetic scene, its separable blur and its Haar coefficients
/// as grayscale bitmaps, then checks that the adjoint Haar transform
/// restores the scene.
fn main() -> anyhow::Result<()>
{
    env_logger::init();

    let n = 64;
    let width = 5;

    // synthetic scene: bright square and a diagonal ramp, plus mild noise
    let mut state = XOR64_INIT;
    let im = MatBuild::new(n, n).by_fn(|r, c| {
        let ramp = (r + c) as f64 / (2 * n) as f64;
        let square = if (n / 4.. n / 2).contains(&r) && (n / 4.. n / 2).contains(&c) {0.6} else {0.};
        ramp + square + 0.05 * xor64::<f64>(&mut state)
    });

    let (op_b, op_h) = build_operators(n, width);
    let (b_rows, _) = op_b.factors();
    log::debug!("blur rows factor {}", b_rows);

    let x = vectorize(&im);
    let blurred = op_b.apply(&x);
    let coefs = op_h.apply(&x);

    visualize(&mut GrayBmpRender::new("scene.bmp"), &im)?;
    visualize(&mut GrayBmpRender::new("blurred.bmp"), &unvectorize(&blurred, n, n))?;
    visualize(&mut GrayBmpRender::new("haar.bmp"), &unvectorize(&coefs, n, n))?;

    let restored = op_h.apply_adjoint(&coefs);
    let mut diff = restored.clone();
    for (d, o) in diff.iter_mut().zip(&x) {
        *d = *d - *o;
    }
    log::info!("restoration residual {:.3e}", norm(&diff));

    Ok(())
}
