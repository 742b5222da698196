//! Rendering surface for visualization

use std::path::PathBuf;
use num_traits::{Float, ToPrimitive};
use crate::{MatBuild, rescale};

//

/// Rendering surface trait
///
/// A [`Render`] is injected wherever an image leaves the numeric core,
/// keeping every other function in this crate free of side effects.
pub trait Render<F: Float>
{
    /// Error type of the surface.
    type Error;

    /// Renders a grayscale image.
    ///
    /// * `image` entries shall lie in `[0, 1]`; out-of-range values may be
    ///   clamped by the surface.
    fn render(&mut self, image: &MatBuild<F>) -> Result<(), Self::Error>;
}

/// Rescales an image and renders it as grayscale.
///
/// Side effect only; any error of the surface propagates unchanged.
///
/// * `render` is a [`Render`] surface.
/// * `im` is an image as [`MatBuild`], in any intensity range
///   ([`rescale`] maps it onto `[0, 1]` first).
pub fn visualize<F: Float, R: Render<F>>(render: &mut R, im: &MatBuild<F>) -> Result<(), R::Error>
{
    render.render(&rescale(im))
}

//

/// Grayscale bitmap file surface
///
/// [`Render`] implementation which writes 8-bit grayscale image files
/// through the `image` crate. The format follows the path extension.
pub struct GrayBmpRender
{
    path: PathBuf,
}

impl GrayBmpRender
{
    /// Creates an instance.
    ///
    /// Returns the [`GrayBmpRender`] instance.
    /// * `path` is the file path to write to.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self
    {
        GrayBmpRender {
            path: path.into(),
        }
    }
}

impl<F: Float> Render<F> for GrayBmpRender
{
    type Error = image::ImageError;

    fn render(&mut self, im: &MatBuild<F>) -> Result<(), Self::Error>
    {
        let (nr, nc) = im.size();

        let mut img = image::GrayImage::new(nc as u32, nr as u32);
        for (x, y, p) in img.enumerate_pixels_mut() {
            let v = im[(y as usize, x as usize)].to_f64().unwrap();
            let v = if v < 0. {0.} else {v};
            let v = if v > 1. {1.} else {v};
            *p = image::Luma([(v * 255.) as u8]);
        }
        img.save(&self.path)
    }
}

//

#[test]
fn test_visualize1()
{
    use float_eq::assert_float_eq;

    struct Capture
    {
        last: Option<MatBuild<f64>>,
    }

    impl Render<f64> for Capture
    {
        type Error = ();

        fn render(&mut self, image: &MatBuild<f64>) -> Result<(), ()>
        {
            self.last = Some(image.clone());
            Ok(())
        }
    }

    let im = MatBuild::<f64>::new(2, 3).by_fn(|r, c| (r * 3 + c) as f64 - 2.);

    let mut cap = Capture {last: None};
    visualize(&mut cap, &im).unwrap();

    let seen = cap.last.unwrap();
    let mut vmin = f64::INFINITY;
    let mut vmax = f64::NEG_INFINITY;
    for v in seen.as_ref() {
        vmin = vmin.min(*v);
        vmax = vmax.max(*v);
    }
    assert_float_eq!(vmin, 0., abs <= f64::EPSILON);
    assert_float_eq!(vmax, 1., abs <= f64::EPSILON);
}
