use float_eq::assert_float_eq;
use kasumi::*;

//

struct Capture
{
    images: Vec<MatBuild<f64>>,
}

impl Render<f64> for Capture
{
    type Error = ();

    fn render(&mut self, image: &MatBuild<f64>) -> Result<(), ()>
    {
        self.images.push(image.clone());
        Ok(())
    }
}

struct Broken;

impl Render<f64> for Broken
{
    type Error = &'static str;

    fn render(&mut self, _image: &MatBuild<f64>) -> Result<(), &'static str>
    {
        Err("surface gone")
    }
}

//

#[test]
fn test_visualize_rescales1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let im = MatBuild::new(4, 4).by_fn(|r, c| (r as f64) * 3. - (c as f64) * 0.5 + 10.);

    let mut cap = Capture {images: Vec::new()};
    visualize(&mut cap, &im).unwrap();
    visualize(&mut cap, &im).unwrap();
    assert_eq!(cap.images.len(), 2);

    for seen in &cap.images {
        let mut vmin = f64::INFINITY;
        let mut vmax = f64::NEG_INFINITY;
        for v in seen.as_ref() {
            vmin = vmin.min(*v);
            vmax = vmax.max(*v);
        }
        assert_float_eq!(vmin, 0., abs <= f64::EPSILON);
        assert_float_eq!(vmax, 1., abs <= f64::EPSILON);
    }
}

#[test]
fn test_visualize_propagates_error1()
{
    let im = MatBuild::new(2, 2).by_fn(|r, c| (r + c) as f64);

    assert_eq!(visualize(&mut Broken, &im), Err("surface gone"));
}

#[test]
fn test_gray_bmp_render1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let n = 8;
    let (op_b, _op_h) = build_operators::<f64>(n, 3);

    let im = MatBuild::new(n, n).by_fn(|r, c| {
        if (2.. 6).contains(&r) && (2.. 6).contains(&c) {1.} else {0.}
    });
    let blurred = unvectorize(&op_b.apply(&vectorize(&im)), n, n);

    let path = std::env::temp_dir().join("kasumi_test_blur.bmp");
    let mut render = GrayBmpRender::new(&path);
    visualize(&mut render, &blurred).unwrap();

    assert!(path.is_file());
    let _ = std::fs::remove_file(&path);
}
