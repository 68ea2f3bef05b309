//! Validates the code examples from README.md compile and behave correctly.

#[test]
fn readme_raw_pixels() {
    use smudge::{add_noise_inplace_strided, invert_inplace_strided, noise};

    let mut buf = vec![0u8; 16 * 2];
    invert_inplace_strided(&mut buf, 3, 2, 16).unwrap();
    assert_eq!(&buf[..4], &0x00FF_FFFFu32.to_ne_bytes());
    assert_eq!(&buf[12..16], &[0, 0, 0, 0]);

    let mut rng = noise::seeded_rng(7);
    add_noise_inplace_strided(&mut buf, 3, 2, 16, &mut rng).unwrap();
    assert_eq!(&buf[12..16], &[0, 0, 0, 0]);
}

#[test]
fn readme_host_bitmap() {
    use smudge::bridge;
    use smudge::{Argb, BitmapFormat, MemoryBitmap};

    let mut bmp = MemoryBitmap::new(1, 1, BitmapFormat::Rgba8888).unwrap();
    bmp.set_pixel(0, 0, Argb::new(0xFF, 0x00, 0x80, 0xFF));
    bridge::invert_color(&mut bmp);
    assert_eq!(bmp.pixel(0, 0), Some(Argb::new(0xFF, 0xFF, 0x7F, 0x00)));
}

#[cfg(feature = "std")]
#[test]
fn readme_clock_seeded_noise() {
    use smudge::{BitmapFormat, MemoryBitmap, bridge, noise};

    let mut rng = noise::clock_seeded_rng();
    let mut bmp = MemoryBitmap::new(8, 8, BitmapFormat::Rgba8888).unwrap();
    bridge::add_noise(&mut bmp, &mut rng);
    assert!(bmp.as_bytes().chunks_exact(4).all(|px| {
        let p = smudge::Argb::from_bytes(px.try_into().unwrap());
        p.alpha() == 0 && p.red() <= 25 && p.green() <= 25 && p.blue() <= 25
    }));
}

#[cfg(feature = "imgref")]
#[test]
fn readme_imgref() {
    use ::imgref::ImgVec;
    use rgb::Rgba;
    use smudge::img;

    let mut image = ImgVec::new(vec![Rgba::new(10u8, 20, 30, 40); 640 * 480], 640, 480);
    img::invert_img(image.as_mut());
    assert_eq!(image.buf()[0], Rgba::new(245, 235, 225, 40));
}
