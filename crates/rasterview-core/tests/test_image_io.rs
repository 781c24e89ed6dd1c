use image::Rgba;

use rasterview_core::error::RasterError;
use rasterview_core::io::image_io::{load_raster, save_raster};
use rasterview_core::raster::{ImageFormatTag, Raster};

fn make_test_raster() -> Raster {
    let mut raster = Raster::new(4, 4);
    raster.set_pixel(0, 0, Rgba([255, 0, 0, 255]));
    raster.set_pixel(1, 0, Rgba([0, 255, 0, 255]));
    raster.set_pixel(2, 0, Rgba([0, 0, 255, 255]));
    raster.set_pixel(3, 3, Rgba([128, 64, 32, 255]));
    raster
}

#[test]
fn test_png_roundtrip_is_pixel_identical() {
    let raster = make_test_raster();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_raster(&raster, &path).unwrap();
    let loaded = load_raster(&path).unwrap();

    assert_eq!(loaded, raster);
    assert_eq!(loaded.format, Some(ImageFormatTag::Png));
    assert_eq!(loaded.source_path.as_deref(), Some(path.as_path()));
}

#[test]
fn test_png_roundtrip_preserves_alpha() {
    let mut raster = make_test_raster();
    raster.set_pixel(1, 1, Rgba([10, 20, 30, 40]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");

    save_raster(&raster, &path).unwrap();
    let loaded = load_raster(&path).unwrap();
    assert_eq!(loaded.pixel(1, 1).0, [10, 20, 30, 40]);
}

#[test]
fn test_bmp_roundtrip_is_pixel_identical() {
    let raster = make_test_raster();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.bmp");

    save_raster(&raster, &path).unwrap();
    let loaded = load_raster(&path).unwrap();

    assert_eq!(loaded, raster);
    assert_eq!(loaded.format, Some(ImageFormatTag::Bmp));
}

#[test]
fn test_jpeg_save_flattens_alpha() {
    let mut raster = Raster::new(8, 8);
    raster.set_pixel(0, 0, Rgba([200, 100, 50, 128]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.jpg");

    save_raster(&raster, &path).unwrap();
    let loaded = load_raster(&path).unwrap();

    // JPEG is lossy, so only structural properties are checked.
    assert_eq!(loaded.width(), 8);
    assert_eq!(loaded.height(), 8);
    assert!(!loaded.uses_alpha());
    assert_eq!(loaded.format, Some(ImageFormatTag::Jpeg));
}

#[test]
fn test_gif_save_is_rejected() {
    let raster = make_test_raster();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.gif");

    let err = save_raster(&raster, &path).unwrap_err();
    assert!(matches!(err, RasterError::UnsupportedSaveFormat(_)));
    assert!(!path.exists());
}

#[test]
fn test_unknown_extension_save_is_rejected() {
    let raster = make_test_raster();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.webp");

    let err = save_raster(&raster, &path).unwrap_err();
    assert!(matches!(err, RasterError::UnsupportedSaveFormat(_)));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_raster(&dir.path().join("does_not_exist.png")).unwrap_err();
    assert!(matches!(err, RasterError::Image(_) | RasterError::Io(_)));
}

#[test]
fn test_load_garbage_bytes_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.png");
    std::fs::write(&path, b"this is not an image").unwrap();
    let err = load_raster(&path).unwrap_err();
    assert!(matches!(err, RasterError::Image(_)));
}

#[cfg(unix)]
#[test]
fn test_save_into_readonly_dir_reports_not_writable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("locked");
    std::fs::create_dir(&target).unwrap();
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o555)).unwrap();

    let raster = make_test_raster();
    let err = save_raster(&raster, &target.join("out.png")).unwrap_err();
    assert!(matches!(err, RasterError::TargetNotWritable(_)));

    // Restore permissions so tempdir cleanup succeeds.
    std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755)).unwrap();
}
