use super::*;
use crate::foundation::core::FaceSize;

fn sample_canvas() -> CubemapCanvas {
    let mut canvas = CubemapCanvas::transparent(FaceSize::new(4, 3)).unwrap();
    canvas.data[0..4].copy_from_slice(&[255, 0, 0, 255]);
    canvas.data[44..48].copy_from_slice(&[0, 0, 255, 128]);
    canvas
}

#[test]
fn format_follows_extension_with_png_fallback() {
    assert_eq!(
        output_format(Path::new("sky.png"), ImageFormat::Png),
        ImageFormat::Png
    );
    assert_eq!(
        output_format(Path::new("sky.TGA"), ImageFormat::Png),
        ImageFormat::Tga
    );
    assert_eq!(
        output_format(Path::new("sky"), ImageFormat::Png),
        ImageFormat::Png
    );
    assert_eq!(
        output_format(Path::new("sky.unknown"), ImageFormat::Png),
        ImageFormat::Png
    );
}

#[test]
fn writes_png_that_decodes_back_to_the_canvas() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out.png");
    let canvas = sample_canvas();

    let summary = write_canvas(&canvas, &path, &ConvertOpts::default()).unwrap();
    assert_eq!(summary.format, ImageFormat::Png);
    assert_eq!(summary.bytes as u64, std::fs::metadata(&path).unwrap().len());

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (4, 3));
    assert_eq!(back.into_raw(), canvas.data);
}

#[test]
fn creates_missing_parent_dirs_by_default() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("a").join("b").join("out.png");
    write_canvas(&sample_canvas(), &path, &ConvertOpts::default()).unwrap();
    assert!(path.is_file());
}

#[test]
fn missing_parent_dir_is_a_write_error_when_creation_is_off() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nope").join("out.png");
    let opts = ConvertOpts {
        create_output_dir: false,
        ..ConvertOpts::default()
    };
    let err = write_canvas(&sample_canvas(), &path, &opts).unwrap_err();
    assert!(matches!(err, CubemapError::Write { .. }));
    assert!(!path.exists());
}

#[test]
fn unencodable_format_fails_without_touching_the_target() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out.hdr");
    std::fs::write(&path, b"previous").unwrap();

    let err = write_canvas(&sample_canvas(), &path, &ConvertOpts::default()).unwrap_err();
    assert!(matches!(err, CubemapError::Write { .. }));
    assert_eq!(std::fs::read(&path).unwrap(), b"previous");
}

#[test]
fn overwrites_existing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out.png");
    std::fs::write(&path, b"stale").unwrap();

    write_canvas(&sample_canvas(), &path, &ConvertOpts::default()).unwrap();
    assert_eq!(image::open(&path).unwrap().width(), 4);
}

#[test]
fn output_path_that_is_a_directory_is_a_write_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = write_canvas(&sample_canvas(), tmp.path(), &ConvertOpts::default()).unwrap_err();
    assert!(matches!(err, CubemapError::Write { .. }));
}
