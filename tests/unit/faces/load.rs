use std::io::Cursor;

use super::*;

fn encode(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn rgba_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    encode(image::DynamicImage::ImageRgba8(img))
}

fn write_all_faces(dir: &Path, size: u32) {
    for face in Face::ALL {
        let px = [face.index() as u8 * 10, 0, 0, 255];
        std::fs::write(dir.join(face.file_name()), rgba_png(size, size, px)).unwrap();
    }
}

#[test]
fn decode_face_keeps_straight_alpha() {
    let bytes = rgba_png(1, 1, [100, 50, 200, 128]);
    let img = decode_face(Face::Front, &bytes).unwrap();
    assert_eq!(img.size(), crate::foundation::core::FaceSize::new(1, 1));
    assert_eq!(img.rgba8, vec![100, 50, 200, 128]);
}

#[test]
fn decode_face_upconverts_rgb_and_gray_to_opaque_rgba() {
    let rgb = image::RgbImage::from_pixel(2, 2, image::Rgb([9, 8, 7]));
    let img = decode_face(Face::Left, &encode(image::DynamicImage::ImageRgb8(rgb))).unwrap();
    assert_eq!(img.pixel(1, 1), Some([9, 8, 7, 255]));

    let gray = image::GrayImage::from_pixel(2, 2, image::Luma([42]));
    let img = decode_face(Face::Top, &encode(image::DynamicImage::ImageLuma8(gray))).unwrap();
    assert_eq!(img.pixel(0, 0), Some([42, 42, 42, 255]));
}

#[test]
fn decode_face_rejects_garbage_and_names_the_face() {
    let err = decode_face(Face::Right, b"not an image").unwrap_err();
    assert!(matches!(err, CubemapError::Decode { face: Face::Right, .. }));
    assert!(err.to_string().contains("right.png"));
}

#[test]
fn load_faces_reads_all_six() {
    let tmp = tempfile::tempdir().unwrap();
    write_all_faces(tmp.path(), 4);
    std::fs::write(tmp.path().join("readme.txt"), b"ignored").unwrap();

    let set = load_faces(tmp.path()).unwrap();
    for face in Face::ALL {
        assert_eq!(set.get(face).pixel(3, 3), Some([face.index() as u8 * 10, 0, 0, 255]));
    }
}

#[test]
fn load_faces_reports_every_missing_face() {
    let tmp = tempfile::tempdir().unwrap();
    write_all_faces(tmp.path(), 4);
    std::fs::remove_file(tmp.path().join("left.png")).unwrap();
    std::fs::remove_file(tmp.path().join("bottom.png")).unwrap();

    let err = load_faces(tmp.path()).unwrap_err();
    match &err {
        CubemapError::MissingFace(faces) => assert_eq!(faces, &vec![Face::Left, Face::Bottom]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("left.png"));
    assert!(err.to_string().contains("bottom.png"));
}

#[test]
fn a_directory_named_like_a_face_counts_as_missing() {
    let tmp = tempfile::tempdir().unwrap();
    write_all_faces(tmp.path(), 4);
    std::fs::remove_file(tmp.path().join("top.png")).unwrap();
    std::fs::create_dir(tmp.path().join("top.png")).unwrap();

    let err = load_faces(tmp.path()).unwrap_err();
    assert!(matches!(err, CubemapError::MissingFace(ref f) if f == &vec![Face::Top]));
}

#[test]
fn load_faces_finds_faces_in_a_nested_folder() {
    let tmp = tempfile::tempdir().unwrap();
    let nested = tmp.path().join("skybox");
    std::fs::create_dir(&nested).unwrap();
    write_all_faces(&nested, 2);

    let set = load_faces(tmp.path()).unwrap();
    assert_eq!(set.common_size().unwrap().width, 2);
}

#[test]
fn corrupt_face_is_a_decode_error() {
    let tmp = tempfile::tempdir().unwrap();
    write_all_faces(tmp.path(), 4);
    std::fs::write(tmp.path().join("back.png"), b"\x89PNG truncated").unwrap();

    let err = load_faces(tmp.path()).unwrap_err();
    assert!(matches!(err, CubemapError::Decode { face: Face::Back, .. }));
}
