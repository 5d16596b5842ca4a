use std::fmt;

/// One of the six cube faces a cubemap is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Face {
    /// +Z, looking forward.
    Front,
    /// -Z.
    Back,
    /// -X.
    Left,
    /// +X.
    Right,
    /// +Y.
    Top,
    /// -Y.
    Bottom,
}

impl Face {
    /// All faces in canonical order. Indices match [`Face::index`].
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
    ];

    /// Lowercase role name (`"front"`, `"back"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    /// File name the face must have inside the archive.
    pub fn file_name(self) -> &'static str {
        match self {
            Face::Front => "front.png",
            Face::Back => "back.png",
            Face::Left => "left.png",
            Face::Right => "right.png",
            Face::Top => "top.png",
            Face::Bottom => "bottom.png",
        }
    }

    /// Exact, case-sensitive reverse of [`Face::file_name`].
    pub fn from_file_name(name: &str) -> Option<Face> {
        Face::ALL.into_iter().find(|f| f.file_name() == name)
    }

    /// Position in [`Face::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pixel dimensions of a face (or any bitmap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FaceSize {
    /// Build a size from width and height.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for FaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Decoded face bitmap. Straight (not premultiplied) RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub rgba8: Vec<u8>,
}

impl FaceImage {
    /// Dimensions as a [`FaceSize`].
    pub fn size(&self) -> FaceSize {
        FaceSize::new(self.width, self.height)
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        rgba8_pixel(self.width, self.height, &self.rgba8, x, y)
    }
}

/// RGBA value at `(x, y)` of a row-major RGBA8 buffer, or `None` when out of bounds.
pub(crate) fn rgba8_pixel(
    width: u32,
    height: u32,
    data: &[u8],
    x: u32,
    y: u32,
) -> Option<[u8; 4]> {
    if x >= width || y >= height {
        return None;
    }
    let i = ((y as usize) * (width as usize) + (x as usize)) * 4;
    let px = data.get(i..i + 4)?;
    Some([px[0], px[1], px[2], px[3]])
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
