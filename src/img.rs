use crate::png::Error;

/// A fixed-size solid-fill RGBA image, the only raster this tool draws.
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub color: [u8; 4],
}

impl RasterImage {
    pub fn new(width: u32, height: u32, color: [u8; 4]) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(format!("Invalid image dimensions: {}x{}", width, height).into());
        }
        Ok(RasterImage {
            width,
            height,
            color,
        })
    }

    /// Raw scanlines as the PNG compressor expects them: each row is one
    /// filter-type byte (0, no filtering) followed by width R,G,B,A pixels.
    pub fn scanlines(&self) -> Vec<u8> {
        let row_len = 1 + self.width as usize * 4;
        let mut buf = Vec::with_capacity(self.height as usize * row_len);
        for _ in 0..self.height {
            buf.push(0);
            for _ in 0..self.width {
                buf.extend_from_slice(&self.color);
            }
        }
        buf
    }
}
