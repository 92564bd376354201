use crate::png::Error;

const HEADER_SIZE: usize = 6;
const DIR_ENTRY_SIZE: usize = 16;

/// One 16-byte ICO directory record pointing at an embedded PNG blob.
#[derive(Debug, Clone)]
struct DirEntry {
    width: u8,  //0 means 256
    height: u8, //0 means 256
    size: u32,
    offset: u32,
}

impl DirEntry {
    fn as_bytes(&self) -> [u8; DIR_ENTRY_SIZE] {
        let mut bytes = [0u8; DIR_ENTRY_SIZE];
        bytes[0] = self.width;
        bytes[1] = self.height;
        //bytes[2] color count and bytes[3] reserved stay 0
        bytes[4..6].copy_from_slice(&1u16.to_le_bytes()); //color planes
        bytes[6..8].copy_from_slice(&32u16.to_le_bytes()); //bits per pixel
        bytes[8..12].copy_from_slice(&self.size.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.offset.to_le_bytes());
        bytes
    }
}

/// Pack `(width, height, png bytes)` triples into an ICO container:
/// 6-byte header, one directory record per image, then the PNG blobs in
/// the same order. All multi-byte fields little-endian.
pub fn assemble(images: &[(u32, u32, Vec<u8>)]) -> Result<Vec<u8>, Error> {
    if images.is_empty() {
        return Err("At least one image is required".into());
    }
    if images.len() > u16::MAX as usize {
        return Err(format!("Too many images for one icon: {}", images.len()).into());
    }

    let mut out = Vec::with_capacity(
        HEADER_SIZE
            + DIR_ENTRY_SIZE * images.len()
            + images.iter().map(|(_, _, data)| data.len()).sum::<usize>(),
    );
    out.extend_from_slice(&0u16.to_le_bytes()); //reserved
    out.extend_from_slice(&1u16.to_le_bytes()); //image type: icon
    out.extend_from_slice(&(images.len() as u16).to_le_bytes());

    let mut offset = (HEADER_SIZE + DIR_ENTRY_SIZE * images.len()) as u32;
    for (width, height, data) in images {
        let entry = DirEntry {
            width: side_byte(*width)?,
            height: side_byte(*height)?,
            size: data.len() as u32,
            offset,
        };
        out.extend_from_slice(&entry.as_bytes());
        offset += data.len() as u32;
    }

    for (_, _, data) in images {
        out.extend_from_slice(data);
    }
    Ok(out)
}

/// A directory record stores each side in one byte, with 0 standing for
/// 256. Larger images cannot be described, so they are rejected.
pub fn side_byte(side: u32) -> Result<u8, Error> {
    match side {
        1..=255 => Ok(side as u8),
        256 => Ok(0),
        _ => Err(format!("Icon side {} out of range (1-256)", side).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::img::RasterImage;
    use crate::png;

    fn blue_png(side: u32) -> Vec<u8> {
        png::encode_img(RasterImage::new(side, side, [100, 150, 200, 255]).unwrap())
    }

    #[test]
    fn two_image_directory() {
        let first = blue_png(16);
        let second = blue_png(32);
        let ico = assemble(&[(16, 16, first.clone()), (32, 32, second.clone())]).unwrap();

        assert_eq!(&ico[0..6], &[0, 0, 1, 0, 2, 0]);

        assert_eq!(ico[6], 16);
        assert_eq!(ico[7], 16);
        assert_eq!(&ico[8..12], &[0, 0, 1, 0]);
        assert_eq!(&ico[12..14], &32u16.to_le_bytes());
        assert_eq!(&ico[14..18], &(first.len() as u32).to_le_bytes());
        assert_eq!(&ico[18..22], &38u32.to_le_bytes()); //6 + 16*2

        assert_eq!(ico[22], 32);
        assert_eq!(ico[23], 32);
        let second_offset = 38 + first.len();
        assert_eq!(&ico[34..38], &(second_offset as u32).to_le_bytes());

        assert_eq!(&ico[38..38 + first.len()], &first[..]);
        assert_eq!(&ico[second_offset..], &second[..]);
    }

    #[test]
    fn side_256_encodes_as_zero() {
        let ico = assemble(&[(256, 256, vec![1, 2, 3])]).unwrap();
        assert_eq!(ico[6], 0);
        assert_eq!(ico[7], 0);
        assert_eq!(&ico[22..], &[1, 2, 3]);
    }

    #[test]
    fn rejects_empty_input() {
        assert!(assemble(&[]).is_err());
    }

    #[test]
    fn rejects_oversized_side() {
        assert!(assemble(&[(512, 512, vec![0])]).is_err());
        assert!(assemble(&[(0, 16, vec![0])]).is_err());
    }
}
