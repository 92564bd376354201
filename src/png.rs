use crate::img::RasterImage;
use crc::{CRC_32_ISO_HDLC, Crc};
use miniz_oxide::deflate::{CompressionLevel, compress_to_vec_zlib};
use std::fmt;
use std::str::from_utf8;

pub type Error = Box<dyn std::error::Error>;

pub const STANDARD_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkType {
    data: [u8; 4],
}

impl ChunkType {
    pub const IHDR: ChunkType = ChunkType { data: *b"IHDR" };
    pub const IDAT: ChunkType = ChunkType { data: *b"IDAT" };
    pub const IEND: ChunkType = ChunkType { data: *b"IEND" };

    pub fn bytes(&self) -> [u8; 4] {
        self.data
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match from_utf8(&self.data) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => Err(fmt::Error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chunk {
    length: u32,
    chunk_type: ChunkType,
    data: Vec<u8>,
    crc: u32,
}

impl Chunk {
    pub fn new(chunk_type: ChunkType, data: Vec<u8>) -> Chunk {
        let mut message: Vec<u8> = chunk_type.bytes().to_vec();
        message.extend_from_slice(data.as_slice());

        Self {
            length: data.len() as u32,
            chunk_type,
            data,
            crc: Crc::<u32>::new(&CRC_32_ISO_HDLC).checksum(&message),
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn chunk_type(&self) -> &ChunkType {
        &self.chunk_type
    }

    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    pub fn crc(&self) -> u32 {
        self.crc
    }

    pub fn as_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.length.to_be_bytes().to_vec();
        bytes.extend_from_slice(&self.chunk_type.bytes()[..]);
        bytes.extend_from_slice(self.data());
        bytes.extend_from_slice(&self.crc.to_be_bytes()[..]);
        bytes
    }
}

/// Encode a solid-fill image as a minimal truecolor+alpha PNG: the 8-byte
/// signature, IHDR, a single deflate-compressed IDAT, and IEND.
pub fn encode_img(img: RasterImage) -> Vec<u8> {
    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&img.width.to_be_bytes());
    ihdr.extend_from_slice(&img.height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]); //compression, filter, interlace

    let compressed = compress_to_vec_zlib(&img.scanlines(), CompressionLevel::BestCompression as u8);

    as_bytes(vec![
        Chunk::new(ChunkType::IHDR, ihdr),
        Chunk::new(ChunkType::IDAT, compressed),
        Chunk::new(ChunkType::IEND, vec![]),
    ])
}

pub fn as_bytes(chunks: Vec<Chunk>) -> Vec<u8> {
    STANDARD_HEADER
        .iter()
        .copied()
        .chain(chunks.iter().flat_map(|chunk| chunk.as_bytes()))
        .collect()
}
