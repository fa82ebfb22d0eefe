//! Deflate (zlib wrapper) via flate2, matching HTTP `content-encoding: deflate`.

use std::io::{Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use crate::compression::types::{CompressionError, Compressor, Decompressor};

pub struct DeflateCompressor {
    level: Compression,
}

impl DeflateCompressor {
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Compressor for DeflateCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = ZlibEncoder::new(Vec::new(), self.level);
        enc.write_all(input).map_err(|e| CompressionError::process("deflate", e))?;
        let compressed = enc.finish().map_err(|e| CompressionError::process("deflate", e))?;
        out.extend_from_slice(&compressed);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct DeflateDecompressor;

impl Decompressor for DeflateDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut dec = ZlibDecoder::new(input);
        dec.read_to_end(out).map_err(|e| CompressionError::process("deflate", e))?;
        Ok(())
    }
}
