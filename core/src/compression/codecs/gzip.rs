//! Gzip via flate2.

use std::io::{Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::compression::types::{CompressionError, Compressor, Decompressor};

pub struct GzipCompressor {
    level: Compression,
}

impl GzipCompressor {
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=9 => Compression::new(level),
            _ => Compression::default(),
        };
        Self { level }
    }
}

impl Compressor for GzipCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = GzEncoder::new(Vec::new(), self.level);
        enc.write_all(input).map_err(|e| CompressionError::process("gzip", e))?;
        let compressed = enc.finish().map_err(|e| CompressionError::process("gzip", e))?;
        out.extend_from_slice(&compressed);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct GzipDecompressor;

impl Decompressor for GzipDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut dec = GzDecoder::new(input);
        dec.read_to_end(out).map_err(|e| CompressionError::process("gzip", e))?;
        Ok(())
    }
}
