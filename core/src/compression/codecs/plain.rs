//! Identity codec: payload passes through untouched.

use crate::compression::types::{CompressionError, Compressor, Decompressor};

#[derive(Debug, Default)]
pub struct PlainCodec;

impl Compressor for PlainCodec {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}

impl Decompressor for PlainCodec {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        out.extend_from_slice(input);
        Ok(())
    }
}
