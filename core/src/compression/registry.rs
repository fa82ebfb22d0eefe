//! compression/registry.rs
//! Codec factory keyed by algorithm.

use crate::compression::codecs::{DeflateCompressor, DeflateDecompressor, GzipCompressor, GzipDecompressor, PlainCodec};
use crate::compression::types::{CompressionAlgorithm, Compressor, Decompressor};
use crate::constants::DEFAULT_COMPRESSION_LEVEL;

pub fn create_compressor(alg: CompressionAlgorithm, level: Option<u32>) -> Box<dyn Compressor + Send> {
    let level = level.unwrap_or(DEFAULT_COMPRESSION_LEVEL);
    match alg {
        CompressionAlgorithm::Plain => Box::new(PlainCodec),
        CompressionAlgorithm::Gzip => Box::new(GzipCompressor::new(level)),
        CompressionAlgorithm::Deflate => Box::new(DeflateCompressor::new(level)),
    }
}

pub fn create_decompressor(alg: CompressionAlgorithm) -> Box<dyn Decompressor + Send> {
    match alg {
        CompressionAlgorithm::Plain => Box::new(PlainCodec),
        CompressionAlgorithm::Gzip => Box::new(GzipDecompressor),
        CompressionAlgorithm::Deflate => Box::new(DeflateDecompressor),
    }
}
