//! Image normalization.

use crate::error::{PipelineError, PipelineResult};
use bytes::Bytes;
use image::ImageFormat;
use std::io::Cursor;

/// Turns downloaded bytes into the stored image format.
pub trait ImageCodec: Send + Sync + 'static {
    fn normalize(&self, data: &[u8]) -> PipelineResult<Bytes>;
}

/// Decodes any supported format and re-encodes it as PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn normalize(&self, data: &[u8]) -> PipelineResult<Bytes> {
        let decoded =
            image::load_from_memory(data).map_err(|e| PipelineError::Decode(e.to_string()))?;
        let mut out = Cursor::new(Vec::new());
        decoded
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| PipelineError::Decode(e.to_string()))?;
        Ok(Bytes::from(out.into_inner()))
    }
}
