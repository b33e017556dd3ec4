//! Text file reading
//!
//! The whole file is read into memory and decoded as UTF-8. Invalid bytes are
//! either an error or replaced with U+FFFD, depending on the strategy.

use log::{debug, warn};
use std::fs;
use std::path::Path;

use crate::core::error::WordFreqError;

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Fail on the first invalid byte sequence
    #[default]
    Strict,
    /// Replace invalid sequences with U+FFFD
    Lossy,
}

/// Decoded file content
#[derive(Debug, Clone)]
pub struct FileText {
    pub content: String,

    /// Whether lossy conversion replaced any bytes
    pub lossy_conversion: bool,
}

/// Read `path` fully and decode it according to `strategy`
pub fn read_text(path: &Path, strategy: EncodingStrategy) -> Result<FileText, WordFreqError> {
    let bytes = fs::read(path).map_err(|e| WordFreqError::from_io(path, e))?;
    debug!("read {} bytes from {}", bytes.len(), path.display());
    decode(path, bytes, strategy)
}

fn decode(path: &Path, bytes: Vec<u8>, strategy: EncodingStrategy) -> Result<FileText, WordFreqError> {
    match String::from_utf8(bytes) {
        Ok(content) => Ok(FileText {
            content,
            lossy_conversion: false,
        }),
        Err(err) => {
            let offset = err.utf8_error().valid_up_to();
            match strategy {
                EncodingStrategy::Strict => Err(WordFreqError::Decoding {
                    path: path.to_path_buf(),
                    offset,
                }),
                EncodingStrategy::Lossy => {
                    warn!(
                        "{} is not valid UTF-8 (first invalid byte at offset {}), using lossy conversion",
                        path.display(),
                        offset
                    );
                    Ok(FileText {
                        content: String::from_utf8_lossy(err.as_bytes()).into_owned(),
                        lossy_conversion: true,
                    })
                }
            }
        }
    }
}
