//! PKCS#7 padding for block-aligned encryption
//!
//! The block cipher core refuses unaligned input; padding is this layer's
//! job. Every message gains at least one padding byte, so an empty
//! plaintext still produces a full block.

use crate::error::{Error, Result};

/// Pad `data` up to a multiple of `block_size` (PKCS#7).
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    debug_assert!(block_size > 0 && block_size < 256);
    let pad_len = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strip PKCS#7 padding, validating every padding byte.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(Error::DecodeFailed {
            context: "PKCS#7 padding",
            message: "padded data is not block aligned".to_string(),
        });
    }

    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > block_size {
        return Err(Error::DecodeFailed {
            context: "PKCS#7 padding",
            message: "padding length byte out of range".to_string(),
        });
    }

    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b as usize != pad_len) {
        return Err(Error::DecodeFailed {
            context: "PKCS#7 padding",
            message: "inconsistent padding bytes".to_string(),
        });
    }

    Ok(body)
}
