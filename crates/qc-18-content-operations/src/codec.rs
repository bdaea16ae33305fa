//! # Operation Wire Codec
//!
//! Consensus encoding of content operations:
//!
//! - integers fixed-width little-endian
//! - `Option<T>` as a one-byte presence flag, then `T` when present
//! - strings, sets and the extension bag as a `u64` length then elements
//! - operation variant as a `u32` tag ahead of the payload
//! - trailing bytes rejected
//!
//! Extension entries are written in the order held, so a bag must be
//! canonicalised before the encoding is hashed or signed.

use bincode::Options;

use crate::domain::errors::CodecError;
use crate::domain::operations::Operation;

/// Default cap on an encoded operation accepted for decoding.
pub const DEFAULT_MAX_OPERATION_BYTES: u64 = 1024 * 1024;

fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Encodes an operation, variant tag included.
pub fn encode(op: &Operation) -> Result<Vec<u8>, CodecError> {
    wire_options()
        .serialize(op)
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decodes an operation with the default size cap.
pub fn decode(bytes: &[u8]) -> Result<Operation, CodecError> {
    decode_with_limit(bytes, DEFAULT_MAX_OPERATION_BYTES)
}

/// Decodes an operation, rejecting input larger than `limit` bytes.
pub fn decode_with_limit(bytes: &[u8], limit: u64) -> Result<Operation, CodecError> {
    if bytes.len() as u64 > limit {
        return Err(CodecError::TooLarge { limit });
    }
    wire_options()
        .with_limit(limit)
        .deserialize(bytes)
        .map_err(|e| match *e {
            bincode::ErrorKind::SizeLimit => CodecError::TooLarge { limit },
            other => CodecError::Decode(other.to_string()),
        })
}

/// Length of the full encoding, variant tag included.
pub fn encoded_len(op: &Operation) -> Result<u64, CodecError> {
    wire_options()
        .serialized_size(op)
        .map_err(|e| CodecError::Encode(e.to_string()))
}

/// Length of the variant payload alone. This is the size the fee is priced on.
pub fn payload_len(op: &Operation) -> Result<u64, CodecError> {
    let options = wire_options();
    let size = match op {
        Operation::PlatformCreate(inner) => options.serialized_size(inner),
        Operation::PlatformUpdate(inner) => options.serialized_size(inner),
        Operation::PlatformVoteUpdate(inner) => options.serialized_size(inner),
        Operation::Post(inner) => options.serialized_size(inner),
        Operation::PostUpdate(inner) => options.serialized_size(inner),
    };
    size.map_err(|e| CodecError::Encode(e.to_string()))
}
