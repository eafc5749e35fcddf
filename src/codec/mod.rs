//! # Model File Codec
//!
//! Byte-order normalization and the positional decoder for `.pdf` model
//! files. Read-only: there is no encoder.
//!
//! ```text
//! bytes → FieldReader (4-byte records, swap_endian) → decode() → PdfModel
//! ```

pub mod swap;
pub mod decode;

pub use swap::swap_endian;
pub use decode::{decode, decode_file, read_float_field, read_scalar_field, FieldReader};

/// Size in bytes of every field in the format (int32 and float32).
pub const FIELD_SIZE: usize = 4;
