//! Positional decoder for `.pdf` model files.
//!
//! Wire order, every field 4 bytes in reversed byte order:
//!
//! ```text
//! msd_flag, stream_count, vector_length
//! node_count × state_count
//! per state, per node, per k in 0..vector_length:
//!     mean[k], variance[k] (, msd_weight[k], msd_counter[k])
//! ```

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, trace};

use super::{swap_endian, FIELD_SIZE};
use crate::model::*;
use crate::{Error, Result};

/// Reads swapped 4-byte fields and tracks the byte offset for error reports.
#[derive(Debug)]
pub struct FieldReader<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> FieldReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn read_scalar_field(&mut self, field: &'static str) -> Result<i32> {
        self.read_record(field).map(i32::from_ne_bytes)
    }

    pub fn read_float_field(&mut self, field: &'static str) -> Result<f32> {
        self.read_record(field).map(f32::from_ne_bytes)
    }

    /// Fill one record, swap whatever whole records arrived, and insist
    /// that the record is complete.
    fn read_record(&mut self, field: &'static str) -> Result<[u8; FIELD_SIZE]> {
        let start = self.offset;
        let mut buf = [0u8; FIELD_SIZE];
        let mut filled = 0;
        while filled < FIELD_SIZE {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
        self.offset += filled as u64;

        let swapped = swap_endian(&mut buf, FIELD_SIZE, filled / FIELD_SIZE);
        if swapped == 0 {
            return Err(Error::TruncatedInput { field, offset: start });
        }
        Ok(buf)
    }
}

/// Read one swapped `int32` field.
pub fn read_scalar_field<R: Read>(reader: &mut R) -> Result<i32> {
    FieldReader::new(reader).read_scalar_field("scalar field")
}

/// Read one swapped `float32` field.
pub fn read_float_field<R: Read>(reader: &mut R) -> Result<f32> {
    FieldReader::new(reader).read_float_field("float field")
}

/// Decode a complete model from `reader`.
///
/// `state_count` is not stored in the file; the caller supplies it.
pub fn decode<R: Read>(reader: R, state_count: usize) -> Result<PdfModel> {
    let mut fields = FieldReader::new(reader);

    let header = ModelHeader {
        msd_flag: fields.read_scalar_field("msd flag")?,
        stream_count: fields.read_scalar_field("stream count")?,
        vector_length: fields.read_scalar_field("vector length")?,
    };
    debug!(
        msd = header.is_msd(),
        streams = header.stream_count,
        vector_length = header.vector_length,
        "read model header"
    );

    let mut node_counts = Vec::with_capacity(state_count);
    for _ in 0..state_count {
        let count = fields.read_scalar_field("node count")?;
        let count = usize::try_from(count).map_err(|_| Error::InvalidDimension {
            field: "node count",
            value: i64::from(count),
        })?;
        node_counts.push(count);
    }
    debug!(?node_counts, "read node counts");

    let layout = header.layout()?;
    let mut states = Vec::with_capacity(state_count);
    for (i, &node_count) in node_counts.iter().enumerate() {
        let mut state = State::new();
        for j in 0..node_count {
            state.push(decode_node(&mut fields, layout)?);
            trace!(state = i, node = j, offset = fields.offset(), "decoded node");
        }
        states.push(state);
    }

    debug!(states = states.len(), bytes = fields.offset(), "decoded model");
    Ok(PdfModel::new(header, states))
}

/// Read one node: per element, mean then variance (then MSD weight and counter).
///
/// The wire values are read before the node buffer is allocated, so a file
/// that ends early fails as truncated rather than after a large allocation.
fn decode_node<R: Read>(fields: &mut FieldReader<R>, layout: NodeLayout) -> Result<Node> {
    let quadrants = layout.quadrants();
    let mut wire = Vec::new();
    for _ in 0..layout.vector_length() {
        for &quadrant in quadrants {
            wire.push(fields.read_float_field(quadrant.field_name())?);
        }
    }

    let mut node = Node::zeroed(layout)?;
    for (i, value) in wire.into_iter().enumerate() {
        let quadrant = quadrants[i % quadrants.len()];
        let k = i / quadrants.len();
        if !node.set(quadrant, k, value) {
            return Err(Error::InvalidDimension {
                field: "vector length",
                value: layout.vector_length() as i64,
            });
        }
    }
    Ok(node)
}

/// Open `path` and decode it.
pub fn decode_file(path: impl AsRef<Path>, state_count: usize) -> Result<PdfModel> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    decode(BufReader::new(file), state_count)
}
