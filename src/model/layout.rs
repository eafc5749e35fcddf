//! Node buffer layout — the quadrant offset arithmetic.
//!
//! A node buffer is `quadrant_count` equal quadrants laid end to end:
//!
//! ```text
//! [ mean | variance | msd weight | msd counter ]
//!   q0      q1         q2 (MSD)     q3 (MSD)
//! ```
//!
//! Each quadrant holds `stream_count * vector_length` values. Element `k`
//! of stream 0 sits at `quadrant * quadrant_len + k`.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// One of the up-to-four regions of a node buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    Mean,
    Variance,
    /// MSD weight (MSD models only).
    MsdWeight,
    /// MSD counter (MSD models only).
    MsdCounter,
}

impl Quadrant {
    /// All quadrants in buffer order, which is also wire and report order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Mean,
        Quadrant::Variance,
        Quadrant::MsdWeight,
        Quadrant::MsdCounter,
    ];

    pub fn index(self) -> usize {
        match self {
            Quadrant::Mean => 0,
            Quadrant::Variance => 1,
            Quadrant::MsdWeight => 2,
            Quadrant::MsdCounter => 3,
        }
    }

    /// Row label used in text reports.
    pub fn label(self) -> &'static str {
        match self {
            Quadrant::Mean => "Mean",
            Quadrant::Variance => "Variance",
            Quadrant::MsdWeight => "MSD",
            Quadrant::MsdCounter => "Counter-MSD",
        }
    }

    /// Field name used in decode errors.
    pub fn field_name(self) -> &'static str {
        match self {
            Quadrant::Mean => "mean",
            Quadrant::Variance => "variance",
            Quadrant::MsdWeight => "msd weight",
            Quadrant::MsdCounter => "msd counter",
        }
    }

    pub fn is_msd_only(self) -> bool {
        matches!(self, Quadrant::MsdWeight | Quadrant::MsdCounter)
    }
}

/// Sizes shared by every node of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeLayout {
    stream_count: usize,
    vector_length: usize,
    msd: bool,
}

impl NodeLayout {
    /// Build a layout.
    ///
    /// Rejects a stream count of zero for a non-empty vector (stream 0 must
    /// exist to hold the values) and buffers whose byte size exceeds
    /// `isize::MAX`.
    pub fn new(stream_count: usize, vector_length: usize, msd: bool) -> Result<Self> {
        let layout = Self { stream_count, vector_length, msd };
        if stream_count == 0 && vector_length > 0 {
            return Err(Error::InvalidDimension { field: "stream count", value: 0 });
        }
        let fits = stream_count
            .checked_mul(vector_length)
            .and_then(|q| q.checked_mul(layout.quadrant_count()))
            .and_then(|len| len.checked_mul(size_of::<f32>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if !fits {
            let elements = stream_count.saturating_mul(vector_length);
            return Err(Error::InvalidDimension {
                field: "node buffer length",
                value: i64::try_from(elements).unwrap_or(i64::MAX),
            });
        }
        Ok(layout)
    }

    /// Build a layout from raw header values.
    pub fn from_wire(stream_count: i32, vector_length: i32, msd: bool) -> Result<Self> {
        Self::new(
            wire_size("stream count", stream_count)?,
            wire_size("vector length", vector_length)?,
            msd,
        )
    }

    pub fn stream_count(&self) -> usize {
        self.stream_count
    }

    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    pub fn is_msd(&self) -> bool {
        self.msd
    }

    /// 4 for MSD models, 2 otherwise.
    pub fn quadrant_count(&self) -> usize {
        if self.msd { 4 } else { 2 }
    }

    pub fn quadrant_len(&self) -> usize {
        self.stream_count * self.vector_length
    }

    pub fn buffer_len(&self) -> usize {
        self.quadrant_len() * self.quadrant_count()
    }

    pub fn has_quadrant(&self, quadrant: Quadrant) -> bool {
        self.msd || !quadrant.is_msd_only()
    }

    /// Quadrants present in this layout, in buffer order.
    pub fn quadrants(&self) -> &'static [Quadrant] {
        if self.msd { &Quadrant::ALL } else { &Quadrant::ALL[..2] }
    }

    /// Range of `quadrant` within the flat buffer.
    pub fn quadrant_range(&self, quadrant: Quadrant) -> Option<std::ops::Range<usize>> {
        if !self.has_quadrant(quadrant) {
            return None;
        }
        let start = quadrant.index() * self.quadrant_len();
        Some(start..start + self.quadrant_len())
    }

    /// Flat offset of element `k` of stream 0 within `quadrant`.
    pub fn offset(&self, quadrant: Quadrant, k: usize) -> Option<usize> {
        if k >= self.quadrant_len() {
            return None;
        }
        self.quadrant_range(quadrant).map(|range| range.start + k)
    }
}

fn wire_size(field: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidDimension {
        field,
        value: i64::from(value),
    })
}
