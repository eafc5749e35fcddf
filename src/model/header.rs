//! The three leading scalar fields of a model file.

use serde::{Deserialize, Serialize};
use super::NodeLayout;
use crate::Result;

/// Model header, exactly as read from the wire.
///
/// Values are kept as signed 32-bit integers; [`ModelHeader::layout`] is
/// where they become sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelHeader {
    /// 0 = two-quadrant nodes, anything else = four-quadrant (MSD) nodes.
    pub msd_flag: i32,
    pub stream_count: i32,
    pub vector_length: i32,
}

impl ModelHeader {
    pub fn new(msd: bool, stream_count: i32, vector_length: i32) -> Self {
        Self {
            msd_flag: i32::from(msd),
            stream_count,
            vector_length,
        }
    }

    pub fn is_msd(&self) -> bool {
        self.msd_flag != 0
    }

    /// Human-readable model kind, as printed in report headers.
    pub fn kind(&self) -> &'static str {
        if self.is_msd() { "MSD model" } else { "Non-MSD model" }
    }

    /// Node buffer layout implied by this header.
    pub fn layout(&self) -> Result<NodeLayout> {
        NodeLayout::from_wire(self.stream_count, self.vector_length, self.is_msd())
    }
}
