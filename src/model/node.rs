//! Node — one distribution within a state.

use serde::{Deserialize, Serialize};
use super::{NodeLayout, Quadrant};
use crate::{Error, Result};

/// A node's parameters: one contiguous buffer viewed as named quadrants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    layout: NodeLayout,
    params: Vec<f32>,
}

impl Node {
    /// A node with every parameter set to `0.0`.
    ///
    /// Allocation failure is an error rather than an abort.
    pub fn zeroed(layout: NodeLayout) -> Result<Self> {
        let len = layout.buffer_len();
        let mut params = Vec::new();
        params
            .try_reserve_exact(len)
            .map_err(|_| Error::Allocation { bytes: len.saturating_mul(size_of::<f32>()) })?;
        params.resize(len, 0.0);
        Ok(Self { layout, params })
    }

    /// Wrap an existing flat buffer; its length must match the layout.
    pub fn from_params(layout: NodeLayout, params: Vec<f32>) -> Result<Self> {
        if params.len() != layout.buffer_len() {
            return Err(Error::InvalidDimension {
                field: "node buffer length",
                value: params.len() as i64,
            });
        }
        Ok(Self { layout, params })
    }

    pub fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    /// The whole flat buffer, quadrants end to end.
    pub fn as_slice(&self) -> &[f32] {
        &self.params
    }

    pub fn quadrant(&self, quadrant: Quadrant) -> Option<&[f32]> {
        self.layout
            .quadrant_range(quadrant)
            .map(|range| &self.params[range])
    }

    pub fn quadrant_mut(&mut self, quadrant: Quadrant) -> Option<&mut [f32]> {
        self.layout
            .quadrant_range(quadrant)
            .map(|range| &mut self.params[range])
    }

    /// The `vector_length` stream-0 values of `quadrant`.
    ///
    /// This is the part of each quadrant the file format actually fills.
    pub fn leading_stream(&self, quadrant: Quadrant) -> Option<&[f32]> {
        let len = self.layout.vector_length();
        self.quadrant(quadrant).and_then(|values| values.get(..len))
    }

    pub fn mean(&self) -> &[f32] {
        let len = self.layout.quadrant_len();
        &self.params[..len]
    }

    pub fn variance(&self) -> &[f32] {
        let len = self.layout.quadrant_len();
        &self.params[len..2 * len]
    }

    pub fn msd_weight(&self) -> Option<&[f32]> {
        self.quadrant(Quadrant::MsdWeight)
    }

    pub fn msd_counter(&self) -> Option<&[f32]> {
        self.quadrant(Quadrant::MsdCounter)
    }

    pub fn mean_mut(&mut self) -> &mut [f32] {
        let len = self.layout.quadrant_len();
        &mut self.params[..len]
    }

    pub fn variance_mut(&mut self) -> &mut [f32] {
        let len = self.layout.quadrant_len();
        &mut self.params[len..2 * len]
    }

    pub fn msd_weight_mut(&mut self) -> Option<&mut [f32]> {
        self.quadrant_mut(Quadrant::MsdWeight)
    }

    pub fn msd_counter_mut(&mut self) -> Option<&mut [f32]> {
        self.quadrant_mut(Quadrant::MsdCounter)
    }

    /// Store `value` at element `k` of stream 0 in `quadrant`.
    ///
    /// Returns `false` (and writes nothing) when the slot does not exist.
    pub fn set(&mut self, quadrant: Quadrant, k: usize, value: f32) -> bool {
        match self.layout.offset(quadrant, k) {
            Some(offset) => {
                self.params[offset] = value;
                true
            }
            None => false,
        }
    }
}
