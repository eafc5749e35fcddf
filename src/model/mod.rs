//! # Model Structure
//!
//! Clean DTOs for a decoded HTS `.pdf` model:
//! `PdfModel` owns its `State`s, each `State` owns its `Node`s, and each
//! `Node` owns one contiguous parameter buffer split into quadrants.
//!
//! Design rule: this module is pure data — no I/O, no byte order, no logging.

pub mod header;
pub mod layout;
pub mod node;
pub mod state;
pub mod pdf;

pub use header::ModelHeader;
pub use layout::{NodeLayout, Quadrant};
pub use node::Node;
pub use state::State;
pub use pdf::PdfModel;
