#![forbid(unsafe_code)]

//! Ordered set of unique integer keys as a binary search tree, optionally
//! self-balancing with red-black coloring. Also hosts what the driver
//! binary consumes around the tree, such as seeded bulk generation and the
//! hex-token toggle loader, and an ASCII renderer for diagnostics.

mod deck;
mod node;
mod printer;
mod toggle;
mod tree;

pub use deck::draw;
pub use node::{Color, Direction, NodeId};
pub use printer::TreePrinter;
pub use toggle::toggle_values;
pub use tree::{Mode, TreeSet};
