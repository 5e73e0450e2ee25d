//! Core domain types for rack queries
//!
//! Tiles, racks, letter inventories and positional constraints. Everything
//! here is plain data with no knowledge of dictionaries or scoring.

mod constraints;
mod inventory;
mod rack;
mod tile;

pub use constraints::{ConstraintError, PositionConstraints};
pub use inventory::Inventory;
pub use rack::{Rack, RackError};
pub use tile::{ALPHABET_SIZE, Tile, WILDCARD, letter_index};
