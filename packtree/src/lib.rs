//! Packtree is a small library for packing rectangles into one fixed-size
//! container. It was built for atlasgen, a tool that packs directory trees
//! of images into texture atlases.
//!
//! The packer subdivides the container with a binary partition tree: each
//! placement puts a box in the top-left corner of a free region, then splits
//! what remains of that region into a free area to the right of the box and
//! a free area below it. Items are processed tallest-first, and an item that
//! doesn't fit upright is retried rotated a quarter turn.
//!
//! Packing is first-fit in a fixed traversal order, so identical inputs
//! always produce identical placements.
//!
//! ## Example
//! ```
//! use packtree::{InputItem, TreePacker};
//!
//! // First, transform the rectangles you want to pack into the Packtree
//! // InputItem type.
//! let my_items = vec![
//!     InputItem::new((128, 64)),
//!     InputItem::new((64, 64)),
//!     InputItem::new((1, 300)),
//! ];
//!
//! // Construct a packer and configure it with your constraints
//! let packer = TreePacker::new().atlas_size((512, 512)).padding(1);
//!
//! // Compute a solution.
//! let output = packer.pack(my_items);
//! assert_eq!(output.num_failed(), 0);
//! ```

mod geometry;
mod id;
mod packer;
mod tree;
mod types;

pub use id::*;
pub use packer::*;
pub use types::*;
