use crate::{geometry::Rect, id::Id};

/// An input to the packer.
///
/// `InputItem` is just a 2D size and a generated unique identifier. It's
/// expected that consumers will remember which id belongs to which of their
/// own objects and use the ids to read placements back out of a
/// [`PackOutput`].
#[derive(Debug, Clone, Copy)]
pub struct InputItem {
    pub(crate) id: Id,
    pub(crate) size: (u32, u32),
}

impl InputItem {
    #[inline]
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            id: Id::new(),
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }
}

/// An item the packer placed, with its final position, footprint, and
/// orientation.
///
/// A rotated item's `size` is its input size transposed: the footprint the
/// item actually occupies in the atlas, not the size it was submitted with.
#[derive(Debug, Clone, Copy)]
pub struct OutputItem {
    pub(crate) id: Id,
    pub(crate) rect: Rect,
    pub(crate) rotated: bool,
}

impl OutputItem {
    #[inline]
    pub fn id(&self) -> Id {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.rect.size
    }

    #[inline]
    pub fn rotated(&self) -> bool {
        self.rotated
    }

    #[inline]
    pub fn min(&self) -> (u32, u32) {
        self.rect.pos
    }

    #[inline]
    pub fn max(&self) -> (u32, u32) {
        self.rect.max()
    }
}

/// The outcome for a single input item.
///
/// Outcomes appear in a [`PackOutput`] in the packer's processing order --
/// its height-sorted order -- not the order items were submitted in.
#[derive(Debug, Clone, Copy)]
pub enum PackResult {
    /// The item was placed.
    Placed(OutputItem),

    /// Neither orientation of the item fit anywhere in the tree.
    OutOfSpace(InputItem),
}

/// The results from one packing run.
#[derive(Debug, Clone)]
pub struct PackOutput {
    pub(crate) size: (u32, u32),
    pub(crate) results: Vec<PackResult>,
}

impl PackOutput {
    /// The atlas size this output was packed against.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Per-item outcomes, in processing order.
    #[inline]
    pub fn results(&self) -> &[PackResult] {
        &self.results
    }

    /// Iterates over the successfully placed items.
    pub fn placed(&self) -> impl Iterator<Item = &OutputItem> {
        self.results.iter().filter_map(|result| match result {
            PackResult::Placed(item) => Some(item),
            PackResult::OutOfSpace(_) => None,
        })
    }

    /// How many items found no space in either orientation.
    pub fn num_failed(&self) -> usize {
        self.results
            .iter()
            .filter(|result| matches!(result, PackResult::OutOfSpace(_)))
            .count()
    }

    /// How many placed items were rotated to fit.
    pub fn num_rotated(&self) -> usize {
        self.placed().filter(|item| item.rotated).count()
    }
}
