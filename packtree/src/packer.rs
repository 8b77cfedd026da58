use crate::{
    tree::PartitionTree,
    types::{InputItem, OutputItem, PackOutput, PackResult},
};

/// Packs rectangles into one fixed-size atlas using a binary partition
/// tree.
///
/// Items are sorted tallest-first before packing; ties keep their arrival
/// order. Each item then takes the first free region the tree's fixed-order
/// search reaches, trying the item upright and then rotated a quarter turn.
/// An item that fits in neither orientation is reported in the output and
/// skipped, never fatal.
#[derive(Debug, Clone, Copy)]
pub struct TreePacker {
    size: (u32, u32),
    padding: u32,
}

impl TreePacker {
    pub fn new() -> Self {
        Self {
            size: (256, 256),
            padding: 1,
        }
    }

    /// Sets the width and height of the atlas being packed into.
    pub fn atlas_size(self, size: (u32, u32)) -> Self {
        Self { size, ..self }
    }

    /// Sets the gap, in pixels, kept between adjacent placed boxes.
    pub fn padding(self, padding: u32) -> Self {
        Self { padding, ..self }
    }

    pub fn pack<I: IntoIterator<Item = InputItem>>(&self, items: I) -> PackOutput {
        let mut items: Vec<_> = items.into_iter().collect();

        // Placing the tallest items first keeps the tree from fragmenting.
        // The sort is stable, so equal heights keep their arrival order.
        items.sort_by(|a, b| b.size.1.cmp(&a.size.1));

        log::trace!(
            "Packing {} items into a {}x{} atlas",
            items.len(),
            self.size.0,
            self.size.1
        );

        let mut tree = PartitionTree::new(self.size, self.padding);
        let mut results = Vec::with_capacity(items.len());

        for item in items {
            let (width, height) = item.size;

            let result = if let Some(rect) = tree.allocate((width, height)) {
                PackResult::Placed(OutputItem {
                    id: item.id,
                    rect,
                    rotated: false,
                })
            } else if let Some(rect) = tree.allocate((height, width)) {
                log::trace!("Item {:?} ({}x{}) was rotated to fit", item.id, width, height);

                PackResult::Placed(OutputItem {
                    id: item.id,
                    rect,
                    rotated: true,
                })
            } else {
                log::trace!("Item {:?} ({}x{}) found no space", item.id, width, height);

                PackResult::OutOfSpace(item)
            };

            results.push(result);
        }

        log::trace!(
            "Finished packing with {} failures and {} rotations",
            results
                .iter()
                .filter(|result| matches!(result, PackResult::OutOfSpace(_)))
                .count(),
            results
                .iter()
                .filter(|result| matches!(result, PackResult::Placed(item) if item.rotated))
                .count()
        );

        PackOutput {
            size: self.size,
            results,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn anonymize(output: &PackOutput) -> Vec<Option<((u32, u32), (u32, u32), bool)>> {
        output
            .results()
            .iter()
            .map(|result| match result {
                PackResult::Placed(item) => {
                    Some((item.position(), item.size(), item.rotated()))
                }
                PackResult::OutOfSpace(_) => None,
            })
            .collect()
    }

    #[test]
    fn tallest_items_pack_first() {
        let packer = TreePacker::new().atlas_size((8, 8)).padding(0);

        let short = InputItem::new((2, 2));
        let tall = InputItem::new((2, 6));
        let output = packer.pack(vec![short, tall]);

        // The 2x6 item is processed first and takes the root corner.
        let placed: Vec<_> = output.placed().collect();
        assert_eq!(placed[0].id(), tall.id());
        assert_eq!(placed[0].position(), (0, 0));
        assert_eq!(placed[1].id(), short.id());
    }

    #[test]
    fn equal_heights_keep_arrival_order() {
        let packer = TreePacker::new().atlas_size((16, 4)).padding(0);

        let items: Vec<_> = (0..4).map(|_| InputItem::new((4, 4))).collect();
        let output = packer.pack(items.clone());

        let placed: Vec<_> = output.placed().collect();
        for (input, output) in items.iter().zip(&placed) {
            assert_eq!(input.id(), output.id());
        }

        assert_eq!(placed[0].position(), (0, 0));
        assert_eq!(placed[3].position(), (12, 0));
    }

    #[test]
    fn presorted_input_keeps_its_order() {
        let packer = TreePacker::new().atlas_size((64, 64)).padding(0);

        let sizes = [(4, 9), (6, 7), (2, 7), (5, 3), (8, 1)];
        let items: Vec<_> = sizes.iter().map(|&size| InputItem::new(size)).collect();
        let output = packer.pack(items.clone());

        let processed: Vec<_> = output
            .results()
            .iter()
            .map(|result| match result {
                PackResult::Placed(item) => item.id(),
                PackResult::OutOfSpace(item) => item.id(),
            })
            .collect();
        let submitted: Vec<_> = items.iter().map(|item| item.id()).collect();

        assert_eq!(processed, submitted);
    }

    #[test]
    fn repacking_identical_input_is_deterministic() {
        let packer = TreePacker::new().atlas_size((32, 32)).padding(1);

        let sizes = [(5, 9), (12, 3), (4, 4), (4, 4), (7, 2), (10, 10)];
        let items: Vec<_> = sizes.iter().map(|&size| InputItem::new(size)).collect();

        let first = anonymize(&packer.pack(items.clone()));
        let second = anonymize(&packer.pack(items));

        assert_eq!(first, second);
    }

    #[test]
    fn rotation_is_tried_after_upright_fails() {
        let packer = TreePacker::new().atlas_size((4, 2)).padding(0);

        let output = packer.pack(vec![InputItem::new((1, 4))]);

        let placed: Vec<_> = output.placed().collect();
        assert_eq!(placed.len(), 1);
        assert!(placed[0].rotated());
        assert_eq!(placed[0].position(), (0, 0));

        // The footprint is the input size transposed.
        assert_eq!(placed[0].size(), (4, 1));
        assert_eq!(output.num_rotated(), 1);
    }

    #[test]
    fn upright_fit_is_never_rotated() {
        let packer = TreePacker::new().atlas_size((8, 8)).padding(0);

        let output = packer.pack(vec![InputItem::new((3, 5))]);

        let placed: Vec<_> = output.placed().collect();
        assert!(!placed[0].rotated());
        assert_eq!(placed[0].size(), (3, 5));
        assert_eq!(output.num_rotated(), 0);
    }

    #[test]
    fn oversized_item_is_reported_and_skipped() {
        let packer = TreePacker::new().atlas_size((4, 4)).padding(0);

        let big = InputItem::new((10, 10));
        let small = InputItem::new((2, 2));
        let output = packer.pack(vec![big, small]);

        assert_eq!(output.num_failed(), 1);
        match output.results()[0] {
            PackResult::OutOfSpace(item) => assert_eq!(item.id(), big.id()),
            PackResult::Placed(_) => panic!("a 10x10 item can't fit in a 4x4 atlas"),
        }

        // The failure doesn't stop smaller items from packing.
        let placed: Vec<_> = output.placed().collect();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].id(), small.id());
    }

    #[test]
    fn placements_stay_in_bounds_and_never_overlap() {
        let packer = TreePacker::new().atlas_size((64, 64)).padding(1);

        let sizes = [
            (10, 20),
            (30, 5),
            (8, 8),
            (8, 8),
            (25, 14),
            (3, 40),
            (17, 2),
            (6, 31),
            (12, 12),
            (40, 3),
            (5, 5),
            (22, 9),
        ];
        let output = packer.pack(sizes.iter().map(|&size| InputItem::new(size)));

        let placed: Vec<_> = output.placed().collect();
        assert!(!placed.is_empty());

        for item in &placed {
            let max = item.max();
            assert!(max.0 <= 64 && max.1 <= 64, "{:?} exceeds the atlas", item);
        }

        for (i, a) in placed.iter().enumerate() {
            for b in &placed[i + 1..] {
                assert!(!a.rect.intersects(&b.rect), "{:?} overlaps {:?}", a, b);
            }
        }
    }
}
