//! The binary partition tree that hands out regions of the atlas.
//!
//! Every placement converts one free leaf into a used node with two fresh
//! free children: the space left over to the right of the placed box, and
//! the space left over below it. Searches walk the tree in a fixed order --
//! for a used node, the right child and then the bottom child -- and take
//! the first free region large enough. That ordering is part of the
//! packer's contract: identical inputs must produce identical placements,
//! so it must not be swapped for a best-fit search.

use crate::geometry::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

/// Dimensions are signed: splitting a region that a box exactly fills, or
/// whose leftovers are eaten by padding, produces children with zero or
/// negative size. Those stay in the arena as dead leaves; the fit test can
/// never match them.
#[derive(Debug)]
struct Node {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    children: Option<(NodeId, NodeId)>,
}

pub(crate) struct PartitionTree {
    nodes: Vec<Node>,
    padding: i32,
}

impl PartitionTree {
    pub fn new(size: (u32, u32), padding: u32) -> Self {
        let root = Node {
            x: 0,
            y: 0,
            width: size.0 as i32,
            height: size.1 as i32,
            children: None,
        };

        Self {
            nodes: vec![root],
            padding: padding as i32,
        }
    }

    /// Finds the first free region that can hold a box of `size` and splits
    /// it, returning the box's placement. Returns `None` if nothing fits;
    /// the tree is unchanged in that case.
    pub fn allocate(&mut self, size: (u32, u32)) -> Option<Rect> {
        let width = size.0 as i32;
        let height = size.1 as i32;

        let found = self.find_fit(NodeId(0), width, height)?;
        Some(self.split(found, width, height))
    }

    fn find_fit(&self, id: NodeId, width: i32, height: i32) -> Option<NodeId> {
        let node = &self.nodes[id.0];

        match node.children {
            Some((right, bottom)) => self
                .find_fit(right, width, height)
                .or_else(|| self.find_fit(bottom, width, height)),
            None => {
                if width <= node.width && height <= node.height {
                    Some(id)
                } else {
                    None
                }
            }
        }
    }

    fn split(&mut self, id: NodeId, width: i32, height: i32) -> Rect {
        let (x, y, free_width, free_height) = {
            let node = &self.nodes[id.0];
            (node.x, node.y, node.width, node.height)
        };

        let right = self.push(Node {
            x: x + width + self.padding,
            y,
            width: free_width - width - self.padding,
            height,
            children: None,
        });

        let bottom = self.push(Node {
            x,
            y: y + height + self.padding,
            width: free_width,
            height: free_height - height - self.padding,
            children: None,
        });

        // The node keeps its pre-split size; having children is what marks
        // it used.
        self.nodes[id.0].children = Some((right, bottom));

        Rect {
            pos: (x as u32, y as u32),
            size: (width as u32, height as u32),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
