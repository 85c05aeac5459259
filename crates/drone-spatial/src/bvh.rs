//! Bounding volume hierarchy over axis-aligned boxes.
//!
//! The grid transform asks "does this body box touch any obstacle?" once per
//! cell. An [`AabbTree`] answers that in logarithmic time instead of scanning
//! every obstacle.

use smallvec::SmallVec;

use crate::aabb::Aabb;

/// Default number of boxes stored per leaf.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 4;

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        bbox: Aabb,
        items: SmallVec<[u32; 8]>,
    },
    Internal {
        bbox: Aabb,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    const fn bbox(&self) -> &Aabb {
        match self {
            Self::Leaf { bbox, .. } | Self::Internal { bbox, .. } => bbox,
        }
    }
}

/// Static spatial index over a set of boxes.
///
/// Items are identified by their position in the slice passed to
/// [`AabbTree::build`]. The tree is immutable once built.
///
/// # Example
///
/// ```
/// use drone_spatial::{Aabb, AabbTree};
/// use nalgebra::Point3;
///
/// let obstacles = vec![
///     Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)),
///     Aabb::new(Point3::new(5.0, 5.0, 5.0), Point3::new(8.0, 8.0, 8.0)),
/// ];
/// let tree = AabbTree::build(&obstacles);
///
/// let probe = Aabb::new(Point3::new(4.0, 4.0, 4.0), Point3::new(5.0, 5.0, 5.0));
/// assert!(tree.intersects_any(&probe));
/// assert_eq!(tree.query(&probe), vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AabbTree {
    root: Option<Node>,
    boxes: Vec<Aabb>,
}

impl AabbTree {
    /// Builds a tree with [`DEFAULT_MAX_LEAF_SIZE`] boxes per leaf.
    #[must_use]
    pub fn build(boxes: &[Aabb]) -> Self {
        Self::build_with_leaf_size(boxes, DEFAULT_MAX_LEAF_SIZE)
    }

    /// Builds a tree splitting nodes until at most `max_leaf_size` boxes
    /// remain per leaf.
    ///
    /// Nodes split at the median along the longest axis of their bounds.
    #[must_use]
    pub fn build_with_leaf_size(boxes: &[Aabb], max_leaf_size: usize) -> Self {
        let items: Vec<(u32, Aabb)> = (0u32..).zip(boxes.iter().copied()).collect();
        if items.is_empty() {
            return Self::default();
        }

        let boxes = items.iter().map(|(_, b)| *b).collect();
        let root = Self::build_recursive(items, max_leaf_size.max(1));
        Self {
            root: Some(root),
            boxes,
        }
    }

    fn build_recursive(mut items: Vec<(u32, Aabb)>, max_leaf_size: usize) -> Node {
        let mut bbox = Aabb::empty();
        for (_, item) in &items {
            bbox.expand(item);
        }

        if items.len() <= max_leaf_size {
            return Node::Leaf {
                bbox,
                items: items.iter().map(|(id, _)| *id).collect(),
            };
        }

        let axis = bbox.longest_axis();
        items.sort_by(|(_, a), (_, b)| a.center()[axis].total_cmp(&b.center()[axis]));

        let right = items.split_off(items.len() / 2);
        Node::Internal {
            bbox,
            left: Box::new(Self::build_recursive(items, max_leaf_size)),
            right: Box::new(Self::build_recursive(right, max_leaf_size)),
        }
    }

    /// Number of indexed boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns `true` if the tree indexes no boxes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Union of all indexed boxes.
    #[must_use]
    pub fn root_bbox(&self) -> Option<&Aabb> {
        self.root.as_ref().map(Node::bbox)
    }

    /// The indexed box with the given id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Aabb> {
        self.boxes.get(usize::try_from(id).ok()?)
    }

    /// Checks whether `probe` overlaps any indexed box. Stops at the first hit.
    #[must_use]
    pub fn intersects_any(&self, probe: &Aabb) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| self.any_recursive(root, probe))
    }

    fn any_recursive(&self, node: &Node, probe: &Aabb) -> bool {
        if !node.bbox().intersects(probe) {
            return false;
        }
        match node {
            Node::Leaf { items, .. } => items
                .iter()
                .any(|&id| self.get(id).is_some_and(|b| b.intersects(probe))),
            Node::Internal { left, right, .. } => {
                self.any_recursive(left, probe) || self.any_recursive(right, probe)
            }
        }
    }

    /// Indices of every box overlapping `probe`, in ascending order.
    #[must_use]
    pub fn query(&self, probe: &Aabb) -> Vec<u32> {
        let mut hits = Vec::new();
        if let Some(root) = &self.root {
            self.query_recursive(root, probe, &mut hits);
        }
        hits.sort_unstable();
        hits
    }

    fn query_recursive(&self, node: &Node, probe: &Aabb, hits: &mut Vec<u32>) {
        if !node.bbox().intersects(probe) {
            return;
        }
        match node {
            Node::Leaf { items, .. } => hits.extend(
                items
                    .iter()
                    .copied()
                    .filter(|&id| self.get(id).is_some_and(|b| b.intersects(probe))),
            ),
            Node::Internal { left, right, .. } => {
                self.query_recursive(left, probe, hits);
                self.query_recursive(right, probe, hits);
            }
        }
    }

    /// Shape statistics of the tree.
    #[must_use]
    pub fn stats(&self) -> AabbTreeStats {
        let mut stats = AabbTreeStats::default();
        if let Some(root) = &self.root {
            Self::collect_stats(root, 0, &mut stats);
        }
        stats
    }

    fn collect_stats(node: &Node, depth: usize, stats: &mut AabbTreeStats) {
        stats.max_depth = stats.max_depth.max(depth);
        match node {
            Node::Leaf { items, .. } => {
                stats.leaf_count += 1;
                stats.max_leaf_size = stats.max_leaf_size.max(items.len());
            }
            Node::Internal { left, right, .. } => {
                stats.internal_count += 1;
                Self::collect_stats(left, depth + 1, stats);
                Self::collect_stats(right, depth + 1, stats);
            }
        }
    }
}

/// Shape statistics of an [`AabbTree`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AabbTreeStats {
    /// Number of internal nodes.
    pub internal_count: usize,
    /// Number of leaves.
    pub leaf_count: usize,
    /// Depth of the deepest leaf (root is 0).
    pub max_depth: usize,
    /// Largest number of boxes in any leaf.
    pub max_leaf_size: usize,
}
