// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree structure, insertion, and membership.

use alloc::boxed::Box;
use alloc::vec::Vec;
use kurbo::Point;

use crate::types::{InvalidArgument, check_point, split_value};

/// One stored point with its exclusively owned subtrees.
///
/// `depth` equals the number of ancestors; its parity selects the splitting
/// dimension (even compares x, odd compares y).
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
    pub(crate) depth: usize,
}

impl Node {
    fn new(point: Point, depth: usize) -> Self {
        Self {
            point,
            left: None,
            right: None,
            depth,
        }
    }
}

/// A 2-D tree over distinct points.
///
/// Alternating-dimension binary partitioning: a node at even depth splits the
/// plane on x, at odd depth on y. Points strictly less on the splitting
/// dimension go left, greater-or-equal go right. The tree is not rebalanced;
/// its shape is determined entirely by insertion order, so sorted input
/// degrades to linear depth.
///
/// Coordinates must be finite; any operation handed a NaN or infinite
/// coordinate fails with [`InvalidArgument`].
pub struct KdTree {
    pub(crate) root: Option<Box<Node>>,
    len: usize,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for KdTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl KdTree {
    /// Create a new empty tree.
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of distinct points stored. O(1).
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if no points are stored. O(1).
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a point.
    ///
    /// Inserting a point already present (exact coordinate equality) is a
    /// silent no-op and leaves [`len`](Self::len) unchanged.
    pub fn insert(&mut self, p: Point) -> Result<(), InvalidArgument> {
        check_point(p)?;
        let mut slot = &mut self.root;
        let mut depth = 0_usize;
        loop {
            match slot {
                None => {
                    *slot = Some(Box::new(Node::new(p, depth)));
                    self.len += 1;
                    return Ok(());
                }
                Some(node) => {
                    if node.point == p {
                        return Ok(());
                    }
                    depth = node.depth + 1;
                    slot = if split_value(p, node.depth) < split_value(node.point, node.depth) {
                        &mut node.left
                    } else {
                        &mut node.right
                    };
                }
            }
        }
    }

    /// Whether the exact point `p` is stored.
    pub fn contains(&self, p: Point) -> Result<bool, InvalidArgument> {
        check_point(p)?;
        let mut node = self.root.as_deref();
        while let Some(n) = node {
            if n.point == p {
                return Ok(true);
            }
            node = if split_value(p, n.depth) < split_value(n.point, n.depth) {
                n.left.as_deref()
            } else {
                n.right.as_deref()
            };
        }
        Ok(false)
    }

    /// Feed every stored point to `sink`, in unspecified order.
    ///
    /// This is the rendering hook: a caller that draws the point set passes a
    /// closure emitting one marker (say, a filled circle) per point.
    pub fn for_each_point(&self, mut sink: impl FnMut(Point)) {
        let mut stack: Vec<&Node> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(n) = stack.pop() {
            sink(n.point);
            if let Some(l) = n.left.as_deref() {
                stack.push(l);
            }
            if let Some(r) = n.right.as_deref() {
                stack.push(r);
            }
        }
    }
}
