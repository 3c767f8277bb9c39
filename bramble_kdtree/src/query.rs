// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range and nearest-neighbor searches.
//!
//! Both queries exploit the partition invariant to prune: a subtree whose
//! side of the splitting line provably cannot contribute is never visited,
//! so a small query over a well-spread point set touches far fewer nodes
//! than a linear scan.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::tree::{KdTree, Node};
use crate::types::{
    InvalidArgument, check_point, check_rect, rect_contains, split_bounds, split_value,
};

impl KdTree {
    /// All stored points inside `rect`, inclusive of its boundary.
    ///
    /// Result order is unspecified; treat the result as a set.
    ///
    /// Traversal is iterative with an explicit work stack, so an
    /// adversarially deep tree cannot overflow the call stack here.
    pub fn range(&self, rect: Rect) -> Result<Vec<Point>, InvalidArgument> {
        check_rect(&rect)?;
        let mut out = Vec::new();
        let mut stack: Vec<&Node> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            if rect_contains(&rect, node.point) {
                // A match says nothing about either side of the split:
                // both subtrees may still hold points inside the rect.
                out.push(node.point);
                if let Some(r) = node.right.as_deref() {
                    stack.push(r);
                }
                if let Some(l) = node.left.as_deref() {
                    stack.push(l);
                }
                continue;
            }
            let v = split_value(node.point, node.depth);
            let (min, max) = split_bounds(&rect, node.depth);
            if min < v && v < max {
                // The rect straddles the splitting line.
                if let Some(r) = node.right.as_deref() {
                    stack.push(r);
                }
                if let Some(l) = node.left.as_deref() {
                    stack.push(l);
                }
            } else if min > v {
                // Only values >= v live on the right.
                if let Some(r) = node.right.as_deref() {
                    stack.push(r);
                }
            } else if max < v {
                if let Some(l) = node.left.as_deref() {
                    stack.push(l);
                }
            }
            // A node outside the rect whose coordinate equals one of the
            // rect's bounds on its dimension descends into neither side.
        }
        Ok(out)
    }

    /// The stored point closest to `p` by squared Euclidean distance, or
    /// `None` if the tree is empty.
    ///
    /// A stored point exactly equal to `p` contributes no candidate: its
    /// whole node is treated as absent, so querying a stored point returns
    /// some *other* point, or `None` when it is the only one. Callers that
    /// want the zero-distance answer should check
    /// [`contains`](Self::contains) first.
    ///
    /// Recursion depth equals tree height, which is linear in the point
    /// count for adversarial insertion orders.
    pub fn nearest(&self, p: Point) -> Result<Option<Point>, InvalidArgument> {
        check_point(p)?;
        Ok(nearest_in(self.root.as_deref(), p).map(|n| n.point))
    }
}

fn nearest_in<'t>(node: Option<&'t Node>, p: Point) -> Option<&'t Node> {
    let node = node?;
    if node.point == p {
        return None;
    }

    let node_value = split_value(node.point, node.depth);
    let target_value = split_value(p, node.depth);
    // Closest point on the splitting line to the query. If the query is
    // no closer to the line than to this node's point, nothing on the far
    // side can beat candidates from the near side.
    let boundary = if node.depth % 2 == 0 {
        Point::new(node_value, p.y)
    } else {
        Point::new(p.x, node_value)
    };

    let mut near_left = None;
    let mut near_right = None;
    if target_value < node_value {
        near_left = nearest_in(node.left.as_deref(), p);
        if boundary.distance_squared(p) < node.point.distance_squared(p) {
            near_right = nearest_in(node.right.as_deref(), p);
        }
    } else {
        near_right = nearest_in(node.right.as_deref(), p);
        if boundary.distance_squared(p) < node.point.distance_squared(p) {
            near_left = nearest_in(node.left.as_deref(), p);
        }
    }

    // Strict comparisons: on a distance tie the earlier candidate wins.
    let mut best = node;
    if let Some(l) = near_left
        && l.point.distance_squared(p) < best.point.distance_squared(p)
    {
        best = l;
    }
    if let Some(r) = near_right
        && r.point.distance_squared(p) < best.point.distance_squared(p)
    {
        best = r;
    }
    Some(best)
}
