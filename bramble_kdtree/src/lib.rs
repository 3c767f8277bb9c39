// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bramble KdTree: a kurbo-native 2-D point tree.
//!
//! Bramble KdTree is a reusable building block for point-set queries.
//!
//! - Insert distinct [`kurbo::Point`]s; re-inserting a stored point is a no-op.
//! - Test membership, collect points inside an axis-aligned [`kurbo::Rect`],
//!   and find the nearest stored point to a query.
//! - Feed the whole point set to a rendering sink with
//!   [`KdTree::for_each_point`].
//!
//! The structure is a classic 2-D tree: a binary search tree whose comparison
//! dimension alternates with depth (x at even depths, y at odd). Both search
//! operations prune subtrees on the wrong side of a splitting line, so small
//! queries over a well-spread point set stay sub-linear. There is no
//! rebalancing and no deletion; tree shape follows insertion order.
//!
//! # Example
//!
//! ```rust
//! use bramble_kdtree::KdTree;
//! use kurbo::{Point, Rect};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.2, 0.3))?;
//! tree.insert(Point::new(0.4, 0.7))?;
//! tree.insert(Point::new(0.9, 0.6))?;
//! assert_eq!(tree.len(), 3);
//!
//! // Membership is exact coordinate equality.
//! assert!(tree.contains(Point::new(0.4, 0.7))?);
//!
//! // Range queries are inclusive of the rectangle's boundary.
//! let inside = tree.range(Rect::new(0.0, 0.0, 1.0, 1.0))?;
//! assert_eq!(inside.len(), 3);
//!
//! // Nearest neighbor by squared Euclidean distance.
//! let near = tree.nearest(Point::new(0.5, 0.5))?;
//! assert_eq!(near, Some(Point::new(0.4, 0.7)));
//! # Ok::<(), bramble_kdtree::InvalidArgument>(())
//! ```
//!
//! # Float semantics
//!
//! Coordinates must be finite. Every operation validates its argument and
//! fails with [`InvalidArgument`] on a NaN or infinite coordinate; this is
//! the crate's only error. Misses are ordinary values (`Ok(false)`,
//! `Ok(None)`, or an empty `Vec`).
//!
//! # Concurrency
//!
//! The tree is a plain owned structure with no interior mutability. It is not
//! safe for concurrent mutation; share it behind a lock, or insert from a
//! single writer while readers are quiescent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod query;
mod tree;
mod types;

pub use tree::KdTree;
pub use types::InvalidArgument;
