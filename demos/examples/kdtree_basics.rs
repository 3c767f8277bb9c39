// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point tree basics.
//!
//! Build a small tree, then run membership, range, and nearest queries.
//!
//! Run:
//! - `cargo run -p bramble_examples --example kdtree_basics`

use bramble_kdtree::KdTree;
use kurbo::{Point, Rect};

fn main() {
    let mut tree = KdTree::new();
    for p in [
        Point::new(0.2, 0.3),
        Point::new(0.4, 0.7),
        Point::new(0.9, 0.6),
    ] {
        tree.insert(p).expect("finite coordinates");
    }
    println!("stored points: {}", tree.len());

    let stored = tree.contains(Point::new(0.4, 0.7)).unwrap();
    println!("contains (0.4, 0.7): {stored}");

    let inside = tree.range(Rect::new(0.0, 0.0, 0.5, 1.0)).unwrap();
    println!("points in [0,0.5]x[0,1]: {inside:?}");

    let near = tree.nearest(Point::new(0.5, 0.5)).unwrap();
    println!("nearest to (0.5, 0.5): {near:?}");
    assert_eq!(
        near,
        Some(Point::new(0.4, 0.7)),
        "(0.4, 0.7) is the closest stored point to the query"
    );
}
