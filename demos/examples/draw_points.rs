// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering hook.
//!
//! `for_each_point` feeds every stored point to a caller-supplied sink; a
//! real canvas would draw a marker per point. Here the sink emits one
//! `filled_circle` line per point.
//!
//! Run:
//! - `cargo run -p bramble_examples --example draw_points`

use bramble_kdtree::KdTree;
use kurbo::Point;

fn main() {
    let mut tree = KdTree::new();
    for i in 0..8u32 {
        let t = f64::from(i) / 8.0;
        // A ring of points around the unit square's center.
        let (s, c) = (std::f64::consts::TAU * t).sin_cos();
        tree.insert(Point::new(0.5 + 0.4 * c, 0.5 + 0.4 * s))
            .expect("finite coordinates");
    }

    let mut drawn = 0_usize;
    tree.for_each_point(|p| {
        println!("filled_circle x={:.3} y={:.3} r=0.01", p.x, p.y);
        drawn += 1;
    });
    assert_eq!(drawn, tree.len(), "every stored point is drawn exactly once");
}
