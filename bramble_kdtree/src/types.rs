// Copyright 2025 the Bramble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type and geometric helpers shared across the crate.

use kurbo::{Point, Rect};

/// Error returned when an operation receives a point or rectangle with a
/// non-finite (NaN or infinite) coordinate.
///
/// This is the only error the tree produces. Ordinary misses are values,
/// not errors: a membership miss is `Ok(false)` and a nearest-neighbor
/// query on an empty tree is `Ok(None)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidArgument;

impl core::fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("argument has a non-finite coordinate")
    }
}

impl core::error::Error for InvalidArgument {}

/// The coordinate a node at `depth` compares on: x at even depths, y at odd.
#[inline]
pub(crate) fn split_value(p: Point, depth: usize) -> f64 {
    if depth % 2 == 0 { p.x } else { p.y }
}

/// The rectangle's bounds on the dimension a node at `depth` compares on.
#[inline]
pub(crate) fn split_bounds(rect: &Rect, depth: usize) -> (f64, f64) {
    if depth % 2 == 0 {
        (rect.x0, rect.x1)
    } else {
        (rect.y0, rect.y1)
    }
}

/// Inclusive point containment on both axes.
///
/// Kurbo's `Rect::contains` excludes the maximum edges; range queries here
/// include points on every edge of the rectangle.
#[inline]
pub(crate) fn rect_contains(rect: &Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

#[inline]
pub(crate) fn check_point(p: Point) -> Result<(), InvalidArgument> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(())
    } else {
        Err(InvalidArgument)
    }
}

#[inline]
pub(crate) fn check_rect(rect: &Rect) -> Result<(), InvalidArgument> {
    if rect.x0.is_finite() && rect.x1.is_finite() && rect.y0.is_finite() && rect.y1.is_finite() {
        Ok(())
    } else {
        Err(InvalidArgument)
    }
}
