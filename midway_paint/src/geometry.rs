// Copyright 2025 midway developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;

/// A 2D coordinate on the tile grid, in world units (one tile spans 32 units).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct CoordsXY {
    pub x: i32,
    pub y: i32,
}

impl CoordsXY {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Debug for CoordsXY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {})", self.x, self.y))
    }
}

/// A 3D coordinate; `z` is the vertical axis, in the same world units.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct CoordsXYZ {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CoordsXYZ {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The same point with the horizontal axes swapped. Sprite offsets and
    /// bounding boxes are authored for directions 0/2; odd directions view the
    /// piece across the other diagonal, which on the tile grid is exactly an
    /// x/y swap.
    #[inline]
    pub const fn flipped_xy(&self) -> CoordsXYZ {
        CoordsXYZ {
            x: self.y,
            y: self.x,
            z: self.z,
        }
    }
}

impl Debug for CoordsXYZ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, {}, {})", self.x, self.y, self.z))
    }
}

/// The box a sprite occupies for draw-order purposes: an offset from the tile
/// origin plus an extent along each axis. Paint order between overlapping
/// sprites on neighbouring tiles is resolved from these boxes by the
/// compositor, so they are part of the asset contract, not a hint.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct BoundBoxXYZ {
    pub offset: CoordsXYZ,
    pub length: CoordsXYZ,
}

impl BoundBoxXYZ {
    pub const fn new(offset: CoordsXYZ, length: CoordsXYZ) -> Self {
        Self { offset, length }
    }

    #[inline]
    pub const fn flipped_xy(&self) -> BoundBoxXYZ {
        BoundBoxXYZ {
            offset: self.offset.flipped_xy(),
            length: self.length.flipped_xy(),
        }
    }
}

impl Debug for BoundBoxXYZ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}+{:?}", self.offset, self.length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_swaps_horizontal_axes_only() {
        let c = CoordsXYZ::new(1, 2, 3);
        assert_eq!(c.flipped_xy(), CoordsXYZ::new(2, 1, 3));
        assert_eq!(c.flipped_xy().flipped_xy(), c);

        let b = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3));
        let flipped = b.flipped_xy();
        assert_eq!(flipped.offset, CoordsXYZ::new(6, 0, 0));
        assert_eq!(flipped.length, CoordsXYZ::new(20, 32, 3));
    }
}
