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

//! Each tile is subdivided into nine named sub-areas for occlusion
//! bookkeeping: four corners, four sides, and the centre. Track painters mark
//! which sub-areas a piece occupies (and to what height), and the compositor
//! uses that to clip supports and hide obscured objects.
//!
//! The eight outer segments occupy the low byte of the bitset in clockwise
//! ring order, so rotating a piece by one 90 degree step is a rotate-left by
//! two bits. The centre never moves.

use std::fmt::Debug;

/// One of the nine tile sub-segments.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum PaintSegment {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
    Centre = 8,
}

impl PaintSegment {
    pub const COUNT: usize = 9;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const ALL: [PaintSegment; 9] = [
        PaintSegment::Top,
        PaintSegment::TopRight,
        PaintSegment::Right,
        PaintSegment::BottomRight,
        PaintSegment::Bottom,
        PaintSegment::BottomLeft,
        PaintSegment::Left,
        PaintSegment::TopLeft,
        PaintSegment::Centre,
    ];
}

/// A set of tile sub-segments.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segments(u16);

impl Segments {
    pub const NONE: Segments = Segments(0);
    pub const TOP: Segments = Segments(1 << 0);
    pub const TOP_RIGHT: Segments = Segments(1 << 1);
    pub const RIGHT: Segments = Segments(1 << 2);
    pub const BOTTOM_RIGHT: Segments = Segments(1 << 3);
    pub const BOTTOM: Segments = Segments(1 << 4);
    pub const BOTTOM_LEFT: Segments = Segments(1 << 5);
    pub const LEFT: Segments = Segments(1 << 6);
    pub const TOP_LEFT: Segments = Segments(1 << 7);
    pub const CENTRE: Segments = Segments(1 << 8);
    pub const ALL: Segments = Segments(0x1FF);

    /// Straight track along the tile: the centre plus the two sides the rails
    /// pass over, given for direction 0.
    pub const STRAIGHT_FLAT: Segments =
        Segments::CENTRE.or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT);

    #[inline]
    pub const fn of(segment: PaintSegment) -> Segments {
        Segments(1 << (segment as u16))
    }

    #[inline]
    pub const fn or(self, other: Segments) -> Segments {
        Segments(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, segment: PaintSegment) -> bool {
        self.0 & (1 << (segment as u16)) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Rotates the outer ring by `direction` 90 degree steps; the centre bit
    /// is unaffected.
    #[inline]
    pub const fn rotated(self, direction: u8) -> Segments {
        let ring = (self.0 & 0xFF) as u8;
        let ring = ring.rotate_left(((direction & 3) as u32) * 2);
        Segments((self.0 & 0x100) | ring as u16)
    }

    pub fn iter(self) -> impl Iterator<Item = PaintSegment> {
        PaintSegment::ALL
            .into_iter()
            .filter(move |s| self.contains(*s))
    }
}

impl Debug for Segments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_moves_ring_clockwise() {
        assert_eq!(Segments::TOP.rotated(1), Segments::RIGHT);
        assert_eq!(Segments::TOP_LEFT.rotated(1), Segments::TOP_RIGHT);
        assert_eq!(Segments::BOTTOM.rotated(2), Segments::TOP);
        assert_eq!(Segments::LEFT.rotated(3), Segments::BOTTOM);
        assert_eq!(Segments::CENTRE.rotated(1), Segments::CENTRE);
    }

    #[test]
    fn rotation_by_four_is_identity() {
        let s = Segments::STRAIGHT_FLAT.or(Segments::TOP_RIGHT);
        assert_eq!(s.rotated(4), s);
        assert_eq!(s.rotated(1).rotated(1).rotated(1).rotated(1), s);
    }

    #[test]
    fn straight_flat_is_symmetric_under_half_turn() {
        assert_eq!(Segments::STRAIGHT_FLAT.rotated(2), Segments::STRAIGHT_FLAT);
        assert_ne!(Segments::STRAIGHT_FLAT.rotated(1), Segments::STRAIGHT_FLAT);
    }

    #[test]
    fn all_contains_every_segment() {
        for seg in PaintSegment::ALL {
            assert!(Segments::ALL.contains(seg));
        }
        assert_eq!(Segments::ALL.rotated(3), Segments::ALL);
    }
}
