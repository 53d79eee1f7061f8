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

//! The per-tile paint context. Ride painters are pure consumers of this
//! surface: they emit sprite draws, strut placements, tunnel pushes, and
//! occlusion bookkeeping into the session, and the compositor resolves draw
//! order from the accumulated stream after the tile is finished. The session
//! is externally owned and passed `&mut` down the paint call tree; painters
//! never hold state of their own.

use smallvec::SmallVec;

use crate::geometry::{BoundBoxXYZ, CoordsXY, CoordsXYZ};
use crate::image::ImageId;
use crate::segment::{PaintSegment, Segments};
use crate::support::{MetalSupportPlace, MetalSupportType, SupportFamily};
use crate::tunnel::TunnelType;

/// Segment support height sentinel: the segment is occupied all the way up.
pub const SEGMENT_HEIGHT_UNLIMITED: u16 = 0xFFFF;

/// One call emitted into the session, in emission order. Two paint
/// invocations are equivalent exactly when they produce equal op streams.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaintOp {
    /// Draw a sprite as a new parent entry in the tile's draw list.
    DrawAsParent {
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    },
    /// Draw a sprite attached to the previously drawn parent, sharing its
    /// draw-order slot.
    DrawAsChild {
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    },
    /// Plant a support strut.
    MetalSupport {
        family: SupportFamily,
        kind: MetalSupportType,
        place: MetalSupportPlace,
        special: i32,
        height: i32,
        colours: ImageId,
    },
    /// Carve a tunnel profile on the left tile edge.
    TunnelLeft { height: i32, tunnel: TunnelType },
    /// Carve a tunnel profile on the right tile edge.
    TunnelRight { height: i32, tunnel: TunnelType },
    /// Mark sub-segments as occupied up to `height`.
    SegmentSupportHeight {
        segments: Segments,
        height: u16,
        slope: u8,
    },
    /// Cap how high other objects may stack above this tile.
    GeneralSupportHeight { height: i32, slope: u8 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SegmentSupport {
    pub height: u16,
    pub slope: u8,
}

impl SegmentSupport {
    const fn clear() -> Self {
        SegmentSupport {
            height: 0,
            slope: 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TunnelEntry {
    pub height: i32,
    pub tunnel: TunnelType,
}

/// The paint context for one tile of one frame.
pub struct PaintSession {
    map_position: CoordsXY,
    track_colours: ImageId,
    support_colours: ImageId,
    misc_colours: ImageId,
    ops: Vec<PaintOp>,
    segment_support: [SegmentSupport; PaintSegment::COUNT],
    general_support: SegmentSupport,
    left_tunnels: SmallVec<[TunnelEntry; 8]>,
    right_tunnels: SmallVec<[TunnelEntry; 8]>,
}

impl PaintSession {
    pub fn new(map_position: CoordsXY) -> Self {
        PaintSession {
            map_position,
            track_colours: ImageId::new(0),
            support_colours: ImageId::new(0),
            misc_colours: ImageId::new(0),
            ops: Vec::new(),
            segment_support: [SegmentSupport::clear(); PaintSegment::COUNT],
            general_support: SegmentSupport::clear(),
            left_tunnels: SmallVec::new(),
            right_tunnels: SmallVec::new(),
        }
    }

    pub fn with_colours(
        map_position: CoordsXY,
        track_colours: ImageId,
        support_colours: ImageId,
        misc_colours: ImageId,
    ) -> Self {
        PaintSession {
            track_colours,
            support_colours,
            misc_colours,
            ..PaintSession::new(map_position)
        }
    }

    #[inline]
    pub fn map_position(&self) -> CoordsXY {
        self.map_position
    }

    /// Colour template for track sprites; stamp an index with
    /// [`ImageId::with_index`].
    #[inline]
    pub fn track_colours(&self) -> ImageId {
        self.track_colours
    }

    #[inline]
    pub fn support_colours(&self) -> ImageId {
        self.support_colours
    }

    /// Colour template for auxiliary sprites (station platforms, photo
    /// sections) that do not take the ride's track remap.
    #[inline]
    pub fn misc_colours(&self) -> ImageId {
        self.misc_colours
    }

    /// Draws a sprite as a parent entry in the tile's draw list.
    pub fn add_as_parent(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ) {
        self.ops.push(PaintOp::DrawAsParent {
            image,
            offset,
            bound_box,
        });
    }

    /// Draws a sprite attached to the most recent parent entry.
    pub fn add_as_child(&mut self, image: ImageId, offset: CoordsXYZ, bound_box: BoundBoxXYZ) {
        self.ops.push(PaintOp::DrawAsChild {
            image,
            offset,
            bound_box,
        });
    }

    /// Draws a sprite as a parent entry. Offsets and boxes are authored for
    /// directions 0/2; odd directions swap the horizontal axes.
    pub fn add_as_parent_rotated(
        &mut self,
        direction: u8,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        let (offset, bound_box) = rotate_to_direction(direction, offset, bound_box);
        self.ops.push(PaintOp::DrawAsParent {
            image,
            offset,
            bound_box,
        });
    }

    /// Draws a sprite as a child of the most recent parent entry.
    pub fn add_as_child_rotated(
        &mut self,
        direction: u8,
        image: ImageId,
        offset: CoordsXYZ,
        bound_box: BoundBoxXYZ,
    ) {
        let (offset, bound_box) = rotate_to_direction(direction, offset, bound_box);
        self.ops.push(PaintOp::DrawAsChild {
            image,
            offset,
            bound_box,
        });
    }

    /// Plants a standard-family strut. `special` is the piece-specific
    /// vertical adjustment in world units (crossbeam offset for sloped
    /// pieces, negative for hanging track).
    pub fn metal_a_supports(
        &mut self,
        kind: MetalSupportType,
        place: MetalSupportPlace,
        special: i32,
        height: i32,
        colours: ImageId,
    ) -> bool {
        self.ops.push(PaintOp::MetalSupport {
            family: SupportFamily::A,
            kind,
            place,
            special,
            height,
            colours,
        });
        true
    }

    /// Plants an alternate-family strut.
    pub fn metal_b_supports(
        &mut self,
        kind: MetalSupportType,
        place: MetalSupportPlace,
        special: i32,
        height: i32,
        colours: ImageId,
    ) -> bool {
        self.ops.push(PaintOp::MetalSupport {
            family: SupportFamily::B,
            kind,
            place,
            special,
            height,
            colours,
        });
        true
    }

    pub fn push_tunnel_left(&mut self, height: i32, tunnel: TunnelType) {
        self.left_tunnels.push(TunnelEntry { height, tunnel });
        self.ops.push(PaintOp::TunnelLeft { height, tunnel });
    }

    pub fn push_tunnel_right(&mut self, height: i32, tunnel: TunnelType) {
        self.right_tunnels.push(TunnelEntry { height, tunnel });
        self.ops.push(PaintOp::TunnelRight { height, tunnel });
    }

    /// Pushes a tunnel on the edge the piece's entrance faces: left for even
    /// directions, right for odd.
    pub fn push_tunnel_rotated(&mut self, direction: u8, height: i32, tunnel: TunnelType) {
        if direction & 1 == 0 {
            self.push_tunnel_left(height, tunnel);
        } else {
            self.push_tunnel_right(height, tunnel);
        }
    }

    /// Marks every segment in `segments` as occupied up to `height`
    /// ([`SEGMENT_HEIGHT_UNLIMITED`] for "all the way up").
    pub fn set_segment_support_height(&mut self, segments: Segments, height: u16, slope: u8) {
        for segment in segments.iter() {
            self.segment_support[segment.index()] = SegmentSupport { height, slope };
        }
        self.ops.push(PaintOp::SegmentSupportHeight {
            segments,
            height,
            slope,
        });
    }

    pub fn set_general_support_height(&mut self, height: i32, slope: u8) {
        self.general_support = SegmentSupport {
            height: height.clamp(0, u16::MAX as i32) as u16,
            slope,
        };
        self.ops.push(PaintOp::GeneralSupportHeight { height, slope });
    }

    /// The emitted call stream, in order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn segment_support(&self, segment: PaintSegment) -> SegmentSupport {
        self.segment_support[segment.index()]
    }

    pub fn general_support(&self) -> SegmentSupport {
        self.general_support
    }

    pub fn left_tunnels(&self) -> &[TunnelEntry] {
        &self.left_tunnels
    }

    pub fn right_tunnels(&self) -> &[TunnelEntry] {
        &self.right_tunnels
    }
}

#[inline]
fn rotate_to_direction(
    direction: u8,
    offset: CoordsXYZ,
    bound_box: BoundBoxXYZ,
) -> (CoordsXYZ, BoundBoxXYZ) {
    if direction & 1 != 0 {
        (offset.flipped_xy(), bound_box.flipped_xy())
    } else {
        (offset, bound_box)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tunnel::{TunnelGroup, TunnelSubType};

    fn flat_tunnel() -> TunnelType {
        TunnelType::new(TunnelGroup::Square, TunnelSubType::Flat)
    }

    #[test]
    fn parent_draw_rotates_odd_directions() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        let image = session.track_colours().with_index(17146);
        let offset = CoordsXYZ::new(0, 6, 0);
        let bb = BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3));
        session.add_as_parent_rotated(0, image, offset, bb);
        session.add_as_parent_rotated(1, image, offset, bb);
        let ops = session.ops();
        assert_eq!(
            ops[0],
            PaintOp::DrawAsParent {
                image,
                offset,
                bound_box: bb
            }
        );
        assert_eq!(
            ops[1],
            PaintOp::DrawAsParent {
                image,
                offset: offset.flipped_xy(),
                bound_box: bb.flipped_xy()
            }
        );
    }

    #[test]
    fn tunnel_side_follows_direction_parity() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        session.push_tunnel_rotated(0, 16, flat_tunnel());
        session.push_tunnel_rotated(3, 48, flat_tunnel());
        assert_eq!(session.left_tunnels().len(), 1);
        assert_eq!(session.right_tunnels().len(), 1);
        assert_eq!(session.left_tunnels()[0].height, 16);
        assert_eq!(session.right_tunnels()[0].height, 48);
    }

    #[test]
    fn segment_heights_update_masked_segments_only() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        session.set_segment_support_height(
            Segments::STRAIGHT_FLAT,
            SEGMENT_HEIGHT_UNLIMITED,
            0,
        );
        assert_eq!(
            session.segment_support(PaintSegment::Centre).height,
            SEGMENT_HEIGHT_UNLIMITED
        );
        assert_eq!(
            session.segment_support(PaintSegment::TopRight).height,
            SEGMENT_HEIGHT_UNLIMITED
        );
        assert_eq!(session.segment_support(PaintSegment::Top).height, 0);
    }
}
