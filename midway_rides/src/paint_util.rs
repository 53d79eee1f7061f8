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

//! Helpers shared by all track painters: the support checkerboard, station
//! platform drawing, the on-ride photo section, and the table-driven sprite
//! emitters.

use midway_paint::{
    BoundBoxXYZ, CoordsXY, CoordsXYZ, ImageIndex, MetalSupportPlace, MetalSupportType,
    PaintSession, Segments,
};

use crate::track::TrackElement;

/// Default cap on stacking above a flat-ish piece, in world units.
pub const DEFAULT_GENERAL_SUPPORT_HEIGHT: i32 = 32;

/// Slope byte passed with every general support-height update.
pub const GENERAL_SUPPORT_SLOPE: u8 = 0x20;

// Station platform bases, keyed by direction parity.
const SPR_STATION_BASE_A_SW_NE: ImageIndex = 22426;
const SPR_STATION_BASE_A_NW_SE: ImageIndex = 22427;

/// Full-tile base slab drawn beneath on-ride photo sections.
pub(crate) const SPR_STATION_BASE_D: ImageIndex = 22432;

// On-ride photo signage: [direction] -> (sign, camera, camera mid-flash).
const ON_RIDE_PHOTO_SPRITES: [[ImageIndex; 3]; 4] = [
    [25623, 25617, 25621],
    [25624, 25618, 25622],
    [25625, 25615, 25619],
    [25626, 25616, 25620],
];

/// Supports are drawn on alternating tiles so that double-width track reads
/// as one row of struts: both map-coordinate bit-5 parities equal.
pub fn should_paint_supports(position: CoordsXY) -> bool {
    (position.x & (1 << 5)) == (position.y & (1 << 5))
}

/// Two struts side by side, as used beneath station platforms.
pub fn draw_supports_side_by_side(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    kind: MetalSupportType,
) {
    let colours = session.support_colours();
    if direction & 1 != 0 {
        session.metal_a_supports(kind, MetalSupportPlace::TopCorner, 0, height, colours);
        session.metal_a_supports(kind, MetalSupportPlace::BottomCorner, 0, height, colours);
    } else {
        session.metal_a_supports(kind, MetalSupportPlace::LeftCorner, 0, height, colours);
        session.metal_a_supports(kind, MetalSupportPlace::RightCorner, 0, height, colours);
    }
}

/// Station platform base, drawn beneath the station track sprite.
pub fn draw_station_base(session: &mut PaintSession, direction: u8, height: i32) {
    let base = if direction & 1 != 0 {
        SPR_STATION_BASE_A_NW_SE
    } else {
        SPR_STATION_BASE_A_SW_NE
    };
    let image = session.misc_colours().with_index(base);
    session.add_as_parent_rotated(
        direction,
        image,
        CoordsXYZ::new(0, 0, height - 2),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 2, height), CoordsXYZ::new(32, 28, 2)),
    );
}

/// Camera, flash, and signage for an on-ride photo section. The flash sprite
/// is swapped in while the element reports a photo in progress.
pub fn on_ride_photo_paint(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
) {
    let sprites = &ON_RIDE_PHOTO_SPRITES[(direction & 3) as usize];
    let sign = session.misc_colours().with_index(sprites[0]);
    let camera = session
        .misc_colours()
        .with_index(if track_element.taking_photo {
            sprites[2]
        } else {
            sprites[1]
        });
    let post = CoordsXYZ::new(1, 1, 19);
    match direction & 3 {
        0 => {
            session.add_as_parent(sign, CoordsXYZ::new(26, 0, height), bb(26, 0, height, post));
            session.add_as_parent(sign, CoordsXYZ::new(26, 31, height), bb(26, 31, height, post));
            session.add_as_parent(camera, CoordsXYZ::new(6, 0, height), bb(6, 0, height, post));
        }
        1 => {
            session.add_as_parent(sign, CoordsXYZ::new(0, 6, height), bb(0, 6, height, post));
            session.add_as_parent(sign, CoordsXYZ::new(31, 6, height), bb(31, 6, height, post));
            session.add_as_parent(camera, CoordsXYZ::new(0, 26, height), bb(0, 26, height, post));
        }
        2 => {
            session.add_as_parent(sign, CoordsXYZ::new(6, 0, height), bb(6, 0, height, post));
            session.add_as_parent(sign, CoordsXYZ::new(6, 31, height), bb(6, 31, height, post));
            session.add_as_parent(camera, CoordsXYZ::new(26, 31, height), bb(26, 31, height, post));
        }
        _ => {
            session.add_as_parent(sign, CoordsXYZ::new(0, 26, height), bb(0, 26, height, post));
            session.add_as_parent(sign, CoordsXYZ::new(31, 26, height), bb(31, 26, height, post));
            session.add_as_parent(camera, CoordsXYZ::new(31, 6, height), bb(31, 6, height, post));
        }
    }
}

fn bb(x: i32, y: i32, z: i32, length: CoordsXYZ) -> BoundBoxXYZ {
    BoundBoxXYZ::new(CoordsXYZ::new(x, y, z), length)
}

/// Emits one sprite from a table entry whose box already carries the
/// direction-specific axis swap. The sprite anchors at the box offset.
pub(crate) fn paint_table_sprite(
    session: &mut PaintSession,
    index: ImageIndex,
    bound_box: BoundBoxXYZ,
    height: i32,
) {
    if index == crate::bolliger_mabillard::sprites::IMAGE_INDEX_UNDEFINED {
        return;
    }
    let image = session.track_colours().with_index(index);
    let offset = CoordsXYZ::new(bound_box.offset.x, bound_box.offset.y, height);
    session.add_as_parent(image, offset, raise(bound_box, height));
}

/// Like [`paint_table_sprite`], for pieces whose sprite anchor differs from
/// the box offset (loops, diagonals, transitions).
pub(crate) fn paint_table_sprite_at(
    session: &mut PaintSession,
    index: ImageIndex,
    offset: CoordsXYZ,
    bound_box: BoundBoxXYZ,
    height: i32,
) {
    if index == crate::bolliger_mabillard::sprites::IMAGE_INDEX_UNDEFINED {
        return;
    }
    let image = session.track_colours().with_index(index);
    let offset = CoordsXYZ::new(offset.x, offset.y, offset.z + height);
    session.add_as_parent(image, offset, raise(bound_box, height));
}

pub(crate) fn raise(bound_box: BoundBoxXYZ, height: i32) -> BoundBoxXYZ {
    BoundBoxXYZ::new(
        CoordsXYZ::new(
            bound_box.offset.x,
            bound_box.offset.y,
            bound_box.offset.z + height,
        ),
        bound_box.length,
    )
}

/// Full-tile occlusion at unlimited height, used by stations and photo
/// sections.
pub fn set_all_segments_unlimited(session: &mut PaintSession) {
    session.set_segment_support_height(Segments::ALL, midway_paint::SEGMENT_HEIGHT_UNLIMITED, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_checkerboard_matches_bit5_parity() {
        assert!(should_paint_supports(CoordsXY::new(0, 0)));
        assert!(should_paint_supports(CoordsXY::new(32, 32)));
        assert!(!should_paint_supports(CoordsXY::new(32, 0)));
        assert!(!should_paint_supports(CoordsXY::new(0, 32)));
        assert!(should_paint_supports(CoordsXY::new(64, 0)));
    }

    #[test]
    fn photo_section_draws_three_sprites_each_direction() {
        for direction in 0..4u8 {
            let mut session = PaintSession::new(CoordsXY::new(0, 0));
            on_ride_photo_paint(&mut session, direction, 16, &TrackElement::plain());
            assert_eq!(session.ops().len(), 3);
        }
    }
}
