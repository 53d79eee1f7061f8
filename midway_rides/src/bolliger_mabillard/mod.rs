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

//! Shared painter for the upright chain-lift coaster family, parameterized by
//! the metal support style of the concrete ride type. Ride painters either
//! delegate whole pieces here (the flying coaster's upright halves) or fall
//! back to [`track_paint_function`] for pieces they do not customize.
//!
//! Every down-facing or right-facing piece is its mirror counterpart invoked
//! with a rotated direction (and, for multi-tile turns, the tile sequence
//! remapped through the shared lookup tables); only the "primary" of each
//! pair selects sprites itself.

pub(crate) mod sprites;

use midway_paint::{
    MetalSupportPlace, MetalSupportType, PaintSession, Segments, TunnelGroup, TunnelSubType,
    TunnelType,
};

use crate::paint_util::{
    self, paint_table_sprite, paint_table_sprite_at, should_paint_supports,
    DEFAULT_GENERAL_SUPPORT_HEIGHT, GENERAL_SUPPORT_SLOPE,
};
use crate::track::{
    Ride, TrackElemType, TrackElement, MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT,
};
use crate::TrackPaintFunction;

const TUNNEL: TunnelGroup = TunnelGroup::Square;

const FLAT_TUNNEL: TunnelType = TunnelType::new(TUNNEL, TunnelSubType::Flat);
const SLOPE_START_TUNNEL: TunnelType = TunnelType::new(TUNNEL, TunnelSubType::SlopeStart);
const SLOPE_END_TUNNEL: TunnelType = TunnelType::new(TUNNEL, TunnelSubType::SlopeEnd);
const FLAT_TO_25_TUNNEL: TunnelType = TunnelType::new(TUNNEL, TunnelSubType::FlatTo25Deg);

const UNLIMITED: u16 = midway_paint::SEGMENT_HEIGHT_UNLIMITED;

/// Diagonal pieces plant their strut on the final tile, at the corner
/// matching the direction of travel.
const DIAG_SUPPORT_PLACE: [MetalSupportPlace; 4] = [
    MetalSupportPlace::LeftCorner,
    MetalSupportPlace::TopCorner,
    MetalSupportPlace::RightCorner,
    MetalSupportPlace::BottomCorner,
];

#[inline]
fn chain_row(track_element: &TrackElement) -> usize {
    usize::from(track_element.has_chain())
}

/// Reverses a tile sequence for mirrored traversal; out-of-range sequences
/// stay out of range (the piece draws nothing).
fn reversed_sequence(track_sequence: u8, last: u8) -> Option<u8> {
    (track_sequence <= last).then(|| last - track_sequence)
}

#[inline]
fn centre_support(
    session: &mut PaintSession,
    support_type: MetalSupportType,
    special: i32,
    height: i32,
) {
    let colours = session.support_colours();
    session.metal_a_supports(support_type, MetalSupportPlace::Centre, special, height, colours);
}

#[inline]
fn centre_support_checked(
    session: &mut PaintSession,
    support_type: MetalSupportType,
    special: i32,
    height: i32,
) {
    if should_paint_supports(session.map_position()) {
        centre_support(session, support_type, special, height);
    }
}

#[inline]
fn set_segments(session: &mut PaintSession, segments: Segments, direction: u8) {
    session.set_segment_support_height(segments.rotated(direction), UNLIMITED, 0);
}

#[inline]
fn general_height(session: &mut PaintSession, height: i32) {
    session.set_general_support_height(height, GENERAL_SUPPORT_SLOPE);
}

/// Straight one-tile pieces whose sprites are `[chain][direction]` with a
/// box per direction.
fn paint_straight(
    session: &mut PaintSession,
    sprites: &[[midway_paint::ImageIndex; 4]; 2],
    boxes: &[midway_paint::BoundBoxXYZ; 4],
    track_element: &TrackElement,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites[chain_row(track_element)][d], boxes[d], height);
}

pub(crate) fn track_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_straight(
        session,
        &sprites::FLAT_SPRITES,
        &sprites::FLAT_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn track_station(
    session: &mut PaintSession,
    ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_util::draw_station_base(session, direction, height);
    let d = (direction & 3) as usize;
    let track = if ride.block_sectioned
        && track_element.track_type_id == TrackElemType::EndStation.id()
    {
        sprites::BLOCK_BRAKES_SPRITES[usize::from(track_element.brake_closed)][d]
    } else {
        sprites::STATION_SPRITES[d]
    };
    let image = session.track_colours().with_index(track);
    let bb = paint_util::raise(sprites::STATION_BOUND_BOXES[d], height);
    session.add_as_child(image, midway_paint::CoordsXYZ::new(0, 0, height), bb);
    if should_paint_supports(session.map_position()) {
        paint_util::draw_supports_side_by_side(session, direction, height, support_type);
    }
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    paint_util::set_all_segments_unlimited(session);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn track_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_straight(
        session,
        &sprites::UP_25_SPRITES,
        &sprites::UP_25_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 8, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 56);
}

pub(crate) fn track_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_straight(
        session,
        &sprites::UP_60_SPRITES,
        &sprites::UP_60_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 32, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 56, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 104);
}

pub(crate) fn track_flat_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_straight(
        session,
        &sprites::FLAT_TO_UP_25_SPRITES,
        &sprites::FLAT_TO_UP_25_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

fn paint_two_part_slope(
    session: &mut PaintSession,
    sprites_table: &[[[midway_paint::ImageIndex; 2]; 4]; 2],
    boxes: &[[midway_paint::BoundBoxXYZ; 2]; 4],
    track_element: &TrackElement,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    let row = &sprites_table[chain_row(track_element)][d];
    paint_table_sprite(session, row[0], boxes[d][0], height);
    paint_table_sprite(session, row[1], boxes[d][1], height);
}

pub(crate) fn track_25_deg_up_to_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_two_part_slope(
        session,
        &sprites::UP_25_TO_UP_60_SPRITES,
        &sprites::UP_25_TO_UP_60_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 12, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 24, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 72);
}

pub(crate) fn track_60_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_two_part_slope(
        session,
        &sprites::UP_60_TO_UP_25_SPRITES,
        &sprites::UP_60_TO_UP_25_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 20, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 24, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 72);
}

pub(crate) fn track_25_deg_up_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_straight(
        session,
        &sprites::UP_25_TO_FLAT_SPRITES,
        &sprites::UP_25_TO_FLAT_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_60_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_flat_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_to_flat(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_25_deg_down_to_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_60_deg_up_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_60_deg_down_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_to_60_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_25_deg_down_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_flat_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = sprites::LEFT_QUARTER_TURN_5_TILES_SPRITES[d].get(track_sequence as usize) {
        paint_table_sprite(
            session,
            index,
            sprites::LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES[d][track_sequence as usize],
            height,
        );
    }
    match track_sequence {
        0 => {
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            }
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::LEFT)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        5 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        6 => {
            centre_support(session, support_type, 0, height);
            match direction {
                2 => session.push_tunnel_right(height, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 | 4 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_right_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_quarter_turn_5(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

fn paint_bank_transition(
    session: &mut PaintSession,
    sprites_table: &[[midway_paint::ImageIndex; 2]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 2]; 4],
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites_table[d][0], boxes[d][0], height);
    paint_table_sprite(session, sprites_table[d][1], boxes[d][1], height);
}

pub(crate) fn track_flat_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_bank_transition(
        session,
        &sprites::FLAT_TO_LEFT_BANK_SPRITES,
        &sprites::FLAT_TO_LEFT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn track_flat_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_bank_transition(
        session,
        &sprites::FLAT_TO_RIGHT_BANK_SPRITES,
        &sprites::FLAT_TO_RIGHT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn track_left_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_flat_to_right_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_flat_to_left_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_banked_left_quarter_turn_5(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(row) = sprites::BANKED_LEFT_QUARTER_TURN_5_TILES_SPRITES[d].get(s) {
        paint_table_sprite(session, row[0], sprites::BANKED_LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES[d][s][0], height);
        paint_table_sprite(session, row[1], sprites::BANKED_LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES[d][s][1], height);
    }
    match track_sequence {
        0 => {
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            }
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::LEFT)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        5 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        6 => {
            centre_support(session, support_type, 0, height);
            match direction {
                2 => session.push_tunnel_right(height, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 | 4 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_banked_right_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_banked_left_quarter_turn_5(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_bank_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_bank_transition(
        session,
        &sprites::LEFT_BANK_TO_UP_25_SPRITES,
        &sprites::LEFT_BANK_TO_UP_25_BOUND_BOXES,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

pub(crate) fn track_right_bank_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_bank_transition(
        session,
        &sprites::RIGHT_BANK_TO_UP_25_SPRITES,
        &sprites::RIGHT_BANK_TO_UP_25_BOUND_BOXES,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

pub(crate) fn track_25_deg_up_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_bank_transition(
        session,
        &sprites::UP_25_TO_LEFT_BANK_SPRITES,
        &sprites::UP_25_TO_LEFT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_25_deg_up_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_bank_transition(
        session,
        &sprites::UP_25_TO_RIGHT_BANK_SPRITES,
        &sprites::UP_25_TO_RIGHT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_left_bank_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_to_right_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_bank_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_to_left_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_25_deg_down_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_right_bank_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_25_deg_down_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_bank_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::LEFT_BANK_SPRITES[d], sprites::LEFT_BANK_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn track_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

fn paint_seq(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 7]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 7]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = table[d].get(track_sequence as usize) {
        paint_table_sprite(session, index, boxes[d][track_sequence as usize], height);
    }
}

fn quarter_turn_5_25_deg_up_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    support_type: MetalSupportType,
    entry_segments: Segments,
    seq2_segments: Segments,
    seq3_segments: Segments,
    exit_segments: Segments,
    exit_tunnel_directions: (u8, u8),
) {
    match track_sequence {
        0 => {
            centre_support(session, support_type, 8, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(session, entry_segments, direction);
            general_height(session, height + 72);
        }
        2 => {
            set_segments(session, seq2_segments, direction);
            general_height(session, height + 72);
        }
        3 => {
            set_segments(session, seq3_segments, direction);
            general_height(session, height + 64);
        }
        5 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 72);
        }
        6 => {
            centre_support(session, support_type, 8, height);
            if direction == exit_tunnel_directions.0 {
                session.push_tunnel_right(height + 8, SLOPE_END_TUNNEL);
            } else if direction == exit_tunnel_directions.1 {
                session.push_tunnel_left(height + 8, SLOPE_END_TUNNEL);
            }
            set_segments(session, exit_segments, direction);
            general_height(session, height + 72);
        }
        1 | 4 => general_height(session, height + 72),
        _ => {}
    }
}

pub(crate) fn track_left_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_seq(
        session,
        &sprites::LEFT_QUARTER_TURN_5_TILES_UP_25_SPRITES,
        &sprites::LEFT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    quarter_turn_5_25_deg_up_scaffold(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT),
        Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
        Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
        (2, 3),
    );
}

pub(crate) fn track_right_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_seq(
        session,
        &sprites::RIGHT_QUARTER_TURN_5_TILES_UP_25_SPRITES,
        &sprites::RIGHT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    quarter_turn_5_25_deg_up_scaffold(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT),
        Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::TOP_RIGHT),
        Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
        (0, 1),
    );
}

pub(crate) fn track_left_quarter_turn_5_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_right_quarter_turn_5_25_deg_up(session, ride, remapped, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_quarter_turn_5_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_quarter_turn_5_25_deg_up(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

fn s_bend_paint(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 4]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 4]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = table[d].get(track_sequence as usize) {
        paint_table_sprite(session, index, boxes[d][track_sequence as usize], height);
    }
}

fn s_bend_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    support_type: MetalSupportType,
    mirrored: bool,
) {
    // The middle tiles hang their strut on the inside of the curve; the side
    // flips when the bend is mirrored and when traversed from the far end.
    let seq1_segments = if mirrored {
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT)
    } else {
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
    };
    let seq2_segments = if mirrored {
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
    } else {
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT)
    };
    let inner_place = if mirrored {
        MetalSupportPlace::BottomRightSide
    } else {
        MetalSupportPlace::TopLeftSide
    };
    match track_sequence {
        0 => {
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            }
            set_segments(session, Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT), direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 => {
            if direction == 0 || direction == 1 {
                let colours = session.support_colours();
                session.metal_a_supports(support_type, inner_place, 0, height, colours);
            }
            set_segments(session, seq1_segments, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            if direction == 2 || direction == 3 {
                let colours = session.support_colours();
                session.metal_a_supports(support_type, inner_place, 0, height, colours);
            }
            set_segments(session, seq2_segments, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            centre_support(session, support_type, 0, height);
            let (right_dir, left_dir) = if mirrored { (2, 1) } else { (1, 2) };
            if direction == right_dir {
                session.push_tunnel_right(height, FLAT_TUNNEL);
            } else if direction == left_dir {
                session.push_tunnel_left(height, FLAT_TUNNEL);
            }
            set_segments(session, Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT), direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        _ => {}
    }
}

pub(crate) fn track_s_bend_left(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    s_bend_paint(
        session,
        &sprites::S_BEND_LEFT_SPRITES,
        &sprites::S_BEND_LEFT_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    s_bend_scaffold(session, track_sequence, direction, height, support_type, false);
}

pub(crate) fn track_s_bend_right(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    s_bend_paint(
        session,
        &sprites::S_BEND_RIGHT_SPRITES,
        &sprites::S_BEND_RIGHT_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    s_bend_scaffold(session, track_sequence, direction, height, support_type, true);
}

fn vertical_loop_paint(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 10]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 10]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 10]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = table[d].get(s) {
        paint_table_sprite_at(session, index, offsets[d][s], boxes[d][s], height);
    }
}

fn vertical_loop_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    entry_segments: Segments,
    exit_segments: Segments,
    entry_tunnel_directions: (u8, u8),
    exit_tunnel_directions: (u8, u8),
) {
    match track_sequence {
        0 => {
            if direction == entry_tunnel_directions.0 || direction == entry_tunnel_directions.1 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(session, entry_segments, direction);
            general_height(session, height + 56);
        }
        1 => {
            set_segments(session, entry_segments, direction);
            general_height(session, height + 72);
        }
        2 => {
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + 168);
        }
        3 => {
            set_segments(session, entry_segments, direction);
            general_height(session, height + 48);
        }
        4 | 5 => general_height(session, height + 48),
        6 => {
            set_segments(session, exit_segments, direction);
            general_height(session, height + 48);
        }
        7 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 168);
        }
        8 => {
            set_segments(session, exit_segments, direction);
            general_height(session, height + 72);
        }
        9 => {
            if direction == exit_tunnel_directions.0 {
                session.push_tunnel_right(height - 8, SLOPE_START_TUNNEL);
            } else if direction == exit_tunnel_directions.1 {
                session.push_tunnel_left(height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(session, exit_segments, direction);
            general_height(session, height + 56);
        }
        _ => {}
    }
}

pub(crate) fn track_left_vertical_loop(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    _support_type: MetalSupportType,
) {
    vertical_loop_paint(
        session,
        &sprites::LEFT_VERTICAL_LOOP_SPRITES,
        &sprites::LEFT_VERTICAL_LOOP_OFFSETS,
        &sprites::LEFT_VERTICAL_LOOP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    vertical_loop_scaffold(
        session,
        track_sequence,
        direction,
        height,
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT),
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT),
        (0, 3),
        (1, 2),
    );
}

pub(crate) fn track_right_vertical_loop(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    _support_type: MetalSupportType,
) {
    vertical_loop_paint(
        session,
        &sprites::RIGHT_VERTICAL_LOOP_SPRITES,
        &sprites::RIGHT_VERTICAL_LOOP_OFFSETS,
        &sprites::RIGHT_VERTICAL_LOOP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    vertical_loop_scaffold(
        session,
        track_sequence,
        direction,
        height,
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT),
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT),
        (0, 3),
        (1, 2),
    );
}

fn quarter_turn_3_paint(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 4]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 4]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = table[d].get(track_sequence as usize) {
        paint_table_sprite(session, index, boxes[d][track_sequence as usize], height);
    }
}

fn quarter_turn_3_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    support_type: MetalSupportType,
) {
    match track_sequence {
        0 => {
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            }
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            centre_support(session, support_type, 0, height);
            match direction {
                2 => session.push_tunnel_right(height, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_left_quarter_turn_3(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    quarter_turn_3_paint(
        session,
        &sprites::LEFT_QUARTER_TURN_3_TILES_SPRITES,
        &sprites::LEFT_QUARTER_TURN_3_TILES_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    quarter_turn_3_scaffold(session, track_sequence, direction, height, support_type);
}

pub(crate) fn track_right_quarter_turn_3(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_quarter_turn_3(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_quarter_turn_3_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(row) = sprites::LEFT_BANKED_QUARTER_TURN_3_TILES_SPRITES[d].get(s) {
        paint_table_sprite(session, row[0], sprites::LEFT_BANKED_QUARTER_TURN_3_TILES_BOUND_BOXES[d][s][0], height);
        paint_table_sprite(session, row[1], sprites::LEFT_BANKED_QUARTER_TURN_3_TILES_BOUND_BOXES[d][s][1], height);
    }
    quarter_turn_3_scaffold(session, track_sequence, direction, height, support_type);
}

pub(crate) fn track_right_quarter_turn_3_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_quarter_turn_3_bank(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

fn quarter_turn_3_25_deg_paint(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 4]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 4]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 4]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = table[d].get(s) {
        paint_table_sprite_at(session, index, offsets[d][s], boxes[d][s], height);
    }
}

pub(crate) fn track_left_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    quarter_turn_3_25_deg_paint(
        session,
        &sprites::LEFT_QUARTER_TURN_3_TILES_UP_25_SPRITES,
        &sprites::LEFT_QUARTER_TURN_3_TILES_UP_25_OFFSETS,
        &sprites::LEFT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    match track_sequence {
        0 => {
            centre_support(session, support_type, 8, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + 72);
        }
        1 | 2 => general_height(session, height + 56),
        3 => {
            centre_support(session, support_type, 8, height);
            match direction {
                2 => session.push_tunnel_right(height + 8, SLOPE_END_TUNNEL),
                3 => session.push_tunnel_left(height + 8, SLOPE_END_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 72);
        }
        _ => {}
    }
}

pub(crate) fn track_right_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    quarter_turn_3_25_deg_paint(
        session,
        &sprites::RIGHT_QUARTER_TURN_3_TILES_UP_25_SPRITES,
        &sprites::RIGHT_QUARTER_TURN_3_TILES_UP_25_OFFSETS,
        &sprites::RIGHT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    match track_sequence {
        0 => {
            centre_support(session, support_type, 8, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + 72);
        }
        1 | 2 => general_height(session, height + 56),
        3 => {
            let special = if direction == 2 { 10 } else { 8 };
            centre_support(session, support_type, special, height);
            match direction {
                0 => session.push_tunnel_right(height + 8, SLOPE_END_TUNNEL),
                1 => session.push_tunnel_left(height + 8, SLOPE_END_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 72);
        }
        _ => {}
    }
}

pub(crate) fn track_left_quarter_turn_3_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_right_quarter_turn_3_25_deg_up(session, ride, remapped, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_quarter_turn_3_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_quarter_turn_3_25_deg_up(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

fn helix_pair_paint(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 2]],
    boxes: &[[midway_paint::BoundBoxXYZ; 2]],
    track_sequence: u8,
    height: i32,
) {
    let s = track_sequence as usize;
    if let (Some(row), Some(bb)) = (table.get(s), boxes.get(s)) {
        paint_table_sprite(session, row[0], bb[0], height);
        paint_table_sprite(session, row[1], bb[1], height);
    }
}

pub(crate) fn track_left_half_banked_helix_up_small(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    helix_pair_paint(
        session,
        &sprites::LEFT_HALF_BANKED_HELIX_UP_SMALL_SPRITES[d],
        &sprites::LEFT_HALF_BANKED_HELIX_UP_SMALL_BOUND_BOXES[d],
        track_sequence,
        height,
    );
    match track_sequence {
        0 => {
            centre_support(session, support_type, 2, height);
            session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            centre_support(session, support_type, 6, height);
            match direction {
                2 => session.push_tunnel_right(height + 8, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height + 8, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        4 => {
            centre_support(session, support_type, 2, height);
            match direction {
                0 => session.push_tunnel_right(height, FLAT_TUNNEL),
                1 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        6 => {
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        7 => {
            centre_support(session, support_type, 6, height);
            session.push_tunnel_rotated(direction, height + 8, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::RIGHT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 | 5 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_right_half_banked_helix_up_small(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    helix_pair_paint(
        session,
        &sprites::RIGHT_HALF_BANKED_HELIX_UP_SMALL_SPRITES[d],
        &sprites::RIGHT_HALF_BANKED_HELIX_UP_SMALL_BOUND_BOXES[d],
        track_sequence,
        height,
    );
    match track_sequence {
        0 => {
            centre_support(session, support_type, 2, height);
            session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::RIGHT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            centre_support(session, support_type, 6, height);
            match direction {
                0 => session.push_tunnel_right(height + 8, FLAT_TUNNEL),
                1 => session.push_tunnel_left(height + 8, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        4 => {
            centre_support(session, support_type, 2, height);
            match direction {
                2 => session.push_tunnel_right(height, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        6 => {
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        7 => {
            centre_support(session, support_type, 6, height);
            session.push_tunnel_rotated(direction, height + 8, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 | 5 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_left_half_banked_helix_down_small(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 4 {
        track_sequence -= 4;
        direction = (direction + 3) & 3;
    }
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_right_half_banked_helix_up_small(session, ride, remapped, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_half_banked_helix_down_small(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 4 {
        track_sequence -= 4;
        direction = (direction + 1) & 3;
    }
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_half_banked_helix_up_small(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_half_banked_helix_up_large(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    helix_pair_paint(
        session,
        &sprites::LEFT_HALF_BANKED_HELIX_UP_LARGE_SPRITES[d],
        &sprites::LEFT_HALF_BANKED_HELIX_UP_LARGE_BOUND_BOXES[d],
        track_sequence,
        height,
    );
    match track_sequence {
        0 => {
            centre_support(session, support_type, 1, height);
            session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::LEFT)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        5 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        6 => {
            centre_support(session, support_type, 7, height);
            match direction {
                2 => session.push_tunnel_right(height + 8, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height + 8, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        7 => {
            centre_support(session, support_type, 1, height);
            match direction {
                0 => session.push_tunnel_right(height, FLAT_TUNNEL),
                1 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        9 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        10 => {
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::TOP_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        12 => {
            set_segments(
                session,
                Segments::RIGHT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        13 => {
            centre_support(session, support_type, 7, height);
            session.push_tunnel_rotated(direction, height + 8, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::RIGHT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 | 4 | 8 | 11 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_right_half_banked_helix_up_large(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    helix_pair_paint(
        session,
        &sprites::RIGHT_HALF_BANKED_HELIX_UP_LARGE_SPRITES[d],
        &sprites::RIGHT_HALF_BANKED_HELIX_UP_LARGE_BOUND_BOXES[d],
        track_sequence,
        height,
    );
    match track_sequence {
        0 => {
            centre_support(session, support_type, 1, height);
            session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::RIGHT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(
                session,
                Segments::RIGHT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::TOP_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        5 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        6 => {
            centre_support(session, support_type, 7, height);
            match direction {
                0 => session.push_tunnel_right(height + 8, FLAT_TUNNEL),
                1 => session.push_tunnel_left(height + 8, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        7 => {
            centre_support(session, support_type, 1, height);
            match direction {
                2 => session.push_tunnel_right(height, FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, FLAT_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        9 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        10 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        12 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::LEFT)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        13 => {
            centre_support(session, support_type, 7, height);
            session.push_tunnel_rotated(direction, height + 8, FLAT_TUNNEL);
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 | 4 | 8 | 11 => general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT),
        _ => {}
    }
}

pub(crate) fn track_left_half_banked_helix_down_large(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 7 {
        track_sequence -= 7;
        direction = (direction + 3) & 3;
    }
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_right_half_banked_helix_up_large(session, ride, remapped, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_half_banked_helix_down_large(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let (mut track_sequence, mut direction) = (track_sequence, direction);
    if track_sequence >= 7 {
        track_sequence -= 7;
        direction = (direction + 1) & 3;
    }
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_half_banked_helix_up_large(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_quarter_turn_1_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    _support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::LEFT_QUARTER_TURN_1_TILE_UP_60_SPRITES[d][0], sprites::LEFT_QUARTER_TURN_1_TILE_UP_60_BOUND_BOXES[d][0], height);
    paint_table_sprite(session, sprites::LEFT_QUARTER_TURN_1_TILE_UP_60_SPRITES[d][1], sprites::LEFT_QUARTER_TURN_1_TILE_UP_60_BOUND_BOXES[d][1], height);
    match direction {
        0 => session.push_tunnel_left(height - 8, SLOPE_START_TUNNEL),
        2 => session.push_tunnel_right(height + 56, SLOPE_END_TUNNEL),
        3 => {
            session.push_tunnel_right(height - 8, SLOPE_START_TUNNEL);
            session.push_tunnel_left(height + 56, SLOPE_END_TUNNEL);
        }
        _ => {}
    }
    paint_util::set_all_segments_unlimited(session);
    general_height(session, height + 104);
}

pub(crate) fn track_right_quarter_turn_1_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    _support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::RIGHT_QUARTER_TURN_1_TILE_UP_60_SPRITES[d][0], sprites::RIGHT_QUARTER_TURN_1_TILE_UP_60_BOUND_BOXES[d][0], height);
    paint_table_sprite(session, sprites::RIGHT_QUARTER_TURN_1_TILE_UP_60_SPRITES[d][1], sprites::RIGHT_QUARTER_TURN_1_TILE_UP_60_BOUND_BOXES[d][1], height);
    match direction {
        0 => {
            session.push_tunnel_left(height - 8, SLOPE_START_TUNNEL);
            session.push_tunnel_right(height + 56, SLOPE_END_TUNNEL);
        }
        1 => session.push_tunnel_left(height + 56, SLOPE_END_TUNNEL),
        3 => session.push_tunnel_right(height - 8, SLOPE_START_TUNNEL),
        _ => {}
    }
    paint_util::set_all_segments_unlimited(session);
    general_height(session, height + 104);
}

pub(crate) fn track_left_quarter_turn_1_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_right_quarter_turn_1_60_deg_up(session, ride, track_sequence, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_quarter_turn_1_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_quarter_turn_1_60_deg_up(session, ride, track_sequence, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::BRAKES_SPRITES[d], sprites::BRAKES_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

// Booster art predates the dedicated sprites; the family renders it with the
// brake track like the original releases did.
pub(crate) fn track_booster(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_brakes(session, ride, track_sequence, direction, height, track_element, support_type);
}

pub(crate) fn track_block_brakes(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let closed = usize::from(track_element.brake_closed);
    paint_table_sprite(session, sprites::BLOCK_BRAKES_SPRITES[closed][d], sprites::BLOCK_BRAKES_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 0, height);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
}

pub(crate) fn track_25_deg_up_left_banked(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::UP_25_LEFT_BANKED_SPRITES[d], sprites::UP_25_LEFT_BANKED_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 8, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 56);
}

pub(crate) fn track_25_deg_up_right_banked(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::UP_25_RIGHT_BANKED_SPRITES[d], sprites::UP_25_RIGHT_BANKED_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 8, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 56);
}

pub(crate) fn track_25_deg_down_left_banked(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_right_banked(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_25_deg_down_right_banked(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_left_banked(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_on_ride_photo(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let base = session.misc_colours().with_index(paint_util::SPR_STATION_BASE_D);
    session.add_as_parent_rotated(
        direction,
        base,
        midway_paint::CoordsXYZ::new(0, 0, height),
        midway_paint::BoundBoxXYZ::new(midway_paint::CoordsXYZ::new(0, 0, height), midway_paint::CoordsXYZ::new(32, 32, 1)),
    );
    let colours = session.support_colours();
    session.metal_a_supports(support_type, MetalSupportPlace::TopLeftSide, 6, height, colours);
    session.metal_a_supports(support_type, MetalSupportPlace::BottomRightSide, 6, height, colours);
    paint_straight(
        session,
        &sprites::FLAT_SPRITES,
        &sprites::FLAT_BOUND_BOXES,
        track_element,
        direction,
        height + 3,
    );
    paint_util::on_ride_photo_paint(session, direction, height + 3, track_element);
    session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    paint_util::set_all_segments_unlimited(session);
    general_height(session, height + 48);
}

fn eighth_paint(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 5]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 5]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = table[d].get(track_sequence as usize) {
        paint_table_sprite(session, index, boxes[d][track_sequence as usize], height);
    }
}

fn eighth_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    support_type: MetalSupportType,
    mirrored: bool,
) {
    let seq1_segments = if mirrored {
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT)
    } else {
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
    };
    let seq2_segments = if mirrored {
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
    } else {
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_RIGHT)
    };
    let seq3_segments = if mirrored {
        Segments::BOTTOM.or(Segments::CENTRE).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT)
    } else {
        Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT)
    };
    let seq4_segments = if mirrored {
        Segments::LEFT
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT)
    } else {
        Segments::BOTTOM
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT)
    };
    // The final tile plants its strut on the corner the diagonal exits over.
    let corner = if mirrored {
        [
            MetalSupportPlace::LeftCorner,
            MetalSupportPlace::TopCorner,
            MetalSupportPlace::RightCorner,
            MetalSupportPlace::BottomCorner,
        ]
    } else {
        [
            MetalSupportPlace::BottomCorner,
            MetalSupportPlace::LeftCorner,
            MetalSupportPlace::TopCorner,
            MetalSupportPlace::RightCorner,
        ]
    };
    match track_sequence {
        0 => {
            centre_support(session, support_type, 0, height);
            session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        1 => {
            set_segments(session, seq1_segments, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        2 => {
            set_segments(session, seq2_segments, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        3 => {
            set_segments(session, seq3_segments, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        4 => {
            let colours = session.support_colours();
            session.metal_a_supports(support_type, corner[(direction & 3) as usize], 0, height, colours);
            set_segments(session, seq4_segments, direction);
            general_height(session, height + DEFAULT_GENERAL_SUPPORT_HEIGHT);
        }
        _ => {}
    }
}

pub(crate) fn track_left_eighth_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    eighth_paint(
        session,
        &sprites::LEFT_EIGHTH_TO_DIAG_SPRITES,
        &sprites::LEFT_EIGHTH_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    eighth_scaffold(session, track_sequence, direction, height, support_type, false);
}

pub(crate) fn track_right_eighth_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    eighth_paint(
        session,
        &sprites::RIGHT_EIGHTH_TO_DIAG_SPRITES,
        &sprites::RIGHT_EIGHTH_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    eighth_scaffold(session, track_sequence, direction, height, support_type, true);
}

pub(crate) fn track_left_eighth_to_orthogonal(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = crate::track::MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL.get(track_sequence as usize) else {
        return;
    };
    track_right_eighth_to_diag(session, ride, remapped, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_eighth_to_orthogonal(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = crate::track::MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL.get(track_sequence as usize) else {
        return;
    };
    track_left_eighth_to_diag(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_eighth_bank_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    eighth_paint(
        session,
        &sprites::LEFT_EIGHTH_BANK_TO_DIAG_SPRITES,
        &sprites::LEFT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    eighth_scaffold(session, track_sequence, direction, height, support_type, false);
}

pub(crate) fn track_right_eighth_bank_to_diag(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    eighth_paint(
        session,
        &sprites::RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES,
        &sprites::RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    eighth_scaffold(session, track_sequence, direction, height, support_type, true);
}

pub(crate) fn track_left_eighth_bank_to_orthogonal(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = crate::track::MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL.get(track_sequence as usize) else {
        return;
    };
    track_right_eighth_bank_to_diag(session, ride, remapped, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_eighth_bank_to_orthogonal(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = crate::track::MAP_LEFT_EIGHTH_TURN_TO_ORTHOGONAL.get(track_sequence as usize) else {
        return;
    };
    track_left_eighth_bank_to_diag(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

/// Occupied sub-segments of the 2x2 diagonal footprint, per tile sequence.
pub(crate) const DIAG_SEQ_SEGMENTS: [Segments; 4] = [
    Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
    Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::TOP_RIGHT),
    Segments::BOTTOM.or(Segments::CENTRE).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT),
    Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT),
];

/// Which strut family and crossbeam offset a diagonal piece plants on its
/// final tile. Steep pieces raise the beam further on the two directions
/// facing the slope.
#[derive(Clone, Copy)]
enum DiagSupport {
    A(i32),
    B(i32),
    BSteep,
}

fn diag_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    general: i32,
    support: DiagSupport,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    if track_sequence == 3 {
        let colours = session.support_colours();
        match support {
            DiagSupport::A(special) => {
                session.metal_a_supports(support_type, DIAG_SUPPORT_PLACE[d], special, height, colours);
            }
            DiagSupport::B(special) => {
                session.metal_b_supports(support_type, DIAG_SUPPORT_PLACE[d], special, height, colours);
            }
            DiagSupport::BSteep => {
                let special = if direction & 1 != 0 { 36 } else { 32 };
                session.metal_b_supports(support_type, DIAG_SUPPORT_PLACE[d], special, height, colours);
            }
        }
    }
    if let Some(&segments) = DIAG_SEQ_SEGMENTS.get(track_sequence as usize) {
        set_segments(session, segments, direction);
        general_height(session, height + general);
    }
}

fn diag_paint_chain(
    session: &mut PaintSession,
    table: &[[[midway_paint::ImageIndex; 4]; 4]; 2],
    offsets: &[[midway_paint::CoordsXYZ; 4]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 4]; 4],
    track_element: &TrackElement,
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = table[chain_row(track_element)][d].get(s) {
        paint_table_sprite_at(session, index, offsets[d][s], boxes[d][s], height);
    }
}

fn diag_paint_pair(
    session: &mut PaintSession,
    table: &[[[midway_paint::ImageIndex; 2]; 4]; 4],
    offsets: &[[[midway_paint::CoordsXYZ; 2]; 4]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 4]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(row) = table[d].get(s) {
        paint_table_sprite_at(session, row[0], offsets[d][s][0], boxes[d][s], height);
        paint_table_sprite_at(session, row[1], offsets[d][s][1], boxes[d][s], height);
    }
}

pub(crate) fn track_diag_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_FLAT_SPRITES,
        &sprites::DIAG_FLAT_OFFSETS,
        &sprites::DIAG_FLAT_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, DEFAULT_GENERAL_SUPPORT_HEIGHT, DiagSupport::A(0), support_type);
}

pub(crate) fn track_diag_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_UP_25_SPRITES,
        &sprites::DIAG_UP_25_OFFSETS,
        &sprites::DIAG_UP_25_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 56, DiagSupport::B(8), support_type);
}

pub(crate) fn track_diag_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_UP_60_SPRITES,
        &sprites::DIAG_UP_60_OFFSETS,
        &sprites::DIAG_UP_60_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 104, DiagSupport::BSteep, support_type);
}

pub(crate) fn track_diag_flat_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_FLAT_TO_UP_25_SPRITES,
        &sprites::DIAG_FLAT_TO_UP_25_OFFSETS,
        &sprites::DIAG_FLAT_TO_UP_25_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 48, DiagSupport::B(0), support_type);
}

pub(crate) fn track_diag_25_deg_up_to_60_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_UP_25_TO_UP_60_SPRITES,
        &sprites::DIAG_UP_25_TO_UP_60_OFFSETS,
        &sprites::DIAG_UP_25_TO_UP_60_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 72, DiagSupport::B(16), support_type);
}

pub(crate) fn track_diag_60_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_UP_60_TO_UP_25_SPRITES,
        &sprites::DIAG_UP_60_TO_UP_25_OFFSETS,
        &sprites::DIAG_UP_60_TO_UP_25_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 72, DiagSupport::B(21), support_type);
}

pub(crate) fn track_diag_25_deg_up_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_chain(
        session,
        &sprites::DIAG_UP_25_TO_FLAT_SPRITES,
        &sprites::DIAG_UP_25_TO_FLAT_OFFSETS,
        &sprites::DIAG_UP_25_TO_FLAT_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 56, DiagSupport::B(4), support_type);
}

pub(crate) fn track_diag_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_60_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_flat_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_25_deg_up_to_flat(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_25_deg_down_to_60_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_60_deg_up_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_60_deg_down_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_25_deg_up_to_60_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_25_deg_down_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_flat_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_flat_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_pair(
        session,
        &sprites::DIAG_FLAT_TO_LEFT_BANK_SPRITES,
        &sprites::DIAG_FLAT_TO_LEFT_BANK_OFFSETS,
        &sprites::DIAG_FLAT_TO_LEFT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, DEFAULT_GENERAL_SUPPORT_HEIGHT, DiagSupport::A(0), support_type);
}

pub(crate) fn track_diag_flat_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_pair(
        session,
        &sprites::DIAG_FLAT_TO_RIGHT_BANK_SPRITES,
        &sprites::DIAG_FLAT_TO_RIGHT_BANK_OFFSETS,
        &sprites::DIAG_FLAT_TO_RIGHT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, DEFAULT_GENERAL_SUPPORT_HEIGHT, DiagSupport::A(0), support_type);
}

pub(crate) fn track_diag_left_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_flat_to_right_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_right_bank_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_flat_to_left_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_left_bank_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_pair(
        session,
        &sprites::DIAG_LEFT_BANK_TO_UP_25_SPRITES,
        &sprites::DIAG_LEFT_BANK_TO_UP_25_OFFSETS,
        &sprites::DIAG_LEFT_BANK_TO_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 48, DiagSupport::B(0), support_type);
}

pub(crate) fn track_diag_right_bank_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_pair(
        session,
        &sprites::DIAG_RIGHT_BANK_TO_UP_25_SPRITES,
        &sprites::DIAG_RIGHT_BANK_TO_UP_25_OFFSETS,
        &sprites::DIAG_RIGHT_BANK_TO_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 48, DiagSupport::B(0), support_type);
}

pub(crate) fn track_diag_25_deg_up_to_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_pair(
        session,
        &sprites::DIAG_UP_25_TO_LEFT_BANK_SPRITES,
        &sprites::DIAG_UP_25_TO_LEFT_BANK_OFFSETS,
        &sprites::DIAG_UP_25_TO_LEFT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 56, DiagSupport::B(4), support_type);
}

pub(crate) fn track_diag_25_deg_up_to_right_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    diag_paint_pair(
        session,
        &sprites::DIAG_UP_25_TO_RIGHT_BANK_SPRITES,
        &sprites::DIAG_UP_25_TO_RIGHT_BANK_OFFSETS,
        &sprites::DIAG_UP_25_TO_RIGHT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    diag_scaffold(session, track_sequence, direction, height, 56, DiagSupport::B(4), support_type);
}

pub(crate) fn track_diag_left_bank_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_25_deg_up_to_right_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_right_bank_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_25_deg_up_to_left_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_25_deg_down_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_right_bank_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_25_deg_down_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_left_bank_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_diag_left_bank(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::DIAG_LEFT_BANK_SPRITES[d].get(s) {
        paint_table_sprite_at(session, index, sprites::DIAG_LEFT_BANK_OFFSETS[d][s], sprites::DIAG_LEFT_BANK_BOUND_BOXES[d][s], height);
    }
    diag_scaffold(session, track_sequence, direction, height, DEFAULT_GENERAL_SUPPORT_HEIGHT, DiagSupport::A(0), support_type);
}

pub(crate) fn track_diag_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_diag_left_bank(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_banked_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES[d].get(s) {
        paint_table_sprite_at(
            session,
            index,
            sprites::LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS[d][s],
            sprites::LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES[d][s],
            height,
        );
    }
    match track_sequence {
        0 => {
            centre_support(session, support_type, 8, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + 72);
        }
        1 | 2 => general_height(session, height + 56),
        3 => {
            centre_support(session, support_type, 8, height);
            match direction {
                2 => session.push_tunnel_right(height + 8, SLOPE_END_TUNNEL),
                3 => session.push_tunnel_left(height + 8, SLOPE_END_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 72);
        }
        _ => {}
    }
}

pub(crate) fn track_right_banked_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES[d].get(s) {
        paint_table_sprite_at(
            session,
            index,
            sprites::RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS[d][s],
            sprites::RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES[d][s],
            height,
        );
    }
    match track_sequence {
        0 => {
            centre_support(session, support_type, 8, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + 72);
        }
        1 | 2 => general_height(session, height + 56),
        3 => {
            let special = if direction == 2 { 10 } else { 8 };
            centre_support(session, support_type, special, height);
            match direction {
                0 => session.push_tunnel_right(height + 8, SLOPE_END_TUNNEL),
                1 => session.push_tunnel_left(height + 8, SLOPE_END_TUNNEL),
                _ => {}
            }
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 72);
        }
        _ => {}
    }
}

pub(crate) fn track_left_banked_quarter_turn_3_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_right_banked_quarter_turn_3_25_deg_up(session, ride, remapped, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_banked_quarter_turn_3_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_banked_quarter_turn_3_25_deg_up(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_banked_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_seq(
        session,
        &sprites::LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES,
        &sprites::LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    quarter_turn_5_25_deg_up_scaffold(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
        Segments::TOP
            .or(Segments::LEFT)
            .or(Segments::CENTRE)
            .or(Segments::TOP_LEFT)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT),
        Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
        Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
        (2, 3),
    );
}

pub(crate) fn track_right_banked_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_seq(
        session,
        &sprites::RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES,
        &sprites::RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    quarter_turn_5_25_deg_up_scaffold(
        session,
        track_sequence,
        direction,
        height,
        support_type,
        Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
        Segments::RIGHT
            .or(Segments::BOTTOM)
            .or(Segments::CENTRE)
            .or(Segments::TOP_RIGHT)
            .or(Segments::BOTTOM_LEFT)
            .or(Segments::BOTTOM_RIGHT),
        Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::TOP_RIGHT),
        Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_RIGHT),
        (0, 1),
    );
}

pub(crate) fn track_left_banked_quarter_turn_5_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_right_banked_quarter_turn_5_25_deg_up(session, ride, remapped, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_banked_quarter_turn_5_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(&remapped) = MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT.get(track_sequence as usize) else {
        return;
    };
    track_left_banked_quarter_turn_5_25_deg_up(session, ride, remapped, (direction + 3) & 3, height, track_element, support_type);
}

fn paint_sloped_bank_transition(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 2]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 2]; 4],
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, table[d][0], boxes[d][0], height);
    paint_table_sprite(session, table[d][1], boxes[d][1], height);
}

fn sloped_25_scaffold(session: &mut PaintSession, direction: u8, height: i32, support_type: MetalSupportType) {
    centre_support_checked(session, support_type, 8, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 56);
}

pub(crate) fn track_25_deg_up_to_left_banked_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::UP_25_TO_LEFT_BANKED_UP_25_SPRITES, &sprites::UP_25_TO_LEFT_BANKED_UP_25_BOUND_BOXES, direction, height);
    sloped_25_scaffold(session, direction, height, support_type);
}

pub(crate) fn track_25_deg_up_to_right_banked_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::UP_25_TO_RIGHT_BANKED_UP_25_SPRITES, &sprites::UP_25_TO_RIGHT_BANKED_UP_25_BOUND_BOXES, direction, height);
    sloped_25_scaffold(session, direction, height, support_type);
}

pub(crate) fn track_left_banked_25_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::LEFT_BANKED_UP_25_TO_UP_25_SPRITES, &sprites::LEFT_BANKED_UP_25_TO_UP_25_BOUND_BOXES, direction, height);
    sloped_25_scaffold(session, direction, height, support_type);
}

pub(crate) fn track_right_banked_25_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::RIGHT_BANKED_UP_25_TO_UP_25_SPRITES, &sprites::RIGHT_BANKED_UP_25_TO_UP_25_BOUND_BOXES, direction, height);
    sloped_25_scaffold(session, direction, height, support_type);
}

pub(crate) fn track_25_deg_down_to_left_banked_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_right_banked_25_deg_up_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_25_deg_down_to_right_banked_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_banked_25_deg_up_to_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_banked_25_deg_down_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_to_right_banked_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_banked_25_deg_down_to_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_25_deg_up_to_left_banked_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_banked_flat_to_left_banked_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_SPRITES[d], sprites::LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

pub(crate) fn track_right_banked_flat_to_right_banked_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_SPRITES[d], sprites::RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

pub(crate) fn track_left_banked_25_deg_up_to_left_banked_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_SPRITES[d], sprites::LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_right_banked_25_deg_up_to_right_banked_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite(session, sprites::RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_SPRITES[d], sprites::RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_BOUND_BOXES[d], height);
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_left_banked_flat_to_left_banked_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_right_banked_25_deg_up_to_right_banked_flat(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_banked_flat_to_right_banked_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_banked_25_deg_up_to_left_banked_flat(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_banked_25_deg_down_to_left_banked_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_right_banked_flat_to_right_banked_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_banked_25_deg_down_to_right_banked_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_banked_flat_to_left_banked_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_flat_to_left_banked_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::FLAT_TO_LEFT_BANKED_UP_25_SPRITES, &sprites::FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES, direction, height);
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

pub(crate) fn track_flat_to_right_banked_25_deg_up(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::FLAT_TO_RIGHT_BANKED_UP_25_SPRITES, &sprites::FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES, direction, height);
    centre_support_checked(session, support_type, 3, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 48);
}

pub(crate) fn track_left_banked_25_deg_up_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::LEFT_BANKED_UP_25_TO_FLAT_SPRITES, &sprites::LEFT_BANKED_UP_25_TO_FLAT_BOUND_BOXES, direction, height);
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_right_banked_25_deg_up_to_flat(
    session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_sloped_bank_transition(session, &sprites::RIGHT_BANKED_UP_25_TO_FLAT_SPRITES, &sprites::RIGHT_BANKED_UP_25_TO_FLAT_BOUND_BOXES, direction, height);
    centre_support_checked(session, support_type, 6, height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, FLAT_TO_25_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 40);
}

pub(crate) fn track_flat_to_left_banked_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_right_banked_25_deg_up_to_flat(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_flat_to_right_banked_25_deg_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_left_banked_25_deg_up_to_flat(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_left_banked_25_deg_down_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_flat_to_right_banked_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_banked_25_deg_down_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    track_flat_to_left_banked_25_deg_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_half_loop_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::HALF_LOOP_UP_SPRITES[d].get(s) {
        paint_table_sprite_at(session, index, sprites::HALF_LOOP_UP_OFFSETS[d][s], sprites::HALF_LOOP_UP_BOUND_BOXES[d][s], height);
    }
    match track_sequence {
        0 => {
            centre_support(session, support_type, 8, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, SLOPE_START_TUNNEL);
            }
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + 56);
        }
        1 => {
            let special = [20, 15, 16, 16][d];
            centre_support(session, support_type, special, height);
            paint_util::set_all_segments_unlimited(session);
            general_height(session, height + 72);
        }
        2 => {
            set_segments(
                session,
                Segments::LEFT
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 168);
        }
        3 => {
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            }
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + 48);
        }
        _ => {}
    }
}

pub(crate) fn track_half_loop_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 3) else {
        return;
    };
    track_half_loop_up(session, ride, track_sequence, direction, height, track_element, support_type);
}

fn corkscrew_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    support_type: MetalSupportType,
    mirrored: bool,
) {
    let entry_segments = if mirrored {
        Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT)
    } else {
        Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT)
    };
    let exit_segments = if mirrored {
        Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT)
    } else {
        Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT).or(Segments::BOTTOM_RIGHT)
    };
    match track_sequence {
        0 => {
            set_segments(session, entry_segments, direction);
            centre_support(session, support_type, 0, height);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, FLAT_TUNNEL);
            }
            general_height(session, height + 48);
        }
        1 => {
            paint_util::set_all_segments_unlimited(session);
            general_height(session, height + 72);
        }
        2 => {
            set_segments(session, exit_segments, direction);
            centre_support(session, support_type, 0, height + 35);
            let (right_dir, left_dir) = if mirrored { (0, 1) } else { (2, 3) };
            if direction == right_dir {
                session.push_tunnel_right(height + 8, FLAT_TUNNEL);
            } else if direction == left_dir {
                session.push_tunnel_left(height + 8, FLAT_TUNNEL);
            }
            general_height(session, height + 48);
        }
        _ => {}
    }
}

pub(crate) fn track_left_corkscrew_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = sprites::LEFT_CORKSCREW_UP_SPRITES[d].get(track_sequence as usize) {
        paint_table_sprite(session, index, sprites::LEFT_CORKSCREW_UP_BOUND_BOXES[d][track_sequence as usize], height);
    }
    corkscrew_scaffold(session, track_sequence, direction, height, support_type, false);
}

pub(crate) fn track_right_corkscrew_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let d = (direction & 3) as usize;
    if let Some(&index) = sprites::RIGHT_CORKSCREW_UP_SPRITES[d].get(track_sequence as usize) {
        paint_table_sprite(session, index, sprites::RIGHT_CORKSCREW_UP_BOUND_BOXES[d][track_sequence as usize], height);
    }
    corkscrew_scaffold(session, track_sequence, direction, height, support_type, true);
}

pub(crate) fn track_left_corkscrew_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 2) else {
        return;
    };
    track_right_corkscrew_up(session, ride, track_sequence, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_corkscrew_down(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    let Some(track_sequence) = reversed_sequence(track_sequence, 2) else {
        return;
    };
    track_left_corkscrew_up(session, ride, track_sequence, (direction + 3) & 3, height, track_element, support_type);
}

/// Draws nothing: the family has no artwork for this piece. Callers keep the
/// "unmatched case draws nothing" contract instead of asserting.
pub(crate) fn track_none(
    _session: &mut PaintSession,
    _ride: &Ride,
    _track_sequence: u8,
    _direction: u8,
    _height: i32,
    _track_element: &TrackElement,
    _support_type: MetalSupportType,
) {
}

/// Resolves a track piece to this family's painter, if the family has
/// artwork for it.
pub fn track_paint_function(track_type: TrackElemType) -> Option<TrackPaintFunction> {
    use TrackElemType::*;
    let function: TrackPaintFunction = match track_type {
        Flat => track_flat,
        EndStation | BeginStation | MiddleStation => track_station,
        Up25 => track_25_deg_up,
        Up60 => track_60_deg_up,
        FlatToUp25 => track_flat_to_25_deg_up,
        Up25ToUp60 => track_25_deg_up_to_60_deg_up,
        Up60ToUp25 => track_60_deg_up_to_25_deg_up,
        Up25ToFlat => track_25_deg_up_to_flat,
        Down25 => track_25_deg_down,
        Down60 => track_60_deg_down,
        FlatToDown25 => track_flat_to_25_deg_down,
        Down25ToDown60 => track_25_deg_down_to_60_deg_down,
        Down60ToDown25 => track_60_deg_down_to_25_deg_down,
        Down25ToFlat => track_25_deg_down_to_flat,
        LeftQuarterTurn5Tiles => track_left_quarter_turn_5,
        RightQuarterTurn5Tiles => track_right_quarter_turn_5,
        FlatToLeftBank => track_flat_to_left_bank,
        FlatToRightBank => track_flat_to_right_bank,
        LeftBankToFlat => track_left_bank_to_flat,
        RightBankToFlat => track_right_bank_to_flat,
        BankedLeftQuarterTurn5Tiles => track_banked_left_quarter_turn_5,
        BankedRightQuarterTurn5Tiles => track_banked_right_quarter_turn_5,
        LeftBankToUp25 => track_left_bank_to_25_deg_up,
        RightBankToUp25 => track_right_bank_to_25_deg_up,
        Up25ToLeftBank => track_25_deg_up_to_left_bank,
        Up25ToRightBank => track_25_deg_up_to_right_bank,
        LeftBankToDown25 => track_left_bank_to_25_deg_down,
        RightBankToDown25 => track_right_bank_to_25_deg_down,
        Down25ToLeftBank => track_25_deg_down_to_left_bank,
        Down25ToRightBank => track_25_deg_down_to_right_bank,
        LeftBank => track_left_bank,
        RightBank => track_right_bank,
        LeftQuarterTurn5TilesUp25 => track_left_quarter_turn_5_25_deg_up,
        RightQuarterTurn5TilesUp25 => track_right_quarter_turn_5_25_deg_up,
        LeftQuarterTurn5TilesDown25 => track_left_quarter_turn_5_25_deg_down,
        RightQuarterTurn5TilesDown25 => track_right_quarter_turn_5_25_deg_down,
        SBendLeft => track_s_bend_left,
        SBendRight => track_s_bend_right,
        LeftVerticalLoop => track_left_vertical_loop,
        RightVerticalLoop => track_right_vertical_loop,
        LeftQuarterTurn3Tiles => track_left_quarter_turn_3,
        RightQuarterTurn3Tiles => track_right_quarter_turn_3,
        LeftBankedQuarterTurn3Tiles => track_left_quarter_turn_3_bank,
        RightBankedQuarterTurn3Tiles => track_right_quarter_turn_3_bank,
        LeftQuarterTurn3TilesUp25 => track_left_quarter_turn_3_25_deg_up,
        RightQuarterTurn3TilesUp25 => track_right_quarter_turn_3_25_deg_up,
        LeftQuarterTurn3TilesDown25 => track_left_quarter_turn_3_25_deg_down,
        RightQuarterTurn3TilesDown25 => track_right_quarter_turn_3_25_deg_down,
        HalfLoopUp => track_half_loop_up,
        HalfLoopDown => track_half_loop_down,
        LeftCorkscrewUp => track_left_corkscrew_up,
        RightCorkscrewUp => track_right_corkscrew_up,
        LeftCorkscrewDown => track_left_corkscrew_down,
        RightCorkscrewDown => track_right_corkscrew_down,
        LeftHalfBankedHelixUpSmall => track_left_half_banked_helix_up_small,
        RightHalfBankedHelixUpSmall => track_right_half_banked_helix_up_small,
        LeftHalfBankedHelixDownSmall => track_left_half_banked_helix_down_small,
        RightHalfBankedHelixDownSmall => track_right_half_banked_helix_down_small,
        LeftHalfBankedHelixUpLarge => track_left_half_banked_helix_up_large,
        RightHalfBankedHelixUpLarge => track_right_half_banked_helix_up_large,
        LeftHalfBankedHelixDownLarge => track_left_half_banked_helix_down_large,
        RightHalfBankedHelixDownLarge => track_right_half_banked_helix_down_large,
        LeftQuarterTurn1TileUp60 => track_left_quarter_turn_1_60_deg_up,
        RightQuarterTurn1TileUp60 => track_right_quarter_turn_1_60_deg_up,
        LeftQuarterTurn1TileDown60 => track_left_quarter_turn_1_60_deg_down,
        RightQuarterTurn1TileDown60 => track_right_quarter_turn_1_60_deg_down,
        Brakes => track_brakes,
        Booster => track_booster,
        Up25LeftBanked => track_25_deg_up_left_banked,
        Up25RightBanked => track_25_deg_up_right_banked,
        OnRidePhoto => track_on_ride_photo,
        Down25LeftBanked => track_25_deg_down_left_banked,
        Down25RightBanked => track_25_deg_down_right_banked,
        LeftEighthToDiag => track_left_eighth_to_diag,
        RightEighthToDiag => track_right_eighth_to_diag,
        LeftEighthToOrthogonal => track_left_eighth_to_orthogonal,
        RightEighthToOrthogonal => track_right_eighth_to_orthogonal,
        LeftEighthBankToDiag => track_left_eighth_bank_to_diag,
        RightEighthBankToDiag => track_right_eighth_bank_to_diag,
        LeftEighthBankToOrthogonal => track_left_eighth_bank_to_orthogonal,
        RightEighthBankToOrthogonal => track_right_eighth_bank_to_orthogonal,
        DiagFlat => track_diag_flat,
        DiagUp25 => track_diag_25_deg_up,
        DiagUp60 => track_diag_60_deg_up,
        DiagFlatToUp25 => track_diag_flat_to_25_deg_up,
        DiagUp25ToUp60 => track_diag_25_deg_up_to_60_deg_up,
        DiagUp60ToUp25 => track_diag_60_deg_up_to_25_deg_up,
        DiagUp25ToFlat => track_diag_25_deg_up_to_flat,
        DiagDown25 => track_diag_25_deg_down,
        DiagDown60 => track_diag_60_deg_down,
        DiagFlatToDown25 => track_diag_flat_to_25_deg_down,
        DiagDown25ToDown60 => track_diag_25_deg_down_to_60_deg_down,
        DiagDown60ToDown25 => track_diag_60_deg_down_to_25_deg_down,
        DiagDown25ToFlat => track_diag_25_deg_down_to_flat,
        DiagFlatToLeftBank => track_diag_flat_to_left_bank,
        DiagFlatToRightBank => track_diag_flat_to_right_bank,
        DiagLeftBankToFlat => track_diag_left_bank_to_flat,
        DiagRightBankToFlat => track_diag_right_bank_to_flat,
        DiagLeftBankToUp25 => track_diag_left_bank_to_25_deg_up,
        DiagRightBankToUp25 => track_diag_right_bank_to_25_deg_up,
        DiagUp25ToLeftBank => track_diag_25_deg_up_to_left_bank,
        DiagUp25ToRightBank => track_diag_25_deg_up_to_right_bank,
        DiagLeftBankToDown25 => track_diag_left_bank_to_25_deg_down,
        DiagRightBankToDown25 => track_diag_right_bank_to_25_deg_down,
        DiagDown25ToLeftBank => track_diag_25_deg_down_to_left_bank,
        DiagDown25ToRightBank => track_diag_25_deg_down_to_right_bank,
        DiagLeftBank => track_diag_left_bank,
        DiagRightBank => track_diag_right_bank,
        BlockBrakes => track_block_brakes,
        LeftBankedQuarterTurn3TileUp25 => track_left_banked_quarter_turn_3_25_deg_up,
        RightBankedQuarterTurn3TileUp25 => track_right_banked_quarter_turn_3_25_deg_up,
        LeftBankedQuarterTurn3TileDown25 => track_left_banked_quarter_turn_3_25_deg_down,
        RightBankedQuarterTurn3TileDown25 => track_right_banked_quarter_turn_3_25_deg_down,
        LeftBankedQuarterTurn5TileUp25 => track_left_banked_quarter_turn_5_25_deg_up,
        RightBankedQuarterTurn5TileUp25 => track_right_banked_quarter_turn_5_25_deg_up,
        LeftBankedQuarterTurn5TileDown25 => track_left_banked_quarter_turn_5_25_deg_down,
        RightBankedQuarterTurn5TileDown25 => track_right_banked_quarter_turn_5_25_deg_down,
        Up25ToLeftBankedUp25 => track_25_deg_up_to_left_banked_25_deg_up,
        Up25ToRightBankedUp25 => track_25_deg_up_to_right_banked_25_deg_up,
        LeftBankedUp25ToUp25 => track_left_banked_25_deg_up_to_25_deg_up,
        RightBankedUp25ToUp25 => track_right_banked_25_deg_up_to_25_deg_up,
        Down25ToLeftBankedDown25 => track_25_deg_down_to_left_banked_25_deg_down,
        Down25ToRightBankedDown25 => track_25_deg_down_to_right_banked_25_deg_down,
        LeftBankedDown25ToDown25 => track_left_banked_25_deg_down_to_25_deg_down,
        RightBankedDown25ToDown25 => track_right_banked_25_deg_down_to_25_deg_down,
        LeftBankedFlatToLeftBankedUp25 => track_left_banked_flat_to_left_banked_25_deg_up,
        RightBankedFlatToRightBankedUp25 => track_right_banked_flat_to_right_banked_25_deg_up,
        LeftBankedUp25ToLeftBankedFlat => track_left_banked_25_deg_up_to_left_banked_flat,
        RightBankedUp25ToRightBankedFlat => track_right_banked_25_deg_up_to_right_banked_flat,
        LeftBankedFlatToLeftBankedDown25 => track_left_banked_flat_to_left_banked_25_deg_down,
        RightBankedFlatToRightBankedDown25 => track_right_banked_flat_to_right_banked_25_deg_down,
        LeftBankedDown25ToLeftBankedFlat => track_left_banked_25_deg_down_to_left_banked_flat,
        RightBankedDown25ToRightBankedFlat => track_right_banked_25_deg_down_to_right_banked_flat,
        FlatToLeftBankedUp25 => track_flat_to_left_banked_25_deg_up,
        FlatToRightBankedUp25 => track_flat_to_right_banked_25_deg_up,
        LeftBankedUp25ToFlat => track_left_banked_25_deg_up_to_flat,
        RightBankedUp25ToFlat => track_right_banked_25_deg_up_to_flat,
        FlatToLeftBankedDown25 => track_flat_to_left_banked_25_deg_down,
        FlatToRightBankedDown25 => track_flat_to_right_banked_25_deg_down,
        LeftBankedDown25ToFlat => track_left_banked_25_deg_down_to_flat,
        RightBankedDown25ToFlat => track_right_banked_25_deg_down_to_flat,
        _ => return None,
    };
    Some(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use midway_paint::{CoordsXY, PaintOp};

    fn paint(
        track_type: TrackElemType,
        track_sequence: u8,
        direction: u8,
        height: i32,
    ) -> Vec<PaintOp> {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        let ride = Ride::default();
        let element = TrackElement {
            track_type_id: track_type.id(),
            ..TrackElement::plain()
        };
        if let Some(function) = track_paint_function(track_type) {
            function(
                &mut session,
                &ride,
                track_sequence,
                direction,
                height,
                &element,
                MetalSupportType::Tubes,
            );
        }
        session.ops().to_vec()
    }

    #[test]
    fn family_covers_its_track_set() {
        use TrackElemType::*;
        for t in [
            Flat, EndStation, Up25, Up60, Down25ToFlat, LeftQuarterTurn5Tiles,
            BankedRightQuarterTurn5Tiles, SBendLeft, LeftVerticalLoop, RightCorkscrewDown,
            HalfLoopDown, LeftHalfBankedHelixDownLarge, Brakes, BlockBrakes, OnRidePhoto,
            RightEighthBankToOrthogonal, DiagDown60ToDown25, DiagRightBank,
            RightBankedQuarterTurn5TileDown25, RightBankedDown25ToFlat,
        ] {
            assert!(track_paint_function(t).is_some(), "{:?} should be covered", t);
        }
        for t in [Maze, TowerBase, Watersplash, LeftReverser, MinigolfHoleE] {
            assert!(track_paint_function(t).is_none(), "{:?} should not be covered", t);
        }
    }

    #[test]
    fn sloped_straight_pieces_tunnel_by_direction() {
        for direction in 0..4u8 {
            let ops = paint(TrackElemType::Up25, 0, direction, 64);
            let tunnel = ops
                .iter()
                .find_map(|op| match op {
                    PaintOp::TunnelLeft { height, tunnel } | PaintOp::TunnelRight { height, tunnel } => {
                        Some((*height, tunnel.sub_type))
                    }
                    _ => None,
                })
                .expect("slope always carves a tunnel");
            if direction == 0 || direction == 3 {
                assert_eq!(tunnel, (56, TunnelSubType::SlopeStart));
            } else {
                assert_eq!(tunnel, (72, TunnelSubType::SlopeEnd));
            }
        }
    }

    #[test]
    fn quarter_turn_5_draws_five_of_seven_tiles() {
        for direction in 0..4u8 {
            let mut drawn = 0;
            for sequence in 0..7u8 {
                let ops = paint(TrackElemType::LeftQuarterTurn5Tiles, sequence, direction, 0);
                if ops.iter().any(|op| matches!(op, PaintOp::DrawAsParent { .. })) {
                    drawn += 1;
                }
            }
            assert_eq!(drawn, 5);
        }
    }

    #[test]
    fn vertical_loop_apex_reserves_tall_clearance() {
        let ops = paint(TrackElemType::LeftVerticalLoop, 2, 0, 16);
        assert!(ops
            .iter()
            .any(|op| matches!(op, PaintOp::GeneralSupportHeight { height: 184, .. })));
    }

    #[test]
    fn block_brakes_pick_sprite_by_state() {
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        let ride = Ride::default();
        let mut element = TrackElement {
            track_type_id: TrackElemType::BlockBrakes.id(),
            ..TrackElement::plain()
        };
        track_block_brakes(&mut session, &ride, 0, 0, 0, &element, MetalSupportType::Tubes);
        let open = match session.ops()[0] {
            PaintOp::DrawAsParent { image, .. } => image.index(),
            _ => unreachable!(),
        };
        element.brake_closed = true;
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        track_block_brakes(&mut session, &ride, 0, 0, 0, &element, MetalSupportType::Tubes);
        let closed = match session.ops()[0] {
            PaintOp::DrawAsParent { image, .. } => image.index(),
            _ => unreachable!(),
        };
        assert_ne!(open, closed);
    }
}
