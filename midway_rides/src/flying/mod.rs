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

//! Track painter for the flying coaster. The ride runs the same box track as
//! the upright chain-lift family, but sections of it carry the train slung
//! beneath the rails: every piece therefore branches on the element's
//! inverted flag. Upright halves delegate to [`crate::bolliger_mabillard`]
//! with tube supports; inverted halves select the inverted sprite block,
//! hang inverted tube struts, and carve the inverted tunnel profiles.
//!
//! [`track_paint_function`] is total: pieces this ride type does not
//! customize resolve to the shared family painter, and pieces outside the
//! family's artwork draw nothing.

pub(crate) mod sprites;

#[cfg(test)]
mod tests;

use log::debug;

use midway_paint::{
    MetalSupportPlace, MetalSupportType, PaintSession, Segments, TunnelGroup, TunnelSubType,
    TunnelType,
};

use crate::bolliger_mabillard as bm;
use crate::paint_util::{
    self, paint_table_sprite_at, should_paint_supports, GENERAL_SUPPORT_SLOPE,
};
use crate::track::{
    Ride, TrackElemType, TrackElement, MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT,
};
use crate::TrackPaintFunction;

const INV_FLAT_TUNNEL: TunnelType = TunnelType::new(TunnelGroup::Inverted, TunnelSubType::Flat);
const INV_SLOPE_START_TUNNEL: TunnelType =
    TunnelType::new(TunnelGroup::Inverted, TunnelSubType::SlopeStart);
const INV_SLOPE_END_TUNNEL: TunnelType =
    TunnelType::new(TunnelGroup::Inverted, TunnelSubType::SlopeEnd);
const INV_FLAT_TO_25_TUNNEL: TunnelType =
    TunnelType::new(TunnelGroup::Inverted, TunnelSubType::FlatTo25Deg);
const INV_TALL_TUNNEL: TunnelType = TunnelType::new(TunnelGroup::Inverted, TunnelSubType::Tall);

const UNLIMITED: u16 = midway_paint::SEGMENT_HEIGHT_UNLIMITED;

/// Sloped inverted track hangs its strut on the side the slope climbs over.
const INV_SLOPE_SUPPORT_PLACE: [MetalSupportPlace; 4] = [
    MetalSupportPlace::TopRightSide,
    MetalSupportPlace::BottomRightSide,
    MetalSupportPlace::BottomLeftSide,
    MetalSupportPlace::TopLeftSide,
];

const INV_DIAG_SUPPORT_PLACE: [MetalSupportPlace; 4] = [
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
fn set_segments(session: &mut PaintSession, segments: Segments, direction: u8) {
    session.set_segment_support_height(segments.rotated(direction), UNLIMITED, 0);
}

#[inline]
fn general_height(session: &mut PaintSession, height: i32) {
    session.set_general_support_height(height, GENERAL_SUPPORT_SLOPE);
}

fn inv_centre_support(session: &mut PaintSession, height: i32) {
    if should_paint_supports(session.map_position()) {
        let colours = session.support_colours();
        session.metal_a_supports(
            MetalSupportType::TubesInverted,
            MetalSupportPlace::Centre,
            0,
            height,
            colours,
        );
    }
}

fn inv_centre_support_unchecked(session: &mut PaintSession, height: i32) {
    let colours = session.support_colours();
    session.metal_a_supports(
        MetalSupportType::TubesInverted,
        MetalSupportPlace::Centre,
        0,
        height,
        colours,
    );
}

fn inv_slope_support(session: &mut PaintSession, direction: u8, height: i32) {
    if should_paint_supports(session.map_position()) {
        let colours = session.support_colours();
        session.metal_a_supports(
            MetalSupportType::TubesInverted,
            INV_SLOPE_SUPPORT_PLACE[(direction & 3) as usize],
            0,
            height,
            colours,
        );
    }
}

/// Single-sprite inverted straight pieces with a chain row.
fn paint_inv_straight(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 4]; 2],
    offsets: &[midway_paint::CoordsXYZ; 4],
    boxes: &[midway_paint::BoundBoxXYZ; 4],
    track_element: &TrackElement,
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite_at(session, table[chain_row(track_element)][d], offsets[d], boxes[d], height);
}

pub(crate) fn track_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_flat(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_straight(
        session,
        &sprites::FLAT_SPRITES,
        &sprites::FLAT_OFFSETS,
        &sprites::FLAT_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_centre_support(session, height + 38);
    session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    general_height(session, height + 48);
}

pub(crate) fn track_station(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_station(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_util::draw_station_base(session, direction, height);
    let d = (direction & 3) as usize;
    // Row 0 carries the platform hanger bar; stations past the first tile
    // drop it.
    let row = &sprites::STATION_SPRITES[0][d];
    paint_table_sprite_at(
        session,
        row[0],
        sprites::STATION_OFFSETS[d][0],
        sprites::STATION_BOUND_BOXES[d][0],
        height,
    );
    paint_table_sprite_at(
        session,
        row[1],
        sprites::STATION_OFFSETS[d][1],
        sprites::STATION_BOUND_BOXES[d][1],
        height,
    );
    if should_paint_supports(session.map_position()) {
        paint_util::draw_supports_side_by_side(
            session,
            direction,
            height,
            MetalSupportType::TubesInverted,
        );
    }
    session.push_tunnel_rotated(direction, height, INV_TALL_TUNNEL);
    paint_util::set_all_segments_unlimited(session);
    general_height(session, height + 48);
}

pub(crate) fn track_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_straight(
        session,
        &sprites::UP_25_SPRITES,
        &sprites::UP_25_OFFSETS,
        &sprites::UP_25_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + 56);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, INV_SLOPE_END_TUNNEL);
    }
    general_height(session, height + 72);
}

pub(crate) fn track_60_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_60_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    let d = (direction & 3) as usize;
    paint_table_sprite_at(
        session,
        sprites::UP_60_SPRITES[d],
        sprites::UP_60_OFFSETS[d],
        sprites::UP_60_BOUND_BOXES[d],
        height,
    );
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 56, INV_SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 120);
}

pub(crate) fn track_flat_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_flat_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_straight(
        session,
        &sprites::FLAT_TO_UP_25_SPRITES,
        &sprites::FLAT_TO_UP_25_OFFSETS,
        &sprites::FLAT_TO_UP_25_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + 48);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height, INV_SLOPE_END_TUNNEL);
    }
    general_height(session, height + 64);
}

pub(crate) fn track_25_deg_up_to_60_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up_to_60_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    let d = (direction & 3) as usize;
    let row = &sprites::UP_25_TO_UP_60_SPRITES[d];
    paint_table_sprite_at(
        session,
        row[0],
        sprites::UP_25_TO_UP_60_OFFSETS[d][0],
        sprites::UP_25_TO_UP_60_BOUND_BOXES[d][0],
        height,
    );
    paint_table_sprite_at(
        session,
        row[1],
        sprites::UP_25_TO_UP_60_OFFSETS[d][1],
        sprites::UP_25_TO_UP_60_BOUND_BOXES[d][1],
        height,
    );
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 24, INV_SLOPE_END_TUNNEL);
    }
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    general_height(session, height + 88);
}

pub(crate) fn track_60_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_60_deg_up_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    let d = (direction & 3) as usize;
    let row = &sprites::UP_60_TO_UP_25_SPRITES[d];
    paint_table_sprite_at(
        session,
        row[0],
        sprites::UP_60_TO_UP_25_OFFSETS[d][0],
        sprites::UP_60_TO_UP_25_BOUND_BOXES[d][0],
        height,
    );
    paint_table_sprite_at(
        session,
        row[1],
        sprites::UP_60_TO_UP_25_OFFSETS[d][1],
        sprites::UP_60_TO_UP_25_BOUND_BOXES[d][1],
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + 70);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 24, INV_SLOPE_END_TUNNEL);
    }
    general_height(session, height + 88);
}

pub(crate) fn track_25_deg_up_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up_to_flat(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_straight(
        session,
        &sprites::UP_25_TO_FLAT_SPRITES,
        &sprites::UP_25_TO_FLAT_OFFSETS,
        &sprites::UP_25_TO_FLAT_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + 46);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_FLAT_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, INV_FLAT_TO_25_TUNNEL);
    }
    general_height(session, height + 56);
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

fn paint_inv_seq(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 7]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 7]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 7]; 4],
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

fn paint_inv_seq_4(
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

fn paint_inv_single(
    session: &mut PaintSession,
    table: &[midway_paint::ImageIndex; 4],
    offsets: &[midway_paint::CoordsXYZ; 4],
    boxes: &[midway_paint::BoundBoxXYZ; 4],
    direction: u8,
    height: i32,
) {
    let d = (direction & 3) as usize;
    paint_table_sprite_at(session, table[d], offsets[d], boxes[d], height);
}

/// Hanging-track quarter turn over five tiles, shared by the flat and banked
/// variants (the inverted rail cannot bank visually; only the sprites
/// differ).
fn inv_quarter_turn_5_scaffold(session: &mut PaintSession, track_sequence: u8, direction: u8, height: i32) {
    match track_sequence {
        0 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 38);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
            }
            general_height(session, height + 48);
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
            general_height(session, height + 48);
        }
        3 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 48);
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
            general_height(session, height + 48);
        }
        6 => {
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 38);
            match direction {
                2 => session.push_tunnel_right(height, INV_FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, INV_FLAT_TUNNEL),
                _ => {}
            }
            general_height(session, height + 48);
        }
        1 | 4 => general_height(session, height + 48),
        _ => {}
    }
}

pub(crate) fn track_left_quarter_turn_5(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_quarter_turn_5(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq(
        session,
        &sprites::LEFT_QUARTER_TURN_5_TILES_SPRITES,
        &sprites::LEFT_QUARTER_TURN_5_TILES_OFFSETS,
        &sprites::LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_quarter_turn_5_scaffold(session, track_sequence, direction, height);
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

fn inv_flat_bank_scaffold(session: &mut PaintSession, direction: u8, height: i32, left: bool) {
    let segments = if left {
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
    set_segments(session, segments, direction);
    inv_centre_support(session, height + 38);
    session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    general_height(session, height + 48);
}

pub(crate) fn track_flat_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_flat_to_left_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::FLAT_TO_LEFT_BANK_SPRITES,
        &sprites::FLAT_TO_LEFT_BANK_OFFSETS,
        &sprites::FLAT_TO_LEFT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    inv_flat_bank_scaffold(session, direction, height, true);
}

pub(crate) fn track_flat_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_flat_to_right_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::FLAT_TO_RIGHT_BANK_SPRITES,
        &sprites::FLAT_TO_RIGHT_BANK_OFFSETS,
        &sprites::FLAT_TO_RIGHT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    inv_flat_bank_scaffold(session, direction, height, false);
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_banked_left_quarter_turn_5(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq(
        session,
        &sprites::BANKED_LEFT_QUARTER_TURN_5_TILES_SPRITES,
        &sprites::BANKED_LEFT_QUARTER_TURN_5_TILES_OFFSETS,
        &sprites::BANKED_LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_quarter_turn_5_scaffold(session, track_sequence, direction, height);
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

fn inv_bank_slope_scaffold(
    session: &mut PaintSession,
    direction: u8,
    height: i32,
    support_height: i32,
    entry_tunnel: TunnelType,
    exit_tunnel: TunnelType,
    entry_height: i32,
    exit_height: i32,
    general: i32,
) {
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + support_height);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height + entry_height, entry_tunnel);
    } else {
        session.push_tunnel_rotated(direction, height + exit_height, exit_tunnel);
    }
    general_height(session, height + general);
}

pub(crate) fn track_left_bank_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_bank_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::LEFT_BANK_TO_UP_25_SPRITES,
        &sprites::LEFT_BANK_TO_UP_25_OFFSETS,
        &sprites::LEFT_BANK_TO_UP_25_BOUND_BOXES,
        direction,
        height,
    );
    inv_bank_slope_scaffold(session, direction, height, 48, INV_FLAT_TUNNEL, INV_SLOPE_END_TUNNEL, 0, 0, 64);
}

pub(crate) fn track_right_bank_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_bank_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::RIGHT_BANK_TO_UP_25_SPRITES,
        &sprites::RIGHT_BANK_TO_UP_25_OFFSETS,
        &sprites::RIGHT_BANK_TO_UP_25_BOUND_BOXES,
        direction,
        height,
    );
    inv_bank_slope_scaffold(session, direction, height, 48, INV_FLAT_TUNNEL, INV_SLOPE_END_TUNNEL, 0, 0, 64);
}

pub(crate) fn track_25_deg_up_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up_to_left_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::UP_25_TO_LEFT_BANK_SPRITES,
        &sprites::UP_25_TO_LEFT_BANK_OFFSETS,
        &sprites::UP_25_TO_LEFT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    inv_bank_slope_scaffold(session, direction, height, 46, INV_FLAT_TUNNEL, INV_FLAT_TO_25_TUNNEL, -8, 8, 56);
}

pub(crate) fn track_25_deg_up_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up_to_right_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::UP_25_TO_RIGHT_BANK_SPRITES,
        &sprites::UP_25_TO_RIGHT_BANK_OFFSETS,
        &sprites::UP_25_TO_RIGHT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    inv_bank_slope_scaffold(session, direction, height, 46, INV_FLAT_TUNNEL, INV_FLAT_TO_25_TUNNEL, -8, 8, 56);
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::LEFT_BANK_SPRITES,
        &sprites::LEFT_BANK_OFFSETS,
        &sprites::LEFT_BANK_BOUND_BOXES,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_centre_support(session, height + 38);
    session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    general_height(session, height + 48);
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

pub(crate) fn track_left_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_quarter_turn_5_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq(
        session,
        &sprites::LEFT_QUARTER_TURN_5_TILES_UP_25_SPRITES,
        &sprites::LEFT_QUARTER_TURN_5_TILES_UP_25_OFFSETS,
        &sprites::LEFT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_sloped_quarter_turn_5_scaffold(session, track_sequence, direction, height, (2, 3));
}

pub(crate) fn track_right_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_quarter_turn_5_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq(
        session,
        &sprites::RIGHT_QUARTER_TURN_5_TILES_UP_25_SPRITES,
        &sprites::RIGHT_QUARTER_TURN_5_TILES_UP_25_OFFSETS,
        &sprites::RIGHT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_sloped_quarter_turn_5_scaffold(session, track_sequence, direction, height, (0, 1));
}

fn inv_sloped_quarter_turn_5_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    exit_tunnel_directions: (u8, u8),
) {
    match track_sequence {
        0 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 48);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
            }
            general_height(session, height + 88);
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
            general_height(session, height + 88);
        }
        3 => {
            set_segments(
                session,
                Segments::RIGHT.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 80);
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
            general_height(session, height + 88);
        }
        6 => {
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 48);
            if direction == exit_tunnel_directions.0 {
                session.push_tunnel_right(height + 8, INV_SLOPE_END_TUNNEL);
            } else if direction == exit_tunnel_directions.1 {
                session.push_tunnel_left(height + 8, INV_SLOPE_END_TUNNEL);
            }
            general_height(session, height + 88);
        }
        1 | 4 => general_height(session, height + 88),
        _ => {}
    }
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

fn inv_s_bend_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
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
            set_segments(
                session,
                Segments::TOP.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 38);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
            }
            general_height(session, height + 48);
        }
        1 => {
            set_segments(session, seq1_segments, direction);
            if direction == 0 || direction == 1 {
                let colours = session.support_colours();
                session.metal_a_supports(MetalSupportType::TubesInverted, inner_place, 0, height + 38, colours);
            }
            general_height(session, height + 48);
        }
        2 => {
            set_segments(session, seq2_segments, direction);
            if direction == 2 || direction == 3 {
                let colours = session.support_colours();
                session.metal_a_supports(MetalSupportType::TubesInverted, inner_place, 0, height + 38, colours);
            }
            general_height(session, height + 48);
        }
        3 => {
            set_segments(
                session,
                Segments::BOTTOM.or(Segments::CENTRE).or(Segments::TOP_RIGHT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 38);
            let (right_dir, left_dir) = if mirrored { (2, 1) } else { (1, 2) };
            if direction == right_dir {
                session.push_tunnel_right(height, INV_FLAT_TUNNEL);
            } else if direction == left_dir {
                session.push_tunnel_left(height, INV_FLAT_TUNNEL);
            }
            general_height(session, height + 48);
        }
        _ => {}
    }
}

pub(crate) fn track_s_bend_left(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_s_bend_left(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::S_BEND_LEFT_SPRITES,
        &sprites::S_BEND_LEFT_OFFSETS,
        &sprites::S_BEND_LEFT_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_s_bend_scaffold(session, track_sequence, direction, height, false);
}

pub(crate) fn track_s_bend_right(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_s_bend_right(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::S_BEND_RIGHT_SPRITES,
        &sprites::S_BEND_RIGHT_OFFSETS,
        &sprites::S_BEND_RIGHT_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_s_bend_scaffold(session, track_sequence, direction, height, true);
}

fn inv_quarter_turn_3_scaffold(session: &mut PaintSession, track_sequence: u8, direction: u8, height: i32) {
    match track_sequence {
        0 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 38);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
            }
            general_height(session, height + 48);
        }
        2 => {
            set_segments(
                session,
                Segments::LEFT.or(Segments::CENTRE).or(Segments::TOP_LEFT).or(Segments::BOTTOM_LEFT),
                direction,
            );
            general_height(session, height + 48);
        }
        3 => {
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 38);
            match direction {
                2 => session.push_tunnel_right(height, INV_FLAT_TUNNEL),
                3 => session.push_tunnel_left(height, INV_FLAT_TUNNEL),
                _ => {}
            }
            general_height(session, height + 48);
        }
        1 => general_height(session, height + 48),
        _ => {}
    }
}

pub(crate) fn track_left_quarter_turn_3(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_quarter_turn_3(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::LEFT_QUARTER_TURN_3_TILES_SPRITES,
        &sprites::LEFT_QUARTER_TURN_3_TILES_OFFSETS,
        &sprites::LEFT_QUARTER_TURN_3_TILES_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_quarter_turn_3_scaffold(session, track_sequence, direction, height);
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_quarter_turn_3_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::LEFT_BANKED_QUARTER_TURN_3_TILES_SPRITES,
        &sprites::LEFT_BANKED_QUARTER_TURN_3_TILES_OFFSETS,
        &sprites::LEFT_BANKED_QUARTER_TURN_3_TILES_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_quarter_turn_3_scaffold(session, track_sequence, direction, height);
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

fn inv_sloped_quarter_turn_3_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    exit_tunnel_directions: (u8, u8),
) {
    match track_sequence {
        0 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 48);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
            }
            general_height(session, height + 88);
        }
        1 | 2 => general_height(session, height + 72),
        3 => {
            set_segments(
                session,
                Segments::BOTTOM
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 48);
            if direction == exit_tunnel_directions.0 {
                session.push_tunnel_right(height + 8, INV_SLOPE_END_TUNNEL);
            } else if direction == exit_tunnel_directions.1 {
                session.push_tunnel_left(height + 8, INV_SLOPE_END_TUNNEL);
            }
            general_height(session, height + 88);
        }
        _ => {}
    }
}

pub(crate) fn track_left_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_quarter_turn_3_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::LEFT_QUARTER_TURN_3_TILES_UP_25_SPRITES,
        &sprites::LEFT_QUARTER_TURN_3_TILES_UP_25_OFFSETS,
        &sprites::LEFT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_sloped_quarter_turn_3_scaffold(session, track_sequence, direction, height, (2, 3));
}

pub(crate) fn track_right_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_quarter_turn_3_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::RIGHT_QUARTER_TURN_3_TILES_UP_25_SPRITES,
        &sprites::RIGHT_QUARTER_TURN_3_TILES_UP_25_OFFSETS,
        &sprites::RIGHT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_sloped_quarter_turn_3_scaffold(session, track_sequence, direction, height, (0, 1));
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

pub(crate) fn track_brakes(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_brakes(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::BRAKES_SPRITES,
        &sprites::BRAKES_OFFSETS,
        &sprites::BRAKES_BOUND_BOXES,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_centre_support(session, height + 38);
    session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    general_height(session, height + 48);
}

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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_block_brakes(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::BLOCK_BRAKES_SPRITES,
        &sprites::BLOCK_BRAKES_OFFSETS,
        &sprites::BLOCK_BRAKES_BOUND_BOXES,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_centre_support(session, height + 38);
    session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    general_height(session, height + 48);
}

pub(crate) fn track_25_deg_up_left_banked(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up_left_banked(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::UP_25_LEFT_BANKED_SPRITES,
        &sprites::UP_25_LEFT_BANKED_OFFSETS,
        &sprites::UP_25_LEFT_BANKED_BOUND_BOXES,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + 56);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, INV_SLOPE_END_TUNNEL);
    }
    general_height(session, height + 72);
}

pub(crate) fn track_25_deg_up_right_banked(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_25_deg_up_right_banked(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_single(
        session,
        &sprites::UP_25_RIGHT_BANKED_SPRITES,
        &sprites::UP_25_RIGHT_BANKED_OFFSETS,
        &sprites::UP_25_RIGHT_BANKED_BOUND_BOXES,
        direction,
        height,
    );
    set_segments(session, Segments::STRAIGHT_FLAT, direction);
    inv_slope_support(session, direction, height + 56);
    if direction == 0 || direction == 3 {
        session.push_tunnel_rotated(direction, height - 8, INV_SLOPE_START_TUNNEL);
    } else {
        session.push_tunnel_rotated(direction, height + 8, INV_SLOPE_END_TUNNEL);
    }
    general_height(session, height + 72);
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_on_ride_photo(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    // The photo section cannot invert mid-train; hanging track just renders
    // the plain piece beneath the backboard.
    let base = session.misc_colours().with_index(paint_util::SPR_STATION_BASE_D);
    session.add_as_parent_rotated(
        direction,
        base,
        midway_paint::CoordsXYZ::new(0, 0, height),
        midway_paint::BoundBoxXYZ::new(
            midway_paint::CoordsXYZ::new(0, 0, height),
            midway_paint::CoordsXYZ::new(32, 32, 1),
        ),
    );
    paint_inv_straight(
        session,
        &sprites::FLAT_SPRITES,
        &sprites::FLAT_OFFSETS,
        &sprites::FLAT_BOUND_BOXES,
        track_element,
        direction,
        height,
    );
    paint_util::on_ride_photo_paint(session, direction, height + 3, track_element);
    session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
    paint_util::set_all_segments_unlimited(session);
    general_height(session, height + 64);
}

fn inv_eighth_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
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
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            inv_centre_support_unchecked(session, height + 38);
            session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
            general_height(session, height + 48);
        }
        1 => {
            set_segments(session, seq1_segments, direction);
            general_height(session, height + 48);
        }
        2 => {
            set_segments(session, seq2_segments, direction);
            general_height(session, height + 48);
        }
        3 => {
            set_segments(session, seq3_segments, direction);
            general_height(session, height + 48);
        }
        4 => {
            set_segments(session, seq4_segments, direction);
            let colours = session.support_colours();
            session.metal_a_supports(
                MetalSupportType::TubesInverted,
                corner[(direction & 3) as usize],
                0,
                height + 38,
                colours,
            );
            general_height(session, height + 48);
        }
        _ => {}
    }
}

fn paint_inv_eighth(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 5]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 5]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 5]; 4],
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

pub(crate) fn track_left_eighth_to_diag(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_eighth_to_diag(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_eighth(
        session,
        &sprites::LEFT_EIGHTH_TO_DIAG_SPRITES,
        &sprites::LEFT_EIGHTH_TO_DIAG_OFFSETS,
        &sprites::LEFT_EIGHTH_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_eighth_scaffold(session, track_sequence, direction, height, false);
}

pub(crate) fn track_right_eighth_to_diag(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_eighth_to_diag(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_eighth(
        session,
        &sprites::RIGHT_EIGHTH_TO_DIAG_SPRITES,
        &sprites::RIGHT_EIGHTH_TO_DIAG_OFFSETS,
        &sprites::RIGHT_EIGHTH_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_eighth_scaffold(session, track_sequence, direction, height, true);
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_eighth_bank_to_diag(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_eighth(
        session,
        &sprites::LEFT_EIGHTH_BANK_TO_DIAG_SPRITES,
        &sprites::LEFT_EIGHTH_BANK_TO_DIAG_OFFSETS,
        &sprites::LEFT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_eighth_scaffold(session, track_sequence, direction, height, false);
}

pub(crate) fn track_right_eighth_bank_to_diag(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_eighth_bank_to_diag(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_eighth(
        session,
        &sprites::RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES,
        &sprites::RIGHT_EIGHTH_BANK_TO_DIAG_OFFSETS,
        &sprites::RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_eighth_scaffold(session, track_sequence, direction, height, true);
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

fn inv_diag_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    general: i32,
    support_height: Option<i32>,
) {
    if track_sequence == 3 {
        if let Some(offset) = support_height {
            let colours = session.support_colours();
            session.metal_a_supports(
                MetalSupportType::TubesInverted,
                INV_DIAG_SUPPORT_PLACE[(direction & 3) as usize],
                0,
                height + offset,
                colours,
            );
        }
    }
    if let Some(&segments) = bm::DIAG_SEQ_SEGMENTS.get(track_sequence as usize) {
        set_segments(session, segments, direction);
        general_height(session, height + general);
    }
}

fn paint_inv_diag_chain(
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

pub(crate) fn track_diag_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_flat(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_diag_chain(
        session,
        &sprites::DIAG_FLAT_SPRITES,
        &sprites::DIAG_FLAT_OFFSETS,
        &sprites::DIAG_FLAT_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 48, Some(38));
}

pub(crate) fn track_diag_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_diag_chain(
        session,
        &sprites::DIAG_UP_25_SPRITES,
        &sprites::DIAG_UP_25_OFFSETS,
        &sprites::DIAG_UP_25_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 72, Some(50));
}

pub(crate) fn track_diag_60_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_60_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::DIAG_UP_60_SPRITES[d].get(s) {
        paint_table_sprite_at(session, index, sprites::DIAG_UP_60_OFFSETS[d][s], sprites::DIAG_UP_60_BOUND_BOXES[d][s], height);
    }
    inv_diag_scaffold(session, track_sequence, direction, height, 120, None);
}

pub(crate) fn track_diag_flat_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_flat_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_diag_chain(
        session,
        &sprites::DIAG_FLAT_TO_UP_25_SPRITES,
        &sprites::DIAG_FLAT_TO_UP_25_OFFSETS,
        &sprites::DIAG_FLAT_TO_UP_25_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 64, Some(42));
}

pub(crate) fn track_diag_25_deg_up_to_60_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_25_deg_up_to_60_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::DIAG_UP_25_TO_UP_60_SPRITES[d].get(s) {
        paint_table_sprite_at(session, index, sprites::DIAG_UP_25_TO_UP_60_OFFSETS[d][s], sprites::DIAG_UP_25_TO_UP_60_BOUND_BOXES[d][s], height);
    }
    inv_diag_scaffold(session, track_sequence, direction, height, 88, None);
}

pub(crate) fn track_diag_60_deg_up_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_60_deg_up_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = sprites::DIAG_UP_60_TO_UP_25_SPRITES[d].get(s) {
        paint_table_sprite_at(session, index, sprites::DIAG_UP_60_TO_UP_25_OFFSETS[d][s], sprites::DIAG_UP_60_TO_UP_25_BOUND_BOXES[d][s], height);
    }
    inv_diag_scaffold(session, track_sequence, direction, height, 88, None);
}

pub(crate) fn track_diag_25_deg_up_to_flat(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_25_deg_up_to_flat(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_diag_chain(
        session,
        &sprites::DIAG_UP_25_TO_FLAT_SPRITES,
        &sprites::DIAG_UP_25_TO_FLAT_OFFSETS,
        &sprites::DIAG_UP_25_TO_FLAT_BOUND_BOXES,
        track_element,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 72, Some(44));
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_flat_to_left_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_FLAT_TO_LEFT_BANK_SPRITES,
        &sprites::DIAG_FLAT_TO_LEFT_BANK_OFFSETS,
        &sprites::DIAG_FLAT_TO_LEFT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 48, Some(38));
}

pub(crate) fn track_diag_flat_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_flat_to_right_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_FLAT_TO_RIGHT_BANK_SPRITES,
        &sprites::DIAG_FLAT_TO_RIGHT_BANK_OFFSETS,
        &sprites::DIAG_FLAT_TO_RIGHT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 48, Some(38));
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_left_bank_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_LEFT_BANK_TO_UP_25_SPRITES,
        &sprites::DIAG_LEFT_BANK_TO_UP_25_OFFSETS,
        &sprites::DIAG_LEFT_BANK_TO_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 64, Some(42));
}

pub(crate) fn track_diag_right_bank_to_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_right_bank_to_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_RIGHT_BANK_TO_UP_25_SPRITES,
        &sprites::DIAG_RIGHT_BANK_TO_UP_25_OFFSETS,
        &sprites::DIAG_RIGHT_BANK_TO_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 64, Some(42));
}

pub(crate) fn track_diag_25_deg_up_to_left_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_25_deg_up_to_left_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_UP_25_TO_LEFT_BANK_SPRITES,
        &sprites::DIAG_UP_25_TO_LEFT_BANK_OFFSETS,
        &sprites::DIAG_UP_25_TO_LEFT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 72, Some(44));
}

pub(crate) fn track_diag_25_deg_up_to_right_bank(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_25_deg_up_to_right_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_UP_25_TO_RIGHT_BANK_SPRITES,
        &sprites::DIAG_UP_25_TO_RIGHT_BANK_OFFSETS,
        &sprites::DIAG_UP_25_TO_RIGHT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 72, Some(44));
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_diag_left_bank(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_4(
        session,
        &sprites::DIAG_LEFT_BANK_SPRITES,
        &sprites::DIAG_LEFT_BANK_OFFSETS,
        &sprites::DIAG_LEFT_BANK_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_diag_scaffold(session, track_sequence, direction, height, 48, Some(38));
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

fn paint_inv_seq_3(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 3]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 3]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 3]; 4],
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

/// The in-line twist: enters upright, rolls the train onto its back over
/// three tiles. The entry tile still stands on upright tubes; the exit tile
/// hangs from inverted ones.
fn flyer_twist_up(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 3]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 3]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 3]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
    support_type: MetalSupportType,
) {
    paint_inv_seq_3(session, table, offsets, boxes, track_sequence, direction, height);
    match track_sequence {
        0 => {
            let colours = session.support_colours();
            session.metal_a_supports(support_type, MetalSupportPlace::Centre, 0, height, colours);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(
                    direction,
                    height,
                    TunnelType::new(TunnelGroup::Square, TunnelSubType::Flat),
                );
            }
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + 56);
        }
        1 => {
            paint_util::set_all_segments_unlimited(session);
            general_height(session, height + 56);
        }
        2 => {
            inv_centre_support_unchecked(session, height + 38);
            match direction {
                1 => session.push_tunnel_right(height, INV_FLAT_TUNNEL),
                2 => session.push_tunnel_left(height, INV_FLAT_TUNNEL),
                _ => {}
            }
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + 56);
        }
        _ => {}
    }
}

pub(crate) fn track_left_flyer_twist_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    flyer_twist_up(
        session,
        &sprites::LEFT_FLYER_TWIST_UP_SPRITES,
        &sprites::LEFT_FLYER_TWIST_UP_OFFSETS,
        &sprites::LEFT_FLYER_TWIST_UP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
        support_type,
    );
}

pub(crate) fn track_right_flyer_twist_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    flyer_twist_up(
        session,
        &sprites::RIGHT_FLYER_TWIST_UP_SPRITES,
        &sprites::RIGHT_FLYER_TWIST_UP_OFFSETS,
        &sprites::RIGHT_FLYER_TWIST_UP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
        support_type,
    );
}

pub(crate) fn track_left_flyer_twist_down(
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
    track_left_flyer_twist_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_flyer_twist_down(
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
    track_right_flyer_twist_up(session, ride, track_sequence, (direction + 2) & 3, height, track_element, support_type);
}

/// Half loop that takes the train from running on the rails to hanging
/// beneath them at the crest.
pub(crate) fn track_flyer_half_loop_up(
    session: &mut PaintSession,
    _ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    _track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    paint_inv_seq_4(
        session,
        &sprites::FLYER_HALF_LOOP_UNINVERTED_UP_SPRITES,
        &sprites::FLYER_HALF_LOOP_UNINVERTED_UP_OFFSETS,
        &sprites::FLYER_HALF_LOOP_UNINVERTED_UP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    match track_sequence {
        0 => {
            let colours = session.support_colours();
            session.metal_a_supports(support_type, MetalSupportPlace::Centre, 8, height, colours);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(
                    direction,
                    height - 8,
                    TunnelType::new(TunnelGroup::Square, TunnelSubType::SlopeStart),
                );
            }
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + 56);
        }
        1 => {
            let special = [20, 15, 16, 16][(direction & 3) as usize];
            let colours = session.support_colours();
            session.metal_a_supports(support_type, MetalSupportPlace::Centre, special, height, colours);
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
            set_segments(session, Segments::STRAIGHT_FLAT, direction);
            general_height(session, height + 48);
        }
        _ => {}
    }
}

pub(crate) fn track_flyer_half_loop_down(
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
    track_flyer_half_loop_up(session, ride, track_sequence, direction, height, track_element, support_type);
}

fn inv_corkscrew_scaffold(
    session: &mut PaintSession,
    track_sequence: u8,
    direction: u8,
    height: i32,
    mirrored: bool,
) {
    match track_sequence {
        0 => {
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::RIGHT)
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_LEFT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            inv_centre_support_unchecked(session, height + 44);
            if direction == 0 || direction == 3 {
                session.push_tunnel_rotated(direction, height, INV_FLAT_TUNNEL);
            }
            general_height(session, height + 64);
        }
        1 => {
            paint_util::set_all_segments_unlimited(session);
            general_height(session, height + 88);
        }
        2 => {
            inv_centre_support_unchecked(session, height + 28);
            let (right_dir, left_dir) = if mirrored { (0, 1) } else { (2, 3) };
            if direction == right_dir {
                session.push_tunnel_right(height + 40, INV_FLAT_TUNNEL);
            } else if direction == left_dir {
                session.push_tunnel_left(height + 40, INV_FLAT_TUNNEL);
            }
            set_segments(
                session,
                Segments::TOP
                    .or(Segments::RIGHT)
                    .or(Segments::BOTTOM)
                    .or(Segments::CENTRE)
                    .or(Segments::TOP_LEFT)
                    .or(Segments::TOP_RIGHT)
                    .or(Segments::BOTTOM_RIGHT),
                direction,
            );
            general_height(session, height + 64);
        }
        _ => {}
    }
}

/// Corkscrew rolling the train from the rails into flight. The upright
/// entry half is the family corkscrew; the inverted exit half uses the
/// hanging artwork.
pub(crate) fn track_left_flyer_corkscrew_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_corkscrew_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_3(
        session,
        &sprites::LEFT_CORKSCREW_UP_SPRITES,
        &sprites::LEFT_CORKSCREW_UP_OFFSETS,
        &sprites::LEFT_CORKSCREW_UP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_corkscrew_scaffold(session, track_sequence, direction, height, false);
}

pub(crate) fn track_right_flyer_corkscrew_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_corkscrew_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq_3(
        session,
        &sprites::RIGHT_CORKSCREW_UP_SPRITES,
        &sprites::RIGHT_CORKSCREW_UP_OFFSETS,
        &sprites::RIGHT_CORKSCREW_UP_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_corkscrew_scaffold(session, track_sequence, direction, height, true);
}

pub(crate) fn track_left_flyer_corkscrew_down(
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
    track_right_flyer_corkscrew_up(session, ride, track_sequence, (direction + 1) & 3, height, track_element, support_type);
}

pub(crate) fn track_right_flyer_corkscrew_down(
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
    track_left_flyer_corkscrew_up(session, ride, track_sequence, (direction + 3) & 3, height, track_element, support_type);
}

fn inv_banked_sloped_quarter_turn_3(
    session: &mut PaintSession,
    table: &[[midway_paint::ImageIndex; 4]; 4],
    offsets: &[[midway_paint::CoordsXYZ; 4]; 4],
    boxes: &[[midway_paint::BoundBoxXYZ; 4]; 4],
    track_sequence: u8,
    direction: u8,
    height: i32,
    exit_tunnel_directions: (u8, u8),
) {
    let d = (direction & 3) as usize;
    let s = track_sequence as usize;
    if let Some(&index) = table[d].get(s) {
        paint_table_sprite_at(session, index, offsets[d][s], boxes[d][s], height);
    }
    inv_sloped_quarter_turn_3_scaffold(session, track_sequence, direction, height, exit_tunnel_directions);
}

pub(crate) fn track_left_banked_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_banked_quarter_turn_3_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    inv_banked_sloped_quarter_turn_3(
        session,
        &sprites::LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES,
        &sprites::LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS,
        &sprites::LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
        (2, 3),
    );
}

pub(crate) fn track_right_banked_quarter_turn_3_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_banked_quarter_turn_3_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    inv_banked_sloped_quarter_turn_3(
        session,
        &sprites::RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES,
        &sprites::RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS,
        &sprites::RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
        (0, 1),
    );
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
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_left_banked_quarter_turn_5_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq(
        session,
        &sprites::LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES,
        &sprites::LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_OFFSETS,
        &sprites::LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_sloped_quarter_turn_5_scaffold(session, track_sequence, direction, height, (2, 3));
}

pub(crate) fn track_right_banked_quarter_turn_5_25_deg_up(
    session: &mut PaintSession,
    ride: &Ride,
    track_sequence: u8,
    direction: u8,
    height: i32,
    track_element: &TrackElement,
    support_type: MetalSupportType,
) {
    if !track_element.is_inverted() {
        bm::track_right_banked_quarter_turn_5_25_deg_up(session, ride, track_sequence, direction, height, track_element, support_type);
        return;
    }
    paint_inv_seq(
        session,
        &sprites::RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES,
        &sprites::RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_OFFSETS,
        &sprites::RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES,
        track_sequence,
        direction,
        height,
    );
    inv_sloped_quarter_turn_5_scaffold(session, track_sequence, direction, height, (0, 1));
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

/// Straight sloped pieces that roll between banked and unbanked rail while
/// climbing; on hanging track these all share the inverted 25-degree
/// scaffold with piece-specific clearances.
macro_rules! inv_sloped_bank_piece {
    ($name:ident, $bm:ident, $table:ident, $offsets:ident, $boxes:ident, $support:expr, $entry:expr, $exit:expr, $entry_h:expr, $exit_h:expr, $general:expr) => {
        pub(crate) fn $name(
            session: &mut PaintSession,
            ride: &Ride,
            track_sequence: u8,
            direction: u8,
            height: i32,
            track_element: &TrackElement,
            support_type: MetalSupportType,
        ) {
            if !track_element.is_inverted() {
                bm::$bm(session, ride, track_sequence, direction, height, track_element, support_type);
                return;
            }
            paint_inv_single(
                session,
                &sprites::$table,
                &sprites::$offsets,
                &sprites::$boxes,
                direction,
                height,
            );
            inv_bank_slope_scaffold(session, direction, height, $support, $entry, $exit, $entry_h, $exit_h, $general);
        }
    };
}

inv_sloped_bank_piece!(track_25_deg_up_to_left_banked_25_deg_up, track_25_deg_up_to_left_banked_25_deg_up, UP_25_TO_LEFT_BANKED_UP_25_SPRITES, UP_25_TO_LEFT_BANKED_UP_25_OFFSETS, UP_25_TO_LEFT_BANKED_UP_25_BOUND_BOXES, 56, INV_SLOPE_START_TUNNEL, INV_SLOPE_END_TUNNEL, -8, 8, 72);
inv_sloped_bank_piece!(track_25_deg_up_to_right_banked_25_deg_up, track_25_deg_up_to_right_banked_25_deg_up, UP_25_TO_RIGHT_BANKED_UP_25_SPRITES, UP_25_TO_RIGHT_BANKED_UP_25_OFFSETS, UP_25_TO_RIGHT_BANKED_UP_25_BOUND_BOXES, 56, INV_SLOPE_START_TUNNEL, INV_SLOPE_END_TUNNEL, -8, 8, 72);
inv_sloped_bank_piece!(track_left_banked_25_deg_up_to_25_deg_up, track_left_banked_25_deg_up_to_25_deg_up, LEFT_BANKED_UP_25_TO_UP_25_SPRITES, LEFT_BANKED_UP_25_TO_UP_25_OFFSETS, LEFT_BANKED_UP_25_TO_UP_25_BOUND_BOXES, 56, INV_SLOPE_START_TUNNEL, INV_SLOPE_END_TUNNEL, -8, 8, 72);
inv_sloped_bank_piece!(track_right_banked_25_deg_up_to_25_deg_up, track_right_banked_25_deg_up_to_25_deg_up, RIGHT_BANKED_UP_25_TO_UP_25_SPRITES, RIGHT_BANKED_UP_25_TO_UP_25_OFFSETS, RIGHT_BANKED_UP_25_TO_UP_25_BOUND_BOXES, 56, INV_SLOPE_START_TUNNEL, INV_SLOPE_END_TUNNEL, -8, 8, 72);
inv_sloped_bank_piece!(track_left_banked_flat_to_left_banked_25_deg_up, track_left_banked_flat_to_left_banked_25_deg_up, LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_SPRITES, LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_OFFSETS, LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES, 48, INV_FLAT_TUNNEL, INV_SLOPE_END_TUNNEL, 0, 0, 64);
inv_sloped_bank_piece!(track_right_banked_flat_to_right_banked_25_deg_up, track_right_banked_flat_to_right_banked_25_deg_up, RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_SPRITES, RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_OFFSETS, RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES, 48, INV_FLAT_TUNNEL, INV_SLOPE_END_TUNNEL, 0, 0, 64);
inv_sloped_bank_piece!(track_left_banked_25_deg_up_to_left_banked_flat, track_left_banked_25_deg_up_to_left_banked_flat, LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_SPRITES, LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_OFFSETS, LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_BOUND_BOXES, 46, INV_FLAT_TUNNEL, INV_FLAT_TO_25_TUNNEL, -8, 8, 56);
inv_sloped_bank_piece!(track_right_banked_25_deg_up_to_right_banked_flat, track_right_banked_25_deg_up_to_right_banked_flat, RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_SPRITES, RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_OFFSETS, RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_BOUND_BOXES, 46, INV_FLAT_TUNNEL, INV_FLAT_TO_25_TUNNEL, -8, 8, 56);
inv_sloped_bank_piece!(track_flat_to_left_banked_25_deg_up, track_flat_to_left_banked_25_deg_up, FLAT_TO_LEFT_BANKED_UP_25_SPRITES, FLAT_TO_LEFT_BANKED_UP_25_OFFSETS, FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES, 48, INV_FLAT_TUNNEL, INV_SLOPE_END_TUNNEL, 0, 0, 64);
inv_sloped_bank_piece!(track_flat_to_right_banked_25_deg_up, track_flat_to_right_banked_25_deg_up, FLAT_TO_RIGHT_BANKED_UP_25_SPRITES, FLAT_TO_RIGHT_BANKED_UP_25_OFFSETS, FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES, 48, INV_FLAT_TUNNEL, INV_SLOPE_END_TUNNEL, 0, 0, 64);
inv_sloped_bank_piece!(track_left_banked_25_deg_up_to_flat, track_left_banked_25_deg_up_to_flat, LEFT_BANKED_UP_25_TO_FLAT_SPRITES, LEFT_BANKED_UP_25_TO_FLAT_OFFSETS, LEFT_BANKED_UP_25_TO_FLAT_BOUND_BOXES, 46, INV_FLAT_TUNNEL, INV_FLAT_TO_25_TUNNEL, -8, 8, 56);
inv_sloped_bank_piece!(track_right_banked_25_deg_up_to_flat, track_right_banked_25_deg_up_to_flat, RIGHT_BANKED_UP_25_TO_FLAT_SPRITES, RIGHT_BANKED_UP_25_TO_FLAT_OFFSETS, RIGHT_BANKED_UP_25_TO_FLAT_BOUND_BOXES, 46, INV_FLAT_TUNNEL, INV_FLAT_TO_25_TUNNEL, -8, 8, 56);

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

/// Resolves every track piece kind to a painter. Pieces the flying coaster
/// customizes are handled above; everything else falls back to the shared
/// chain-lift family table, and pieces without family artwork draw nothing.
pub fn track_paint_function(track_type: TrackElemType) -> TrackPaintFunction {
    use TrackElemType::*;
    match track_type {
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
        LeftQuarterTurn3Tiles => track_left_quarter_turn_3,
        RightQuarterTurn3Tiles => track_right_quarter_turn_3,
        LeftBankedQuarterTurn3Tiles => track_left_quarter_turn_3_bank,
        RightBankedQuarterTurn3Tiles => track_right_quarter_turn_3_bank,
        LeftQuarterTurn3TilesUp25 => track_left_quarter_turn_3_25_deg_up,
        RightQuarterTurn3TilesUp25 => track_right_quarter_turn_3_25_deg_up,
        LeftQuarterTurn3TilesDown25 => track_left_quarter_turn_3_25_deg_down,
        RightQuarterTurn3TilesDown25 => track_right_quarter_turn_3_25_deg_down,
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
        LeftFlyerTwistUp => track_left_flyer_twist_up,
        RightFlyerTwistUp => track_right_flyer_twist_up,
        LeftFlyerTwistDown => track_left_flyer_twist_down,
        RightFlyerTwistDown => track_right_flyer_twist_down,
        FlyerHalfLoopUninvertedUp => track_flyer_half_loop_up,
        FlyerHalfLoopInvertedDown => track_flyer_half_loop_down,
        LeftFlyerCorkscrewUp => track_left_flyer_corkscrew_up,
        RightFlyerCorkscrewUp => track_right_flyer_corkscrew_up,
        LeftFlyerCorkscrewDown => track_left_flyer_corkscrew_down,
        RightFlyerCorkscrewDown => track_right_flyer_corkscrew_down,
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
        other => bm::track_paint_function(other).unwrap_or_else(|| {
            debug!("no family artwork for {:?}; drawing nothing", other);
            bm::track_none
        }),
    }
}
