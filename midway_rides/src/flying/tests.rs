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

use midway_paint::{
    BoundBoxXYZ, CoordsXY, CoordsXYZ, MetalSupportPlace, MetalSupportType, PaintOp, PaintSession,
    SupportFamily, TunnelGroup, TunnelSubType, SEGMENT_HEIGHT_UNLIMITED,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::flying::track_paint_function;
use crate::track::{
    Ride, TrackElemType, TrackElement, MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT,
    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT,
};

const TUBES: MetalSupportType = MetalSupportType::Tubes;

fn element(track_type: TrackElemType, chain: bool, inverted: bool) -> TrackElement {
    TrackElement {
        track_type_id: track_type.id(),
        has_chain: chain,
        inverted,
        brake_closed: false,
        taking_photo: false,
    }
}

/// Paints one invocation into a fresh session and returns the emitted ops.
fn paint(
    track_type: TrackElemType,
    track_sequence: u8,
    direction: u8,
    height: i32,
    chain: bool,
    inverted: bool,
) -> Vec<PaintOp> {
    let mut session = PaintSession::new(CoordsXY::new(0, 0));
    let ride = Ride::default();
    let el = element(track_type, chain, inverted);
    track_paint_function(track_type)(
        &mut session,
        &ride,
        track_sequence,
        direction,
        height,
        &el,
        TUBES,
    );
    session.ops().to_vec()
}

#[test]
fn flat_track_golden_scenario() {
    let mut session = PaintSession::new(CoordsXY::new(0, 0));
    let ride = Ride::default();
    let el = element(TrackElemType::Flat, false, false);
    track_paint_function(TrackElemType::Flat)(&mut session, &ride, 0, 0, 0, &el, TUBES);
    let ops = session.ops();
    assert_eq!(ops.len(), 5);
    assert_eq!(
        ops[0],
        PaintOp::DrawAsParent {
            image: session.track_colours().with_index(17146),
            offset: CoordsXYZ::new(0, 6, 0),
            bound_box: BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        }
    );
    match ops[1] {
        PaintOp::MetalSupport {
            family,
            kind,
            place,
            special,
            height,
            ..
        } => {
            assert_eq!(family, SupportFamily::A);
            assert_eq!(kind, MetalSupportType::Tubes);
            assert_eq!(place.sub_type(), 4);
            assert_eq!(place, MetalSupportPlace::Centre);
            assert_eq!(special, 0);
            assert_eq!(height, 0);
        }
        other => panic!("expected support op, got {:?}", other),
    }
    match ops[2] {
        PaintOp::TunnelLeft { height, tunnel } => {
            assert_eq!(height, 0);
            assert_eq!(tunnel.sub_type, TunnelSubType::Flat);
            assert_eq!(tunnel.group, TunnelGroup::Square);
        }
        other => panic!("expected tunnel op, got {:?}", other),
    }
    match ops[3] {
        PaintOp::SegmentSupportHeight {
            segments,
            height,
            slope,
        } => {
            assert_eq!(segments.iter().count(), 3);
            assert_eq!(height, SEGMENT_HEIGHT_UNLIMITED);
            assert_eq!(slope, 0);
        }
        other => panic!("expected segment op, got {:?}", other),
    }
    assert_eq!(ops[4], PaintOp::GeneralSupportHeight { height: 32, slope: 0x20 });
}

/// Pairs related by a 180 degree rotation: painting the down piece must be
/// byte-identical to painting the up piece with the direction reversed.
#[test]
fn down_pieces_mirror_up_pieces() {
    use TrackElemType::*;
    let pairs = [
        (Down25, Up25),
        (Down60, Up60),
        (FlatToDown25, Up25ToFlat),
        (Down25ToDown60, Up60ToUp25),
        (Down60ToDown25, Up25ToUp60),
        (Down25ToFlat, FlatToUp25),
        (LeftBankToFlat, FlatToRightBank),
        (RightBankToFlat, FlatToLeftBank),
        (LeftBankToDown25, Up25ToRightBank),
        (RightBankToDown25, Up25ToLeftBank),
        (Down25ToLeftBank, RightBankToUp25),
        (Down25ToRightBank, LeftBankToUp25),
        (RightBank, LeftBank),
        (Down25LeftBanked, Up25RightBanked),
        (Down25RightBanked, Up25LeftBanked),
        (Down25ToLeftBankedDown25, RightBankedUp25ToUp25),
        (LeftBankedDown25ToFlat, FlatToRightBankedUp25),
        (FlatToLeftBankedDown25, RightBankedUp25ToFlat),
    ];
    for (down, up) in pairs {
        for direction in 0..4u8 {
            for inverted in [false, true] {
                for height in [0, 48] {
                    let a = paint(down, 0, direction, height, false, inverted);
                    let b = paint(up, 0, (direction + 2) & 3, height, false, inverted);
                    assert_eq!(a, b, "{:?} vs {:?} at direction {}", down, up, direction);
                }
            }
        }
    }
}

/// Left/right five-tile quarter turns share artwork: the right turn remaps
/// its sequence and paints the left turn rotated a quarter step.
#[test]
fn right_quarter_turn_5_mirrors_left() {
    for direction in 0..4u8 {
        for sequence in 0..7u8 {
            for inverted in [false, true] {
                let right = paint(
                    TrackElemType::RightQuarterTurn5Tiles,
                    sequence,
                    direction,
                    16,
                    false,
                    inverted,
                );
                let left = paint(
                    TrackElemType::LeftQuarterTurn5Tiles,
                    MAP_LEFT_QUARTER_TURN_5_TILES_TO_RIGHT[sequence as usize],
                    (direction + 3) & 3,
                    16,
                    false,
                    inverted,
                );
                assert_eq!(right, left, "sequence {} direction {}", sequence, direction);
            }
        }
    }
}

#[test]
fn right_quarter_turn_3_mirrors_left() {
    for direction in 0..4u8 {
        for sequence in 0..4u8 {
            for inverted in [false, true] {
                let right = paint(
                    TrackElemType::RightQuarterTurn3Tiles,
                    sequence,
                    direction,
                    32,
                    false,
                    inverted,
                );
                let left = paint(
                    TrackElemType::LeftQuarterTurn3Tiles,
                    MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[sequence as usize],
                    (direction + 3) & 3,
                    32,
                    false,
                    inverted,
                );
                assert_eq!(right, left, "sequence {} direction {}", sequence, direction);
            }
        }
    }
}

#[test]
fn sloped_quarter_turn_down_pieces_mirror_up_pieces() {
    for direction in 0..4u8 {
        for sequence in 0..4u8 {
            let down = paint(
                TrackElemType::LeftQuarterTurn3TilesDown25,
                sequence,
                direction,
                64,
                false,
                false,
            );
            let up = paint(
                TrackElemType::RightQuarterTurn3TilesUp25,
                MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[sequence as usize],
                (direction + 1) & 3,
                64,
                false,
                false,
            );
            assert_eq!(down, up, "sequence {} direction {}", sequence, direction);
        }
    }
}

/// Every piece kind resolves to a painter, including kinds far outside the
/// flying coaster's track set, and invoking the fallback never panics.
#[test]
fn dispatcher_is_total() {
    let ride = Ride::default();
    for track_type in TrackElemType::ALL {
        let function = track_paint_function(track_type);
        let mut session = PaintSession::new(CoordsXY::new(0, 0));
        let el = element(track_type, false, false);
        function(&mut session, &ride, 0, 0, 0, &el, TUBES);
    }
}

/// Pieces outside the family's artwork draw nothing at all.
#[test]
fn unsupported_pieces_draw_nothing() {
    for track_type in [
        TrackElemType::Maze,
        TrackElemType::Watersplash,
        TrackElemType::SpinningTunnel,
        TrackElemType::MinigolfHoleA,
        TrackElemType::RotationControlToggle,
    ] {
        assert!(
            paint(track_type, 0, 0, 0, false, false).is_empty(),
            "{:?} should draw nothing",
            track_type
        );
    }
}

/// Painting is a pure function of its inputs: repeated invocations emit the
/// same call stream.
#[test]
fn painting_is_referentially_transparent() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let track_type = TrackElemType::ALL[rng.gen_range(0..TrackElemType::COUNT)];
        let sequence = rng.gen_range(0..14u8);
        let direction = rng.gen_range(0..4u8);
        let height = 16 * rng.gen_range(0..8);
        let chain = rng.gen_bool(0.5);
        let inverted = rng.gen_bool(0.5);
        let first = paint(track_type, sequence, direction, height, chain, inverted);
        let second = paint(track_type, sequence, direction, height, chain, inverted);
        assert_eq!(first, second, "{:?}", track_type);
    }
}

/// Out-of-range sequences fall through the switch without drawing.
#[test]
fn out_of_range_sequence_is_a_silent_no_op() {
    for track_type in [
        TrackElemType::LeftQuarterTurn5Tiles,
        TrackElemType::RightQuarterTurn5Tiles,
        TrackElemType::SBendLeft,
        TrackElemType::LeftEighthToDiag,
        TrackElemType::DiagFlat,
    ] {
        assert!(
            paint(track_type, 40, 0, 0, false, false).is_empty(),
            "{:?} sequence 40 should draw nothing",
            track_type
        );
    }
}

/// The chain row changes only the sprite selection, never the scaffolding.
#[test]
fn chain_lift_swaps_sprites_only() {
    let plain = paint(TrackElemType::Flat, 0, 0, 0, false, false);
    let chained = paint(TrackElemType::Flat, 0, 0, 0, true, false);
    assert_eq!(plain.len(), chained.len());
    match (&plain[0], &chained[0]) {
        (
            PaintOp::DrawAsParent { image: a, offset: oa, bound_box: ba },
            PaintOp::DrawAsParent { image: b, offset: ob, bound_box: bb },
        ) => {
            assert_eq!(a.index(), 17146);
            assert_eq!(b.index(), 17486);
            assert_eq!(oa, ob);
            assert_eq!(ba, bb);
        }
        other => panic!("expected draws, got {:?}", other),
    }
    assert_eq!(&plain[1..], &chained[1..]);
}

/// Inverted flat track selects the hanging sprite set and the inverted
/// support family.
#[test]
fn inverted_flat_uses_inverted_block() {
    let ops = paint(TrackElemType::Flat, 0, 0, 0, false, true);
    match ops[0] {
        PaintOp::DrawAsParent { image, offset, .. } => {
            assert_eq!(image.index(), 27129);
            assert_eq!(offset, CoordsXYZ::new(0, 0, 29));
        }
        other => panic!("expected draw, got {:?}", other),
    }
    assert!(ops.iter().any(|op| matches!(
        op,
        PaintOp::MetalSupport { kind: MetalSupportType::TubesInverted, .. }
    )));
    assert!(ops.iter().any(|op| matches!(
        op,
        PaintOp::TunnelLeft { tunnel, .. } if tunnel.group == TunnelGroup::Inverted
    )));
}

/// The support checkerboard suppresses struts on tiles with mismatched
/// bit-5 parity.
#[test]
fn supports_follow_the_checkerboard() {
    let ride = Ride::default();
    let el = element(TrackElemType::Flat, false, false);
    let mut on = PaintSession::new(CoordsXY::new(0, 0));
    track_paint_function(TrackElemType::Flat)(&mut on, &ride, 0, 0, 0, &el, TUBES);
    let mut off = PaintSession::new(CoordsXY::new(32, 0));
    track_paint_function(TrackElemType::Flat)(&mut off, &ride, 0, 0, 0, &el, TUBES);
    let count = |ops: &[PaintOp]| {
        ops.iter()
            .filter(|op| matches!(op, PaintOp::MetalSupport { .. }))
            .count()
    };
    assert_eq!(count(on.ops()), 1);
    assert_eq!(count(off.ops()), 0);
}

/// Odd directions swap the authored axes of straight pieces.
#[test]
fn flat_track_swaps_axes_on_odd_directions() {
    let ops = paint(TrackElemType::Flat, 0, 1, 0, false, false);
    match ops[0] {
        PaintOp::DrawAsParent { image, offset, bound_box } => {
            assert_eq!(image.index(), 17147);
            assert_eq!(offset, CoordsXYZ::new(6, 0, 0));
            assert_eq!(bound_box.length, CoordsXYZ::new(20, 32, 3));
        }
        other => panic!("expected draw, got {:?}", other),
    }
}

/// Helix down pieces (which fall back to the family table) mirror the
/// opposite helix up with the second half folded onto the first.
#[test]
fn helix_down_mirrors_helix_up() {
    for direction in 0..4u8 {
        for sequence in 0..8u8 {
            let down = paint(
                TrackElemType::LeftHalfBankedHelixDownSmall,
                sequence,
                direction,
                16,
                false,
                false,
            );
            let (folded_sequence, folded_direction) = if sequence >= 4 {
                (sequence - 4, (direction + 3) & 3)
            } else {
                (sequence, direction)
            };
            let up = paint(
                TrackElemType::RightHalfBankedHelixUpSmall,
                MAP_LEFT_QUARTER_TURN_3_TILES_TO_RIGHT[folded_sequence as usize],
                (folded_direction + 1) & 3,
                16,
                false,
                false,
            );
            assert_eq!(down, up, "sequence {} direction {}", sequence, direction);
        }
    }
}

#[test]
fn station_draws_platform_base_under_track() {
    for station in [
        TrackElemType::BeginStation,
        TrackElemType::MiddleStation,
        TrackElemType::EndStation,
    ] {
        let ops = paint(station, 0, 0, 16, false, false);
        assert!(matches!(ops[0], PaintOp::DrawAsParent { image, .. } if image.index() == 22426));
        assert!(matches!(ops[1], PaintOp::DrawAsChild { image, .. } if image.index() == 17154));
    }
}
