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

//! Dumps the paint call stream for one track-piece invocation. Useful for
//! eyeballing sprite-selection changes without booting the whole renderer:
//!
//! ```text
//! paintdump Flat --direction 2 --height 48 --chain
//! paintdump LeftQuarterTurn5Tiles --all-sequences
//! ```

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::trace;

use midway_paint::{CoordsXY, MetalSupportType, PaintOp, PaintSession};
use midway_rides::flying;
use midway_rides::track::{Ride, TrackElemType, TrackElement};

#[derive(Parser, Debug)]
#[command(about = "Dump the flying-coaster paint call stream for one track piece")]
struct Args {
    /// Track piece name, e.g. Flat, Up25ToFlat, LeftQuarterTurn5Tiles.
    piece: String,

    /// Tile index within a multi-tile piece.
    #[arg(long, default_value_t = 0)]
    sequence: u8,

    /// Piece orientation, 0-3.
    #[arg(long, default_value_t = 0)]
    direction: u8,

    /// Base height in world units.
    #[arg(long, default_value_t = 0)]
    height: i32,

    /// Paint the lift-chain sprite row.
    #[arg(long)]
    chain: bool,

    /// Paint the piece as inverted (train slung beneath the track).
    #[arg(long)]
    inverted: bool,

    /// Dump every tile of the piece instead of just --sequence.
    #[arg(long)]
    all_sequences: bool,
}

fn paint_one(args: &Args, track_type: TrackElemType, sequence: u8) -> Vec<PaintOp> {
    let mut session = PaintSession::new(CoordsXY::new(0, 0));
    let ride = Ride::default();
    let element = TrackElement {
        track_type_id: track_type.id(),
        has_chain: args.chain,
        inverted: args.inverted,
        brake_closed: false,
        taking_photo: false,
    };
    flying::track_paint_function(track_type)(
        &mut session,
        &ride,
        sequence,
        args.direction & 3,
        args.height,
        &element,
        MetalSupportType::Tubes,
    );
    session.ops().to_vec()
}

fn dump(args: &Args, track_type: TrackElemType, sequence: u8, ops: &[PaintOp]) {
    println!(
        "{:?} sequence {} direction {} height {}:",
        track_type, sequence, args.direction, args.height
    );
    if ops.is_empty() {
        println!("  (draws nothing)");
    }
    for op in ops {
        println!("  {:?}", op);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    ensure!(args.direction < 4, "direction must be 0-3");
    let track_type: TrackElemType = args
        .piece
        .parse()
        .with_context(|| format!("not a track piece: {}", args.piece))?;
    trace!("resolved {} to {:?}", args.piece, track_type);
    if args.all_sequences {
        // Multi-tile pieces top out at 14 tiles (large helix); tiles past the
        // end draw nothing and are skipped.
        for sequence in 0..14 {
            let ops = paint_one(&args, track_type, sequence);
            if !ops.is_empty() {
                dump(&args, track_type, sequence, &ops);
            }
        }
    } else {
        let ops = paint_one(&args, track_type, args.sequence);
        dump(&args, track_type, args.sequence, &ops);
    }
    Ok(())
}
