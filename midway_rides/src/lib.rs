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

//! Track paint content for the midway coaster ride types.
//!
//! The tile iterator resolves a piece's painter once per visible track tile
//! via a ride type's `track_paint_function`, then invokes it with the paint
//! session and tile context. Painters emit into the session; they hold no
//! state and cannot fail. An out-of-range direction or sequence simply
//! draws nothing.

use midway_paint::{MetalSupportType, PaintSession};

/// The shared generic chain-lift coaster family painter.
pub mod bolliger_mabillard;
/// The flying coaster painter.
pub mod flying;
/// Helpers shared by all track painters.
pub mod paint_util;
/// The track model: piece kinds, element flags, sequence remap tables.
pub mod track;

pub use track::{Ride, TrackElemType, TrackElement};

/// A per-piece paint entry point. The support style parameter carries the
/// concrete ride type's strut family through shared painters.
pub type TrackPaintFunction = fn(
    &mut PaintSession,
    &track::Ride,
    u8,
    u8,
    i32,
    &track::TrackElement,
    MetalSupportType,
);
