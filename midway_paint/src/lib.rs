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

//! Paint-engine API surface for the midway isometric renderer.
//!
//! Ride painters (see the `midway_rides` crate) consume this surface to emit
//! sprite draws, support struts, tunnel profiles, and occlusion bookkeeping
//! for one tile at a time. The z-ordering/occlusion compositor that resolves
//! the accumulated stream lives in the engine proper; [`session::PaintSession`]
//! records exactly the calls that compositor consumes.

/// Integer tile-space coordinates and sprite bounding boxes.
pub mod geometry;
/// Sprite indices and colour-remapped image references.
pub mod image;
/// The nine tile sub-segments used for occlusion bookkeeping.
pub mod segment;
/// The per-tile paint context and its emitted call stream.
pub mod session;
/// Metal support strut families and placements.
pub mod support;
/// Tunnel carving profiles.
pub mod tunnel;

pub use geometry::{BoundBoxXYZ, CoordsXY, CoordsXYZ};
pub use image::{ImageId, ImageIndex};
pub use segment::{PaintSegment, Segments};
pub use session::{PaintOp, PaintSession, SEGMENT_HEIGHT_UNLIMITED};
pub use support::{MetalSupportPlace, MetalSupportType, SupportFamily};
pub use tunnel::{TunnelGroup, TunnelSubType, TunnelType};
