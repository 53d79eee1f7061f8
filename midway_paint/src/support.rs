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

/// Visual style of a metal support strut. Upright track hangs tube supports
/// below it; inverted track is carried by the inverted variant anchored from
/// above the rails.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MetalSupportType {
    Tubes,
    TubesInverted,
    Boxed,
    Stick,
    Truss,
}

/// Where within the tile a strut is planted. Discriminants match the
/// sub-type indices in the original support tables: the four corners, the
/// centre (4), then the four sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum MetalSupportPlace {
    TopCorner = 0,
    LeftCorner = 1,
    RightCorner = 2,
    BottomCorner = 3,
    Centre = 4,
    TopLeftSide = 5,
    TopRightSide = 6,
    BottomLeftSide = 7,
    BottomRightSide = 8,
}

impl MetalSupportPlace {
    #[inline]
    pub const fn sub_type(self) -> u8 {
        self as u8
    }
}

/// The two strut families. `A` is the standard crossbeam-capable family;
/// `B` omits the crossbeam logic and is used by a handful of ride types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SupportFamily {
    A,
    B,
}
