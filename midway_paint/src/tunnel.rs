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

/// Shape family of the carved opening where track meets a terrain wall.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TunnelGroup {
    Standard,
    Square,
    Inverted,
}

/// Vertical profile of the opening within its group.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TunnelSubType {
    Flat,
    SlopeStart,
    SlopeEnd,
    Tall,
    FlatTo25Deg,
}

/// A tunnel profile: group plus sub-profile, pushed at a given height on the
/// left or right tile edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TunnelType {
    pub group: TunnelGroup,
    pub sub_type: TunnelSubType,
}

impl TunnelType {
    pub const fn new(group: TunnelGroup, sub_type: TunnelSubType) -> Self {
        Self { group, sub_type }
    }
}
