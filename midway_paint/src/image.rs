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

use std::fmt::Debug;

/// Index of a sprite in the packed graphics set. These are opaque,
/// asset-bound values from the sprite manifest; renumbering one silently
/// corrupts rendering.
pub type ImageIndex = u32;

/// A drawable image reference: a sprite index plus the colour-remap scheme
/// applied to it. Ride painters receive colour templates (index 0) from the
/// session and stamp the sprite index per draw call via [`ImageId::with_index`].
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct ImageId {
    index: ImageIndex,
    primary: u8,
    secondary: u8,
}

impl ImageId {
    pub const fn new(index: ImageIndex) -> Self {
        Self {
            index,
            primary: 0,
            secondary: 0,
        }
    }

    pub const fn with_remap(primary: u8, secondary: u8) -> Self {
        Self {
            index: 0,
            primary,
            secondary,
        }
    }

    /// This template with the sprite index replaced, keeping the colour remap.
    #[inline]
    pub const fn with_index(self, index: ImageIndex) -> Self {
        Self { index, ..self }
    }

    #[inline]
    pub const fn index(&self) -> ImageIndex {
        self.index
    }

    #[inline]
    pub const fn primary(&self) -> u8 {
        self.primary
    }

    #[inline]
    pub const fn secondary(&self) -> u8 {
        self.secondary
    }
}

impl Debug for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "img#{}[{},{}]",
            self.index, self.primary, self.secondary
        ))
    }
}
