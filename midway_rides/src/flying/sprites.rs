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

//! Sprite, offset, and bound-box tables for the flying coaster's inverted
//! track and its flying-transition pieces (flyer twists and flyer half
//! loops). The inverted track shares the inverted-coaster sprite block; the
//! vertical placement (track slung at +29, boxes near the rider height) is
//! baked into the offset tables. All values are asset-bound manifest
//! constants, copied verbatim.

use midway_paint::{BoundBoxXYZ, CoordsXYZ, ImageIndex};

pub(crate) use crate::bolliger_mabillard::sprites::{BB_EMPTY, IMAGE_INDEX_UNDEFINED};

pub(crate) const SPR_STATION_INVERTED_BAR_C_SW_NE: ImageIndex = 22398;
pub(crate) const SPR_STATION_INVERTED_BAR_C_NW_SE: ImageIndex = 22399;

pub(crate) const FLAT_SPRITES: [[ImageIndex; 4]; 2] = [
    [27129, 27130, 27129, 27130],
    [27131, 27132, 27131, 27132],
];

pub(crate) const FLAT_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const STATION_SPRITES: [[[ImageIndex; 2]; 4]; 2] = [
    [
        [27131, SPR_STATION_INVERTED_BAR_C_SW_NE],
        [27132, SPR_STATION_INVERTED_BAR_C_NW_SE],
        [27131, SPR_STATION_INVERTED_BAR_C_SW_NE],
        [27132, SPR_STATION_INVERTED_BAR_C_NW_SE],
    ],
    [
        [27131, IMAGE_INDEX_UNDEFINED],
        [27132, IMAGE_INDEX_UNDEFINED],
        [27131, IMAGE_INDEX_UNDEFINED],
        [27132, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const STATION_OFFSETS: [[CoordsXYZ; 2]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
];

pub(crate) const STATION_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const UP_25_SPRITES: [[ImageIndex; 4]; 2] = [
    [27221, 27222, 27223, 27224],
    [27249, 27250, 27251, 27252],
];

pub(crate) const UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_60_SPRITES: [ImageIndex; 4] = [27237, 27238, 27239, 27240];

pub(crate) const UP_60_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_60_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 93), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(4, 0, 11), CoordsXYZ::new(2, 32, 81)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 11), CoordsXYZ::new(32, 2, 81)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 93), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const FLAT_TO_UP_25_SPRITES: [[ImageIndex; 4]; 2] = [
    [27213, 27214, 27215, 27216],
    [27241, 27242, 27243, 27244],
];

pub(crate) const FLAT_TO_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const FLAT_TO_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_TO_UP_60_SPRITES: [[ImageIndex; 2]; 4] = [
    [27225, IMAGE_INDEX_UNDEFINED],
    [27229, 27226],
    [27230, 27227],
    [27228, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const UP_25_TO_UP_60_OFFSETS: [[CoordsXYZ; 2]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const UP_25_TO_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 61), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(10, 0, 11), CoordsXYZ::new(10, 32, 49)),
        BoundBoxXYZ::new(CoordsXYZ::new(4, 0, 11), CoordsXYZ::new(2, 32, 49)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 10, 11), CoordsXYZ::new(32, 10, 49)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 11), CoordsXYZ::new(32, 2, 49)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 61), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_60_TO_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [27231, IMAGE_INDEX_UNDEFINED],
    [27235, 27232],
    [27236, 27233],
    [27234, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const UP_60_TO_UP_25_OFFSETS: [[CoordsXYZ; 2]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const UP_60_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 61), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(10, 0, 11), CoordsXYZ::new(10, 32, 49)),
        BoundBoxXYZ::new(CoordsXYZ::new(4, 0, 11), CoordsXYZ::new(2, 32, 49)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 10, 11), CoordsXYZ::new(32, 10, 49)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 11), CoordsXYZ::new(32, 2, 49)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 61), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_25_TO_FLAT_SPRITES: [[ImageIndex; 4]; 2] = [
    [27217, 27218, 27219, 27220],
    [27245, 27246, 27247, 27248],
];

pub(crate) const UP_25_TO_FLAT_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_TO_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_SPRITES: [[ImageIndex; 7]; 4] = [
    [27142, IMAGE_INDEX_UNDEFINED, 27141, 27140, IMAGE_INDEX_UNDEFINED, 27139, 27138],
    [27147, IMAGE_INDEX_UNDEFINED, 27146, 27145, IMAGE_INDEX_UNDEFINED, 27144, 27143],
    [27152, IMAGE_INDEX_UNDEFINED, 27151, 27150, IMAGE_INDEX_UNDEFINED, 27149, 27148],
    [27137, IMAGE_INDEX_UNDEFINED, 27136, 27135, IMAGE_INDEX_UNDEFINED, 27134, 27133],
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_OFFSETS: [[CoordsXYZ; 7]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const FLAT_TO_LEFT_BANK_SPRITES: [ImageIndex; 4] = [27269, 27270, 27271, 27272];

pub(crate) const FLAT_TO_LEFT_BANK_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const FLAT_TO_LEFT_BANK_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const FLAT_TO_RIGHT_BANK_SPRITES: [ImageIndex; 4] = [27273, 27274, 27275, 27276];

pub(crate) const FLAT_TO_RIGHT_BANK_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const FLAT_TO_RIGHT_BANK_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const BANKED_LEFT_QUARTER_TURN_5_TILES_SPRITES: [[ImageIndex; 7]; 4] = [
    [27162, IMAGE_INDEX_UNDEFINED, 27161, 27160, IMAGE_INDEX_UNDEFINED, 27159, 27158],
    [27167, IMAGE_INDEX_UNDEFINED, 27166, 27165, IMAGE_INDEX_UNDEFINED, 27164, 27163],
    [27172, IMAGE_INDEX_UNDEFINED, 27171, 27170, IMAGE_INDEX_UNDEFINED, 27169, 27168],
    [27157, IMAGE_INDEX_UNDEFINED, 27156, 27155, IMAGE_INDEX_UNDEFINED, 27154, 27153],
];

pub(crate) const BANKED_LEFT_QUARTER_TURN_5_TILES_OFFSETS: [[CoordsXYZ; 7]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const BANKED_LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_BANK_TO_UP_25_SPRITES: [ImageIndex; 4] = [27277, 27278, 27279, 27280];

pub(crate) const LEFT_BANK_TO_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const LEFT_BANK_TO_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANK_TO_UP_25_SPRITES: [ImageIndex; 4] = [27281, 27282, 27283, 27284];

pub(crate) const RIGHT_BANK_TO_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const RIGHT_BANK_TO_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_TO_LEFT_BANK_SPRITES: [ImageIndex; 4] = [27285, 27286, 27287, 27288];

pub(crate) const UP_25_TO_LEFT_BANK_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_TO_LEFT_BANK_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_TO_RIGHT_BANK_SPRITES: [ImageIndex; 4] = [27289, 27290, 27291, 27292];

pub(crate) const UP_25_TO_RIGHT_BANK_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_TO_RIGHT_BANK_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_BANK_SPRITES: [ImageIndex; 4] = [27293, 27294, 27295, 27296];

pub(crate) const LEFT_BANK_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const LEFT_BANK_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [27317, IMAGE_INDEX_UNDEFINED, 27318, 27319, IMAGE_INDEX_UNDEFINED, 27320, 27321],
    [27322, IMAGE_INDEX_UNDEFINED, 27323, 27324, IMAGE_INDEX_UNDEFINED, 27325, 27326],
    [27327, IMAGE_INDEX_UNDEFINED, 27328, 27329, IMAGE_INDEX_UNDEFINED, 27330, 27331],
    [27332, IMAGE_INDEX_UNDEFINED, 27333, 27334, IMAGE_INDEX_UNDEFINED, 27335, 27336],
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_UP_25_OFFSETS: [[CoordsXYZ; 7]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(16, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_5_TILES_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [27297, IMAGE_INDEX_UNDEFINED, 27298, 27299, IMAGE_INDEX_UNDEFINED, 27300, 27301],
    [27302, IMAGE_INDEX_UNDEFINED, 27303, 27304, IMAGE_INDEX_UNDEFINED, 27305, 27306],
    [27307, IMAGE_INDEX_UNDEFINED, 27308, 27309, IMAGE_INDEX_UNDEFINED, 27310, 27311],
    [27312, IMAGE_INDEX_UNDEFINED, 27313, 27314, IMAGE_INDEX_UNDEFINED, 27315, 27316],
];

pub(crate) const RIGHT_QUARTER_TURN_5_TILES_UP_25_OFFSETS: [[CoordsXYZ; 7]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(16, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const S_BEND_LEFT_SPRITES: [[ImageIndex; 4]; 4] = [
    [27253, 27254, 27255, 27256],
    [27257, 27258, 27259, 27260],
    [27256, 27255, 27254, 27253],
    [27260, 27259, 27258, 27257],
];

pub(crate) const S_BEND_LEFT_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const S_BEND_LEFT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const S_BEND_RIGHT_SPRITES: [[ImageIndex; 4]; 4] = [
    [27261, 27262, 27263, 27264],
    [27265, 27266, 27267, 27268],
    [27264, 27263, 27262, 27261],
    [27268, 27267, 27266, 27265],
];

pub(crate) const S_BEND_RIGHT_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const S_BEND_RIGHT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_SPRITES: [[ImageIndex; 4]; 4] = [
    [27392, IMAGE_INDEX_UNDEFINED, 27391, 27390],
    [27395, IMAGE_INDEX_UNDEFINED, 27394, 27393],
    [27398, IMAGE_INDEX_UNDEFINED, 27397, 27396],
    [27389, IMAGE_INDEX_UNDEFINED, 27388, 27387],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILES_SPRITES: [[ImageIndex; 4]; 4] = [
    [27404, IMAGE_INDEX_UNDEFINED, 27403, 27402],
    [27407, IMAGE_INDEX_UNDEFINED, 27406, 27405],
    [27410, IMAGE_INDEX_UNDEFINED, 27409, 27408],
    [27401, IMAGE_INDEX_UNDEFINED, 27400, 27399],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILES_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILES_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [27422, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27421],
    [27424, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27423],
    [27426, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27425],
    [27420, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27419],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_3_TILES_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [27411, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27412],
    [27413, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27414],
    [27415, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27416],
    [27417, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27418],
];

pub(crate) const RIGHT_QUARTER_TURN_3_TILES_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_CORKSCREW_UP_SPRITES: [[ImageIndex; 3]; 4] = [
    [27467, 27468, 27469],
    [27470, 27471, 27472],
    [27473, 27474, 27475],
    [27476, 27477, 27478],
];

pub(crate) const LEFT_CORKSCREW_UP_OFFSETS: [[CoordsXYZ; 3]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const LEFT_CORKSCREW_UP_BOUND_BOXES: [[BoundBoxXYZ; 3]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 33), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 39), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 33), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 39), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 33), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 39), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 33), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 39), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_CORKSCREW_UP_SPRITES: [[ImageIndex; 3]; 4] = [
    [27479, 27480, 27481],
    [27482, 27483, 27484],
    [27485, 27486, 27487],
    [27488, 27489, 27490],
];

pub(crate) const RIGHT_CORKSCREW_UP_OFFSETS: [[CoordsXYZ; 3]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 14),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const RIGHT_CORKSCREW_UP_BOUND_BOXES: [[BoundBoxXYZ; 3]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 33), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 39), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 33), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 39), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 33), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 39), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 33), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 24), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 39), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const BRAKES_SPRITES: [ImageIndex; 4] = [27337, 27338, 27337, 27338];

pub(crate) const BRAKES_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const BRAKES_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_LEFT_BANKED_SPRITES: [ImageIndex; 4] = [27711, 27712, 27713, 27714];

pub(crate) const UP_25_LEFT_BANKED_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_LEFT_BANKED_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_RIGHT_BANKED_SPRITES: [ImageIndex; 4] = [27715, 27716, 27717, 27718];

pub(crate) const UP_25_RIGHT_BANKED_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_RIGHT_BANKED_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const BLOCK_BRAKES_SPRITES: [ImageIndex; 4] = [27337, 27338, 27337, 27338];

pub(crate) const BLOCK_BRAKES_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const BLOCK_BRAKES_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_EIGHTH_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [27507, 27508, 27509, IMAGE_INDEX_UNDEFINED, 27510],
    [27511, 27512, 27513, IMAGE_INDEX_UNDEFINED, 27514],
    [27515, 27516, 27517, IMAGE_INDEX_UNDEFINED, 27518],
    [27519, 27520, 27521, IMAGE_INDEX_UNDEFINED, 27522],
];

pub(crate) const LEFT_EIGHTH_TO_DIAG_OFFSETS: [[CoordsXYZ; 5]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const LEFT_EIGHTH_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 34, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(18, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const RIGHT_EIGHTH_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [27491, 27492, 27493, IMAGE_INDEX_UNDEFINED, 27494],
    [27495, 27496, 27497, IMAGE_INDEX_UNDEFINED, 27498],
    [27499, 27500, 27501, IMAGE_INDEX_UNDEFINED, 27502],
    [27503, 27504, 27505, IMAGE_INDEX_UNDEFINED, 27506],
];

pub(crate) const RIGHT_EIGHTH_TO_DIAG_OFFSETS: [[CoordsXYZ; 5]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const RIGHT_EIGHTH_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, -2, 29), CoordsXYZ::new(16, 34, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(18, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const LEFT_EIGHTH_BANK_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [27539, 27540, 27541, IMAGE_INDEX_UNDEFINED, 27542],
    [27543, 27544, 27545, IMAGE_INDEX_UNDEFINED, 27546],
    [27547, 27548, 27549, IMAGE_INDEX_UNDEFINED, 27550],
    [27551, 27552, 27553, IMAGE_INDEX_UNDEFINED, 27554],
];

pub(crate) const LEFT_EIGHTH_BANK_TO_DIAG_OFFSETS: [[CoordsXYZ; 5]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const LEFT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 34, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(18, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [27523, 27524, 27525, IMAGE_INDEX_UNDEFINED, 27526],
    [27527, 27528, 27529, IMAGE_INDEX_UNDEFINED, 27530],
    [27531, 27532, 27533, IMAGE_INDEX_UNDEFINED, 27534],
    [27535, 27536, 27537, IMAGE_INDEX_UNDEFINED, 27538],
];

pub(crate) const RIGHT_EIGHTH_BANK_TO_DIAG_OFFSETS: [[CoordsXYZ; 5]; 4] = [
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
    ],
];

pub(crate) const RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, -2, 29), CoordsXYZ::new(16, 34, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(18, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const DIAG_FLAT_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 27555, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27556],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27557, IMAGE_INDEX_UNDEFINED],
        [27558, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 27611, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27612],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27613, IMAGE_INDEX_UNDEFINED],
        [27614, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_FLAT_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_FLAT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 1)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 1)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 1)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 1)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 27567, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27568],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27569, IMAGE_INDEX_UNDEFINED],
        [27570, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 27623, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27624],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27625, IMAGE_INDEX_UNDEFINED],
        [27626, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 45), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 45), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 45), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 45), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_60_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27579, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27580],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27581, IMAGE_INDEX_UNDEFINED],
    [27582, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_UP_60_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 93), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 93), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 93), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_FLAT_TO_UP_25_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 27559, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27560],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27561, IMAGE_INDEX_UNDEFINED],
        [27562, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 27615, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27616],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27617, IMAGE_INDEX_UNDEFINED],
        [27618, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_FLAT_TO_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_FLAT_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_TO_UP_60_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27571, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27572],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27573, IMAGE_INDEX_UNDEFINED],
    [27574, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_UP_25_TO_UP_60_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_TO_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_60_TO_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27575, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27576],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27577, IMAGE_INDEX_UNDEFINED],
    [27578, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_UP_60_TO_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_60_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 61), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 61), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_TO_FLAT_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 27563, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27564],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27565, IMAGE_INDEX_UNDEFINED],
        [27566, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 27619, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27620],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27621, IMAGE_INDEX_UNDEFINED],
        [27622, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_TO_FLAT_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_TO_FLAT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_FLAT_TO_LEFT_BANK_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27587, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27588],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27589, IMAGE_INDEX_UNDEFINED],
    [27590, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_FLAT_TO_LEFT_BANK_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_FLAT_TO_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_FLAT_TO_RIGHT_BANK_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27591, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27592],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27593, IMAGE_INDEX_UNDEFINED],
    [27594, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_FLAT_TO_RIGHT_BANK_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_FLAT_TO_RIGHT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_LEFT_BANK_TO_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27603, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27604],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27605, IMAGE_INDEX_UNDEFINED],
    [27606, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_LEFT_BANK_TO_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_LEFT_BANK_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_RIGHT_BANK_TO_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27607, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27608],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27609, IMAGE_INDEX_UNDEFINED],
    [27610, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_RIGHT_BANK_TO_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_RIGHT_BANK_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_TO_LEFT_BANK_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27595, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27596],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27597, IMAGE_INDEX_UNDEFINED],
    [27598, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_UP_25_TO_LEFT_BANK_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_TO_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_TO_RIGHT_BANK_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27599, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27600],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27601, IMAGE_INDEX_UNDEFINED],
    [27602, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_UP_25_TO_RIGHT_BANK_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_TO_RIGHT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 37), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_LEFT_BANK_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 27583, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27584],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27585, IMAGE_INDEX_UNDEFINED],
    [27586, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_LEFT_BANK_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 29), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [27762, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27761],
    [27764, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27763],
    [27766, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27765],
    [27760, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27759],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [27751, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27752],
    [27753, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27754],
    [27755, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27756],
    [27757, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 27758],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [27787, IMAGE_INDEX_UNDEFINED, 27788, 27789, IMAGE_INDEX_UNDEFINED, 27790, 27791],
    [27792, IMAGE_INDEX_UNDEFINED, 27793, 27794, IMAGE_INDEX_UNDEFINED, 27795, 27796],
    [27797, IMAGE_INDEX_UNDEFINED, 27798, 27799, IMAGE_INDEX_UNDEFINED, 27800, 27801],
    [27802, IMAGE_INDEX_UNDEFINED, 27803, 27804, IMAGE_INDEX_UNDEFINED, 27805, 27806],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_OFFSETS: [[CoordsXYZ; 7]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(16, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [27767, IMAGE_INDEX_UNDEFINED, 27768, 27769, IMAGE_INDEX_UNDEFINED, 27770, 27771],
    [27772, IMAGE_INDEX_UNDEFINED, 27773, 27774, IMAGE_INDEX_UNDEFINED, 27775, 27776],
    [27777, IMAGE_INDEX_UNDEFINED, 27778, 27779, IMAGE_INDEX_UNDEFINED, 27780, 27781],
    [27782, IMAGE_INDEX_UNDEFINED, 27783, 27784, IMAGE_INDEX_UNDEFINED, 27785, 27786],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_OFFSETS: [[CoordsXYZ; 7]; 4] = [
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
    [
        CoordsXYZ::new(0, 6, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(16, 16, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(6, 0, 29),
    ],
    [
        CoordsXYZ::new(6, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 29),
        CoordsXYZ::new(16, 0, 29),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 29),
        CoordsXYZ::new(0, 6, 29),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 29), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 29), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 29), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 29), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 29), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const UP_25_TO_LEFT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [27719, 27720, 27721, 27722];

pub(crate) const UP_25_TO_LEFT_BANKED_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_TO_LEFT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_TO_RIGHT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [27723, 27724, 27725, 27726];

pub(crate) const UP_25_TO_RIGHT_BANKED_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const UP_25_TO_RIGHT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_BANKED_UP_25_TO_UP_25_SPRITES: [ImageIndex; 4] = [27727, 27728, 27729, 27730];

pub(crate) const LEFT_BANKED_UP_25_TO_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const LEFT_BANKED_UP_25_TO_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_UP_25_SPRITES: [ImageIndex; 4] = [27731, 27732, 27733, 27734];

pub(crate) const RIGHT_BANKED_UP_25_TO_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 45), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 45), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [27735, 27736, 27737, 27738];

pub(crate) const LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [27739, 27740, 27741, 27742];

pub(crate) const RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_SPRITES: [ImageIndex; 4] = [27743, 27744, 27745, 27746];

pub(crate) const LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_SPRITES: [ImageIndex; 4] = [27747, 27748, 27749, 27750];

pub(crate) const RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const FLAT_TO_LEFT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [27695, 27696, 27697, 27698];

pub(crate) const FLAT_TO_LEFT_BANKED_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const FLAT_TO_RIGHT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [27699, 27700, 27701, 27702];

pub(crate) const FLAT_TO_RIGHT_BANKED_UP_25_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_BANKED_UP_25_TO_FLAT_SPRITES: [ImageIndex; 4] = [27703, 27704, 27705, 27706];

pub(crate) const LEFT_BANKED_UP_25_TO_FLAT_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const LEFT_BANKED_UP_25_TO_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_FLAT_SPRITES: [ImageIndex; 4] = [27707, 27708, 27709, 27710];

pub(crate) const RIGHT_BANKED_UP_25_TO_FLAT_OFFSETS: [CoordsXYZ; 4] = [
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
    CoordsXYZ::new(0, 0, 29),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 37), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 37), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_FLYER_TWIST_UP_SPRITES: [[ImageIndex; 3]; 4] = [
    [27430, 27431, 27432],
    [27436, 27437, 27438],
    [27429, 27428, 27427],
    [27435, 27434, 27433],
];

pub(crate) const LEFT_FLYER_TWIST_UP_OFFSETS: [[CoordsXYZ; 3]; 4] = [
    [
        CoordsXYZ::new(0, 6, -5),
        CoordsXYZ::new(0, 6, 24),
        CoordsXYZ::new(0, 6, 24),
    ],
    [
        CoordsXYZ::new(6, 0, -5),
        CoordsXYZ::new(6, 0, 24),
        CoordsXYZ::new(6, 0, 24),
    ],
    [
        CoordsXYZ::new(0, 6, -5),
        CoordsXYZ::new(0, 6, 24),
        CoordsXYZ::new(0, 6, 24),
    ],
    [
        CoordsXYZ::new(6, 0, -5),
        CoordsXYZ::new(6, 0, 24),
        CoordsXYZ::new(6, 0, 24),
    ],
];

pub(crate) const LEFT_FLYER_TWIST_UP_BOUND_BOXES: [[BoundBoxXYZ; 3]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 6), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 6), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 6), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 6), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const RIGHT_FLYER_TWIST_UP_SPRITES: [[ImageIndex; 3]; 4] = [
    [27442, 27443, 27444],
    [27448, 27449, 27450],
    [27441, 27440, 27439],
    [27447, 27446, 27445],
];

pub(crate) const RIGHT_FLYER_TWIST_UP_OFFSETS: [[CoordsXYZ; 3]; 4] = [
    [
        CoordsXYZ::new(0, 6, -5),
        CoordsXYZ::new(0, 6, 24),
        CoordsXYZ::new(0, 6, 24),
    ],
    [
        CoordsXYZ::new(6, 0, -5),
        CoordsXYZ::new(6, 0, 24),
        CoordsXYZ::new(6, 0, 24),
    ],
    [
        CoordsXYZ::new(0, 6, -5),
        CoordsXYZ::new(0, 6, 24),
        CoordsXYZ::new(0, 6, 24),
    ],
    [
        CoordsXYZ::new(6, 0, -5),
        CoordsXYZ::new(6, 0, 24),
        CoordsXYZ::new(6, 0, 24),
    ],
];

pub(crate) const RIGHT_FLYER_TWIST_UP_BOUND_BOXES: [[BoundBoxXYZ; 3]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 6), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 6), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 6), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 6), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const FLYER_HALF_LOOP_UNINVERTED_UP_SPRITES: [[ImageIndex; 4]; 4] = [
    [17626, 17627, 17628, 17629],
    [17634, 17635, 17636, 17637],
    [17633, 17632, 17631, 17630],
    [17641, 17640, 17639, 17638],
];

pub(crate) const FLYER_HALF_LOOP_UNINVERTED_UP_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 32),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(14, 0, 0),
        CoordsXYZ::new(0, 12, 0),
        CoordsXYZ::new(0, 0, 32),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(10, 16, 0),
        CoordsXYZ::new(0, 16, 32),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(16, 0, 32),
    ],
];

pub(crate) const FLYER_HALF_LOOP_UNINVERTED_UP_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(2, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(32, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 11)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 28, 0), CoordsXYZ::new(20, 3, 63)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 12, 0), CoordsXYZ::new(16, 3, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(16, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 9)),
        BoundBoxXYZ::new(CoordsXYZ::new(28, 6, 0), CoordsXYZ::new(3, 20, 63)),
        BoundBoxXYZ::new(CoordsXYZ::new(10, 16, 0), CoordsXYZ::new(4, 12, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 32), CoordsXYZ::new(32, 12, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 7)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 15, 0), CoordsXYZ::new(16, 2, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 32), CoordsXYZ::new(12, 32, 3)),
    ],
];

