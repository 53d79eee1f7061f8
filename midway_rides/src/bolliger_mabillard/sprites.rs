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

//! Sprite, offset, and bound-box tables for the upright chain-lift coaster
//! family. All values are asset-bound constants from the sprite manifest;
//! they are copied verbatim and never derived. Tables are indexed
//! `[chain][direction]` or `[direction][sequence]` as noted by their shapes,
//! with the odd-direction axis swap already applied to boxes and offsets.
//!
//! A sequence slot with `IMAGE_INDEX_UNDEFINED` draws nothing for that tile.

use midway_paint::{BoundBoxXYZ, CoordsXYZ, ImageIndex};

/// Sentinel for "no sprite for this direction/sequence slot".
pub(crate) const IMAGE_INDEX_UNDEFINED: ImageIndex = ImageIndex::MAX;

pub(crate) const BB_EMPTY: BoundBoxXYZ = BoundBoxXYZ::new(
    CoordsXYZ::new(0, 0, 0),
    CoordsXYZ::new(0, 0, 0),
);

pub(crate) const FLAT_SPRITES: [[ImageIndex; 4]; 2] = [
    [17146, 17147, 17146, 17147],
    [17486, 17487, 17488, 17489],
];

pub(crate) const FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const STATION_SPRITES: [ImageIndex; 4] = [17154, 17155, 17154, 17155];

pub(crate) const STATION_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 1), CoordsXYZ::new(32, 20, 2)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 1), CoordsXYZ::new(20, 32, 2)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 1), CoordsXYZ::new(32, 20, 2)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 1), CoordsXYZ::new(20, 32, 2)),
];

pub(crate) const UP_25_SPRITES: [[ImageIndex; 4]; 2] = [
    [17204, 17205, 17206, 17207],
    [17498, 17499, 17500, 17501],
];

pub(crate) const UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_60_SPRITES: [[ImageIndex; 4]; 2] = [
    [17220, 17221, 17222, 17223],
    [17514, 17515, 17516, 17517],
];

pub(crate) const UP_60_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 98)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 98)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const FLAT_TO_UP_25_SPRITES: [[ImageIndex; 4]; 2] = [
    [17196, 17197, 17198, 17199],
    [17490, 17491, 17492, 17493],
];

pub(crate) const FLAT_TO_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_TO_UP_60_SPRITES: [[[ImageIndex; 2]; 4]; 2] = [
    [
        [17208, IMAGE_INDEX_UNDEFINED],
        [17209, 17212],
        [17210, 17213],
        [17211, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17502, IMAGE_INDEX_UNDEFINED],
        [17503, 17506],
        [17504, 17507],
        [17505, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const UP_25_TO_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 66)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 66)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_60_TO_UP_25_SPRITES: [[[ImageIndex; 2]; 4]; 2] = [
    [
        [17214, IMAGE_INDEX_UNDEFINED],
        [17215, 17218],
        [17216, 17219],
        [17217, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17508, IMAGE_INDEX_UNDEFINED],
        [17509, 17512],
        [17510, 17513],
        [17511, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const UP_60_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 66)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 66)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_25_TO_FLAT_SPRITES: [[ImageIndex; 4]; 2] = [
    [17200, 17201, 17202, 17203],
    [17494, 17495, 17496, 17497],
];

pub(crate) const UP_25_TO_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_SPRITES: [[ImageIndex; 7]; 4] = [
    [17259, IMAGE_INDEX_UNDEFINED, 17258, 17257, IMAGE_INDEX_UNDEFINED, 17256, 17255],
    [17264, IMAGE_INDEX_UNDEFINED, 17263, 17262, IMAGE_INDEX_UNDEFINED, 17261, 17260],
    [17269, IMAGE_INDEX_UNDEFINED, 17268, 17267, IMAGE_INDEX_UNDEFINED, 17266, 17265],
    [17254, IMAGE_INDEX_UNDEFINED, 17253, 17252, IMAGE_INDEX_UNDEFINED, 17251, 17250],
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const FLAT_TO_LEFT_BANK_SPRITES: [[ImageIndex; 2]; 4] = [
    [17156, 17164],
    [17157, 17165],
    [17158, IMAGE_INDEX_UNDEFINED],
    [17159, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const FLAT_TO_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const FLAT_TO_RIGHT_BANK_SPRITES: [[ImageIndex; 2]; 4] = [
    [17160, IMAGE_INDEX_UNDEFINED],
    [17161, IMAGE_INDEX_UNDEFINED],
    [17162, 17166],
    [17163, 17167],
];

pub(crate) const FLAT_TO_RIGHT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const BANKED_LEFT_QUARTER_TURN_5_TILES_SPRITES: [[[ImageIndex; 2]; 7]; 4] = [
    [
        [17279, 17290],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17278, IMAGE_INDEX_UNDEFINED],
        [17277, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17276, IMAGE_INDEX_UNDEFINED],
        [17275, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17284, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17283, IMAGE_INDEX_UNDEFINED],
        [17282, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17281, IMAGE_INDEX_UNDEFINED],
        [17280, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17289, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17288, IMAGE_INDEX_UNDEFINED],
        [17287, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17286, IMAGE_INDEX_UNDEFINED],
        [17285, 17291],
    ],
    [
        [17274, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17273, IMAGE_INDEX_UNDEFINED],
        [17272, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17271, IMAGE_INDEX_UNDEFINED],
        [17270, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const BANKED_LEFT_QUARTER_TURN_5_TILES_BOUND_BOXES: [[[BoundBoxXYZ; 2]; 7]; 4] = [
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 32, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(32, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
    ],
];

pub(crate) const LEFT_BANK_TO_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17168, 17172],
    [17169, 17173],
    [17170, IMAGE_INDEX_UNDEFINED],
    [17171, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const LEFT_BANK_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const RIGHT_BANK_TO_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17174, IMAGE_INDEX_UNDEFINED],
    [17175, IMAGE_INDEX_UNDEFINED],
    [17176, 17178],
    [17177, 17179],
];

pub(crate) const RIGHT_BANK_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_25_TO_LEFT_BANK_SPRITES: [[ImageIndex; 2]; 4] = [
    [17180, 17184],
    [17181, 17185],
    [17182, IMAGE_INDEX_UNDEFINED],
    [17183, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const UP_25_TO_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_25_TO_RIGHT_BANK_SPRITES: [[ImageIndex; 2]; 4] = [
    [17186, IMAGE_INDEX_UNDEFINED],
    [17187, IMAGE_INDEX_UNDEFINED],
    [17188, 17190],
    [17189, 17191],
];

pub(crate) const UP_25_TO_RIGHT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_BANK_SPRITES: [ImageIndex; 4] = [17192, 17193, 17194, 17195];

pub(crate) const LEFT_BANK_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [17344, IMAGE_INDEX_UNDEFINED, 17345, 17346, IMAGE_INDEX_UNDEFINED, 17347, 17348],
    [17349, IMAGE_INDEX_UNDEFINED, 17350, 17351, IMAGE_INDEX_UNDEFINED, 17352, 17353],
    [17354, IMAGE_INDEX_UNDEFINED, 17355, 17356, IMAGE_INDEX_UNDEFINED, 17357, 17358],
    [17359, IMAGE_INDEX_UNDEFINED, 17360, 17361, IMAGE_INDEX_UNDEFINED, 17362, 17363],
];

pub(crate) const LEFT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_5_TILES_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [17324, IMAGE_INDEX_UNDEFINED, 17325, 17326, IMAGE_INDEX_UNDEFINED, 17327, 17328],
    [17329, IMAGE_INDEX_UNDEFINED, 17330, 17331, IMAGE_INDEX_UNDEFINED, 17332, 17333],
    [17334, IMAGE_INDEX_UNDEFINED, 17335, 17336, IMAGE_INDEX_UNDEFINED, 17337, 17338],
    [17339, IMAGE_INDEX_UNDEFINED, 17340, 17341, IMAGE_INDEX_UNDEFINED, 17342, 17343],
];

pub(crate) const RIGHT_QUARTER_TURN_5_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const S_BEND_LEFT_SPRITES: [[ImageIndex; 4]; 4] = [
    [17308, 17309, 17310, 17311],
    [17312, 17313, 17314, 17315],
    [17311, 17310, 17309, 17308],
    [17315, 17314, 17313, 17312],
];

pub(crate) const S_BEND_LEFT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const S_BEND_RIGHT_SPRITES: [[ImageIndex; 4]; 4] = [
    [17316, 17317, 17318, 17319],
    [17320, 17321, 17322, 17323],
    [17319, 17318, 17317, 17316],
    [17323, 17322, 17321, 17320],
];

pub(crate) const S_BEND_RIGHT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const LEFT_VERTICAL_LOOP_SPRITES: [[ImageIndex; 10]; 4] = [
    [17594, 17595, 17596, 17597, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17598, 17599, 17600, 17601],
    [17602, 17603, 17604, 17605, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17606, 17607, 17608, 17609],
    [17601, 17600, 17599, 17598, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17597, 17596, 17595, 17594],
    [17609, 17608, 17607, 17606, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17605, 17604, 17603, 17602],
];

pub(crate) const LEFT_VERTICAL_LOOP_OFFSETS: [[CoordsXYZ; 10]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 32),
        CoordsXYZ::new(10, 16, 0),
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(14, 0, 0),
        CoordsXYZ::new(0, 12, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 32),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(10, 16, 0),
        CoordsXYZ::new(0, 16, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(16, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(16, 0, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(0, 12, 0),
        CoordsXYZ::new(14, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
];

pub(crate) const LEFT_VERTICAL_LOOP_BOUND_BOXES: [[BoundBoxXYZ; 10]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(3, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(32, 16, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 32), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(10, 16, 0), CoordsXYZ::new(4, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(14, 0, 0), CoordsXYZ::new(2, 32, 63)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 12, 0), CoordsXYZ::new(16, 3, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 2, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 7)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(10, 16, 0), CoordsXYZ::new(4, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 32), CoordsXYZ::new(32, 16, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(3, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 7)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 2, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 12, 0), CoordsXYZ::new(16, 3, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(14, 0, 0), CoordsXYZ::new(2, 32, 63)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const RIGHT_VERTICAL_LOOP_SPRITES: [[ImageIndex; 10]; 4] = [
    [17625, 17624, 17623, 17622, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17621, 17620, 17619, 17618],
    [17617, 17616, 17615, 17614, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17613, 17612, 17611, 17610],
    [17618, 17619, 17620, 17621, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17622, 17623, 17624, 17625],
    [17610, 17611, 17612, 17613, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17614, 17615, 17616, 17617],
];

pub(crate) const RIGHT_VERTICAL_LOOP_OFFSETS: [[CoordsXYZ; 10]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(0, 16, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(12, 0, 0),
        CoordsXYZ::new(0, 14, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(16, 10, 0),
        CoordsXYZ::new(16, 0, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 14, 0),
        CoordsXYZ::new(12, 0, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 32),
        CoordsXYZ::new(16, 16, 0),
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 16, 0),
        CoordsXYZ::new(0, 0, 32),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(16, 0, 32),
        CoordsXYZ::new(16, 10, 0),
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
];

pub(crate) const RIGHT_VERTICAL_LOOP_BOUND_BOXES: [[BoundBoxXYZ; 10]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(3, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 32), CoordsXYZ::new(32, 16, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(10, 0, 0), CoordsXYZ::new(4, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(14, 0, 0), CoordsXYZ::new(2, 32, 63)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 17, 0), CoordsXYZ::new(16, 3, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 14, 0), CoordsXYZ::new(16, 2, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 7)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(10, 0, 0), CoordsXYZ::new(4, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(32, 16, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 32), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(3, 16, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 26, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 7)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(26, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 14, 0), CoordsXYZ::new(16, 2, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 32), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 17, 0), CoordsXYZ::new(16, 3, 119)),
        BoundBoxXYZ::new(CoordsXYZ::new(14, 0, 0), CoordsXYZ::new(2, 32, 63)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_SPRITES: [[ImageIndex; 4]; 4] = [
    [17229, IMAGE_INDEX_UNDEFINED, 17228, 17227],
    [17232, IMAGE_INDEX_UNDEFINED, 17231, 17230],
    [17235, IMAGE_INDEX_UNDEFINED, 17234, 17233],
    [17226, IMAGE_INDEX_UNDEFINED, 17225, 17224],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILES_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [17241, 17248],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17240, IMAGE_INDEX_UNDEFINED],
        [17239, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17244, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17243, IMAGE_INDEX_UNDEFINED],
        [17242, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17247, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17246, IMAGE_INDEX_UNDEFINED],
        [17245, 17249],
    ],
    [
        [17238, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17237, IMAGE_INDEX_UNDEFINED],
        [17236, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILES_BOUND_BOXES: [[[BoundBoxXYZ; 2]; 4]; 4] = [
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [17375, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17374],
    [17377, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17376],
    [17379, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17378],
    [17373, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17372],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
];

pub(crate) const LEFT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_3_TILES_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [17364, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17365],
    [17366, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17367],
    [17368, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17369],
    [17370, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17371],
];

pub(crate) const RIGHT_QUARTER_TURN_3_TILES_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_3_TILES_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_HALF_BANKED_HELIX_UP_SMALL_SPRITES: [[[ImageIndex; 2]; 8]; 4] = [
    [
        [17399, 17406],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17398, IMAGE_INDEX_UNDEFINED],
        [17397, IMAGE_INDEX_UNDEFINED],
        [17396, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17395, IMAGE_INDEX_UNDEFINED],
        [17394, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17402, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17401, IMAGE_INDEX_UNDEFINED],
        [17400, IMAGE_INDEX_UNDEFINED],
        [17399, 17406],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17398, IMAGE_INDEX_UNDEFINED],
        [17397, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17405, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17404, IMAGE_INDEX_UNDEFINED],
        [17403, 17407],
        [17402, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17401, IMAGE_INDEX_UNDEFINED],
        [17400, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17396, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17395, IMAGE_INDEX_UNDEFINED],
        [17394, IMAGE_INDEX_UNDEFINED],
        [17405, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17404, IMAGE_INDEX_UNDEFINED],
        [17403, 17407],
    ],
];

pub(crate) const LEFT_HALF_BANKED_HELIX_UP_SMALL_BOUND_BOXES: [[[BoundBoxXYZ; 2]; 8]; 4] = [
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
    ],
];

pub(crate) const RIGHT_HALF_BANKED_HELIX_UP_SMALL_SPRITES: [[[ImageIndex; 2]; 8]; 4] = [
    [
        [17380, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17381, IMAGE_INDEX_UNDEFINED],
        [17382, IMAGE_INDEX_UNDEFINED],
        [17383, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17384, IMAGE_INDEX_UNDEFINED],
        [17385, 17392],
    ],
    [
        [17383, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17384, IMAGE_INDEX_UNDEFINED],
        [17385, 17392],
        [17386, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17387, IMAGE_INDEX_UNDEFINED],
        [17388, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17386, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17387, IMAGE_INDEX_UNDEFINED],
        [17388, IMAGE_INDEX_UNDEFINED],
        [17389, 17393],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17390, IMAGE_INDEX_UNDEFINED],
        [17391, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17389, 17393],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17390, IMAGE_INDEX_UNDEFINED],
        [17391, IMAGE_INDEX_UNDEFINED],
        [17380, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17381, IMAGE_INDEX_UNDEFINED],
        [17382, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const RIGHT_HALF_BANKED_HELIX_UP_SMALL_BOUND_BOXES: [[[BoundBoxXYZ; 2]; 8]; 4] = [
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
    ],
];

pub(crate) const LEFT_HALF_BANKED_HELIX_UP_LARGE_SPRITES: [[[ImageIndex; 2]; 14]; 4] = [
    [
        [17439, 17450],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17438, IMAGE_INDEX_UNDEFINED],
        [17437, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17436, IMAGE_INDEX_UNDEFINED],
        [17435, IMAGE_INDEX_UNDEFINED],
        [17434, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17433, IMAGE_INDEX_UNDEFINED],
        [17432, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17431, IMAGE_INDEX_UNDEFINED],
        [17430, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17444, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17443, IMAGE_INDEX_UNDEFINED],
        [17442, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17441, IMAGE_INDEX_UNDEFINED],
        [17440, IMAGE_INDEX_UNDEFINED],
        [17439, 17450],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17438, IMAGE_INDEX_UNDEFINED],
        [17437, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17436, IMAGE_INDEX_UNDEFINED],
        [17435, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17449, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17448, IMAGE_INDEX_UNDEFINED],
        [17447, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17446, IMAGE_INDEX_UNDEFINED],
        [17445, 17451],
        [17444, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17443, IMAGE_INDEX_UNDEFINED],
        [17442, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17441, IMAGE_INDEX_UNDEFINED],
        [17440, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17434, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17433, IMAGE_INDEX_UNDEFINED],
        [17432, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17431, IMAGE_INDEX_UNDEFINED],
        [17430, IMAGE_INDEX_UNDEFINED],
        [17449, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17448, IMAGE_INDEX_UNDEFINED],
        [17447, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17446, IMAGE_INDEX_UNDEFINED],
        [17445, 17451],
    ],
];

pub(crate) const LEFT_HALF_BANKED_HELIX_UP_LARGE_BOUND_BOXES: [[[BoundBoxXYZ; 2]; 14]; 4] = [
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 32, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(32, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 32, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(32, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BB_EMPTY, BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
    ],
];

pub(crate) const RIGHT_HALF_BANKED_HELIX_UP_LARGE_SPRITES: [[[ImageIndex; 2]; 14]; 4] = [
    [
        [17408, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17409, IMAGE_INDEX_UNDEFINED],
        [17410, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17411, IMAGE_INDEX_UNDEFINED],
        [17412, IMAGE_INDEX_UNDEFINED],
        [17413, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17414, IMAGE_INDEX_UNDEFINED],
        [17415, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17416, IMAGE_INDEX_UNDEFINED],
        [17417, 17428],
    ],
    [
        [17413, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17414, IMAGE_INDEX_UNDEFINED],
        [17415, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17416, IMAGE_INDEX_UNDEFINED],
        [17417, 17428],
        [17418, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17419, IMAGE_INDEX_UNDEFINED],
        [17420, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17421, IMAGE_INDEX_UNDEFINED],
        [17422, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17418, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17419, IMAGE_INDEX_UNDEFINED],
        [17420, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17421, IMAGE_INDEX_UNDEFINED],
        [17422, IMAGE_INDEX_UNDEFINED],
        [17423, 17429],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17424, IMAGE_INDEX_UNDEFINED],
        [17425, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17426, IMAGE_INDEX_UNDEFINED],
        [17427, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17423, 17429],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17424, IMAGE_INDEX_UNDEFINED],
        [17425, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17426, IMAGE_INDEX_UNDEFINED],
        [17427, IMAGE_INDEX_UNDEFINED],
        [17408, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17409, IMAGE_INDEX_UNDEFINED],
        [17410, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17411, IMAGE_INDEX_UNDEFINED],
        [17412, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const RIGHT_HALF_BANKED_HELIX_UP_LARGE_BOUND_BOXES: [[[BoundBoxXYZ; 2]; 14]; 4] = [
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 32, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 27), CoordsXYZ::new(32, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 32, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 27), CoordsXYZ::new(16, 16, 1)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 27), CoordsXYZ::new(32, 16, 1)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
            BB_EMPTY,
        ],
    ],
    [
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 8), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
            BB_EMPTY,
        ],
        [BoundBoxXYZ::new(CoordsXYZ::new(0, 32, 0), CoordsXYZ::new(0, 0, 0)), BB_EMPTY],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 32, 3)),
            BB_EMPTY,
        ],
        [
            BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
            BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        ],
    ],
];

pub(crate) const LEFT_QUARTER_TURN_1_TILE_UP_60_SPRITES: [[ImageIndex; 2]; 4] = [
    [17301, 17305],
    [17302, 17306],
    [17303, 17307],
    [17300, 17304],
];

pub(crate) const LEFT_QUARTER_TURN_1_TILE_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
];

pub(crate) const RIGHT_QUARTER_TURN_1_TILE_UP_60_SPRITES: [[ImageIndex; 2]; 4] = [
    [17292, 17296],
    [17293, 17297],
    [17294, 17298],
    [17295, 17299],
];

pub(crate) const RIGHT_QUARTER_TURN_1_TILE_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 0), CoordsXYZ::new(28, 28, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(2, 2, 99), CoordsXYZ::new(28, 28, 1)),
    ],
];

pub(crate) const BRAKES_SPRITES: [ImageIndex; 4] = [17148, 17149, 17148, 17149];

pub(crate) const BRAKES_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_LEFT_BANKED_SPRITES: [ImageIndex; 4] = [17914, 17915, 17916, 17917];

pub(crate) const UP_25_LEFT_BANKED_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const UP_25_RIGHT_BANKED_SPRITES: [ImageIndex; 4] = [17918, 17919, 17920, 17921];

pub(crate) const UP_25_RIGHT_BANKED_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const BLOCK_BRAKES_SPRITES: [[ImageIndex; 4]; 2] = [
    [17150, 17151, 17150, 17151],
    [17152, 17153, 17152, 17153],
];

pub(crate) const BLOCK_BRAKES_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_EIGHTH_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [17546, 17547, 17548, IMAGE_INDEX_UNDEFINED, 17549],
    [17550, 17551, 17552, IMAGE_INDEX_UNDEFINED, 17553],
    [17554, 17555, 17556, IMAGE_INDEX_UNDEFINED, 17557],
    [17558, 17559, 17560, IMAGE_INDEX_UNDEFINED, 17561],
];

pub(crate) const LEFT_EIGHTH_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 34, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(18, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const RIGHT_EIGHTH_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [17530, 17531, 17532, IMAGE_INDEX_UNDEFINED, 17533],
    [17534, 17535, 17536, IMAGE_INDEX_UNDEFINED, 17537],
    [17538, 17539, 17540, IMAGE_INDEX_UNDEFINED, 17541],
    [17542, 17543, 17544, IMAGE_INDEX_UNDEFINED, 17545],
];

pub(crate) const RIGHT_EIGHTH_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, -2, 0), CoordsXYZ::new(16, 34, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(18, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const LEFT_EIGHTH_BANK_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [17578, 17579, 17580, IMAGE_INDEX_UNDEFINED, 17581],
    [17582, 17583, 17584, IMAGE_INDEX_UNDEFINED, 17585],
    [17586, 17587, 17588, IMAGE_INDEX_UNDEFINED, 17589],
    [17590, 17591, 17592, IMAGE_INDEX_UNDEFINED, 17593],
];

pub(crate) const LEFT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 26)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 27), CoordsXYZ::new(16, 34, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 27), CoordsXYZ::new(16, 16, 0)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 27), CoordsXYZ::new(18, 16, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const RIGHT_EIGHTH_BANK_TO_DIAG_SPRITES: [[ImageIndex; 5]; 4] = [
    [17562, 17563, 17564, IMAGE_INDEX_UNDEFINED, 17565],
    [17566, 17567, 17568, IMAGE_INDEX_UNDEFINED, 17569],
    [17570, 17571, 17572, IMAGE_INDEX_UNDEFINED, 17573],
    [17574, 17575, 17576, IMAGE_INDEX_UNDEFINED, 17577],
];

pub(crate) const RIGHT_EIGHTH_BANK_TO_DIAG_BOUND_BOXES: [[BoundBoxXYZ; 5]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 26)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 26)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, -2, 27), CoordsXYZ::new(16, 34, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 27), CoordsXYZ::new(16, 16, 0)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 27), CoordsXYZ::new(18, 16, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
];

pub(crate) const DIAG_FLAT_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17788, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17789],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17790, IMAGE_INDEX_UNDEFINED],
        [17791, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17858, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17859],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17860, IMAGE_INDEX_UNDEFINED],
        [17861, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_FLAT_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_FLAT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17800, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17801],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17802, IMAGE_INDEX_UNDEFINED],
        [17803, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17870, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17871],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17872, IMAGE_INDEX_UNDEFINED],
        [17873, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_60_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17812, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17813],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17814, IMAGE_INDEX_UNDEFINED],
        [17815, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17882, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17883],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17884, IMAGE_INDEX_UNDEFINED],
        [17885, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_60_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_FLAT_TO_UP_25_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17792, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17793],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17794, IMAGE_INDEX_UNDEFINED],
        [17795, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17862, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17863],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17864, IMAGE_INDEX_UNDEFINED],
        [17865, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_FLAT_TO_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_FLAT_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_TO_UP_60_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17804, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17805],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17806, IMAGE_INDEX_UNDEFINED],
        [17807, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17874, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17875],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17876, IMAGE_INDEX_UNDEFINED],
        [17877, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_TO_UP_60_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_TO_UP_60_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_60_TO_UP_25_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17808, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17809],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17810, IMAGE_INDEX_UNDEFINED],
        [17811, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17878, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17879],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17880, IMAGE_INDEX_UNDEFINED],
        [17881, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_60_TO_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_60_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_UP_25_TO_FLAT_SPRITES: [[[ImageIndex; 4]; 4]; 2] = [
    [
        [IMAGE_INDEX_UNDEFINED, 17796, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17797],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17798, IMAGE_INDEX_UNDEFINED],
        [17799, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, 17866, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17867],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17868, IMAGE_INDEX_UNDEFINED],
        [17869, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_TO_FLAT_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_UP_25_TO_FLAT_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const DIAG_FLAT_TO_LEFT_BANK_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17828, 17832],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17829, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17830, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17831, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_FLAT_TO_LEFT_BANK_OFFSETS: [[[CoordsXYZ; 2]; 4]; 4] = [
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(-16, -16, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
];

pub(crate) const DIAG_FLAT_TO_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
];

pub(crate) const DIAG_FLAT_TO_RIGHT_BANK_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17833, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17834, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17835, 17837],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17836, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_FLAT_TO_RIGHT_BANK_OFFSETS: [[[CoordsXYZ; 2]; 4]; 4] = [
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(-16, -16, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
];

pub(crate) const DIAG_FLAT_TO_RIGHT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
];

pub(crate) const DIAG_LEFT_BANK_TO_UP_25_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17848, 17852],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17849, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17850, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17851, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_LEFT_BANK_TO_UP_25_OFFSETS: [[[CoordsXYZ; 2]; 4]; 4] = [
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(-16, -16, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
];

pub(crate) const DIAG_LEFT_BANK_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
];

pub(crate) const DIAG_RIGHT_BANK_TO_UP_25_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17853, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17854, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17855, 17857],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17856, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_RIGHT_BANK_TO_UP_25_OFFSETS: [[[CoordsXYZ; 2]; 4]; 4] = [
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(-16, -16, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
];

pub(crate) const DIAG_RIGHT_BANK_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
];

pub(crate) const DIAG_UP_25_TO_LEFT_BANK_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17838, 17842],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17839, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17840, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17841, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_TO_LEFT_BANK_OFFSETS: [[[CoordsXYZ; 2]; 4]; 4] = [
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(-16, -16, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
];

pub(crate) const DIAG_UP_25_TO_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
];

pub(crate) const DIAG_UP_25_TO_RIGHT_BANK_SPRITES: [[[ImageIndex; 2]; 4]; 4] = [
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17843, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17844, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [17845, 17847],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
    [
        [17846, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
        [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    ],
];

pub(crate) const DIAG_UP_25_TO_RIGHT_BANK_OFFSETS: [[[CoordsXYZ; 2]; 4]; 4] = [
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(-16, -16, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
    [
        [
            CoordsXYZ::new(-16, -16, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
        [
            CoordsXYZ::new(0, 0, 0),
            CoordsXYZ::new(0, 0, 0),
        ],
    ],
];

pub(crate) const DIAG_UP_25_TO_RIGHT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(0, 0, 0)),
    ],
];

pub(crate) const DIAG_LEFT_BANK_SPRITES: [[ImageIndex; 4]; 4] = [
    [IMAGE_INDEX_UNDEFINED, 17824, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17825],
    [IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 17826, IMAGE_INDEX_UNDEFINED],
    [17827, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const DIAG_LEFT_BANK_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
    ],
    [
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
    [
        CoordsXYZ::new(-16, -16, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
    ],
];

pub(crate) const DIAG_LEFT_BANK_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 27), CoordsXYZ::new(32, 32, 0)),
        BB_EMPTY,
        BB_EMPTY,
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
    ],
    [
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(-16, -16, 0), CoordsXYZ::new(32, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [18025, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18024],
    [18027, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18026],
    [18029, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18028],
    [18023, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18022],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_SPRITES: [[ImageIndex; 4]; 4] = [
    [18014, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18015],
    [18016, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18017],
    [18018, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18019],
    [18020, IMAGE_INDEX_UNDEFINED, IMAGE_INDEX_UNDEFINED, 18021],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_OFFSETS: [[CoordsXYZ; 4]; 4] = [
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
    [
        CoordsXYZ::new(0, 6, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(6, 0, 0),
    ],
    [
        CoordsXYZ::new(6, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 0, 0),
        CoordsXYZ::new(0, 6, 0),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_3_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [17978, IMAGE_INDEX_UNDEFINED, 17979, 17980, IMAGE_INDEX_UNDEFINED, 17981, 17982],
    [17983, IMAGE_INDEX_UNDEFINED, 17984, 17985, IMAGE_INDEX_UNDEFINED, 17986, 17987],
    [17988, IMAGE_INDEX_UNDEFINED, 17989, 17990, IMAGE_INDEX_UNDEFINED, 17991, 17992],
    [17993, IMAGE_INDEX_UNDEFINED, 17994, 17995, IMAGE_INDEX_UNDEFINED, 17996, 17997],
];

pub(crate) const LEFT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(30, 30, 0), CoordsXYZ::new(1, 1, 34)),
        BoundBoxXYZ::new(CoordsXYZ::new(30, 30, 0), CoordsXYZ::new(1, 1, 34)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(30, 30, 0), CoordsXYZ::new(1, 1, 34)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_SPRITES: [[ImageIndex; 7]; 4] = [
    [17958, IMAGE_INDEX_UNDEFINED, 17959, 17960, IMAGE_INDEX_UNDEFINED, 17961, 17962],
    [17963, IMAGE_INDEX_UNDEFINED, 17964, 17965, IMAGE_INDEX_UNDEFINED, 17966, 17967],
    [17968, IMAGE_INDEX_UNDEFINED, 17969, 17970, IMAGE_INDEX_UNDEFINED, 17971, 17972],
    [17973, IMAGE_INDEX_UNDEFINED, 17974, 17975, IMAGE_INDEX_UNDEFINED, 17976, 17977],
];

pub(crate) const RIGHT_BANKED_QUARTER_TURN_5_TILE_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 7]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(30, 1, 0), CoordsXYZ::new(1, 1, 34)),
        BoundBoxXYZ::new(CoordsXYZ::new(30, 1, 0), CoordsXYZ::new(1, 1, 34)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(30, 1, 0), CoordsXYZ::new(1, 1, 34)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(16, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(16, 0, 0), CoordsXYZ::new(16, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 16, 0), CoordsXYZ::new(16, 16, 3)),
        BB_EMPTY,
        BoundBoxXYZ::new(CoordsXYZ::new(0, 0, 0), CoordsXYZ::new(32, 16, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const UP_25_TO_LEFT_BANKED_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17922, IMAGE_INDEX_UNDEFINED],
    [17923, 17930],
    [17924, IMAGE_INDEX_UNDEFINED],
    [17925, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const UP_25_TO_LEFT_BANKED_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const UP_25_TO_RIGHT_BANKED_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17926, IMAGE_INDEX_UNDEFINED],
    [17927, IMAGE_INDEX_UNDEFINED],
    [17928, 17931],
    [17929, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const UP_25_TO_RIGHT_BANKED_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_BANKED_UP_25_TO_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17932, IMAGE_INDEX_UNDEFINED],
    [17933, 17940],
    [17934, IMAGE_INDEX_UNDEFINED],
    [17935, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const LEFT_BANKED_UP_25_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const RIGHT_BANKED_UP_25_TO_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17936, IMAGE_INDEX_UNDEFINED],
    [17937, IMAGE_INDEX_UNDEFINED],
    [17938, 17941],
    [17939, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const RIGHT_BANKED_UP_25_TO_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [17942, 17943, 17944, 17945];

pub(crate) const LEFT_BANKED_FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_SPRITES: [ImageIndex; 4] = [17946, 17947, 17948, 17949];

pub(crate) const RIGHT_BANKED_FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_SPRITES: [ImageIndex; 4] = [17950, 17951, 17952, 17953];

pub(crate) const LEFT_BANKED_UP_25_TO_LEFT_BANKED_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 27, 0), CoordsXYZ::new(32, 1, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_SPRITES: [ImageIndex; 4] = [17954, 17955, 17956, 17957];

pub(crate) const RIGHT_BANKED_UP_25_TO_RIGHT_BANKED_FLAT_BOUND_BOXES: [BoundBoxXYZ; 4] = [
    BoundBoxXYZ::new(CoordsXYZ::new(0, 4, 0), CoordsXYZ::new(32, 1, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
    BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
];

pub(crate) const FLAT_TO_LEFT_BANKED_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17894, IMAGE_INDEX_UNDEFINED],
    [17895, 17902],
    [17896, IMAGE_INDEX_UNDEFINED],
    [17897, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const FLAT_TO_LEFT_BANKED_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const FLAT_TO_RIGHT_BANKED_UP_25_SPRITES: [[ImageIndex; 2]; 4] = [
    [17898, IMAGE_INDEX_UNDEFINED],
    [17899, IMAGE_INDEX_UNDEFINED],
    [17900, 17903],
    [17901, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const FLAT_TO_RIGHT_BANKED_UP_25_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_BANKED_UP_25_TO_FLAT_SPRITES: [[ImageIndex; 2]; 4] = [
    [17904, IMAGE_INDEX_UNDEFINED],
    [17905, 17912],
    [17906, IMAGE_INDEX_UNDEFINED],
    [17907, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const LEFT_BANKED_UP_25_TO_FLAT_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const RIGHT_BANKED_UP_25_TO_FLAT_SPRITES: [[ImageIndex; 2]; 4] = [
    [17908, IMAGE_INDEX_UNDEFINED],
    [17909, IMAGE_INDEX_UNDEFINED],
    [17910, 17913],
    [17911, IMAGE_INDEX_UNDEFINED],
];

pub(crate) const RIGHT_BANKED_UP_25_TO_FLAT_BOUND_BOXES: [[BoundBoxXYZ; 2]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(27, 0, 0), CoordsXYZ::new(1, 32, 34)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 0), CoordsXYZ::new(32, 20, 3)),
        BB_EMPTY,
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 0), CoordsXYZ::new(20, 32, 3)),
        BB_EMPTY,
    ],
];

pub(crate) const LEFT_CORKSCREW_UP_SPRITES: [[ImageIndex; 3]; 4] = [
    [17690, 17691, 17692],
    [17693, 17694, 17695],
    [17696, 17697, 17698],
    [17699, 17700, 17701],
];

pub(crate) const LEFT_CORKSCREW_UP_BOUND_BOXES: [[BoundBoxXYZ; 3]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 4), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 4), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 4), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 4), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const RIGHT_CORKSCREW_UP_SPRITES: [[ImageIndex; 3]; 4] = [
    [17702, 17703, 17704],
    [17705, 17706, 17707],
    [17708, 17709, 17710],
    [17711, 17712, 17713],
];

pub(crate) const RIGHT_CORKSCREW_UP_BOUND_BOXES: [[BoundBoxXYZ; 3]; 4] = [
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 4), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 4), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 4), CoordsXYZ::new(32, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 24), CoordsXYZ::new(20, 32, 3)),
    ],
    [
        BoundBoxXYZ::new(CoordsXYZ::new(6, 0, 4), CoordsXYZ::new(20, 32, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(6, 6, 10), CoordsXYZ::new(20, 20, 3)),
        BoundBoxXYZ::new(CoordsXYZ::new(0, 6, 24), CoordsXYZ::new(32, 20, 3)),
    ],
];

pub(crate) const HALF_LOOP_UP_SPRITES: [[ImageIndex; 4]; 4] = [
    [17626, 17627, 17628, 17629],
    [17634, 17635, 17636, 17637],
    [17633, 17632, 17631, 17630],
    [17641, 17640, 17639, 17638],
];

pub(crate) const HALF_LOOP_UP_OFFSETS: [[CoordsXYZ; 4]; 4] = [
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

pub(crate) const HALF_LOOP_UP_BOUND_BOXES: [[BoundBoxXYZ; 4]; 4] = [
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

