//! Hand-authored petal key points.
//!
//! Every petal kind is a short list of key-point groups laid out in a
//! 100x100 base space, running from the petal base near the origin out to
//! its tip. Only one side of the petal is authored: the synthesizer mirrors
//! it about the main diagonal.

use crate::error::{FlowerError, Result};

/// One run of key points that can be smoothed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPointGroup {
    /// `(row, col)` pairs in the 100x100 base space
    pub points: &'static [(i32, i32)],
    /// Whether the group may be replaced by a resampled cubic curve
    pub smoothable: bool,
}

/// An ordered set of key-point groups describing one petal shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetalTemplate {
    pub kind: u8,
    pub groups: &'static [KeyPointGroup],
}

const fn group(points: &'static [(i32, i32)], smoothable: bool) -> KeyPointGroup {
    KeyPointGroup { points, smoothable }
}

/// The petal registry, indexed by `kind - 1`.
pub const PETAL_KINDS: &[PetalTemplate] = &[
    PetalTemplate {
        kind: 1,
        groups: &[
            group(&[(4, 4), (5, 30), (6, 40), (7, 50)], true),
            group(&[(7, 50), (14, 65), (20, 70), (33, 75), (47, 88)], true),
            group(&[(47, 88), (49, 86), (50, 84), (55, 70)], true),
            group(&[(55, 70), (65, 76), (70, 77), (81, 81)], true),
        ],
    },
    PetalTemplate {
        kind: 2,
        groups: &[
            group(&[(9, 9), (8, 13), (2, 30), (3, 40), (4, 50)], false),
            group(&[(4, 50), (10, 65), (20, 77), (25, 79), (30, 81), (40, 83)], true),
            group(&[(40, 83), (50, 85), (65, 87), (80, 90), (100, 100)], true),
        ],
    },
    PetalTemplate {
        kind: 3,
        groups: &[
            group(&[(8, 10), (6, 20), (4, 35), (5, 40), (7, 50), (15, 65)], false),
            group(&[(15, 65), (30, 80), (50, 85), (70, 90)], true),
            group(&[(70, 90), (65, 65)], false),
        ],
    },
    PetalTemplate {
        kind: 4,
        groups: &[group(
            &[
                (6, 6),
                (7, 20),
                (9, 40),
                (11, 50),
                (20, 70),
                (30, 80),
                (40, 87),
                (55, 92),
                (75, 95),
                (87, 90),
            ],
            true,
        )],
    },
    PetalTemplate {
        kind: 5,
        groups: &[
            group(
                &[(10, 10), (8, 20), (12, 40), (14, 50), (20, 65), (30, 80), (40, 85), (55, 92)],
                true,
            ),
            group(&[(57, 80), (62, 77), (70, 77), (92, 92)], true),
        ],
    },
    PetalTemplate {
        kind: 6,
        groups: &[
            group(&[(10, 10), (8, 20), (7, 30), (7, 40)], false),
            group(&[(7, 40), (9, 50), (12, 65), (15, 75), (20, 83), (27, 90), (40, 96)], true),
            group(&[(40, 96), (45, 97), (55, 95), (60, 90), (63, 80), (65, 65)], true),
        ],
    },
    PetalTemplate {
        kind: 7,
        groups: &[
            group(&[(2, 2), (5, 30), (8, 40), (10, 50), (15, 65), (23, 78), (35, 90)], true),
            group(&[(35, 90), (37, 91), (41, 93), (43, 94), (46, 94), (50, 94), (62, 92)], true),
            group(&[(62, 92), (64, 82), (71, 85), (75, 87), (84, 84)], true),
        ],
    },
    PetalTemplate {
        kind: 8,
        groups: &[
            group(&[(2, 2), (5, 30), (8, 40), (10, 50), (11, 70)], true),
            group(&[(11, 70), (18, 83), (21, 85), (25, 86), (38, 83)], true),
            group(&[(38, 83), (42, 90), (50, 95), (56, 94), (62, 89), (64, 82)], true),
            group(&[(64, 82), (71, 85), (75, 86), (84, 84)], true),
        ],
    },
];

/// Look up a petal template by kind id.
///
/// There is no fallback: an unknown id is an error.
pub fn template(kind: u8) -> Result<&'static PetalTemplate> {
    PETAL_KINDS
        .iter()
        .find(|t| t.kind == kind)
        .ok_or(FlowerError::UnknownPetalKind(kind))
}
