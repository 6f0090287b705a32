// SPDX-License-Identifier: AGPL-3.0-only

//! Pentagram layout of one 16-unit chip.
//!
//! ```text
//!                      [00]-----[01]
//!                          |   |
//!                          _[10]_
//!       [09]__           _-  |   -_           __[02]
//!        |    ---__    _-    |     -_    __---    |
//!  arm 5 |       __[14]-----[15]-----[11]__       |  arm 2
//!        |  __---    -_     |  |     _-    ---__  |
//!       [08]          -_   |    |   _-          [03]
//!                       - |      | -
//!                      [13]------[12]
//!                     |  |        |  |
//!                  [07]--[06]    [05]--[04]
//!                    arm 4        arm 3
//! ```
//!
//! Offsets `0..10` are five arm pairs, `10..15` the inner ring, 15 the centre.

use crate::cluster::{SubRing, CLUSTER_SIZE};

/// Number of arm positions (five pairs).
pub const ARM_POSITIONS: usize = 10;

/// Inner ring slots `10..=14`.
pub const INNER_RING: SubRing = SubRing {
    first: ARM_POSITIONS,
    len: 5,
};

/// Offset of the central unit.
pub const CENTRE_OFFSET: usize = CLUSTER_SIZE - 1;

/// What a chip offset does in the pentagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PentagramRole {
    /// Arm unit; cross-links with its pair partner and one ring slot.
    Arm,
    /// Inner-ring unit; links left, right and to the centre.
    Ring,
    /// Central unit; fans out to every ring slot.
    Centre,
}

impl PentagramRole {
    /// Role of a chip offset. `None` past the end of the chip.
    #[must_use]
    pub const fn of(offset: usize) -> Option<Self> {
        if offset < ARM_POSITIONS {
            Some(Self::Arm)
        } else if offset < CENTRE_OFFSET {
            Some(Self::Ring)
        } else if offset == CENTRE_OFFSET {
            Some(Self::Centre)
        } else {
            None
        }
    }
}

/// Pair partner of an arm offset: `(0,1), (2,3), .., (8,9)`.
///
/// Even offsets step forward, odd offsets step back.
#[must_use]
pub const fn arm_partner(offset: usize) -> usize {
    if offset % 2 == 0 {
        offset + 1
    } else {
        offset - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_cover_chip() {
        let arms = (0..CLUSTER_SIZE)
            .filter(|&o| PentagramRole::of(o) == Some(PentagramRole::Arm))
            .count();
        let ring = (0..CLUSTER_SIZE)
            .filter(|&o| PentagramRole::of(o) == Some(PentagramRole::Ring))
            .count();
        assert_eq!(arms, 10);
        assert_eq!(ring, 5);
        assert_eq!(PentagramRole::of(15), Some(PentagramRole::Centre));
        assert_eq!(PentagramRole::of(16), None);
    }

    #[test]
    fn partners_are_symmetric() {
        for o in 0..ARM_POSITIONS {
            assert_eq!(arm_partner(arm_partner(o)), o);
            assert_ne!(arm_partner(o), o);
            assert_eq!(arm_partner(o) / 2, o / 2);
        }
    }
}
