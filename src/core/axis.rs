use serde::{Deserialize, Serialize};

/// Maximum number of value axes the axes core can lay out.
pub const MAX_VALUE_AXES: usize = 4;

/// Side of the plot area a value axis occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisSide {
    Left,
    Right,
}

/// Value-axis slot. Slot index 0..=3 maps to y1..y4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisRole {
    Y1,
    Y2,
    Y3,
    Y4,
}

/// Static placement facts for one value-axis role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRoleSpec {
    pub side: AxisSide,
    /// Inner axis whose label column this role stacks outward from.
    pub stacks_on: Option<AxisRole>,
    /// Option namespace used by hosts (`y`, `y2`, `y3`, `y4`).
    pub namespace: &'static str,
}

const ROLE_TABLE: [AxisRoleSpec; MAX_VALUE_AXES] = [
    AxisRoleSpec {
        side: AxisSide::Left,
        stacks_on: None,
        namespace: "y",
    },
    AxisRoleSpec {
        side: AxisSide::Right,
        stacks_on: None,
        namespace: "y2",
    },
    AxisRoleSpec {
        side: AxisSide::Left,
        stacks_on: Some(AxisRole::Y1),
        namespace: "y3",
    },
    AxisRoleSpec {
        side: AxisSide::Right,
        stacks_on: Some(AxisRole::Y2),
        namespace: "y4",
    },
];

impl AxisRole {
    pub const ALL: [AxisRole; MAX_VALUE_AXES] =
        [AxisRole::Y1, AxisRole::Y2, AxisRole::Y3, AxisRole::Y4];

    /// Maps a slot index to its role; `None` outside `0..=3`.
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Self::Y1),
            1 => Some(Self::Y2),
            2 => Some(Self::Y3),
            3 => Some(Self::Y4),
            _ => None,
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Y1 => 0,
            Self::Y2 => 1,
            Self::Y3 => 2,
            Self::Y4 => 3,
        }
    }

    #[must_use]
    pub const fn spec(self) -> AxisRoleSpec {
        ROLE_TABLE[self.index()]
    }

    #[must_use]
    pub const fn side(self) -> AxisSide {
        self.spec().side
    }

    #[must_use]
    pub const fn namespace(self) -> &'static str {
        self.spec().namespace
    }
}

/// Address used for per-axis option resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKey {
    X,
    Y(AxisRole),
}

impl AxisKey {
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y(role) => role.namespace(),
        }
    }
}

impl From<AxisRole> for AxisKey {
    fn from(role: AxisRole) -> Self {
        Self::Y(role)
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisKey, AxisRole, AxisSide};

    #[test]
    fn role_table_places_odd_slots_left_and_even_slots_right() {
        assert_eq!(AxisRole::Y1.side(), AxisSide::Left);
        assert_eq!(AxisRole::Y2.side(), AxisSide::Right);
        assert_eq!(AxisRole::Y3.side(), AxisSide::Left);
        assert_eq!(AxisRole::Y4.side(), AxisSide::Right);
        assert_eq!(AxisRole::Y3.spec().stacks_on, Some(AxisRole::Y1));
        assert_eq!(AxisRole::Y4.spec().stacks_on, Some(AxisRole::Y2));
        assert_eq!(AxisRole::Y1.spec().stacks_on, None);
    }

    #[test]
    fn slot_indices_outside_four_axes_have_no_role() {
        for (index, role) in AxisRole::ALL.iter().enumerate() {
            assert_eq!(AxisRole::from_index(index as i64), Some(*role));
            assert_eq!(role.index(), index);
        }
        assert_eq!(AxisRole::from_index(4), None);
        assert_eq!(AxisRole::from_index(7), None);
        assert_eq!(AxisRole::from_index(-1), None);
    }

    #[test]
    fn namespaces_match_option_keys() {
        assert_eq!(AxisKey::X.namespace(), "x");
        assert_eq!(AxisKey::from(AxisRole::Y1).namespace(), "y");
        assert_eq!(AxisKey::Y(AxisRole::Y4).namespace(), "y4");
    }
}
