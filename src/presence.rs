//! Presence classification of the two slots of an [OptionPair](crate::OptionPair)

use std::fmt;

/// The four disjoint presence states of a pair of optional slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Both slots hold a value
    BothPresent,
    /// Only the left slot holds a value
    OnlyLeft,
    /// Only the right slot holds a value
    OnlyRight,
    /// Neither slot holds a value
    BothEmpty,
}

impl Presence {
    /// Classifies a pair from whether each of its slots holds a value.
    #[inline]
    pub const fn of(left_present: bool, right_present: bool) -> Self {
        match (left_present, right_present) {
            (true, true) => Self::BothPresent,
            (true, false) => Self::OnlyLeft,
            (false, true) => Self::OnlyRight,
            (false, false) => Self::BothEmpty,
        }
    }

    /// Both slots hold a value.
    pub const fn is_both_present(self) -> bool {
        matches!(self, Self::BothPresent)
    }

    /// The left slot holds the sole value.
    pub const fn is_only_left_present(self) -> bool {
        matches!(self, Self::OnlyLeft)
    }

    /// The right slot holds the sole value.
    pub const fn is_only_right_present(self) -> bool {
        matches!(self, Self::OnlyRight)
    }

    /// Neither slot holds a value.
    pub const fn is_both_empty(self) -> bool {
        matches!(self, Self::BothEmpty)
    }

    /// At least one slot holds a value.
    pub const fn is_any_present(self) -> bool {
        !self.is_both_empty()
    }

    /// At least one slot is empty.
    pub const fn is_any_empty(self) -> bool {
        !self.is_both_present()
    }

    /// The left slot holds a value.
    pub const fn is_left_present(self) -> bool {
        matches!(self, Self::BothPresent | Self::OnlyLeft)
    }

    /// The right slot holds a value.
    pub const fn is_right_present(self) -> bool {
        matches!(self, Self::BothPresent | Self::OnlyRight)
    }

    /// The left slot is empty.
    pub const fn is_left_empty(self) -> bool {
        !self.is_left_present()
    }

    /// The right slot is empty.
    pub const fn is_right_empty(self) -> bool {
        !self.is_right_present()
    }

    /// Only the left slot is empty, so the right slot holds the sole value.
    pub const fn is_only_left_empty(self) -> bool {
        self.is_only_right_present()
    }

    /// Only the right slot is empty, so the left slot holds the sole value.
    pub const fn is_only_right_empty(self) -> bool {
        self.is_only_left_present()
    }
}

/// Names one of the two slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first slot, of type `T`
    Left,
    /// The second slot, of type `R`
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Presence gate of the single-side operation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Admits a side whenever it holds a value, whatever the other side holds
    Present,
    /// Admits a side only when it holds the sole value of the pair
    Only,
}

impl Gate {
    /// Whether a pair in state `presence` passes this gate for `side`.
    pub const fn admits(self, side: Side, presence: Presence) -> bool {
        match (self, side, presence) {
            (_, Side::Left, Presence::OnlyLeft) | (_, Side::Right, Presence::OnlyRight) => true,
            (Gate::Present, _, Presence::BothPresent) => true,
            (Gate::Only, _, Presence::BothPresent) => false,
            (_, Side::Left, Presence::OnlyRight) | (_, Side::Right, Presence::OnlyLeft) => false,
            (_, _, Presence::BothEmpty) => false,
        }
    }
}
