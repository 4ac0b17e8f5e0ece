//=========================================================================
// Mouse Codes
//
// Platform-neutral mouse button identifiers (SDL numbering, 1-based).
//
//=========================================================================

use std::fmt;

//=== MouseCode ===========================================================

/// Mouse button identifier carried by mouse button events.
///
/// The `Other` buttons a platform reports keep their native number, so
/// codes above [`MouseCode::BUTTON_LAST`] can appear on exotic hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MouseCode(pub u16);

impl MouseCode {
    pub const BUTTON_0: Self = Self(1);
    pub const BUTTON_1: Self = Self(2);
    pub const BUTTON_2: Self = Self(3);
    pub const BUTTON_3: Self = Self(4);
    pub const BUTTON_4: Self = Self(5);
    pub const BUTTON_5: Self = Self(6);
    pub const BUTTON_6: Self = Self(7);
    pub const BUTTON_7: Self = Self(8);

    pub const BUTTON_LAST: Self = Self::BUTTON_7;

    /// Primary button.
    pub const LEFT: Self = Self::BUTTON_0;
    /// Wheel click.
    pub const MIDDLE: Self = Self::BUTTON_1;
    /// Secondary button.
    pub const RIGHT: Self = Self::BUTTON_2;
    /// First side button ("back").
    pub const X1: Self = Self::BUTTON_3;
    /// Second side button ("forward").
    pub const X2: Self = Self::BUTTON_4;

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for MouseCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for MouseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
