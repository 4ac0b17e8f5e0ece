//=========================================================================
// Key Codes
//
// Platform-neutral 16-bit keyboard codes.
//
// Values follow the classic SDL 1.2 key symbol table: printable keys use
// their lowercase ASCII value, everything else sits above 255. The
// platform layer converts native key identifiers into these codes before
// any `Event` is built, so handlers never see backend-specific types.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== KeyCode =============================================================

/// Keyboard key identifier carried by key events.
///
/// A transparent wrapper around `u16` so codes coming from text input
/// (`KeyTypedEvent`) and from physical keys share one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct KeyCode(pub u16);

impl KeyCode {
    /// Key the platform reported but the engine has no code for.
    pub const UNKNOWN: Self = Self(0);

    //--- Control Keys -----------------------------------------------------

    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const ENTER: Self = Self(13);
    pub const PAUSE: Self = Self(19);
    pub const ESCAPE: Self = Self(27);

    //--- Printable Keys ---------------------------------------------------

    pub const SPACE: Self = Self(32);
    pub const APOSTROPHE: Self = Self(39);
    pub const COMMA: Self = Self(44);
    pub const MINUS: Self = Self(45);
    pub const PERIOD: Self = Self(46);
    pub const SLASH: Self = Self(47);

    pub const D0: Self = Self(48);
    pub const D1: Self = Self(49);
    pub const D2: Self = Self(50);
    pub const D3: Self = Self(51);
    pub const D4: Self = Self(52);
    pub const D5: Self = Self(53);
    pub const D6: Self = Self(54);
    pub const D7: Self = Self(55);
    pub const D8: Self = Self(56);
    pub const D9: Self = Self(57);

    pub const SEMICOLON: Self = Self(59);
    pub const EQUAL: Self = Self(61);

    pub const LEFT_BRACKET: Self = Self(91);
    pub const BACKSLASH: Self = Self(92);
    pub const RIGHT_BRACKET: Self = Self(93);
    pub const GRAVE_ACCENT: Self = Self(96);

    pub const A: Self = Self(97);
    pub const B: Self = Self(98);
    pub const C: Self = Self(99);
    pub const D: Self = Self(100);
    pub const E: Self = Self(101);
    pub const F: Self = Self(102);
    pub const G: Self = Self(103);
    pub const H: Self = Self(104);
    pub const I: Self = Self(105);
    pub const J: Self = Self(106);
    pub const K: Self = Self(107);
    pub const L: Self = Self(108);
    pub const M: Self = Self(109);
    pub const N: Self = Self(110);
    pub const O: Self = Self(111);
    pub const P: Self = Self(112);
    pub const Q: Self = Self(113);
    pub const R: Self = Self(114);
    pub const S: Self = Self(115);
    pub const T: Self = Self(116);
    pub const U: Self = Self(117);
    pub const V: Self = Self(118);
    pub const W: Self = Self(119);
    pub const X: Self = Self(120);
    pub const Y: Self = Self(121);
    pub const Z: Self = Self(122);

    pub const DELETE: Self = Self(127);

    /// Non-US layout keys.
    pub const WORLD_1: Self = Self(161);
    pub const WORLD_2: Self = Self(162);

    //--- Keypad -----------------------------------------------------------

    pub const KP_0: Self = Self(256);
    pub const KP_1: Self = Self(257);
    pub const KP_2: Self = Self(258);
    pub const KP_3: Self = Self(259);
    pub const KP_4: Self = Self(260);
    pub const KP_5: Self = Self(261);
    pub const KP_6: Self = Self(262);
    pub const KP_7: Self = Self(263);
    pub const KP_8: Self = Self(264);
    pub const KP_9: Self = Self(265);
    pub const KP_DECIMAL: Self = Self(266);
    pub const KP_DIVIDE: Self = Self(267);
    pub const KP_MULTIPLY: Self = Self(268);
    pub const KP_SUBTRACT: Self = Self(269);
    pub const KP_ADD: Self = Self(270);
    pub const KP_ENTER: Self = Self(271);
    pub const KP_EQUAL: Self = Self(272);

    //--- Navigation -------------------------------------------------------

    pub const UP: Self = Self(273);
    pub const DOWN: Self = Self(274);
    pub const RIGHT: Self = Self(275);
    pub const LEFT: Self = Self(276);
    pub const INSERT: Self = Self(277);
    pub const HOME: Self = Self(278);
    pub const END: Self = Self(279);
    pub const PAGE_UP: Self = Self(280);
    pub const PAGE_DOWN: Self = Self(281);

    //--- Function Keys ----------------------------------------------------

    pub const F1: Self = Self(282);
    pub const F2: Self = Self(283);
    pub const F3: Self = Self(284);
    pub const F4: Self = Self(285);
    pub const F5: Self = Self(286);
    pub const F6: Self = Self(287);
    pub const F7: Self = Self(288);
    pub const F8: Self = Self(289);
    pub const F9: Self = Self(290);
    pub const F10: Self = Self(291);
    pub const F11: Self = Self(292);
    pub const F12: Self = Self(293);

    //--- Lock & Modifier Keys ---------------------------------------------

    pub const NUM_LOCK: Self = Self(300);
    pub const CAPS_LOCK: Self = Self(301);
    pub const SCROLL_LOCK: Self = Self(302);
    pub const RIGHT_SHIFT: Self = Self(303);
    pub const LEFT_SHIFT: Self = Self(304);
    pub const RIGHT_CONTROL: Self = Self(305);
    pub const LEFT_CONTROL: Self = Self(306);
    pub const RIGHT_ALT: Self = Self(307);
    pub const LEFT_ALT: Self = Self(308);
    pub const LEFT_SUPER: Self = Self(311);
    pub const RIGHT_SUPER: Self = Self(312);
    pub const PRINT_SCREEN: Self = Self(316);
    pub const MENU: Self = Self(319);

    //--- Conversions ------------------------------------------------------

    /// Code for a typed character, if it fits in 16 bits.
    ///
    /// Printable ASCII maps onto the same values as the physical key
    /// constants above (`'a'` is [`KeyCode::A`]).
    pub fn from_char(c: char) -> Option<Self> {
        u16::try_from(u32::from(c)).ok().map(Self)
    }

    /// Raw numeric value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl From<u16> for KeyCode {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
