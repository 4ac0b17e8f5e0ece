//=========================================================================
// Input Codes
//=========================================================================
//
// Key and mouse button identifiers shared by the event model and the
// platform layer.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod key_codes;
pub mod mouse_codes;

//=== Public API ==========================================================

pub use key_codes::KeyCode;
pub use mouse_codes::MouseCode;
