//! Android key-code to mpv key-name mapping.
//!
//! mpv's input protocol addresses keys by name (cf.
//! https://mpv.io/manual/master/#key-names); a key press is forwarded to the
//! player as `keypress <NAME>`. This module holds the fixed set of Android
//! key-codes we translate and the exact name each one becomes. The names are
//! an external contract with mpv: case-sensitive, no synonyms, so renaming
//! one here breaks the integration.

use crate::android_keys::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every binding this table will ever contain, grouped by category.
///
/// Hand-curated: keys not listed here are intentionally left for Android to
/// handle. See [`UNMAPPED_KEYCODES`] for the codes that are excluded as a
/// matter of policy rather than omission.
pub const BINDINGS: &[(i32, &str)] = &[
    // Editing / navigation
    (KEYCODE_SPACE, "SPACE"),
    (KEYCODE_ENTER, "ENTER"),
    (KEYCODE_TAB, "TAB"),
    (KEYCODE_DEL, "BS"),
    (KEYCODE_FORWARD_DEL, "DEL"),
    (KEYCODE_INSERT, "INS"),
    (KEYCODE_MOVE_HOME, "HOME"),
    (KEYCODE_MOVE_END, "END"),
    (KEYCODE_PAGE_UP, "PGUP"),
    (KEYCODE_PAGE_DOWN, "PGDWN"),
    (KEYCODE_ESCAPE, "ESC"),
    (KEYCODE_SYSRQ, "PRINT"),
    // Directional pad
    (KEYCODE_DPAD_RIGHT, "RIGHT"),
    (KEYCODE_DPAD_LEFT, "LEFT"),
    (KEYCODE_DPAD_DOWN, "DOWN"),
    (KEYCODE_DPAD_UP, "UP"),
    // Media transport
    (KEYCODE_MEDIA_PLAY, "PLAYONLY"),
    (KEYCODE_MEDIA_PAUSE, "PAUSEONLY"),
    (KEYCODE_MEDIA_PLAY_PAUSE, "PLAYPAUSE"),
    (KEYCODE_MEDIA_STOP, "STOP"),
    (KEYCODE_MEDIA_FAST_FORWARD, "FORWARD"),
    (KEYCODE_MEDIA_REWIND, "REWIND"),
    (KEYCODE_MEDIA_NEXT, "NEXT"),
    (KEYCODE_MEDIA_PREVIOUS, "PREV"),
    (KEYCODE_MEDIA_RECORD, "RECORD"),
    // Channel / zoom
    (KEYCODE_CHANNEL_UP, "CHANNEL_UP"),
    (KEYCODE_CHANNEL_DOWN, "CHANNEL_DOWN"),
    (KEYCODE_ZOOM_IN, "ZOOMIN"),
    (KEYCODE_ZOOM_OUT, "ZOOMOUT"),
    // Function keys
    (KEYCODE_F1, "F1"),
    (KEYCODE_F2, "F2"),
    (KEYCODE_F3, "F3"),
    (KEYCODE_F4, "F4"),
    (KEYCODE_F5, "F5"),
    (KEYCODE_F6, "F6"),
    (KEYCODE_F7, "F7"),
    (KEYCODE_F8, "F8"),
    (KEYCODE_F9, "F9"),
    (KEYCODE_F10, "F10"),
    (KEYCODE_F11, "F11"),
    (KEYCODE_F12, "F12"),
    // Numeric keypad
    (KEYCODE_NUMPAD_0, "KP0"),
    (KEYCODE_NUMPAD_1, "KP1"),
    (KEYCODE_NUMPAD_2, "KP2"),
    (KEYCODE_NUMPAD_3, "KP3"),
    (KEYCODE_NUMPAD_4, "KP4"),
    (KEYCODE_NUMPAD_5, "KP5"),
    (KEYCODE_NUMPAD_6, "KP6"),
    (KEYCODE_NUMPAD_7, "KP7"),
    (KEYCODE_NUMPAD_8, "KP8"),
    (KEYCODE_NUMPAD_9, "KP9"),
    (KEYCODE_NUMPAD_DOT, "KP_DEC"),
    (KEYCODE_NUMPAD_ENTER, "KP_ENTER"),
];

/// Key-codes deliberately left unmapped so Android keeps its default
/// handling (volume, power, launcher keys and the like). Encoded as data so
/// the policy is testable; do not move any of these into [`BINDINGS`].
pub const UNMAPPED_KEYCODES: &[i32] = &[
    KEYCODE_POWER,
    KEYCODE_MENU,
    KEYCODE_VOLUME_UP,
    KEYCODE_VOLUME_DOWN,
    KEYCODE_VOLUME_MUTE,
    KEYCODE_HOME,
    KEYCODE_SLEEP,
    KEYCODE_ENVELOPE,
    KEYCODE_SEARCH,
];

// Built once on first access; read-only afterwards, so concurrent lookups
// need no locking.
static KEYNAME_MAP: Lazy<HashMap<i32, &'static str>> =
    Lazy::new(|| BINDINGS.iter().copied().collect());

/// Resolves an Android key-code to its mpv key name.
///
/// Returns `None` for any code outside the curated set. That is the normal
/// outcome for most keys, not an error: the caller should leave the event to
/// the platform instead of forwarding it.
pub fn lookup(keycode: i32) -> Option<&'static str> {
    KEYNAME_MAP.get(&keycode).copied()
}
