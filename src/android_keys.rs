// Android KeyEvent key-code constants.
// Values match android.view.KeyEvent (KEYCODE_*); the platform type is a
// signed 32-bit int, so i32 throughout.

// Editing / navigation
pub const KEYCODE_TAB: i32 = 61;
pub const KEYCODE_SPACE: i32 = 62;
pub const KEYCODE_ENTER: i32 = 66;
pub const KEYCODE_DEL: i32 = 67; // backspace, despite the name
pub const KEYCODE_PAGE_UP: i32 = 92;
pub const KEYCODE_PAGE_DOWN: i32 = 93;
pub const KEYCODE_ESCAPE: i32 = 111;
pub const KEYCODE_FORWARD_DEL: i32 = 112; // the actual delete key
pub const KEYCODE_SYSRQ: i32 = 120; // print screen
pub const KEYCODE_MOVE_HOME: i32 = 122;
pub const KEYCODE_MOVE_END: i32 = 123;
pub const KEYCODE_INSERT: i32 = 124;

// Directional pad
pub const KEYCODE_DPAD_UP: i32 = 19;
pub const KEYCODE_DPAD_DOWN: i32 = 20;
pub const KEYCODE_DPAD_LEFT: i32 = 21;
pub const KEYCODE_DPAD_RIGHT: i32 = 22;

// Media transport
pub const KEYCODE_MEDIA_PLAY_PAUSE: i32 = 85;
pub const KEYCODE_MEDIA_STOP: i32 = 86;
pub const KEYCODE_MEDIA_NEXT: i32 = 87;
pub const KEYCODE_MEDIA_PREVIOUS: i32 = 88;
pub const KEYCODE_MEDIA_REWIND: i32 = 89;
pub const KEYCODE_MEDIA_FAST_FORWARD: i32 = 90;
pub const KEYCODE_MEDIA_PLAY: i32 = 126;
pub const KEYCODE_MEDIA_PAUSE: i32 = 127;
pub const KEYCODE_MEDIA_RECORD: i32 = 130;

// Channel / zoom
pub const KEYCODE_CHANNEL_UP: i32 = 166;
pub const KEYCODE_CHANNEL_DOWN: i32 = 167;
pub const KEYCODE_ZOOM_IN: i32 = 168;
pub const KEYCODE_ZOOM_OUT: i32 = 169;

// Function keys (contiguous F1..F12)
pub const KEYCODE_F1: i32 = 131;
pub const KEYCODE_F2: i32 = 132;
pub const KEYCODE_F3: i32 = 133;
pub const KEYCODE_F4: i32 = 134;
pub const KEYCODE_F5: i32 = 135;
pub const KEYCODE_F6: i32 = 136;
pub const KEYCODE_F7: i32 = 137;
pub const KEYCODE_F8: i32 = 138;
pub const KEYCODE_F9: i32 = 139;
pub const KEYCODE_F10: i32 = 140;
pub const KEYCODE_F11: i32 = 141;
pub const KEYCODE_F12: i32 = 142;

// Numeric keypad (contiguous 0..9)
pub const KEYCODE_NUMPAD_0: i32 = 144;
pub const KEYCODE_NUMPAD_1: i32 = 145;
pub const KEYCODE_NUMPAD_2: i32 = 146;
pub const KEYCODE_NUMPAD_3: i32 = 147;
pub const KEYCODE_NUMPAD_4: i32 = 148;
pub const KEYCODE_NUMPAD_5: i32 = 149;
pub const KEYCODE_NUMPAD_6: i32 = 150;
pub const KEYCODE_NUMPAD_7: i32 = 151;
pub const KEYCODE_NUMPAD_8: i32 = 152;
pub const KEYCODE_NUMPAD_9: i32 = 153;
pub const KEYCODE_NUMPAD_DOT: i32 = 158;
pub const KEYCODE_NUMPAD_ENTER: i32 = 160;

// Keys that stay with the host OS (never forwarded to mpv)
pub const KEYCODE_HOME: i32 = 3;
pub const KEYCODE_VOLUME_UP: i32 = 24;
pub const KEYCODE_VOLUME_DOWN: i32 = 25;
pub const KEYCODE_POWER: i32 = 26;
pub const KEYCODE_ENVELOPE: i32 = 65; // mail key
pub const KEYCODE_MENU: i32 = 82;
pub const KEYCODE_SEARCH: i32 = 84;
pub const KEYCODE_VOLUME_MUTE: i32 = 164;
pub const KEYCODE_SLEEP: i32 = 223;
