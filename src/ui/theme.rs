use ratatui::style::Color;

pub const ACCENT_GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const SOFT_MINT: Color = Color::Rgb(0x9f, 0xd8, 0xbd);
pub const SOFT_YELLOW: Color = Color::Rgb(0xf5, 0xd7, 0x6e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SUBTEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
