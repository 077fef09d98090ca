//! ANSI color helpers and the booking marker palette.

use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Marker colors, one per booking slot (`id mod len`).
pub const MARKER_PALETTE: [(u8, u8, u8); 5] = [
    (171, 188, 133),
    (71, 139, 162),
    (222, 91, 109),
    (233, 118, 91),
    (242, 164, 144),
];

pub fn marker_colour(slot: usize) -> Colour {
    let (r, g, b) = MARKER_PALETTE[slot % MARKER_PALETTE.len()];
    Colour::RGB(r, g, b)
}

/// Paint `text` with the marker of `slot` as background.
pub fn paint_marker(text: &str, slot: usize) -> String {
    Style::new()
        .on(marker_colour(slot))
        .fg(Colour::Black)
        .bold()
        .paint(text)
        .to_string()
}

pub fn dim(text: &str) -> String {
    format!("{GREY}{text}{RESET}")
}

/// Green bullet for active bookings, blank otherwise.
pub fn active_marker(active: bool) -> String {
    if active {
        Colour::Green.bold().paint("●").to_string()
    } else {
        " ".to_string()
    }
}
