use ratatui::style::{Color, Modifier, Style};

// Fretboard palette (neck wood, frets, strings, markers)
pub const NECK: Color = Color::Rgb(212, 168, 83);
pub const NUT: Color = Color::Rgb(54, 41, 4);
pub const FRET: Color = Color::Rgb(77, 77, 77);
pub const STRING: Color = Color::Rgb(153, 153, 153);
pub const NOTE: Color = Color::Rgb(254, 225, 43);
pub const ROOT: Color = Color::Rgb(255, 127, 80);
pub const INLAY: Color = Color::Rgb(30, 30, 30);

pub const FOCUS: Color = Color::Rgb(0, 255, 255);
pub const DIM: Color = Color::Rgb(128, 128, 128);
pub const ERROR: Color = Color::Rgb(255, 0, 0);

pub fn string_style() -> Style {
    Style::default().fg(STRING).bg(NECK)
}

pub fn note_style(is_root: bool) -> Style {
    let bg = if is_root { ROOT } else { NOTE };
    Style::default().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

pub fn fret_style() -> Style {
    Style::default().fg(FRET).bg(NECK)
}

pub fn nut_style() -> Style {
    Style::default().fg(Color::White).bg(NUT)
}

pub fn inlay_style() -> Style {
    Style::default().fg(INLAY).bg(NECK)
}

pub fn selector_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(FOCUS).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn label_style() -> Style {
    Style::default().fg(DIM)
}
