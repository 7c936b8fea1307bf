//! Text rendering of the fretboard: one row per string, one cell per fret.

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fretboard_core::state::{FretMap, FretboardError};
use fretboard_core::trainer::Trainer;

use crate::app::{App, Selector, StatusLevel};

use super::style;

const OPEN_WIDTH: usize = 3;
const FRET_WIDTH: usize = 4;

/// Position-marker dots inlaid between frets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inlay {
    None,
    Single,
    Double,
}

/// Dots at frets 3, 5, 7, 9 and a double dot at 12, repeating every octave.
pub fn inlay(fret: u8) -> Inlay {
    if fret == 0 {
        return Inlay::None;
    }
    match fret % 12 {
        0 => Inlay::Double,
        3 | 5 | 7 | 9 => Inlay::Single,
        _ => Inlay::None,
    }
}

/// Pre-computed fretboard lines plus any query errors hit while building them.
pub struct FretboardView {
    pub lines: Vec<Line<'static>>,
    pub errors: Vec<FretboardError>,
}

impl FretboardView {
    pub fn build(trainer: &Trainer) -> Self {
        let fret_count = trainer.fret_count();
        let string_count = trainer.get_string_count(trainer.state().instrument);
        let open_notes = trainer.state().tuning.open_notes(string_count);

        let mut lines = vec![fret_number_line(fret_count)];
        let mut errors = Vec::new();
        for string in 0..string_count {
            let label = open_notes.get(string).map(|p| p.name()).unwrap_or("?");
            match trainer.get_fret_notes(string as i32, fret_count) {
                Ok(frets) => lines.push(string_line(label, &frets, fret_count)),
                Err(e) => {
                    errors.push(e);
                    lines.push(string_line(label, &FretMap::new(), fret_count));
                }
            }
        }
        lines.push(inlay_line(fret_count));

        Self { lines, errors }
    }
}

fn fret_number_line(fret_count: u8) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(OPEN_WIDTH + 1))];
    for fret in 1..=fret_count {
        spans.push(Span::styled(
            format!("{:^w$} ", fret, w = FRET_WIDTH),
            style::label_style(),
        ));
    }
    Line::from(spans)
}

fn string_line(label: &str, frets: &FretMap, fret_count: u8) -> Line<'static> {
    let mut spans = Vec::with_capacity(usize::from(fret_count) * 2 + 2);
    spans.push(cell(frets, 0, OPEN_WIDTH, label));
    spans.push(Span::styled("║", style::nut_style()));
    for fret in 1..=fret_count {
        spans.push(cell(frets, fret, FRET_WIDTH, ""));
        spans.push(Span::styled("│", style::fret_style()));
    }
    Line::from(spans)
}

/// Marker cell if the fret is in key, otherwise bare string. Open strings with no
/// marker still show the tuning note, dimmed.
fn cell(frets: &FretMap, fret: u8, width: usize, open_label: &str) -> Span<'static> {
    match frets.get(&fret) {
        Some(note) => Span::styled(
            format!("{:^w$}", note.pitch.name(), w = width),
            style::note_style(note.is_root),
        ),
        None if !open_label.is_empty() => Span::styled(
            format!("{:^w$}", open_label, w = width),
            style::label_style(),
        ),
        None => Span::styled("─".repeat(width), style::string_style()),
    }
}

fn inlay_line(fret_count: u8) -> Line<'static> {
    let mut spans = vec![Span::raw(" ".repeat(OPEN_WIDTH + 1))];
    for fret in 1..=fret_count {
        let dots = match inlay(fret) {
            Inlay::None => "",
            Inlay::Single => "•",
            Inlay::Double => "••",
        };
        spans.push(Span::styled(
            format!("{:^w$} ", dots, w = FRET_WIDTH),
            style::inlay_style(),
        ));
    }
    Line::from(spans)
}

fn selector_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();
    for selector in Selector::ALL {
        spans.push(Span::styled(format!("{}: ", selector.label()), style::label_style()));
        spans.push(Span::styled(
            format!(" {} ", app.selection(selector)),
            style::selector_style(selector == app.focus),
        ));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn status_line(app: &App) -> Line<'static> {
    let help = Span::styled(
        "Tab/↑↓ select  ←→ change  q quit",
        style::label_style(),
    );
    match &app.status {
        Some((text, level)) => {
            let fg = match level {
                StatusLevel::Info => ratatui::style::Color::White,
                StatusLevel::Error => style::ERROR,
            };
            Line::from(vec![
                Span::styled(text.clone(), Style::default().fg(fg)),
                Span::raw("   "),
                help,
            ])
        }
        None => Line::from(help),
    }
}

pub fn render(frame: &mut Frame, app: &App, view: &FretboardView) {
    let [selectors, board, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(selector_line(app))
            .block(Block::default().borders(Borders::ALL).title(" Fretboard ")),
        selectors,
    );
    frame.render_widget(
        Paragraph::new(view.lines.clone()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.trainer.state().key())),
        ),
        board,
    );
    frame.render_widget(
        Paragraph::new(status_line(app)).block(Block::default().borders(Borders::ALL)),
        status,
    );
}
