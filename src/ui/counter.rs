use crate::ui::theme::{DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// The `[-] <counter> [+]` control strip.
///
/// Purely presentational: the cells dispatch nothing themselves, key
/// handling lives in `input`.
pub struct CounterControl;

impl CounterControl {
    pub fn new() -> Self {
        Self
    }

    pub fn decrement_cell(&self) -> Paragraph<'static> {
        button_cell("− prev")
    }

    pub fn increment_cell(&self) -> Paragraph<'static> {
        button_cell("next +")
    }

    /// The numeric display between the buttons; a pure function of the
    /// counter slice.
    pub fn display_cell(&self, counter: u16) -> Paragraph<'static> {
        let line = Line::from(Span::styled(
            counter.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ));

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn button_cell(label: &str) -> Paragraph<'static> {
    let line = Line::from(Span::styled(
        label.to_string(),
        Style::default().fg(DIM_TEXT),
    ));

    Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
