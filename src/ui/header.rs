use crate::store::FetchPhase;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_GREEN, STATUS_ERROR, STATUS_LOADING,
    STATUS_OK,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, phase: FetchPhase) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let dot_style = Style::default().fg(match phase {
            FetchPhase::Idle => STATUS_OK,
            FetchPhase::Loading => STATUS_LOADING,
            FetchPhase::Failed => STATUS_ERROR,
        });

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("●", dot_style),
            Span::styled("  ", text_style),
            Span::styled("mortui", Style::default().fg(PORTAL_GREEN)),
            Span::styled("  │  ", separator_style),
            Span::styled("rickandmortyapi.com", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("character browser", text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
