use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints and version; a transient notice replaces the hints while
    /// it is active.
    pub fn widget(&self, area: Rect, notice: Option<&str>) -> Paragraph<'static> {
        let (text, text_style) = match notice {
            Some(notice) => (
                format!(" {notice}"),
                Style::default().fg(STATUS_ERROR),
            ),
            None => (
                " ←/-: Prev │ →/+: Next │ r: Refetch │ q: Quit".to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Pad with char counts, not byte counts (for the arrow glyphs).
        let text_width = text.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(text, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(
                version,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
