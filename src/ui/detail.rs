use crate::api::CharacterRecord;
use crate::ui::theme::{DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, PORTAL_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// The character detail panel.
///
/// Renders the last fetched record, or a placeholder when nothing has been
/// loaded yet. In-flight and failed fetches keep showing the stale record;
/// the header dot and footer notice carry that signal instead.
pub struct CharacterDetail;

impl CharacterDetail {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, record: Option<&CharacterRecord>) -> Paragraph<'static> {
        let lines = match record {
            Some(record) => record_lines(record),
            None => placeholder_lines(),
        };

        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .title(Span::styled("Character", Style::default().fg(PORTAL_GREEN)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn record_lines(record: &CharacterRecord) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let label_style = Style::default().fg(DIM_TEXT);

    let field = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{label}: "), label_style),
            Span::styled(value.to_string(), text_style),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().fg(PORTAL_GREEN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Status", &record.status),
        field("Species", &record.species),
        field("Gender", &record.gender),
        field("Origin", &record.origin),
        field("Location", &record.location),
        field("Image", &record.image),
        Line::from(""),
    ];

    let raw = serde_json::to_string_pretty(&record.raw).unwrap_or_default();
    for raw_line in raw.lines() {
        lines.push(Line::from(Span::styled(
            raw_line.to_string(),
            Style::default().fg(DIM_TEXT),
        )));
    }

    lines
}

fn placeholder_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Character Details",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "No data loaded yet",
            Style::default().fg(DIM_TEXT),
        )),
    ]
}
