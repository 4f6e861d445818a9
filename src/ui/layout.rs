use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the counter control strip and the detail panel.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let strip_height = body.height.min(3);
    let strip = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: strip_height,
    };
    let detail = Rect {
        x: body.x,
        y: body.y + strip_height,
        width: body.width,
        height: body.height.saturating_sub(strip_height),
    };
    (strip, detail)
}

/// The `[-] <counter> [+]` cells of the control strip.
pub fn control_cells(strip: Rect) -> (Rect, Rect, Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(strip);
    (cells[0], cells[1], cells[2])
}
