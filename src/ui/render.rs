use crate::ui::app::App;
use crate::ui::counter::CounterControl;
use crate::ui::detail::CharacterDetail;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, control_cells, layout_regions};
use ratatui::Frame;

/// Draw the whole view tree from the current app state.
///
/// Pure with respect to `app`: rendering the same state twice produces the
/// same buffer.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let (strip, detail) = body_regions(body);
    let (decrement, display, increment) = control_cells(strip);

    frame.render_widget(Header::new().widget(app.state().phase), header);

    let control = CounterControl::new();
    frame.render_widget(control.decrement_cell(), decrement);
    frame.render_widget(control.display_cell(app.state().counter), display);
    frame.render_widget(control.increment_cell(), increment);

    frame.render_widget(
        CharacterDetail::new().widget(app.state().record.as_ref()),
        detail,
    );

    frame.render_widget(Footer::new().widget(footer, app.notice()), footer);
}
