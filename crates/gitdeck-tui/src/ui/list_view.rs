use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::picker::PickerState;
use crate::theme;

const FULL_HINT: &str = "Up/Down: move    Enter: select    Esc: cancel";
const COMPACT_HINT: &str = "Up/Down | Enter | Esc";

pub(crate) fn key_hint(width: u16) -> &'static str {
    // Two columns go to the block borders.
    if usize::from(width.saturating_sub(2)) >= FULL_HINT.len() {
        FULL_HINT
    } else {
        COMPACT_HINT
    }
}

/// Title bar, the list and a key hint footer. `List` keeps the highlighted
/// row in view when the list is taller than the body.
pub(crate) fn render_picker(frame: &mut Frame<'_>, title: &str, picker: &PickerState<String>) {
    let area = frame.area();
    let [header, body, footer] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .areas(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        theme::focus_prompt(),
    )))
    .block(theme::chrome("gitdeck"));
    frame.render_widget(heading, header);

    let position = format!(" {}/{} ", picker.selected + 1, picker.items.len());
    let items: Vec<ListItem<'_>> = picker
        .items
        .iter()
        .map(|item| ListItem::new(item.as_str()))
        .collect();
    let list = List::new(items)
        .block(theme::chrome(Line::from(Span::styled(
            position,
            theme::secondary_text(),
        ))))
        .highlight_style(theme::highlight());

    let mut state = ListState::default();
    state.select(Some(picker.selected));
    frame.render_stateful_widget(list, body, &mut state);

    let hints = Paragraph::new(key_hint(area.width))
        .alignment(Alignment::Center)
        .block(theme::key_block());
    frame.render_widget(hints, footer);
}
