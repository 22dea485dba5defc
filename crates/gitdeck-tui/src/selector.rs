use anyhow::{Context, Result, bail};
use crossterm::event::{self, Event, KeyEventKind};
use gitdeck_app::{ListSelector, Selection};

use crate::TerminalSession;
use crate::picker::{PickerAction, PickerState};
use crate::ui::list_view::render_picker;

/// Full-screen list selector. The terminal is taken over for the duration of
/// one `select` call and handed back before it returns.
#[derive(Debug, Default)]
pub struct TerminalListSelector;

impl TerminalListSelector {
    pub fn new() -> Self {
        Self
    }
}

impl ListSelector for TerminalListSelector {
    fn select(&mut self, title: &str, items: &[String]) -> Result<Selection> {
        if items.is_empty() {
            bail!("selector invoked with an empty list ({title})");
        }

        let mut session = TerminalSession::enter()?;
        let mut picker = PickerState::from_items(items.to_vec());
        run_picker(
            &mut picker,
            |picker| session.draw(|frame| render_picker(frame, title, picker)),
            || event::read().context("failed to read terminal event"),
        )
    }
}

/// Renders, then blocks for the next event, until a row is picked or the
/// selection is canceled. Resize events only trigger the next render.
pub(crate) fn run_picker<T, Draw, Read>(
    picker: &mut PickerState<T>,
    mut draw: Draw,
    mut read: Read,
) -> Result<Selection>
where
    Draw: FnMut(&PickerState<T>) -> Result<()>,
    Read: FnMut() -> Result<Event>,
{
    loop {
        draw(picker)?;

        let key = match read()? {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press) => key,
            _ => continue,
        };

        match picker.on_key(key) {
            PickerAction::Continue => {}
            PickerAction::Pick(index) => return Ok(Selection::Picked(index)),
            PickerAction::Cancel => return Ok(Selection::Canceled),
        }
    }
}
