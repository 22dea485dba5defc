use crossterm::event::KeyEvent;

use crate::keymap;

/// Highlight position over a fixed, non-empty list of rows.
#[derive(Debug, Clone)]
pub(crate) struct PickerState<T> {
    pub(crate) items: Vec<T>,
    pub(crate) selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PickerAction {
    Continue,
    Pick(usize),
    Cancel,
}

impl<T> PickerState<T> {
    pub(crate) fn from_items(items: Vec<T>) -> Self {
        Self { items, selected: 0 }
    }

    pub(crate) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(crate) fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub(crate) fn on_key(&mut self, key: KeyEvent) -> PickerAction {
        if keymap::is_back(key) || keymap::is_ctrl_c(key) {
            return PickerAction::Cancel;
        }

        if keymap::is_up(key) {
            self.move_up();
        } else if keymap::is_down(key) {
            self.move_down();
        } else if keymap::is_confirm(key) && self.selected < self.items.len() {
            return PickerAction::Pick(self.selected);
        }

        PickerAction::Continue
    }
}
