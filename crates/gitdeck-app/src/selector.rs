use std::collections::VecDeque;

use anyhow::{Result, anyhow, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Picked(usize),
    Canceled,
}

/// Picks one entry of a non-empty, ordered list.
pub trait ListSelector {
    fn select(&mut self, title: &str, items: &[String]) -> Result<Selection>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ScriptedSelector {
    selections: VecDeque<Selection>,
    shown: Vec<Shown>,
}

impl ScriptedSelector {
    pub fn new(selections: Vec<Selection>) -> Self {
        Self {
            selections: selections.into(),
            shown: Vec::new(),
        }
    }

    pub fn shown(&self) -> &[Shown] {
        &self.shown
    }
}

impl ListSelector for ScriptedSelector {
    fn select(&mut self, title: &str, items: &[String]) -> Result<Selection> {
        if items.is_empty() {
            bail!("selector invoked with an empty list ({title})");
        }

        self.shown.push(Shown {
            title: title.to_string(),
            items: items.to_vec(),
        });

        self.selections
            .pop_front()
            .ok_or_else(|| anyhow!("selection queue is empty ({title})"))
    }
}
