use chrono::{DateTime, Local};
use ratatui::widgets::TableState;
use tracing::warn;

use crate::client::{Backend, Reply, Request};
use crate::error::Result;
use crate::model::{Items, Record};

/// Table of records bound to one list endpoint.
///
/// Each successful load replaces the snapshot wholesale; rows are identified
/// by position only.
#[derive(Debug)]
pub struct ListView<R: Record> {
    items: Vec<R>,
    loaded_at: Option<DateTime<Local>>,
    pub table_state: TableState,
}

impl<R: Record> Default for ListView<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded_at: None,
            table_state: TableState::default(),
        }
    }
}

impl<R: Record> ListView<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &'static str {
        R::TITLE
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn request(&self) -> Request {
        Request::get(R::PATH)
    }

    /// Fetch and apply in one step on the calling thread.
    #[allow(dead_code)]
    pub fn load(&mut self, backend: &dyn Backend) -> Result<()> {
        self.apply(backend.send(&self.request()))
    }

    /// Apply the reply to a load request.
    ///
    /// Non-2xx replies and faults leave the current snapshot in place.
    pub fn apply(&mut self, reply: Result<Reply>) -> Result<()> {
        let reply = reply?;
        if !reply.is_success() {
            warn!(path = R::PATH, status = reply.status, "list load rejected");
            return Ok(());
        }
        let envelope: Items<R> = reply.json()?;
        self.items = envelope.into_rows();
        self.loaded_at = Some(Local::now());
        self.clamp_selection();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.items.iter().map(R::cells)
    }

    pub fn select_previous(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            self.table_state.select(Some(selected.saturating_sub(1)));
        } else if !self.items.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(selected) if selected + 1 < self.items.len() => selected + 1,
            Some(selected) => selected,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        match self.table_state.selected() {
            Some(_) if self.items.is_empty() => self.table_state.select(None),
            Some(selected) if selected >= self.items.len() => {
                self.table_state.select(Some(self.items.len() - 1))
            }
            _ => {}
        }
    }
}
