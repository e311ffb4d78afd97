use ratatui::widgets::TableState;
use roster_types::CollaboratorId;

/// Selection and pending-removal state of the roster table.
#[derive(Debug, Default)]
pub struct RosterTableState {
    table: TableState,
    pending_removal: Option<CollaboratorId>,
}

impl RosterTableState {
    pub fn table_state(&mut self) -> &mut TableState {
        &mut self.table
    }

    pub fn selected(&self) -> Option<usize> {
        self.table.selected()
    }

    /// Keeps the selection inside `0..len`, selecting the first row when
    /// rows appear and clearing it when the roster empties.
    pub fn clamp(&mut self, len: usize) {
        match (self.table.selected(), len) {
            (_, 0) => self.table.select(None),
            (None, _) => self.table.select(Some(0)),
            (Some(index), len) if index >= len => self.table.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.table.selected().map_or(0, |index| (index + 1).min(len - 1));
        self.table.select(Some(next));
    }

    pub fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = self.table.selected().map_or(0, |index| index.saturating_sub(1));
        self.table.select(Some(prev));
    }

    pub fn pending_removal(&self) -> Option<&CollaboratorId> {
        self.pending_removal.as_ref()
    }

    pub fn request_removal(&mut self, id: CollaboratorId) {
        self.pending_removal = Some(id);
    }

    pub fn take_pending_removal(&mut self) -> Option<CollaboratorId> {
        self.pending_removal.take()
    }

    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = RosterTableState::default();
        state.clamp(3);
        assert_eq!(state.selected(), Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected(), Some(2));
        state.clamp(2);
        assert_eq!(state.selected(), Some(1));
        state.clamp(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn removal_is_confirmed_once() {
        let mut state = RosterTableState::default();
        state.request_removal(CollaboratorId::from("a"));
        assert_eq!(state.take_pending_removal(), Some(CollaboratorId::from("a")));
        assert_eq!(state.take_pending_removal(), None);
    }
}
