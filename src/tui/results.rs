/// Selection and scroll state for the results list.
///
/// Positions are indices into the current result set, not the catalog.
pub struct ResultsState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
    /// Number of records that fit on screen, updated on every draw
    pub visible_items: usize,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            selected: Some(0),
            scroll_offset: 0,
            visible_items: 10,
        }
    }
}

impl ResultsState {
    /// Reset after the result set changed
    pub fn reset(&mut self, total: usize) {
        self.selected = if total == 0 { None } else { Some(0) };
        self.scroll_offset = 0;
    }

    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1).min(total - 1),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_prev(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let i = match self.selected {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_down(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_items.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => (i + jump).min(total - 1),
            None => jump.min(total - 1),
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn page_up(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        let jump = self.visible_items.saturating_sub(1).max(1);
        let i = match self.selected {
            Some(i) => i.saturating_sub(jump),
            None => 0,
        };
        self.selected = Some(i);
        self.ensure_visible(i);
    }

    pub fn select_first(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(0);
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.selected = Some(total - 1);
        self.ensure_visible(total - 1);
    }

    /// Keep the selection on screen after a resize
    pub fn clamp(&mut self) {
        if let Some(i) = self.selected {
            self.ensure_visible(i);
        }
    }

    fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_items > 0 && index >= self.scroll_offset + self.visible_items {
            self.scroll_offset = index + 1 - self.visible_items;
        }
    }
}
