//! Filter sidebar: three multi-select lists.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::filter::{FilterDimension, FilterState};
use crate::tui::{Theme, events::KeyAction, panels::PanelFocus};

/// Sidebar panel owning the filter state and list cursors.
#[derive(Debug)]
pub struct FilterPanel {
    state: FilterState,
    cursors: [usize; 3],
    offsets: [usize; 3],
}

impl FilterPanel {
    /// Create a panel over the given filter state.
    pub const fn new(state: FilterState) -> Self {
        Self {
            state,
            cursors: [0; 3],
            offsets: [0; 3],
        }
    }

    /// The current filter state.
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    const fn dim_index(focus: PanelFocus) -> usize {
        match focus {
            PanelFocus::Channels => 0,
            PanelFocus::Lobs => 1,
            PanelFocus::Languages => 2,
        }
    }

    fn dimension_mut(&mut self, focus: PanelFocus) -> &mut FilterDimension {
        match focus {
            PanelFocus::Channels => &mut self.state.channels,
            PanelFocus::Lobs => &mut self.state.lobs,
            PanelFocus::Languages => &mut self.state.languages,
        }
    }

    const fn dimension(&self, focus: PanelFocus) -> &FilterDimension {
        match focus {
            PanelFocus::Channels => &self.state.channels,
            PanelFocus::Lobs => &self.state.lobs,
            PanelFocus::Languages => &self.state.languages,
        }
    }

    /// Handle a key action against the focused dimension.
    ///
    /// Returns `true` when the selection changed and the downstream
    /// aggregates must be recomputed.
    pub fn handle_action(&mut self, action: KeyAction, focus: PanelFocus) -> bool {
        let idx = Self::dim_index(focus);
        let len = self.dimension(focus).len();

        match action {
            KeyAction::Up => {
                if self.cursors[idx] > 0 {
                    self.cursors[idx] -= 1;
                    if self.cursors[idx] < self.offsets[idx] {
                        self.offsets[idx] = self.cursors[idx];
                    }
                }
                false
            }
            KeyAction::Down => {
                if self.cursors[idx] + 1 < len {
                    self.cursors[idx] += 1;
                }
                false
            }
            KeyAction::Toggle => {
                let cursor = self.cursors[idx];
                if cursor < len {
                    self.dimension_mut(focus).toggle(cursor);
                    return true;
                }
                false
            }
            KeyAction::SelectAll => {
                self.dimension_mut(focus).select_all();
                true
            }
            KeyAction::SelectNone => {
                self.dimension_mut(focus).select_none();
                true
            }
            KeyAction::Reset => {
                self.state.channels.select_all();
                self.state.lobs.select_all();
                self.state.languages.select_all();
                true
            }
            _ => false,
        }
    }

    /// Render the three filter lists.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, focus: PanelFocus, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        self.render_dimension(frame, chunks[0], PanelFocus::Channels, "Channel", focus, theme);
        self.render_dimension(frame, chunks[1], PanelFocus::Lobs, "Line of Business", focus, theme);
        self.render_dimension(frame, chunks[2], PanelFocus::Languages, "Language", focus, theme);
    }

    fn render_dimension(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        which: PanelFocus,
        label: &str,
        focus: PanelFocus,
        theme: &Theme,
    ) {
        let focused = focus == which;
        let idx = Self::dim_index(which);
        let dim = self.dimension(which);

        let selected_count = dim.selected_values().len();
        let border_color = if focused { theme.highlight } else { theme.border };
        let block = Block::default()
            .title(format!(" {label} ({selected_count}/{}) ", dim.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        if dim.is_empty() {
            let empty = Paragraph::new("No values")
                .style(Style::default().fg(theme.warning))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // Keep the cursor inside the visible window.
        let visible = area.height.saturating_sub(2) as usize;
        let mut offset = self.offsets[idx];
        let cursor = self.cursors[idx];
        if visible > 0 && cursor >= offset + visible {
            offset = cursor + 1 - visible;
        }

        let items: Vec<ListItem<'_>> = dim
            .options()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible.max(1))
            .map(|(i, option)| {
                let marker = if dim.is_selected(i) { "[x]" } else { "[ ]" };
                let style = if focused && i == cursor {
                    Style::default()
                        .fg(theme.foreground)
                        .bg(theme.secondary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.foreground)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{marker} "), Style::default().fg(theme.primary)),
                    Span::styled(option.clone(), style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::combined_fixture;

    fn panel() -> FilterPanel {
        FilterPanel::new(FilterState::from_frame(&combined_fixture()).unwrap())
    }

    #[test]
    fn test_toggle_marks_dirty() {
        let mut panel = panel();
        assert!(!panel.handle_action(KeyAction::Down, PanelFocus::Channels));
        assert!(panel.handle_action(KeyAction::Toggle, PanelFocus::Channels));
        assert!(!panel.state().channels.is_selected(1));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut panel = panel();
        for _ in 0..20 {
            panel.handle_action(KeyAction::Down, PanelFocus::Languages);
        }
        // Two language options in the fixture.
        assert!(panel.handle_action(KeyAction::Toggle, PanelFocus::Languages));
        assert!(!panel.state().languages.is_selected(1));
    }

    #[test]
    fn test_reset_selects_everything() {
        let mut panel = panel();
        panel.handle_action(KeyAction::SelectNone, PanelFocus::Channels);
        assert!(!panel.state().channels.all_selected());
        assert!(panel.handle_action(KeyAction::Reset, PanelFocus::Channels));
        assert!(panel.state().channels.all_selected());
        assert!(panel.state().lobs.all_selected());
    }
}
