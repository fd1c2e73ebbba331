//! KPI strip: the three headline metrics.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::kpi::Kpis;
use crate::tui::Theme;

/// Panel showing Total Volume, Avg Cost per Contact and Total Cost.
#[derive(Debug, Default)]
pub struct KpiPanel {
    kpis: Option<Kpis>,
    row_count: usize,
}

impl KpiPanel {
    /// Create an empty KPI panel.
    pub const fn new() -> Self {
        Self {
            kpis: None,
            row_count: 0,
        }
    }

    /// Replace the displayed metrics.
    pub fn update(&mut self, kpis: Kpis, row_count: usize) {
        self.kpis = Some(kpis);
        self.row_count = row_count;
    }

    /// Render the three metric boxes.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let (volume, avg, total) = match &self.kpis {
            Some(k) => (
                k.total_volume_display(),
                k.avg_cost_display(),
                k.total_cost_display(),
            ),
            None => ("-".to_string(), "-".to_string(), "-".to_string()),
        };

        self.render_metric(frame, chunks[0], "Total Volume", &volume, theme);
        self.render_metric(frame, chunks[1], "Avg Cost per Contact", &avg, theme);
        self.render_metric(frame, chunks[2], "Total Cost", &total, theme);
    }

    fn render_metric(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        label: &str,
        value: &str,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        let lines = vec![
            Line::from(Span::styled(
                value.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} rows", self.row_count),
                Style::default().fg(theme.border),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}
