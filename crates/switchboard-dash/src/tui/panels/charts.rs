//! Chart grid: two line charts, two bar charts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::charts::{ChartSet, MonthlySeries};
use crate::kpi::format_thousands;
use crate::tui::Theme;

/// Line colors, cycled per channel.
const SERIES_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Magenta,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Red,
];

/// Panel rendering the four aggregate charts in a 2×2 grid.
#[derive(Debug, Default)]
pub struct ChartsPanel {
    charts: Option<ChartSet>,
}

impl ChartsPanel {
    /// Create an empty charts panel.
    pub const fn new() -> Self {
        Self { charts: None }
    }

    /// Replace the displayed chart series.
    pub fn update(&mut self, charts: ChartSet) {
        self.charts = Some(charts);
    }

    /// Render the 2×2 chart grid.
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(area);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[1]);

        let Some(charts) = &self.charts else {
            let placeholder = Paragraph::new("Loading...")
                .style(Style::default().fg(theme.warning))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(placeholder, area);
            return;
        };

        self.render_line(frame, top[0], "Monthly Volume by Channel", &charts.monthly_volume, theme);
        self.render_line(frame, top[1], "Monthly Total Cost by Channel", &charts.monthly_cost, theme);
        self.render_bar(frame, bottom[0], "Volume by Line of Business", &charts.volume_by_lob, theme);
        self.render_bar(frame, bottom[1], "Volume by Language", &charts.volume_by_language, theme);
    }

    fn render_line(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        title: &str,
        series: &MonthlySeries,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        if series.months.is_empty() {
            let empty = Paragraph::new("No data for current filters")
                .style(Style::default().fg(theme.warning))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let points: Vec<Vec<(f64, f64)>> = series
            .channels
            .iter()
            .map(|s| {
                s.points
                    .iter()
                    .map(|(idx, value)| (*idx as f64, *value))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset<'_>> = series
            .channels
            .iter()
            .zip(&points)
            .enumerate()
            .map(|(i, (s, data))| {
                Dataset::default()
                    .name(s.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
                    .data(data)
            })
            .collect();

        let max_x = (series.months.len().saturating_sub(1)).max(1) as f64;
        let max_y = series.max_value().max(1.0);

        let x_labels: Vec<String> = if series.months.len() == 1 {
            vec![series.months[0].clone()]
        } else {
            vec![
                series.months.first().cloned().unwrap_or_default(),
                series.months[series.months.len() / 2].clone(),
                series.months.last().cloned().unwrap_or_default(),
            ]
        };
        let y_labels: Vec<String> = vec![
            "0".to_string(),
            format_thousands((max_y / 2.0) as i64),
            format_thousands(max_y as i64),
        ];

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(theme.border))
                    .bounds([0.0, max_x])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(theme.border))
                    .bounds([0.0, max_y])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn render_bar(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        title: &str,
        totals: &[(String, f64)],
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border));

        if totals.is_empty() {
            let empty = Paragraph::new("No data for current filters")
                .style(Style::default().fg(theme.warning))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let data: Vec<(&str, u64)> = totals
            .iter()
            .map(|(label, value)| (label.as_str(), value.max(0.0).round() as u64))
            .collect();

        let bar_chart = BarChart::default()
            .block(block)
            .bar_width(9)
            .bar_gap(1)
            .bar_style(Style::default().fg(theme.primary))
            .value_style(Style::default().fg(theme.background).bg(theme.primary))
            .label_style(Style::default().fg(theme.foreground))
            .data(&data);

        frame.render_widget(bar_chart, area);
    }
}
