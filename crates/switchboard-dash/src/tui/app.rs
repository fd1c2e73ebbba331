//! Main TUI application and event loop.
//!
//! The loop is synchronous by design: every interaction is a full
//! filter → aggregate → chart recomputation over the in-memory frame,
//! there is no background work to wait on.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use polars::prelude::DataFrame;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::charts::chart_set;
use crate::filter::FilterState;
use crate::kpi::compute_kpis;
use crate::tui::{
    DashConfig,
    events::KeyAction,
    panels::{ChartsPanel, FilterPanel, KpiPanel, PanelFocus},
};

/// The dashboard application.
pub struct DashApp {
    /// Combined frame, immutable after construction.
    combined: DataFrame,
    config: DashConfig,
    focus: PanelFocus,
    filters: FilterPanel,
    kpis: KpiPanel,
    charts: ChartsPanel,
    should_quit: bool,
    show_help: bool,
}

impl std::fmt::Debug for DashApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashApp")
            .field("rows", &self.combined.height())
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl DashApp {
    /// Create the application over a combined frame and run the
    /// initial aggregation.
    pub fn new(combined: DataFrame, config: DashConfig) -> Result<Self> {
        let filters = FilterPanel::new(FilterState::from_frame(&combined)?);
        let mut app = Self {
            combined,
            config,
            focus: PanelFocus::default(),
            filters,
            kpis: KpiPanel::new(),
            charts: ChartsPanel::new(),
            should_quit: false,
            show_help: false,
        };
        app.recompute()?;
        Ok(app)
    }

    /// Recompute the filtered frame, the KPIs and all chart series.
    fn recompute(&mut self) -> Result<()> {
        let filtered = self.filters.state().apply(&self.combined)?;
        self.kpis.update(compute_kpis(&filtered)?, filtered.height());
        self.charts.update(chart_set(&filtered)?);
        Ok(())
    }

    /// Run the dashboard until the user quits.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let tick = Duration::from_millis(self.config.tick_rate_ms);
        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_action(KeyAction::from_key_event(&key))?;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Dispatch one key action.
    fn handle_action(&mut self, action: KeyAction) -> Result<()> {
        // Any key closes the help overlay.
        if self.show_help {
            self.show_help = false;
            return Ok(());
        }

        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Help => self.show_help = true,
            KeyAction::NextPanel => self.focus = self.focus.next(),
            KeyAction::PrevPanel => self.focus = self.focus.prev(),
            other => {
                if self.filters.handle_action(other, self.focus) {
                    self.recompute()?;
                }
            }
        }
        Ok(())
    }

    /// Render the full dashboard.
    fn render(&self, frame: &mut Frame<'_>) {
        let size = frame.area();

        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(10), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(40)])
            .split(body[0]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(10)])
            .split(columns[1]);

        self.filters
            .render(frame, columns[0], self.focus, &self.config.theme);
        self.kpis.render(frame, main[0], &self.config.theme);
        self.charts.render(frame, main[1], &self.config.theme);
        self.render_status_bar(frame, body[1]);

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = &self.config.theme;
        let focus_name = match self.focus {
            PanelFocus::Channels => "Channel",
            PanelFocus::Lobs => "Line of Business",
            PanelFocus::Languages => "Language",
        };

        let status_text = Line::from(vec![
            Span::styled(
                " Volume & Cost ",
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("Filter: {focus_name}"),
                Style::default().fg(theme.foreground),
            ),
            Span::raw(" | "),
            Span::styled("Tab: next filter", Style::default().fg(theme.border)),
            Span::raw(" | "),
            Span::styled("Space: toggle", Style::default().fg(theme.border)),
            Span::raw(" | "),
            Span::styled("?: help", Style::default().fg(theme.border)),
            Span::raw(" | "),
            Span::styled("q: quit", Style::default().fg(theme.border)),
        ]);

        let status_widget =
            Paragraph::new(status_text).style(Style::default().bg(theme.secondary));
        frame.render_widget(status_widget, area);
    }

    fn render_help_overlay(&self, frame: &mut Frame<'_>, area: Rect) {
        let theme = &self.config.theme;
        let overlay_width = 48.min(area.width.saturating_sub(4));
        let overlay_height = 15.min(area.height.saturating_sub(4));
        let x = (area.width.saturating_sub(overlay_width)) / 2;
        let y = (area.height.saturating_sub(overlay_height)) / 2;

        let overlay_area = Rect {
            x,
            y,
            width: overlay_width,
            height: overlay_height,
        };

        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        let help_text = vec![
            "",
            "  Navigation:",
            "    Tab / Shift+Tab  Switch filter dimension",
            "    Up / Down, k / j Move within the list",
            "",
            "  Selection:",
            "    Space / Enter    Toggle option",
            "    a / n            Select all / none",
            "    r                Reset all filters",
            "",
            "  General:",
            "    ?                Toggle this help",
            "    q / Esc          Quit",
            "",
            "  Press any key to close",
        ];

        let paragraph = Paragraph::new(help_text.join("\n"))
            .block(block)
            .style(Style::default().fg(theme.foreground));

        frame.render_widget(paragraph, overlay_area);
    }
}

/// Launch the dashboard over a combined frame.
pub fn launch(combined: DataFrame) -> Result<()> {
    let mut app = DashApp::new(combined, DashConfig::default())?;
    app.run()
}
