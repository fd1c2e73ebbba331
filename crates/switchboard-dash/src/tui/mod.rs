//! Terminal dashboard for the Switchboard volume & cost data.
//!
//! Layout:
//! ```text
//! ┌──────────────┬───────────────────────────────────────┐
//! │ FILTERS      │ Total Volume │ Avg CPC │ Total Cost   │
//! │              ├───────────────────────────────────────┤
//! │ Channel      │  Monthly Volume   │  Monthly Cost     │
//! │ [x] Chat     │  (line/channel)   │  (line/channel)   │
//! │ [x] Phone    ├───────────────────────────────────────┤
//! │ LOB          │  Volume by LOB    │  Volume by Lang   │
//! │ Language     │  (bar, desc)      │  (bar, desc)      │
//! └──────────────┴───────────────────────────────────────┘
//! ```
//!
//! Every filter change triggers a full recomputation of the filtered
//! frame, the KPIs and all four chart series.

pub mod app;
pub mod events;
pub mod panels;

pub use app::{DashApp, launch};
pub use events::KeyAction;
pub use panels::{ChartsPanel, FilterPanel, KpiPanel, PanelFocus};

/// TUI configuration.
#[derive(Debug, Clone)]
pub struct DashConfig {
    /// Poll interval for terminal events in milliseconds.
    pub tick_rate_ms: u64,
    /// Color theme.
    pub theme: Theme,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            theme: Theme::default(),
        }
    }
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent color
    pub primary: ratatui::style::Color,
    /// Secondary accent color
    pub secondary: ratatui::style::Color,
    /// Warning color
    pub warning: ratatui::style::Color,
    /// Background color
    pub background: ratatui::style::Color,
    /// Foreground/text color
    pub foreground: ratatui::style::Color,
    /// Border color
    pub border: ratatui::style::Color,
    /// Highlight/selection color
    pub highlight: ratatui::style::Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        use ratatui::style::Color;
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            warning: Color::Yellow,
            background: Color::Reset,
            foreground: Color::White,
            border: Color::DarkGray,
            highlight: Color::LightCyan,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        use ratatui::style::Color;
        Self {
            primary: Color::Blue,
            secondary: Color::Cyan,
            warning: Color::Yellow,
            background: Color::White,
            foreground: Color::Black,
            border: Color::Gray,
            highlight: Color::LightBlue,
        }
    }

    /// Create theme from name
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}
