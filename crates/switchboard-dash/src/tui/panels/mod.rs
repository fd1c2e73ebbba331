//! Dashboard panels: filter sidebar, KPI strip, chart grid.

mod charts;
mod filters;
mod kpis;

pub use charts::ChartsPanel;
pub use filters::FilterPanel;
pub use kpis::KpiPanel;

/// Which filter dimension holds the keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    /// Channel list
    #[default]
    Channels,
    /// Line-of-business list
    Lobs,
    /// Language list
    Languages,
}

impl PanelFocus {
    /// Get the next dimension in the cycle.
    pub const fn next(&self) -> Self {
        match self {
            Self::Channels => Self::Lobs,
            Self::Lobs => Self::Languages,
            Self::Languages => Self::Channels,
        }
    }

    /// Get the previous dimension in the cycle.
    pub const fn prev(&self) -> Self {
        match self {
            Self::Channels => Self::Languages,
            Self::Lobs => Self::Channels,
            Self::Languages => Self::Lobs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle() {
        let mut focus = PanelFocus::default();
        assert_eq!(focus, PanelFocus::Channels);
        focus = focus.next();
        assert_eq!(focus, PanelFocus::Lobs);
        focus = focus.next();
        focus = focus.next();
        assert_eq!(focus, PanelFocus::Channels);
        assert_eq!(focus.prev(), PanelFocus::Languages);
    }
}
