use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_primary: Color,
    pub bg_secondary: Color,

    pub text_primary: Color,
    pub text_muted: Color,

    pub accent_primary: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub status_info: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,

    pub tab_active_bg: Color,
    pub tab_inactive_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_secondary: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,

            tab_active_bg: tailwind::CYAN.c600,
            tab_inactive_bg: tailwind::SLATE.c800,
        }
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for key hints (e.g. "Enter" in "Enter add to cart")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::White)
                .bg(self.tab_active_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_muted).bg(self.tab_inactive_bg)
        }
    }

    pub fn cart_count(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.status_info)
    }
}
