//! Styles used by the renderer.

use ratatui::style::{Color, Modifier, Style};

/// Every style the UI draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub header: Style,
    pub cursor: Style,
    pub normal: Style,
    pub size: Style,
    pub help: Style,
    pub error: Style,
    pub confirm: Style,
    pub mark: Style,
}

impl Theme {
    /// Pick the colored or plain theme.
    pub fn new(color: bool) -> Self {
        if color {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(3, 102, 214))
                .add_modifier(Modifier::BOLD),
            header: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(47, 54, 61))
                .add_modifier(Modifier::BOLD),
            cursor: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(46, 160, 67))
                .add_modifier(Modifier::BOLD),
            normal: Style::default().fg(Color::White),
            size: Style::default().fg(Color::Rgb(88, 166, 255)),
            help: Style::default().fg(Color::Rgb(139, 148, 158)),
            error: Style::default().fg(Color::Rgb(248, 81, 73)),
            confirm: Style::default().fg(Color::White).bg(Color::Rgb(218, 54, 51)),
            mark: Style::default().fg(Color::Red),
        }
    }

    /// No colors; cursor and banners still stand out through modifiers.
    pub fn plain() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            header: Style::default().add_modifier(Modifier::BOLD),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            normal: Style::default(),
            size: Style::default(),
            help: Style::default(),
            error: Style::default().add_modifier(Modifier::BOLD),
            confirm: Style::default().add_modifier(Modifier::REVERSED),
            mark: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
