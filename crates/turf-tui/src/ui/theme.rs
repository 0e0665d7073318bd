// The turf color scheme in both display modes. Every view takes a &Palette
// so day/night is decided in exactly one place.

use ratatui::style::{Color, Modifier, Style};
use turf_core::DisplayMode;

pub const TURF_WHITE: Color = Color::Rgb(244, 241, 234);
pub const TURF_BLACK: Color = Color::Rgb(18, 18, 16);
pub const TURF_YELLOW: Color = Color::Rgb(227, 255, 77);
pub const TURF_RED: Color = Color::Rgb(235, 77, 52);
pub const TURF_PURPLE: Color = Color::Rgb(157, 125, 250);

/// Resolved colors for the current display mode.
pub struct Palette {
    pub bg: Color,
    /// Card rows and input fields, a small lift from `bg`.
    pub bg_card: Color,
    pub bg_selected: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    /// Secondary accent used for counts and badges.
    pub accent_alt: Color,
    pub border: Color,
}

impl Palette {
    pub fn day() -> Self {
        Palette {
            bg: TURF_WHITE,
            bg_card: Color::Rgb(252, 250, 246),
            bg_selected: Color::Rgb(232, 228, 216),
            text: TURF_BLACK,
            text_muted: Color::Rgb(110, 108, 100),
            accent: TURF_RED,
            accent_alt: Color::Rgb(150, 130, 20),
            border: TURF_BLACK,
        }
    }

    pub fn night() -> Self {
        Palette {
            bg: TURF_BLACK,
            bg_card: Color::Rgb(30, 30, 28),
            bg_selected: Color::Rgb(48, 48, 44),
            text: Color::Rgb(230, 228, 220),
            text_muted: Color::Rgb(140, 138, 130),
            accent: TURF_YELLOW,
            accent_alt: TURF_PURPLE,
            border: Color::Rgb(90, 90, 84),
        }
    }

    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Day => Self::day(),
            DisplayMode::Night => Self::night(),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.bg_selected)
            .add_modifier(Modifier::BOLD)
    }
}
