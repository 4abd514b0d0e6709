//! Night-sky color palette and preset styles.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::GuidanceTone;

/// Sleepwise theme.
pub struct SleepTheme;

impl SleepTheme {
    /// Indigo - primary accent
    pub const PRIMARY: Color = Color::Rgb(99, 102, 241); // #6366F1

    /// Lighter indigo for focus and highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(165, 180, 252); // #A5B4FC

    /// Slate for borders
    pub const BORDER: Color = Color::Rgb(100, 116, 139); // #64748B

    pub const SUCCESS: Color = Color::Rgb(34, 197, 94); // #22C55E
    pub const WARNING: Color = Color::Rgb(234, 179, 8); // #EAB308
    pub const DANGER: Color = Color::Rgb(239, 68, 68); // #EF4444

    /// Bar color for the user's own sleep
    pub const SLEEP_BAR: Color = Color::Rgb(59, 130, 246); // #3B82F6

    /// Bar color for the recommended band
    pub const RECOMMENDED_BAR: Color = Color::Rgb(34, 197, 94); // #22C55E

    pub const TEXT_PRIMARY: Color = Color::Rgb(241, 245, 249); // #F1F5F9
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    /// Greyed-out control (e.g. disabled submit)
    pub const DISABLED: Color = Color::Rgb(71, 85, 105); // #475569

    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tagline() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn cursor() -> Style {
        Style::default().fg(Self::PRIMARY_LIGHT)
    }

    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Submit button, enabled or greyed out.
    #[must_use]
    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Self::TEXT_PRIMARY)
                .bg(Self::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Self::TEXT_MUTED).bg(Self::DISABLED)
        }
    }

    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Color for a guidance block.
    #[must_use]
    pub fn guidance(tone: GuidanceTone) -> Style {
        let color = match tone {
            GuidanceTone::Positive => Self::SUCCESS,
            GuidanceTone::Caution => Self::WARNING,
            GuidanceTone::Alert => Self::DANGER,
        };
        Style::default().fg(color)
    }
}
