//! Semantic style builders.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use sacco_app::notifications::NotificationLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn error_text() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

/// "Black on Cyan" for the focused row or menu entry
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Highlighted but not focused
pub fn unfocused_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Inputs ---
pub fn input(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::INPUT_ACTIVE_BG)
    } else {
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .bg(palette::INPUT_BG)
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            palette::BORDER_ACTIVE
        } else {
            palette::BORDER_DIM
        }))
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(title_style())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_ACTIVE))
        .style(Style::default().bg(palette::POPUP_BG))
}

fn title_style() -> Style {
    accent_bold()
}

/// Icon and style of a toast.
pub fn notification(level: NotificationLevel) -> (&'static str, Style) {
    match level {
        NotificationLevel::Success => ("✔", Style::default().fg(palette::STATUS_GREEN)),
        NotificationLevel::Error => ("✖", Style::default().fg(palette::STATUS_RED)),
        NotificationLevel::Info => ("ℹ", Style::default().fg(palette::STATUS_BLUE)),
    }
}
