use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use super::theme::ColorScheme;

/// Bordered, titled frame shared by every panel.
pub fn block<'a>(title: String, focused: bool, colors: &ColorScheme) -> Block<'a> {
    let border_color = if focused { colors.border_focused } else { colors.border_normal };
    let title_style = if focused {
        Style::default().fg(colors.text_primary).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text_secondary)
    };

    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(title_style)
        .border_style(Style::default().fg(border_color))
}
