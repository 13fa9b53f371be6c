use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Panel;
use super::theme::ColorScheme;

pub fn draw(frame: &mut Frame, area: Rect, focus: Panel, colors: &ColorScheme) {
    let key_style = Style::default()
        .fg(colors.accent)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(colors.text_secondary);
    let sep_style = Style::default().fg(colors.help_separator);

    let mut spans = vec![
        Span::styled(" Tab", key_style),
        Span::styled(" Switch panel ", desc_style),
        Span::styled("\u{2502}", sep_style),
    ];

    if focus.is_list() {
        spans.extend([
            Span::styled(" r", key_style),
            Span::styled(" Refresh ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" \u{2191}\u{2193}/jk", key_style),
            Span::styled(" Scroll ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" q/Esc", key_style),
            Span::styled(" Quit", desc_style),
        ]);
    } else {
        let submit = if focus == Panel::Complaints { " Analyze " } else { " Add " };
        spans.extend([
            Span::styled(" \u{2191}\u{2193}", key_style),
            Span::styled(" Field ", desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" Enter", key_style),
            Span::styled(submit, desc_style),
            Span::styled("\u{2502}", sep_style),
            Span::styled(" Esc", key_style),
            Span::styled(" Quit", desc_style),
        ]);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
