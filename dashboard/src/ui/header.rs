use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::theme::ColorScheme;

pub fn draw(frame: &mut Frame, area: Rect, backend_url: &str, colors: &ColorScheme) {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    let line = Line::from(vec![
        Span::styled(
            "Hostel Management System",
            Style::default().fg(colors.text_primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  \u{2502}  "),
        Span::styled("AI-assisted complaint analysis", Style::default().fg(colors.text_secondary)),
        Span::raw("  \u{2502}  "),
        Span::styled("Backend: ", Style::default().fg(colors.text_primary)),
        Span::styled(backend_url, Style::default().fg(colors.accent)),
        Span::raw("  \u{2502}  "),
        Span::styled(now, Style::default().fg(colors.text_secondary)),
    ]);

    let header = Paragraph::new(line)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Hostel Dashboard ")
                .border_style(Style::default().fg(colors.border_focused)),
        );

    frame.render_widget(header, area);
}
