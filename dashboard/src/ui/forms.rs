use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::Draft;
use crate::views::complaint::ComplaintField;
use crate::views::{ComplaintAnalyzer, CreateForm};
use super::section;
use super::theme::ColorScheme;

/// One labeled input line; placeholders show when the value is empty.
fn input_line<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    active: bool,
    colors: &ColorScheme,
) -> Line<'a> {
    let marker = if active { "\u{25b8} " } else { "  " };
    let label_style = if active {
        Style::default().fg(colors.input_active).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text_secondary)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(colors.input_active)),
        Span::styled(format!("{:<12}", format!("{}:", label)), label_style),
    ];
    if value.is_empty() {
        spans.push(Span::styled(placeholder, Style::default().fg(colors.text_disabled)));
    } else {
        spans.push(Span::styled(value, Style::default().fg(colors.text_primary)));
    }
    if active {
        spans.push(Span::styled("\u{258f}", Style::default().fg(colors.input_active)));
    }
    Line::from(spans)
}

fn button_line<'a>(label: &'a str, colors: &ColorScheme) -> Line<'a> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(ratatui::style::Color::White)
                .bg(colors.button)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Style::default().fg(colors.text_disabled)),
    ])
}

pub fn draw_create<D: Draft>(
    frame: &mut Frame,
    area: Rect,
    form: &CreateForm<D>,
    focused: bool,
    colors: &ColorScheme,
) {
    let mut lines: Vec<Line> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, spec)| {
            input_line(
                spec.label,
                form.value(idx),
                spec.placeholder,
                focused && idx == form.active(),
                colors,
            )
        })
        .collect();
    lines.push(Line::raw(""));
    lines.push(button_line("Add", colors));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section::block(form.title().to_string(), focused, colors));
    frame.render_widget(paragraph, area);
}

pub fn draw_complaint(
    frame: &mut Frame,
    area: Rect,
    view: &ComplaintAnalyzer,
    focused: bool,
    colors: &ColorScheme,
) {
    let mut lines = vec![
        input_line(
            "Subject",
            &view.subject,
            "Subject",
            focused && view.active() == ComplaintField::Subject,
            colors,
        ),
        input_line(
            "Description",
            &view.description,
            "Describe the complaint",
            focused && view.active() == ComplaintField::Description,
            colors,
        ),
        Line::raw(""),
        button_line("Analyze", colors),
    ];

    let results = view.lines();
    if !results.is_empty() {
        lines.push(Line::raw(""));
    }
    for (label, value) in results {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", label), Style::default().fg(colors.text_primary)),
            Span::styled(
                value,
                Style::default().fg(colors.accent_result).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section::block("Complaints Analyzer".to_string(), focused, colors));
    frame.render_widget(paragraph, area);
}
