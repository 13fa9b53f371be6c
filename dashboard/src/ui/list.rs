use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};

use crate::model::Record;
use crate::views::ListView;
use super::section;
use super::theme::ColorScheme;

pub fn draw<R: Record>(
    frame: &mut Frame,
    area: Rect,
    view: &mut ListView<R>,
    focused: bool,
    colors: &ColorScheme,
) {
    let header = Row::new(view.columns().iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(colors.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = view
        .rows()
        .enumerate()
        .map(|(idx, cells)| {
            let style = if idx % 2 == 1 {
                Style::default().fg(colors.text_primary).bg(colors.row_alt_bg)
            } else {
                Style::default().fg(colors.text_primary)
            };
            Row::new(cells.into_iter().map(Cell::from)).style(style)
        })
        .collect();

    let loaded = view
        .loaded_at()
        .map(|t| format!(" \u{00b7} {}", t.format("%H:%M:%S")))
        .unwrap_or_default();
    let title = format!("{} ({}){}", view.title(), view.len(), loaded);

    let widths = vec![Constraint::Fill(1); view.columns().len()];
    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Style::default().bg(colors.row_selected_bg))
        .block(section::block(title, focused, colors));

    frame.render_stateful_widget(table, area, &mut view.table_state);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::client::stub::StubBackend;
    use crate::model::{Allocation, Student};
    use crate::ui::tests::buffer_text;

    #[test]
    fn renders_column_headers_and_rows() {
        let backend = StubBackend::new().reply(
            "/api/students",
            200,
            r#"{"items":[{"roll_no":"21CS001","name":"Asha","email":"a@h.edu"},{"roll_no":"21CS002","name":"Ravi"}]}"#,
        );
        let mut view = ListView::<Student>::new();
        view.load(&backend).unwrap();

        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), &mut view, true, &ColorScheme::dark()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Students (2)"));
        assert!(text.contains("roll_no"));
        assert!(text.contains("email"));
        assert!(text.contains("21CS001"));
        assert!(text.contains("Asha"));
        assert!(text.contains("Ravi"));
    }

    #[test]
    fn empty_view_renders_only_headers() {
        let mut view = ListView::<Allocation>::new();
        let mut terminal = Terminal::new(TestBackend::new(100, 6)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), &mut view, false, &ColorScheme::light()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Allocations (0)"));
        assert!(text.contains("student_roll_no"));
        assert!(text.contains("status"));
    }
}
