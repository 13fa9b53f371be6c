pub mod forms;
pub mod header;
pub mod help;
pub mod list;
pub mod section;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;
use crate::model::Panel;
use theme::ColorScheme;

pub fn draw(frame: &mut Frame, app: &mut App, backend_url: &str, colors: &ColorScheme) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),        // header
            Constraint::Percentage(34),   // create student + students
            Constraint::Percentage(33),   // rooms + allocations
            Constraint::Min(10),          // visitors + complaints analyzer
            Constraint::Length(1),        // help bar
        ])
        .split(frame.area());

    header::draw(frame, outer[0], backend_url, colors);

    let grid: Vec<_> = outer[1..4]
        .iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row)
        })
        .collect();

    let focus = app.focus;
    forms::draw_create(frame, grid[0][0], &app.create_student, focus == Panel::CreateStudent, colors);
    list::draw(frame, grid[0][1], &mut app.students, focus == Panel::Students, colors);
    list::draw(frame, grid[1][0], &mut app.rooms, focus == Panel::Rooms, colors);
    list::draw(frame, grid[1][1], &mut app.allocations, focus == Panel::Allocations, colors);
    list::draw(frame, grid[2][0], &mut app.visitors, focus == Panel::Visitors, colors);
    forms::draw_complaint(frame, grid[2][1], &app.complaints, focus == Panel::Complaints, colors);

    help::draw(frame, outer[4], focus, colors);
}

#[cfg(test)]
pub mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use super::*;

    /// Flatten a rendered buffer into newline-separated rows.
    pub fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn dashboard_shows_every_section() {
        let mut app = App::new();
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal
            .draw(|frame| draw(frame, &mut app, "http://localhost:8000", &ColorScheme::dark()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        for title in [
            "Hostel Management System",
            "http://localhost:8000",
            "Create Student",
            "Students (0)",
            "Rooms (0)",
            "Allocations (0)",
            "Visitors (0)",
            "Complaints Analyzer",
            "Switch panel",
        ] {
            assert!(text.contains(title), "missing {title:?}");
        }
    }

    #[test]
    fn help_bar_follows_focus() {
        let mut app = App::new();
        app.focus = Panel::Rooms;
        let mut terminal = Terminal::new(TestBackend::new(160, 48)).unwrap();
        terminal
            .draw(|frame| draw(frame, &mut app, "http://localhost:8000", &ColorScheme::light()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Refresh"));
    }
}
