use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use crate::client::worker::Completion;
use crate::client::Request;
use crate::error::Result;
use crate::model::{Allocation, Panel, Record, Room, Student, StudentDraft, Visitor};
use crate::views::{ComplaintAnalyzer, CreateForm, ListView};

/// What the event loop should do after a key press.
#[derive(Debug, PartialEq)]
pub enum Action {
    None,
    Quit,
    Send(Panel, Request),
}

pub struct App {
    pub focus: Panel,
    pub create_student: CreateForm<StudentDraft>,
    pub students: ListView<Student>,
    pub rooms: ListView<Room>,
    pub allocations: ListView<Allocation>,
    pub visitors: ListView<Visitor>,
    pub complaints: ComplaintAnalyzer,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            focus: Panel::CreateStudent,
            // Creating a student does not refresh the students list.
            create_student: CreateForm::new().on_created(|| {}),
            students: ListView::new(),
            rooms: ListView::new(),
            allocations: ListView::new(),
            visitors: ListView::new(),
            complaints: ComplaintAnalyzer::new(),
        }
    }

    /// Every list loads once when the dashboard first comes up.
    pub fn startup_requests(&self) -> Vec<(Panel, Request)> {
        [Panel::Students, Panel::Rooms, Panel::Allocations, Panel::Visitors]
            .into_iter()
            .filter_map(|panel| self.refresh_request(panel).map(|req| (panel, req)))
            .collect()
    }

    fn refresh_request(&self, panel: Panel) -> Option<Request> {
        match panel {
            Panel::Students => Some(self.students.request()),
            Panel::Rooms => Some(self.rooms.request()),
            Panel::Allocations => Some(self.allocations.request()),
            Panel::Visitors => Some(self.visitors.request()),
            Panel::CreateStudent | Panel::Complaints => None,
        }
    }

    /// Route a finished call to the panel that issued it.
    pub fn complete(&mut self, completion: Completion) -> Result<()> {
        let Completion { panel, reply } = completion;
        match panel {
            Panel::CreateStudent => self.create_student.apply(reply),
            Panel::Students => self.students.apply(reply),
            Panel::Rooms => self.rooms.apply(reply),
            Panel::Allocations => self.allocations.apply(reply),
            Panel::Visitors => self.visitors.apply(reply),
            Panel::Complaints => self.complaints.apply(reply),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return Action::None;
            }
            _ => {}
        }

        if self.focus.is_list() {
            self.handle_list_key(key)
        } else {
            self.handle_form_key(key)
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => match self.refresh_request(self.focus) {
                Some(request) => Action::Send(self.focus, request),
                None => Action::None,
            },
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll(false);
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll(true);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn scroll(&mut self, down: bool) {
        match self.focus {
            Panel::Students => step(&mut self.students, down),
            Panel::Rooms => step(&mut self.rooms, down),
            Panel::Allocations => step(&mut self.allocations, down),
            Panel::Visitors => step(&mut self.visitors, down),
            Panel::CreateStudent | Panel::Complaints => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        let panel = self.focus;
        let chorded = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        if chorded && matches!(key.code, KeyCode::Char(_)) {
            return Action::None;
        }
        match (panel, key.code) {
            (Panel::CreateStudent, KeyCode::Enter) => {
                self.send_or_log(panel, self.create_student.submit())
            }
            (Panel::CreateStudent, KeyCode::Down) => {
                self.create_student.next_field();
                Action::None
            }
            (Panel::CreateStudent, KeyCode::Up) => {
                self.create_student.previous_field();
                Action::None
            }
            (Panel::CreateStudent, KeyCode::Backspace) => {
                self.create_student.pop();
                Action::None
            }
            (Panel::CreateStudent, KeyCode::Char(c)) => {
                self.create_student.push(c);
                Action::None
            }
            (Panel::Complaints, KeyCode::Enter) => {
                self.send_or_log(panel, self.complaints.analyze())
            }
            (Panel::Complaints, KeyCode::Up | KeyCode::Down) => {
                self.complaints.toggle_field();
                Action::None
            }
            (Panel::Complaints, KeyCode::Backspace) => {
                self.complaints.pop();
                Action::None
            }
            (Panel::Complaints, KeyCode::Char(c)) => {
                self.complaints.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn send_or_log(&self, panel: Panel, request: Result<Request>) -> Action {
        match request {
            Ok(request) => Action::Send(panel, request),
            Err(err) => {
                warn!(?panel, error = %err, "could not build request");
                Action::None
            }
        }
    }
}

fn step<R: Record>(view: &mut ListView<R>, down: bool) {
    if down {
        view.select_next();
    } else {
        view.select_previous();
    }
}
