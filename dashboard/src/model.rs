use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stringify a record value for display.
///
/// Absent and null values render empty, strings render without quotes,
/// anything else renders as its JSON text.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// A backend-owned row shown in a list view.
pub trait Record: DeserializeOwned {
    /// Section title.
    const TITLE: &'static str;
    /// List endpoint, relative to the backend base address.
    const PATH: &'static str;
    /// Ordered column keys.
    const COLUMNS: &'static [&'static str];

    fn field(&self, column: &str) -> Option<&Value>;

    fn cells(&self) -> Vec<String> {
        Self::COLUMNS
            .iter()
            .map(|column| display_value(self.field(column)))
            .collect()
    }
}

// --- Dashboard panels ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Panel {
    CreateStudent,
    Students,
    Rooms,
    Allocations,
    Visitors,
    Complaints,
}

impl Panel {
    /// Tab order, matching the on-screen grid read row by row.
    pub const ALL: [Panel; 6] = [
        Panel::CreateStudent,
        Panel::Students,
        Panel::Rooms,
        Panel::Allocations,
        Panel::Visitors,
        Panel::Complaints,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            Panel::Students | Panel::Rooms | Panel::Allocations | Panel::Visitors
        )
    }
}

// --- GET list responses ---

#[derive(Deserialize, Debug)]
#[serde(bound = "R: DeserializeOwned")]
pub struct Items<R> {
    #[serde(default)]
    pub items: Option<Vec<R>>,
}

impl<R> Items<R> {
    /// Rows of the envelope; a missing or null `items` is empty.
    pub fn into_rows(self) -> Vec<R> {
        self.items.unwrap_or_default()
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Student {
    #[serde(default)]
    pub roll_no: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl Record for Student {
    const TITLE: &'static str = "Students";
    const PATH: &'static str = "/api/students";
    const COLUMNS: &'static [&'static str] = &["roll_no", "name", "email"];

    fn field(&self, column: &str) -> Option<&Value> {
        match column {
            "roll_no" => self.roll_no.as_ref(),
            "name" => self.name.as_ref(),
            "email" => self.email.as_ref(),
            _ => None,
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Room {
    #[serde(default)]
    pub number: Option<Value>,
    #[serde(default)]
    pub capacity: Option<Value>,
    #[serde(default)]
    pub floor: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
}

impl Record for Room {
    const TITLE: &'static str = "Rooms";
    const PATH: &'static str = "/api/rooms";
    const COLUMNS: &'static [&'static str] = &["number", "capacity", "floor", "type"];

    fn field(&self, column: &str) -> Option<&Value> {
        match column {
            "number" => self.number.as_ref(),
            "capacity" => self.capacity.as_ref(),
            "floor" => self.floor.as_ref(),
            "type" => self.kind.as_ref(),
            _ => None,
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Allocation {
    #[serde(default)]
    pub student_roll_no: Option<Value>,
    #[serde(default)]
    pub room_number: Option<Value>,
    #[serde(default)]
    pub start_date: Option<Value>,
    #[serde(default)]
    pub end_date: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

impl Record for Allocation {
    const TITLE: &'static str = "Allocations";
    const PATH: &'static str = "/api/allocations";
    const COLUMNS: &'static [&'static str] =
        &["student_roll_no", "room_number", "start_date", "end_date", "status"];

    fn field(&self, column: &str) -> Option<&Value> {
        match column {
            "student_roll_no" => self.student_roll_no.as_ref(),
            "room_number" => self.room_number.as_ref(),
            "start_date" => self.start_date.as_ref(),
            "end_date" => self.end_date.as_ref(),
            "status" => self.status.as_ref(),
            _ => None,
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Visitor {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub visiting_student_roll_no: Option<Value>,
    #[serde(default)]
    pub purpose: Option<Value>,
    #[serde(default)]
    pub in_time: Option<Value>,
    #[serde(default)]
    pub out_time: Option<Value>,
}

impl Record for Visitor {
    const TITLE: &'static str = "Visitors";
    const PATH: &'static str = "/api/visitors";
    const COLUMNS: &'static [&'static str] =
        &["name", "visiting_student_roll_no", "purpose", "in_time", "out_time"];

    fn field(&self, column: &str) -> Option<&Value> {
        match column {
            "name" => self.name.as_ref(),
            "visiting_student_roll_no" => self.visiting_student_roll_no.as_ref(),
            "purpose" => self.purpose.as_ref(),
            "in_time" => self.in_time.as_ref(),
            "out_time" => self.out_time.as_ref(),
            _ => None,
        }
    }
}

// --- POST bodies ---

/// A labeled text input of a create form.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// In-progress field values of a create form.
pub trait Draft: Serialize + Default {
    const TITLE: &'static str;
    const PATH: &'static str;
    const FIELDS: &'static [FieldSpec];

    fn value(&self, index: usize) -> &str;
    fn value_mut(&mut self, index: usize) -> &mut String;
}

#[derive(Serialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct StudentDraft {
    pub roll_no: String,
    pub name: String,
    pub email: String,
}

impl Draft for StudentDraft {
    const TITLE: &'static str = "Create Student";
    const PATH: &'static str = "/api/students";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { label: "Roll No", placeholder: "Roll No" },
        FieldSpec { label: "Name", placeholder: "Name" },
        FieldSpec { label: "Email", placeholder: "Email" },
    ];

    fn value(&self, index: usize) -> &str {
        match index {
            0 => &self.roll_no,
            1 => &self.name,
            _ => &self.email,
        }
    }

    fn value_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.roll_no,
            1 => &mut self.name,
            _ => &mut self.email,
        }
    }
}

#[derive(Serialize, Clone, Default, Debug)]
pub struct ComplaintRequest {
    pub subject: String,
    pub description: String,
}

// --- /api/complaints/analyze response ---

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Analysis {
    #[serde(default)]
    pub sentiment: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub severity: Option<Value>,
}

impl Analysis {
    pub fn sentiment_text(&self) -> String {
        display_value(self.sentiment.as_ref())
    }

    /// Category falls back to `n/a` for any falsy value: absent, null,
    /// `""`, `false` or `0`.
    pub fn category_text(&self) -> String {
        let falsy = match &self.category {
            None | Some(Value::Null) | Some(Value::Bool(false)) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(_) => false,
        };
        if falsy {
            "n/a".to_string()
        } else {
            display_value(self.category.as_ref())
        }
    }

    pub fn severity_text(&self) -> String {
        display_value(self.severity.as_ref())
    }
}
