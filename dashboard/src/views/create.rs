use tracing::{info, warn};

use crate::client::{Backend, Reply, Request};
use crate::error::Result;
use crate::model::{Draft, FieldSpec};

/// Labeled text inputs submitted as one JSON body to a create endpoint.
pub struct CreateForm<D: Draft> {
    draft: D,
    active: usize,
    on_created: Option<Box<dyn FnMut()>>,
}

impl<D: Draft> Default for CreateForm<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            active: 0,
            on_created: None,
        }
    }
}

impl<D: Draft> CreateForm<D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with no arguments after every accepted submission.
    pub fn on_created(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_created = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &'static str {
        D::TITLE
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        D::FIELDS
    }

    #[allow(dead_code)]
    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn value(&self, index: usize) -> &str {
        self.draft.value(index)
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn next_field(&mut self) {
        self.active = (self.active + 1) % D::FIELDS.len();
    }

    pub fn previous_field(&mut self) {
        self.active = (self.active + D::FIELDS.len() - 1) % D::FIELDS.len();
    }

    pub fn push(&mut self, c: char) {
        self.draft.value_mut(self.active).push(c);
    }

    pub fn pop(&mut self) {
        self.draft.value_mut(self.active).pop();
    }

    /// Build the POST for the current draft. Empty fields are sent as-is.
    pub fn submit(&self) -> Result<Request> {
        Ok(Request::post(D::PATH, serde_json::to_value(&self.draft)?))
    }

    /// Blocking submit on the calling thread.
    #[allow(dead_code)]
    pub fn submit_with(&mut self, backend: &dyn Backend) -> Result<()> {
        let request = self.submit()?;
        self.apply(backend.send(&request))
    }

    /// Apply the reply to a submission.
    ///
    /// Only a 2xx clears the draft; the body is never inspected.
    pub fn apply(&mut self, reply: Result<Reply>) -> Result<()> {
        let reply = reply?;
        if !reply.is_success() {
            warn!(path = D::PATH, status = reply.status, "create rejected");
            return Ok(());
        }
        info!(path = D::PATH, status = reply.status, "record created");
        self.draft = D::default();
        if let Some(callback) = self.on_created.as_mut() {
            callback();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use serde_json::json;

    use super::*;
    use crate::client::stub::StubBackend;
    use crate::model::StudentDraft;

    fn fill(form: &mut CreateForm<StudentDraft>, values: [&str; 3]) {
        for value in values {
            value.chars().for_each(|c| form.push(c));
            form.next_field();
        }
    }

    fn counting_form() -> (CreateForm<StudentDraft>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let form = CreateForm::new().on_created(move || counter.set(counter.get() + 1));
        (form, calls)
    }

    #[test]
    fn empty_draft_is_still_posted() {
        let backend = StubBackend::new().reply("/api/students", 201, "{}");
        let mut form = CreateForm::<StudentDraft>::new();
        form.submit_with(&backend).unwrap();

        assert_eq!(
            backend.sent(),
            vec![Request::post(
                "/api/students",
                json!({"roll_no": "", "name": "", "email": ""})
            )]
        );
    }

    #[test]
    fn accepted_create_resets_draft_and_notifies_once() {
        let backend = StubBackend::new().reply("/api/students", 200, r#"{"id":12}"#);
        let (mut form, calls) = counting_form();
        fill(&mut form, ["21CS010", "Kiran", "kiran@hostel.edu"]);

        form.submit_with(&backend).unwrap();

        assert_eq!(
            backend.sent()[0],
            Request::post(
                "/api/students",
                json!({"roll_no": "21CS010", "name": "Kiran", "email": "kiran@hostel.edu"})
            )
        );
        assert_eq!(form.draft(), &StudentDraft::default());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn rejected_create_keeps_draft_and_skips_callback() {
        let backend = StubBackend::new().reply("/api/students", 422, r#"{"detail":"duplicate"}"#);
        let (mut form, calls) = counting_form();
        fill(&mut form, ["21CS010", "Kiran", ""]);

        form.submit_with(&backend).unwrap();

        assert_eq!(form.value(0), "21CS010");
        assert_eq!(form.value(1), "Kiran");
        assert_eq!(form.value(2), "");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn success_body_is_not_decoded() {
        let backend = StubBackend::new().reply("/api/students", 201, "Created");
        let (mut form, calls) = counting_form();
        form.push('x');
        assert!(form.submit_with(&backend).is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn field_cursor_wraps_and_edits_active_field() {
        let mut form = CreateForm::<StudentDraft>::new();
        form.previous_field();
        assert_eq!(form.active(), 2);
        form.push('a');
        form.push('b');
        form.pop();
        form.next_field();
        assert_eq!(form.active(), 0);
        assert_eq!(form.draft().email, "a");
        form.pop();
        assert_eq!(form.draft().roll_no, "");
    }
}
