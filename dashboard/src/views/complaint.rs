use tracing::warn;

use crate::client::{Backend, Reply, Request};
use crate::error::Result;
use crate::model::{Analysis, ComplaintRequest};

pub const ANALYZE_PATH: &str = "/api/complaints/analyze";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplaintField {
    Subject,
    Description,
}

/// Subject/description form posting to the analysis endpoint.
#[derive(Debug)]
pub struct ComplaintAnalyzer {
    pub subject: String,
    pub description: String,
    active: ComplaintField,
    result: Option<Analysis>,
}

impl Default for ComplaintAnalyzer {
    fn default() -> Self {
        Self {
            subject: String::new(),
            description: String::new(),
            active: ComplaintField::Subject,
            result: None,
        }
    }
}

impl ComplaintAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ComplaintField {
        self.active
    }

    pub fn toggle_field(&mut self) {
        self.active = match self.active {
            ComplaintField::Subject => ComplaintField::Description,
            ComplaintField::Description => ComplaintField::Subject,
        };
    }

    fn active_value(&mut self) -> &mut String {
        match self.active {
            ComplaintField::Subject => &mut self.subject,
            ComplaintField::Description => &mut self.description,
        }
    }

    pub fn push(&mut self, c: char) {
        self.active_value().push(c);
    }

    pub fn pop(&mut self) {
        self.active_value().pop();
    }

    #[allow(dead_code)]
    pub fn result(&self) -> Option<&Analysis> {
        self.result.as_ref()
    }

    pub fn analyze(&self) -> Result<Request> {
        let body = ComplaintRequest {
            subject: self.subject.clone(),
            description: self.description.clone(),
        };
        Ok(Request::post(ANALYZE_PATH, serde_json::to_value(body)?))
    }

    /// Blocking analyze on the calling thread.
    #[allow(dead_code)]
    pub fn analyze_with(&mut self, backend: &dyn Backend) -> Result<()> {
        let request = self.analyze()?;
        self.apply(backend.send(&request))
    }

    /// Store whatever the endpoint returned, error payloads included.
    /// A `null` body clears the result.
    pub fn apply(&mut self, reply: Result<Reply>) -> Result<()> {
        let reply = reply?;
        if !reply.is_success() {
            warn!(status = reply.status, "complaint analysis returned an error status");
        }
        self.result = reply.json::<Option<Analysis>>()?;
        Ok(())
    }

    /// Result lines, empty until the first analysis lands.
    pub fn lines(&self) -> Vec<(&'static str, String)> {
        match &self.result {
            Some(analysis) => vec![
                ("Sentiment", analysis.sentiment_text()),
                ("Category", analysis.category_text()),
                ("Severity", analysis.severity_text()),
            ],
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::stub::StubBackend;

    fn type_into(view: &mut ComplaintAnalyzer, text: &str) {
        text.chars().for_each(|c| view.push(c));
    }

    #[test]
    fn analysis_without_category_shows_placeholder() {
        let backend = StubBackend::new().reply(
            ANALYZE_PATH,
            200,
            r#"{"sentiment":"negative","severity":"high"}"#,
        );
        let mut view = ComplaintAnalyzer::new();
        type_into(&mut view, "S");
        view.toggle_field();
        type_into(&mut view, "D");

        view.analyze_with(&backend).unwrap();

        assert_eq!(
            backend.sent(),
            vec![Request::post(ANALYZE_PATH, json!({"subject": "S", "description": "D"}))]
        );
        let rendered: Vec<String> = view
            .lines()
            .into_iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        assert_eq!(
            rendered,
            vec!["Sentiment: negative", "Category: n/a", "Severity: high"]
        );
    }

    #[test]
    fn empty_fields_are_still_sent() {
        let backend = StubBackend::new().reply(ANALYZE_PATH, 200, "{}");
        let mut view = ComplaintAnalyzer::new();
        view.analyze_with(&backend).unwrap();
        assert_eq!(
            backend.sent(),
            vec![Request::post(ANALYZE_PATH, json!({"subject": "", "description": ""}))]
        );
    }

    #[test]
    fn error_payload_is_stored_regardless_of_status() {
        let backend = StubBackend::new().reply(ANALYZE_PATH, 500, r#"{"detail":"model offline"}"#);
        let mut view = ComplaintAnalyzer::new();
        view.analyze_with(&backend).unwrap();

        let lines = view.lines();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], ("Sentiment", String::new()));
        assert_eq!(lines[1], ("Category", "n/a".to_string()));
        assert_eq!(lines[2], ("Severity", String::new()));
    }

    #[test]
    fn nothing_shown_before_first_analysis() {
        assert!(ComplaintAnalyzer::new().lines().is_empty());
    }

    #[test]
    fn non_json_body_keeps_previous_result() {
        let backend = StubBackend::new()
            .reply(ANALYZE_PATH, 200, r#"{"sentiment":"positive","category":"food","severity":"low"}"#)
            .reply(ANALYZE_PATH, 502, "<html>Bad Gateway</html>");
        let mut view = ComplaintAnalyzer::new();
        view.analyze_with(&backend).unwrap();
        assert!(view.analyze_with(&backend).is_err());
        assert_eq!(view.lines()[1], ("Category", "food".to_string()));
    }

    #[test]
    fn null_body_clears_previous_result() {
        let backend = StubBackend::new()
            .reply(ANALYZE_PATH, 200, r#"{"sentiment":"positive","category":"food","severity":"low"}"#)
            .reply(ANALYZE_PATH, 200, "null");
        let mut view = ComplaintAnalyzer::new();
        view.analyze_with(&backend).unwrap();
        assert_eq!(view.lines().len(), 3);

        view.analyze_with(&backend).unwrap();
        assert!(view.result().is_none());
        assert!(view.lines().is_empty());
    }

    #[test]
    fn later_result_replaces_earlier() {
        let backend = StubBackend::new()
            .reply(ANALYZE_PATH, 200, r#"{"sentiment":"positive","category":"food","severity":"low"}"#)
            .reply(ANALYZE_PATH, 200, r#"{"sentiment":"negative","severity":"medium"}"#);
        let mut view = ComplaintAnalyzer::new();
        view.analyze_with(&backend).unwrap();
        view.analyze_with(&backend).unwrap();
        let analysis = view.result().unwrap();
        assert_eq!(analysis.severity_text(), "medium");
        assert_eq!(analysis.category_text(), "n/a");
    }
}
