use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use tracing::debug;

use super::{Backend, Reply, Request};
use crate::error::Result;
use crate::model::Panel;

/// A finished call, addressed to the panel that issued it.
#[derive(Debug)]
pub struct Completion {
    pub panel: Panel,
    pub reply: Result<Reply>,
}

/// Run one request off the UI thread and post the outcome back.
///
/// In-flight calls are never cancelled; whichever completes last is applied last.
pub fn dispatch(
    backend: Arc<dyn Backend>,
    tx: Sender<Completion>,
    panel: Panel,
    request: Request,
) -> thread::JoinHandle<()> {
    debug!(?panel, path = request.path(), "dispatching request");
    thread::spawn(move || {
        let reply = backend.send(&request);
        // Receiver gone means the dashboard is shutting down.
        let _ = tx.send(Completion { panel, reply });
    })
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::client::stub::StubBackend;

    #[test]
    fn completion_is_posted_for_the_issuing_panel() {
        let backend: Arc<dyn Backend> =
            Arc::new(StubBackend::new().reply("/api/rooms", 200, r#"{"items":[]}"#));
        let (tx, rx) = mpsc::channel();

        dispatch(backend, tx, Panel::Rooms, Request::get("/api/rooms"))
            .join()
            .unwrap();

        let completion = rx.recv().unwrap();
        assert_eq!(completion.panel, Panel::Rooms);
        let reply = completion.reply.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, r#"{"items":[]}"#);
    }

    #[test]
    fn dropped_receiver_does_not_panic_worker() {
        let backend: Arc<dyn Backend> = Arc::new(StubBackend::new());
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let handle = dispatch(backend, tx, Panel::Visitors, Request::get("/api/visitors"));
        assert!(handle.join().is_ok());
    }
}
