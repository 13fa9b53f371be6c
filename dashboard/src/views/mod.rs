//! Per-panel state. Each view owns its data and is only mutated by its own
//! key handling and its own request completions.

pub mod complaint;
pub mod create;
pub mod list;

pub use complaint::ComplaintAnalyzer;
pub use create::CreateForm;
pub use list::ListView;
