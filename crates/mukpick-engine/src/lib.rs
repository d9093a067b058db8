//! The recommendation engine: random category/keyword selection, uniform
//! venue selection, the session location slot, and the workflow that drives
//! permission gating, location resolution, and search in order.

pub mod error;
pub mod picker;
pub mod selection;
pub mod state;
pub mod workflow;

pub use error::WorkflowError;
pub use picker::CategoryPicker;
pub use selection::{select_one, EmptyReason, Selection};
pub use state::{LocationSlot, UpdateToken};
pub use workflow::{Recommendation, Recommender};
