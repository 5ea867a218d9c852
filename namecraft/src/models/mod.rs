//! Request and result models for a generation run.

mod record;
mod request;

pub use record::GenerationRecord;
pub use request::{GenerationRequest, MAX_DESCRIPTION_CHARS};
