mod record;
mod store;

pub use record::CategorizationRecord;
pub use store::History;
