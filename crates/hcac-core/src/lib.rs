pub mod category;
pub mod config;
pub mod error;
pub mod history;
pub mod session;

pub use config::Config;
pub use error::{HcacError, Result};
pub use history::{CategorizationRecord, History};
pub use session::{PaceOutcome, Pacing, PacingTimer, PendingSubmission, Session, SharedSession};

// Category system
pub use category::{
    categorize, explain, BuiltinCategory, Category, CategoryScore, Classification,
    BUILTIN_CATEGORIES,
};
