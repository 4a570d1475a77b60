//! hcac MCP server
//!
//! Exposes the product categorizer to AI agents over MCP.
//!
//! ## Tools
//!
//! - `categorize` - Assign a category and record it in the session history
//! - `explain` - Per-category keyword matches for a product
//! - `categories` - The fixed category list
//! - `history` - Earlier `categorize` results in submission order

mod service;

pub use service::{
    CategoriesRequest, CategorizeRequest, CategorizerService, ExplainRequest, HistoryRequest,
};
