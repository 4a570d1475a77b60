//! MCP tools for product categorization
//!
//! All tools share one [`SharedSession`], so `history` reflects every
//! `categorize` call made over the connection.

use hcac_core::{explain, HcacError, Pacing, Session, SharedSession, BUILTIN_CATEGORIES};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

const MISSING_FIELDS: &str = "Missing product name or description";

/// Product categorization MCP service
#[derive(Clone)]
pub struct CategorizerService {
    session: SharedSession,
    tool_router: ToolRouter<Self>,
}

impl CategorizerService {
    pub fn new(pacing: Pacing) -> Self {
        Self {
            session: SharedSession::new(Session::new(pacing)),
            tool_router: Self::tool_router(),
        }
    }

    /// Submit a product to the shared session
    pub async fn run_categorize(&self, request: CategorizeRequest) -> Result<Value, String> {
        let (Some(name), Some(description)) = (request.name, request.description) else {
            return Err(MISSING_FIELDS.to_string());
        };

        match self.session.submit(&name, &description).await {
            Ok(record) => {
                info!(category = %record.category(), "categorize tool call");
                Ok(json!({ "category": record.category() }))
            }
            Err(HcacError::MissingField { .. }) => Err(MISSING_FIELDS.to_string()),
            Err(e) => {
                warn!("categorize tool failed: {e}");
                Err(e.to_string())
            }
        }
    }

    pub fn run_explain(request: ExplainRequest) -> Value {
        let result = explain(&request.name, &request.description);
        serde_json::to_value(&result).unwrap_or_default()
    }

    pub fn run_categories(request: CategoriesRequest) -> Value {
        let with_keywords = request.keywords.unwrap_or(false);
        let categories: Vec<CategoryInfo> = BUILTIN_CATEGORIES
            .iter()
            .map(|b| CategoryInfo {
                name: b.category.label(),
                description: b.description,
                keywords: with_keywords.then_some(b.keywords),
            })
            .collect();
        json!({ "categories": categories })
    }

    pub async fn run_history(&self, request: HistoryRequest) -> Value {
        let records = self.session.history().await;
        let total = records.len();
        let limit = request.limit.unwrap_or(0);
        let skip = if limit == 0 {
            0
        } else {
            total.saturating_sub(limit)
        };
        json!({
            "total": total,
            "records": &records[skip..],
        })
    }
}

impl Default for CategorizerService {
    fn default() -> Self {
        Self::new(Pacing::none())
    }
}

#[tool_handler]
impl ServerHandler for CategorizerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Assigns one of ten fixed e-commerce categories to a product from its name and description. Use 'categorize' to classify and record a product, 'explain' to see which keywords matched, 'categories' to list the labels, and 'history' to list earlier results.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input/Output Schemas
// ============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CategorizeRequest {
    #[schemars(description = "Product name")]
    pub name: Option<String>,

    #[schemars(description = "Product description")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExplainRequest {
    #[schemars(description = "Product name")]
    pub name: String,

    #[schemars(description = "Product description")]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct CategoriesRequest {
    /// Include keyword lists
    #[schemars(description = "Include the keywords of each category")]
    pub keywords: Option<bool>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct HistoryRequest {
    #[schemars(description = "Only return the most recent N records (0 = all)")]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct CategoryInfo {
    name: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    keywords: Option<&'static [&'static str]>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

fn json_result(value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

#[tool_router]
impl CategorizerService {
    #[tool(description = "Categorize a product from its name and description and record it in the session history. Returns {\"category\": <label>}.")]
    pub async fn categorize(
        &self,
        Parameters(request): Parameters<CategorizeRequest>,
    ) -> Result<CallToolResult, McpError> {
        match self.run_categorize(request).await {
            Ok(value) => Ok(json_result(&value)),
            Err(message) => Ok(CallToolResult::error(vec![Content::text(message)])),
        }
    }

    #[tool(description = "Show which keywords of every category matched a product, and the winning category. Does not record history.")]
    pub async fn explain(
        &self,
        Parameters(request): Parameters<ExplainRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(json_result(&Self::run_explain(request)))
    }

    #[tool(description = "List the available categories in priority order.")]
    pub async fn categories(
        &self,
        Parameters(request): Parameters<CategoriesRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(json_result(&Self::run_categories(request)))
    }

    #[tool(description = "List categorized products in submission order.")]
    pub async fn history(
        &self,
        Parameters(request): Parameters<HistoryRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(json_result(&self.run_history(request).await))
    }
}
