use serde::Serialize;

use crate::category::{categorize, Category};

/// One categorized submission
///
/// Only built through [`CategorizationRecord::categorize`], so `category` is
/// always what the classifier returns for `name` and `description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizationRecord {
    name: String,
    description: String,
    category: Category,
}

impl CategorizationRecord {
    pub fn categorize(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        let description = description.into();
        let category = categorize(&name, &description);
        Self {
            name,
            description,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// First line of the description, cut to at most `width` characters
    ///
    /// A cut or multi-line description ends in `...` when the width leaves
    /// room for it. A width of 0 keeps the whole first line.
    pub fn description_preview(&self, width: usize) -> String {
        let first_line = self.description.lines().next().unwrap_or_default();
        let multiline = first_line.len() < self.description.trim_end().len();
        let chars = first_line.chars().count();

        if !multiline && (width == 0 || chars <= width) {
            return first_line.to_string();
        }
        if width == 0 {
            return format!("{first_line}...");
        }
        if width <= 3 {
            return first_line.chars().take(width).collect();
        }

        let cut: String = first_line.chars().take(chars.min(width - 3)).collect();
        format!("{}...", cut.trim_end())
    }
}
