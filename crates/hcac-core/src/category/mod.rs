//! # Category Module
//!
//! 商品名と説明文から固定10種のカテゴリを判定する。
//!
//! ## 判定方法
//!
//! 1. `"{name} {description}"` を小文字化して検索テキストを作る
//! 2. 各カテゴリのキーワードが部分一致で何個含まれるか数える（出現回数ではなく有無）
//! 3. 最多のカテゴリを返す。同点は宣言順で先のもの、マッチなしは `Electronics`
//!
//! 部分一致なので "Carpet" は "car" により `Automotive` になる。
//!
//! ## モジュール構成
//!
//! - `builtin`: カテゴリとキーワード表
//! - `classifier`: 分類関数
//!
//! ## 使用例
//!
//! ```rust
//! use hcac_core::category::{categorize, explain, Category};
//!
//! assert_eq!(categorize("Wireless Laptop", "A smart digital device"), Category::Electronics);
//! assert_eq!(categorize("", ""), Category::Electronics);
//!
//! let result = explain("Carpet", "");
//! assert_eq!(result.category, Category::Automotive);
//! assert_eq!(result.best_count(), 1);
//! ```

mod builtin;
mod classifier;

// Re-exports
pub use builtin::{BuiltinCategory, Category, BUILTIN_CATEGORIES};
pub use classifier::{categorize, explain, search_text, CategoryScore, Classification};
