//! Builtin Category Definitions
//!
//! コード内で定義される固定カテゴリとキーワード表。
//! 宣言順がそのまま同点時の優先順になる。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HcacError;

/// 商品カテゴリ（固定10種）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Fashion,
    HomeAndKitchen,
    SportsAndOutdoors,
    BeautyAndPersonalCare,
    Books,
    ToysAndGames,
    Automotive,
    HealthAndWellness,
    Grocery,
}

impl Category {
    /// 宣言順の全カテゴリ
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeAndKitchen,
        Category::SportsAndOutdoors,
        Category::BeautyAndPersonalCare,
        Category::Books,
        Category::ToysAndGames,
        Category::Automotive,
        Category::HealthAndWellness,
        Category::Grocery,
    ];

    /// 表示用ラベル
    pub const fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::HomeAndKitchen => "Home & Kitchen",
            Category::SportsAndOutdoors => "Sports & Outdoors",
            Category::BeautyAndPersonalCare => "Beauty & Personal Care",
            Category::Books => "Books",
            Category::ToysAndGames => "Toys & Games",
            Category::Automotive => "Automotive",
            Category::HealthAndWellness => "Health & Wellness",
            Category::Grocery => "Grocery",
        }
    }

    /// キーワード表での定義を取得
    pub fn builtin(self) -> &'static BuiltinCategory {
        // ALLとBUILTIN_CATEGORIESは同じ順序
        &BUILTIN_CATEGORIES[self as usize]
    }

    /// 関連キーワード
    pub fn keywords(self) -> &'static [&'static str] {
        self.builtin().keywords
    }
}

impl Default for Category {
    /// マッチなし時のフォールバック
    fn default() -> Self {
        Category::ALL[0]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = HcacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| HcacError::UnknownCategory {
                label: s.to_string(),
            })
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// ビルトインカテゴリ定義（宣言順）
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        category: Category::Electronics,
        description: "Phones, computers, gadgets and other digital devices.",
        keywords: &[
            "phone",
            "laptop",
            "computer",
            "gadget",
            "electronic",
            "digital",
            "smart",
            "device",
        ],
    },
    BuiltinCategory {
        category: Category::Fashion,
        description: "Clothing, footwear and apparel.",
        keywords: &[
            "shirt", "dress", "pants", "clothing", "wear", "fashion", "apparel", "shoes",
        ],
    },
    BuiltinCategory {
        category: Category::HomeAndKitchen,
        description: "Furniture, appliances, cookware and home decor.",
        keywords: &[
            "kitchen",
            "home",
            "furniture",
            "appliance",
            "decor",
            "cook",
            "bed",
            "house",
        ],
    },
    BuiltinCategory {
        category: Category::SportsAndOutdoors,
        description: "Fitness gear, outdoor equipment and bikes.",
        keywords: &[
            "sport", "fitness", "exercise", "outdoor", "gym", "athletic", "bike", "camping",
        ],
    },
    BuiltinCategory {
        category: Category::BeautyAndPersonalCare,
        description: "Cosmetics, skin and hair care.",
        keywords: &[
            "beauty", "cosmetic", "skin", "hair", "makeup", "care", "personal",
        ],
    },
    BuiltinCategory {
        category: Category::Books,
        description: "Novels, textbooks, magazines and comics.",
        keywords: &[
            "book",
            "novel",
            "reading",
            "literature",
            "textbook",
            "magazine",
            "comic",
        ],
    },
    BuiltinCategory {
        category: Category::ToysAndGames,
        description: "Toys, games and puzzles for kids and adults.",
        keywords: &[
            "toy",
            "game",
            "play",
            "puzzle",
            "kids",
            "children",
            "entertainment",
        ],
    },
    BuiltinCategory {
        category: Category::Automotive,
        description: "Vehicles, parts and motor accessories.",
        keywords: &[
            "car",
            "vehicle",
            "auto",
            "automotive",
            "motor",
            "engine",
            "truck",
        ],
    },
    BuiltinCategory {
        category: Category::HealthAndWellness,
        description: "Vitamins, supplements and medical supplies.",
        keywords: &[
            "health",
            "vitamin",
            "supplement",
            "wellness",
            "medical",
            "fitness",
        ],
    },
    BuiltinCategory {
        category: Category::Grocery,
        description: "Food, drinks and snacks.",
        keywords: &[
            "food", "drink", "grocery", "snack", "beverage", "fresh", "organic",
        ],
    },
];

/// ビルトインカテゴリの静的定義
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// カテゴリ
    pub category: Category,
    /// カテゴリの説明（一覧表示で使用）
    pub description: &'static str,
    /// 部分一致で判定する小文字キーワード
    pub keywords: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_declaration_order() {
        assert_eq!(BUILTIN_CATEGORIES.len(), Category::ALL.len());
        for (builtin, category) in BUILTIN_CATEGORIES.iter().zip(Category::ALL) {
            assert_eq!(builtin.category, category);
            assert_eq!(category.builtin().category, category);
        }
    }

    #[test]
    fn test_keywords_non_empty_and_lowercase() {
        for builtin in BUILTIN_CATEGORIES {
            assert!(!builtin.keywords.is_empty(), "{} has no keywords", builtin.category);
            for kw in builtin.keywords {
                assert_eq!(*kw, kw.to_lowercase(), "keyword '{}' is not lowercase", kw);
            }
        }
    }

    #[test]
    fn test_default_is_first_category() {
        assert_eq!(Category::default(), Category::Electronics);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Electronics",
                "Fashion",
                "Home & Kitchen",
                "Sports & Outdoors",
                "Beauty & Personal Care",
                "Books",
                "Toys & Games",
                "Automotive",
                "Health & Wellness",
                "Grocery",
            ]
        );
        assert_eq!(Category::HomeAndKitchen.to_string(), "Home & Kitchen");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "toys & games".parse::<Category>().unwrap(),
            Category::ToysAndGames
        );
        assert_eq!(" Grocery ".parse::<Category>().unwrap(), Category::Grocery);
        let err = "Garden".parse::<Category>().unwrap_err();
        assert!(matches!(err, HcacError::UnknownCategory { .. }));
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&Category::BeautyAndPersonalCare).unwrap();
        assert_eq!(json, "\"Beauty & Personal Care\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::BeautyAndPersonalCare);
    }

    #[test]
    fn test_fitness_listed_twice() {
        assert!(Category::SportsAndOutdoors.keywords().contains(&"fitness"));
        assert!(Category::HealthAndWellness.keywords().contains(&"fitness"));
    }
}
