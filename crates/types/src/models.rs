use std::collections::HashSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// 分类过滤的哨兵值：表示不过滤，返回完整集合
pub const ALL_CATEGORIES: &str = "all";

/// 一条引语记录
///
/// 没有唯一 ID：同步合并以 text 精确相等作为身份。
/// 两条文本相同但分类不同的引语会发生碰撞。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// 创建经过校验的引语
    ///
    /// text 和 category 去除首尾空白后必须非空，否则校验失败
    pub fn new(text: &str, category: &str) -> Result<Self> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            anyhow::bail!("Quote text cannot be empty");
        }
        if category.is_empty() {
            anyhow::bail!("Quote category cannot be empty");
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

/// 内置默认引语：持久化数据缺失或损坏时的回退集合
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote {
            text: "The journey of a thousand miles begins with one step.".to_string(),
            category: "Motivation".to_string(),
        },
        Quote {
            text: "Life is what happens when you're busy making other plans.".to_string(),
            category: "Life".to_string(),
        },
        Quote {
            text: "Do what you can, with what you have, where you are.".to_string(),
            category: "Inspiration".to_string(),
        },
    ]
}

/// 派生分类索引：按首次出现顺序去重，不做持久化
pub fn categories(quotes: &[Quote]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut result = Vec::new();

    for quote in quotes {
        if seen.insert(quote.category.as_str()) {
            result.push(quote.category.clone());
        }
    }

    result
}

/// 分类过滤：纯投影，保持原有相对顺序
///
/// 哨兵值 "all" 返回完整集合
pub fn filter_by_category<'a>(quotes: &'a [Quote], category: &str) -> Vec<&'a Quote> {
    if category == ALL_CATEGORIES {
        return quotes.iter().collect();
    }
    quotes.iter().filter(|q| q.category == category).collect()
}
