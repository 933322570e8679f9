use console::Style;
use std::path::Path;

use quote_types::Quote;

/// 命令行输出格式化工具
/// 提供统一的 Cargo 风格输出
pub struct Output {
    green: Style,
    bold: Style,
    dim: Style,
}

impl Output {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            bold: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// 显示状态消息（如 "Adding", "Syncing" 等）
    /// 格式: "     Syncing <target>"（动词右对齐到 12 字符）
    pub fn status(&self, action: &str, target: &str) {
        eprintln!("{:>12} {}", self.green.apply_to(action), target);
    }

    /// 显示存储信息
    /// 格式: "       Store /path/to/store (12 quotes)"
    /// 自动在后面添加空行
    pub fn store_info(&self, path: &Path, quote_count: usize) {
        eprintln!(
            "{:>12} {} {}",
            self.green.apply_to("Store"),
            path.display(),
            self.dim.apply_to(format!("({} quotes)", quote_count))
        );
        eprintln!();
    }

    /// 显示创建/查找资源消息
    /// 格式: "    Creating config at /path/to/config"
    pub fn resource_action(&self, action: &str, resource: &str, path: &Path) {
        eprintln!(
            "{:>12} {} at {}",
            self.green.apply_to(action),
            resource,
            path.display()
        );
    }

    /// 显示完成消息
    /// 格式: "    Finished action for scope"
    /// 自动在前面添加空行
    pub fn finish(&self, action: &str, scope: &str) {
        eprintln!();
        eprintln!(
            "{:>12} {} for {} scope",
            self.green.apply_to("Finished"),
            action,
            scope
        );
    }

    /// 显示单条引语（与原页面展示格式一致）
    /// 格式: "text" — Category: cat
    pub fn quote(&self, quote: &Quote) {
        println!(
            "{} {}",
            self.bold.apply_to(format!("\"{}\"", quote.text)),
            self.dim.apply_to(format!("— Category: {}", quote.category))
        );
    }

    /// 显示引语列表
    /// 格式: "[1/12] "text" — category"
    pub fn quote_list(&self, quotes: &[&Quote]) {
        let total = quotes.len();
        for (i, quote) in quotes.iter().enumerate() {
            let index_part = format!("{}/{}", i + 1, total);
            println!(
                "[{}] {} {}",
                self.dim.apply_to(&index_part),
                self.bold.apply_to(format!("\"{}\"", quote.text)),
                self.dim.apply_to(format!("— {}", quote.category))
            );
        }
    }

    /// 显示注意事项（右对齐）
    pub fn note(&self, message: &str) {
        eprintln!("{:>12} {}", self.dim.apply_to("Note"), message);
    }

    /// 显示警告（黄色，右对齐）
    pub fn warning(&self, message: &str) {
        eprintln!(
            "{:>12} {}",
            Style::new().yellow().bold().apply_to("Warning"),
            message
        );
    }

    /// 显示错误（红色，右对齐）
    pub fn error(&self, message: &str) {
        eprintln!(
            "{:>12} {}",
            Style::new().red().bold().apply_to("Error"),
            message
        );
    }

    /// 显示提示消息（标准输出，右对齐）
    pub fn info(&self, message: &str) {
        println!("{:>12} {}", "", message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
