mod models;
mod storage;

pub use models::{categories, default_quotes, filter_by_category, Quote, ALL_CATEGORIES};
pub use storage::{QuoteStore, StoreConfig};
