//! Mapping of raw upstream records onto the canonical model

pub mod news;
pub mod quote;

pub use news::{NewsScope, fetch_news, normalize_news, shape_query};
pub use quote::{AssetClass, fetch_quote, normalize_quote, price_change};
