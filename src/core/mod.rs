pub mod converter;
pub mod engine;
pub mod kana_table;
pub mod normalize;
pub mod selector;
pub mod types;
