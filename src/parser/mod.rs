pub mod channel;
pub mod item;
pub mod sanitize;

pub use channel::parse_feed;
pub use item::extract_item;
pub use sanitize::{sanitize_text, to_date};
