//! judge-category Lambda: assigns a category to an inquiry

pub mod classify;
pub mod handler;

pub use classify::classify_inquiry;
pub use handler::handler;
