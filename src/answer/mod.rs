//! create-answer Lambda: drafts a reply from the knowledge base

pub mod generate;
pub mod handler;

pub use generate::answer_inquiry;
pub use handler::handler;
