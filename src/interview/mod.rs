//! Interview state: question catalog, selection policies and the conductor

pub mod question_bank;
pub mod conversation;
pub mod selection;
pub mod conductor;
