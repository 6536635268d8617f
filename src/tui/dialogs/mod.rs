//! Modal dialogs

pub mod alert;
pub mod help;
