// Domain layer - Core dashboard models
pub mod format;
pub mod insights;
pub mod layout;
pub mod saved_layout;
pub mod template;
