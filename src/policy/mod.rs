pub mod config;
pub mod matcher;
pub mod checker;

// Re-export main types
pub use config::{Policy, PolicyFormat, DEFAULT_POLICY_FILE};
pub use checker::{classify, Assessment, Verdict};
