pub mod derive;
pub mod recode;
pub mod rules;

pub use derive::derive_weight;
pub use recode::{apply_rules, RecodeOutcome};
pub use rules::{load_rules, RecodeRule, DEFAULT_RULES};
