pub mod algorithm;
pub mod update_rule;
