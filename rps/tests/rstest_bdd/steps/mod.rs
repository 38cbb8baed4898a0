//! Behavioural step modules registered with `rstest-bdd`.

pub mod builder_steps;
pub mod output_steps;
