#![allow(dead_code)]
mod builders;

pub use builders::{a, aaaa, questions, use_case_for_suffix, QuestionBuilder};
