#![allow(dead_code)]
mod builders;

pub use builders::{a_addresses, handler_for_suffix, query_message, QueryMessageBuilder};
