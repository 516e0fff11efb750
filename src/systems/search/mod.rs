mod commands;
mod worker;

pub(crate) use commands::{SearchCommand, SearchResponse};
pub(crate) use worker::spawn;
