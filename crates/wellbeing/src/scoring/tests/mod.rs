mod common;
mod engine;
mod scores;
