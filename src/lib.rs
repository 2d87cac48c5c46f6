pub mod app;
pub mod cli;
pub mod config;
pub mod generator;
pub mod output;
pub mod platforms;
pub mod state;
pub mod storage;
pub mod terms;
pub mod utils;

#[cfg(test)]
mod tests;
