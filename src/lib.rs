pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod process;
pub mod sensitive;

#[cfg(test)]
mod test_support;
