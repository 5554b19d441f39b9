//! `lazy-token`: count approximate LLM tokens in files or standard input.
//!
//! The counting itself lives in `lazy_token_core`; this crate owns argument
//! parsing, configuration, input decoding and presentation.
pub mod cli;
pub mod config;
pub mod decode;
pub mod input;
pub mod report;

pub use cli::{
    execute, exit_status, report_ignored_config, resolve_config, run, Cli, Settings,
    EXIT_OVER_BUDGET,
};
