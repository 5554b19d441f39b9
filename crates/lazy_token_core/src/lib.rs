//! Lazy token counter: a fast, deterministic "close enough" estimate of how
//! many tokens a text occupies in an LLM context window, without a
//! model-specific tokenizer.
//!
//! Text is split into whitespace runs, the punctuation marks `. , ! ?` and
//! word runs. Words longer than seven characters are re-chunked into
//! seven-character pieces, and each remaining piece counts as one token.
mod budget;
mod counter;
mod segment;
mod tokenize;

pub use budget::{BudgetReport, TokenBudget, DEFAULT_TOKEN_LIMIT};
pub use counter::{
    CharRatioTokenCounter, Estimator, LazyTokenCounter, TokenCounter, UnknownEstimator,
    WhitespaceTokenCounter,
};
pub use segment::{fragments, Fragment, FragmentKind, Fragments};
pub use tokenize::{count, tokenize, tokens, Tokens, MAX_TOKEN_CHARS};
