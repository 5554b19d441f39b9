use serde::Serialize;
use token_logging::token_debug;

use crate::counter::TokenCounter;

/// Context window assumed when no limit is configured.
pub const DEFAULT_TOKEN_LIMIT: usize = 128_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBudget {
    pub limit: usize,
}

impl Default for TokenBudget {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_LIMIT)
    }
}

impl TokenBudget {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn check(&self, tokens: usize) -> BudgetReport {
        let report = BudgetReport {
            tokens,
            limit: self.limit,
            remaining: self.limit.saturating_sub(tokens),
            overflow: tokens.saturating_sub(self.limit),
        };
        if !report.fits() {
            token_debug!(
                "Token budget exceeded: {} tokens over a limit of {}",
                report.overflow,
                report.limit
            );
        }
        report
    }

    pub fn check_text(&self, counter: &dyn TokenCounter, text: &str) -> BudgetReport {
        self.check(counter.count(text))
    }
}

/// Outcome of checking a token count against a [`TokenBudget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub tokens: usize,
    pub limit: usize,
    pub remaining: usize,
    pub overflow: usize,
}

impl BudgetReport {
    pub fn fits(&self) -> bool {
        self.overflow == 0
    }

    /// Share of the limit used, rounded down. Exceeds 100 when over budget.
    pub fn percent_used(&self) -> usize {
        if self.limit == 0 {
            return if self.tokens == 0 { 0 } else { 100 };
        }
        self.tokens.saturating_mul(100) / self.limit
    }
}
