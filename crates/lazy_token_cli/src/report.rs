use std::fmt::Write;

use lazy_token_core::{tokens, BudgetReport, Estimator, TokenBudget, TokenCounter};
use serde::Serialize;

use crate::input::Document;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub source: String,
    pub encoding: String,
    pub bytes: usize,
    pub chars: usize,
    pub tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub estimator: Estimator,
    pub reports: Vec<CountReport>,
    pub total_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetReport>,
}

impl Summary {
    pub fn exceeds_budget(&self) -> bool {
        self.budget.is_some_and(|budget| !budget.fits())
    }
}

/// Count one document. The token list always comes from the lazy segmenter,
/// whatever estimator produced the count.
pub fn count_document(doc: &Document, estimator: Estimator, with_tokens: bool) -> CountReport {
    CountReport {
        source: doc.source.to_string(),
        encoding: doc.encoding_label.clone(),
        bytes: doc.byte_len,
        chars: doc.text.chars().count(),
        tokens: estimator.count(&doc.text),
        token_list: with_tokens.then(|| tokens(&doc.text).map(str::to_string).collect()),
    }
}

pub fn summarize(
    estimator: Estimator,
    reports: Vec<CountReport>,
    budget: Option<TokenBudget>,
) -> Summary {
    let total_tokens = reports.iter().map(|report| report.tokens).sum();
    Summary {
        estimator,
        reports,
        total_tokens,
        budget: budget.map(|budget| budget.check(total_tokens)),
    }
}

pub fn render_text(summary: &Summary) -> String {
    let mut out = String::new();
    for report in &summary.reports {
        let _ = writeln!(out, "{}\t{}", report.tokens, report.source);
        if let Some(token_list) = &report.token_list {
            for token in token_list {
                let _ = writeln!(out, "\t{token:?}");
            }
        }
    }
    if summary.reports.len() > 1 {
        let _ = writeln!(out, "{}\ttotal", summary.total_tokens);
    }
    if let Some(budget) = &summary.budget {
        let _ = write!(
            out,
            "budget: {} / {} tokens ({}%), ",
            budget.tokens,
            budget.limit,
            budget.percent_used()
        );
        if budget.fits() {
            let _ = writeln!(out, "{} remaining", budget.remaining);
        } else {
            let _ = writeln!(out, "{} over", budget.overflow);
        }
    }
    out
}

pub fn render_json(summary: &Summary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
