// Copyright 2025 Cowboy AI, LLC.

//! Outcomes and budgets shared by the brute-force searches

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of a bounded search
///
/// Only `Found` carries a value. The three absent cases are kept apart so a
/// caller can tell "too large to try" and "gave up" from "searched
/// everything and there is none".
///
/// Serialized with an `outcome` tag next to the variant's fields; a found
/// value sits under `value`, whatever its JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome<T> {
    /// A satisfying candidate
    Found {
        /// The candidate
        value: T,
    },

    /// The search ran to exhaustion without a satisfying candidate
    NotFound {
        /// Human-readable explanation
        reason: String,
    },

    /// The input exceeds a size guard; nothing was searched
    Infeasible {
        /// Human-readable explanation
        reason: String,
    },

    /// The candidate budget ran out before the search finished
    BudgetExceeded {
        /// Candidates examined before stopping
        explored: u64,
        /// Configured budget
        budget: u64,
    },
}

impl<T> SearchOutcome<T> {
    /// The found value, if any
    pub fn found(&self) -> Option<&T> {
        match self {
            SearchOutcome::Found { value } => Some(value),
            _ => None,
        }
    }

    /// Consume the outcome, keeping only a found value
    pub fn into_found(self) -> Option<T> {
        match self {
            SearchOutcome::Found { value } => Some(value),
            _ => None,
        }
    }

    /// Whether a value was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// Why nothing was found; `None` for `Found`
    pub fn reason(&self) -> Option<String> {
        match self {
            SearchOutcome::Found { .. } => None,
            SearchOutcome::NotFound { reason } | SearchOutcome::Infeasible { reason } => {
                Some(reason.clone())
            }
            SearchOutcome::BudgetExceeded { explored, budget } => Some(format!(
                "search budget exhausted after {} of {} candidates",
                explored, budget
            )),
        }
    }

    pub(crate) fn exhausted(exhausted: BudgetExhausted) -> Self {
        SearchOutcome::BudgetExceeded {
            explored: exhausted.explored,
            budget: exhausted.budget,
        }
    }
}

impl<T: fmt::Display> fmt::Display for SearchOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found { value } => write!(f, "{}", value),
            other => write!(f, "{}", other.reason().unwrap_or_default()),
        }
    }
}

/// Raised internally when a [`SearchBudget`] is spent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetExhausted {
    pub explored: u64,
    pub budget: u64,
}

/// Counts candidates examined by one search call
#[derive(Debug)]
pub(crate) struct SearchBudget {
    explored: u64,
    budget: u64,
}

impl SearchBudget {
    pub fn new(budget: u64) -> Self {
        Self { explored: 0, budget }
    }

    /// Account for one more candidate
    pub fn charge(&mut self) -> Result<(), BudgetExhausted> {
        if self.explored >= self.budget {
            return Err(BudgetExhausted {
                explored: self.explored,
                budget: self.budget,
            });
        }
        self.explored += 1;
        Ok(())
    }

    pub fn explored(&self) -> u64 {
        self.explored
    }
}
