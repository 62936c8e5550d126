//! Check trait and runner for listing validation.
//!
//! This module provides a trait-based system for implementing validation
//! checks over a parsed listing that can be composed and run together.

mod sorted;

pub use sorted::SortedCheck;

use crate::parse::{Listing, Section};
use crate::validate::ValidationResult;
use crate::validate::diff::DiffRenderer;
use log::{debug, info};

/// Context provided to checks.
pub struct CheckContext<'a> {
    /// The parsed listing.
    pub listing: &'a Listing,
    /// Renderer used to show how a section should be reordered.
    pub renderer: &'a dyn DiffRenderer,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(listing: &'a Listing, renderer: &'a dyn DiffRenderer) -> Self {
        Self { listing, renderer }
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("listing", &self.listing)
            .field("renderer", &"<dyn DiffRenderer>")
            .finish()
    }
}

/// A validation check over a parsed listing.
pub trait Check {
    /// Returns the name of this check.
    fn name(&self) -> &'static str;

    /// Runs the check and returns validation results.
    fn run(&self, ctx: &CheckContext) -> ValidationResult;
}

/// Runs validation checks in registration order and collects results.
#[derive(Default)]
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates a new check runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a check runner with a sort check for every section,
    /// in document order.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        for section in Section::ALL {
            runner.add_check(SortedCheck::new(section));
        }
        runner
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Runs every check and returns the combined results.
    ///
    /// Every check runs even when an earlier one fails.
    pub fn run(&self, listing: &Listing, renderer: &dyn DiffRenderer) -> ValidationResult {
        info!("Running {} checks", self.checks.len());
        let ctx = CheckContext::new(listing, renderer);
        let mut result = ValidationResult::new();

        for check in &self.checks {
            debug!("Running check: {}", check.name());
            let check_result = check.run(&ctx);
            debug!(
                "Check '{}' found {} issues",
                check.name(),
                check_result.errors.len()
            );
            result.merge(check_result);
        }

        info!("Checks complete: {} total issues", result.errors.len());
        result
    }
}
