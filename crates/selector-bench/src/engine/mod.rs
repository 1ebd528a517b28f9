//! Selector engine abstraction
//!
//! The harness never evaluates selectors itself. Everything it needs from a
//! matching engine goes through [`SelectorEngine`]: parse generated markup,
//! resolve a scope, run one of the traversal queries and count the result.
//!
//! [`VisdomEngine`] is the implementation used by the binary and the tests.

mod visdom_engine;

use std::panic::{self, AssertUnwindSafe};

use crate::error::EngineError;

pub use visdom_engine::VisdomEngine;

/// Contract between the harness and a selector-matching engine
///
/// Selections are ordered node sets as returned by the engine. The harness
/// only ever counts them; it never reorders or deduplicates.
pub trait SelectorEngine {
    /// A parsed document
    type Document;
    /// An ordered set of node handles
    type Selection;

    /// Human readable engine name for reports
    fn name(&self) -> &'static str;

    /// Parse markup into a queryable document
    fn parse_document(&self, markup: &str) -> Result<Self::Document, EngineError>;

    /// The document node itself, used as the scope for scope resolution
    fn root<'d>(&self, document: &'d Self::Document) -> &'d Self::Selection;

    /// Immediate children of `scope` that match `selector`
    fn query_children(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError>;

    /// All descendants of `scope` that match `selector`
    fn query_descendants(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError>;

    /// Nearest previous sibling of each scope node, kept if it matches
    fn previous_sibling(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError>;

    /// Every previous sibling of each scope node that matches
    fn all_previous_siblings(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError>;

    /// Nearest next sibling of each scope node, kept if it matches
    fn next_sibling(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError>;

    /// Every next sibling of each scope node that matches
    fn all_next_siblings(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError>;

    /// Number of nodes in a selection
    fn count(&self, selection: &Self::Selection) -> usize;
}

/// Run an engine call, turning a panic into [`EngineError::Panicked`]
pub fn guard<T>(call: impl FnOnce() -> Result<T, EngineError>) -> Result<T, EngineError> {
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(payload) => Err(EngineError::Panicked(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
