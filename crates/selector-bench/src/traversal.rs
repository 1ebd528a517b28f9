//! Traversal primitives
//!
//! Each query case names one of these. They only choose which engine call
//! to make; counting is done on whatever the engine returns.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::SelectorEngine;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// Selector applied to the immediate children of the scope
    Children,
    /// Selector applied to the whole subtree under the scope
    Descendants,
    PreviousSibling,
    AllPreviousSiblings,
    NextSibling,
    AllNextSiblings,
}

impl Traversal {
    pub const ALL: [Traversal; 6] = [
        Traversal::Children,
        Traversal::Descendants,
        Traversal::PreviousSibling,
        Traversal::AllPreviousSiblings,
        Traversal::NextSibling,
        Traversal::AllNextSiblings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Traversal::Children => "children",
            Traversal::Descendants => "descendants",
            Traversal::PreviousSibling => "previous_sibling",
            Traversal::AllPreviousSiblings => "all_previous_siblings",
            Traversal::NextSibling => "next_sibling",
            Traversal::AllNextSiblings => "all_next_siblings",
        }
    }

    /// Run the traversal and return the engine's selection
    pub fn select<E: SelectorEngine>(
        &self,
        engine: &E,
        scope: &E::Selection,
        selector: &str,
    ) -> Result<E::Selection, EngineError> {
        match self {
            Traversal::Children => engine.query_children(scope, selector),
            Traversal::Descendants => engine.query_descendants(scope, selector),
            Traversal::PreviousSibling => engine.previous_sibling(scope, selector),
            Traversal::AllPreviousSiblings => engine.all_previous_siblings(scope, selector),
            Traversal::NextSibling => engine.next_sibling(scope, selector),
            Traversal::AllNextSiblings => engine.all_next_siblings(scope, selector),
        }
    }

    /// Run the traversal and count the matches
    pub fn count<E: SelectorEngine>(
        &self,
        engine: &E,
        scope: &E::Selection,
        selector: &str,
    ) -> Result<usize, EngineError> {
        self.select(engine, scope, selector)
            .map(|selection| engine.count(&selection))
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
