//! Query case descriptors and case selection

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::traversal::Traversal;
use crate::tree::{self, Marker, Shape, Tree};

/// One benchmark unit: a tree recipe, a scope, a selector and a traversal
///
/// Cases are plain data. They are defined once (see [`crate::catalogue`] or
/// the `[[cases]]` table of a config file) and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCase {
    /// Unique name, used by the selection filter
    pub name: String,
    /// Tag of the generated root element
    pub container: String,
    pub shape: Shape,
    #[serde(default)]
    pub markers: Vec<Marker>,
    /// Overrides the run-wide node count for this case
    #[serde(default)]
    pub node_count: Option<usize>,
    /// Selector resolved once against the document to find the scope nodes
    pub scope: String,
    /// Selector under measurement
    pub selector: String,
    pub traversal: Traversal,
}

impl QueryCase {
    pub fn new(
        name: impl Into<String>,
        container: impl Into<String>,
        shape: Shape,
        scope: impl Into<String>,
        selector: impl Into<String>,
        traversal: Traversal,
    ) -> Self {
        Self {
            name: name.into(),
            container: container.into(),
            shape,
            markers: Vec::new(),
            node_count: None,
            scope: scope.into(),
            selector: selector.into(),
            traversal,
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = Some(node_count);
        self
    }

    /// Node count used for this case given the run-wide default
    pub fn effective_node_count(&self, default: usize) -> usize {
        self.node_count.unwrap_or(default)
    }

    /// Check the tree recipe without generating it
    pub fn validate(&self, default_node_count: usize) -> Result<(), TreeError> {
        tree::check(
            &self.shape,
            self.effective_node_count(default_node_count),
            &self.markers,
        )
    }

    /// Generate a fresh tree for one execution of this case
    pub fn build_tree(&self, default_node_count: usize) -> Result<Tree, TreeError> {
        tree::generate(
            &self.container,
            &self.shape,
            self.effective_node_count(default_node_count),
            &self.markers,
        )
    }
}

/// Which cases of a catalogue to run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaseFilter {
    #[default]
    All,
    /// Only the named cases; an empty list selects nothing
    Named(Vec<String>),
}

impl CaseFilter {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CaseFilter::Named(names.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            CaseFilter::All => true,
            CaseFilter::Named(names) => names.iter().any(|n| n == name),
        }
    }

    /// Selected cases in catalogue order
    pub fn apply<'a>(&self, cases: &'a [QueryCase]) -> Vec<&'a QueryCase> {
        cases.iter().filter(|case| self.matches(&case.name)).collect()
    }

    /// Requested names that do not exist in `cases`
    pub fn unknown_names<'a>(&'a self, cases: &[QueryCase]) -> Vec<&'a str> {
        match self {
            CaseFilter::All => Vec::new(),
            CaseFilter::Named(names) => names
                .iter()
                .filter(|name| !cases.iter().any(|case| &case.name == *name))
                .map(String::as_str)
                .collect(),
        }
    }
}
