//! [`SelectorEngine`] backed by the `visdom` crate

use std::cell::RefCell;
use std::rc::Rc;

use visdom::types::{BoxDynError, Elements};
use visdom::Vis;

use super::SelectorEngine;
use crate::error::EngineError;

/// A document parsed by visdom
pub struct VisdomDocument {
    root: Elements<'static>,
}

/// visdom reports parse and selector errors through a document-level
/// callback rather than return values. Every document parsed by one engine
/// reports into the same sink, which is drained around each call.
#[derive(Debug, Default, Clone)]
pub struct VisdomEngine {
    errors: Rc<RefCell<Vec<String>>>,
}

impl VisdomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn drain_errors(&self) -> Option<String> {
        let mut errors = self.errors.borrow_mut();
        if errors.is_empty() {
            None
        } else {
            Some(errors.drain(..).collect::<Vec<_>>().join("; "))
        }
    }

    fn checked(
        &self,
        selector: &str,
        call: impl FnOnce() -> Elements<'static>,
    ) -> Result<Elements<'static>, EngineError> {
        self.errors.borrow_mut().clear();
        let selection = call();
        match self.drain_errors() {
            Some(message) => Err(EngineError::Selector {
                selector: selector.to_string(),
                message,
            }),
            None => Ok(selection),
        }
    }
}

impl SelectorEngine for VisdomEngine {
    type Document = VisdomDocument;
    type Selection = Elements<'static>;

    fn name(&self) -> &'static str {
        "visdom"
    }

    fn parse_document(&self, markup: &str) -> Result<Self::Document, EngineError> {
        self.errors.borrow_mut().clear();
        let sink = Rc::clone(&self.errors);
        let root = Vis::load_catch(
            markup.to_string(),
            Box::new(move |err: BoxDynError| sink.borrow_mut().push(err.to_string())),
        );
        match self.drain_errors() {
            Some(message) => Err(EngineError::Parse(message)),
            None => Ok(VisdomDocument { root }),
        }
    }

    fn root<'d>(&self, document: &'d Self::Document) -> &'d Self::Selection {
        &document.root
    }

    fn query_children(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError> {
        self.checked(selector, || scope.children(selector))
    }

    fn query_descendants(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError> {
        self.checked(selector, || scope.find(selector))
    }

    fn previous_sibling(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError> {
        self.checked(selector, || scope.prev(selector))
    }

    fn all_previous_siblings(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError> {
        self.checked(selector, || scope.prev_all(selector))
    }

    fn next_sibling(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError> {
        self.checked(selector, || scope.next(selector))
    }

    fn all_next_siblings(
        &self,
        scope: &Self::Selection,
        selector: &str,
    ) -> Result<Self::Selection, EngineError> {
        self.checked(selector, || scope.next_all(selector))
    }

    fn count(&self, selection: &Self::Selection) -> usize {
        selection.length()
    }
}
