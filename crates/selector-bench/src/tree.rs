//! Deterministic synthetic tree generation
//!
//! Trees are a single container element (e.g. `ul` or `dl`) holding a flat
//! run of generated children. Children are either all the same tag
//! ([`Shape::Uniform`]) or cycle through two tags ([`Shape::Alternating`]).
//! [`Marker`]s annotate specific children with an id, class, attribute or
//! text so that a selector has something to find.
//!
//! Generation never uses randomness: identical parameters always produce
//! identical trees.
//!
//! # Example
//!
//! ```
//! use selector_bench::tree::{generate, Annotation, Marker, Placement, Shape};
//!
//! let tree = generate(
//!     "ul",
//!     &Shape::uniform("li"),
//!     3,
//!     &[Marker::new(Placement::Append, Annotation::Id("target".into()))],
//! )
//! .unwrap();
//!
//! assert_eq!(tree.child_count(), 4);
//! assert_eq!(
//!     tree.to_markup(),
//!     r#"<ul><li></li><li></li><li></li><li id="target"></li></ul>"#
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TreeError;

/// Layout of the generated children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Every child has the same tag
    Uniform { tag: String },
    /// Children alternate `first`, `second`, `first`, ... (e.g. `dt`/`dd` pairs)
    Alternating { first: String, second: String },
}

impl Shape {
    pub fn uniform(tag: impl Into<String>) -> Self {
        Shape::Uniform { tag: tag.into() }
    }

    pub fn alternating(first: impl Into<String>, second: impl Into<String>) -> Self {
        Shape::Alternating {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Short name used in error messages and logs
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Uniform { .. } => "uniform",
            Shape::Alternating { .. } => "alternating",
        }
    }

    /// Tag of the child at 0-based generation `index`
    pub fn tag_at(&self, index: usize) -> &str {
        match self {
            Shape::Uniform { tag } => tag,
            Shape::Alternating { first, second } => {
                if index % 2 == 0 {
                    first
                } else {
                    second
                }
            }
        }
    }

    /// Check that `count` children can be generated with this shape
    pub fn validate(&self, count: usize) -> Result<(), TreeError> {
        let invalid = |reason: &str| TreeError::InvalidShape {
            shape: self.name().to_string(),
            count,
            reason: reason.to_string(),
        };

        if count == 0 {
            return Err(invalid("at least one node is required"));
        }

        match self {
            Shape::Uniform { tag } if tag.is_empty() => Err(invalid("tag must not be empty")),
            Shape::Alternating { first, second } if first.is_empty() || second.is_empty() => {
                Err(invalid("tags must not be empty"))
            }
            Shape::Alternating { .. } if count % 2 != 0 => {
                Err(invalid("alternating shapes need an even node count"))
            }
            _ => Ok(()),
        }
    }
}

/// What a marker writes onto a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    Id(String),
    Class(String),
    Attribute {
        name: String,
        #[serde(default)]
        value: Option<String>,
    },
    Text(String),
}

/// Which generated nodes a marker applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// The node at a 0-based generation index
    At(usize),
    /// Every `period`-th node starting at 0-based `offset`
    Every { period: usize, offset: usize },
    /// One extra node appended after the generated run, continuing the shape
    Append,
}

/// An annotation bound to a placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub placement: Placement,
    pub annotation: Annotation,
}

impl Marker {
    pub fn new(placement: Placement, annotation: Annotation) -> Self {
        Self {
            placement,
            annotation,
        }
    }
}

/// A tree element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub tag: String,
    /// Attributes in insertion order; `None` renders a bare boolean attribute
    pub attributes: Vec<(String, Option<String>)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<Option<&str>> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref())
    }

    fn set_attribute(&mut self, name: &str, value: Option<String>) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    fn annotate(&mut self, annotation: &Annotation) {
        match annotation {
            Annotation::Id(id) => self.set_attribute("id", Some(id.clone())),
            Annotation::Class(class) => {
                let merged = match self.attribute("class").flatten() {
                    Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
                    _ => class.clone(),
                };
                self.set_attribute("class", Some(merged));
            }
            Annotation::Attribute { name, value } => self.set_attribute(name, value.clone()),
            Annotation::Text(text) => self.text = Some(text.clone()),
        }
    }

    fn write_markup(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                escape_into(out, value, true);
                out.push('"');
            }
        }
        out.push('>');
        if let Some(text) = &self.text {
            escape_into(out, text, false);
        }
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn escape_into(out: &mut String, raw: &str, attribute: bool) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// A generated tree: one container root and its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub root: Node,
    /// Total number of nodes, root included
    pub node_count: usize,
}

impl Tree {
    /// Number of direct children of the root
    pub fn child_count(&self) -> usize {
        self.root.children.len()
    }

    /// Render the tree as markup for the selector engine
    pub fn to_markup(&self) -> String {
        // "<li></li>" per node is a reasonable lower bound
        let mut out = String::with_capacity(self.node_count * 10);
        self.root.write_markup(&mut out);
        out
    }
}

/// Check that `shape`, `count` and `markers` describe a tree that can be
/// generated, without building it
pub fn check(shape: &Shape, count: usize, markers: &[Marker]) -> Result<(), TreeError> {
    shape.validate(count)?;

    for marker in markers {
        match &marker.placement {
            Placement::At(index) if *index >= count => {
                return Err(TreeError::MarkerOutOfRange {
                    index: *index,
                    count,
                });
            }
            Placement::Every { period: 0, .. } => {
                return Err(TreeError::InvalidMarker(
                    "period must be at least 1".to_string(),
                ));
            }
            _ => {}
        }
    }

    Ok(())
}

/// Generate a tree with `count` children of `shape` under a `container` root
///
/// Markers are applied in order; later markers win when they write the same
/// attribute or text. [`Placement::Append`] markers each add one node after
/// the generated run.
///
/// # Errors
///
/// Returns [`TreeError::InvalidShape`] when `count` does not fit `shape`
/// (zero, or odd for alternating shapes) and [`TreeError::MarkerOutOfRange`]
/// or [`TreeError::InvalidMarker`] for markers that cannot be placed.
pub fn generate(
    container: &str,
    shape: &Shape,
    count: usize,
    markers: &[Marker],
) -> Result<Tree, TreeError> {
    check(shape, count, markers)?;

    let mut children: Vec<Node> = (0..count).map(|i| Node::new(shape.tag_at(i))).collect();

    for marker in markers {
        match &marker.placement {
            Placement::At(index) => children[*index].annotate(&marker.annotation),
            Placement::Every { period, offset } => {
                for node in children.iter_mut().take(count).skip(*offset).step_by(*period) {
                    node.annotate(&marker.annotation);
                }
            }
            Placement::Append => {
                let mut node = Node::new(shape.tag_at(children.len()));
                node.annotate(&marker.annotation);
                children.push(node);
            }
        }
    }

    let node_count = children.len() + 1;
    let mut root = Node::new(container);
    root.children = children;

    Ok(Tree { root, node_count })
}
