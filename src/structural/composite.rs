//! Composite: shapes and groups of shapes treated uniformly.
//!
//! A [`Group`] owns its children by value. A child is moved into its parent
//! on [`Group::add`], so a group can never end up containing itself, directly
//! or through a descendant, and rendering always terminates.

use std::fmt;

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

/// Default separator between the renders of a group's children.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Uniform capability of every node in the hierarchy.
pub trait Render {
    fn render(&self) -> String;
}

/// Leaf node: a single named shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    name: String,
}

impl Shape {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Render for Shape {
    fn render(&self) -> String {
        format!("Drawing {}", self.name)
    }
}

/// Composite node: an ordered, append-only list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: Option<String>,
    separator: String,
    children: Vec<Graphic>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            name: None,
            separator: separator.into(),
            children: Vec::new(),
        }
    }

    /// Attach a display name. Only the tree view uses it; `render` is unaffected.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Append a child. Insertion order is render order.
    pub fn add(&mut self, child: impl Into<Graphic>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    pub fn children(&self) -> &[Graphic] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Hierarchy view for terminal display.
    #[instrument(level = "trace", skip(self))]
    pub fn to_tree(&self) -> Tree<String> {
        let label = self.name.clone().unwrap_or_else(|| "Shape group".to_string());
        let leaves: Vec<Tree<String>> = self.children.iter().map(Graphic::to_tree).collect();
        Tree::new(label).with_leaves(leaves)
    }
}

impl Render for Group {
    #[instrument(level = "trace", skip(self), fields(children = self.children.len()))]
    fn render(&self) -> String {
        self.children
            .iter()
            .map(Render::render)
            .join(&self.separator)
    }
}

/// Either a leaf or a composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Graphic {
    Shape(Shape),
    Group(Group),
}

impl Graphic {
    pub fn to_tree(&self) -> Tree<String> {
        match self {
            Graphic::Shape(shape) => Tree::new(shape.name().to_string()),
            Graphic::Group(group) => group.to_tree(),
        }
    }
}

impl Render for Graphic {
    fn render(&self) -> String {
        match self {
            Graphic::Shape(shape) => shape.render(),
            Graphic::Group(group) => group.render(),
        }
    }
}

impl From<Shape> for Graphic {
    fn from(shape: Shape) -> Self {
        Graphic::Shape(shape)
    }
}

impl From<Group> for Graphic {
    fn from(group: Group) -> Self {
        Graphic::Group(group)
    }
}

impl fmt::Display for Graphic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Group {
        let mut first = Group::new();
        first.add(Shape::new("Circle")).add(Shape::new("Square"));
        let mut second = Group::new();
        second.add(Shape::new("Triangle"));
        let mut all = Group::new().named("All shapes");
        all.add(first).add(second);
        all
    }

    #[test]
    fn given_empty_group_when_rendering_then_returns_empty_string() {
        assert_eq!(Group::new().render(), "");
    }

    #[test]
    fn given_two_leaves_when_rendering_then_keeps_insertion_order() {
        let mut group = Group::new();
        group.add(Shape::new("A")).add(Shape::new("B"));

        assert_eq!(group.render(), "Drawing A\nDrawing B");
        assert_eq!(group.render(), group.render());
    }

    #[test]
    fn given_nested_groups_when_rendering_then_equals_join_of_children() {
        let all = sample();
        let expected = all
            .children()
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join("\n");

        assert_eq!(all.render(), expected);
        assert_eq!(all.render(), "Drawing Circle\nDrawing Square\nDrawing Triangle");
    }

    #[test]
    fn given_custom_separator_when_rendering_then_uses_it() {
        let mut group = Group::with_separator(" | ");
        group.add(Shape::new("A")).add(Shape::new("B"));
        assert_eq!(group.render(), "Drawing A | Drawing B");
    }

    #[test]
    fn given_group_when_converting_to_tree_then_mirrors_hierarchy() {
        let tree = sample().to_tree().to_string();
        assert!(tree.starts_with("All shapes"));
        assert!(tree.contains("Circle"));
        assert!(tree.contains("Triangle"));
    }
}
