//! Styled text trees.
//!
//! A [`Span`] is an immutable run of text with an optional color, a
//! tri-state bold flag and ordered children. Unset attributes inherit:
//! color from the nearest ancestor that sets one, bold from the parent's
//! already-resolved value, one level at a time. Resolution itself lives in
//! the renderer; this module only models the tree.

use image::Rgba;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    content: String,
    color: Option<Rgba<u8>>,
    bold: Option<bool>,
    children: Vec<Span>,
}

impl Span {
    /// A plain run with no style of its own.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            color: None,
            bold: None,
            children: Vec::new(),
        }
    }

    /// A run with an explicit color.
    pub fn colored(content: impl Into<String>, color: Rgba<u8>) -> Self {
        Self::text(content).color(color)
    }

    /// The empty run: no content, no children, no style.
    pub fn empty() -> Self {
        Self::text("")
    }

    pub fn color(mut self, color: Rgba<u8>) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Appends a child run; children render left to right after the
    /// node's own content.
    pub fn child(mut self, child: Span) -> Self {
        self.children.push(child);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn color_value(&self) -> Option<Rgba<u8>> {
        self.color
    }

    pub fn bold_value(&self) -> Option<bool> {
        self.bold
    }

    pub fn children(&self) -> &[Span] {
        &self.children
    }

    /// True when the whole tree carries no text at all.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.children.iter().all(Span::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;

    #[test]
    fn plain_span_has_no_style() {
        let span = Span::text("hello");
        assert_eq!(span.content(), "hello");
        assert_eq!(span.color_value(), None);
        assert_eq!(span.bold_value(), None);
        assert!(span.children().is_empty());
    }

    #[test]
    fn builders_compose() {
        let span = Span::colored("rank ", palette::GOLD)
            .bold(true)
            .child(Span::text("name"));
        assert_eq!(span.color_value(), Some(palette::GOLD));
        assert_eq!(span.bold_value(), Some(true));
        assert_eq!(span.children().len(), 1);
    }

    #[test]
    fn emptiness_looks_through_children() {
        assert!(Span::empty().is_empty());
        assert!(Span::text("").child(Span::text("")).is_empty());
        assert!(!Span::text("").child(Span::text("x")).is_empty());
    }
}
