use std::{borrow::Cow, ops::ControlFlow};

use cocomo_scan_domain::{Accumulator, ScanProfile, model::tags};
use cocomo_scan_shared_kernel::LineCount;
use roxmltree::{Document, Node, ParsingOptions};

use super::line_based::{physical_lines, record_keywords};

/// Attribute marking an element as inherited from a template.
pub const TEMPLATE_ATTRIBUTE: &str = "fromtemplate";
/// Lines of embedded code starting with this are comments.
const COMMENT_MARKER: char = '\'';
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Parse a markup document. DTDs are accepted but external entities are never loaded.
pub fn parse_document(text: &str) -> Result<Document<'_>, roxmltree::Error> {
    let options = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
    Document::parse_with_options(text, options)
}

/// Counts element occurrences of one parsed document.
pub struct StructuralCounter<'a> {
    profile: &'a ScanProfile,
    extension: &'a str,
}

impl<'a> StructuralCounter<'a> {
    pub fn new(profile: &'a ScanProfile, extension: &'a str) -> Self {
        Self { profile, extension }
    }

    /// Walks the children of the root element; the root element itself is not counted.
    pub fn count_document(&self, document: &Document<'_>, acc: &mut dyn Accumulator) {
        self.count_children(document.root_element(), acc);
    }

    /// A template reference ends the walk over its remaining siblings.
    fn count_children(&self, parent: Node<'_, '_>, acc: &mut dyn Accumulator) {
        for child in parent.children().filter(Node::is_element) {
            if self.count_element(child, acc).is_break() {
                return;
            }
        }
    }

    fn count_element(&self, node: Node<'_, '_>, acc: &mut dyn Accumulator) -> ControlFlow<()> {
        if let Some(template) = template_id(node) {
            acc.bump(&tags::template(template));
            return ControlFlow::Break(());
        }

        let name = qualified_name(node);
        acc.bump(&name);
        acc.bump(&tags::node_by_extension(self.extension, &name));

        if self.profile.is_code_bearing(&name) {
            self.count_embedded_code(node, &name, acc);
        }

        self.count_children(node, acc);
        ControlFlow::Continue(())
    }

    /// Lines of code held by the direct text children of `node`. CDATA sections are not text.
    fn count_embedded_code(&self, node: Node<'_, '_>, name: &str, acc: &mut dyn Accumulator) {
        let mut lines = LineCount::zero();
        for text in node.children().filter(Node::is_text).filter_map(text_outside_cdata) {
            for line in physical_lines(&text) {
                let work = line.trim().to_lowercase();
                if work.is_empty() || work.starts_with(COMMENT_MARKER) {
                    continue;
                }
                record_keywords(&work, self.profile, acc);
                lines.bump();
            }
        }
        acc.add(tags::LOC, lines.value());
        acc.add(&tags::loc(name), lines.value());
    }
}

/// Text of a text node with any CDATA sections cut out.
///
/// The parser merges CDATA and neighbouring text into one node whose range only
/// covers the first piece, so the node's source is taken up to the next sibling
/// or the parent's end tag.
fn text_outside_cdata<'a, 'input: 'a>(node: Node<'a, 'input>) -> Option<Cow<'a, str>> {
    let text = node.text()?;
    let input: &'a str = node.document().input_text();
    let start = node.range().start;
    let end = match node.next_sibling() {
        Some(next) => next.range().start,
        None => node.parent().map_or(start, |parent| {
            let range = parent.range();
            input.get(range.clone()).and_then(|source| source.rfind("</")).map_or(start, |pos| range.start + pos)
        }),
    };
    let source = input.get(start..end).unwrap_or_default();
    if !source.contains(CDATA_OPEN) {
        return Some(Cow::Borrowed(text));
    }

    let mut kept = String::new();
    let mut rest = source;
    while let Some(open) = rest.find(CDATA_OPEN) {
        kept.push_str(&rest[..open]);
        let section = &rest[open + CDATA_OPEN.len()..];
        rest = section.find(CDATA_CLOSE).map_or("", |close| &section[close + CDATA_CLOSE.len()..]);
    }
    kept.push_str(rest);
    Some(Cow::Owned(kept))
}

/// Template id when the element carries a non-blank template attribute.
fn template_id<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute(TEMPLATE_ATTRIBUTE).filter(|id| !id.trim().is_empty())
}

/// `prefix:local` for prefixed elements, the local name otherwise.
fn qualified_name(node: Node<'_, '_>) -> String {
    let tag = node.tag_name();
    let prefix = tag.namespace().and_then(|uri| node.lookup_prefix(uri)).filter(|p| !p.is_empty());
    match prefix {
        Some(prefix) => format!("{prefix}:{}", tag.name()),
        None => tag.name().to_string(),
    }
}
