//! Two-pass template interpreter.
//!
//! [`Template::parse`] turns the source into a flat list of segments:
//! literal text, scalar substitutions, and at most one items loop whose body
//! is itself a segment list. [`Template::render`] walks that list and builds
//! the output string. Substituted values are appended, never re-scanned, so
//! a value that happens to contain `{{...}}` stays as written.
//!
//! ## Grammar
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `{{dotted.key}}` | scalar field, see [`Field`] |
//! | `{{#each items}}` ... `{{/each}}` | items loop |
//! | `{{#loop}}` ... `{{/loop}}` | items loop, short form |
//! | `{{this.key}}` | item field inside the loop, see [`ItemField`] |
//! | `{{#if @even}}CLASS{{/if}}` | `CLASS` on rows 0, 2, 4, ..., blank otherwise |
//!
//! The value of `--accent` in a `:root` rule is a slot of its own, filled
//! with the brand color (see [`accent`](super::accent)).
//!
//! Anything else between braces is copied through verbatim. A loop begin
//! marker with no matching end marker is also copied through verbatim and
//! parsing carries on after it.

use std::ops::Range;
use tracing::debug;

use super::accent::accent_values;
use super::keys::{Field, ItemField};
use crate::invoice::{DEFAULT_BRAND_COLOR, InvoiceData, InvoiceItem};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Loop begin markers and the end marker each one pairs with.
pub const LOOP_MARKERS: [(&str, &str); 2] = [
    ("{{#each items}}", "{{/each}}"),
    ("{{#loop}}", "{{/loop}}"),
];

const EVEN_OPEN: &str = "{{#if @even}}";
const EVEN_CLOSE: &str = "{{/if}}";

/// Top-level instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'t> {
    Text(&'t str),
    Field(Field),
    /// The `--accent` value of a `:root` rule.
    Accent,
    /// Expand the body once per item.
    Each(Vec<RowSegment<'t>>),
}

/// Instruction inside the items loop body.
#[derive(Debug, Clone, PartialEq)]
pub enum RowSegment<'t> {
    Text(&'t str),
    Field(Field),
    Item(ItemField),
    Accent,
    /// Emitted only on even rows (zero-based).
    IfEven(&'t str),
}

/// A parsed template, borrowing its literal text from the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Template<'t> {
    segments: Vec<Segment<'t>>,
    source_len: usize,
}

impl<'t> Template<'t> {
    /// Tokenize a template. Never fails.
    pub fn parse(source: &'t str) -> Self {
        let accents = accent_values(source);
        let mut has_loop = false;

        let segments = tokenize(
            source,
            &accents,
            Segment::Text,
            || Segment::Accent,
            |src, start| {
                if !has_loop && let Some((body, end)) = loop_span(src, start) {
                    has_loop = true;
                    let rows = tokenize(
                        &src[body.clone()],
                        &within(&accents, &body),
                        RowSegment::Text,
                        || RowSegment::Accent,
                        row_directive,
                    );
                    return Some((Segment::Each(rows), end));
                }
                field_at(src, start).map(|(field, end)| (Segment::Field(field), end))
            },
        );

        Template {
            segments,
            source_len: source.len(),
        }
    }

    pub fn segments(&self) -> &[Segment<'t>] {
        &self.segments
    }

    /// Whether an items loop was found.
    pub fn has_loop(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Each(_)))
    }

    /// Execute the segment list against one invoice.
    pub fn render(&self, data: &InvoiceData) -> String {
        let mut out = String::with_capacity(self.source_len);

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(field.resolve(data)),
                Segment::Accent => out.push_str(brand_color(data)),
                Segment::Each(body) => {
                    for (index, item) in data.items.iter().enumerate() {
                        render_row(body, data, index, item, &mut out);
                    }
                }
            }
        }
        out
    }
}

fn render_row(
    body: &[RowSegment<'_>],
    data: &InvoiceData,
    index: usize,
    item: &InvoiceItem,
    out: &mut String,
) {
    for segment in body {
        match segment {
            RowSegment::Text(text) => out.push_str(text),
            RowSegment::Field(field) => out.push_str(field.resolve(data)),
            RowSegment::Item(field) => field.write(item, out),
            RowSegment::Accent => out.push_str(brand_color(data)),
            RowSegment::IfEven(class) => {
                if index % 2 == 0 {
                    out.push_str(class);
                }
            }
        }
    }
}

fn brand_color(data: &InvoiceData) -> &str {
    match data.business.brand_color.trim() {
        "" => DEFAULT_BRAND_COLOR,
        color => color,
    }
}

/// Split `src` into literal runs, accent slots and recognized directives.
///
/// `accents` are the sorted `--accent` value ranges of `src`; each becomes
/// one `accent()` segment. `directive(src, start)` is called at every other
/// `{{`; it returns the segment and the byte offset just past it, or `None`
/// to keep scanning from the next byte.
fn tokenize<'t, S>(
    src: &'t str,
    accents: &[Range<usize>],
    text: fn(&'t str) -> S,
    accent: fn() -> S,
    mut directive: impl FnMut(&'t str, usize) -> Option<(S, usize)>,
) -> Vec<S> {
    let mut segments = Vec::new();
    let mut accents = accents.iter().peekable();
    let mut literal_start = 0;
    let mut pos = 0;

    loop {
        // Slots swallowed by a loop body are handled by the body's own pass
        while accents.next_if(|span| span.start < pos).is_some() {}

        let open = src[pos..].find(OPEN).map(|offset| pos + offset);
        let accent_first = match (accents.peek(), open) {
            (Some(span), Some(open)) => span.start <= open,
            (Some(_), None) => true,
            (None, _) => false,
        };

        let (start, found) = if accent_first && let Some(span) = accents.next() {
            (span.start, Some((accent(), span.end)))
        } else if let Some(start) = open {
            (start, directive(src, start))
        } else {
            break;
        };

        match found {
            Some((segment, end)) => {
                if literal_start < start {
                    segments.push(text(&src[literal_start..start]));
                }
                segments.push(segment);
                pos = end;
                literal_start = end;
            }
            None => pos = start + 1,
        }
    }

    if literal_start < src.len() {
        segments.push(text(&src[literal_start..]));
    }
    segments
}

/// The ranges of `accents` lying inside `outer`, relative to its start.
fn within(accents: &[Range<usize>], outer: &Range<usize>) -> Vec<Range<usize>> {
    accents
        .iter()
        .filter(|span| outer.start <= span.start && span.end <= outer.end)
        .map(|span| span.start - outer.start..span.end - outer.start)
        .collect()
}

fn row_directive(src: &str, start: usize) -> Option<(RowSegment<'_>, usize)> {
    let tail = &src[start..];

    if let Some(rest) = tail.strip_prefix(EVEN_OPEN) {
        if let Some(len) = rest.find(EVEN_CLOSE) {
            let class_start = start + EVEN_OPEN.len();
            return Some((
                RowSegment::IfEven(&src[class_start..class_start + len]),
                class_start + len + EVEN_CLOSE.len(),
            ));
        }
        return None;
    }

    let key = placeholder_key(tail)?;
    let end = start + OPEN.len() + key.len() + CLOSE.len();
    if let Some(field) = ItemField::from_key(key) {
        return Some((RowSegment::Item(field), end));
    }
    Field::from_key(key).map(|field| (RowSegment::Field(field), end))
}

fn field_at(src: &str, start: usize) -> Option<(Field, usize)> {
    let key = placeholder_key(&src[start..])?;
    let field = Field::from_key(key)?;
    Some((field, start + OPEN.len() + key.len() + CLOSE.len()))
}

/// The text between `{{` and the next `}}`.
fn placeholder_key(tail: &str) -> Option<&str> {
    let inner = tail.strip_prefix(OPEN)?;
    inner.find(CLOSE).map(|len| &inner[..len])
}

/// A loop begin marker at `start`: the body's range and the offset past the
/// end marker.
fn loop_span(src: &str, start: usize) -> Option<(Range<usize>, usize)> {
    let tail = &src[start..];
    let (begin, end_marker) = LOOP_MARKERS
        .iter()
        .find(|(begin, _)| tail.starts_with(begin))?;

    let body_start = start + begin.len();
    match src[body_start..].find(end_marker) {
        Some(len) => Some((
            body_start..body_start + len,
            body_start + len + end_marker.len(),
        )),
        None => {
            debug!(
                "loop marker {} at byte {} has no {}; leaving it as text",
                begin, start, end_marker
            );
            None
        }
    }
}
