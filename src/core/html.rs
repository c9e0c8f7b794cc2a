// src/core/html.rs
//! Row source over a rendered page snapshot (`scraper` DOM).

use scraper::{ElementRef, Html};

use crate::config::consts::{BLOCK_TAGS, CLASS_MINOR};
use crate::core::sanitize::clean_lines;
use crate::error::LookupError;
use crate::source::{Cell, Row};

/// A parsed page known to contain the target table.
pub struct HtmlTable {
    doc: Html,
    table_id: String,
    line_classes: Vec<String>,
}

impl HtmlTable {
    /// Parse `page` and keep it if an element with id `table_id` exists.
    pub fn locate(page: &str, table_id: &str) -> Option<Self> {
        let doc = Html::parse_document(page);
        find_by_id(&doc, table_id)?;
        Some(Self {
            doc,
            table_id: s!(table_id),
            line_classes: vec![s!(CLASS_MINOR)],
        })
    }

    /// Classes whose elements render on their own line (default: `minor`).
    pub fn with_line_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.line_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Every `<tr>` of the table in document order, across all `<tbody>`s.
    /// Rows of tables nested inside cells are not included.
    pub fn rows(&self) -> Vec<HtmlRow<'_>> {
        let Some(table) = find_by_id(&self.doc, &self.table_id) else {
            return Vec::new();
        };
        table
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "tr")
            .filter(|el| nearest_table(*el) == Some(table))
            .map(|el| HtmlRow { el, line_classes: &self.line_classes })
            .collect()
    }
}

#[derive(Clone, Copy)]
pub struct HtmlRow<'a> {
    el: ElementRef<'a>,
    line_classes: &'a [String],
}

#[derive(Clone, Copy)]
pub struct HtmlCell<'a> {
    el: ElementRef<'a>,
    line_classes: &'a [String],
}

impl<'a> Row for HtmlRow<'a> {
    type Cell = HtmlCell<'a>;

    fn has_class(&self, class: &str) -> bool {
        has_class(self.el, class)
    }

    fn cells(&self, class: &str) -> Result<Vec<HtmlCell<'a>>, LookupError> {
        Ok(descendants_with_class(self.el, class)
            .map(|el| HtmlCell { el, line_classes: self.line_classes })
            .collect())
    }
}

impl Cell for HtmlCell<'_> {
    fn text(&self) -> String {
        rendered_text(self.el, self.line_classes)
    }

    fn find(&self, class: &str) -> Option<Self> {
        descendants_with_class(self.el, class)
            .next()
            .map(|el| HtmlCell { el, line_classes: self.line_classes })
    }
}

/* ---------------- helpers ---------------- */

fn find_by_id<'a>(doc: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().id() == Some(id))
}

fn nearest_table(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
}

fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

fn descendants_with_class<'a>(
    el: ElementRef<'a>,
    class: &str,
) -> impl Iterator<Item = ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |d| has_class(*d, class))
}

/// Approximates what a browser reports as the element's visible text:
/// `<br>`, block elements and line-class elements break lines.
pub fn rendered_text(el: ElementRef<'_>, line_classes: &[String]) -> String {
    let mut raw = String::new();
    render_into(el, line_classes, &mut raw);
    clean_lines(&raw).join("\n")
}

fn render_into(el: ElementRef<'_>, line_classes: &[String], out: &mut String) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child_el) = ElementRef::wrap(child) else { continue };
        let name = child_el.value().name();
        match name {
            "br" => out.push('\n'),
            "script" | "style" => {}
            _ => {
                let breaks = BLOCK_TAGS.contains(&name)
                    || child_el.value().classes().any(|c| line_classes.iter().any(|l| l == c));
                if breaks { out.push('\n'); }
                render_into(child_el, line_classes, out);
                if breaks { out.push('\n'); }
            }
        }
    }
}
