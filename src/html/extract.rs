//! Section HTML to line sequence.
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::pipelines::types::Line;

lazy_static! {
    static ref BODY: Selector = Selector::parse("body").unwrap();
}

/// Flatten one section into a line sequence.
///
/// Every descendant element of `<body>` is visited in document order.
/// An element whose `class` attribute contains `main_class` contributes
/// its trimmed, flattened text; every other element contributes a
/// [Line::Break]: headers, footnotes and captions all become structural
/// breaks. A trailing break is always appended, so the output is never
/// empty.
///
/// With `main_class == None` (book without any class attributes), the
/// direct children of `<body>` are all treated as body text instead.
pub fn extract_lines(html: &str, main_class: Option<&str>) -> Vec<Line> {
    let doc = Html::parse_document(html);
    let scope = doc
        .select(&BODY)
        .next()
        .unwrap_or_else(|| doc.root_element());

    let mut lines = Vec::new();
    match main_class {
        Some(class) => {
            // skip(1): the scope element itself is not a candidate.
            for node in scope.descendants().skip(1) {
                let el = match ElementRef::wrap(node) {
                    Some(el) => el,
                    None => continue,
                };
                if el.value().classes().any(|c| c == class) {
                    push_text(el, &mut lines);
                } else {
                    lines.push(Line::Break);
                }
            }
        }
        // top-level elements only, so nested markup is not emitted twice
        None => {
            for el in scope.children().filter_map(ElementRef::wrap) {
                push_text(el, &mut lines);
            }
        }
    }

    lines.push(Line::Break);
    lines
}

fn push_text(el: ElementRef, lines: &mut Vec<Line>) {
    let text: String = el.text().collect();
    let text = text.trim();
    if !text.is_empty() {
        lines.push(Line::text(text));
    }
}

#[cfg(test)]
mod tests {
    use super::extract_lines;
    use crate::pipelines::types::Line;

    #[test]
    fn main_class_text_and_breaks() {
        let html = r#"<html><body>
            <h1 class="title">Гарчиг</h1>
            <div class="calibre2">Нэгдүгээр мөр</div>
            <p></p>
            <div class="calibre2">хоёрдугаар мөр</div>
        </body></html>"#;
        let lines = extract_lines(html, Some("calibre2"));
        assert_eq!(
            lines,
            vec![
                Line::Break,
                Line::text("Нэгдүгээр мөр"),
                Line::Break,
                Line::text("хоёрдугаар мөр"),
                Line::Break,
            ]
        );
    }

    #[test]
    fn flattens_nested_markup() {
        let html = r#"<body><div class="calibre2">Сайн <i>байна</i> уу</div></body>"#;
        let lines = extract_lines(html, Some("calibre2"));
        // the <i> itself also shows up, as a break
        assert_eq!(
            lines,
            vec![Line::text("Сайн байна уу"), Line::Break, Line::Break]
        );
    }

    #[test]
    fn empty_main_class_text_is_skipped() {
        let html = r#"<body><div class="calibre2">   </div></body>"#;
        assert_eq!(extract_lines(html, Some("calibre2")), vec![Line::Break]);
    }

    #[test]
    fn always_ends_with_a_break() {
        assert_eq!(extract_lines("<body></body>", Some("x")), vec![Line::Break]);
        assert_eq!(extract_lines("", Some("x")), vec![Line::Break]);
    }

    #[test]
    fn no_main_class_keeps_every_text_element() {
        let html = "<body><p>Нэг мөр</p><p>Хоёр мөр</p></body>";
        let lines = extract_lines(html, None);
        assert_eq!(
            lines,
            vec![Line::text("Нэг мөр"), Line::text("Хоёр мөр"), Line::Break]
        );
    }
}
