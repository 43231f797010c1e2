//! Class-name extraction from CSS and HTML sources.
//!
//! CSS extraction is tokenizer-driven: a class name is an identifier token
//! immediately following a `.` delimiter at the top level of a selector
//! prelude. Tokens inside strings, functions (`:not(...)`), attribute
//! brackets, and declaration blocks are never selector-top-level, so a `.`
//! there contributes nothing. At-rule bodies (`@media`, `@supports`) are
//! recursed into as nested rule lists.
//!
//! HTML extraction streams the document once, unioning every whitespace
//! separated `class` attribute token with the CSS extraction of every
//! inline `<style>` block.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeSet;

use cssparser::{Parser, ParserInput, Token};
use lol_html::{element, rewrite_str, text, RewriteStrSettings};

use crate::errors::ClassveilError;

/// Extracts the set of class names referenced by class selectors in `css`.
///
/// The tokenizer recovers from malformed input on its own, so this never
/// fails; garbage in simply yields fewer names.
pub fn extract_classes_from_css(css: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    scan_rule_list(&mut parser, &mut classes);
    classes
}

/// Walks one rule list, collecting class names from selector preludes.
///
/// A prelude's candidates are committed only when the prelude actually
/// terminates in a `{}` block; an at-rule prelude contributes nothing and
/// its block, if any, is scanned as a nested rule list.
fn scan_rule_list<'i>(parser: &mut Parser<'i, '_>, classes: &mut BTreeSet<String>) {
    let mut prelude_classes: Vec<String> = Vec::new();
    let mut in_at_rule = false;
    let mut after_dot = false;

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::AtKeyword(_) => {
                in_at_rule = true;
                prelude_classes.clear();
                after_dot = false;
            }
            Token::CurlyBracketBlock => {
                if in_at_rule {
                    let _ = parser.parse_nested_block(|nested| {
                        scan_rule_list(nested, classes);
                        Ok::<(), cssparser::ParseError<'i, ()>>(())
                    });
                } else {
                    classes.extend(prelude_classes.drain(..));
                }
                prelude_classes.clear();
                in_at_rule = false;
                after_dot = false;
            }
            Token::Semicolon => {
                // Ends a block-less at-rule (@import, @charset).
                prelude_classes.clear();
                in_at_rule = false;
                after_dot = false;
            }
            Token::Delim('.') => {
                after_dot = true;
            }
            Token::Ident(name) => {
                if after_dot && !in_at_rule {
                    prelude_classes.push(name.as_ref().to_owned());
                }
                after_dot = false;
            }
            _ => {
                after_dot = false;
            }
        }
    }
}

/// Extracts every class name referenced by an HTML document: `class`
/// attribute tokens plus class selectors inside inline `<style>` blocks.
pub fn extract_classes_from_html(html: &str) -> Result<BTreeSet<String>, ClassveilError> {
    let mut classes = BTreeSet::new();
    let mut style_classes = BTreeSet::new();
    let mut style_buffer = String::new();

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("[class]", |el| {
                    if let Some(value) = el.get_attribute("class") {
                        classes.extend(value.split_whitespace().map(str::to_owned));
                    }
                    Ok(())
                }),
                // Style text can arrive in several chunks; the CSS extractor
                // needs the whole text node at once.
                text!("style", |chunk| {
                    style_buffer.push_str(chunk.as_str());
                    if chunk.last_in_text_node() {
                        style_classes.extend(extract_classes_from_css(&style_buffer));
                        style_buffer.clear();
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| ClassveilError::HtmlRewrite(e.to_string()))?;

    classes.extend(style_classes);
    Ok(classes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn css_classes(css: &str) -> Vec<String> {
        extract_classes_from_css(css).into_iter().collect()
    }

    #[test]
    fn extracts_simple_class_selector() {
        assert_eq!(css_classes(".btn{color:red}"), ["btn"]);
    }

    #[test]
    fn extracts_compound_and_descendant_selectors() {
        assert_eq!(css_classes(".a.b{}"), ["a", "b"]);
        assert_eq!(css_classes("div.card p{}"), ["card"]);
    }

    #[test]
    fn pseudo_classes_are_not_class_names() {
        assert_eq!(css_classes(".link:hover{}"), ["link"]);
        assert_eq!(css_classes(":root{}"), Vec::<String>::new());
    }

    #[test]
    fn functional_selectors_are_not_top_level() {
        // The original behavior: arguments of :not() are a nested block,
        // not part of the flat prelude.
        assert_eq!(css_classes("p:not(.hidden){}"), Vec::<String>::new());
    }

    #[test]
    fn declaration_values_are_ignored() {
        assert_eq!(css_classes("p{margin:.5em}"), Vec::<String>::new());
        assert_eq!(css_classes("p{content:\".fake\"}"), Vec::<String>::new());
        assert_eq!(
            css_classes("p{background:url(.assets/bg.png)}"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn attribute_selectors_and_comments_are_ignored() {
        assert_eq!(css_classes("[class=\".x\"]{}"), Vec::<String>::new());
        assert_eq!(css_classes("/* .fake */ .real{}"), ["real"]);
    }

    #[test]
    fn at_rule_bodies_are_scanned_as_rule_lists() {
        assert_eq!(css_classes("@media screen{.m{}}"), ["m"]);
        assert_eq!(
            css_classes("@supports (display:grid){@media print{.deep{}}}"),
            ["deep"]
        );
        // Block-less at-rules end at the semicolon.
        assert_eq!(css_classes("@import url(\"x.css\");.after{}"), ["after"]);
    }

    #[test]
    fn malformed_css_degrades_instead_of_failing() {
        assert_eq!(css_classes(".a { color: red"), ["a"]);
        assert_eq!(css_classes("}} .b{}"), ["b"]);
    }

    #[test]
    fn extracts_class_attribute_tokens() {
        let html = r#"<div class="btn primary"><span class="btn"></span></div>"#;
        let classes = extract_classes_from_html(html).unwrap();
        assert_eq!(classes.into_iter().collect::<Vec<_>>(), ["btn", "primary"]);
    }

    #[test]
    fn extracts_classes_from_inline_style_blocks() {
        let html = "<style>.boxed{border:1px solid}</style><p class=\"note\">hi</p>";
        let classes = extract_classes_from_html(html).unwrap();
        assert_eq!(classes.into_iter().collect::<Vec<_>>(), ["boxed", "note"]);
    }

    #[test]
    fn malformed_html_still_yields_what_it_can() {
        let html = "<div class=\"one\"><p class=\"two\">unclosed";
        let classes = extract_classes_from_html(html).unwrap();
        assert_eq!(classes.into_iter().collect::<Vec<_>>(), ["one", "two"]);
    }
}
