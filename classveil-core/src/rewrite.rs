//! Applies a mapping set to CSS and HTML content.
//!
//! CSS rewriting is regex-driven: one compiled pattern per mapping, applied
//! strictly in the order the mapping builder produced (longest original
//! first). HTML rewriting streams the document so attribute order and
//! document shape survive untouched; only class tokens, stylesheet href
//! basenames, and inline `<style>` text change.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;
use lol_html::html_content::ContentType;
use lol_html::{element, rewrite_str, text, RewriteStrSettings};
use regex::{Captures, Regex};

use crate::errors::ClassveilError;
use crate::mapping::ClassMapping;

/// One mapping with its compiled selector pattern.
#[derive(Debug)]
pub struct CompiledMapping {
    /// Matches `.` followed by the escaped original name. The identifier
    /// boundary after the match is checked against the haystack instead of
    /// being part of the pattern, so adjacent occurrences (`.a.a`) all match.
    selector: Regex,
    pub original: String,
    pub obfuscated: String,
}

/// The full mapping set, compiled once and applied to many files.
///
/// `mappings` keeps the builder's order; `lookup` serves exact-token
/// replacement in `class` attributes, where order is irrelevant.
#[derive(Debug, Default)]
pub struct CompiledMappings {
    mappings: Vec<CompiledMapping>,
    lookup: HashMap<String, String>,
}

impl CompiledMappings {
    /// Compiles every mapping, preserving the given order.
    pub fn compile(mappings: &[ClassMapping]) -> Result<Self, ClassveilError> {
        let mut compiled = Vec::with_capacity(mappings.len());
        let mut lookup = HashMap::with_capacity(mappings.len());

        for mapping in mappings {
            let pattern = format!(r"\.{}", regex::escape(&mapping.original));
            let selector = Regex::new(&pattern)
                .map_err(|e| ClassveilError::MappingCompilation(mapping.original.clone(), e))?;
            compiled.push(CompiledMapping {
                selector,
                original: mapping.original.clone(),
                obfuscated: mapping.obfuscated.clone(),
            });
            lookup.insert(mapping.original.clone(), mapping.obfuscated.clone());
        }

        debug!("Compiled {} class mappings.", compiled.len());
        Ok(Self { mappings: compiled, lookup })
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Exact-token lookup of one class name.
    pub fn lookup(&self, original: &str) -> Option<&str> {
        self.lookup.get(original).map(String::as_str)
    }
}

/// True for characters that can continue a class identifier. A match
/// followed by one of these is a longer name, not this mapping's name.
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Rewrites every class selector in `content` according to `mappings`.
///
/// Mappings are applied strictly in their compiled order; a `.name` match
/// is replaced only when the next character cannot extend the identifier,
/// so `.btn` never touches `.btn-primary`.
pub fn rewrite_css(content: &str, mappings: &CompiledMappings) -> String {
    let mut current = content.to_string();
    for mapping in &mappings.mappings {
        let rewritten = mapping
            .selector
            .replace_all(&current, |caps: &Captures<'_>| {
                let matched = &caps[0];
                let end = caps.get(0).map_or(current.len(), |g| g.end());
                match current[end..].chars().next() {
                    Some(c) if is_ident_char(c) => matched.to_string(),
                    _ => format!(".{}", mapping.obfuscated),
                }
            })
            .into_owned();
        current = rewritten;
    }
    current
}

/// Replaces mapped tokens in a `class` attribute value, leaving unmapped
/// tokens and the original whitespace untouched.
pub fn rewrite_class_attr(value: &str, mappings: &CompiledMappings) -> String {
    let mut out = String::with_capacity(value.len());
    let mut token = String::new();

    for c in value.chars() {
        if c.is_whitespace() {
            if !token.is_empty() {
                out.push_str(mappings.lookup(&token).unwrap_or(&token));
                token.clear();
            }
            out.push(c);
        } else {
            token.push(c);
        }
    }
    if !token.is_empty() {
        out.push_str(mappings.lookup(&token).unwrap_or(&token));
    }
    out
}

/// The sibling output name for `path`: `<stem><suffix><ext>`.
pub fn obfuscated_file_name(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem().and_then(OsStr::to_str).unwrap_or_default();
    let name = match path.extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{stem}{suffix}.{ext}"),
        None => format!("{stem}{suffix}"),
    };
    path.with_file_name(name)
}

/// Maps each CSS file's base name to its rewritten base name.
fn stylesheet_renames(css_files: &[PathBuf], suffix: &str) -> HashMap<String, String> {
    css_files
        .iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_owned();
            let renamed = obfuscated_file_name(Path::new(&name), suffix)
                .to_str()?
                .to_owned();
            Some((name, renamed))
        })
        .collect()
}

/// Rewrites the final path segment of `href` when it names a known CSS
/// file, keeping any directory prefix.
fn renamed_href(href: &str, renames: &HashMap<String, String>) -> Option<String> {
    let (prefix, name) = match href.rfind('/') {
        Some(idx) => (&href[..=idx], &href[idx + 1..]),
        None => ("", href),
    };
    renames.get(name).map(|renamed| format!("{prefix}{renamed}"))
}

/// Rewrites an HTML document: `class` attribute tokens, inline `<style>`
/// blocks, and stylesheet `href`s that point at files in `css_files`.
///
/// The document is streamed, never rebuilt, so attributes keep their order
/// and nothing outside the three edit points changes.
pub fn rewrite_html(
    content: &str,
    mappings: &CompiledMappings,
    css_files: &[PathBuf],
    output_suffix: &str,
) -> Result<String, ClassveilError> {
    let renames = stylesheet_renames(css_files, output_suffix);
    let mut style_buffer = String::new();

    rewrite_str(
        content,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("link[href]", |el| {
                    let rel = el.get_attribute("rel").unwrap_or_default();
                    let is_stylesheet = rel
                        .split_ascii_whitespace()
                        .any(|t| t.eq_ignore_ascii_case("stylesheet"));
                    if !is_stylesheet {
                        return Ok(());
                    }
                    if let Some(href) = el.get_attribute("href") {
                        if let Some(new_href) = renamed_href(&href, &renames) {
                            debug!("Updated stylesheet link: {} -> {}", href, new_href);
                            el.set_attribute("href", &new_href)?;
                        }
                    }
                    Ok(())
                }),
                text!("style", |chunk| {
                    style_buffer.push_str(chunk.as_str());
                    if chunk.last_in_text_node() {
                        let rewritten = rewrite_css(&style_buffer, mappings);
                        // Raw insertion: escaping would corrupt CSS combinators.
                        chunk.replace(&rewritten, ContentType::Html);
                        style_buffer.clear();
                    } else {
                        chunk.remove();
                    }
                    Ok(())
                }),
                element!("[class]", |el| {
                    if let Some(value) = el.get_attribute("class") {
                        let updated = rewrite_class_attr(&value, mappings);
                        if updated != value {
                            el.set_attribute("class", &updated)?;
                        }
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| ClassveilError::HtmlRewrite(e.to_string()))
}
