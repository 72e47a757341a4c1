//! JSDoc normalization
//!
//! Turns a raw `/** ... */` comment into a [`JsDoc`]: leading `*` gutters are
//! removed, the description runs until the first line starting with `@tag`,
//! and every tag collects the lines that follow it.
//!
//! Tag text excludes the syntax the tag binds: the `{type}` expression and
//! the parameter, property or type name. `@param {string} [id=0] The id`
//! yields the comment `The id`.

use crate::features::parsing::domain::{JsDoc, JsDocTag};

/// Normalize one raw block comment. Returns `None` for comments that are not
/// JSDoc blocks (`//`, `/* */`, the empty `/**/`).
pub fn normalize_jsdoc(raw: &str) -> Option<JsDoc> {
    let raw = raw.trim();
    if !raw.starts_with("/**") || raw == "/**/" || !raw.ends_with("*/") || raw.len() < 5 {
        return None;
    }
    let inner = &raw[3..raw.len() - 2];

    let mut description: Vec<&str> = Vec::new();
    let mut tags: Vec<(String, Vec<&str>)> = Vec::new();

    for line in inner.lines() {
        let line = strip_gutter(line);

        if let Some((name, rest)) = split_tag(line) {
            tags.push((name.to_string(), vec![rest]));
            continue;
        }

        match tags.last_mut() {
            Some((_, lines)) => lines.push(line),
            None => description.push(line),
        }
    }

    let comment = join_lines(&description);
    Some(JsDoc {
        comment: if comment.is_empty() { None } else { Some(comment) },
        tags: tags
            .into_iter()
            .map(|(name, lines)| {
                let text = join_lines(&lines);
                let comment = tag_comment(&name, &text).to_string();
                JsDocTag { name, comment }
            })
            .collect(),
    })
}

/// Remove indentation, the `*` gutter and one following space
fn strip_gutter(line: &str) -> &str {
    let line = line.trim_start();
    let line = line.strip_prefix('*').unwrap_or(line);
    let line = line.strip_prefix(' ').unwrap_or(line);
    line.trim_end()
}

/// `@name rest` at the start of a line
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let body = line.trim_start().strip_prefix('@')?;
    let end = body
        .find(|c: char| c.is_whitespace())
        .unwrap_or(body.len());
    let name = &body[..end];
    if name.is_empty() || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((name, body[end..].trim()))
}

fn join_lines(lines: &[&str]) -> String {
    lines.join("\n").trim().to_string()
}

/// What a tag binds before its free text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagShape {
    /// `@param {T} name text`, the type may also follow the name
    Parameter,
    /// `@template {C} T, U text`
    Template,
    /// `@typedef {T} Name text`, `@callback Name text`
    Definition,
    /// `@returns {T} text`
    Typed,
    /// `@extends {Base} text`, braces optional
    ClassReference,
    Plain,
}

impl TagShape {
    fn of(name: &str) -> Self {
        match name {
            "param" | "arg" | "argument" | "property" | "prop" => TagShape::Parameter,
            "template" => TagShape::Template,
            "typedef" | "callback" => TagShape::Definition,
            "returns" | "return" | "type" | "satisfies" | "this" | "enum" | "throws" => {
                TagShape::Typed
            }
            "augments" | "extends" | "implements" => TagShape::ClassReference,
            _ => TagShape::Plain,
        }
    }
}

fn tag_comment<'t>(name: &str, text: &'t str) -> &'t str {
    match TagShape::of(name) {
        TagShape::Parameter => {
            let after_type = skip_type_expression(text);
            let had_type = after_type.len() != text.trim_start().len();
            let rest = skip_bound_name(after_type);
            if had_type {
                rest
            } else {
                skip_type_expression(rest)
            }
        }
        TagShape::Template => skip_template_names(skip_type_expression(text)),
        TagShape::Definition => skip_bound_name(skip_type_expression(text)),
        TagShape::Typed => skip_type_expression(text),
        TagShape::ClassReference => {
            let after_type = skip_type_expression(text);
            if after_type.len() != text.trim_start().len() {
                after_type
            } else {
                skip_bound_name(text)
            }
        }
        TagShape::Plain => text,
    }
}

/// Skip a leading balanced `open ... close` group; unbalanced text is kept
fn skip_group(text: &str, open: char, close: char) -> Option<&str> {
    let text = text.trim_start();
    if !text.starts_with(open) {
        return None;
    }
    let mut depth = 0usize;
    for (index, c) in text.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Some(text[index + c.len_utf8()..].trim_start());
            }
        }
    }
    None
}

fn skip_type_expression(text: &str) -> &str {
    skip_group(text, '{', '}').unwrap_or_else(|| text.trim_start())
}

/// Skip `name`, `a.b` or the optional forms `[name]` and `[name=default]`
fn skip_bound_name(text: &str) -> &str {
    let text = text.trim_start();
    if text.starts_with('[') {
        return skip_group(text, '[', ']').unwrap_or(text);
    }
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    text[end..].trim_start()
}

/// Skip a comma separated type parameter list
fn skip_template_names(text: &str) -> &str {
    let mut rest = text.trim_start();
    loop {
        let before = rest;
        rest = skip_bound_name(before);
        let bound = before[..before.len() - rest.len()].trim_end();

        if let Some(after) = rest.strip_prefix(',') {
            rest = after.trim_start();
        } else if !bound.ends_with(',') || rest.is_empty() {
            return rest;
        }
    }
}
