//! Prompt construction for blog draft generation.
//!
//! The prompt is a fixed template with `{variable}` placeholders. Substitution
//! is fail-safe: an undefined variable is an error rather than a silent empty
//! string, and substituted values are inserted verbatim so braces inside a
//! memory letter never re-trigger substitution.

use std::collections::HashMap;
use std::fmt;

/// Template for turning a session memory letter into a blog post.
///
/// Variables: `{memory_content}` (the letter text) and `{date}` (today,
/// `YYYY-MM-DD`, echoed into the requested frontmatter).
const BLOG_PROMPT_TEMPLATE: &str = r#"You are a technical blog writer. Convert this development session memory into an engaging, public-ready blog post.

INPUT (Session Memory):
{memory_content}

REQUIREMENTS:
1. Transform technical decisions into narrative insights
2. Keep the "Pain Log" as "Lessons Learned" or "Challenges"
3. Make it readable for a general developer audience
4. Add markdown frontmatter with: title, date, tags, excerpt
5. Use proper markdown formatting with headers, code blocks, lists
6. Maintain technical accuracy but improve readability

OUTPUT FORMAT:
---
title: "[Engaging Title]"
date: {date}
tags: [relevant, tags, here]
excerpt: "Brief summary of the post"
---

[Blog post content in markdown]

Generate the blog post now:"#;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable { name: String, position: usize },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace { position: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(f, "undefined variable '{}' at position {} in template", name, position)
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Build the generation prompt for one memory letter.
///
/// `date` is the caller's current date as `YYYY-MM-DD`; keeping it a parameter
/// makes prompt construction deterministic under test.
pub fn build_prompt(memory_content: &str, date: &str) -> String {
    let vars = HashMap::from([
        ("memory_content".to_string(), memory_content.to_string()),
        ("date".to_string(), date.to_string()),
    ]);
    // The template and variable set are both fixed, so this cannot fail.
    render_template(BLOG_PROMPT_TEMPLATE, &vars).expect("prompt template variables are defined")
}

/// Render a template string by substituting `{variable}` placeholders.
///
/// `{{` and `}}` render as literal braces. Values are copied through without
/// rescanning, so placeholder-like text inside a value stays untouched.
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }
                match variables.get(name.trim()) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: name.trim().to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}
