//! Message templates
//!
//! Placeholders:
//!
//! - `{input}`: the rejected value
//! - `{code}`: the rule code
//! - `{0}`, `{1}`, ...: rule arguments by position
//!
//! `{{` and `}}` produce literal braces. Strings render without quotes and
//! arrays render as comma-separated items.

use serde_json::Value;

use crate::foundation::RuleError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Input,
    Code,
    Arg(usize),
}

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub(crate) fn parse(source: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(format!("unclosed placeholder `{{{name}`")),
                        }
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(placeholder(&name)?);
                }
                '}' => return Err("unmatched `}`".to_owned()),
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub(crate) fn render(&self, err: &RuleError) -> Result<String, String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Input => out.push_str(&display_value(err.input())),
                Segment::Code => out.push_str(&err.code().to_string()),
                Segment::Arg(index) => {
                    let arg = err.args().get(*index).ok_or_else(|| {
                        format!(
                            "argument {{{index}}} is out of range, the rule has {} argument(s)",
                            err.args().len()
                        )
                    })?;
                    out.push_str(&display_value(arg));
                }
            }
        }
        Ok(out)
    }
}

fn placeholder(name: &str) -> Result<Segment, String> {
    match name.trim() {
        "input" => Ok(Segment::Input),
        "code" => Ok(Segment::Code),
        other => other
            .parse()
            .map(Segment::Arg)
            .map_err(|_| format!("unknown placeholder `{{{other}}}`")),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    fn min_error() -> RuleError {
        RuleError::new(codes::STRING_MIN, "ab").with_arg(3)
    }

    #[test]
    fn test_render_placeholders() {
        let template = Template::parse("{input} is shorter than {0} ({code})").unwrap();
        assert_eq!(template.render(&min_error()).unwrap(), "ab is shorter than 3 (2002)");
    }

    #[test]
    fn test_arrays_render_as_lists() {
        let err = RuleError::new(codes::STRING_IN, "x").with_arg(["a", "b"]);
        let template = Template::parse("one of: {0}").unwrap();
        assert_eq!(template.render(&err).unwrap(), "one of: a, b");
    }

    #[test]
    fn test_escaped_braces() {
        let template = Template::parse("{{literal}} {0}").unwrap();
        assert_eq!(template.render(&min_error()).unwrap(), "{literal} 3");
    }

    #[test]
    fn test_parse_errors() {
        assert!(Template::parse("{input").is_err());
        assert!(Template::parse("{nope}").is_err());
        assert!(Template::parse("oops }").is_err());
    }

    #[test]
    fn test_missing_argument_is_a_render_error() {
        let template = Template::parse("{1}").unwrap();
        assert!(template.render(&min_error()).is_err());
    }
}
