/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" which has titles and
/// pairs key-vector of values into HashMap<String, HashMap<String, Option<Vec<Value>>>>.
/// If a key of the template is not found in the document it will be key:None.
///
/// Used to read the run configuration of the study driver, e.g.
/// ```text
/// study
/// catalog: NonNiceNilpotent7
/// entries: 1, 2, 5
/// logging
/// loglevel: info
/// ```
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, multispace0, space0},
    combinator::{map, map_res, recognize},
    multi::{many0, many1, separated_list0},
    sequence::{delimited, pair, separated_pair, terminated},
};
use std::collections::HashMap;
use std::fmt::Display;

pub type SectionMap = HashMap<String, Option<Vec<Value>>>;
pub type DocumentMap = HashMap<String, SectionMap>;

/// enum to represent different value types:
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Float(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn as_string(&self) -> Option<&String> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Float(val) => write!(f, "{}", val),
            Value::Integer(val) => write!(f, "{}", val),
            Value::Boolean(val) => write!(f, "{}", val),
        }
    }
}

fn identifier(input: &str) -> IResult<&str, String> {
    let parser = recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ));
    let mut parser = map(parser, String::from);
    parser.parse(input)
}

/// Parses a title (word characters without spaces), dropping the whitespace after it
pub(crate) fn parse_title(input: &str) -> IResult<&str, String> {
    let (input, result) = identifier(input)?;
    Ok((input.trim(), result))
}

/// Parses a key (word characters without spaces)
pub(crate) fn parse_key(input: &str) -> IResult<&str, String> {
    identifier(input)
}

pub(crate) fn parse_value(input: &str) -> IResult<&str, Value> {
    // a single value ends at a comma, whitespace or a semicolon
    let value_parser = take_while1(|c: char| !matches!(c, ',' | ' ' | '\t' | '\n' | '\r' | ';'));
    let mut value_parser = map_res(value_parser, |s: &str| -> Result<Value, String> {
        if let Ok(val) = s.parse::<i64>() {
            Ok(Value::Integer(val))
        } else if let Ok(val) = s.parse::<f64>() {
            Ok(Value::Float(val))
        } else if let Ok(val) = s.parse::<bool>() {
            Ok(Value::Boolean(val))
        } else {
            Ok(Value::String(s.to_string()))
        }
    });
    value_parser.parse(input)
}

pub(crate) fn parse_value_list(input: &str) -> IResult<&str, Vec<Value>> {
    let (input, _) = space0(input)?;
    let separator_coma = delimited(space0, tag(","), space0);
    let mut value_parser = separated_list0(separator_coma, parse_value);
    value_parser.parse(input)
}

/// Parses a key-value pair where value is a list
pub(crate) fn parse_key_value_pair(input: &str) -> IResult<&str, (String, Vec<Value>)> {
    let colon_separator = delimited(space0, tag(":"), space0);
    let mut parser = separated_pair(parse_key, colon_separator, parse_value_list);
    let (input, result) = parser.parse(input)?;
    Ok((input.trim(), result))
}

/// Parses a section with a title and one or more key-value pairs
pub(crate) fn parse_section(input: &str) -> IResult<&str, (String, HashMap<String, Vec<Value>>)> {
    let (input, _) = space0(input)?;
    let (input, title) = parse_title(input)?;
    let (input, _) = multispace0(input)?;
    let mut parser = many1(terminated(parse_key_value_pair, space0));
    let (input, pairs) = parser.parse(input)?;
    Ok((input, (title, pairs.into_iter().collect())))
}

/// Filters out comment lines (starting with //, #, %, or ;) and blank lines
fn filter_comments(input: &str) -> String {
    input
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("//")
                && !trimmed.starts_with('#')
                && !trimmed.starts_with('%')
                && !trimmed.starts_with(';')
                && !trimmed.is_empty()
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Parses the entire document into a HashMap
pub fn parse_document(input: &str) -> IResult<&str, DocumentMap> {
    let mut parser = many1(delimited(space0, parse_section, multispace0));
    let (input, sections) = parser.parse(input)?;
    let result = sections
        .into_iter()
        .map(|(title, section_map)| {
            let title_map = section_map
                .into_iter()
                .map(|(key, values)| (key, Some(values)))
                .collect();
            (title, title_map)
        })
        .collect();
    Ok((input, result))
}

/// Parses a whole document, comments allowed; every title and key of `template` is present in
/// the result (missing keys map to None)
pub fn parse_document_as(input: &str, template: Option<&DocumentMap>) -> Result<DocumentMap, String> {
    let filtered = filter_comments(input);
    let mut parsed = match parse_document(&filtered) {
        Ok((remaining, parsed)) => {
            if !remaining.trim().is_empty() {
                return Err(format!(
                    "Failed to parse entire document. Remaining: '{}'",
                    remaining
                ));
            }
            parsed
        }
        Err(e) => return Err(format!("Parsing error: {:?}", e)),
    };
    if let Some(template) = template {
        for (title, keys_map) in template {
            let section_map = parsed.entry(title.clone()).or_default();
            for key in keys_map.keys() {
                section_map.entry(key.clone()).or_insert(None);
            }
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_key() {
        let (remaining, title) = parse_title("study\n catalog: Nilpotent7").unwrap();
        assert_eq!(title, "study");
        assert_eq!(remaining, "catalog: Nilpotent7");
        let (remaining, key) = parse_key("log_file: true").unwrap();
        assert_eq!(key, "log_file");
        assert_eq!(remaining, ": true");
    }

    #[test]
    fn test_parse_values() {
        assert_eq!(parse_value("12").unwrap().1, Value::Integer(12));
        assert_eq!(parse_value("true").unwrap().1, Value::Boolean(true));
        assert_eq!(parse_value("0.5").unwrap().1, Value::Float(0.5));
        assert_eq!(
            parse_value("report.txt").unwrap().1,
            Value::String("report.txt".to_string())
        );
        let (_, list) = parse_value_list("1, 2 ,5").unwrap();
        assert_eq!(
            list,
            vec![Value::Integer(1), Value::Integer(2), Value::Integer(5)]
        );
    }

    #[test]
    fn test_parse_section() {
        let (remaining, (title, section)) =
            parse_section("study\ncatalog: Nilpotent7\nentries: 1, 2\noutput\nreport_file: r.txt")
                .unwrap();
        assert_eq!(title, "study");
        assert_eq!(section.len(), 2);
        assert_eq!(section["entries"], vec![Value::Integer(1), Value::Integer(2)]);
        assert!(remaining.starts_with("output"));
    }

    #[test]
    fn test_document_with_template_and_comments() {
        let input = "# run\nstudy\ncatalog: Nilpotent7\n\nlogging\nloglevel: debug\n";
        let mut template = DocumentMap::new();
        let mut study = SectionMap::new();
        study.insert("catalog".to_string(), None);
        study.insert("entries".to_string(), None);
        template.insert("study".to_string(), study);
        template.insert("output".to_string(), SectionMap::new());
        let parsed = parse_document_as(input, Some(&template)).unwrap();
        assert_eq!(
            parsed["study"]["catalog"],
            Some(vec![Value::String("Nilpotent7".to_string())])
        );
        assert_eq!(parsed["study"]["entries"], None);
        assert!(parsed["output"].is_empty());
        assert_eq!(
            parsed["logging"]["loglevel"].as_ref().unwrap()[0].as_string().unwrap(),
            "debug"
        );
    }

    #[test]
    fn test_malformed_document() {
        assert!(parse_document_as("study catalog Nilpotent7", None).is_err());
        assert!(parse_document_as("", None).is_err());
    }
}
