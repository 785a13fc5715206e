//! Default-coalescing deserializers shared by the profile records.
//!
//! Extracted résumé features arrive with missing keys, `null`s, numbers encoded as
//! strings and the occasional comma-separated list. Everything is folded into a
//! well-typed default here so the scorers never see a partial record.

use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use std::sync::OnceLock;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(f64),
    Other(IgnoredAny),
}

/// A value of the expected shape, or anything else
#[derive(Deserialize)]
#[serde(untagged)]
enum OrIgnored<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> OrIgnored<T> {
    fn into_option(self) -> Option<T> {
        match self {
            OrIgnored::Value(value) => Some(value),
            OrIgnored::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringsRepr {
    Many(Vec<Scalar>),
    One(String),
    Other(IgnoredAny),
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)").expect("Invalid leading number regex"))
}

/// Parse the leading number of strings like `"3.25"`, `"3.25/4.00"` or `"8 months"`.
pub(crate) fn parse_leading_number(text: &str) -> Option<f64> {
    leading_number()
        .captures(text)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// `null` or a value of the wrong shape -> `T::default()`
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(OrIgnored::<T>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default())
}

/// List of records; `null` and unreadable entries are dropped, a non-list becomes empty
pub fn nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = OrIgnored::<Vec<OrIgnored<T>>>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default();
    Ok(items.into_iter().filter_map(OrIgnored::into_option).collect())
}

/// Free text; numbers are rendered, anything else becomes empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) if n.is_finite() => render_number(n),
        _ => String::new(),
    })
}

/// Optional free text; blank becomes `None`
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = text(deserializer)?;
    Ok(if value.trim().is_empty() { None } else { Some(value) })
}

/// String list with `null` and blank entries dropped. A bare string is split on commas.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Vec<String> = match StringsRepr::deserialize(deserializer)? {
        StringsRepr::Many(values) => values
            .into_iter()
            .filter_map(|v| match v {
                Scalar::Text(s) => Some(s),
                _ => None,
            })
            .collect(),
        StringsRepr::One(s) => s.split(',').map(str::to_string).collect(),
        StringsRepr::Other(_) => Vec::new(),
    };

    Ok(items.into_iter().filter(|s| !s.trim().is_empty()).collect())
}

/// Grade point average; non-numeric, negative or non-finite values coalesce to 0.0
pub fn gpa<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Scalar::deserialize(deserializer)? {
        Scalar::Number(n) => n,
        Scalar::Text(s) => parse_leading_number(&s).unwrap_or(0.0),
        Scalar::Other(_) => 0.0,
    };
    Ok(sanitize_gpa(value))
}

/// Month count; floats truncate, negative or unparsable values coalesce to 0
pub fn months<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Scalar::deserialize(deserializer)? {
        Scalar::Number(n) => n,
        Scalar::Text(s) => parse_leading_number(&s).unwrap_or(0.0),
        Scalar::Other(_) => 0.0,
    };
    Ok(if value.is_finite() && value > 0.0 { value.trunc() as u32 } else { 0 })
}

pub(crate) fn sanitize_gpa(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "gpa")]
        gpa: f64,
        #[serde(default, deserialize_with = "months")]
        months: u32,
        #[serde(default, deserialize_with = "string_list")]
        skills: Vec<String>,
        #[serde(default, deserialize_with = "text")]
        name: String,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_gpa_coercion() {
        assert_eq!(probe(r#"{"gpa": 3.25}"#).gpa, 3.25);
        assert_eq!(probe(r#"{"gpa": "3.25/4.00"}"#).gpa, 3.25);
        assert_eq!(probe(r#"{"gpa": "N/A"}"#).gpa, 0.0);
        assert_eq!(probe(r#"{"gpa": null}"#).gpa, 0.0);
        assert_eq!(probe(r#"{"gpa": -1.0}"#).gpa, 0.0);
        assert_eq!(probe(r#"{"gpa": [3.5]}"#).gpa, 0.0);
        assert_eq!(probe(r#"{}"#).gpa, 0.0);
    }

    #[test]
    fn test_months_coercion() {
        assert_eq!(probe(r#"{"months": 8}"#).months, 8);
        assert_eq!(probe(r#"{"months": 7.9}"#).months, 7);
        assert_eq!(probe(r#"{"months": "6 months"}"#).months, 6);
        assert_eq!(probe(r#"{"months": -3}"#).months, 0);
        assert_eq!(probe(r#"{"months": null}"#).months, 0);
    }

    #[test]
    fn test_string_list_coercion() {
        assert_eq!(
            probe(r#"{"skills": ["Python", null, "  ", "SQL", 3]}"#).skills,
            vec!["Python", "SQL"]
        );
        assert_eq!(probe(r#"{"skills": "Python, SQL"}"#).skills, vec!["Python", " SQL"]);
        assert!(probe(r#"{"skills": null}"#).skills.is_empty());
        assert!(probe(r#"{"skills": {"a": 1}}"#).skills.is_empty());
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(probe(r#"{"name": 2023}"#).name, "2023");
        assert_eq!(probe(r#"{"name": null}"#).name, "");
        assert_eq!(probe(r#"{"name": "Backend"}"#).name, "Backend");
    }
}
