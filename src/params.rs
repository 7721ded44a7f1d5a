//! Projection specification parsing.
//!
//! A specification arrives as a single string (`"+proj=utm +zone=33"`), a
//! sequence of tokens (`["proj=utm", "zone=33"]`) or key/value pairs
//! (`[("proj", Some("utm")), ("no_defs", None)]`). All three normalize to the
//! same [`ProjectionParameters`].

use std::fmt;
use std::str::FromStr;

use crate::dms;
use crate::error::ProjError;

/// Parsed `key[=value]` parameters.
///
/// Keys are unique: a repeated key overwrites the earlier value but keeps
/// its original position for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectionParameters {
    entries: Vec<(String, Option<String>)>,
}

impl ProjectionParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from individual tokens; a leading `+` on each token is optional.
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, ProjError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for token in tokens {
            let (key, value) = split_token(token.as_ref())?;
            params.set(key, value);
        }
        params.require_nonempty()?;
        Ok(params)
    }

    /// Build from key/value pairs; `None` marks a bare flag.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ProjError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let key = key.strip_prefix('+').unwrap_or(key);
            validate_key(key)?;
            let value = match value {
                Some(v) => {
                    let v = v.as_ref().trim();
                    validate_value(key, v)?;
                    Some(v.to_string())
                }
                None => None,
            };
            params.set(key, value);
        }
        params.require_nonempty()?;
        Ok(params)
    }

    /// Insert or overwrite a parameter.
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Raw value for `key`. `Some(None)` means the key is a bare flag.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    /// String value for `key`; a bare flag has no value and yields `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, ProjError> {
        match self.get(key) {
            None => Ok(None),
            Some(None) => Err(ProjError::invalid_value(key, "missing numeric value")),
            Some(Some(v)) => v
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .map(Some)
                .ok_or_else(|| ProjError::invalid_value(key, format!("'{v}' is not a number"))),
        }
    }

    /// Angle parameter in radians (accepts DMS notation).
    pub fn get_angle(&self, key: &str) -> Result<Option<f64>, ProjError> {
        match self.get(key) {
            None => Ok(None),
            Some(None) => Err(ProjError::invalid_value(key, "missing angle value")),
            Some(Some(v)) => dms::parse_radians(v)
                .map(Some)
                .ok_or_else(|| ProjError::invalid_value(key, format!("'{v}' is not an angle"))),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<Option<i64>, ProjError> {
        match self.get(key) {
            None => Ok(None),
            Some(None) => Err(ProjError::invalid_value(key, "missing integer value")),
            Some(Some(v)) => v
                .parse::<i64>()
                .map(Some)
                .map_err(|_| ProjError::invalid_value(key, format!("'{v}' is not an integer"))),
        }
    }

    /// Boolean flag: present without value, or with `t`/`true` / `f`/`false`.
    pub fn get_bool(&self, key: &str) -> Result<bool, ProjError> {
        match self.get(key) {
            None => Ok(false),
            Some(None) => Ok(true),
            Some(Some(v)) => match v.to_ascii_lowercase().as_str() {
                "t" | "true" => Ok(true),
                "f" | "false" => Ok(false),
                _ => Err(ProjError::invalid_value(key, format!("'{v}' is not a boolean"))),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Normalized `key=value` / `key` tokens, without `+` prefixes.
    pub fn to_tokens(&self) -> Vec<String> {
        self.iter()
            .map(|(k, v)| match v {
                Some(v) => format!("{k}={v}"),
                None => k.to_string(),
            })
            .collect()
    }

    fn require_nonempty(&self) -> Result<(), ProjError> {
        if self.is_empty() {
            return Err(ProjError::MalformedSpecification(
                "no arguments in initialization list".into(),
            ));
        }
        Ok(())
    }
}

impl FromStr for ProjectionParameters {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tokens(s.split_whitespace())
    }
}

/// Renders the `+key=value` form accepted back by `from_str`.
impl fmt::Display for ProjectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.to_tokens().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "+{token}")?;
        }
        Ok(())
    }
}

fn split_token(token: &str) -> Result<(&str, Option<String>), ProjError> {
    let token = token.trim();
    let token = token.strip_prefix('+').unwrap_or(token);
    if token.is_empty() {
        return Err(ProjError::MalformedSpecification("empty token".into()));
    }
    match token.split_once('=') {
        None => {
            validate_key(token)?;
            Ok((token, None))
        }
        Some((key, value)) => {
            validate_key(key)?;
            if value.contains('=') {
                return Err(ProjError::MalformedSpecification(format!(
                    "unmatched '=' in token '{token}'"
                )));
            }
            validate_value(key, value)?;
            Ok((key, Some(value.to_string())))
        }
    }
}

fn validate_key(key: &str) -> Result<(), ProjError> {
    if key.is_empty() {
        return Err(ProjError::MalformedSpecification("empty parameter name".into()));
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ProjError::MalformedSpecification(format!(
            "illegal character in parameter name '{key}'"
        )));
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<(), ProjError> {
    if value.is_empty() {
        return Err(ProjError::MalformedSpecification(format!(
            "parameter '{key}' has an empty value"
        )));
    }
    if value.contains(char::is_whitespace) || value.contains('=') {
        return Err(ProjError::MalformedSpecification(format!(
            "illegal character in value of '{key}'"
        )));
    }
    Ok(())
}
