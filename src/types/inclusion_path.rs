//! Inclusion paths: dot-separated relationship chains, e.g. `author.publisher`.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct InclusionPath(Vec<String>);

impl InclusionPath {
    pub fn new<I, S>(segments: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| Into::<String>::into(s).trim().to_string())
            .collect();
        if segments.is_empty() {
            return Err(DocumentError::InvalidInclusionPath(
                "path has no segments".to_string(),
            ));
        }
        if segments.iter().any(String::is_empty) {
            return Err(DocumentError::InvalidInclusionPath(format!(
                "empty segment in '{}'",
                segments.join(".")
            )));
        }
        Ok(Self(segments))
    }

    /// Parse a comma separated `include` parameter, e.g. `author,author.publisher`.
    pub fn parse_list(s: &str) -> Result<Vec<Self>, DocumentError> {
        s.split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Self::from_str)
            .collect()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for InclusionPath {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.split('.'))
    }
}

impl Display for InclusionPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl TryFrom<String> for InclusionPath {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InclusionPath> for String {
    fn from(value: InclusionPath) -> Self {
        value.to_string()
    }
}
