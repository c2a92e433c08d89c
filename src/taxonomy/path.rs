//! Navigation path

use std::fmt;

use serde::Serialize;

/// Separator between labels in a path string (`Animals > Dogs`)
pub const DEFAULT_SEPARATOR: &str = " > ";

/// Labels chosen from the root down to the displayed level.
///
/// Empty at the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavigationPath(Vec<String>);

impl NavigationPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Parse `A > B > C`. Pieces are split on `>` and trimmed; empty pieces
    /// are dropped.
    pub fn parse(s: &str) -> Self {
        Self(
            s.split('>')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.0.push(label.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Copy of this path extended by one label
    pub fn with_label(&self, label: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.push(label);
        path
    }

    pub fn joined(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl fmt::Display for NavigationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(DEFAULT_SEPARATOR))
    }
}
