use std::fmt;

use crate::error::{Result, ScaffoldError};

/// A validated project name as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self> {
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("name is a relative path")
        } else if name.contains(['/', '\\']) {
            Some("name contains a path separator")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ScaffoldError::InvalidName { name: name.to_string(), reason }),
            None => Ok(Self(name.to_string())),
        }
    }

    pub fn verbatim(&self) -> &str {
        &self.0
    }

    /// Identifier-safe form used for namespace directories: `my-app` becomes `my_app`.
    pub fn normalized(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
