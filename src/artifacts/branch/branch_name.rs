use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use crate::errors::{MergedError, Result};

/// Human-readable name of the branch other branches are compared against
///
/// Follows the `git check-ref-format` rules, so a typo such as `main..` is
/// rejected before the repository is even opened.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(MergedError::InvalidBranchName {
                name,
                reason: "branch name cannot be empty".to_string(),
            });
        }

        let re = match regex::Regex::new(INVALID_BRANCH_NAME_REGEX) {
            Ok(re) => re,
            Err(e) => {
                return Err(MergedError::InvalidBranchName {
                    name,
                    reason: format!("invalid branch name regex: {e}"),
                });
            }
        };

        if re.is_match(&name) {
            Err(MergedError::InvalidBranchName {
                name,
                reason: "not a valid ref name".to_string(),
            })
        } else {
            Ok(Self(name))
        }
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
