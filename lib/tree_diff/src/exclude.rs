use super::RelPath;

use regex::Regex;
use thiserror::Error;

/// Regular expressions matched against relative paths. Directories are
/// matched with their trailing separator, so a rule like `target/` only hits
/// directories
#[derive(Clone)]
pub struct ExcludeList {
    list: Vec<Regex>,
}
#[derive(Error, Debug)]
pub enum ExcludeListError {
    #[error("Exclude List Error: Failed to parse rule to regex\nrule: {rule}\nreason: {err}")]
    UnparsableRule { rule: String, err: regex::Error },
}
fn unparerr<S: std::string::ToString>(rule: S) -> impl Fn(regex::Error) -> ExcludeListError {
    move |err: regex::Error| -> ExcludeListError {
        ExcludeListError::UnparsableRule {
            rule: rule.to_string(),
            err,
        }
    }
}
impl ExcludeList {
    pub fn empty() -> ExcludeList {
        ExcludeList { list: Vec::new() }
    }
    pub fn from(rules: &[String]) -> Result<ExcludeList, ExcludeListError> {
        ExcludeList::empty().join(rules)
    }
    pub fn join(self, rules: &[String]) -> Result<ExcludeList, ExcludeListError> {
        let mut list = self.list;
        for rule in rules {
            let rgx = Regex::new(rule).map_err(unparerr(rule))?;
            list.push(rgx);
        }
        Ok(ExcludeList { list })
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn should_exclude(&self, path: &RelPath) -> bool {
        self.list.iter().any(|rule| rule.is_match(path.as_str()))
    }
}
