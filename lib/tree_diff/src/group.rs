use super::{Error, RelPath};

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Added,
    Changed,
    Removed,
    Shared,
    Unchanged,
}
impl Label {
    pub fn flag(&self) -> char {
        match self {
            Label::Added => 'a',
            Label::Changed => 'c',
            Label::Removed => 'r',
            Label::Shared => 's',
            Label::Unchanged => 'u',
        }
    }
    pub fn from_flag(flag: char) -> Option<Label> {
        match flag {
            'a' => Some(Label::Added),
            'c' => Some(Label::Changed),
            'r' => Some(Label::Removed),
            's' => Some(Label::Shared),
            'u' => Some(Label::Unchanged),
            _ => None,
        }
    }
    pub fn name(&self) -> &'static str {
        match self {
            Label::Added => "Added",
            Label::Changed => "Changed",
            Label::Removed => "Removed",
            Label::Shared => "Shared",
            Label::Unchanged => "Unchanged",
        }
    }
}
impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ordered selection of the groups to report. Repeated flags are kept only at
/// their first position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flags(Vec<Label>);
impl Flags {
    pub fn parse(flags: &str) -> Result<Flags, Error> {
        let mut labels: Vec<Label> = Vec::new();
        for flag in flags.chars().flat_map(char::to_lowercase) {
            let label = Label::from_flag(flag).ok_or(Error::InvalidFlag { flag })?;
            if !labels.contains(&label) {
                labels.push(label);
            }
        }
        if labels.is_empty() {
            return Err(Error::EmptyFlags);
        }
        Ok(Flags(labels))
    }
    pub fn labels(&self) -> &[Label] {
        let Flags(labels) = self;
        labels
    }
    pub fn contains(&self, label: Label) -> bool {
        self.labels().contains(&label)
    }
    /// Same selection, with `label` appended if it wasn't there already
    pub fn with(&self, label: Label) -> Flags {
        let Flags(mut labels) = self.clone();
        if !labels.contains(&label) {
            labels.push(label);
        }
        Flags(labels)
    }
}
impl Default for Flags {
    fn default() -> Self {
        Flags(vec![Label::Changed, Label::Added, Label::Removed])
    }
}
impl std::str::FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flags::parse(s)
    }
}
impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let flags: String = self.labels().iter().map(Label::flag).collect();
        write!(f, "{flags}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub label: Label,
    pub paths: Vec<RelPath>,
}

/// Result of a comparison: the selected groups, each at most once, in the
/// order in which they were selected
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    order: Vec<Label>,
    groups: HashMap<Label, Vec<RelPath>>,
}
impl Report {
    pub fn new() -> Report {
        Report::default()
    }

    /// Set the paths of a group, sorting them. A new group goes to the end of
    /// the report, an existing one keeps its position
    pub fn insert(&mut self, label: Label, mut paths: Vec<RelPath>) {
        paths.sort();
        if self.groups.insert(label, paths).is_none() {
            self.order.push(label);
        }
    }
    pub fn get(&self, label: Label) -> Option<&[RelPath]> {
        self.groups.get(&label).map(|paths| paths.as_slice())
    }
    pub fn remove(&mut self, label: Label) -> Option<Vec<RelPath>> {
        let paths = self.groups.remove(&label)?;
        self.order.retain(|other| *other != label);
        Some(paths)
    }

    pub fn labels(&self) -> &[Label] {
        &self.order
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
    /// Whether every group is empty
    pub fn is_clean(&self) -> bool {
        self.groups.values().all(|paths| paths.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = Group> + '_ {
        self.order.iter().map(|label| Group {
            label: *label,
            paths: self.groups.get(label).cloned().unwrap_or_default(),
        })
    }
}
