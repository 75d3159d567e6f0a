use std::collections::BTreeSet;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub code: String,
    pub name: String,
    pub surname: String,
    /// Codes of direct friends; both sides of an undirected edge are
    /// materialized here.
    pub(crate) friends: BTreeSet<String>,
    /// Names of the groups this person belongs to.
    pub(crate) groups: BTreeSet<String>,
}

impl Person {
    pub(crate) fn new(code: &str, name: &str, surname: &str) -> Person {
        Person {
            code: code.to_string(),
            name: name.to_string(),
            surname: surname.to_string(),
            friends: BTreeSet::new(),
            groups: BTreeSet::new(),
        }
    }

    /// `"code name surname"`.
    pub fn info(&self) -> String {
        format!("{} {} {}", self.code, self.name, self.surname)
    }

    pub fn friends(&self) -> &BTreeSet<String> {
        &self.friends
    }

    pub fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub name: String,
    pub(crate) members: BTreeSet<String>,
}

impl Group {
    pub(crate) fn new(name: &str) -> Group {
        Group {
            name: name.to_string(),
            members: BTreeSet::new(),
        }
    }

    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }
}
