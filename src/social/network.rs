use std::collections::{BTreeMap, BTreeSet};

use crate::social::model::{Group, Person};
use crate::utils::error::{DomainError, EntityKind, Result};

/// Friend graph with named groups.
#[derive(Debug, Default)]
pub struct Social {
    persons: BTreeMap<String, Person>,
    groups: BTreeMap<String, Group>,
}

impl Social {
    pub fn new() -> Social {
        Social::default()
    }

    /// Create an account; a duplicate code is rejected.
    pub fn add_person(&mut self, code: &str, name: &str, surname: &str) -> Result<()> {
        if self.persons.contains_key(code) {
            return Err(DomainError::duplicate(EntityKind::Person, code));
        }
        self.persons
            .insert(code.to_string(), Person::new(code, name, surname));
        Ok(())
    }

    pub fn person(&self, code: &str) -> Result<&Person> {
        self.persons
            .get(code)
            .ok_or_else(|| DomainError::not_found(EntityKind::Person, code))
    }

    /// Establish a friendship between two accounts. The relation is
    /// symmetric: both friend sets are updated together.
    pub fn add_friendship(&mut self, code1: &str, code2: &str) -> Result<()> {
        if !self.persons.contains_key(code1) {
            return Err(DomainError::not_found(EntityKind::Person, code1));
        }
        if !self.persons.contains_key(code2) {
            return Err(DomainError::not_found(EntityKind::Person, code2));
        }
        if let Some(person) = self.persons.get_mut(code1) {
            person.friends.insert(code2.to_string());
        }
        if let Some(person) = self.persons.get_mut(code2) {
            person.friends.insert(code1.to_string());
        }
        Ok(())
    }

    /// Codes of the direct friends of an account, alphabetical.
    pub fn friends(&self, code: &str) -> Result<Vec<String>> {
        Ok(self.person(code)?.friends.iter().cloned().collect())
    }

    /// Codes of second-degree contacts. A contact reachable through
    /// several first-degree friends appears once per path; the origin
    /// itself is excluded.
    pub fn friends_of_friends(&self, code: &str) -> Result<Vec<String>> {
        let person = self.person(code)?;
        let mut result = Vec::new();
        for friend in &person.friends {
            if let Some(friend) = self.persons.get(friend) {
                result.extend(
                    friend
                        .friends
                        .iter()
                        .filter(|&second| second != code)
                        .cloned(),
                );
            }
        }
        Ok(result)
    }

    /// Second-degree contacts deduplicated by their natural order,
    /// origin excluded.
    pub fn friends_of_friends_no_repetition(&self, code: &str) -> Result<Vec<String>> {
        let person = self.person(code)?;
        let mut result = BTreeSet::new();
        for friend in &person.friends {
            if let Some(friend) = self.persons.get(friend) {
                result.extend(friend.friends.iter().cloned());
            }
        }
        result.remove(code);
        Ok(result.into_iter().collect())
    }

    /// Create a group; re-adding an existing name keeps the group and
    /// its members untouched.
    pub fn add_group(&mut self, name: &str) {
        self.groups
            .entry(name.to_string())
            .or_insert_with(|| Group::new(name));
    }

    /// Group names in alphabetical order.
    pub fn groups(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    pub fn add_person_to_group(&mut self, code: &str, group_name: &str) -> Result<()> {
        if !self.persons.contains_key(code) {
            return Err(DomainError::not_found(EntityKind::Person, code));
        }
        let group = self
            .groups
            .get_mut(group_name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Group, group_name))?;
        group.members.insert(code.to_string());
        if let Some(person) = self.persons.get_mut(code) {
            person.groups.insert(group_name.to_string());
        }
        Ok(())
    }

    /// Codes of the members of a group, alphabetical.
    pub fn people_in_group(&self, group_name: &str) -> Result<Vec<String>> {
        let group = self
            .groups
            .get(group_name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Group, group_name))?;
        Ok(group.members.iter().cloned().collect())
    }

    /// The account with the most direct friends; `None` when no person
    /// is registered. Ties are broken arbitrarily.
    pub fn person_with_largest_number_of_friends(&self) -> Option<String> {
        self.persons
            .values()
            .max_by_key(|person| person.friends.len())
            .map(|person| person.code.clone())
    }

    /// The account with the most second-degree contacts, duplicates
    /// counted per path; `None` when no person is registered.
    pub fn person_with_most_friends_of_friends(&self) -> Option<String> {
        self.persons
            .values()
            .max_by_key(|person| self.second_degree_count(person))
            .map(|person| person.code.clone())
    }

    /// The group with the most members; `None` when no group exists.
    pub fn largest_group(&self) -> Option<String> {
        self.groups
            .values()
            .max_by_key(|group| group.members.len())
            .map(|group| group.name.clone())
    }

    /// The account belonging to the most groups; `None` when no person
    /// is registered.
    pub fn person_in_largest_number_of_groups(&self) -> Option<String> {
        self.persons
            .values()
            .max_by_key(|person| person.groups.len())
            .map(|person| person.code.clone())
    }

    fn second_degree_count(&self, person: &Person) -> usize {
        person
            .friends
            .iter()
            .filter_map(|friend| self.persons.get(friend))
            .map(|friend| {
                friend
                    .friends
                    .iter()
                    .filter(|&second| *second != person.code)
                    .count()
            })
            .sum()
    }
}
