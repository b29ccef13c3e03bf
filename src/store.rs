use std::collections::BTreeMap;

use crate::model::Contact;

/// The in-memory mapping from identifier to contact.
///
/// Owned by `main` and passed `&mut` into every handler; nothing is
/// persisted implicitly. A BTreeMap keeps listing and export order
/// deterministic within a run (sorted by identifier).
#[derive(Debug, Default)]
pub struct Directory {
    contacts: BTreeMap<String, Contact>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. The key is always taken from the contact's
    /// own `id`, so key and record can never disagree.
    pub fn upsert(&mut self, contact: Contact) {
        self.contacts.insert(contact.id.clone(), contact);
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Contact> {
        self.contacts.remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
