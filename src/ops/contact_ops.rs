use crate::error::{RolodexError, RolodexResult};
use crate::model::Contact;
use crate::store::Directory;
use crate::validation;

/// Add a contact, overwriting silently if the identifier is already
/// taken. Name and notes are free text; the other fields must pass the
/// format rules.
pub fn add_contact(
    directory: &mut Directory,
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    notes: &str,
) -> RolodexResult<Contact> {
    let id = validation::identifier(id, "identifier")?;
    let phone = validation::phone(phone, "phone")?;
    let email = validation::identifier(email, "email")?;

    let contact = Contact::new(id, name.to_string(), phone, email, notes.to_string());
    directory.upsert(contact.clone());
    Ok(contact)
}

/// Replace every field of an existing contact. There is no partial
/// update: callers supply all four fields even to keep an old value.
pub fn update_contact(
    directory: &mut Directory,
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    notes: &str,
) -> RolodexResult<Contact> {
    let id = validation::identifier(id, "identifier")?;
    if !directory.contains(&id) {
        return Err(RolodexError::NotFound { id });
    }

    let phone = validation::phone(phone, "phone")?;
    let email = validation::identifier(email, "email")?;

    let contact = Contact::new(id, name.to_string(), phone, email, notes.to_string());
    directory.upsert(contact.clone());
    Ok(contact)
}

pub fn delete_contact(directory: &mut Directory, id: &str) -> RolodexResult<Contact> {
    let id = validation::identifier(id, "identifier")?;
    directory
        .remove(&id)
        .ok_or(RolodexError::NotFound { id })
}

pub fn find_contact<'a>(directory: &'a Directory, id: &str) -> Option<&'a Contact> {
    directory.get(id)
}
