use crate::cli::context::CliContext;
use crate::error::{RolodexError, RolodexResult};
use crate::model::Contact;
use crate::ops::contact_ops;
use crate::persistence;

macro_rules! prompt_or_return {
    ($expr:expr) => {
        match $expr {
            Some(s) => s,
            None => return Ok(()),
        }
    };
}

/// Prompt for all five fields and insert the contact. An identifier that
/// is already taken is overwritten without a warning.
pub fn add(ctx: &mut CliContext) -> RolodexResult<()> {
    let id = prompt_or_return!(ctx.prompt_identifier("Enter unique identifier (email): "));
    let name = prompt_or_return!(ctx.read_line("Enter name: "));
    let phone = prompt_or_return!(ctx.prompt_phone("Enter phone number: "));
    let email = prompt_or_return!(ctx.prompt_identifier("Enter email address: "));
    let notes = prompt_or_return!(ctx.read_line("Enter additional information (address, notes): "));

    contact_ops::add_contact(&mut ctx.directory, &id, &name, &phone, &email, &notes)?;
    println!("Contact added successfully!");
    Ok(())
}

/// Replace an existing contact wholesale. The identifier is checked
/// before any replacement field is requested, so a miss never wastes
/// four prompts.
pub fn edit(ctx: &mut CliContext) -> RolodexResult<()> {
    let id =
        prompt_or_return!(ctx.prompt_identifier("Enter unique identifier of the contact to edit: "));
    if !ctx.directory.contains(&id) {
        println!("Contact not found!");
        return Ok(());
    }

    let name = prompt_or_return!(ctx.read_line("Enter new name: "));
    let phone = prompt_or_return!(ctx.prompt_phone("Enter new phone number: "));
    let email = prompt_or_return!(ctx.prompt_identifier("Enter new email address: "));
    let notes =
        prompt_or_return!(ctx.read_line("Enter new additional information (address, notes): "));

    contact_ops::update_contact(&mut ctx.directory, &id, &name, &phone, &email, &notes)?;
    println!("Contact updated successfully!");
    Ok(())
}

pub fn delete(ctx: &mut CliContext) -> RolodexResult<()> {
    let id = prompt_or_return!(
        ctx.prompt_identifier("Enter unique identifier of the contact to delete: ")
    );
    match contact_ops::delete_contact(&mut ctx.directory, &id) {
        Ok(_) => {
            println!("Contact deleted successfully!");
            Ok(())
        }
        Err(RolodexError::NotFound { .. }) => {
            println!("Contact not found!");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

pub fn search(ctx: &mut CliContext) -> RolodexResult<()> {
    let id = prompt_or_return!(
        ctx.prompt_identifier("Enter unique identifier of the contact to search: ")
    );
    match contact_ops::find_contact(&ctx.directory, &id) {
        Some(contact) => print_contact(contact),
        None => println!("Contact not found!"),
    }
    Ok(())
}

pub fn list(ctx: &mut CliContext) -> RolodexResult<()> {
    if ctx.directory.is_empty() {
        println!("No contacts found!");
        return Ok(());
    }
    for contact in ctx.directory.iter() {
        print_contact(contact);
        println!("{}", "-".repeat(20));
    }
    Ok(())
}

pub fn export(ctx: &mut CliContext) -> RolodexResult<()> {
    persistence::export(&ctx.directory, &ctx.contacts_path)?;
    println!("Contacts exported successfully!");
    Ok(())
}

/// A malformed line is not recovered here: it propagates to the menu
/// loop, leaving any records read before it already applied.
pub fn import(ctx: &mut CliContext) -> RolodexResult<()> {
    match persistence::import(&mut ctx.directory, &ctx.contacts_path) {
        Ok(()) => {
            println!("Contacts imported successfully!");
            Ok(())
        }
        Err(RolodexError::FileNotFound { .. }) => {
            println!("File not found!");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn print_contact(contact: &Contact) {
    println!("ID: {}", contact.id);
    println!("Name: {}", contact.name);
    println!("Phone: {}", contact.phone);
    println!("Email: {}", contact.email);
    println!("Additional Info: {}", contact.notes);
}
