use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{RolodexError, RolodexResult};
use crate::model::Contact;
use crate::store::Directory;

/// Default contacts file, relative to the working directory.
pub const CONTACTS_FILE: &str = "contacts.txt";

const FIELD_COUNT: usize = 5;

/// Write every entry as `id,name,phone,email,notes`, one per line,
/// replacing any previous file content. Fields are joined raw: an
/// embedded comma in name or notes is written as-is and will break the
/// field alignment on the next import.
pub fn export(directory: &Directory, path: &Path) -> RolodexResult<()> {
    let mut file = File::create(path)?;
    for contact in directory.iter() {
        writeln!(
            file,
            "{},{},{},{},{}",
            contact.id, contact.name, contact.phone, contact.email, contact.notes
        )?;
    }
    Ok(())
}

/// Read the contacts file line by line, upserting each parsed record as
/// it is read. Imported fields bypass the format rules entirely.
///
/// A line that does not split into exactly five fields aborts the whole
/// import with `MalformedRecord`: records before it have already been
/// applied, records after it are never read.
pub fn import(directory: &mut Directory, path: &Path) -> RolodexResult<()> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(RolodexError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let reader = BufReader::new(file);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let contact = parse_line(line.trim(), index + 1)?;
        directory.upsert(contact);
    }
    Ok(())
}

fn parse_line(line: &str, line_no: usize) -> RolodexResult<Contact> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(RolodexError::MalformedRecord {
            line: line_no,
            found: fields.len(),
        });
    }
    Ok(Contact::new(
        fields[0].to_string(),
        fields[1].to_string(),
        fields[2].to_string(),
        fields[3].to_string(),
        fields[4].to_string(),
    ))
}
