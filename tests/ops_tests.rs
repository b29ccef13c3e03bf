use rolodex::error::RolodexError;
use rolodex::ops::contact_ops;
use rolodex::store::Directory;

fn setup() -> Directory {
    let mut directory = Directory::new();
    contact_ops::add_contact(
        &mut directory,
        "ann@example.com",
        "Ann",
        "1234567890",
        "ann@example.com",
        "vip",
    )
    .unwrap();
    directory
}

// ==========================================================================
// ADD
// ==========================================================================

#[test]
fn add_contact_stores_all_fields() {
    let directory = setup();
    let contact = directory.get("ann@example.com").unwrap();
    assert_eq!(contact.name, "Ann");
    assert_eq!(contact.phone, "1234567890");
    assert_eq!(contact.email, "ann@example.com");
    assert_eq!(contact.notes, "vip");
}

#[test]
fn add_contact_overwrites_existing_id_silently() {
    let mut directory = setup();
    contact_ops::add_contact(
        &mut directory,
        "ann@example.com",
        "Annabel",
        "+441234567890",
        "annabel@example.com",
        "",
    )
    .unwrap();

    assert_eq!(directory.len(), 1);
    let contact = directory.get("ann@example.com").unwrap();
    assert_eq!(contact.name, "Annabel");
    assert_eq!(contact.phone, "+441234567890");
}

#[test]
fn add_contact_allows_empty_name_and_notes() {
    let mut directory = Directory::new();
    let contact =
        contact_ops::add_contact(&mut directory, "x@y.co", "", "1234567890", "x@y.co", "")
            .unwrap();
    assert_eq!(contact.name, "");
    assert_eq!(contact.notes, "");
}

#[test]
fn add_contact_rejects_bad_phone() {
    let mut directory = Directory::new();
    let result =
        contact_ops::add_contact(&mut directory, "x@y.co", "X", "123", "x@y.co", "");
    assert!(matches!(result, Err(RolodexError::InvalidField { .. })));
    assert!(directory.is_empty());
}

#[test]
fn add_contact_rejects_bad_identifier() {
    let mut directory = Directory::new();
    let result =
        contact_ops::add_contact(&mut directory, "not-an-email", "X", "1234567890", "x@y.co", "");
    assert!(result.is_err());
    assert!(directory.is_empty());
}

#[test]
fn add_contact_rejects_bad_email() {
    let mut directory = Directory::new();
    let result =
        contact_ops::add_contact(&mut directory, "x@y.co", "X", "1234567890", "nope", "");
    assert!(result.is_err());
    assert!(directory.is_empty());
}

#[test]
fn add_contact_email_need_not_match_identifier() {
    let mut directory = Directory::new();
    let contact = contact_ops::add_contact(
        &mut directory,
        "work@corp.com",
        "X",
        "1234567890",
        "home@personal.net",
        "",
    )
    .unwrap();
    assert_eq!(contact.id, "work@corp.com");
    assert_eq!(contact.email, "home@personal.net");
}

// ==========================================================================
// UPDATE
// ==========================================================================

#[test]
fn update_contact_replaces_every_field() {
    let mut directory = setup();
    contact_ops::update_contact(
        &mut directory,
        "ann@example.com",
        "Ann B",
        "0987654321",
        "ann.b@example.com",
        "moved",
    )
    .unwrap();

    let contact = directory.get("ann@example.com").unwrap();
    assert_eq!(contact.name, "Ann B");
    assert_eq!(contact.phone, "0987654321");
    assert_eq!(contact.email, "ann.b@example.com");
    assert_eq!(contact.notes, "moved");
}

#[test]
fn update_contact_missing_id_leaves_directory_unchanged() {
    let mut directory = setup();
    let before = directory.get("ann@example.com").unwrap().clone();

    let result = contact_ops::update_contact(
        &mut directory,
        "bob@example.com",
        "Bob",
        "1112223334",
        "bob@example.com",
        "",
    );

    assert!(matches!(result, Err(RolodexError::NotFound { .. })));
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.get("ann@example.com").unwrap(), &before);
}

// ==========================================================================
// DELETE / FIND
// ==========================================================================

#[test]
fn delete_contact_removes_entry() {
    let mut directory = setup();
    contact_ops::delete_contact(&mut directory, "ann@example.com").unwrap();
    assert!(directory.is_empty());
    assert!(contact_ops::find_contact(&directory, "ann@example.com").is_none());
}

#[test]
fn delete_contact_missing_id_is_not_found() {
    let mut directory = setup();
    let result = contact_ops::delete_contact(&mut directory, "bob@example.com");
    assert!(matches!(result, Err(RolodexError::NotFound { .. })));
    assert_eq!(directory.len(), 1);
}

#[test]
fn find_contact_returns_last_written_record() {
    let mut directory = setup();
    contact_ops::add_contact(
        &mut directory,
        "ann@example.com",
        "Second",
        "5556667778",
        "ann@example.com",
        "rewritten",
    )
    .unwrap();

    let found = contact_ops::find_contact(&directory, "ann@example.com").unwrap();
    assert_eq!(found.name, "Second");
    assert_eq!(found.notes, "rewritten");
}

#[test]
fn directory_iterates_in_deterministic_order() {
    let mut directory = Directory::new();
    for id in ["c@z.com", "a@z.com", "b@z.com"] {
        contact_ops::add_contact(&mut directory, id, "", "1234567890", id, "").unwrap();
    }
    let ids: Vec<&str> = directory.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["a@z.com", "b@z.com", "c@z.com"]);
}
