/// A contact record. The `id` doubles as the directory key and must be
/// email-shaped; `name` and `notes` are free text and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl Contact {
    pub fn new(id: String, name: String, phone: String, email: String, notes: String) -> Self {
        Self {
            id,
            name,
            phone,
            email,
            notes,
        }
    }
}
