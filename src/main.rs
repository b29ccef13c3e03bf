use rolodex::cli::{self, context::CliContext};
use rolodex::persistence::CONTACTS_FILE;

fn main() {
    let mut ctx = CliContext::new(CONTACTS_FILE.into());
    cli::run(&mut ctx);
}
