pub mod contact_commands;
pub mod context;

use context::CliContext;

/// Run the interactive menu until the user chooses to quit (or stdin is
/// exhausted). Every handler failure is caught here, printed, and the
/// loop resumes; "Returning to the main menu..." prints at the end of
/// every iteration, the final one included.
pub fn run(ctx: &mut CliContext) {
    loop {
        print_menu();

        let choice = match ctx.read_line("Choose an option: ") {
            Some(c) => c,
            None => break,
        };

        let mut quitting = false;
        let result = match choice.as_str() {
            "1" => contact_commands::add(ctx),
            "2" => contact_commands::edit(ctx),
            "3" => contact_commands::delete(ctx),
            "4" => contact_commands::search(ctx),
            "5" => contact_commands::list(ctx),
            "6" => contact_commands::export(ctx),
            "7" => contact_commands::import(ctx),
            "8" => {
                println!("Exiting the program.");
                quitting = true;
                Ok(())
            }
            _ => {
                println!("Invalid choice. Please try again.");
                Ok(())
            }
        };

        if let Err(e) = result {
            println!("An error occurred: {}", e);
        }
        println!("Returning to the main menu...");

        if quitting {
            break;
        }
    }
}

fn print_menu() {
    println!("Welcome to the Contact Management System!");
    println!("Menu:");
    println!("1. Add a new contact");
    println!("2. Edit an existing contact");
    println!("3. Delete a contact");
    println!("4. Search for a contact");
    println!("5. Display all contacts");
    println!("6. Export contacts to a text file");
    println!("7. Import contacts from a text file");
    println!("8. Quit");
}
