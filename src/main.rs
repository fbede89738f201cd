use clap::{Arg, Command}; // Import necessary modules from clap for command-line argument parsing

use yuva_portal::portal::user_interface::{handle_member_session, main_auth_flow};
use yuva_portal::utils::logging::initialize_logging;
use yuva_portal::{CredentialStore, DATA_FILE};

fn main() -> std::io::Result<()> {
    // Define the command-line interface using clap
    let matches = Command::new("yuva-portal")
        .about("Community membership portal for Yuva Shakti")
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .help("Path to the member store file")
                .value_name("FILE"),
        )
        .get_matches();

    // Logging is best-effort; the portal still works without it
    if let Err(e) = initialize_logging() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let data_file = matches
        .get_one::<String>("data-file")
        .map(String::as_str)
        .unwrap_or(DATA_FILE);
    let store = CredentialStore::new(data_file);

    // Alternate between the anonymous menu and the member dashboard until
    // the visitor chooses to exit
    loop {
        match main_auth_flow(&store)? {
            Some(mut session) => {
                handle_member_session(&store, &mut session)?;
            }
            None => break,
        }
    }

    Ok(())
}
