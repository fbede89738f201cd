use std::io;

use log::error;

use crate::modules::auth::service::{login, register};
use crate::modules::auth::session::Session;
use crate::modules::auth::store::{CredentialStore, StoreError};
use crate::modules::portal::contacts::EMERGENCY_CONTACTS;
use crate::modules::portal::programs::PROGRAMS;
use crate::modules::portal::whatsapp::{attendance_link, complaint_link, contact_link, IssueType};
use crate::modules::utils::io::{read_line, read_password, read_required_field};
use crate::modules::utils::logging::log_auth_event;
use crate::modules::utils::time::current_date_string;

/// Result of one pass through the anonymous menu
#[derive(Debug)]
pub enum AuthFlowResult {
    LoggedIn(Session), // Successful login, carries the populated session
    Back,              // Show the menu again
    Exit,              // Leave the program
}

/// Result of one pass through the member dashboard
#[derive(Debug)]
enum DashboardResult {
    Stay,
    Logout,
}

/// Function to show options for visitors who are not logged in
fn show_anonymous_options() {
    println!("\n=== Yuva Shakti Community Portal ===");
    println!("1. Login            (or type 'login')");
    println!("2. Register         (or type 'register')");
    println!("3. Exit             (or type 'exit')");
    println!("\nEnter your choice   (1-3 or command):");
}

/// Function to show the dashboard menu for a logged-in member
fn show_dashboard_options(member_name: &str) {
    println!("\n=== Welcome, {} ===", member_name);
    println!("1. Home");
    println!("2. Programs");
    println!("3. Attendance");
    println!("4. Report Issue");
    println!("5. Emergency Contacts");
    println!("6. Profile");
    println!("7. Logout");
    println!("\nEnter your choice (1-7):");
}

// Storage failures are environment problems, not user problems. Log the
// detail, show a generic message, and let the caller redisplay the form.
fn report_store_error(e: &StoreError) {
    error!("Credential store failure: {}", e);
    println!("\nSomething went wrong. Please try again later.");
}

/// Main menu loop for anonymous visitors. Returns a populated session once
/// a login succeeds, or None when the user chooses to exit.
pub fn main_auth_flow(store: &CredentialStore) -> io::Result<Option<Session>> {
    loop {
        show_anonymous_options();

        // A closed stdin ends the program the same way an explicit exit does
        let result = match read_line()?.as_deref() {
            Some("1") | Some("login") => handle_login(store)?,
            Some("2") | Some("register") => {
                handle_registration(store)?;
                AuthFlowResult::Back
            }
            Some("3") | Some("exit") | Some("quit") | None => AuthFlowResult::Exit,
            Some(_) => {
                println!("\nInvalid choice. Please enter 1-3 or a command (login/register/exit).");
                AuthFlowResult::Back
            }
        };

        match result {
            AuthFlowResult::LoggedIn(session) => return Ok(Some(session)),
            AuthFlowResult::Back => continue,
            AuthFlowResult::Exit => {
                println!("Goodbye!");
                return Ok(None);
            }
        }
    }
}

/// Handle the login form. A wrong password and an unknown number get the
/// same message so the form does not reveal which phones are registered.
fn handle_login(store: &CredentialStore) -> io::Result<AuthFlowResult> {
    println!("\n--- Login ---");

    let phone = match read_required_field("Mobile Number")? {
        Some(phone) => phone,
        None => {
            println!("Please fill all fields.");
            return Ok(AuthFlowResult::Back);
        }
    };

    println!("Password:");
    let password = read_password()?;

    match login(store, &phone, &password) {
        Ok(Some(name)) => {
            log_auth_event("login", &phone, true, None);
            let mut session = Session::new();
            session.authenticate(name, phone);
            Ok(AuthFlowResult::LoggedIn(session))
        }
        Ok(None) => {
            log_auth_event("login", &phone, false, None);
            println!("\nInvalid details");
            Ok(AuthFlowResult::Back)
        }
        Err(e) => {
            report_store_error(&e);
            Ok(AuthFlowResult::Back)
        }
    }
}

/// Handle the registration form. Empty fields are rejected here, before the
/// auth service is called.
fn handle_registration(store: &CredentialStore) -> io::Result<()> {
    println!("\n--- Register ---");
    println!("Note: OTP verification is done in the Android app.");

    let name = read_required_field("Full Name")?;
    let phone = read_required_field("Mobile Number (OTP Verified)")?;

    println!("Create Password:");
    let password = read_password()?;

    let (name, phone) = match (name, phone) {
        (Some(name), Some(phone)) if !password.trim().is_empty() => (name, phone),
        _ => {
            println!("\nFill all fields");
            return Ok(());
        }
    };

    match register(store, &phone, &name, &password) {
        Ok(true) => {
            log_auth_event("register", &phone, true, None);
            println!("\nRegistered successfully! Login now.");
        }
        Ok(false) => {
            log_auth_event("register", &phone, false, Some("already registered"));
            println!("\nUser already exists");
        }
        Err(e) => report_store_error(&e),
    }

    Ok(())
}

/// Dashboard loop for a logged-in member. Runs until logout, then clears
/// the session.
pub fn handle_member_session(store: &CredentialStore, session: &mut Session) -> io::Result<()> {
    // The dashboard is only reachable with a populated session
    let (name, phone) = match (session.member_name(), session.member_phone()) {
        (Some(name), Some(phone)) => (name.to_string(), phone.to_string()),
        _ => return Ok(()),
    };

    loop {
        show_dashboard_options(&name);

        // A closed stdin logs the member out rather than respinning the menu
        let result = match read_line()?.as_deref() {
            Some("1") => {
                show_home();
                DashboardResult::Stay
            }
            Some("2") => {
                show_programs();
                DashboardResult::Stay
            }
            Some("3") => {
                handle_attendance(&name);
                DashboardResult::Stay
            }
            Some("4") => {
                handle_report_issue(&name)?;
                DashboardResult::Stay
            }
            Some("5") => {
                show_emergency_contacts();
                DashboardResult::Stay
            }
            Some("6") => {
                show_profile(store, &name, &phone);
                DashboardResult::Stay
            }
            Some("7") | Some("logout") | None => DashboardResult::Logout,
            Some(_) => {
                println!("\nInvalid choice. Please enter a number (1-7).");
                DashboardResult::Stay
            }
        };

        if let DashboardResult::Logout = result {
            session.logout();
            println!("\nLogged out.");
            return Ok(());
        }
    }
}

fn show_home() {
    println!("\nSunday meeting at ZPHS School - Attendance compulsory");
    println!("Welcome to Yuva Shakti!");
}

fn show_programs() {
    println!("\n--- Our Programs ---");
    for program in PROGRAMS {
        println!("\n{}", program.title);
        println!("  {}", program.description);
    }
}

fn handle_attendance(member_name: &str) {
    let today = current_date_string();
    let link = attendance_link(member_name, &today);
    println!("\nConfirm your attendance for {} via WhatsApp:", today);
    println!("{}", link);
}

fn handle_report_issue(member_name: &str) -> io::Result<()> {
    println!("\n--- Report Issue ---");

    let area = read_required_field("Area / Ward")?;

    println!("Issue Type:");
    for (i, issue) in IssueType::ALL.iter().enumerate() {
        println!("{}. {}", i + 1, issue);
    }
    println!("Enter choice (1-{}):", IssueType::ALL.len());
    let issue = read_line()?.and_then(|choice| IssueType::from_menu_choice(&choice));

    let details = read_required_field("Description")?;

    match (area, issue, details) {
        (Some(area), Some(issue), Some(details)) => {
            let link = complaint_link(member_name, &area, issue, &details);
            println!("\nSend your complaint via WhatsApp:");
            println!("{}", link);
        }
        _ => println!("\nFill all fields"),
    }

    Ok(())
}

fn show_emergency_contacts() {
    println!("\n--- Emergency Contacts ---");
    for (contact_name, number) in EMERGENCY_CONTACTS {
        println!("{:<20} {}", contact_name, contact_link(number));
    }
}

fn show_profile(store: &CredentialStore, name: &str, phone: &str) {
    println!("\n--- Profile ---");
    println!("Name:  {}", name);
    println!("Phone: {}", phone);

    // The join date lives in durable storage, not in the session
    match store.load() {
        Ok(members) => {
            if let Some(record) = members.get(phone) {
                println!("Joined: {}", record.joined_on);
            }
        }
        Err(e) => error!("Could not load member record for profile: {}", e),
    }

    println!("Active Member");
}
