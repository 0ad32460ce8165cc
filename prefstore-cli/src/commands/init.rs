//! Init command - create the store file.

use prefstore::Prefs;

use crate::error::CliError;

/// Run the init command.
///
/// The bootstrap has already opened the store; this persists it so the file
/// exists on disk even before the first value is written.
pub fn run(prefs: &Prefs) -> Result<(), CliError> {
    prefs.flush()?;

    println!("Preference store: {}", prefs.path().display());
    println!();
    println!("Values are stored as a JSON document and can be inspected directly.");
    println!("Use 'prefstore set' and 'prefstore get' to work with them.");

    Ok(())
}
