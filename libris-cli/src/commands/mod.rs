//! CLI command implementations

mod add;
mod find;
mod list;
mod lookup;
mod menu;
mod remove;

pub use add::add;
pub use find::find;
pub use list::list;
pub use lookup::lookup;
pub use menu::menu;
pub use remove::remove;

use libris_core::{ErrorClass, LibrisError};

/// Hint printed after failures caused by the remote service
const NETWORK_HINT: &str = "Please check your internet connection or try again later.";

/// Human-readable lines describing a core error
fn describe(err: &LibrisError) -> Vec<String> {
    match err.class() {
        ErrorClass::Dependency => vec![format!("Network Error: {}", err), NETWORK_HINT.to_string()],
        ErrorClass::Input | ErrorClass::Internal => vec![format!("Error: {}", err)],
    }
}
