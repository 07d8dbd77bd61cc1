//! Session lifecycle lines, printed through the CLI message helpers

use crate::{print_cmd_info, print_cmd_success};

fn starting_details(backend_url: &str, refresh_secs: u64) -> String {
    format!("polling {} every {}s", backend_url, refresh_secs)
}

/// Print session startup message
pub fn print_session_starting(mode: &str, backend_url: &str, refresh_secs: u64) {
    print_cmd_info!(
        &format!("Starting {} mode", mode),
        "{}",
        starting_details(backend_url, refresh_secs)
    );
}

/// Print session shutdown message
pub fn print_session_shutdown() {
    print_cmd_info!("Shutting down...", "");
}

/// Print session exit message
pub fn print_session_exit_success() {
    print_cmd_success!("Signal dashboard exited", "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_line_names_backend_and_cadence() {
        assert_eq!(
            starting_details("http://localhost:5000", 30),
            "polling http://localhost:5000 every 30s"
        );
    }
}
