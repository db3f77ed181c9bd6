//! Display implementation for hsutil messages.
//!
//! All user-facing text lives here so commands only deal in [`Message`]
//! variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNothingToDelete => "No configuration file to delete".to_string(),
            Message::ConfigModuleHubstaff => "Hubstaff settings".to_string(),
            Message::ConfigHubstaffMissing => {
                "Hubstaff is not configured. Run `hsutil init` or pass --config".to_string()
            }
            Message::ConfigLoadFailed(e) => format!("Failed to load configuration: {}", e),

            // === PROMPTS ===
            Message::PromptEmail => "Enter your Hubstaff email".to_string(),
            Message::PromptPassword => "Enter your Hubstaff password".to_string(),
            Message::PromptStorePassword => "Enter your Hubstaff password to store (leave empty to be asked every run)".to_string(),
            Message::PromptAppToken => "Enter your Hubstaff app token".to_string(),
            Message::PromptBaseUrl => "Enter the Hubstaff API URL".to_string(),
            Message::PromptApiVersion => "Enter the Hubstaff API version".to_string(),
            Message::PromptOrgName => "Enter the organization name".to_string(),
            Message::PromptPageLimit => "Enter the page size for API requests".to_string(),

            // === CONNECTION MESSAGES ===
            Message::Connecting(org) => format!("Connecting to Hubstaff organization '{}'", org),
            Message::ConnectFailed(e) => format!("Failed to connect to Hubstaff: {}", e),

            // === REPORT MESSAGES ===
            Message::ReportTimeFrame(start, end) => format!("Time frame: {} - {}", start, end),
            Message::ReportTestMode => "Test mode: using bundled fixture data".to_string(),
            Message::ReportFixture(path) => format!("Test mode: using fixture data from {}", path),
            Message::ReportEmpty => "No tracked time found for this time frame".to_string(),
            Message::ReportFailed(e) => format!("Failed to build report: {}", e),
            Message::ReportRangeInverted(from, to) => {
                format!("The start date {} is after the end date {}", from, to)
            }
        };
        write!(f, "{}", text)
    }
}
