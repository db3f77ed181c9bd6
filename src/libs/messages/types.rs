#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNothingToDelete,
    ConfigModuleHubstaff,
    ConfigHubstaffMissing,
    ConfigLoadFailed(String),

    // === PROMPTS ===
    PromptEmail,
    PromptPassword,
    PromptStorePassword,
    PromptAppToken,
    PromptBaseUrl,
    PromptApiVersion,
    PromptOrgName,
    PromptPageLimit,

    // === CONNECTION MESSAGES ===
    Connecting(String), // organization name
    ConnectFailed(String),

    // === REPORT MESSAGES ===
    ReportTimeFrame(String, String), // start, end
    ReportTestMode,
    ReportFixture(String), // path
    ReportEmpty,
    ReportFailed(String),
    ReportRangeInverted(String, String), // from, to
}
