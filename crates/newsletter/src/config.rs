//! Configuration for the newsletter run.

/// Default NYT Books overview endpoint.
pub const DEFAULT_BOOKS_API_URL: &str = "https://api.nytimes.com/svc/books/v3/lists/overview.json";

/// Default OpenAI chat-completions endpoint.
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Default model used for book summaries.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default Gmail SMTP host.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default Gmail SMTP port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Secrets that must be present for a run to succeed end to end.
const REQUIRED_VARS: &[&str] = &[
    "NYT_API_KEY",
    "OPENAI_API_KEY",
    "EMAIL_ADDRESS",
    "EMAIL_PASSWORD",
];

/// Configuration for a single newsletter run.
///
/// Built once at process entry and handed to each stage; nothing below
/// `main` reads the environment.
#[derive(Debug, Clone)]
pub struct NewsletterConfig {
    /// NYT Books API key.
    pub nyt_api_key: String,
    /// OpenAI API key.
    pub openai_api_key: String,
    /// Mail account address. Used as sender, recipient and SMTP username.
    pub email_address: String,
    /// Mail account password (Gmail app password).
    pub email_password: String,
    /// Model used for summaries.
    pub model: String,
    /// Books overview endpoint.
    pub books_api_url: String,
    /// Chat-completions endpoint.
    pub openai_api_url: String,
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port.
    pub smtp_port: u16,
}

impl NewsletterConfig {
    /// Create configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `NYT_API_KEY`, `OPENAI_API_KEY`, `EMAIL_ADDRESS`, `EMAIL_PASSWORD`
    ///
    /// Missing secrets are not rejected here. They are logged and left empty,
    /// so the failure shows up at the service that rejects them.
    ///
    /// # Optional Environment Variables
    /// - `NEWSLETTER_MODEL`: Summary model (default: gpt-3.5-turbo)
    /// - `NYT_API_URL`: Books overview endpoint
    /// - `OPENAI_API_URL`: Chat-completions endpoint
    /// - `SMTP_HOST`: SMTP host (default: smtp.gmail.com)
    /// - `SMTP_PORT`: SMTP port (default: 587)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for &key in REQUIRED_VARS {
            if lookup(key).unwrap_or_default().is_empty() {
                tracing::warn!(var = key, "Required environment variable not set");
            }
        }

        let secret = |key: &str| lookup(key).unwrap_or_default();
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let smtp_port = lookup("SMTP_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        Self {
            nyt_api_key: secret("NYT_API_KEY"),
            openai_api_key: secret("OPENAI_API_KEY"),
            email_address: secret("EMAIL_ADDRESS"),
            email_password: secret("EMAIL_PASSWORD"),
            model: or_default("NEWSLETTER_MODEL", DEFAULT_MODEL),
            books_api_url: or_default("NYT_API_URL", DEFAULT_BOOKS_API_URL),
            openai_api_url: or_default("OPENAI_API_URL", DEFAULT_OPENAI_API_URL),
            smtp_host: or_default("SMTP_HOST", DEFAULT_SMTP_HOST),
            smtp_port,
        }
    }
}
