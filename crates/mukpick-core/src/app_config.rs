use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub http_timeout_secs: u64,
    pub position_timeout_secs: u64,
    pub locality_language: String,
    pub prefs_path: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("naver_client_id", &"[redacted]")
            .field("naver_client_secret", &"[redacted]")
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("position_timeout_secs", &self.position_timeout_secs)
            .field("locality_language", &self.locality_language)
            .field("prefs_path", &self.prefs_path)
            .finish()
    }
}
