//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "mockdesk".to_string()
}

pub fn default_data_dir() -> String {
    "~/.mockdesk".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}

pub fn default_api_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_api_port() -> u16 {
    3001
}

pub fn default_body_limit() -> usize {
    1024 * 1024
}

pub fn default_storage_backend() -> String {
    "memory".to_string()
}

pub fn default_db_path() -> String {
    "~/.mockdesk/data/store.db".to_string()
}
