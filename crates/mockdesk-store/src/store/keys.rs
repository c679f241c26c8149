use std::fmt;

/// Fixed storage keys. The names are shared with the dashboard and its
/// e2e seeders, so they must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Tasks,
    Users,
    Apps,
    Chats,
    DashboardStats,
    Auth,
}

impl StorageKey {
    pub const COUNT: usize = 6;

    pub const ALL: [StorageKey; Self::COUNT] = [
        Self::Tasks,
        Self::Users,
        Self::Apps,
        Self::Chats,
        Self::DashboardStats,
        Self::Auth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "shadcn_admin_tasks",
            Self::Users => "shadcn_admin_users",
            Self::Apps => "shadcn_admin_apps",
            Self::Chats => "shadcn_admin_chats",
            Self::DashboardStats => "shadcn_admin_dashboard_stats",
            Self::Auth => "shadcn_admin_auth",
        }
    }

    /// Short name used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Users => "users",
            Self::Apps => "apps",
            Self::Chats => "chats",
            Self::DashboardStats => "dashboard-stats",
            Self::Auth => "auth",
        }
    }

    /// Accepts either the short name or the full key.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.short_name() == name || k.as_str() == name)
    }

    pub(super) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_match_dashboard() {
        assert_eq!(StorageKey::Tasks.as_str(), "shadcn_admin_tasks");
        assert_eq!(StorageKey::Auth.as_str(), "shadcn_admin_auth");
        assert_eq!(
            StorageKey::DashboardStats.as_str(),
            "shadcn_admin_dashboard_stats"
        );
    }

    #[test]
    fn test_parse_short_and_full() {
        assert_eq!(StorageKey::parse("users"), Some(StorageKey::Users));
        assert_eq!(
            StorageKey::parse("shadcn_admin_chats"),
            Some(StorageKey::Chats)
        );
        assert_eq!(StorageKey::parse("widgets"), None);
    }

    #[test]
    fn test_indexes_are_distinct() {
        let mut seen: Vec<usize> = StorageKey::ALL.iter().map(|k| k.index()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), StorageKey::COUNT);
        assert!(seen.iter().all(|i| *i < StorageKey::COUNT));
    }
}
