//! Query engine: filtering, sorting and pagination over a loaded collection.
//!
//! Everything here is a pure function of (records, parameters). Filters are
//! applied before pagination, so `total` and `totalPages` describe the
//! filtered set.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::MockError;
use crate::models::{App, ChatConversation, Task, User};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Decoded query-string pairs, repeated keys preserved in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value for `key`.
    pub fn get_all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    }

    /// First value for `key`, or `""`.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    fn integer(&self, key: &str) -> Result<Option<i64>, MockError> {
        match self.get(key).map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse::<i64>()
                .map(Some)
                .map_err(|_| MockError::validation(key, format!("'{raw}' is not a number"))),
        }
    }
}

/// Which page of a filtered collection to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based.
    pub page: usize,
    /// 0 yields an empty page.
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Pages below 1 are clamped to 1.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    /// Read `page` and `pageSize`. Non-numeric or negative sizes are rejected.
    pub fn from_params(params: &QueryParams) -> Result<Self, MockError> {
        let page = params.integer("page")?.unwrap_or(DEFAULT_PAGE as i64);
        let page_size = params
            .integer("pageSize")?
            .unwrap_or(DEFAULT_PAGE_SIZE as i64);
        if page_size < 0 {
            return Err(MockError::validation("pageSize", "must not be negative"));
        }
        let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
        let page_size = usize::try_from(page_size).unwrap_or(usize::MAX);
        Ok(Self::new(page, page_size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Paginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Unpaginated list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
}

/// Slice `records` to the requested page.
pub fn paginate<T>(records: Vec<T>, pagination: Pagination) -> Page<T> {
    let Pagination { page, page_size } = pagination;
    let total = records.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    };
    let start = (page - 1).saturating_mul(page_size);
    let data = records.into_iter().skip(start).take(page_size).collect();

    Page {
        data,
        meta: PageMeta {
            page,
            page_size,
            total,
            total_pages,
        },
    }
}

/// Categorical match: an empty `wanted` set accepts everything.
pub fn matches_any(value: &str, wanted: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| w == value)
}

/// Case-insensitive substring match; an empty needle accepts everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(raw: Option<&str>) -> Result<Self, MockError> {
        match raw {
            None | Some("") | Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(MockError::validation(
                "sort",
                format!("'{other}' is not one of asc, desc"),
            )),
        }
    }
}

/// Order names alphabetically ignoring case, case-sensitive on ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// `GET /api/tasks` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub pagination: Pagination,
    pub status: Vec<String>,
    pub priority: Vec<String>,
    /// Matched against `id` and `title`.
    pub filter: String,
}

impl TaskQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, MockError> {
        Ok(Self {
            pagination: Pagination::from_params(params)?,
            status: params.get_all("status"),
            priority: params.get_all("priority"),
            filter: params.text("filter"),
        })
    }

    pub fn matches(&self, task: &Task) -> bool {
        matches_any(task.status.as_str(), &self.status)
            && matches_any(task.priority.as_str(), &self.priority)
            && (contains_ci(&task.id, &self.filter) || contains_ci(&task.title, &self.filter))
    }

    pub fn run(&self, tasks: Vec<Task>) -> Page<Task> {
        let filtered = tasks.into_iter().filter(|t| self.matches(t)).collect();
        paginate(filtered, self.pagination)
    }
}

/// `GET /api/users` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserQuery {
    pub pagination: Pagination,
    pub status: Vec<String>,
    pub role: Vec<String>,
    pub username: String,
}

impl UserQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, MockError> {
        Ok(Self {
            pagination: Pagination::from_params(params)?,
            status: params.get_all("status"),
            role: params.get_all("role"),
            username: params.text("username"),
        })
    }

    pub fn matches(&self, user: &User) -> bool {
        matches_any(user.status.as_str(), &self.status)
            && matches_any(user.role.as_str(), &self.role)
            && contains_ci(&user.username, &self.username)
    }

    pub fn run(&self, users: Vec<User>) -> Page<User> {
        let filtered = users.into_iter().filter(|u| self.matches(u)).collect();
        paginate(filtered, self.pagination)
    }
}

/// Connection filter for the apps page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppType {
    #[default]
    All,
    Connected,
    NotConnected,
}

impl AppType {
    fn parse(raw: Option<&str>) -> Result<Self, MockError> {
        match raw {
            None | Some("") | Some("all") => Ok(Self::All),
            Some("connected") => Ok(Self::Connected),
            Some("notConnected") => Ok(Self::NotConnected),
            Some(other) => Err(MockError::validation(
                "type",
                format!("'{other}' is not one of all, connected, notConnected"),
            )),
        }
    }
}

/// `GET /api/apps` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppQuery {
    pub app_type: AppType,
    pub filter: String,
    pub sort: SortOrder,
}

impl AppQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, MockError> {
        Ok(Self {
            app_type: AppType::parse(params.get("type"))?,
            filter: params.text("filter"),
            sort: SortOrder::parse(params.get("sort"))?,
        })
    }

    pub fn matches(&self, app: &App) -> bool {
        let type_ok = match self.app_type {
            AppType::All => true,
            AppType::Connected => app.connected,
            AppType::NotConnected => !app.connected,
        };
        type_ok && contains_ci(&app.name, &self.filter)
    }

    pub fn run(&self, apps: Vec<App>) -> Listing<App> {
        let mut data: Vec<App> = apps.into_iter().filter(|a| self.matches(a)).collect();
        data.sort_by(|a, b| match self.sort {
            SortOrder::Asc => compare_names(&a.name, &b.name),
            SortOrder::Desc => compare_names(&b.name, &a.name),
        });
        Listing { data }
    }
}

/// `GET /api/chats` parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatQuery {
    /// Matched against `fullName`.
    pub search: String,
}

impl ChatQuery {
    pub fn from_params(params: &QueryParams) -> Result<Self, MockError> {
        Ok(Self {
            search: params.text("search"),
        })
    }

    pub fn run(&self, chats: Vec<ChatConversation>) -> Listing<ChatConversation> {
        Listing {
            data: chats
                .into_iter()
                .filter(|c| contains_ci(&c.full_name, &self.search))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests;
