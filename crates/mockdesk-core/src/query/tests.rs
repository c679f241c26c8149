use super::*;
use crate::models::{TaskLabel, TaskPriority, TaskStatus, UserRole, UserStatus};
use chrono::Utc;

fn params(pairs: &[(&str, &str)]) -> QueryParams {
    QueryParams::new(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

fn task(id: &str, title: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    let now = Utc::now();
    Task {
        id: id.to_string(),
        title: title.to_string(),
        status,
        priority,
        label: TaskLabel::Feature,
        assignee: None,
        description: None,
        created_at: now,
        updated_at: now,
        due_date: None,
    }
}

fn seeded_tasks() -> Vec<Task> {
    vec![
        task("TASK-1001", "Implement login feature", TaskStatus::InProgress, TaskPriority::High),
        task("TASK-1002", "Fix navigation bug", TaskStatus::Todo, TaskPriority::Medium),
        task("TASK-1003", "Update documentation", TaskStatus::Done, TaskPriority::Low),
        task("TASK-1004", "Add unit tests", TaskStatus::Backlog, TaskPriority::Medium),
        task("TASK-1005", "Refactor API layer", TaskStatus::Canceled, TaskPriority::High),
    ]
}

fn user(username: &str, status: UserStatus, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: format!("id-{username}"),
        first_name: "F".to_string(),
        last_name: "L".to_string(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        phone_number: None,
        status,
        role,
        created_at: now,
        updated_at: now,
    }
}

fn app(id: &str, name: &str, connected: bool) -> App {
    App {
        id: id.to_string(),
        name: name.to_string(),
        desc: String::new(),
        connected,
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[test]
fn test_pagination_defaults() {
    let p = Pagination::from_params(&QueryParams::default()).unwrap();
    assert_eq!(p, Pagination::new(1, 10));
}

#[test]
fn test_pagination_rejects_garbage() {
    let err = Pagination::from_params(&params(&[("pageSize", "ten")])).unwrap_err();
    assert!(matches!(err, MockError::Validation { ref field, .. } if field == "pageSize"));
    assert!(Pagination::from_params(&params(&[("pageSize", "-3")])).is_err());
    assert!(Pagination::from_params(&params(&[("page", "x")])).is_err());
}

#[test]
fn test_pagination_clamps_low_pages() {
    let p = Pagination::from_params(&params(&[("page", "0")])).unwrap();
    assert_eq!(p.page, 1);
    let p = Pagination::from_params(&params(&[("page", "-4")])).unwrap();
    assert_eq!(p.page, 1);
}

#[test]
fn test_pages_partition_collection() {
    let records: Vec<u32> = (0..23).collect();
    let page_size = 5;
    let mut seen = Vec::new();
    let first = paginate(records.clone(), Pagination::new(1, page_size));
    assert_eq!(first.meta.total, 23);
    assert_eq!(first.meta.total_pages, 5);

    for page in 1..=first.meta.total_pages {
        let slice = paginate(records.clone(), Pagination::new(page, page_size));
        if page == 5 {
            assert_eq!(slice.data.len(), 23 % 5);
        } else {
            assert_eq!(slice.data.len(), page_size);
        }
        seen.extend(slice.data);
    }
    assert_eq!(seen, records, "every record exactly once, in order");
}

#[test]
fn test_exact_multiple_last_page_is_full() {
    let records: Vec<u32> = (0..20).collect();
    let last = paginate(records, Pagination::new(4, 5));
    assert_eq!(last.meta.total_pages, 4);
    assert_eq!(last.data.len(), 5);
}

#[test]
fn test_page_past_end_is_empty() {
    let page = paginate(vec![1, 2, 3], Pagination::new(9, 10));
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.total_pages, 1);
}

#[test]
fn test_zero_page_size_is_empty_page() {
    let page = paginate(vec![1, 2, 3], Pagination::new(1, 0));
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.total_pages, 0);
    assert_eq!(page.meta.page_size, 0);
}

#[test]
fn test_empty_collection() {
    let page = paginate(Vec::<u8>::new(), Pagination::default());
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total_pages, 0);
}

#[test]
fn test_huge_page_does_not_overflow() {
    let page = paginate(vec![1, 2, 3], Pagination::new(usize::MAX, usize::MAX));
    assert!(page.data.is_empty());
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[test]
fn test_task_free_text_filter() {
    let q = TaskQuery::from_params(&params(&[("filter", "login")])).unwrap();
    let page = q.run(seeded_tasks());
    let ids: Vec<&str> = page.data.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TASK-1001"]);
}

#[test]
fn test_task_filter_matches_id_case_insensitively() {
    let q = TaskQuery::from_params(&params(&[("filter", "task-1003")])).unwrap();
    let page = q.run(seeded_tasks());
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].title, "Update documentation");
}

#[test]
fn test_task_multi_status_filter() {
    let q = TaskQuery::from_params(&params(&[("status", "done"), ("status", "todo")])).unwrap();
    let page = q.run(seeded_tasks());
    let ids: Vec<&str> = page.data.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TASK-1002", "TASK-1003"]);
}

#[test]
fn test_task_status_with_space() {
    let q = TaskQuery::from_params(&params(&[("status", "in progress")])).unwrap();
    assert_eq!(q.run(seeded_tasks()).data.len(), 1);
}

#[test]
fn test_task_no_status_returns_all() {
    let q = TaskQuery::from_params(&QueryParams::default()).unwrap();
    assert_eq!(q.run(seeded_tasks()).meta.total, 5);
}

#[test]
fn test_task_filters_apply_before_pagination() {
    let q = TaskQuery::from_params(&params(&[
        ("priority", "medium"),
        ("priority", "high"),
        ("pageSize", "2"),
        ("page", "2"),
    ]))
    .unwrap();
    let page = q.run(seeded_tasks());
    assert_eq!(page.meta.total, 4);
    assert_eq!(page.meta.total_pages, 2);
    let ids: Vec<&str> = page.data.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["TASK-1004", "TASK-1005"]);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[test]
fn test_username_filter_is_case_insensitive() {
    let users = vec![
        user("john_doe", UserStatus::Active, UserRole::Admin),
        user("jane_smith", UserStatus::Active, UserRole::Manager),
    ];
    let q = UserQuery::from_params(&params(&[("username", "JOHN")])).unwrap();
    let page = q.run(users);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].username, "john_doe");
}

#[test]
fn test_user_status_and_role_filters_combine() {
    let users = vec![
        user("a", UserStatus::Active, UserRole::Admin),
        user("b", UserStatus::Inactive, UserRole::Admin),
        user("c", UserStatus::Active, UserRole::Cashier),
    ];
    let q = UserQuery::from_params(&params(&[("status", "active"), ("role", "admin")])).unwrap();
    let page = q.run(users);
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].username, "a");
}

// ---------------------------------------------------------------------------
// Apps
// ---------------------------------------------------------------------------

#[test]
fn test_apps_sorted_ascending_by_default() {
    let apps = vec![app("1", "Slack", true), app("2", "figma", false), app("3", "GitHub", true)];
    let q = AppQuery::from_params(&QueryParams::default()).unwrap();
    let names: Vec<String> = q.run(apps).data.into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["figma", "GitHub", "Slack"]);
}

#[test]
fn test_apps_descending_and_type_filter() {
    let apps = vec![
        app("1", "Slack", true),
        app("2", "Figma", false),
        app("3", "GitHub", true),
        app("4", "Zoom", true),
    ];
    let q = AppQuery::from_params(&params(&[("type", "connected"), ("sort", "desc")])).unwrap();
    let names: Vec<String> = q.run(apps.clone()).data.into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Zoom", "Slack", "GitHub"]);

    let q = AppQuery::from_params(&params(&[("type", "notConnected")])).unwrap();
    let names: Vec<String> = q.run(apps).data.into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Figma"]);
}

#[test]
fn test_apps_name_filter() {
    let apps = vec![app("1", "Notion", false), app("2", "Zoom", true)];
    let q = AppQuery::from_params(&params(&[("filter", "OTI")])).unwrap();
    assert_eq!(q.run(apps).data.len(), 1);
}

#[test]
fn test_apps_reject_unknown_sort_and_type() {
    assert!(AppQuery::from_params(&params(&[("sort", "sideways")])).is_err());
    assert!(AppQuery::from_params(&params(&[("type", "maybe")])).is_err());
}

// ---------------------------------------------------------------------------
// Chats and params
// ---------------------------------------------------------------------------

#[test]
fn test_chat_search_by_full_name() {
    let chats = vec![
        ChatConversation {
            id: "chat-001".to_string(),
            username: "john_doe".to_string(),
            full_name: "John Doe".to_string(),
            title: "Test User".to_string(),
            profile: String::new(),
            messages: vec![],
        },
        ChatConversation {
            id: "chat-002".to_string(),
            username: "jane_smith".to_string(),
            full_name: "Jane Smith".to_string(),
            title: "Test User".to_string(),
            profile: String::new(),
            messages: vec![],
        },
    ];
    let q = ChatQuery::from_params(&params(&[("search", "smith")])).unwrap();
    let listing = q.run(chats);
    assert_eq!(listing.data.len(), 1);
    assert_eq!(listing.data[0].id, "chat-002");
}

#[test]
fn test_query_params_repeated_keys() {
    let p = params(&[("status", "done"), ("status", ""), ("status", "todo"), ("filter", "x")]);
    assert_eq!(p.get_all("status"), vec!["done".to_string(), "todo".to_string()]);
    assert_eq!(p.get("filter"), Some("x"));
    assert_eq!(p.text("missing"), "");
}
