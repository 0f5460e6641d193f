//! Wire models for the JARVIS backend API, plus the pure list helpers
//! (filtering, sorting, license pricing) used by the user table.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    pub is_verified: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub domain: String,
    pub last_sign_in: Option<String>,
    pub account_enabled: bool,
    pub license_type: Option<String>,
    pub department: Option<String>,
    pub manager: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: usize,
    pub monthly_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub username: String,
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_email: Option<String>,
    pub license_type: String,
}

/// Reply shape of the disable/delete endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AskRequest {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AiAnalysisResponse {
    pub response: String,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

pub const LICENSE_TYPES: [&str; 2] = ["Business Basic", "Business Standard"];

/// Per-seat monthly price, mirroring the backend's estimate:
/// any "Standard" license bills at $12.50, everything else at $6.00.
pub fn license_monthly_cost(license: &str) -> f64 {
    if license.contains("Standard") { 12.50 } else { 6.00 }
}

/// Case-insensitive substring filter over name, email and department.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return users.iter().collect();
    }
    users
        .iter()
        .filter(|u| {
            u.display_name.to_lowercase().contains(&q)
                || u.email.to_lowercase().contains(&q)
                || u.department
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&q))
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    LastSignIn,
}

/// Stable sort of an already-filtered view. RFC 3339 timestamps order
/// correctly under plain string comparison; users who never signed in
/// sort after everyone else regardless of direction.
pub fn sort_users(users: &mut [&User], key: SortKey, ascending: bool) {
    users.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a
                .display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase()),
            SortKey::Email => a.email.to_lowercase().cmp(&b.email.to_lowercase()),
            SortKey::LastSignIn => match (&a.last_sign_in, &b.last_sign_in) {
                (Some(x), Some(y)) => x.cmp(y),
                (Some(_), None) => return std::cmp::Ordering::Less,
                (None, Some(_)) => return std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            },
        };
        if ascending { ord } else { ord.reverse() }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, dept: Option<&str>, signed_in: Option<&str>) -> User {
        User {
            id: email.to_string(),
            email: email.to_string(),
            display_name: name.to_string(),
            domain: "example.com".to_string(),
            last_sign_in: signed_in.map(str::to_string),
            account_enabled: true,
            license_type: Some("Business Basic".to_string()),
            department: dept.map(str::to_string),
            manager: None,
        }
    }

    #[test]
    fn license_pricing_matches_backend() {
        assert_eq!(license_monthly_cost("Business Basic"), 6.00);
        assert_eq!(license_monthly_cost("Business Standard"), 12.50);
        assert_eq!(license_monthly_cost("E3 Standard Trial"), 12.50);
    }

    #[test]
    fn filter_matches_name_email_and_department() {
        let users = vec![
            user("Ada Lovelace", "ada@example.com", Some("Engineering"), None),
            user("Grace Hopper", "grace@example.com", None, None),
        ];
        assert_eq!(filter_users(&users, "ADA").len(), 1);
        assert_eq!(filter_users(&users, "grace@").len(), 1);
        assert_eq!(filter_users(&users, "engineer").len(), 1);
        assert_eq!(filter_users(&users, "  ").len(), 2);
        assert!(filter_users(&users, "nobody").is_empty());
    }

    #[test]
    fn sort_by_last_sign_in_puts_never_last() {
        let users = vec![
            user("A", "a@x.com", None, Some("2024-03-01T00:00:00Z")),
            user("B", "b@x.com", None, None),
            user("C", "c@x.com", None, Some("2023-01-15T00:00:00Z")),
        ];
        let mut view: Vec<&User> = users.iter().collect();
        sort_users(&mut view, SortKey::LastSignIn, true);
        let order: Vec<&str> = view.iter().map(|u| u.display_name.as_str()).collect();
        assert_eq!(order, ["C", "A", "B"]);
        sort_users(&mut view, SortKey::LastSignIn, false);
        let order: Vec<&str> = view.iter().map(|u| u.display_name.as_str()).collect();
        assert_eq!(order, ["A", "C", "B"]);
    }

    #[test]
    fn sort_by_name_is_case_insensitive() {
        let users = vec![
            user("zoe", "z@x.com", None, None),
            user("Alice", "al@x.com", None, None),
        ];
        let mut view: Vec<&User> = users.iter().collect();
        sort_users(&mut view, SortKey::Name, true);
        assert_eq!(view[0].display_name, "Alice");
    }
}
