//! Frontend Models
//!
//! Data structures matching the remote users endpoint.

use serde::{Deserialize, Serialize};

/// A single user record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// One page of the paginated users collection.
/// Extra envelope fields (per_page, total, support) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    pub page: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_page_parses_remote_envelope() {
        let body = r#"{
            "page": 1,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [
                {
                    "id": 1,
                    "email": "george.bluth@reqres.in",
                    "first_name": "George",
                    "last_name": "Bluth",
                    "avatar": "https://reqres.in/img/faces/1-image.jpg"
                }
            ],
            "support": {
                "url": "https://reqres.in/#support-heading",
                "text": "Tired of writing endless social media content?"
            }
        }"#;

        let page: UsersPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].first_name, "George");
        assert_eq!(page.data[0].email, "george.bluth@reqres.in");
    }
}
