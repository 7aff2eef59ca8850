use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/*                        records exchanged with the API                      */
/* -------------------------------------------------------------------------- */

/// A scheduled yoga class with a teacher and a participant roster.
/// Server-owned; the client never caches it beyond the current screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RentalSession {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: String,
    pub teacher_id: i64,
    pub users: Vec<i64>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl RentalSession {
    pub fn has_participant(&self, user_id: i64) -> bool {
        self.users.contains(&user_id)
    }

    /// Adds the user to the roster if absent. A user id appears at most once.
    pub fn with_participant(mut self, user_id: i64) -> Self {
        if !self.users.contains(&user_id) {
            self.users.push(user_id);
        }
        self
    }

    /// Removes the user from the roster if present.
    pub fn without_participant(mut self, user_id: i64) -> Self {
        self.users.retain(|u| *u != user_id);
        self
    }
}

/// Body of create / update calls; the id comes from the route, never the form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    pub name: String,
    pub date: String,
    pub teacher_id: i64,
    pub description: String,
}

/// Read-only from the client's perspective.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Account record. The password is write-only (registration body) and never
/// part of this type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub admin: bool,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl User {
    /// Display form used by the account page: "John DOE".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.to_uppercase())
    }
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn yoga_flow() -> RentalSession {
        RentalSession {
            id: 1,
            name: "Yoga Flow".into(),
            description: "A dynamic yoga session for all levels".into(),
            date: "2024-06-15".into(),
            teacher_id: 1,
            users: vec![2, 3],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn join_then_leave_restores_the_roster() {
        let original = yoga_flow();
        let round_trip = original.clone().with_participant(1).without_participant(1);
        assert_eq!(round_trip.users, original.users);
    }

    #[test]
    fn joining_twice_does_not_duplicate_the_id() {
        let s = yoga_flow().with_participant(1).with_participant(1);
        assert_eq!(s.users, vec![2, 3, 1]);
    }

    #[test]
    fn leaving_a_session_not_joined_is_a_no_op() {
        let s = yoga_flow().without_participant(42);
        assert_eq!(s.users, vec![2, 3]);
    }

    #[test]
    fn membership_check_follows_the_roster() {
        let s = yoga_flow();
        assert!(!s.has_participant(1));
        assert!(s.clone().with_participant(1).has_participant(1));
        assert!(!s.without_participant(2).has_participant(2));
    }

    #[test]
    fn deserializes_a_session_record() {
        let raw = r#"{
            "id": 1,
            "name": "Yoga Flow",
            "description": "A dynamic yoga session for all levels",
            "date": "2024-06-15",
            "teacher_id": 1,
            "users": [2, 3],
            "createdAt": "2024-06-01T10:00:00",
            "updatedAt": "2024-06-01T10:00:00"
        }"#;
        let s: RentalSession = serde_json::from_str(raw).unwrap();
        assert_eq!(s.name, "Yoga Flow");
        assert_eq!(s.teacher_id, 1);
        assert_eq!(s.users, vec![2, 3]);
        assert!(s.created_at.is_some());
    }

    #[test]
    fn timestamps_are_optional() {
        let raw = r#"{"id":2,"name":"n","description":"d","date":"2024-07-01","teacher_id":1,"users":[]}"#;
        let s: RentalSession = serde_json::from_str(raw).unwrap();
        assert_eq!(s.created_at, None);
    }

    #[test]
    fn payload_serializes_the_backend_field_names() {
        let p = SessionPayload {
            name: "Evening Relaxation".into(),
            date: "2024-07-01".into(),
            teacher_id: 1,
            description: "Relax and unwind after a long day".into(),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["teacher_id"], 1);
        assert_eq!(v["name"], "Evening Relaxation");
    }

    #[test]
    fn user_and_teacher_display_forms() {
        let raw = r#"{
            "id": 1,
            "email": "jones@studio.com",
            "firstName": "Jones",
            "lastName": "Test",
            "admin": false,
            "createdAt": "2023-01-15",
            "updatedAt": "2023-01-15"
        }"#;
        let u: User = serde_json::from_str(raw).unwrap();
        assert_eq!(u.display_name(), "Jones TEST");

        let t: Teacher = serde_json::from_str(
            r#"{"id":1,"firstName":"Sophie","lastName":"Laurent"}"#,
        )
        .unwrap();
        assert_eq!(t.full_name(), "Sophie Laurent");
    }
}
