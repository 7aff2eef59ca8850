use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::User;
use crate::session::{use_session, SessionInformation};
use crate::Route;

/* ---------------- visibility rules ---------------- */
// Presentation-layer convenience only; the server stays authoritative.

/// Create / edit / delete-any controls render for admins only.
pub fn admin_controls_visible(principal: Option<&SessionInformation>) -> bool {
    principal.map(|p| p.admin).unwrap_or(false)
}

/// The delete-account control renders only on the principal's own record,
/// and never for admins.
pub fn self_delete_visible(principal: Option<&SessionInformation>, viewed: &User) -> bool {
    match principal {
        Some(p) => !viewed.admin && p.id == viewed.id,
        None => false,
    }
}

/* ---------------- route guard ---------------- */

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Renders its children only for a logged-in principal; otherwise sends the
/// visitor back to the login page.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    match use_session() {
        Some(_) => html! { for props.children.iter() },
        None => html!(<Redirect<Route> to={Route::Login} />),
    }
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: i64, admin: bool) -> SessionInformation {
        SessionInformation {
            id,
            username: "user@test.com".into(),
            first_name: "User".into(),
            last_name: "Test".into(),
            admin,
            token: "fake-jwt-token".into(),
            token_type: "Bearer".into(),
        }
    }

    fn account(id: i64, admin: bool) -> User {
        User {
            id,
            email: "user@test.com".into(),
            first_name: "User".into(),
            last_name: "Test".into(),
            admin,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn admin_controls_require_the_admin_flag() {
        assert!(admin_controls_visible(Some(&principal(1, true))));
        assert!(!admin_controls_visible(Some(&principal(1, false))));
        assert!(!admin_controls_visible(None));
    }

    #[test]
    fn self_delete_only_on_own_account() {
        let me = principal(1, false);
        assert!(self_delete_visible(Some(&me), &account(1, false)));
        assert!(!self_delete_visible(Some(&me), &account(2, false)));
        assert!(!self_delete_visible(None, &account(1, false)));
    }

    #[test]
    fn admins_never_see_self_delete() {
        let admin = principal(1, true);
        assert!(!self_delete_visible(Some(&admin), &account(1, true)));
    }
}
