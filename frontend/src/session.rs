use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

/* ---------------- session information ---------------- */

/// Identity of the logged-in principal, as returned by `POST /api/auth/login`.
/// Held for the lifetime of the tab, never persisted across reloads.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionInformation {
    pub id: i64,
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub admin: bool,
    #[serde(default)]
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
}

/* ---------------- process-wide store ---------------- */

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct Store {
    current: Option<SessionInformation>,
    next_id: usize,
    listeners: Vec<(usize, Listener)>,
}

thread_local! {
    static STORE: RefCell<Store> = RefCell::default();
}

fn set_current(value: Option<SessionInformation>) {
    let logged = value.is_some();
    // Collect first so no borrow is held while listeners run.
    let listeners: Vec<Listener> = STORE.with(|s| {
        let mut s = s.borrow_mut();
        s.current = value;
        s.listeners.iter().map(|(_, l)| l.clone()).collect()
    });
    for l in listeners {
        l(logged);
    }
}

/// Stores the principal and notifies every subscriber with `true`.
pub fn log_in(info: SessionInformation) {
    set_current(Some(info));
}

/// Clears the principal and notifies every subscriber with `false`.
pub fn log_out() {
    set_current(None);
}

pub fn current() -> Option<SessionInformation> {
    STORE.with(|s| s.borrow().current.clone())
}

pub fn is_logged() -> bool {
    STORE.with(|s| s.borrow().current.is_some())
}

/// Bearer credential for the HTTP layer, when one exists.
pub fn bearer() -> Option<String> {
    STORE.with(|s| {
        s.borrow()
            .current
            .as_ref()
            .filter(|i| !i.token.is_empty())
            .map(|i| i.token.clone())
    })
}

/// Subscribes to the logged-in flag. The latest value is replayed to the
/// subscriber immediately; afterwards it is called on every change.
pub fn subscribe(f: impl Fn(bool) + 'static) -> usize {
    let f: Listener = Rc::new(f);
    let (id, logged) = STORE.with(|s| {
        let mut s = s.borrow_mut();
        s.next_id += 1;
        let id = s.next_id;
        s.listeners.push((id, f.clone()));
        (id, s.current.is_some())
    });
    f(logged);
    id
}

pub fn unsubscribe(id: usize) {
    STORE.with(|s| s.borrow_mut().listeners.retain(|(i, _)| *i != id));
}

/* ---------------- yew provider + hook ---------------- */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Mirrors the store into a context so the UI re-renders on login/logout.
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let principal = use_state(current);

    {
        let principal = principal.clone();
        use_effect_with((), move |_| {
            let id = subscribe(move |_| principal.set(current()));
            move || unsubscribe(id)
        });
    }

    html! {
        <ContextProvider<Option<SessionInformation>> context={(*principal).clone()}>
            { for props.children.iter() }
        </ContextProvider<Option<SessionInformation>>>
    }
}

#[hook]
pub fn use_session() -> Option<SessionInformation> {
    use_context::<Option<SessionInformation>>().expect("SessionProvider missing")
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(admin: bool) -> SessionInformation {
        SessionInformation {
            id: 1,
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin,
            token: "fake-jwt-token".into(),
            token_type: "Bearer".into(),
        }
    }

    #[test]
    fn login_then_logout_round_trip() {
        log_out();
        log_in(principal(true));
        assert!(is_logged());
        assert_eq!(current().unwrap().username, "yoga@studio.com");
        assert_eq!(bearer().as_deref(), Some("fake-jwt-token"));

        log_out();
        assert!(!is_logged());
        assert_eq!(current(), None);
        assert_eq!(bearer(), None);
    }

    #[test]
    fn subscribers_get_latest_value_on_subscribe() {
        log_out();
        log_in(principal(false));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = subscribe(move |logged| sink.borrow_mut().push(logged));

        // Late subscriber replays the current value.
        assert_eq!(*seen.borrow(), vec![true]);

        log_out();
        log_in(principal(false));
        assert_eq!(*seen.borrow(), vec![true, false, true]);

        unsubscribe(id);
        log_out();
        assert_eq!(*seen.borrow(), vec![true, false, true]);
    }

    #[test]
    fn login_is_last_write_wins() {
        log_out();
        log_in(principal(false));
        let mut second = principal(true);
        second.id = 2;
        log_in(second);
        let now = current().unwrap();
        assert_eq!(now.id, 2);
        assert!(now.admin);
    }

    #[test]
    fn deserializes_login_response() {
        let raw = r#"{
            "token": "fake-jwt-token",
            "type": "Bearer",
            "id": 1,
            "username": "yoga@studio.com",
            "firstName": "Admin",
            "lastName": "Admin",
            "admin": true
        }"#;
        let info: SessionInformation = serde_json::from_str(raw).unwrap();
        assert_eq!(info.id, 1);
        assert!(info.admin);
        assert_eq!(info.token_type, "Bearer");
    }

    #[test]
    fn token_is_optional_in_login_response() {
        // Some mocked responses omit the credential; the flag flow still works.
        let raw = r#"{"id":1,"username":"u","firstName":"f","lastName":"l","admin":false}"#;
        let info: SessionInformation = serde_json::from_str(raw).unwrap();
        assert!(info.token.is_empty());
        log_out();
        log_in(info);
        assert!(is_logged());
        assert_eq!(bearer(), None);
    }
}
