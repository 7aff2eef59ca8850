use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::admin_controls_visible;
use crate::models::{RentalSession, Teacher};
use crate::session::use_session;
use crate::{session_api, teacher_api, Route};

/// Label of the roster toggle button.
pub fn participate_label(joined: bool) -> &'static str {
    if joined {
        "Do not participate"
    } else {
        "Participate"
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionDetailProps {
    pub id: i64,
}

#[function_component(SessionDetail)]
pub fn session_detail(props: &SessionDetailProps) -> Html {
    let navigator = use_navigator().unwrap();
    let principal = use_session();
    let id = props.id;

    let record = use_state(|| None::<RentalSession>);
    let teacher = use_state(|| None::<Teacher>);
    let toast = use_state(String::new);

    /* -------------- initial load -------------- */
    {
        let record = record.clone();
        let teacher = teacher.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            spawn_local(async move {
                match session_api::detail(id).await {
                    Ok(s) => {
                        let teacher_id = s.teacher_id;
                        record.set(Some(s));
                        match teacher_api::detail(teacher_id).await {
                            Ok(t) => teacher.set(Some(t)),
                            Err(e) => log::error!("teacher {teacher_id}: {e}"),
                        }
                    }
                    Err(e) => log::error!("session {id}: {e}"),
                }
            });
            || ()
        });
    }

    let is_admin = admin_controls_visible(principal.as_ref());
    let user_id = principal.as_ref().map(|p| p.id).unwrap_or(-1);
    let joined = record
        .as_ref()
        .map(|s| s.has_participant(user_id))
        .unwrap_or(false);

    /* -------------- handlers -------------- */

    // Join or leave, then re-fetch: the server owns the roster.
    let on_toggle = {
        let record = record.clone();
        Callback::from(move |_| {
            let record = record.clone();
            spawn_local(async move {
                let call = if joined {
                    session_api::un_participate(id, user_id).await
                } else {
                    session_api::participate(id, user_id).await
                };
                match call {
                    Ok(()) => match session_api::detail(id).await {
                        Ok(s) => record.set(Some(s)),
                        Err(e) => log::error!("session {id}: {e}"),
                    },
                    Err(e) => log::error!("participate: {e}"),
                }
            });
        })
    };

    let on_delete = {
        let toast = toast.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if !gloo_dialogs::confirm("Delete this session?") {
                return;
            }
            let toast = toast.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match session_api::delete(id).await {
                    Ok(()) => {
                        toast.set("Session deleted !".into());
                        TimeoutFuture::new(1_500).await;
                        navigator.push(&Route::Sessions);
                    }
                    Err(e) => log::error!("delete: {e}"),
                }
            });
        })
    };

    let on_back = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Sessions))
    };

    /* -------------- render -------------- */

    let body = match &*record {
        None => html!(<p>{"Loading…"}</p>),
        Some(s) => html! {
            <div class="session-detail">
                <h2>{ &s.name }</h2>
                {
                    match &*teacher {
                        Some(t) => html!(<p class="teacher">{ format!("Taught by {}", t.full_name()) }</p>),
                        None => Html::default(),
                    }
                }
                <p>{ &s.description }</p>
                <p class="session-date">{ &s.date }</p>
                <p>{ format!("{} attendees", s.users.len()) }</p>

                {
                    if is_admin {
                        html!(<button class="danger" onclick={on_delete.clone()}>{"Delete"}</button>)
                    } else {
                        html! {
                            <button onclick={on_toggle.clone()}>
                                { participate_label(joined) }
                            </button>
                        }
                    }
                }
            </div>
        },
    };

    html! {
        <>
            <button class="back" onclick={on_back}>{"Back"}</button>
            { body }
            {
                if !toast.is_empty() {
                    html!(<div class="toast">{ &*toast }</div>)
                } else {
                    Html::default()
                }
            }
        </>
    }
}

/* ---------------- tests ---------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_flips_with_roster_membership() {
        assert_eq!(participate_label(false), "Participate");
        assert_eq!(participate_label(true), "Do not participate");
    }
}
