use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::self_delete_visible;
use crate::models::User;
use crate::session::{self, use_session};
use crate::{user_api, Route};

/* -------------------------------------------------------------------------- */
/*                                account page                                */
/* -------------------------------------------------------------------------- */

#[function_component(Me)]
pub fn me() -> Html {
    let navigator = use_navigator().unwrap();
    let principal = use_session();
    let account = use_state(|| None::<User>);

    {
        let account = account.clone();
        let id = principal.as_ref().map(|p| p.id);
        use_effect_with(id, move |id| {
            if let Some(id) = *id {
                spawn_local(async move {
                    match user_api::detail(id).await {
                        Ok(u) => account.set(Some(u)),
                        Err(e) => log::error!("user {id}: {e}"),
                    }
                });
            }
            || ()
        });
    }

    // Deleting the account destroys the session as well.
    let on_delete = {
        let navigator = navigator.clone();
        let id = principal.as_ref().map(|p| p.id).unwrap_or(-1);
        Callback::from(move |_| {
            if !gloo_dialogs::confirm("Delete your account?") {
                return;
            }
            let navigator = navigator.clone();
            spawn_local(async move {
                match user_api::delete(id).await {
                    Ok(()) => {
                        session::log_out();
                        navigator.push(&Route::Home);
                    }
                    Err(e) => log::error!("delete account: {e}"),
                }
            });
        })
    };

    let body = match &*account {
        None => html!(<p>{"Loading…"}</p>),
        Some(u) => {
            let deletable = self_delete_visible(principal.as_ref(), u);
            html! {
                <div class="me">
                    <h2>{"User information"}</h2>
                    <p>{ format!("Name: {}", u.display_name()) }</p>
                    <p>{ format!("Email: {}", u.email) }</p>
                    {
                        match &u.created_at {
                            Some(d) => html!(<p>{ format!("Create at: {d}") }</p>),
                            None => Html::default(),
                        }
                    }
                    {
                        if u.admin {
                            html!(<p class="admin-badge">{"You are admin"}</p>)
                        } else {
                            Html::default()
                        }
                    }
                    {
                        if deletable {
                            html! {
                                <button class="danger" onclick={on_delete.clone()}>
                                    {"Delete my account"}
                                </button>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </div>
            }
        }
    };

    body
}
