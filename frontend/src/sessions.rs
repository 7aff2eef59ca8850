use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::admin_controls_visible;
use crate::models::RentalSession;
use crate::session::use_session;
use crate::{session_api, Route};

/* -------------------------------------------------------------------------- */
/*                           rental sessions list                             */
/* -------------------------------------------------------------------------- */

#[function_component(SessionsList)]
pub fn sessions_list() -> Html {
    let navigator = use_navigator().unwrap();
    let principal = use_session();
    let sessions = use_state(Vec::<RentalSession>::new);

    {
        let sessions = sessions.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match session_api::all().await {
                    Ok(list) => sessions.set(list),
                    Err(e) => log::error!("sessions: {e}"),
                }
            });
            || ()
        });
    }

    let is_admin = admin_controls_visible(principal.as_ref());

    let goto = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&route))
    };

    html! {
        <div class="sessions-list">
            <div class="list-header">
                <h2>{"Rentals available"}</h2>
                {
                    if is_admin {
                        html! {
                            <button onclick={goto(Route::SessionCreate)}>{"Create"}</button>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>

            { for sessions.iter().map(|s| {
                let detail = {
                    let navigator = navigator.clone();
                    let id = s.id;
                    Callback::from(move |_| navigator.push(&Route::SessionDetail { id }))
                };
                let edit = {
                    let navigator = navigator.clone();
                    let id = s.id;
                    Callback::from(move |_| navigator.push(&Route::SessionUpdate { id }))
                };

                html! {
                    <div class="session-card" key={s.id}>
                        <h3>{ &s.name }</h3>
                        <p class="session-date">{ &s.date }</p>
                        <p>{ &s.description }</p>
                        <div class="card-actions">
                            <button onclick={detail}>{"Detail"}</button>
                            {
                                if is_admin {
                                    html!(<button onclick={edit}>{"Edit"}</button>)
                                } else {
                                    Html::default()
                                }
                            }
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
