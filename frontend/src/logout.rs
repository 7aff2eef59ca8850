use yew::prelude::*;
use yew_router::prelude::*;

use crate::{session, Route};

/// Clears the in-memory session and returns to the login page. Nothing is
/// persisted, so no server call is needed.
#[function_component(Logout)]
pub fn logout() -> Html {
    let navigator = use_navigator().unwrap();

    let onclick = Callback::from(move |_| {
        session::log_out();
        navigator.push(&Route::Login);
    });

    html! { <button {onclick}>{ "Logout" }</button> }
}
