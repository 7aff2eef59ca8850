use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout;
use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let principal = use_session();

    let nav = match &principal {
        Some(_) => html! {
            <ul class="nav-list">
                <li class="nav-item"><Link<Route> to={Route::Sessions}>{"Sessions"}</Link<Route>></li>
                <li class="nav-item"><Link<Route> to={Route::Me}><span>{"Account"}</span></Link<Route>></li>
                <li class="nav-item"><logout::Logout /></li>
            </ul>
        },
        None => html! {
            <ul class="nav-list">
                <li class="nav-item"><Link<Route> to={Route::Login}>{"Login"}</Link<Route>></li>
                <li class="nav-item"><Link<Route> to={Route::Register}>{"Register"}</Link<Route>></li>
            </ul>
        },
    };

    html! {
        <>
            <header class="header">
                <div class="header-title">{"Yoga app"}</div>
            </header>

            <nav class="nav">
                { nav }
            </nav>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </>
    }
}
