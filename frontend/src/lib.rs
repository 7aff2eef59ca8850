use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod auth;
pub mod detail;
pub mod form;
pub mod guard;
pub mod layout;
pub mod logout;
pub mod me;
pub mod models;
pub mod session;
pub mod session_api;
pub mod sessions;
pub mod teacher_api;
pub mod user_api;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/sessions")]
    Sessions,
    #[at("/sessions/detail/:id")]
    SessionDetail { id: i64 },
    #[at("/sessions/create")]
    SessionCreate,
    #[at("/sessions/update/:id")]
    SessionUpdate { id: i64 },
    #[at("/me")]
    Me,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn guarded(inner: Html) -> Html {
    html! {
        <layout::MainLayout>
            <guard::Guard>{ inner }</guard::Guard>
        </layout::MainLayout>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<layout::MainLayout><Welcome /></layout::MainLayout>),
        Route::Login => html!(<layout::MainLayout><auth::LoginForm /></layout::MainLayout>),
        Route::Register => html!(<layout::MainLayout><auth::RegisterForm /></layout::MainLayout>),
        Route::Sessions => guarded(html!(<sessions::SessionsList />)),
        Route::SessionDetail { id } => guarded(html!(<detail::SessionDetail {id} />)),
        Route::SessionCreate => guarded(html!(<form::SessionForm />)),
        Route::SessionUpdate { id } => guarded(html!(<form::SessionForm id={Some(id)} />)),
        Route::Me => guarded(html!(<me::Me />)),
        Route::NotFound => html!(<h1>{"404 – Not Found"}</h1>),
    }
}

#[function_component(Welcome)]
fn welcome() -> Html {
    match session::use_session() {
        Some(_) => html!(<Redirect<Route> to={Route::Sessions} />),
        None => html! {
            <div class="welcome">
                <h1>{"Yoga app"}</h1>
                <p>{"Book a rental session, or manage the studio."}</p>
            </div>
        },
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <session::SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </session::SessionProvider>
    }
}

pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<App>::new().render();
}
