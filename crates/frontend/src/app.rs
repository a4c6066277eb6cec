use crate::auth_guard::ProtectedRoute;
use crate::pages::{Home, Login, Logout, NotFound, Register};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/logout")]
    Logout,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <ProtectedRoute>
                <Home />
            </ProtectedRoute>
        },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::Logout => html! { <Logout /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
