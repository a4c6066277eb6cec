use crate::app::Route;
use peakfit_frontend_common::{AuthApiService, Spinner};
use yew::prelude::*;
use yew_router::prelude::*;

/// Clears the session and replaces itself with the login page
#[function_component(Logout)]
pub fn logout() -> Html {
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        AuthApiService::new().logout();
        if let Some(navigator) = navigator {
            navigator.replace(&Route::Login);
        }
    });

    html! { <Spinner text="Signing out..." /> }
}
