use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-600">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-emerald-700 underline">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
