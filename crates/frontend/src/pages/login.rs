//! Sign-in form

use crate::app::Route;
use peakfit_frontend_common::AuthApiService;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const MISSING_CREDENTIALS: &str = "Enter your email and password";
const LOGIN_FAILED: &str = "Invalid email or password";

fn credentials_present(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

#[function_component(Login)]
pub fn login() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if !credentials_present(&email, &password) {
                error.set(Some(MISSING_CREDENTIALS.to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let email = email.trim().to_string();
            let password = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                match AuthApiService::new().login(email, password).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Login failed: {e}");
                        error.set(Some(LOGIN_FAILED.to_string()));
                        loading.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center">
            <form class="w-full max-w-sm bg-white rounded-lg shadow p-6 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900">{"Login"}</h1>
                <input
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    type="email"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <input
                    class="w-full px-3 py-2 border border-gray-300 rounded-md"
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />
                if let Some(message) = &*error {
                    <p class="text-sm text-red-600">{message}</p>
                }
                <button
                    class="w-full py-2 bg-emerald-600 text-white rounded-md disabled:opacity-50"
                    type="submit"
                    disabled={*loading}
                >
                    { if *loading { "Signing in..." } else { "Login" } }
                </button>
                <p class="text-sm text-gray-600">
                    {"No account yet? "}
                    <Link<Route> to={Route::Register} classes="text-emerald-700 underline">
                        {"Register"}
                    </Link<Route>>
                </p>
            </form>
        </div>
    }
}
