//! Member registration form. Entering it signs out any current session.

use crate::app::Route;
use peakfit_frontend_common::AuthApiService;
use peakfit_http::types::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// (field name, label, input type)
const FIELDS: [(&str, &str, &str); 9] = [
    ("first_name", "First name", "text"),
    ("last_name", "Last name", "text"),
    ("email", "Email", "email"),
    ("password", "Password", "password"),
    ("phone", "Phone", "tel"),
    ("street", "Street", "text"),
    ("street_number", "Street number", "text"),
    ("city", "City", "text"),
    ("postal_code", "Postal code", "text"),
];

fn field_mut<'a>(form: &'a mut RegisterRequest, name: &str) -> Option<&'a mut String> {
    match name {
        "email" => Some(&mut form.email),
        "password" => Some(&mut form.password),
        "first_name" => Some(&mut form.first_name),
        "last_name" => Some(&mut form.last_name),
        "phone" => Some(&mut form.phone),
        "street" => Some(&mut form.street),
        "street_number" => Some(&mut form.street_number),
        "city" => Some(&mut form.city),
        "postal_code" => Some(&mut form.postal_code),
        _ => None,
    }
}

fn label_of(name: &str) -> &str {
    FIELDS
        .iter()
        .find(|(field, _, _)| *field == name)
        .map_or(name, |(_, label, _)| *label)
}

/// Message for a form with blank fields, or `None` when it can be sent
fn missing_fields_message(form: &RegisterRequest) -> Option<String> {
    let missing = form.missing_fields();
    if missing.is_empty() {
        return None;
    }
    let labels: Vec<&str> = missing.into_iter().map(label_of).collect();
    Some(format!("Please fill in: {}", labels.join(", ")))
}

#[function_component(Register)]
pub fn register() -> Html {
    let form = use_state(RegisterRequest::default);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    use_effect_with((), |_| AuthApiService::new().logout());

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let loading = loading.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(message) = missing_fields_message(&form) {
                error.set(Some(message));
                return;
            }

            error.set(None);
            loading.set(true);

            let request = (*form).clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                match AuthApiService::new().register(request).await {
                    Ok(account) => {
                        tracing::info!(email = %account.email, "Registered new member");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(message) => {
                        tracing::warn!("Registration failed: {message}");
                        error.set(Some(message));
                        loading.set(false);
                    }
                }
            });
        })
    };

    let inputs = FIELDS.iter().map(|&(name, label, kind)| {
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                if let Some(field) = field_mut(&mut next, name) {
                    *field = input.value();
                }
                form.set(next);
            })
        };
        let mut current = (*form).clone();
        let value = field_mut(&mut current, name).cloned().unwrap_or_default();

        html! {
            <input
                key={name}
                class="w-full px-3 py-2 border border-gray-300 rounded-md"
                type={kind}
                placeholder={label}
                value={value}
                {oninput}
            />
        }
    });

    html! {
        <div class="min-h-screen flex items-center justify-center">
            <form class="w-full max-w-md bg-white rounded-lg shadow p-6 space-y-3" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900">{"Register"}</h1>
                { for inputs }
                if let Some(message) = &*error {
                    <p class="text-sm text-red-600 whitespace-pre-line">{message}</p>
                }
                <button
                    class="w-full py-2 bg-emerald-600 text-white rounded-md disabled:opacity-50"
                    type="submit"
                    disabled={*loading}
                >
                    { if *loading { "Creating account..." } else { "Register" } }
                </button>
                <p class="text-sm text-gray-600">
                    {"Already a member? "}
                    <Link<Route> to={Route::Login} classes="text-emerald-700 underline">
                        {"Login"}
                    </Link<Route>>
                </p>
            </form>
        </div>
    }
}
