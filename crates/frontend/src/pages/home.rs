//! Landing page for signed-in users

use crate::app::Route;
use peakfit_core::{Role, RoleInfo};
use peakfit_frontend_common::{AuthApiService, use_user_role};
use peakfit_http::types::CurrentUser;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

fn headline(role: Role) -> &'static str {
    match role {
        Role::Admin => "Administration",
        Role::Employee => "Staff dashboard",
        Role::Member | Role::Anonymous => "Your training",
    }
}

/// Sections shown on the dashboard. Staff entries are display only; the API
/// checks permissions on every request.
fn sections(info: &RoleInfo) -> Vec<&'static str> {
    let mut sections = vec!["Memberships", "Our gyms", "Payments"];
    if info.role.is_staff() {
        sections.extend(["Manage trainers", "Manage gyms"]);
    }
    if info.is_admin {
        sections.push("Manage users");
    }
    sections
}

#[function_component(Home)]
pub fn home() -> Html {
    let role = use_user_role();
    let user = use_state(|| None::<CurrentUser>);

    {
        let user = user.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match AuthApiService::new().current_user().await {
                    Ok(profile) => user.set(Some(profile)),
                    Err(e) => tracing::warn!("Failed to load profile: {e}"),
                }
            });
        });
    }

    let greeting = match &*user {
        Some(profile) => format!("Welcome back, {}!", profile.display_name()),
        None => "Welcome back!".to_string(),
    };

    html! {
        <div class="min-h-screen">
            <header class="flex items-center justify-between p-4 bg-white shadow-sm">
                <h1 class="text-2xl font-bold text-gray-900">{"PeakFit"}</h1>
                <div class="flex items-center gap-4">
                    <span class="text-sm text-gray-600">{ role.role.as_str() }</span>
                    <Link<Route> to={Route::Logout} classes="text-sm text-emerald-700 underline">
                        {"Logout"}
                    </Link<Route>>
                </div>
            </header>
            <main class="max-w-4xl mx-auto p-6 space-y-6">
                <div>
                    <p class="text-lg text-gray-900">{ greeting }</p>
                    <h2 class="text-xl font-semibold text-gray-700">{ headline(role.role) }</h2>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    { for sections(&role).into_iter().map(|title| html! {
                        <div key={title} class="bg-white rounded-lg shadow p-4">
                            <p class="font-semibold text-gray-900">{ title }</p>
                        </div>
                    }) }
                </div>
            </main>
        </div>
    }
}
