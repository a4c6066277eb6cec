//! Authentication guard component for protected routes

use crate::app::Route;
use peakfit_core::GuardState;
use peakfit_frontend_common::{Spinner, use_route_guard};
use yew::prelude::*;
use yew_router::prelude::*;

/// What a protected route shows for a guard state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardView {
    Placeholder,
    Content,
    /// Swap the current history entry for the login page, so going back does
    /// not land on the protected route again
    ReplaceWithLogin,
}

fn guard_view(state: GuardState) -> GuardView {
    if state.is_pending() {
        return GuardView::Placeholder;
    }
    match state {
        GuardState::Authenticated => GuardView::Content,
        _ => GuardView::ReplaceWithLogin,
    }
}

fn redirect_to_login(navigator: Option<&Navigator>) {
    match navigator {
        Some(navigator) => navigator.replace(&Route::Login),
        None => tracing::error!("ProtectedRoute rendered outside a router"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Renders its children only for a live session.
///
/// Shows the loading placeholder while the check runs and replaces the
/// current history entry with the login page once the session is rejected.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let view = guard_view(use_route_guard());
    let navigator = use_navigator();

    use_effect_with(view, move |view| {
        if *view == GuardView::ReplaceWithLogin {
            redirect_to_login(navigator.as_ref());
        }
    });

    match view {
        GuardView::Placeholder => html! { <Spinner /> },
        GuardView::Content => html! { <>{ props.children.clone() }</> },
        GuardView::ReplaceWithLogin => html! {},
    }
}
