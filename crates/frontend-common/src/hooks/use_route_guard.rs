//! Hook driving the route guard for a protected view

use crate::client::create_public_client;
use crate::storage::BrowserTokenStore;
use peakfit_core::{GuardState, MountHandle, RouteGuard};
use yew::prelude::*;

/// Run one guard check when the calling component mounts.
///
/// Starts at [`GuardState::Unknown`] and follows the guard's transitions. The
/// pending check is abandoned when the component unmounts, so a late refresh
/// response neither re-renders nor writes the token.
#[hook]
pub fn use_route_guard() -> GuardState {
    let state = use_state(GuardState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mount = MountHandle::new();
            let task_mount = mount.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match create_public_client() {
                    Ok(client) => {
                        let guard = RouteGuard::new(BrowserTokenStore, client);
                        guard.check(&task_mount, |next| state.set(next)).await;
                    }
                    Err(e) => {
                        tracing::error!("Failed to create API client: {e}");
                        if task_mount.is_mounted() {
                            state.set(GuardState::Unauthenticated);
                        }
                    }
                }
            });

            move || mount.unmount()
        });
    }

    *state
}
