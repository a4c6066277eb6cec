//! Loading placeholder

use crate::config::AuthConfig;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(AttrValue::Static(AuthConfig::LOADING_TEXT))]
    pub text: AttrValue,
}

/// Shown by protected routes while the session is being checked
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen" role="status">
            <div class="w-10 h-10 border-4 border-gray-200 border-t-emerald-500 rounded-full animate-spin mb-4"></div>
            <p class="text-gray-600 text-sm">{ props.text.clone() }</p>
        </div>
    }
}
