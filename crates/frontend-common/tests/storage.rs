//! localStorage token store, run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use peakfit_core::{RoleInfo, TokenKey, TokenPair, TokenStore};
use peakfit_frontend_common::{AuthConfig, BrowserTokenStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
}

#[wasm_bindgen_test]
fn stores_under_plain_keys() {
    let store = BrowserTokenStore;
    store.clear_all();

    store.store_pair(&TokenPair {
        access: "a.b.c".to_string(),
        refresh: "r.s.t".to_string(),
    });

    let storage = local_storage();
    assert_eq!(
        storage.get_item(AuthConfig::ACCESS_TOKEN_KEY).unwrap(),
        Some("a.b.c".to_string())
    );
    assert_eq!(
        storage.get_item(AuthConfig::REFRESH_TOKEN_KEY).unwrap(),
        Some("r.s.t".to_string())
    );
    assert_eq!(store.get(TokenKey::Access), Some("a.b.c".to_string()));
}

#[wasm_bindgen_test]
fn clear_all_removes_both_tokens() {
    let store = BrowserTokenStore;
    store.set(TokenKey::Access, "a.b.c");
    store.set(TokenKey::Refresh, "r.s.t");

    store.clear_all();

    assert_eq!(store.get(TokenKey::Access), None);
    assert_eq!(store.get(TokenKey::Refresh), None);
}

#[wasm_bindgen_test]
fn role_of_signed_out_browser_is_anonymous() {
    BrowserTokenStore.clear_all();
    let info = RoleInfo::from_store(&BrowserTokenStore);
    assert!(!info.is_authenticated);
}
