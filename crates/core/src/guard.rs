//! Route guard state machine
//!
//! A guard instance runs one check per mount of a protected view:
//!
//! ```text
//! Unknown ──check──┬─ token live ─────────────────────► Authenticated
//!                  ├─ token expired ─► Checking ─┬─ ok ─► Authenticated
//!                  │                             └─ err ► Unauthenticated
//!                  └─ absent / undecodable / no exp ───► Unauthenticated
//! ```
//!
//! The refresh exchange is the only suspension point. Its result is dropped if
//! the view unmounted while it was in flight.

use crate::claims::decode_claims;
use crate::error::{AuthError, AuthResult};
use crate::token_store::{TokenKey, TokenStore};
use async_trait::async_trait;
use std::cell::Cell;
use std::fmt::{self, Display};
use std::rc::Rc;
use tracing::{debug, warn};

/// Render state of a guarded view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Before the first check completes
    #[default]
    Unknown,
    /// Refresh exchange in flight
    Checking,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    /// Whether the view should show its loading placeholder
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Unknown | Self::Checking)
    }
}

impl Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Checking => write!(f, "checking"),
            Self::Authenticated => write!(f, "authenticated"),
            Self::Unauthenticated => write!(f, "unauthenticated"),
        }
    }
}

/// Outcome of inspecting the stored access token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessStatus {
    Live,
    Expired,
}

/// Source of the current time
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

/// Exchanges a refresh token for a new access token
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TokenRefresher {
    async fn refresh_access(&self, refresh_token: &str) -> AuthResult<String>;
}

#[async_trait(?Send)]
impl<T: TokenRefresher + ?Sized> TokenRefresher for &T {
    async fn refresh_access(&self, refresh_token: &str) -> AuthResult<String> {
        (**self).refresh_access(refresh_token).await
    }
}

/// Liveness flag shared between a mounted view and its pending check
#[derive(Debug, Clone)]
pub struct MountHandle(Rc<Cell<bool>>);

impl MountHandle {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    /// Mark the view as torn down. Later transitions are discarded.
    pub fn unmount(&self) {
        self.0.set(false);
    }
}

impl Default for MountHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Decides whether the current session may see a protected view
pub struct RouteGuard<S, R, C = SystemClock> {
    store: S,
    refresher: R,
    clock: C,
}

impl<S, R> RouteGuard<S, R, SystemClock>
where
    S: TokenStore,
    R: TokenRefresher,
{
    pub fn new(store: S, refresher: R) -> Self {
        Self::with_clock(store, refresher, SystemClock)
    }
}

impl<S, R, C> RouteGuard<S, R, C>
where
    S: TokenStore,
    R: TokenRefresher,
    C: Clock,
{
    pub fn with_clock(store: S, refresher: R, clock: C) -> Self {
        Self {
            store,
            refresher,
            clock,
        }
    }

    /// Inspect the stored access token without touching the network
    pub fn inspect(&self) -> AuthResult<AccessStatus> {
        let token = self
            .store
            .get(TokenKey::Access)
            .ok_or(AuthError::TokenAbsent(TokenKey::Access))?;
        let claims = decode_claims(&token)?;

        match claims.is_live_at(self.clock.now_millis()) {
            Some(true) => Ok(AccessStatus::Live),
            Some(false) => Ok(AccessStatus::Expired),
            None => Err(AuthError::MissingExpiry),
        }
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Makes no network call when there is no refresh token. The result is not
    /// written to the store; [`RouteGuard::check`] does that once it knows the
    /// view is still mounted.
    pub async fn refresh(&self) -> AuthResult<String> {
        let refresh_token = self
            .store
            .get(TokenKey::Refresh)
            .ok_or(AuthError::TokenAbsent(TokenKey::Refresh))?;

        self.refresher.refresh_access(&refresh_token).await
    }

    /// Run one check cycle, reporting each transition to `on_state`.
    ///
    /// Returns the final state, or `None` if `mount` was torn down before the
    /// cycle finished. Nothing is reported or stored after unmount.
    pub async fn check<F>(&self, mount: &MountHandle, mut on_state: F) -> Option<GuardState>
    where
        F: FnMut(GuardState),
    {
        let mut transition = |state: GuardState| {
            if mount.is_mounted() {
                debug!(%state, "Route guard transition");
                on_state(state);
                Some(state)
            } else {
                debug!(%state, "Route guard unmounted, dropping transition");
                None
            }
        };

        match self.inspect() {
            Ok(AccessStatus::Live) => transition(GuardState::Authenticated),
            Ok(AccessStatus::Expired) => {
                transition(GuardState::Checking)?;
                let outcome = self.refresh().await;

                if !mount.is_mounted() {
                    debug!("Route guard unmounted during refresh, discarding result");
                    return None;
                }

                match outcome {
                    Ok(access) => {
                        self.store.set(TokenKey::Access, &access);
                        transition(GuardState::Authenticated)
                    }
                    Err(err) => {
                        warn!("Session refresh failed: {err}");
                        transition(GuardState::Unauthenticated)
                    }
                }
            }
            Err(err) => {
                debug!("Session is not authenticated: {err}");
                transition(GuardState::Unauthenticated)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_store::MemoryTokenStore;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use futures::channel::oneshot;
    use mockall::predicate::eq;
    use std::cell::RefCell;

    // 2001-09-09, long expired relative to NOW_MS
    const PAST_EXP: i64 = 1_000_000_000;
    const NOW_MS: i64 = 1_700_000_000_000;
    const FUTURE_EXP: i64 = 1_800_000_000;

    fn token(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    fn token_with_exp(exp: i64) -> String {
        token(&format!(r#"{{"exp": {exp}, "role": "member"}}"#))
    }

    fn store_with(access: Option<&str>, refresh: Option<&str>) -> MemoryTokenStore {
        let store = MemoryTokenStore::new();
        if let Some(access) = access {
            store.set(TokenKey::Access, access);
        }
        if let Some(refresh) = refresh {
            store.set(TokenKey::Refresh, refresh);
        }
        store
    }

    async fn run<R: TokenRefresher>(
        guard: &RouteGuard<&MemoryTokenStore, R, FixedClock>,
    ) -> (Option<GuardState>, Vec<GuardState>) {
        let mut seen = Vec::new();
        let mount = MountHandle::new();
        let result = guard.check(&mount, |state| seen.push(state)).await;
        (result, seen)
    }

    #[tokio::test]
    async fn test_absent_access_token_fails_closed_without_network() {
        let store = store_with(None, Some("refresh-token"));
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh_access().never();

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, seen) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Unauthenticated));
        assert_eq!(seen, vec![GuardState::Unauthenticated]);
    }

    #[tokio::test]
    async fn test_live_token_passes_without_refresh() {
        let store = store_with(Some(&token_with_exp(FUTURE_EXP)), Some("refresh-token"));
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh_access().never();

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, seen) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Authenticated));
        assert_eq!(seen, vec![GuardState::Authenticated]);
    }

    #[tokio::test]
    async fn test_non_string_role_does_not_block_live_token() {
        let access = token(&format!(r#"{{"exp": {FUTURE_EXP}, "role": 3}}"#));
        let store = store_with(Some(&access), None);
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh_access().never();

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, _) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Authenticated));
    }

    #[test]
    fn test_expiry_instant_counts_as_expired() {
        let store = store_with(Some(&token_with_exp(PAST_EXP)), None);
        let guard = RouteGuard::with_clock(
            &store,
            MockTokenRefresher::new(),
            FixedClock(PAST_EXP * 1000),
        );

        assert_eq!(guard.inspect().ok(), Some(AccessStatus::Expired));
    }

    #[tokio::test]
    async fn test_expired_token_refreshes_exactly_once() {
        let expired = token_with_exp(PAST_EXP);
        let store = store_with(Some(&expired), Some("refresh-token"));
        let mut refresher = MockTokenRefresher::new();
        refresher
            .expect_refresh_access()
            .with(eq("refresh-token"))
            .times(1)
            .returning(|_| Ok("abc.def.ghi".to_string()));

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, seen) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Authenticated));
        assert_eq!(seen, vec![GuardState::Checking, GuardState::Authenticated]);
        assert_eq!(store.get(TokenKey::Access).as_deref(), Some("abc.def.ghi"));
        assert_eq!(store.get(TokenKey::Refresh).as_deref(), Some("refresh-token"));
    }

    #[tokio::test]
    async fn test_rejected_refresh_fails_closed() {
        let expired = token_with_exp(PAST_EXP);
        let store = store_with(Some(&expired), Some("refresh-token"));
        let mut refresher = MockTokenRefresher::new();
        refresher
            .expect_refresh_access()
            .times(1)
            .returning(|_| Err(AuthError::rejected(401, "Token is invalid or expired")));

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, seen) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Unauthenticated));
        assert_eq!(seen, vec![GuardState::Checking, GuardState::Unauthenticated]);
        assert_eq!(store.get(TokenKey::Access), Some(expired));
        // Stale refresh token is left for the logout flow to clear
        assert_eq!(store.get(TokenKey::Refresh).as_deref(), Some("refresh-token"));
    }

    #[tokio::test]
    async fn test_network_failure_fails_closed() {
        let expired = token_with_exp(PAST_EXP);
        let store = store_with(Some(&expired), Some("refresh-token"));
        let mut refresher = MockTokenRefresher::new();
        refresher
            .expect_refresh_access()
            .times(1)
            .returning(|_| Err(AuthError::network("connection refused")));

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, _) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Unauthenticated));
        assert_eq!(store.get(TokenKey::Access), Some(expired));
    }

    #[tokio::test]
    async fn test_expired_without_refresh_token_skips_network() {
        let store = store_with(Some(&token_with_exp(PAST_EXP)), None);
        let mut refresher = MockTokenRefresher::new();
        refresher.expect_refresh_access().never();

        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
        let (result, seen) = run(&guard).await;

        assert_eq!(result, Some(GuardState::Unauthenticated));
        assert_eq!(seen, vec![GuardState::Checking, GuardState::Unauthenticated]);
        assert!(matches!(
            guard.refresh().await,
            Err(AuthError::TokenAbsent(TokenKey::Refresh))
        ));
    }

    #[tokio::test]
    async fn test_malformed_tokens_fail_closed() {
        let cases = [
            "no-dots".to_string(),
            "one.dot".to_string(),
            "h.!!!.s".to_string(),
            token("not json"),
            token(r#"["exp", 1]"#),
            token(r#"{"role": "admin"}"#),
        ];

        for access in cases {
            let store = store_with(Some(&access), Some("refresh-token"));
            let mut refresher = MockTokenRefresher::new();
            refresher.expect_refresh_access().never();

            let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));
            let (result, _) = run(&guard).await;
            assert_eq!(result, Some(GuardState::Unauthenticated), "token {access}");
        }
    }

    #[test]
    fn test_inspect_reports_error_kind() {
        let store = store_with(Some(&token(r#"{"role": "admin"}"#)), None);
        let guard = RouteGuard::with_clock(&store, MockTokenRefresher::new(), FixedClock(NOW_MS));
        assert!(matches!(guard.inspect(), Err(AuthError::MissingExpiry)));

        store.set(TokenKey::Access, "broken");
        assert!(matches!(guard.inspect(), Err(AuthError::Decode(_))));

        store.clear_all();
        assert!(matches!(
            guard.inspect(),
            Err(AuthError::TokenAbsent(TokenKey::Access))
        ));
    }

    /// Refresher whose answer is released by the test
    struct PendingRefresher {
        answer: RefCell<Option<oneshot::Receiver<AuthResult<String>>>>,
    }

    #[async_trait(?Send)]
    impl TokenRefresher for PendingRefresher {
        async fn refresh_access(&self, _refresh_token: &str) -> AuthResult<String> {
            let answer = self.answer.borrow_mut().take();
            match answer {
                Some(rx) => rx.await.unwrap_or_else(|_| Err(AuthError::network("cancelled"))),
                None => Err(AuthError::network("already answered")),
            }
        }
    }

    #[tokio::test]
    async fn test_unmount_during_refresh_discards_result() {
        let expired = token_with_exp(PAST_EXP);
        let store = store_with(Some(&expired), Some("refresh-token"));
        let (tx, rx) = oneshot::channel();
        let refresher = PendingRefresher {
            answer: RefCell::new(Some(rx)),
        };
        let guard = RouteGuard::with_clock(&store, refresher, FixedClock(NOW_MS));

        let seen = RefCell::new(Vec::new());
        let mount = MountHandle::new();
        let check = guard.check(&mount, |state| seen.borrow_mut().push(state));
        let teardown = async {
            mount.unmount();
            tx.send(Ok("new.access.token".to_string()))
                .expect("receiver alive");
        };

        let (result, ()) = futures::join!(check, teardown);

        assert_eq!(result, None);
        assert_eq!(*seen.borrow(), vec![GuardState::Checking]);
        assert_eq!(store.get(TokenKey::Access), Some(expired));
    }

    #[tokio::test]
    async fn test_unmounted_before_check_reports_nothing() {
        let store = store_with(Some(&token_with_exp(FUTURE_EXP)), None);
        let guard = RouteGuard::with_clock(&store, MockTokenRefresher::new(), FixedClock(NOW_MS));
        let mount = MountHandle::new();
        mount.unmount();

        let mut calls = 0;
        let result = guard.check(&mount, |_| calls += 1).await;

        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_pending_states() {
        assert!(GuardState::default().is_pending());
        assert!(GuardState::Checking.is_pending());
        assert!(!GuardState::Authenticated.is_pending());
        assert!(!GuardState::Unauthenticated.is_pending());
    }
}
