use contracts::system::auth::Session;
use leptos::prelude::*;

use super::storage::{self, LocalTokenStore, TokenStore};
use crate::shared::query::QueryClient;

/// Current session, created in `App` and handed out through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: RwSignal::new(session),
        }
    }

    /// Context seeded from the session saved before the last reload.
    pub fn restore() -> Self {
        let session = storage::load_session();
        if let Some(s) = &session {
            log::debug!("auth: restored session for {}", s.user.name);
        }
        Self::new(session)
    }

    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()))
    }

    pub fn roles(&self) -> Vec<String> {
        self.session
            .with(|s| s.as_ref().map(|s| s.user.roles.clone()).unwrap_or_default())
    }

    pub fn user_name(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.user.name.clone()))
    }

    pub fn sign_in(&self, session: Session) {
        storage::save_session(&session);
        self.session.set(Some(session));
    }

    /// Drop the session, persisted copies included.
    pub fn expire(&self) {
        storage::clear_session();
        LocalTokenStore.clear();
        if self.session.try_set(None).is_some() {
            log::debug!("auth: session state already disposed");
        }
    }
}

/// Provides `AuthContext` and keeps the durable token copy in step with it.
#[component]
pub fn AuthProvider(auth: AuthContext, children: Children) -> impl IntoView {
    provide_context(auth);

    Effect::new(move |_| {
        let session = auth.session.get();
        storage::sync_token(&LocalTokenStore, session.as_ref());
    });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}

/// End the session locally: stored session, mirrored token and cached
/// queries all go.
pub fn do_logout(auth: AuthContext, queries: &QueryClient) {
    auth.expire();
    queries.clear();
    log::info!("auth: signed out");
}
