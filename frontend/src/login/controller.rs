use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal, SignalExt};

use shared::types::{SessionRecord, SessionUser};

use crate::constants::LOGIN_ERROR;
use crate::login::{AuthClient, AuthError, Navigator, SessionStorage, UserStore};
use crate::types::{Credentials, User};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Bootstrapping,
    Idle,
    Submitting,
    Navigated,
    Disposed,
}

impl Phase {
    fn accepts_submit(self) -> bool {
        matches!(self, Phase::Idle | Phase::Submitting)
    }

    fn shows_form(self) -> bool {
        matches!(self, Phase::Idle | Phase::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenState {
    pub is_bootstrapping: bool,
    pub is_submitting: bool,
    pub error_message: Option<&'static str>,
}

impl ScreenState {
    fn new(phase: Phase, error_message: Option<&'static str>) -> Self {
        Self {
            is_bootstrapping: phase == Phase::Bootstrapping,
            is_submitting: phase == Phase::Submitting,
            error_message,
        }
    }
}

pub struct LoginServices {
    pub storage: Rc<dyn SessionStorage>,
    pub auth: Rc<dyn AuthClient>,
    pub users: Rc<dyn UserStore>,
    pub navigator: Rc<dyn Navigator>,
}

/// Drives the login screen: restores a stored session on mount, otherwise
/// authenticates the entered credentials and hands the user over to the app.
///
/// Every submit gets a generation number and only the latest one may complete.
/// Once the screen has navigated or been disposed, late responses are dropped.
pub struct LoginController {
    name: Mutable<String>,
    email: Mutable<String>,
    phase: Mutable<Phase>,
    error: Mutable<Option<&'static str>>,
    generation: Cell<u64>,
    post_login_route: String,
    services: LoginServices,
}

impl LoginController {
    pub fn new(services: LoginServices, post_login_route: &str) -> Rc<Self> {
        Rc::new(Self {
            name: Mutable::new(String::new()),
            email: Mutable::new(String::new()),
            phase: Mutable::new(Phase::Bootstrapping),
            error: Mutable::new(None),
            generation: Cell::new(0),
            post_login_route: post_login_route.to_string(),
            services,
        })
    }

    pub fn set_name(&self, value: String) {
        self.name.set_neq(value);
    }

    pub fn set_email(&self, value: String) {
        self.email.set_neq(value);
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            name: self.name.get_cloned(),
            email: self.email.get_cloned(),
        }
    }

    #[cfg(test)]
    fn phase(&self) -> Phase {
        self.phase.get()
    }

    #[cfg(test)]
    fn screen_state(&self) -> ScreenState {
        ScreenState::new(self.phase.get(), self.error.get())
    }

    #[cfg(test)]
    fn form_visible(&self) -> bool {
        self.phase.get().shows_form()
    }

    /// Whether the form replaces the loading indicator; false again once the screen is left.
    pub fn form_visible_signal(&self) -> impl Signal<Item = bool> {
        self.phase.signal().map(Phase::shows_form).dedupe()
    }

    pub fn screen_state_signal(&self) -> impl Signal<Item = ScreenState> {
        map_ref! {
            let phase = self.phase.signal(),
            let error = self.error.signal() =>
            ScreenState::new(*phase, *error)
        }
    }

    /// Restores a stored session if there is one, otherwise shows the form.
    pub fn bootstrap(&self) {
        if self.phase.get() != Phase::Bootstrapping {
            return;
        }
        match self.services.storage.read() {
            Ok(record) => {
                log::info!("session restored for {}", record.user.email);
                self.enter(record.user);
            }
            Err(err) => {
                log::debug!("no stored session: {err}");
                self.phase.set_neq(Phase::Idle);
            }
        }
    }

    /// Issues the authentication request right away; the returned future applies its outcome.
    ///
    /// A submit while another one is pending sends a second request and supersedes the first.
    pub fn submit(self: &Rc<Self>) -> impl Future<Output = ()> + 'static {
        let controller = Rc::clone(self);
        let pending = controller.begin_submit();
        async move {
            if let Some((generation, request)) = pending {
                let result = request.await;
                controller.complete_submit(generation, result);
            }
        }
    }

    /// Tears the screen down. Responses arriving afterwards change nothing.
    pub fn dispose(&self) {
        if self.phase.replace(Phase::Disposed) != Phase::Disposed {
            log::debug!("login screen disposed");
        }
    }

    fn begin_submit(&self) -> Option<(u64, LocalBoxFuture<'static, Result<SessionUser, AuthError>>)> {
        let phase = self.phase.get();
        if !phase.accepts_submit() {
            log::debug!("submit ignored while {phase:?}");
            return None;
        }
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.phase.set_neq(Phase::Submitting);

        let credentials = self.credentials();
        log::info!("authenticating {} (request #{generation})", credentials.email);
        Some((generation, self.services.auth.authenticate(credentials)))
    }

    fn complete_submit(&self, generation: u64, result: Result<SessionUser, AuthError>) {
        let phase = self.phase.get();
        if phase != Phase::Submitting {
            log::debug!("response #{generation} dropped while {phase:?}");
            return;
        }
        if generation != self.generation.get() {
            log::debug!("stale response #{generation} dropped");
            return;
        }

        match result {
            Ok(user) => {
                let record = SessionRecord::new(user);
                if let Err(err) = self.services.storage.write(&record) {
                    log::error!("session could not be persisted: {err}");
                }
                self.enter(record.user);
            }
            Err(err) => {
                log::warn!("authentication failed: {err}");
                self.error.set(Some(LOGIN_ERROR));
                self.phase.set_neq(Phase::Idle);
            }
        }
    }

    // The store is updated before navigating so the next screen sees the user on mount.
    fn enter(&self, user: SessionUser) {
        self.services.users.set_current_user(User::from(user));
        self.phase.set_neq(Phase::Navigated);
        self.services.navigator.go_to(&self.post_login_route);
    }
}
