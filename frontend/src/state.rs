use std::rc::Rc;

use futures_signals::signal::{Mutable, ReadOnlyMutable};

use crate::login::UserStore;
use crate::types::User;

/// Application-wide state, handed to every screen that needs it.
#[derive(Debug, Default)]
pub struct AppState {
    current_user: Mutable<Option<User>>,
}

impl AppState {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn current_user(&self) -> ReadOnlyMutable<Option<User>> {
        self.current_user.read_only()
    }
}

impl UserStore for AppState {
    fn set_current_user(&self, user: User) {
        self.current_user.set(Some(user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_user_is_replaced() {
        let state = AppState::new();
        assert_eq!(state.current_user().get_cloned(), None);

        let user = User {
            client_id: "c1".to_string(),
            sl_token: "t1".to_string(),
            email: "e1".to_string(),
        };
        state.set_current_user(user.clone());
        assert_eq!(state.current_user().get_cloned(), Some(user));
    }
}
