// src/gate.rs
//
// Shared-password gate in front of all rendering. Fail-closed: until the
// gate authorizes, nothing loads and nothing but the prompt draws.

use subtle::ConstantTimeEq;

use crate::config::consts::PASSWORD_ENV;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// No attempt made yet this session.
    Locked,
    /// At least one wrong password submitted. No lockout; retry freely.
    Rejected,
    Authorized,
}

pub struct Gate {
    secret: Option<String>,
    state: GateState,
}

impl Gate {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret, state: GateState::Locked }
    }

    /// Reference secret comes from the environment, read once at startup.
    pub fn from_env() -> Self {
        Self::new(std::env::var(PASSWORD_ENV).ok())
    }

    pub fn state(&self) -> GateState { self.state }

    #[inline]
    pub fn is_authorized(&self) -> bool { self.state == GateState::Authorized }

    /// True once a wrong password has been submitted (drives the error label).
    pub fn was_rejected(&self) -> bool { self.state == GateState::Rejected }

    /// No secret configured → the gate can never open.
    pub fn is_misconfigured(&self) -> bool { self.secret.is_none() }

    /// Check a candidate. The comparison is constant-time in the secret
    /// contents; the candidate buffer is cleared either way so the submitted
    /// text never outlives the attempt.
    pub fn submit(&mut self, candidate: &mut String) {
        let ok = match &self.secret {
            Some(secret) => secret.as_bytes().ct_eq(candidate.as_bytes()).into(),
            None => false,
        };
        candidate.clear();

        self.state = if ok { GateState::Authorized } else { GateState::Rejected };
        if !ok {
            logd!("Gate: rejected attempt");
        } else {
            logf!("Gate: authorized");
        }
    }
}
