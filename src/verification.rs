//! Verification code rules and the resend countdown.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::error::VerificationError;

/// Keeps only ASCII digits and caps the result at `max_len` characters.
pub fn sanitize_code_input(raw: &str, max_len: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max_len).collect()
}

/// Any `len` ASCII digits pass. There is no issued code to compare against.
pub fn check_code(code: &str, len: usize) -> Result<(), VerificationError> {
    if code.len() == len && code.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(VerificationError::InvalidCode)
    }
}

/// Seconds until the "resend code" action unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResendCountdown {
    remaining: u32,
    cooldown: u32,
}

impl ResendCountdown {
    /// Starts locked, with the full cooldown remaining.
    pub fn new(cooldown: u32) -> Self {
        Self {
            remaining: cooldown,
            cooldown,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    /// Relocks for a full cooldown. Returns false, and does nothing, while
    /// the countdown is still running.
    pub fn request_resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        self.remaining = self.cooldown;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownAction {
    Tick,
    Resend,
}

impl Reducible for ResendCountdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            CountdownAction::Tick => {
                let before = next.remaining;
                next.tick();
                next.remaining != before
            }
            CountdownAction::Resend => next.request_resend(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_digits_and_truncates() {
        assert_eq!(sanitize_code_input("12a3-45 6", 6), "123456");
        assert_eq!(sanitize_code_input("1234567890", 6), "123456");
        assert_eq!(sanitize_code_input("abc", 6), "");
        assert_eq!(sanitize_code_input("١٢٣", 6), "");
    }

    #[test]
    fn test_any_six_digits_pass() {
        assert!(check_code("123456", 6).is_ok());
        assert!(check_code("000000", 6).is_ok());
        assert!(check_code("987654", 6).is_ok());
    }

    #[test]
    fn test_wrong_shape_fails() {
        for bad in ["", "12345", "1234567", "12345a", "12 456", "١٢٣٤٥٦"] {
            assert_eq!(check_code(bad, 6), Err(VerificationError::InvalidCode), "{bad:?}");
        }
    }

    #[test]
    fn test_countdown_starts_locked() {
        let c = ResendCountdown::new(60);
        assert_eq!(c.remaining(), 60);
        assert!(!c.can_resend());
    }

    #[test]
    fn test_countdown_unlocks_at_zero_and_never_underflows() {
        let mut c = ResendCountdown::new(3);
        for _ in 0..3 {
            c.tick();
        }
        assert!(c.can_resend());
        c.tick();
        c.tick();
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn test_resend_refused_while_locked() {
        let mut c = ResendCountdown::new(60);
        c.tick();
        assert!(!c.request_resend());
        assert_eq!(c.remaining(), 59);
    }

    #[test]
    fn test_resend_relocks_immediately() {
        let mut c = ResendCountdown::new(60);
        for _ in 0..60 {
            c.tick();
        }
        assert!(c.request_resend());
        assert_eq!(c.remaining(), 60);
        assert!(!c.can_resend());
        assert!(!c.request_resend());
    }

    #[test]
    fn test_reducer_keeps_same_rc_when_nothing_changes() {
        let locked = Rc::new(ResendCountdown::new(1));
        let same = Rc::clone(&locked).reduce(CountdownAction::Resend);
        assert!(Rc::ptr_eq(&locked, &same));

        let open = Rc::clone(&locked).reduce(CountdownAction::Tick);
        assert!(open.can_resend());
        let still_open = Rc::clone(&open).reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&open, &still_open));

        let relocked = open.reduce(CountdownAction::Resend);
        assert_eq!(relocked.remaining(), 1);
    }
}
