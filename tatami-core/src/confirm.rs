/// Two-phase confirmation gate for destructive operations.
///
/// A mutating action is staged with `request` and only runs once the
/// surface answers. The gate holds at most one pending action: a second
/// `request` replaces the first. It is not a queue.

/// Either idle or holding exactly one staged action plus the message the
/// confirmation surface must render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationGate<A> {
    Idle,
    Pending { message: String, action: A },
}

impl<A> Default for ConfirmationGate<A> {
    fn default() -> Self {
        ConfirmationGate::Idle
    }
}

impl<A> ConfirmationGate<A> {
    /// Stage an action, replacing any previously staged one.
    pub fn request(&mut self, message: impl Into<String>, action: A) {
        *self = ConfirmationGate::Pending {
            message: message.into(),
            action,
        };
    }

    /// Take the staged action for execution and return to idle.
    pub fn confirm(&mut self) -> Option<A> {
        match std::mem::take(self) {
            ConfirmationGate::Pending { action, .. } => Some(action),
            ConfirmationGate::Idle => None,
        }
    }

    /// Discard the staged action, if any.
    pub fn cancel(&mut self) {
        *self = ConfirmationGate::Idle;
    }

    /// The message to render while an action is pending.
    pub fn message(&self) -> Option<&str> {
        match self {
            ConfirmationGate::Pending { message, .. } => Some(message),
            ConfirmationGate::Idle => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmationGate::Pending { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_takes_the_action_once() {
        let mut gate: ConfirmationGate<u32> = ConfirmationGate::Idle;
        gate.request("Do it?", 7);
        assert!(gate.is_pending());
        assert_eq!(gate.message(), Some("Do it?"));

        assert_eq!(gate.confirm(), Some(7));
        assert!(!gate.is_pending());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_cancel_discards() {
        let mut gate: ConfirmationGate<u32> = ConfirmationGate::Idle;
        gate.request("Do it?", 7);
        gate.cancel();
        assert!(!gate.is_pending());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_second_request_overwrites_first() {
        let mut gate: ConfirmationGate<u32> = ConfirmationGate::Idle;
        gate.request("First?", 1);
        gate.request("Second?", 2);
        assert_eq!(gate.message(), Some("Second?"));
        assert_eq!(gate.confirm(), Some(2));
    }

    #[test]
    fn test_confirm_on_idle_is_none() {
        let mut gate: ConfirmationGate<u32> = ConfirmationGate::Idle;
        assert_eq!(gate.confirm(), None);
        gate.cancel();
        assert_eq!(gate.message(), None);
    }
}
