// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

/// Identifies one visitor's booking session.
///
/// The trail is scoped per session: events from different sessions are never
/// interleaved into one trail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId {
    /// The opaque session token.
    pub value: String,
}

impl SessionId {
    /// Creates a new `SessionId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The opaque session token
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self { value }
    }
}

/// Who initiated a cart change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The visitor, through a page interaction.
    Visitor,
    /// The booking machinery itself (restore, expiry sweep).
    System,
}

/// Why a cart change happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cause {
    /// A page interaction, with the control that triggered it.
    UiEvent(String),
    /// Saved state being restored on page load.
    Restore,
    /// Saved state aging past its lifetime.
    Expiry,
    /// A completed checkout clearing the cart.
    Checkout,
}

/// What change was applied to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`ToggleSeat`", "`AdjustQuantity`").
    pub name: String,
    /// Optional additional details (e.g., the seat label or item name).
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A rendered summary of the cart at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A human-readable one-line cart summary.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A one-line summary of the cart
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event recording one cart transition.
///
/// Every successful cart change produces exactly one event. An event
/// captures the session it belongs to, who initiated the change, why, what
/// change was applied, and the cart summary before and after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The session this event belongs to.
    pub session: SessionId,
    /// Who initiated the change.
    pub actor: Actor,
    /// Why the change happened.
    pub cause: Cause,
    /// What change was applied.
    pub action: Action,
    /// The cart summary before the transition.
    pub before: StateSnapshot,
    /// The cart summary after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`. Once created, an event is immutable.
    ///
    /// # Arguments
    ///
    /// * `session` - The session this event belongs to
    /// * `actor` - Who initiated the change
    /// * `cause` - Why the change happened
    /// * `action` - What change was applied
    /// * `before` - The cart summary before the transition
    /// * `after` - The cart summary after the transition
    #[must_use]
    pub const fn new(
        session: SessionId,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            session,
            actor,
            cause,
            action,
            before,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(session: &str) -> AuditEvent {
        AuditEvent::new(
            SessionId::new(String::from(session)),
            Actor::Visitor,
            Cause::UiEvent(String::from("seat-map")),
            Action::new(String::from("ToggleSeat"), Some(String::from("A1"))),
            StateSnapshot::new(String::from("seats=0")),
            StateSnapshot::new(String::from("seats=1")),
        )
    }

    #[test]
    fn test_audit_event_captures_all_fields() {
        let event: AuditEvent = sample_event("sess-1");

        assert_eq!(event.session.value, "sess-1");
        assert_eq!(event.actor, Actor::Visitor);
        assert_eq!(event.cause, Cause::UiEvent(String::from("seat-map")));
        assert_eq!(event.action.name, "ToggleSeat");
        assert_eq!(event.action.details, Some(String::from("A1")));
        assert_eq!(event.before.data, "seats=0");
        assert_eq!(event.after.data, "seats=1");
    }

    #[test]
    fn test_action_details_are_optional() {
        let action: Action = Action::new(String::from("Reset"), None);

        assert_eq!(action.name, "Reset");
        assert_eq!(action.details, None);
    }

    #[test]
    fn test_events_from_different_sessions_are_distinct() {
        let event1: AuditEvent = sample_event("sess-1");
        let event2: AuditEvent = sample_event("sess-2");

        assert_ne!(event1, event2);
        assert_eq!(event1, sample_event("sess-1"));
    }

    #[test]
    fn test_system_causes_cover_restore_and_expiry() {
        let restore: Cause = Cause::Restore;
        let expiry: Cause = Cause::Expiry;

        assert_ne!(restore, expiry);
        assert_ne!(restore, Cause::Checkout);
    }
}
