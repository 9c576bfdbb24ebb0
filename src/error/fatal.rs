//! The unrecoverable failure channel.
//!
//! A [`Fatal`] aborts the in-progress `validate` or `apply` call outright; no
//! partial verdict is returned. It is reserved for programming and
//! configuration mistakes (an unrouted choice key, a field that cannot be
//! projected out of a container) and for explicit escalation via
//! [`Constraint::or_fatal`](crate::Constraint::or_fatal). Ordinary data-driven
//! failures never take this channel; they travel as violations inside a
//! [`Verdict`](crate::Verdict).

/// An unrecoverable validation failure.
#[derive(Debug, thiserror::Error)]
pub enum Fatal {
    /// A choice classified to a key with no registered handler and no default.
    #[error("no handler registered for route '{route}' and no default set")]
    UnroutedKey {
        /// The classification key that had no handler.
        route: String,
    },

    /// A field projector could not resolve a declared field name on the
    /// container it was given.
    #[error("cannot project field '{field}' out of a {container} value")]
    Projection {
        /// The declared field name.
        field: String,
        /// A description of the container the projection was attempted on.
        container: &'static str,
    },

    /// A constraint escalated an invalid result with
    /// [`or_fatal`](crate::Constraint::or_fatal) or
    /// [`or_fatal_with`](crate::Constraint::or_fatal_with).
    #[error("validation escalated to fatal: {message}")]
    Escalated {
        /// The messages of the violations that triggered the escalation.
        message: String,
        /// An optional underlying cause supplied at escalation time.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Fatal crosses thread boundaries together with the verdicts it displaces.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Fatal>();
    assert_sync::<Fatal>();
};
