//! Conversation state and the controller that reconciles it with the backend.

mod controller;
mod id;
mod state;

pub use controller::{
    FALLBACK_TOPIC, Notice, PendingTurn, SendOutcome, SessionController, resource_prompt,
};
pub use id::{FixedIdProvider, UserIdProvider, UuidProvider};
pub use state::{Message, Role, Session, SessionSnapshot};
