//! Conversation state and the controller that drives completion exchanges

pub mod controller;
pub mod store;
pub mod types;

pub use controller::{ChatController, SubmitOutcome};
pub use store::{ConversationSnapshot, ConversationStore, Resolution, Status, SubmitTicket};
pub use types::{Message, Role};
