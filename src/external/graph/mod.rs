//! Microsoft Graph API gateway.
//!
//! Wraps the two Graph operations this service needs (fetch a message,
//! send a mail) behind the [`MailGateway`] trait, plus the pure resource
//! path resolver used to locate a message from a change notification.

mod client;
mod error;
mod provider;
pub mod resource;
mod types;

pub use client::GraphMailClient;
pub use error::GraphError;
pub use provider::MailGateway;
pub use types::{
    GraphEmailAddress, GraphItemBody, GraphMessage, GraphRecipient, OutgoingAddress, OutgoingBody,
    OutgoingMessage, OutgoingRecipient, SendMailRequest,
};
