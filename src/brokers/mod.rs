//! Broker directory served by the remote API.

mod api;
mod model;

pub use api::BrokerApi;
pub use model::{Broker, BrokerDetails, BrokerId, DetailsPayload};
