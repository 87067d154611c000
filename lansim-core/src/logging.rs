use crate::Address;
use tracing::{event, Level};

/// Logging holds wrapper functions for the tracing events the core emits.
/// Each function corresponds to a type of event (server creation, packet
/// delivery, packet drop) and is meant to be called from inside the core as
/// traffic moves through a router. Installing a subscriber is the
/// application's job.

/// Server creation event handler.
/// Captures the address the new server was issued.
pub fn server_creation_event(address: Address) {
    event!(target: "SERVER_CREATION", Level::INFO, address = address.into_inner());
}

/// Delivery event handler.
/// Captures the destination address and payload of a delivered packet.
pub fn delivery_event(destination: Address, payload: &str) {
    event!(
        target: "DELIVERY",
        Level::INFO,
        destination = destination.into_inner(),
        payload = payload
    );
}

/// Drop event handler.
/// Captures the destination address and payload of a packet discarded
/// because nothing was linked at its destination.
pub fn drop_event(destination: Address, payload: &str) {
    event!(
        target: "DROP",
        Level::INFO,
        destination = destination.into_inner(),
        payload = payload
    );
}
