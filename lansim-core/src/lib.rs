//! A minimal two-tier network simulator: servers identified by unique
//! addresses exchange packets through a single router.
//!
//! # Uses
//!
//! - Model store-and-forward delivery without real sockets: traffic queues
//!   on the router until an explicit dispatch pass moves it.
//! - Explore addressing and reachability: only servers currently linked to
//!   the router receive traffic, and everything else is dropped silently.
//!
//! # Organization
//!
//! - [`Address`] and [`Packet`] are the value types traffic is made of
//! - [`AddressAllocator`] issues process-unique addresses
//! - [`Server`] owns an address and an inbox of delivered packets
//! - [`Router`] owns the routing table and the outbound queue, and its
//!   [`dispatch`](Router::dispatch) pass delivers or drops each queued
//!   packet
//! - [`RouterMonitor`] broadcasts per-packet dispatch outcomes to
//!   observers without affecting delivery
//!
//! Delivery is explicit and synchronous. A [`Server::send`] only queues a
//! packet; nothing moves until someone calls [`Router::dispatch`], and a
//! receiver sees traffic only when it drains its own inbox with
//! [`Server::receive`].

mod logging;

pub mod address;
pub use address::{Address, InvalidAddress};

mod allocator;
pub use allocator::AddressAllocator;

pub mod packet;
pub use packet::Packet;

mod server;
pub use server::Server;

mod router;
pub use router::Router;

pub mod monitor;
pub use monitor::{RouterEvent, RouterMonitor};
