use crate::Address;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issues unique [`Address`]es for new servers.
///
/// Addresses count up from 1. An address is consumed the moment it is
/// issued and never comes back, so every server constructed against the
/// same allocator holds a distinct one. The increment is atomic; the
/// uniqueness guarantee holds under concurrent construction.
///
/// [`Server::new`](crate::Server::new) consults a process-wide instance,
/// which has no reset. Tests that need a predictable sequence can
/// construct their own allocator and use
/// [`Server::with_allocator`](crate::Server::with_allocator).
#[derive(Debug)]
pub struct AddressAllocator {
    next: AtomicU64,
}

impl AddressAllocator {
    /// Creates an allocator whose first address is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Issues the next address, one greater than the previous call's.
    pub fn next_address(&self) -> Address {
        Address::from_raw(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AddressAllocator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: AddressAllocator = AddressAllocator::new();

/// The process-wide allocator backing [`Server::new`](crate::Server::new).
pub(crate) fn global() -> &'static AddressAllocator {
    &GLOBAL
}
