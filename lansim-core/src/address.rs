//! Contains [`Address`], the identifier servers are reached by.

use std::fmt::Display;

/// A unique identifier for a [`Server`](crate::Server) on the simulated
/// network.
///
/// Addresses are issued by an [`AddressAllocator`](crate::AddressAllocator)
/// counting up from 1 and are never reused within a process, even after the
/// server holding one is unlinked or dropped. Zero is outside the domain
/// and cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u64);

impl Address {
    /// Creates an address from a raw number.
    ///
    /// Fails on zero, the one value no allocator ever issues. Useful for
    /// addressing traffic at a destination without holding the server, or
    /// for fabricating addresses in tests.
    pub const fn new(address: u64) -> Result<Self, InvalidAddress> {
        if address == 0 {
            Err(InvalidAddress(address))
        } else {
            Ok(Self(address))
        }
    }

    /// Gets the underlying address number.
    pub fn into_inner(self) -> u64 {
        self.0
    }

    /// Used by the allocator, whose counter starts past zero.
    pub(crate) const fn from_raw(address: u64) -> Self {
        Self(address)
    }
}

impl TryFrom<u64> for Address {
    type Error = InvalidAddress;

    fn try_from(address: u64) -> Result<Self, Self::Error> {
        Self::new(address)
    }
}

impl From<Address> for u64 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw number outside the address domain was used to make an [`Address`].
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("{0} is not a routable address")]
pub struct InvalidAddress(pub u64);
