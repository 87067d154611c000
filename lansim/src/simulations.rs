//! Various prebuilt simulation setups for testing, benchmarking, and examples.

mod basic;
pub use basic::basic;

mod relay;
pub use relay::relay;

mod unreachable;
pub use unreachable::unreachable;

mod churn;
pub use churn::churn;

mod traffic;
pub use traffic::traffic;
