//! Pure building blocks shared by every platform: no I/O, no provider.

pub mod amount;
pub mod constants;
pub mod policy;

pub use amount::{format_units, from_wire_balance, parse_amount, to_wire, WireAmount};
pub use policy::OwnerPolicy;
