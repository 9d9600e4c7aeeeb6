//! Execute handlers for the storeman-group settlement core, organized by category:
//! - `admin` - group lifecycle and owner-only configuration setters
//! - `inbound` - base-chain coin -> wrapped token leg
//! - `outbound` - wrapped token -> base-chain coin leg
//! - `token` - CW20-shaped transfer/allowance surface

mod admin;
mod inbound;
mod outbound;
mod token;

pub use admin::*;
pub use inbound::*;
pub use outbound::*;
pub use token::*;
