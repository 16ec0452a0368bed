//! Subnet calculation logic.
//!
//! - [`engine`] - address/prefix to [`crate::models::SubnetReport`]
//! - [`selection`] - prefix selection parsing and the mask table

mod engine;
mod selection;

// Re-export public functions
pub use engine::{calculate, calculate_addr, calculate_cidr};
pub use selection::{mask_options, mask_to_prefix, parse_selection, MaskOption};
