//! Prefix selection parsing and the mask selection table.
//!
//! Callers may pick a prefix the way the calculator form offered it
//! (`255.255.255.252 /30`), as a bare or slashed number (`30`, `/30`), or as a
//! dotted subnet mask (`255.255.255.252`).

use crate::error::SubnetError;
use crate::models::{get_cidr_mask, parse_address, parse_prefix};
use regex::Regex;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// Prefixes listed in the selection table, largest first.
const SELECTION_PREFIXES: std::ops::RangeInclusive<u8> = 1..=30;

/// Regex for splitting a selection into its mask and prefix parts.
static SELECTION_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_selection_regex() -> &'static Regex {
    SELECTION_REGEX.get_or_init(|| {
        Regex::new(
            r"^\s*(?P<mask>\d+\.\d+\.\d+\.\d+)?\s*(?:/\s*(?P<prefix>\S+)|(?P<bare>[^\s./]+))?\s*$",
        )
        .expect("Invalid Regex")
    })
}

/// One entry of the mask selection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOption {
    pub mask: Ipv4Addr,
    pub prefix: u8,
}

impl fmt::Display for MaskOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.mask, self.prefix)
    }
}

/// The mask selection table, from `/30` down to `/1`.
pub fn mask_options() -> Vec<MaskOption> {
    SELECTION_PREFIXES
        .rev()
        .filter_map(|prefix| {
            get_cidr_mask(prefix).ok().map(|bits| MaskOption {
                mask: Ipv4Addr::from(bits),
                prefix,
            })
        })
        .collect()
}

/// Prefix length of a contiguous subnet mask, `None` if the mask has holes.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let len = bits.leading_ones();
    if bits.checked_shl(len).unwrap_or(0) == 0 {
        Some(len as u8)
    } else {
        None
    }
}

/// Resolve a prefix selection to a prefix length.
///
/// When both a mask and `/n` are given, `/n` wins and a mismatch is logged.
/// The mask must still be a valid dotted-decimal address.
pub fn parse_selection(selection: &str) -> Result<u8, SubnetError> {
    let invalid = || SubnetError::InvalidPrefixRange(selection.to_string());

    let caps = get_selection_regex()
        .captures(selection)
        .ok_or_else(invalid)?;
    let mask = caps.name("mask").map(|m| m.as_str());
    let prefix = caps
        .name("prefix")
        .or_else(|| caps.name("bare"))
        .map(|m| m.as_str());

    match (mask, prefix) {
        (mask, Some(prefix)) => {
            let len = parse_prefix(prefix)?;
            if let Some(mask) = mask {
                let mask_addr = parse_address(mask).map_err(|_| invalid())?;
                if mask_to_prefix(mask_addr) != Some(len) {
                    log::warn!("Mask {mask} does not match /{len}, using /{len}");
                }
            }
            Ok(len)
        }
        (Some(mask), None) => parse_address(mask)
            .ok()
            .and_then(mask_to_prefix)
            .ok_or_else(invalid),
        (None, None) => Err(invalid()),
    }
}
