//! Service layer for the coaching-site API.
//! - `storage` is the persistence gateway (document store trait + backends).
//! - `services` hold the per-resource operations and the static catalog.

pub mod errors;
pub mod storage;
pub mod services;
#[cfg(test)]
pub mod test_support;
