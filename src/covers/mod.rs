//! Cover asset maintenance: placeholder pruning, integrity checks, and
//! re-acquisition from the bibliographic image providers.

pub mod placeholder;
pub mod restore;
pub mod store;
pub mod validate;
