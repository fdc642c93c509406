//! sea-orm entities for the resource service tables.

pub mod items;
pub mod users;
