pub mod explore;
pub mod records;
pub mod registry;
pub mod resources;
pub mod util;
