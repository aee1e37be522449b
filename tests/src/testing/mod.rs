pub mod remotes;
pub mod util;
