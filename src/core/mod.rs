pub mod goal;
pub mod recents;
pub mod validate;
