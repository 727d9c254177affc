pub mod collect;
pub mod configure;
pub mod summary;
pub mod validate;
pub mod vhosts;
