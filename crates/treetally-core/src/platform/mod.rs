/// Platform-specific functionality: privilege checks.
pub mod permissions;

pub use permissions::is_elevated;
