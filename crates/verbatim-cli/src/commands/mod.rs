//! Command implementations.

pub mod draft;
pub mod export;
pub mod init;
pub mod key_points;
pub mod reset;
pub mod status;
pub mod verify;

pub use self::draft::execute_draft;
pub use self::export::execute_export;
pub use self::init::execute_init;
pub use self::key_points::execute_key_points;
pub use self::reset::execute_reset;
pub use self::status::execute_status;
pub use self::verify::execute_verify;
