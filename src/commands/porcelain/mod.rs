//! Porcelain commands
//!
//! - `init`: Create the `.kit` directory layout
//! - `add`: Stage files into the index
//! - `status`: Show how the working tree differs from the index

pub mod add;
pub mod init;
pub mod status;
