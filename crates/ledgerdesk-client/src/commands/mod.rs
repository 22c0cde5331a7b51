pub mod bill;
mod common;
pub mod company;
pub mod init;
