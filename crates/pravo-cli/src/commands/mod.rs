pub mod dispatch;
pub mod init;
pub mod list;
pub mod report;
pub mod seed;
pub mod show;
pub mod upload;
