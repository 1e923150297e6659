pub mod init;
pub mod project;
pub mod scenarios;
pub mod score;
