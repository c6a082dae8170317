mod context;
pub mod generate;
pub mod init;
pub mod status;
pub mod translate;
