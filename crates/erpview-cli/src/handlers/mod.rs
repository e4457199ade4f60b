pub mod guidance;
pub mod init;
pub mod promote;
pub mod render;
pub mod resolve;
pub mod view;
