pub mod console;
pub mod env_file;
pub mod table;
pub mod threshold;
