pub mod file_exist;
pub mod human_size;
