pub mod contributions;
pub mod data_entry;
pub mod home;
