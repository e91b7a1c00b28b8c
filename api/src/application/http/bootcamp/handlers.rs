pub mod create_bootcamp;
pub mod delete_bootcamp;
pub mod get_bootcamp;
pub mod get_bootcamps;
pub mod update_bootcamp;
