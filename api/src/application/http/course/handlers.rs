pub mod add_course;
pub mod delete_course;
pub mod get_bootcamp_courses;
pub mod get_course;
pub mod get_courses;
pub mod update_course;
