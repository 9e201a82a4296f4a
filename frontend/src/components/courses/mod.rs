pub mod course_form;
pub mod courses_page;
pub mod fields;
pub mod manage;
