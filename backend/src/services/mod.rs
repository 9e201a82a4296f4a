pub mod authors;
pub mod courses;
