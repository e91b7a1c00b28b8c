pub mod bootcamp;
pub mod course;
pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod memory;
pub mod query;
pub mod review;
pub mod seeder;
pub mod user;
