pub mod advanced_results;
pub mod authentication;
pub mod bootcamp;
pub mod common;
pub mod course;
pub mod crypto;
pub mod health;
pub mod jwt;
pub mod review;
pub mod user;
