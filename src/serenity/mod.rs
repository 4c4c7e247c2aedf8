pub mod loader;
pub mod serenity_model;
