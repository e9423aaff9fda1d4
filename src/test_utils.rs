use crate::models::domain::{QuizOption, QuizQuestion};
