//! User-facing flash message texts

pub const MOVE_FAILED: &str = "An error occurred while moving";
pub const RIDDLE_EMPTY: &str = "Please enter an answer";
pub const RIDDLE_FAILED: &str = "An error occurred while submitting your answer";
pub const QUEST_COMPLETED: &str = "Congratulations! You have completed your quest!";
pub const COMPLETION_CONFIRMED: &str = "Congratulations! Your quest is complete!";
pub const COMPLETION_FAILED: &str = "Error completing the game";
pub const GAME_OVER_FALLBACK: &str = "Your journey has come to an end";
