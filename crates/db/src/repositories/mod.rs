pub mod meal_repo;
pub mod user_repo;

pub use meal_repo::MealRepo;
pub use user_repo::UserRepo;
