//! Recipes domain: recipes, ingredients, recipe ingredient lines

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{
    Ingredient, IngredientLine, Recipe, RecipeDetail, RecipeDraft, RecipeFilter,
    RecipeIngredient, RecipeListing,
};

// Re-export repository types
pub use repository::{
    create_recipe_tx, delete_ingredient_tx, delete_recipe_tx, replace_recipe_ingredients_tx,
    update_recipe_tx, upsert_recipe_ingredients_tx, IngredientRepository, RecipeRepository,
    RecipesRepositories,
};

// Re-export API types
pub use api::routes;
pub use api::RecipesState;
