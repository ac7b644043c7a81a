//! Repository implementations for Recipes domain

pub mod ingredients;
pub mod recipes;
pub mod transactions;

use sqlx::{PgPool, Postgres, Transaction};

pub use ingredients::IngredientRepository;
pub use recipes::RecipeRepository;
pub use transactions::{
    create_recipe_tx, delete_ingredient_tx, delete_recipe_tx, replace_recipe_ingredients_tx,
    update_recipe_tx, upsert_recipe_ingredients_tx,
};

/// Combined repository access for the Recipes domain
#[derive(Clone)]
pub struct RecipesRepositories {
    pool: PgPool,
    pub recipes: RecipeRepository,
    pub ingredients: IngredientRepository,
}

impl RecipesRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            recipes: RecipeRepository::new(pool.clone()),
            ingredients: IngredientRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
