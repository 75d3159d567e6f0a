use std::collections::BTreeMap;

use serde::Serialize;

use crate::utils::error::{DomainError, EntityKind, Result};

const PORTION: f64 = 100.0;

/// Raw nutrient values. Whether they refer to 100g or to a whole unit
/// depends on the element that carries them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Nutrients {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Nutrients {
    pub const ZERO: Nutrients = Nutrients {
        calories: 0.0,
        proteins: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    fn scaled(self, factor: f64) -> Nutrients {
        Nutrients {
            calories: self.calories * factor,
            proteins: self.proteins * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    fn plus(self, other: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories + other.calories,
            proteins: self.proteins + other.proteins,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

/// Computed nutritional snapshot of any registered element.
///
/// `per_100g` is fixed by the element kind: raw materials and recipes
/// report per-100g values, packaged products and menus report the value
/// of a whole unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionFacts {
    pub name: String,
    pub nutrients: Nutrients,
    pub per_100g: bool,
}

impl NutritionFacts {
    pub fn calories(&self) -> f64 {
        self.nutrients.calories
    }

    pub fn proteins(&self) -> f64 {
        self.nutrients.proteins
    }

    pub fn carbs(&self) -> f64 {
        self.nutrients.carbs
    }

    pub fn fat(&self) -> f64 {
        self.nutrients.fat
    }
}

#[derive(Debug, Clone, Default)]
struct RecipeDef {
    /// (raw material name, grams), in insertion order.
    ingredients: Vec<(String, f64)>,
}

impl RecipeDef {
    fn total_weight(&self) -> f64 {
        self.ingredients.iter().map(|(_, qty)| qty).sum()
    }
}

#[derive(Debug, Clone, Default)]
struct MenuDef {
    /// (recipe name, serving size in grams).
    dishes: Vec<(String, f64)>,
    /// Whole packaged products, contributing their absolute values.
    products: Vec<String>,
}

/// Registry of nutritional elements: raw materials, packaged products,
/// recipes, and menus.
///
/// Composite elements (recipes and menus) store references by name and
/// compute their values on demand from the current registry state.
#[derive(Debug, Default)]
pub struct Food {
    raw_materials: BTreeMap<String, Nutrients>,
    products: BTreeMap<String, Nutrients>,
    recipes: BTreeMap<String, RecipeDef>,
    menus: BTreeMap<String, MenuDef>,
}

impl Food {
    pub fn new() -> Food {
        Food::default()
    }

    /// Define a raw material with its per-100g nutrient values.
    pub fn define_raw_material(&mut self, name: &str, nutrients: Nutrients) -> Result<()> {
        if self.raw_materials.contains_key(name) {
            return Err(DomainError::duplicate(EntityKind::RawMaterial, name));
        }
        self.raw_materials.insert(name.to_string(), nutrients);
        Ok(())
    }

    /// Define a packaged product with the nutrient values of one unit.
    pub fn define_product(&mut self, name: &str, nutrients: Nutrients) -> Result<()> {
        if self.products.contains_key(name) {
            return Err(DomainError::duplicate(EntityKind::Product, name));
        }
        self.products.insert(name.to_string(), nutrients);
        Ok(())
    }

    pub fn define_recipe(&mut self, name: &str) -> Result<()> {
        if self.recipes.contains_key(name) {
            return Err(DomainError::duplicate(EntityKind::Recipe, name));
        }
        self.recipes.insert(name.to_string(), RecipeDef::default());
        Ok(())
    }

    pub fn define_menu(&mut self, name: &str) -> Result<()> {
        if self.menus.contains_key(name) {
            return Err(DomainError::duplicate(EntityKind::Menu, name));
        }
        self.menus.insert(name.to_string(), MenuDef::default());
        Ok(())
    }

    /// Add `quantity` grams of a raw material to a recipe.
    pub fn add_ingredient(&mut self, recipe: &str, material: &str, quantity: f64) -> Result<()> {
        if quantity <= 0.0 {
            return Err(DomainError::invalid(
                "ingredient quantity",
                quantity.to_string(),
            ));
        }
        if !self.raw_materials.contains_key(material) {
            return Err(DomainError::not_found(EntityKind::RawMaterial, material));
        }
        let def = self
            .recipes
            .get_mut(recipe)
            .ok_or_else(|| DomainError::not_found(EntityKind::Recipe, recipe))?;
        def.ingredients.push((material.to_string(), quantity));
        Ok(())
    }

    /// Add a serving of `quantity` grams of a recipe to a menu.
    pub fn add_recipe_to_menu(&mut self, menu: &str, recipe: &str, quantity: f64) -> Result<()> {
        if quantity <= 0.0 {
            return Err(DomainError::invalid(
                "serving quantity",
                quantity.to_string(),
            ));
        }
        if !self.recipes.contains_key(recipe) {
            return Err(DomainError::not_found(EntityKind::Recipe, recipe));
        }
        let def = self
            .menus
            .get_mut(menu)
            .ok_or_else(|| DomainError::not_found(EntityKind::Menu, menu))?;
        def.dishes.push((recipe.to_string(), quantity));
        Ok(())
    }

    /// Add one unit of a packaged product to a menu.
    pub fn add_product_to_menu(&mut self, menu: &str, product: &str) -> Result<()> {
        if !self.products.contains_key(product) {
            return Err(DomainError::not_found(EntityKind::Product, product));
        }
        let def = self
            .menus
            .get_mut(menu)
            .ok_or_else(|| DomainError::not_found(EntityKind::Menu, menu))?;
        def.products.push(product.to_string());
        Ok(())
    }

    pub fn raw_material(&self, name: &str) -> Result<NutritionFacts> {
        let nutrients = self
            .raw_materials
            .get(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::RawMaterial, name))?;
        Ok(NutritionFacts {
            name: name.to_string(),
            nutrients: *nutrients,
            per_100g: true,
        })
    }

    pub fn product(&self, name: &str) -> Result<NutritionFacts> {
        let nutrients = self
            .products
            .get(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Product, name))?;
        Ok(NutritionFacts {
            name: name.to_string(),
            nutrients: *nutrients,
            per_100g: false,
        })
    }

    /// Per-100g values of a recipe, recomputed from its current
    /// ingredient list: the weighted sum over the ingredients,
    /// re-normalized to a 100g basis.
    ///
    /// A recipe with no ingredients has no defined weight and yields
    /// [`DomainError::EmptyRecipe`] rather than dividing by zero.
    pub fn recipe(&self, name: &str) -> Result<NutritionFacts> {
        let def = self
            .recipes
            .get(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Recipe, name))?;
        let weight = def.total_weight();
        if weight <= 0.0 {
            return Err(DomainError::EmptyRecipe {
                name: name.to_string(),
            });
        }
        let mut total = Nutrients::ZERO;
        for (material, qty) in &def.ingredients {
            let per_100g = self
                .raw_materials
                .get(material)
                .ok_or_else(|| DomainError::not_found(EntityKind::RawMaterial, material))?;
            total = total.plus(per_100g.scaled(qty / PORTION));
        }
        Ok(NutritionFacts {
            name: name.to_string(),
            nutrients: total.scaled(PORTION / weight),
            per_100g: true,
        })
    }

    /// Absolute values of a whole menu: recipe servings scaled by their
    /// size plus whole packaged products.
    pub fn menu(&self, name: &str) -> Result<NutritionFacts> {
        let def = self
            .menus
            .get(name)
            .ok_or_else(|| DomainError::not_found(EntityKind::Menu, name))?;
        let mut total = Nutrients::ZERO;
        for (recipe, qty) in &def.dishes {
            let facts = self.recipe(recipe)?;
            total = total.plus(facts.nutrients.scaled(qty / PORTION));
        }
        for product in &def.products {
            let facts = self.product(product)?;
            total = total.plus(facts.nutrients);
        }
        Ok(NutritionFacts {
            name: name.to_string(),
            nutrients: total,
            per_100g: false,
        })
    }

    /// Resolve an element of any kind by name.
    pub fn facts(&self, name: &str) -> Result<NutritionFacts> {
        if self.raw_materials.contains_key(name) {
            self.raw_material(name)
        } else if self.products.contains_key(name) {
            self.product(name)
        } else if self.recipes.contains_key(name) {
            self.recipe(name)
        } else {
            self.menu(name)
        }
    }

    pub fn raw_materials(&self) -> Vec<&str> {
        self.raw_materials.keys().map(String::as_str).collect()
    }

    pub fn products(&self) -> Vec<&str> {
        self.products.keys().map(String::as_str).collect()
    }

    pub fn recipes(&self) -> Vec<&str> {
        self.recipes.keys().map(String::as_str).collect()
    }

    pub fn menus(&self) -> Vec<&str> {
        self.menus.keys().map(String::as_str).collect()
    }
}
