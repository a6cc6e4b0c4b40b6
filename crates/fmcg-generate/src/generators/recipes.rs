use fmcg_core::{Catalog, RecipeLine};

use super::sampling::round_to;
use crate::errors::GenerationError;

/// One costed line per (sku, ingredient) pair of the bill of materials.
pub fn recipe_lines(catalog: &Catalog) -> Result<Vec<RecipeLine>, GenerationError> {
    let mut lines = Vec::new();
    for recipe in &catalog.recipes {
        for component in &recipe.components {
            let unit_cost = catalog.unit_cost_of(&component.ingredient).ok_or_else(|| {
                GenerationError::InvalidCatalog(format!(
                    "recipe {} references unknown ingredient: {}",
                    recipe.sku, component.ingredient
                ))
            })?;
            lines.push(RecipeLine {
                sku: recipe.sku.clone(),
                ingredient: component.ingredient.clone(),
                quantity_per_unit: component.quantity,
                cost_per_unit: round_to(component.quantity * unit_cost, 4),
            });
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_quantity_times_unit_cost() {
        let catalog = Catalog::bakery();
        let lines = recipe_lines(&catalog).expect("recipes");
        assert_eq!(lines.len(), 30);

        let flour = &lines[0];
        assert_eq!(flour.sku, "Bread_Standard");
        assert_eq!(flour.ingredient, "Flour_kg");
        assert_eq!(flour.quantity_per_unit, 0.5);
        assert_eq!(flour.cost_per_unit, 0.6);

        let yeast = &lines[1];
        assert_eq!(yeast.ingredient, "Yeast_g");
        assert_eq!(yeast.cost_per_unit, 0.01);
    }

    #[test]
    fn unknown_ingredient_is_rejected() {
        let mut catalog = Catalog::bakery();
        catalog.ingredients.retain(|item| item.name != "Oil_L");
        assert!(matches!(
            recipe_lines(&catalog),
            Err(GenerationError::InvalidCatalog(_))
        ));
    }
}
