//! UI strings per locale.
//!
//! Lookups fall back to English, then to the key itself, so a missing
//! translation never leaves a blank spot in the page.

use contracts::shared::locale::DEFAULT_LOCALE;

const EN: &[(&str, &str)] = &[
    ("site_title", "Recipe Blog"),
    ("all_recipes", "All Recipes"),
    ("hero_title", "Find the best recipes"),
    ("hero_subtitle", "Discover delicious meals for any occasion."),
    ("featured_recipes", "Featured recipes"),
    ("search_placeholder", "Search recipes..."),
    ("all_categories", "All Categories"),
    ("no_recipes_found", "No recipes found matching your criteria."),
    ("view_recipe", "View Recipe"),
    ("back_to_recipes", "Back to Recipes"),
    ("by_author", "By"),
    ("minutes_label", "mins"),
    ("ingredients_heading", "Ingredients"),
    ("instructions_heading", "Instructions"),
    ("video_heading", "Video Tutorial"),
    ("comments_heading", "Comments"),
    ("share_label", "Share"),
    ("loading", "Loading..."),
    ("recipe_not_found", "Recipe not found."),
    ("load_error", "Could not load recipes. Please try again later."),
    ("newsletter_title", "Subscribe to our newsletter"),
    ("newsletter_placeholder", "Enter your email"),
    ("newsletter_button", "Subscribe"),
    ("newsletter_success", "Thank you for subscribing!"),
    ("newsletter_error", "Please enter a valid email address."),
];

const ES: &[(&str, &str)] = &[
    ("site_title", "Blog de Recetas"),
    ("all_recipes", "Todas las recetas"),
    ("hero_title", "Encuentra las mejores recetas"),
    ("hero_subtitle", "Descubre comidas deliciosas para cualquier ocasión."),
    ("featured_recipes", "Recetas destacadas"),
    ("search_placeholder", "Buscar recetas..."),
    ("all_categories", "Todas las categorías"),
    ("no_recipes_found", "No se encontraron recetas que coincidan con tus criterios."),
    ("view_recipe", "Ver receta"),
    ("back_to_recipes", "Volver a las recetas"),
    ("by_author", "Por"),
    ("minutes_label", "min"),
    ("ingredients_heading", "Ingredientes"),
    ("instructions_heading", "Instrucciones"),
    ("video_heading", "Video tutorial"),
    ("comments_heading", "Comentarios"),
    ("share_label", "Compartir"),
    ("loading", "Cargando..."),
    ("recipe_not_found", "Receta no encontrada."),
    ("newsletter_title", "Suscríbete a nuestro boletín"),
    ("newsletter_placeholder", "Introduce tu correo electrónico"),
    ("newsletter_button", "Suscribirse"),
    ("newsletter_success", "¡Gracias por suscribirte!"),
    ("newsletter_error", "Introduce una dirección de correo válida."),
];

const FR: &[(&str, &str)] = &[
    ("site_title", "Blog de Recettes"),
    ("all_recipes", "Toutes les recettes"),
    ("hero_title", "Trouvez les meilleures recettes"),
    ("hero_subtitle", "Découvrez de délicieux plats pour toutes les occasions."),
    ("featured_recipes", "Recettes en vedette"),
    ("search_placeholder", "Rechercher des recettes..."),
    ("all_categories", "Toutes les catégories"),
    ("no_recipes_found", "Aucune recette ne correspond à vos critères."),
    ("view_recipe", "Voir la recette"),
    ("back_to_recipes", "Retour aux recettes"),
    ("by_author", "Par"),
    ("minutes_label", "min"),
    ("ingredients_heading", "Ingrédients"),
    ("instructions_heading", "Instructions"),
    ("video_heading", "Tutoriel vidéo"),
    ("comments_heading", "Commentaires"),
    ("share_label", "Partager"),
    ("loading", "Chargement..."),
    ("recipe_not_found", "Recette introuvable."),
    ("newsletter_title", "Abonnez-vous à notre newsletter"),
    ("newsletter_placeholder", "Entrez votre e-mail"),
    ("newsletter_button", "S'abonner"),
    ("newsletter_success", "Merci pour votre abonnement !"),
    ("newsletter_error", "Veuillez saisir une adresse e-mail valide."),
];

fn table(locale: &str) -> &'static [(&'static str, &'static str)] {
    match locale {
        "es" => ES,
        "fr" => FR,
        _ => EN,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate `key` for `locale`
pub fn t(locale: &str, key: &str) -> String {
    lookup(table(locale), key)
        .or_else(|| lookup(table(DEFAULT_LOCALE), key))
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_per_locale() {
        assert_eq!(t("en", "all_recipes"), "All Recipes");
        assert_eq!(t("es", "all_recipes"), "Todas las recetas");
        assert_eq!(t("fr", "all_recipes"), "Toutes les recettes");
        assert_eq!(t("es", "share_label"), "Compartir");
    }

    #[test]
    fn test_falls_back_to_english_then_key() {
        // not translated in es
        assert_eq!(t("es", "load_error"), t("en", "load_error"));
        assert_eq!(t("de", "view_recipe"), "View Recipe");
        assert_eq!(t("fr", "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_every_translation_has_an_english_source() {
        for (key, _) in ES.iter().chain(FR.iter()) {
            assert!(lookup(EN, key).is_some(), "{} missing in EN", key);
        }
    }
}
