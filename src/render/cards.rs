use std::fmt::Write;

use super::{attr, text};
use crate::model::MealSummary;

/// Render search results as keyboard-focusable cards, in input order
pub fn render_cards(meals: &[MealSummary]) -> String {
    let mut html = String::new();

    for meal in meals {
        let _ = write!(
            html,
            r#"<article class="meal" data-meal-id="{id}" tabindex="0" role="button"><img src="{src}" alt="{alt}"><div class="meal-info"><h3 class="meal-title">{name}</h3>"#,
            id = attr(&meal.id),
            src = attr(&meal.thumbnail),
            alt = attr(&meal.name),
            name = text(&meal.name),
        );
        if let Some(category) = &meal.category {
            let _ = write!(html, r#"<div class="meal-category">{}</div>"#, text(category));
        }
        html.push_str("</div></article>");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn summary(id: &str, name: &str, category: Option<&str>) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: name.to_string(),
            thumbnail: format!("https://img/{}.jpg", id),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_cards_in_order() {
        let meals = vec![
            summary("3", "Beef Stew", Some("Beef")),
            summary("1", "Apple Frangipan Tart", None),
            summary("2", "Corba", Some("Side")),
        ];

        let fragment = Html::parse_fragment(&render_cards(&meals));
        let selector = Selector::parse("article.meal").unwrap();
        let ids: Vec<_> = fragment
            .select(&selector)
            .map(|card| card.value().attr("data-meal-id").unwrap().to_string())
            .collect();

        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_card_is_keyboard_activatable() {
        let html = render_cards(&[summary("9", "Corba", None)]);
        let fragment = Html::parse_fragment(&html);
        let card = fragment
            .select(&Selector::parse("article.meal").unwrap())
            .next()
            .unwrap();

        assert_eq!(card.value().attr("tabindex"), Some("0"));
        assert_eq!(card.value().attr("role"), Some("button"));
    }

    #[test]
    fn test_category_only_when_present() {
        let html = render_cards(&[summary("1", "A", None), summary("2", "B", Some("Vegan"))]);
        let fragment = Html::parse_fragment(&html);
        let categories: Vec<String> = fragment
            .select(&Selector::parse(".meal-category").unwrap())
            .map(|el| el.text().collect())
            .collect();

        assert_eq!(categories, vec!["Vegan"]);
    }

    #[test]
    fn test_escapes_names() {
        let html = render_cards(&[summary("1", "Fish & <Chips>", None)]);
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(!html.contains("<Chips>"));
    }

    #[test]
    fn test_empty() {
        assert!(render_cards(&[]).is_empty());
    }
}
