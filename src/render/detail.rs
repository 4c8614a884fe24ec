use std::fmt::Write;

use super::{attr, text};
use crate::model::MealDetail;

/// Render the expanded panel for one meal
pub fn render_detail(meal: &MealDetail) -> String {
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<img class="meal-details-img" src="{src}" alt="{alt}"><h2 class="meal-details-title">{name}</h2><div class="meal-details-category"><span>{category}</span></div>"#,
        src = attr(&meal.thumbnail),
        alt = attr(&meal.name),
        name = text(&meal.name),
        category = text(&meal.category),
    );

    let _ = write!(
        html,
        r#"<div class="meal-details-instructions"><h3>Instructions</h3><p>{}</p></div>"#,
        text(&meal.instructions)
    );

    html.push_str(r#"<div class="meal-details-ingredients"><h3>Ingredients</h3><ul class="ingredients-list">"#);
    for ingredient in &meal.ingredients {
        let label = if ingredient.measure.is_empty() {
            ingredient.name.clone()
        } else {
            format!("{} {}", ingredient.measure, ingredient.name)
        };
        let _ = write!(html, "<li>{}</li>", text(&label));
    }
    html.push_str("</ul></div>");

    // New browsing context must not get a handle back to this page
    if let Some(video) = &meal.video {
        let _ = write!(
            html,
            r#"<a class="youtube-link" href="{}" target="_blank" rel="noopener noreferrer">Watch Video</a>"#,
            attr(video)
        );
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;
    use scraper::{Html, Selector};

    fn detail() -> MealDetail {
        MealDetail {
            id: "52772".to_string(),
            name: "Teriyaki Chicken Casserole".to_string(),
            thumbnail: "https://img/52772.jpg".to_string(),
            category: "Chicken".to_string(),
            instructions: "Preheat oven to 350 F.".to_string(),
            ingredients: vec![
                Ingredient {
                    name: "soy sauce".to_string(),
                    measure: "3/4 cup".to_string(),
                },
                Ingredient {
                    name: "water".to_string(),
                    measure: String::new(),
                },
            ],
            video: Some("https://www.youtube.com/watch?v=4aZr5hZXP_s".to_string()),
        }
    }

    fn select_text(html: &str, selector: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        fragment
            .select(&Selector::parse(selector).unwrap())
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    #[test]
    fn test_detail_sections() {
        let html = render_detail(&detail());

        assert_eq!(
            select_text(&html, ".meal-details-title"),
            vec!["Teriyaki Chicken Casserole"]
        );
        assert_eq!(select_text(&html, ".meal-details-category span"), vec!["Chicken"]);
        assert_eq!(
            select_text(&html, ".meal-details-instructions p"),
            vec!["Preheat oven to 350 F."]
        );
        assert_eq!(
            select_text(&html, ".ingredients-list li"),
            vec!["3/4 cup soy sauce", "water"]
        );
    }

    #[test]
    fn test_video_link_opens_without_opener() {
        let html = render_detail(&detail());
        let fragment = Html::parse_fragment(&html);
        let link = fragment
            .select(&Selector::parse("a.youtube-link").unwrap())
            .next()
            .unwrap();

        assert_eq!(link.value().attr("target"), Some("_blank"));
        assert!(link.value().attr("rel").unwrap().contains("noopener"));
        assert_eq!(
            link.value().attr("href"),
            Some("https://www.youtube.com/watch?v=4aZr5hZXP_s")
        );
    }

    #[test]
    fn test_no_video_link() {
        let mut meal = detail();
        meal.video = None;
        assert!(!render_detail(&meal).contains("youtube-link"));
    }
}
