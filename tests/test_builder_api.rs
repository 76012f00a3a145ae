use recipe_scribe::{RecipeAssistant, RecipeError, RecipePreferences};

const GENERATED: &str = "Title: Garlic Butter Shrimp\\nIngredients:\\n- 1 lb shrimp\\n- 2 tbsp butter\\n- 3 cloves garlic\\nInstructions:\\n1. Melt butter.\\n2. Cook shrimp with garlic.\\nNutrition (per serving):\\n- Calories: 320\\n- Protein: 35g\\n- Prep time: 10m\\n- Cook time: 8m\\nTotal time required: 18m\\nServes: 2\\nServing size: 1 plate";

fn chat_body() -> String {
    format!(r#"{{"choices": [{{"message": {{"content": "{GENERATED}"}}}}]}}"#)
}

#[tokio::test]
async fn test_builder_text_source() {
    let card = RecipeAssistant::builder()
        .text("Porridge\nIngredients:\n1 cup oats\n2 cups milk\nServes: 2")
        .build()
        .await
        .unwrap();

    assert_eq!(card.recipe.title, "Porridge");
    assert_eq!(card.view(1).ingredients, vec!["1/2 cup oats", "1 cups milk"]);
    assert!(card.image_url.is_none());
}

#[tokio::test]
async fn test_builder_empty_text() {
    let result = RecipeAssistant::builder().text("  \n ").build().await;
    assert!(matches!(result, Err(RecipeError::EmptyInput(_))));
}

#[tokio::test]
async fn test_builder_without_source() {
    let result = RecipeAssistant::builder().build().await;
    assert!(matches!(result, Err(RecipeError::BuilderError(_))));
}

#[tokio::test]
async fn test_builder_generate_with_image() {
    let mut server = mockito::Server::new_async().await;
    let chat = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test_key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body())
        .create_async()
        .await;
    let image = server
        .mock("POST", "/v1/images/generations")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"data": [{"url": "https://images.example/shrimp.png"}]}"#)
        .create_async()
        .await;

    let card = RecipeAssistant::builder()
        .generate(RecipePreferences {
            ingredients: vec!["shrimp".to_string(), "garlic".to_string()],
            servings: Some(2),
            ..Default::default()
        })
        .api_key("test_key")
        .base_url(server.url())
        .with_image(true)
        .build()
        .await
        .unwrap();

    chat.assert_async().await;
    image.assert_async().await;

    assert_eq!(card.recipe.title, "Garlic Butter Shrimp");
    assert_eq!(card.recipe.ingredients.len(), 3);
    assert_eq!(card.image_url.as_deref(), Some("https://images.example/shrimp.png"));
    assert!(card.warning().is_none());

    let view = card.view(4);
    assert_eq!(view.ingredients[0], "2 lb shrimp");
    assert_eq!(view.nutrition.calories, "320");
    assert_eq!(view.nutrition.total_time, "18 minutes");
    assert_eq!(view.nutrition.serving_size, "1 plate per serving");
}

#[tokio::test]
async fn test_builder_generate_image_failure_keeps_recipe() {
    let mut server = mockito::Server::new_async().await;
    let chat = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_body())
        .create_async()
        .await;
    let image = server
        .mock("POST", "/v1/images/generations")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": "unavailable"}"#)
        .create_async()
        .await;

    let card = RecipeAssistant::builder()
        .generate(RecipePreferences::default())
        .api_key("test_key")
        .base_url(server.url())
        .with_image(true)
        .build()
        .await
        .unwrap();

    chat.assert_async().await;
    image.assert_async().await;
    assert_eq!(card.recipe.instructions.len(), 2);
    assert!(card.image_url.is_none());
}

#[tokio::test]
async fn test_builder_generate_api_error() {
    let mut server = mockito::Server::new_async().await;
    let chat = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Incorrect API key"}}"#)
        .create_async()
        .await;

    let result = RecipeAssistant::builder()
        .generate(RecipePreferences::default())
        .api_key("bad_key")
        .base_url(server.url())
        .with_image(false)
        .build()
        .await;

    chat.assert_async().await;
    assert!(matches!(result, Err(RecipeError::ProviderError(_))));
}
