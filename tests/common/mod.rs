//! Shared fixtures for integration tests.

#![allow(dead_code)]

pub mod mocks;

use cocktail::rag::{build_documents, DocumentIndex, QueryEngine, RecipeRecord, DEFAULT_METRIC, DEFAULT_TOP_K};
use cocktail::{AppState, LLMClient};
use mocks::KeywordEmbedder;
use serde_json::json;
use std::sync::Arc;

/// Small dataset covering alcoholic, non-alcoholic and tagless recipes.
pub fn sample_dataset() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "name": "Mojito",
            "category": "Cocktail",
            "alcoholic": 1,
            "glass": "Highball glass",
            "tags": ["IBA"],
            "ingredients": [
                {"name": "White rum", "measure": "2 oz"},
                {"name": "Mint", "measure": "6 leaves"},
                {"name": "Lime", "measure": "1/2"},
                {"name": "Sugar", "measure": "2 tsp"}
            ],
            "instructions": "Muddle mint with sugar and lime, add rum and soda."
        },
        {
            "id": 2,
            "name": "Margarita",
            "category": "Ordinary Drink",
            "alcoholic": 1,
            "glass": "Cocktail glass",
            "tags": ["IBA", "Classic"],
            "ingredients": [
                {"name": "Tequila", "measure": "1 1/2 oz"},
                {"name": "Triple sec", "measure": "1/2 oz"},
                {"name": "Lime juice", "measure": "1 oz"}
            ],
            "instructions": "Shake with ice and strain into a salt-rimmed glass."
        },
        {
            "id": 3,
            "name": "Gin Tonic",
            "category": "Ordinary Drink",
            "alcoholic": 1,
            "glass": "Highball glass",
            "tags": null,
            "ingredients": [
                {"name": "Gin", "measure": "2 oz"},
                {"name": "Tonic water", "measure": null}
            ],
            "instructions": "Pour gin over ice and top with tonic."
        },
        {
            "id": 4,
            "name": "Virgin Mojito",
            "category": "Mocktail",
            "alcoholic": 0,
            "glass": "Highball glass",
            "ingredients": [
                {"name": "Mint", "measure": "6 leaves"},
                {"name": "Sugar", "measure": "2 tsp"},
                {"name": "Soda water", "measure": ""}
            ],
            "instructions": "Muddle mint with sugar and top with soda."
        }
    ])
}

pub fn sample_records() -> Vec<RecipeRecord> {
    serde_json::from_value(sample_dataset()).expect("sample dataset parses")
}

/// Query engine over the sample dataset with the keyword embedder.
pub async fn create_test_engine(llm: Arc<dyn LLMClient>) -> QueryEngine {
    let documents = build_documents(&sample_records()).expect("sample dataset renders");
    let embedder = Arc::new(KeywordEmbedder::new());
    let index = DocumentIndex::build(documents, embedder.as_ref(), DEFAULT_METRIC)
        .await
        .expect("index builds");
    QueryEngine::new(embedder, Arc::new(index), llm, DEFAULT_TOP_K)
}

pub async fn create_test_state(llm: Arc<dyn LLMClient>) -> AppState {
    AppState::new(create_test_engine(llm).await)
}
