use cocktail::rag::embeddings::OllamaEmbedder;
use cocktail::rag::Embedder;
use cocktail::types::AppError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_ollama_embed_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .and(body_json(json!({"model": "all-minilm", "input": ["one", "two"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "all-minilm",
            "embeddings": [[0.1, 0.2], [0.3, 0.4]]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let embedder = OllamaEmbedder::new(&server.uri(), "all-minilm".to_string());
    let vectors = embedder
        .embed_documents(&["one".to_string(), "two".to_string()])
        .await
        .unwrap();

    assert_eq!(vectors, vec![vec![0.1, 0.2], vec![0.3, 0.4]]);
}

#[tokio::test]
async fn test_ollama_embed_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/embed"))
        .and(body_json(json!({"model": "all-minilm", "input": ["gin?"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"embeddings": [[1.0, 0.0]]})))
        .mount(&server)
        .await;

    let embedder = OllamaEmbedder::new(&server.uri(), "all-minilm".to_string());
    assert_eq!(embedder.embed_query("gin?").await.unwrap(), vec![1.0, 0.0]);
}

#[tokio::test]
async fn test_ollama_embed_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model not found"))
        .mount(&server)
        .await;

    let embedder = OllamaEmbedder::new(&server.uri(), "missing".to_string());
    let err = embedder.embed_query("x").await.unwrap_err();

    assert!(matches!(err, AppError::Embedding(_)));
    assert!(err.to_string().contains("model not found"));
}

#[tokio::test]
async fn test_ollama_embed_count_mismatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"embeddings": [[1.0]]})))
        .mount(&server)
        .await;

    let embedder = OllamaEmbedder::new(&server.uri(), "all-minilm".to_string());
    let result = embedder
        .embed_documents(&["a".to_string(), "b".to_string()])
        .await;

    assert!(matches!(result, Err(AppError::Embedding(_))));
}

#[tokio::test]
async fn test_ollama_embed_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    let embedder = OllamaEmbedder::new(&server.uri(), "all-minilm".to_string());
    assert!(embedder.embed_query("x").await.is_err());
}
