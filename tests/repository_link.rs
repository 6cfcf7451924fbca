use std::sync::Arc;

use shortr::domain::entities::NewLink;
use shortr::domain::repositories::LinkRepository;
use shortr::error::AppError;
use shortr::infrastructure::persistence::MemoryLinkRepository;

#[tokio::test]
async fn test_insert_link() {
    let repo = MemoryLinkRepository::new();

    let new_link = NewLink {
        code: "test123".to_string(),
        original_url: "https://example.com".to_string(),
    };

    let result = repo.insert(new_link).await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert_eq!(link.code, "test123");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.clicks, 0);
}

#[tokio::test]
async fn test_insert_duplicate_code_conflict() {
    let repo = MemoryLinkRepository::new();

    repo.insert(NewLink {
        code: "dup123".to_string(),
        original_url: "https://first.com".to_string(),
    })
    .await
    .unwrap();

    let result = repo
        .insert(NewLink {
            code: "dup123".to_string(),
            original_url: "https://second.com".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));

    // The original mapping survives the rejected insert.
    let link = repo.get("dup123").await.unwrap().unwrap();
    assert_eq!(link.original_url, "https://first.com");
}

#[tokio::test]
async fn test_get_found() {
    let repo = MemoryLinkRepository::new();

    repo.insert(NewLink {
        code: "abc123".to_string(),
        original_url: "https://example.com".to_string(),
    })
    .await
    .unwrap();

    let result = repo.get("abc123").await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.is_some());
    assert_eq!(link.unwrap().code, "abc123");
}

#[tokio::test]
async fn test_get_not_found() {
    let repo = MemoryLinkRepository::new();

    let result = repo.get("notfound").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_increment_clicks() {
    let repo = MemoryLinkRepository::new();

    repo.insert(NewLink {
        code: "click1".to_string(),
        original_url: "https://example.com".to_string(),
    })
    .await
    .unwrap();

    let first = repo.increment_clicks("click1").await.unwrap().unwrap();
    assert_eq!(first.clicks, 1);

    let second = repo.increment_clicks("click1").await.unwrap().unwrap();
    assert_eq!(second.clicks, 2);

    let stored = repo.get("click1").await.unwrap().unwrap();
    assert_eq!(stored.clicks, 2);
}

#[tokio::test]
async fn test_increment_clicks_unknown_code() {
    let repo = MemoryLinkRepository::new();

    let result = repo.increment_clicks("ghost1").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[tokio::test]
async fn test_all_returns_every_link() {
    let repo = MemoryLinkRepository::new();

    for i in 1..=3 {
        repo.insert(NewLink {
            code: format!("link{}", i),
            original_url: format!("https://example.com/{}", i),
        })
        .await
        .unwrap();
    }

    let links = repo.all().await.unwrap();

    assert_eq!(links.len(), 3);
    assert!(links.iter().any(|l| l.code == "link1"));
    assert!(links.iter().any(|l| l.code == "link2"));
    assert!(links.iter().any(|l| l.code == "link3"));
}

#[tokio::test]
async fn test_all_empty_store() {
    let repo = MemoryLinkRepository::new();

    let links = repo.all().await.unwrap();

    assert!(links.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_increments() {
    let repository = Arc::new(MemoryLinkRepository::new());

    repository
        .insert(NewLink {
            code: "race42".to_string(),
            original_url: "https://example.com/race".to_string(),
        })
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repository.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..25 {
                repo.increment_clicks("race42").await.unwrap();
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let link = repository.get("race42").await.unwrap().unwrap();
    assert_eq!(link.clicks, 200);
}
