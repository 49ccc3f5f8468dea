//! Cross-screen flows: the persisted favorites set is the only state
//! shared between screens, and every screen re-reads it on focus.

use std::sync::Arc;

use easel_catalog::{Product, ProductId, Review};
use easel_client::StaticRepository;
use easel_sdk::{CatalogSession, DetailSession, FavoritesSession, FeedbackSession};
use easel_store::MemoryStore;

fn sample_catalog() -> Vec<Product> {
    vec![
        Product::new("p1", "Red Brush", 12.5, "Arteza").with_reviews(vec![
            Review::new("ana", 4, "good bristles"),
            Review::new("ben", 2, "sheds"),
        ]),
        Product::new("p2", "Canvas Panel", 8.0, "Colore").with_discount(25),
        Product::new("p3", "Detail Brush", 6.0, "Arteza"),
    ]
}

#[tokio::test]
async fn toggle_on_home_shows_up_on_favorites_screen() -> anyhow::Result<()> {
    let repository = Arc::new(StaticRepository::new(sample_catalog()));
    let store = Arc::new(MemoryStore::new());

    let mut home = CatalogSession::new(repository.clone(), store.clone());
    home.focus(None).await;
    home.load().await?;
    home.toggle_favorite(ProductId::new("p2")).await;

    let mut favorites = FavoritesSession::new(repository.clone(), store.clone());
    favorites.focus().await;
    favorites.load().await?;

    let view = favorites.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view.visible[0].name, "Canvas Panel");
    Ok(())
}

#[tokio::test]
async fn clear_all_is_visible_to_home_after_refocus() -> anyhow::Result<()> {
    let repository = Arc::new(StaticRepository::new(sample_catalog()));
    let store = Arc::new(MemoryStore::new());

    let mut home = CatalogSession::new(repository.clone(), store.clone());
    home.focus(None).await;
    home.load().await?;
    home.toggle_favorite(ProductId::new("p1")).await;
    home.toggle_favorite(ProductId::new("p3")).await;

    let mut favorites = FavoritesSession::new(repository.clone(), store.clone());
    favorites.focus().await;
    favorites.load().await?;
    assert_eq!(favorites.view().len(), 2);
    favorites.clear_all().await;

    // Back on the home screen, refocus re-reads the persisted set.
    home.focus(None).await;
    assert!(!home.is_favorite(&ProductId::new("p1")));
    assert!(!home.is_favorite(&ProductId::new("p3")));
    Ok(())
}

#[tokio::test]
async fn detail_toggle_round_trips_through_home() -> anyhow::Result<()> {
    let repository = Arc::new(StaticRepository::new(sample_catalog()));
    let store = Arc::new(MemoryStore::new());

    let mut home = CatalogSession::new(repository.clone(), store.clone());
    home.focus(None).await;
    home.load().await?;

    // Navigate to detail with the product as a parameter.
    let product = home.view().visible[0].clone();
    let mut detail = DetailSession::new(store.clone(), product);
    detail.focus().await;
    assert!(detail.toggle_favorite().await);

    home.focus(None).await;
    assert!(home.is_favorite(&ProductId::new("p1")));
    Ok(())
}

#[tokio::test]
async fn favorites_screen_with_empty_set_never_fetches() -> anyhow::Result<()> {
    let repository = Arc::new(StaticRepository::new(sample_catalog()));
    let store = Arc::new(MemoryStore::new());

    let mut favorites = FavoritesSession::new(repository.clone(), store.clone());
    favorites.focus().await;
    favorites.load().await?;

    assert!(favorites.view().is_empty());
    assert_eq!(repository.fetch_count(), 0);
    Ok(())
}

#[tokio::test]
async fn feedback_screen_filters_the_navigated_product() -> anyhow::Result<()> {
    let repository = Arc::new(StaticRepository::new(sample_catalog()));
    let store = Arc::new(MemoryStore::new());

    let mut home = CatalogSession::new(repository, store);
    home.focus(None).await;
    home.load().await?;

    let product = home.view().visible[0].clone();
    let mut feedback = FeedbackSession::new(&product);
    assert_eq!(feedback.reviews().len(), 2);

    feedback.select_star(3);
    let visible = feedback.reviews();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].username.as_deref(), Some("ana"));
    Ok(())
}

#[tokio::test]
async fn corrupt_store_degrades_to_no_favorites() -> anyhow::Result<()> {
    let repository = Arc::new(StaticRepository::new(sample_catalog()));
    let store = Arc::new(MemoryStore::new());
    store.put_raw(easel_store::FAVORITES_KEY, &b"definitely not json"[..]);

    let mut home = CatalogSession::new(repository, store);
    home.focus(None).await;
    assert!(home.favorites().is_empty());

    // The screen still works; toggling starts a fresh set.
    home.load().await?;
    home.toggle_favorite(ProductId::new("p1")).await;
    assert!(home.is_favorite(&ProductId::new("p1")));
    Ok(())
}
