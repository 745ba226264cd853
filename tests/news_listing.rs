// tests/news_listing.rs
use chrono::Duration;
use newsroom_core::application::queries::articles::ListArticlesQuery;

mod support;
use support::{ArticleBuilder, TestApp, category};

fn titles(page: &newsroom_core::application::dto::ArticlePage) -> Vec<&str> {
    page.news_list.iter().map(|a| a.title.as_str()).collect()
}

#[tokio::test]
async fn drafts_and_scheduled_articles_never_list() {
    let app = TestApp::new();
    let politics = category("Politics", "politics");
    let cat = politics.id;
    app.store.seed_category(politics);
    app.store.seed_article(ArticleBuilder::new(cat).title("Visible").build());
    app.store
        .seed_article(ArticleBuilder::new(cat).title("Draft").draft().build());
    app.store.seed_article(
        ArticleBuilder::new(cat)
            .title("Tomorrow")
            .published_in(Duration::days(1))
            .build(),
    );

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery::default())
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Visible"]);
    assert_eq!(page.total, 1);
}

#[tokio::test]
async fn search_matches_title_substring_case_insensitively() {
    let app = TestApp::new();
    let politics = category("Politics", "politics");
    let cat = politics.id;
    app.store.seed_category(politics);
    app.store
        .seed_article(ArticleBuilder::new(cat).title("Election Results").build());
    app.store
        .seed_article(ArticleBuilder::new(cat).title("Weather Today").build());

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            search: Some("elect".into()),
            ..ListArticlesQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Election Results"]);
}

#[tokio::test]
async fn unknown_category_yields_an_empty_page() {
    let app = TestApp::new();
    let sports = category("Sports", "sports");
    let cat = sports.id;
    app.store.seed_category(sports);
    app.store.seed_article(ArticleBuilder::new(cat).build());

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            category: Some("no-such-category".into()),
            ..ListArticlesQuery::default()
        })
        .await
        .unwrap();

    assert!(page.news_list.is_empty());
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn category_filter_and_pagination_report_the_full_total() {
    let app = TestApp::new();
    let sports = category("Sports", "sports");
    let culture = category("Culture", "culture");
    let (sports_id, culture_id) = (sports.id, culture.id);
    app.store.seed_category(sports);
    app.store.seed_category(culture);
    for hour in 1..=5 {
        app.store.seed_article(
            ArticleBuilder::new(sports_id)
                .title(format!("Match {hour}"))
                .published_in(Duration::hours(-hour))
                .build(),
        );
    }
    app.store
        .seed_article(ArticleBuilder::new(culture_id).title("Concert").build());

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            category: Some("sports".into()),
            page: Some(2),
            limit: Some(2),
            ..ListArticlesQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Match 3", "Match 4"]);
    assert_eq!(page.total, 5);
    assert!(page
        .news_list
        .iter()
        .all(|a| a.category_slug.as_deref() == Some("sports")));
}

#[tokio::test]
async fn popular_sort_orders_by_views() {
    let app = TestApp::new();
    let c = category("World", "world");
    let cat = c.id;
    app.store.seed_category(c);
    app.store
        .seed_article(ArticleBuilder::new(cat).title("Quiet").views(3).build());
    app.store
        .seed_article(ArticleBuilder::new(cat).title("Viral").views(900).build());
    app.store
        .seed_article(ArticleBuilder::new(cat).title("Steady").views(40).build());

    let page = app
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            sort: Some("popular".into()),
            ..ListArticlesQuery::default()
        })
        .await
        .unwrap();

    assert_eq!(titles(&page), vec!["Viral", "Steady", "Quiet"]);
}
