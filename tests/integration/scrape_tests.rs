use crate::site::{fail, home_page, listing_page, serve, serve_book, MockBook};
use shelf_scraper::config::Config;
use shelf_scraper::crawler::{build_http_client, CategoryPaginator, Coordinator};
use shelf_scraper::{Category, Rating};
use std::path::Path;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRAVEL_INDEX: &str = "/catalogue/category/books/travel_2/index.html";

/// Creates a test configuration pointing at the mock server
fn create_test_config(server: &MockServer, output: &Path, download_images: bool) -> Config {
    let mut config = Config::default();
    config.site.root_url = format!("{}/", server.uri());
    config.output.directory = output.to_path_buf();
    config.output.download_images = download_images;
    config
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).expect("CSV should exist");
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[tokio::test]
async fn test_lists_categories_without_all_books() {
    let server = MockServer::start().await;
    serve(
        &server,
        "/",
        home_page(&[("Travel", "travel_2"), ("Mystery", "mystery_3"), ("Poetry", "poetry_23")]),
        1,
    )
    .await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), true)).unwrap();
    let categories = coordinator.list_categories().await.unwrap();

    let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Travel", "Mystery", "Poetry"]);
    assert_eq!(
        categories[0].listing_url,
        format!("{}{}", server.uri(), TRAVEL_INDEX)
    );
}

#[tokio::test]
async fn test_root_failure_yields_empty_run() {
    let server = MockServer::start().await;
    fail(&server, "/", 500).await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), true)).unwrap();

    assert!(coordinator.list_categories().await.unwrap().is_empty());

    let summary = coordinator.run().await.unwrap();
    assert_eq!(summary.total_books(), 0);
    assert!(summary.categories.is_empty());
    assert!(summary.finished_at.is_some());
}

#[tokio::test]
async fn test_end_to_end_complete_and_missing_rating() {
    let server = MockServer::start().await;

    let book_a = MockBook::complete("Book A: The First", "book-a_1", "Three");
    let book_b = MockBook {
        title: "Book B",
        slug: "book-b_2",
        price: "£12.00",
        rating: None,
        cover: Some("cover.jpg"),
    };

    serve(&server, "/", home_page(&[("Travel", "travel_2")]), 1).await;
    serve(&server, TRAVEL_INDEX, listing_page(&[&book_a, &book_b], None), 1).await;
    serve_book(&server, &book_a, "Travel", 1).await;
    // B has no detail, so its cover is never requested
    serve_book(&server, &book_b, "Travel", 0).await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), true)).unwrap();
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.total_books(), 2);
    assert_eq!(summary.total_details_absent(), 1);
    assert_eq!(summary.total_images_saved(), 1);
    assert_eq!(
        summary.records[0].detail.as_ref().map(|d| d.review_rating),
        Some(Rating::Three)
    );
    assert!(summary.records[1].detail.is_none());

    let report = &summary.categories[0];
    assert_eq!(report.pages_visited, 1);
    assert_eq!(report.books, 2);

    let csv_path = output.path().join("Travel").join("Travel.csv");
    assert_eq!(report.csv_path.as_deref(), Some(csv_path.as_path()));

    let (headers, rows) = read_csv(&csv_path);
    assert_eq!(
        headers,
        [
            "titre",
            "prix",
            "Dispo",
            "upc",
            "price_incl_tax",
            "price_excl_tax",
            "availability",
            "description",
            "category",
            "review_rating",
            "image_url"
        ]
    );
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0][0], "Book A: The First");
    assert_eq!(rows[0][1], "£51.77");
    assert_eq!(rows[0][2], "In stock");
    assert_eq!(rows[0][3], "upc-book-a_1");
    assert_eq!(rows[0][6], "7 ");
    assert_eq!(rows[0][7], "Description of Book A: The First.");
    assert_eq!(rows[0][8], "Travel");
    assert_eq!(rows[0][9], "3");
    assert_eq!(
        rows[0][10],
        format!("{}/media/cache/book-a_1/cover.jpg", server.uri())
    );

    assert_eq!(&rows[1][..3], ["Book B", "£12.00", "In stock"]);
    assert!(rows[1][3..].iter().all(|field| field.is_empty()));

    let image = output
        .path()
        .join("Travel")
        .join("book_images")
        .join("book_a__the_first.jpg");
    assert_eq!(std::fs::read(image).unwrap(), b"book-a_1");
}

#[tokio::test]
async fn test_pagination_visits_every_page_once() {
    let server = MockServer::start().await;

    let books = [
        MockBook::complete("Page One Book", "one_1", "One"),
        MockBook::complete("Page Two Book", "two_2", "Two"),
        MockBook::complete("Page Three Book", "three_3", "Five"),
    ];

    serve(&server, TRAVEL_INDEX, listing_page(&[&books[0]], Some("page-2.html")), 1).await;
    serve(
        &server,
        "/catalogue/category/books/travel_2/page-2.html",
        listing_page(&[&books[1]], Some("page-3.html")),
        1,
    )
    .await;
    serve(
        &server,
        "/catalogue/category/books/travel_2/page-3.html",
        listing_page(&[&books[2]], None),
        1,
    )
    .await;
    for book in &books {
        serve_book(&server, book, "Travel", 0).await;
    }

    let output = TempDir::new().unwrap();
    let root = Url::parse(&format!("{}/", server.uri())).unwrap();
    let client = build_http_client().unwrap();
    let paginator = CategoryPaginator::new(&client, &root, output.path(), false);
    let category = Category {
        name: "Travel".to_string(),
        listing_url: format!("{}{}", server.uri(), TRAVEL_INDEX),
    };

    let result = paginator.scrape(&category).await.unwrap();

    assert_eq!(result.report.pages_visited, 3);
    let titles: Vec<_> = result.records.iter().map(|r| r.title()).collect();
    assert_eq!(titles, ["Page One Book", "Page Two Book", "Page Three Book"]);
    assert!(result.records.iter().all(|r| r.detail.is_some()));
}

#[tokio::test]
async fn test_listing_failure_keeps_collected_books() {
    let server = MockServer::start().await;

    let book = MockBook::complete("Survivor", "survivor_1", "Four");
    serve(&server, TRAVEL_INDEX, listing_page(&[&book], Some("page-2.html")), 1).await;
    fail(&server, "/catalogue/category/books/travel_2/page-2.html", 500).await;
    serve_book(&server, &book, "Travel", 1).await;

    let output = TempDir::new().unwrap();
    let root = Url::parse(&format!("{}/", server.uri())).unwrap();
    let client = build_http_client().unwrap();
    let paginator = CategoryPaginator::new(&client, &root, output.path(), true);
    let category = Category {
        name: "Travel".to_string(),
        listing_url: format!("{}{}", server.uri(), TRAVEL_INDEX),
    };

    let result = paginator.scrape(&category).await.unwrap();

    assert_eq!(result.report.pages_visited, 1);
    assert_eq!(result.records.len(), 1);

    let (_, rows) = read_csv(&output.path().join("Travel").join("Travel.csv"));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "Survivor");
}

#[tokio::test]
async fn test_failed_category_does_not_stop_next() {
    let server = MockServer::start().await;

    let book = MockBook::complete("Gone Girl", "gone-girl_7", "Five");
    serve(
        &server,
        "/",
        home_page(&[("Travel", "travel_2"), ("Mystery", "mystery_3")]),
        1,
    )
    .await;
    fail(&server, TRAVEL_INDEX, 404).await;
    serve(
        &server,
        "/catalogue/category/books/mystery_3/index.html",
        listing_page(&[&book], None),
        1,
    )
    .await;
    serve_book(&server, &book, "Mystery", 1).await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), true)).unwrap();
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.categories.len(), 2);
    assert_eq!(summary.categories[0].pages_visited, 0);
    assert_eq!(summary.categories[0].books, 0);
    assert_eq!(summary.categories[1].books, 1);
    assert_eq!(summary.total_books(), 1);

    // The failed category still gets a header-only CSV
    let (_, rows) = read_csv(&output.path().join("Travel").join("Travel.csv"));
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_cover_failure_keeps_record() {
    let server = MockServer::start().await;

    let book = MockBook {
        title: "Broken Cover",
        slug: "broken-cover_9",
        price: "£20.00",
        rating: Some("Two"),
        cover: None,
    };
    serve(&server, "/", home_page(&[("Travel", "travel_2")]), 1).await;
    serve(&server, TRAVEL_INDEX, listing_page(&[&book], None), 1).await;
    // A detail page whose thumbnail points at a missing image
    let detail = crate::site::detail_page(&book, "Travel").replace(
        "<div class=\"product_main\">",
        "<div class=\"thumbnail\"><img src=\"../../media/missing.jpg\"></div><div class=\"product_main\">",
    );
    serve(&server, &book.detail_path(), detail, 1).await;
    fail(&server, "/media/missing.jpg", 404).await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), true)).unwrap();
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.total_books(), 1);
    assert_eq!(summary.total_images_failed(), 1);
    assert!(summary.records[0].detail.is_some());
}

#[tokio::test]
async fn test_images_can_be_disabled() {
    let server = MockServer::start().await;

    let book = MockBook::complete("No Cover Please", "no-cover_4", "Three");
    serve(&server, "/", home_page(&[("Poetry", "poetry_23")]), 1).await;
    serve(
        &server,
        "/catalogue/category/books/poetry_23/index.html",
        listing_page(&[&book], None),
        1,
    )
    .await;
    serve_book(&server, &book, "Poetry", 0).await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), false)).unwrap();
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.total_images_saved(), 0);
    assert!(!output.path().join("Poetry").join("book_images").exists());

    let (_, rows) = read_csv(&output.path().join("Poetry").join("Poetry.csv"));
    assert_eq!(
        rows[0][10],
        format!("{}/media/cache/no-cover_4/cover.jpg", server.uri())
    );
}

#[tokio::test]
async fn test_category_selection() {
    let server = MockServer::start().await;

    let book = MockBook::complete("Only Poetry", "only-poetry_5", "One");
    serve(
        &server,
        "/",
        home_page(&[("Travel", "travel_2"), ("Poetry", "poetry_23")]),
        1,
    )
    .await;
    serve(
        &server,
        "/catalogue/category/books/poetry_23/index.html",
        listing_page(&[&book], None),
        1,
    )
    .await;
    serve_book(&server, &book, "Poetry", 0).await;
    Mock::given(method("GET"))
        .and(path_regex("travel_2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output = TempDir::new().unwrap();
    let coordinator = Coordinator::new(create_test_config(&server, output.path(), false))
        .unwrap()
        .with_selection(vec!["poetry".to_string()]);
    let summary = coordinator.run().await.unwrap();

    assert_eq!(summary.categories.len(), 1);
    assert_eq!(summary.categories[0].name, "Poetry");
    assert!(!output.path().join("Travel").exists());
}
