//! Integration tests for the listing scraper
//!
//! These tests use wiremock to serve listing pages and exercise the full
//! URL → fetch → extract cycle end-to-end.

use blogtruyen_scraper::config::{Config, SiteConfig};
use blogtruyen_scraper::listing::scrape_page;
use blogtruyen_scraper::{PageRequest, ScrapeError, Scraper, SortOrder};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/ajax/Search/AjaxLoadListManga";

/// Creates a configuration pointing at the mock server
fn create_test_config(host: &str) -> Config {
    Config {
        site: SiteConfig {
            host: host.to_string(),
            ..SiteConfig::default()
        },
        ..Config::default()
    }
}

/// Renders a listing page shaped like the service's search results
fn listing_html(slugs: &[&str], last_page: Option<u32>) -> String {
    let rows: String = slugs
        .iter()
        .map(|slug| {
            format!(
                r#"<p><span class="tiptip fs-12 ellipsis"><a href="/manga/{0}">{0}</a></span><span>12</span></p>"#,
                slug
            )
        })
        .collect();

    let paging = match last_page {
        Some(n) => format!(
            r#"<div class="paging">
                <span class="page"><a href="javascript:LoadListMangaPage(1)">1</a></span>
                <span class="page"><a href="javascript:LoadListMangaPage({0})" title="Trang cuối">Cuối</a></span>
            </div>"#,
            n
        ),
        None => String::new(),
    };

    format!(
        r#"<html><body>
            <div class="list">
                <p class="uppercase"><span class="title">Tên truyện</span></p>
                {}
            </div>
            {}
        </body></html>"#,
        rows, paging
    )
}

async fn mount_page(server: &MockServer, order: u8, page: u32, body: String) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("key", "tatca"))
        .and(query_param("order", order.to_string().as_str()))
        .and(query_param("p", page.to_string().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_scrape_page_links_and_last_page() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();

    mount_page(
        &mock_server,
        SortOrder::Time.ordinal(),
        1,
        listing_html(&["a", "b", "c"], Some(7)),
    )
    .await;

    let config = create_test_config(&host);
    let page = scrape_page(&config, SortOrder::Time, 1)
        .await
        .expect("Scrape failed");

    assert_eq!(
        page.links,
        vec![
            format!("{}/manga/a", host),
            format!("{}/manga/b", host),
            format!("{}/manga/c", host),
        ]
    );
    assert_eq!(page.last_page, 7);
    assert_eq!(
        page.url,
        format!("{}{}?key=tatca&order=5&p=1", host, SEARCH_PATH)
    );
}

#[tokio::test]
async fn test_scrape_page_without_pagination() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        SortOrder::Name.ordinal(),
        1,
        listing_html(&["solo"], None),
    )
    .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let page = scraper
        .scrape_page(PageRequest::first(SortOrder::Name))
        .await
        .expect("Scrape failed");

    assert_eq!(page.links.len(), 1);
    assert_eq!(page.last_page, 0);
}

#[tokio::test]
async fn test_empty_listing_is_not_an_error() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        SortOrder::Default.ordinal(),
        3,
        "<html><body><div class=\"list\"></div></body></html>".to_string(),
    )
    .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let page = scraper
        .scrape_page(PageRequest::new(SortOrder::Default, 3).unwrap())
        .await
        .expect("Scrape failed");

    assert!(page.links.is_empty());
    assert_eq!(page.last_page, 0);
}

#[tokio::test]
async fn test_non_200_status_is_reported_with_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let expected_url = scraper.urls().listing_url(SortOrder::View, 2);

    let result = scraper
        .scrape_page(PageRequest::new(SortOrder::View, 2).unwrap())
        .await;

    match result {
        Err(ScrapeError::Status { url, status }) => {
            assert_eq!(status, 503);
            assert_eq!(url, expected_url);
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_other_success_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let result = scraper
        .scrape_page(PageRequest::first(SortOrder::Time))
        .await;

    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 204, .. })
    ));
}

#[tokio::test]
async fn test_stray_non_utf8_byte_still_yields_links() {
    let mock_server = MockServer::start().await;
    let host = mock_server.uri();

    // A Latin-1 'é' (0xE9) inside the header row title is not valid UTF-8
    let body: Vec<u8> = listing_html(&["a", "b"], Some(7))
        .replace("Tên truyện", "T?n")
        .into_bytes()
        .into_iter()
        .map(|b| if b == b'?' { 0xE9 } else { b })
        .collect();

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .mount(&mock_server)
        .await;

    let page = scrape_page(&create_test_config(&host), SortOrder::Time, 1)
        .await
        .expect("Scrape failed");

    assert_eq!(
        page.links,
        vec![format!("{}/manga/a", host), format!("{}/manga/b", host)]
    );
    assert_eq!(page.last_page, 7);
}

#[tokio::test]
async fn test_page_zero_is_rejected_before_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = scrape_page(&create_test_config(&mock_server.uri()), SortOrder::Time, 0).await;
    assert!(matches!(result, Err(ScrapeError::InvalidPage(0))));
}

#[tokio::test]
async fn test_scrape_listing_stops_at_last_page() {
    let mock_server = MockServer::start().await;
    let order = SortOrder::Chapter.ordinal();

    mount_page(&mock_server, order, 1, listing_html(&["a", "b"], Some(3))).await;
    mount_page(&mock_server, order, 2, listing_html(&["c", "d"], Some(3))).await;
    mount_page(&mock_server, order, 3, listing_html(&["e"], Some(3))).await;

    // Must never be requested
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("p", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&["z"], Some(3))))
        .expect(0)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let pages = scraper
        .scrape_listing(SortOrder::Chapter, None)
        .await
        .expect("Listing walk failed");

    let pages_seen: Vec<u32> = pages.iter().map(|p| p.request.page()).collect();
    assert_eq!(pages_seen, vec![1, 2, 3]);

    let total_links: usize = pages.iter().map(|p| p.links.len()).sum();
    assert_eq!(total_links, 5);
}

#[tokio::test]
async fn test_scrape_listing_stops_on_empty_page() {
    let mock_server = MockServer::start().await;
    let order = SortOrder::Time.ordinal();

    mount_page(&mock_server, order, 1, listing_html(&["a"], Some(10))).await;
    mount_page(&mock_server, order, 2, listing_html(&[], Some(10))).await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let pages = scraper
        .scrape_listing(SortOrder::Time, None)
        .await
        .expect("Listing walk failed");

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].last_page, 10);
}

#[tokio::test]
async fn test_scrape_listing_respects_max_pages() {
    let mock_server = MockServer::start().await;
    let order = SortOrder::View.ordinal();

    mount_page(&mock_server, order, 1, listing_html(&["a"], Some(50))).await;
    mount_page(&mock_server, order, 2, listing_html(&["b"], Some(50))).await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let pages = scraper
        .scrape_listing(SortOrder::View, Some(2))
        .await
        .expect("Listing walk failed");

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn test_scrape_listing_single_page_without_pagination() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        SortOrder::Comment.ordinal(),
        1,
        listing_html(&["a", "b"], None),
    )
    .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let pages = scraper
        .scrape_listing(SortOrder::Comment, None)
        .await
        .expect("Listing walk failed");

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].links.len(), 2);
}

#[tokio::test]
async fn test_scrape_listing_propagates_fetch_error() {
    let mock_server = MockServer::start().await;
    let order = SortOrder::Name.ordinal();

    mount_page(&mock_server, order, 1, listing_html(&["a"], Some(4))).await;

    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("p", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(&create_test_config(&mock_server.uri())).unwrap();
    let result = scraper.scrape_listing(SortOrder::Name, None).await;

    assert!(matches!(
        result,
        Err(ScrapeError::Status { status: 500, .. })
    ));
}
