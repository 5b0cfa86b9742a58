//! Integration tests for the paged movie listing pipeline.
//!
//! Runs against the seeded default catalog (20 movies) and checks the
//! filter -> count -> sort -> window ordering, clamping behaviour, and
//! paging determinism.

use cinedex_core::catalog::{MovieSortKey, PageQuery};
use cinedex_core::types::DbId;
use cinedex_db::models::movie::MovieQuery;
use cinedex_db::repositories::{ActorRepo, DirectorRepo, MovieRepo};
use cinedex_db::seed;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn query(search: Option<&str>, sort: MovieSortKey, page_number: i64, page_size: i64) -> MovieQuery {
    MovieQuery {
        search: search.map(str::to_string),
        sort,
        page: PageQuery::clamped(Some(page_number), Some(page_size)),
    }
}

async fn seeded(pool: &PgPool) {
    let inserted = seed::seed_if_empty(pool).await.unwrap();
    assert!(inserted, "fresh database should seed");
}

// ---------------------------------------------------------------------------
// Test: Seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_if_empty_runs_once(pool: PgPool) {
    assert!(seed::seed_if_empty(&pool).await.unwrap());
    assert!(
        !seed::seed_if_empty(&pool).await.unwrap(),
        "second run should be a no-op"
    );

    let page = MovieRepo::page(&pool, &query(None, MovieSortKey::Title, 1, 50))
        .await
        .unwrap();
    assert_eq!(page.total_records, 20);
}

// ---------------------------------------------------------------------------
// Test: Page shape over the seeded catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_first_page_sorted_by_title(pool: PgPool) {
    seeded(&pool).await;

    let page = MovieRepo::page(&pool, &query(None, MovieSortKey::Title, 1, 10))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 10);
    assert_eq!(page.total_records, 20);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.data[0].title, "Dune: Part Two");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pages_cover_every_record_once(pool: PgPool) {
    seeded(&pool).await;

    let mut seen: Vec<DbId> = Vec::new();
    for page_number in 1..=2 {
        let page = MovieRepo::page(&pool, &query(None, MovieSortKey::Title, page_number, 10))
            .await
            .unwrap();
        assert_eq!(page.data.len(), 10);
        seen.extend(page.data.iter().map(|m| m.id));
    }

    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), 20, "pages must partition the result set");

    // One past the last page: empty data, totals still populated.
    let beyond = MovieRepo::page(&pool, &query(None, MovieSortKey::Title, 3, 10))
        .await
        .unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total_records, 20);
    assert_eq!(beyond.total_pages, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clamped_window_returns_everything(pool: PgPool) {
    seeded(&pool).await;

    // Page 0 and an oversized page size clamp to page 1 of at most 50.
    let page = MovieRepo::page(&pool, &query(None, MovieSortKey::Title, 0, 500))
        .await
        .unwrap();
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 50);
    assert_eq!(page.data.len(), 20);
    assert_eq!(page.total_pages, 1);
}

// ---------------------------------------------------------------------------
// Test: Search semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive(pool: PgPool) {
    seeded(&pool).await;

    let lower = MovieRepo::page(&pool, &query(Some("matrix"), MovieSortKey::Title, 1, 10))
        .await
        .unwrap();
    let upper = MovieRepo::page(&pool, &query(Some("MATRIX"), MovieSortKey::Title, 1, 10))
        .await
        .unwrap();

    assert_eq!(lower.total_records, 1);
    assert_eq!(upper.total_records, 1);
    assert_eq!(lower.data[0].id, upper.data[0].id);
    assert_eq!(lower.data[0].title, "The Matrix");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_counts_the_filtered_set(pool: PgPool) {
    seeded(&pool).await;

    let page = MovieRepo::page(&pool, &query(Some("dune"), MovieSortKey::Title, 1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_records, 1);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.data.len(), 1);

    // Beyond the last page of a filtered set: empty data, totals kept.
    let beyond = MovieRepo::page(&pool, &query(Some("dune"), MovieSortKey::Title, 5, 10))
        .await
        .unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.total_records, 1);
    assert_eq!(beyond.total_pages, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_with_no_matches_yields_zero_pages(pool: PgPool) {
    seeded(&pool).await;

    let page = MovieRepo::page(
        &pool,
        &query(Some("no such movie"), MovieSortKey::Title, 1, 10),
    )
    .await
    .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total_records, 0);
    assert_eq!(page.total_pages, 0);
}

// ---------------------------------------------------------------------------
// Test: Sort semantics
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_sort_is_ascending(pool: PgPool) {
    seeded(&pool).await;

    let page = MovieRepo::page(&pool, &query(None, MovieSortKey::Rating, 1, 50))
        .await
        .unwrap();

    let ratings: Vec<f64> = page.data.iter().map(|m| m.rating).collect();
    let mut sorted = ratings.clone();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(ratings, sorted);
    assert_eq!(page.data.first().unwrap().rating, 7.8);
    assert_eq!(page.data.last().unwrap().rating, 9.3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_paging_is_deterministic_under_ties(pool: PgPool) {
    seeded(&pool).await;

    // Several seeded movies share a rating; the id tiebreak must keep
    // repeated identical requests identical.
    for page_number in 1..=4 {
        let q = query(None, MovieSortKey::Rating, page_number, 5);
        let first = MovieRepo::page(&pool, &q).await.unwrap();
        let second = MovieRepo::page(&pool, &q).await.unwrap();

        let first_ids: Vec<DbId> = first.data.iter().map(|m| m.id).collect();
        let second_ids: Vec<DbId> = second.data.iter().map(|m| m.id).collect();
        assert_eq!(first_ids, second_ids);
    }
}

// ---------------------------------------------------------------------------
// Test: Scoped listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_by_director(pool: PgPool) {
    seeded(&pool).await;

    let directors = DirectorRepo::list(&pool).await.unwrap();
    let nolan = directors
        .iter()
        .find(|d| d.last_name == "Nolan")
        .expect("seeded director");

    let page = MovieRepo::page_by_director(&pool, nolan.id, &query(None, MovieSortKey::Title, 1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_records, 4);

    let filtered = MovieRepo::page_by_director(
        &pool,
        nolan.id,
        &query(Some("inter"), MovieSortKey::Title, 1, 10),
    )
    .await
    .unwrap();
    assert_eq!(filtered.total_records, 1);
    assert_eq!(filtered.data[0].title, "Interstellar");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_page_by_actor(pool: PgPool) {
    seeded(&pool).await;

    let actors = ActorRepo::list(&pool).await.unwrap();
    let jackson = actors
        .iter()
        .find(|a| a.last_name == "Jackson")
        .expect("seeded actor");

    let page = MovieRepo::page_by_actor(&pool, jackson.id, &query(None, MovieSortKey::Title, 1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_records, 3);

    let unknown = MovieRepo::page_by_actor(&pool, 999_999, &query(None, MovieSortKey::Title, 1, 10))
        .await
        .unwrap();
    assert_eq!(unknown.total_records, 0);
    assert!(unknown.data.is_empty());
}
