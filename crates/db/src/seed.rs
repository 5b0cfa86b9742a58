//! One-time catalog bootstrap.
//!
//! Seeding is external to the query/consistency engine: it takes an
//! explicit list of seed records and writes them through one transaction.
//! [`seed_if_empty`] is the startup entry point; it is a no-op whenever the
//! movie table already has rows.

use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use cinedex_core::types::{DbId, Timestamp};
use sqlx::PgPool;

/// A person seed record (used for both actors and directors).
#[derive(Debug, Clone)]
pub struct SeedPerson {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub date_of_birth: Timestamp,
}

/// A movie seed record. Related records are referenced by category name
/// and person last name, which must be unique within the seed list.
#[derive(Debug, Clone)]
pub struct SeedMovie {
    pub title: &'static str,
    pub release_date: Timestamp,
    pub rating: f64,
    pub categories: &'static [&'static str],
    pub director: Option<&'static str>,
    pub actors: &'static [&'static str],
}

/// The full set of records a bootstrap run inserts.
#[derive(Debug, Clone)]
pub struct CatalogSeed {
    pub categories: Vec<&'static str>,
    pub directors: Vec<SeedPerson>,
    pub actors: Vec<SeedPerson>,
    pub movies: Vec<SeedMovie>,
}

/// Seed the default catalog when the movie table is empty.
///
/// Returns `true` if records were inserted.
pub async fn seed_if_empty(pool: &PgPool) -> Result<bool, sqlx::Error> {
    let movie_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;
    if movie_count > 0 {
        return Ok(false);
    }

    seed(pool, &default_catalog()).await?;
    Ok(true)
}

/// Insert the given seed records in one transaction.
pub async fn seed(pool: &PgPool, records: &CatalogSeed) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let mut category_ids: HashMap<&str, DbId> = HashMap::new();
    for &name in &records.categories {
        let id: DbId = sqlx::query_scalar("INSERT INTO categories (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        category_ids.insert(name, id);
    }

    let mut director_ids: HashMap<&str, DbId> = HashMap::new();
    for person in &records.directors {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO directors (first_name, last_name, date_of_birth)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(person.first_name)
        .bind(person.last_name)
        .bind(person.date_of_birth)
        .fetch_one(&mut *tx)
        .await?;
        director_ids.insert(person.last_name, id);
    }

    let mut actor_ids: HashMap<&str, DbId> = HashMap::new();
    for person in &records.actors {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO actors (first_name, last_name, date_of_birth)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(person.first_name)
        .bind(person.last_name)
        .bind(person.date_of_birth)
        .fetch_one(&mut *tx)
        .await?;
        actor_ids.insert(person.last_name, id);
    }

    for movie in &records.movies {
        let director_id = movie
            .director
            .map(|last_name| *director_ids.get(last_name).expect("unknown seed director"));

        let movie_id: DbId = sqlx::query_scalar(
            "INSERT INTO movies (title, release_date, rating, director_id)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(movie.title)
        .bind(movie.release_date)
        .bind(movie.rating)
        .bind(director_id)
        .fetch_one(&mut *tx)
        .await?;

        for &name in movie.categories {
            let category_id = *category_ids.get(name).expect("unknown seed category");
            sqlx::query("INSERT INTO movie_categories (movie_id, category_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(category_id)
                .execute(&mut *tx)
                .await?;
        }

        for &last_name in movie.actors {
            let actor_id = *actor_ids.get(last_name).expect("unknown seed actor");
            sqlx::query("INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(actor_id)
                .execute(&mut *tx)
                .await?;
        }
    }

    tx.commit().await?;

    tracing::info!(
        categories = records.categories.len(),
        directors = records.directors.len(),
        actors = records.actors.len(),
        movies = records.movies.len(),
        "Seeded catalog"
    );
    Ok(())
}

/// The default catalog: 8 categories, 15 directors, 23 actors, 20 movies.
pub fn default_catalog() -> CatalogSeed {
    CatalogSeed {
        categories: vec![
            "Drama",
            "Crime",
            "Action",
            "Fantasy",
            "Sci-Fi",
            "Animation",
            "Thriller",
            "Romance",
        ],
        directors: vec![
            person("Frank", "Darabont", 1959, 1, 28),
            person("Francis", "Ford Coppola", 1939, 4, 7),
            person("Christopher", "Nolan", 1970, 7, 30),
            person("Peter", "Jackson", 1961, 10, 31),
            person("Quentin", "Tarantino", 1963, 3, 27),
            person("Robert", "Zemeckis", 1951, 5, 14),
            person("David", "Fincher", 1962, 8, 28),
            person("Lana", "Wachowski", 1965, 6, 21),
            person("Denis", "Villeneuve", 1967, 10, 3),
            person("Ridley", "Scott", 1937, 11, 30),
            person("Steven", "Spielberg", 1946, 12, 18),
            person("James", "Cameron", 1954, 8, 16),
            person("Bong", "Joon-ho", 1969, 9, 14),
            person("Jon", "Watts", 1981, 6, 28),
            person("Joss", "Whedon", 1964, 6, 23),
        ],
        actors: vec![
            person("Morgan", "Freeman", 1937, 6, 1),
            person("Tim", "Robbins", 1958, 10, 16),
            person("Marlon", "Brando", 1924, 4, 3),
            person("Al", "Pacino", 1940, 4, 25),
            person("Christian", "Bale", 1974, 1, 30),
            person("Heath", "Ledger", 1979, 4, 4),
            person("Elijah", "Wood", 1981, 1, 28),
            person("Ian", "McKellen", 1939, 5, 25),
            person("John", "Travolta", 1954, 2, 18),
            person("Samuel L.", "Jackson", 1948, 12, 21),
            person("Tom", "Hanks", 1956, 7, 9),
            person("Leonardo", "DiCaprio", 1974, 11, 11),
            person("Brad", "Pitt", 1963, 12, 18),
            person("Keanu", "Reeves", 1964, 9, 2),
            person("Matthew", "McConaughey", 1969, 11, 4),
            person("Timothée", "Chalamet", 1995, 12, 27),
            person("Russell", "Crowe", 1964, 4, 7),
            person("Cillian", "Murphy", 1976, 5, 25),
            person("Song", "Kang-ho", 1967, 1, 17),
            person("Tom", "Holland", 1996, 6, 1),
            person("Robert", "Downey Jr.", 1965, 4, 4),
            person("Michelle", "Yeoh", 1962, 8, 6),
            person("Kate", "Winslet", 1975, 10, 5),
        ],
        movies: vec![
            SeedMovie {
                title: "The Shawshank Redemption",
                release_date: date(1994, 9, 23),
                rating: 9.3,
                categories: &["Drama"],
                director: Some("Darabont"),
                actors: &["Freeman", "Robbins"],
            },
            SeedMovie {
                title: "The Godfather",
                release_date: date(1972, 3, 24),
                rating: 9.2,
                categories: &["Crime", "Drama"],
                director: Some("Ford Coppola"),
                actors: &["Brando", "Pacino"],
            },
            SeedMovie {
                title: "The Dark Knight",
                release_date: date(2008, 7, 18),
                rating: 9.0,
                categories: &["Action", "Crime"],
                director: Some("Nolan"),
                actors: &["Bale", "Ledger", "Freeman", "Murphy"],
            },
            SeedMovie {
                title: "The Lord of the Rings: The Return of the King",
                release_date: date(2003, 12, 17),
                rating: 9.0,
                categories: &["Fantasy", "Action"],
                director: Some("Jackson"),
                actors: &["Wood", "McKellen"],
            },
            SeedMovie {
                title: "Pulp Fiction",
                release_date: date(1994, 10, 14),
                rating: 8.9,
                categories: &["Crime"],
                director: Some("Tarantino"),
                actors: &["Travolta", "Jackson"],
            },
            SeedMovie {
                title: "Forrest Gump",
                release_date: date(1994, 7, 6),
                rating: 8.8,
                categories: &["Drama", "Romance"],
                director: Some("Zemeckis"),
                actors: &["Hanks"],
            },
            SeedMovie {
                title: "Inception",
                release_date: date(2010, 7, 16),
                rating: 8.8,
                categories: &["Sci-Fi", "Action"],
                director: Some("Nolan"),
                actors: &["DiCaprio", "Murphy"],
            },
            SeedMovie {
                title: "Fight Club",
                release_date: date(1999, 10, 15),
                rating: 8.8,
                categories: &["Drama"],
                director: Some("Fincher"),
                actors: &["Pitt"],
            },
            SeedMovie {
                title: "The Matrix",
                release_date: date(1999, 3, 31),
                rating: 8.7,
                categories: &["Sci-Fi", "Action"],
                director: Some("Wachowski"),
                actors: &["Reeves"],
            },
            SeedMovie {
                title: "Interstellar",
                release_date: date(2014, 11, 7),
                rating: 8.7,
                categories: &["Sci-Fi", "Drama"],
                director: Some("Nolan"),
                actors: &["McConaughey"],
            },
            SeedMovie {
                title: "Dune: Part Two",
                release_date: date(2024, 3, 1),
                rating: 8.6,
                categories: &["Sci-Fi", "Action"],
                director: Some("Villeneuve"),
                actors: &["Chalamet"],
            },
            SeedMovie {
                title: "Gladiator",
                release_date: date(2000, 5, 5),
                rating: 8.5,
                categories: &["Action", "Drama"],
                director: Some("Scott"),
                actors: &["Crowe"],
            },
            // Animation, no live actors.
            SeedMovie {
                title: "The Lion King",
                release_date: date(1994, 6, 24),
                rating: 8.5,
                categories: &["Animation", "Drama"],
                director: None,
                actors: &[],
            },
            SeedMovie {
                title: "Oppenheimer",
                release_date: date(2023, 7, 21),
                rating: 8.5,
                categories: &["Drama"],
                director: Some("Nolan"),
                actors: &["Murphy", "Downey Jr."],
            },
            SeedMovie {
                title: "Parasite",
                release_date: date(2019, 5, 30),
                rating: 8.5,
                categories: &["Thriller", "Drama"],
                director: Some("Joon-ho"),
                actors: &["Kang-ho"],
            },
            SeedMovie {
                title: "Jurassic Park",
                release_date: date(1993, 6, 11),
                rating: 8.2,
                categories: &["Sci-Fi", "Action"],
                director: Some("Spielberg"),
                actors: &["Jackson"],
            },
            SeedMovie {
                title: "Spider-Man: No Way Home",
                release_date: date(2021, 12, 17),
                rating: 8.2,
                categories: &["Action", "Fantasy"],
                director: Some("Watts"),
                actors: &["Holland"],
            },
            SeedMovie {
                title: "The Avengers",
                release_date: date(2012, 5, 4),
                rating: 8.0,
                categories: &["Action", "Sci-Fi"],
                director: Some("Whedon"),
                actors: &["Downey Jr.", "Jackson"],
            },
            SeedMovie {
                title: "Titanic",
                release_date: date(1997, 12, 19),
                rating: 7.9,
                categories: &["Romance", "Drama"],
                director: Some("Cameron"),
                actors: &["DiCaprio", "Winslet"],
            },
            SeedMovie {
                title: "Everything Everywhere All at Once",
                release_date: date(2022, 3, 25),
                rating: 7.8,
                categories: &["Sci-Fi", "Action"],
                director: None,
                actors: &["Yeoh"],
            },
        ],
    }
}

fn person(
    first_name: &'static str,
    last_name: &'static str,
    year: i32,
    month: u32,
    day: u32,
) -> SeedPerson {
    SeedPerson {
        first_name,
        last_name,
        date_of_birth: date(year, month, day),
    }
}

fn date(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid seed date")
}
