use criterion::{black_box, criterion_group, criterion_main, Criterion};

use billing_sql::{SQLStore, SqliteStore, Value};

const SCHEMA: &str = "CREATE TABLE users (
    user_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    total_amount REAL NOT NULL
)";

fn seeded_store(n: i64) -> SqliteStore {
    let store = SqliteStore::open_in_memory().unwrap();
    store.exec(SCHEMA, &[]).unwrap();
    for i in 0..n {
        store
            .exec(
                "INSERT INTO users (user_id, name, email, total_amount) VALUES (?1, ?2, ?3, ?4)",
                &[
                    Value::Text(format!("id-{}", i)),
                    Value::Text(format!("User {}", i)),
                    Value::Text(format!("user{}@example.com", i)),
                    Value::Real(i as f64 * 1.5),
                ],
            )
            .unwrap();
    }
    store
}

fn bench_insert_returning(c: &mut Criterion) {
    let store = seeded_store(0);
    let mut i = 0i64;

    c.bench_function("sqlite_insert_returning", |b| {
        b.iter(|| {
            let rows = store
                .query(
                    "INSERT INTO users (user_id, name, email, total_amount) \
                     VALUES (?1, ?2, ?3, ?4) RETURNING *",
                    &[
                        Value::Text(format!("bench-{}", i)),
                        Value::Text("Bench".to_string()),
                        Value::Text(format!("bench{}@example.com", i)),
                        Value::Real(42.5),
                    ],
                )
                .unwrap();
            assert_eq!(rows.len(), 1);
            i += 1;
        });
    });
}

fn bench_lookup_by_id(c: &mut Criterion) {
    let store = seeded_store(10000);

    let mut i = 0i64;
    c.bench_function("sqlite_lookup_by_id", |b| {
        b.iter(|| {
            let rows = store
                .query(
                    "SELECT * FROM users WHERE user_id = ?1",
                    &[Value::Text(format!("id-{}", black_box(i % 10000)))],
                )
                .unwrap();
            assert_eq!(rows.len(), 1);
            i += 1;
        });
    });
}

fn bench_name_search(c: &mut Criterion) {
    let store = seeded_store(10000);

    c.bench_function("sqlite_name_like_search", |b| {
        b.iter(|| {
            let rows = store
                .query(
                    "SELECT * FROM users WHERE name LIKE '%' || ?1 || '%' ESCAPE '\\' ORDER BY rowid",
                    &[Value::Text(black_box("user 99").to_string())],
                )
                .unwrap();
            assert!(!rows.is_empty());
        });
    });
}

criterion_group!(benches, bench_insert_returning, bench_lookup_by_id, bench_name_search);
criterion_main!(benches);
