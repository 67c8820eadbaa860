//! End-to-end sync runs against a real SQLite store, snapshot files on
//! disk and a mocked catalog service.

use std::path::Path;

use rebrick_core::traits::CatalogStore;
use rebrick_core::{CatalogUrl, EntityKind, NaturalKey, UpdateOutcome};
use rebrick_file::FileSnapshotStore;
use rebrick_http::HttpCatalog;
use rebrick_sqlite::SqliteStore;
use rebrick_sync::{CollectionSource, SyncCoordinator};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Fixture {
    _dir: TempDir,
    snapshots: FileSnapshotStore,
    store: SqliteStore,
}

impl Fixture {
    async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let snapshots = FileSnapshotStore::new(dir.path().join("rebrickData"));
        std::fs::create_dir_all(snapshots.root()).unwrap();
        let store = SqliteStore::open(dir.path().join("catalog.db")).await.unwrap();
        store.migrate().await.unwrap();
        Self {
            _dir: dir,
            snapshots,
            store,
        }
    }

    fn write_snapshot(&self, kind: EntityKind, body: &str) {
        write(&self.snapshots.snapshot_path(kind), body);
    }

    async fn exec(&self, sql: &str) {
        sqlx::query(sql).execute(self.store.pool()).await.unwrap();
    }

    fn coordinator(
        &self,
        server: &MockServer,
    ) -> SyncCoordinator<FileSnapshotStore, HttpCatalog, SqliteStore> {
        SyncCoordinator::new(
            FileSnapshotStore::new(self.snapshots.root()),
            catalog(server),
            self.store.clone(),
        )
    }
}

fn write(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
}

fn catalog(server: &MockServer) -> HttpCatalog {
    let base = CatalogUrl::new(format!("{}/rebrickapi", server.uri())).unwrap();
    HttpCatalog::new(base).unwrap()
}

fn key(s: &str) -> NaturalKey {
    NaturalKey::new(s).unwrap()
}

#[tokio::test]
async fn test_empty_snapshot_falls_back_to_remote() {
    let fixture = Fixture::new().await;
    fixture.write_snapshot(EntityKind::Color, "[]");
    fixture
        .exec("INSERT INTO colors (id, name, num_owned) VALUES (1, 'Red', 4)")
        .await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rebrickapi/getallcolorsfromrebrickable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "name": "Red",
                "rgb": "C91A09",
                "is_trans": false,
                "external_ids": {
                    "BrickLink": { "ext_ids": [5] },
                    "BrickOwl": { "ext_ids": [38] },
                    "LEGO": { "ext_ids": [21] }
                }
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = fixture
        .coordinator(&server)
        .run(EntityKind::Color)
        .await
        .unwrap();

    assert_eq!(report.source, CollectionSource::Remote);
    assert_eq!(report.collection.len(), 1);
    assert_eq!(report.summary().updated, 1);

    let row = fixture
        .store
        .fetch_one(EntityKind::Color.descriptor(), &key("1"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get("rgb"), Some(&json!("C91A09")));
    assert_eq!(row.get("is_trans"), Some(&json!(0)));
    assert_eq!(row.get("bricklink_id"), Some(&json!(5)));
    assert_eq!(row.get("num_owned"), Some(&json!(4)));
}

#[tokio::test]
async fn test_populated_snapshot_never_calls_remote() {
    let fixture = Fixture::new().await;
    fixture.write_snapshot(
        EntityKind::Set,
        r#"[{"set_num": "7140-1", "name": "X-wing Fighter", "set_url": "https://rebrickable.com/sets/7140-1/"}]"#,
    );
    fixture
        .exec("INSERT INTO sets (set_num, name) VALUES ('7140-1', 'X-wing Fighter')")
        .await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let report = fixture
        .coordinator(&server)
        .run(EntityKind::Set)
        .await
        .unwrap();

    assert_eq!(report.source, CollectionSource::Snapshot);
    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.outcomes[0].outcome, UpdateOutcome::Updated);
}

#[tokio::test]
async fn test_remote_failure_leaves_store_untouched() {
    let fixture = Fixture::new().await;
    fixture
        .exec("INSERT INTO part_categories (id, name, part_count) VALUES (11, 'Bricks', 3)")
        .await;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rebrickapi/getallpartcategories"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = fixture
        .coordinator(&server)
        .run(EntityKind::PartCategory)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("502"));

    let row = fixture
        .store
        .fetch_one(EntityKind::PartCategory.descriptor(), &key("11"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get("part_count"), Some(&json!(3)));
}

#[tokio::test]
async fn test_rows_missing_locally_are_reported_not_inserted() {
    let fixture = Fixture::new().await;
    fixture.write_snapshot(
        EntityKind::Part,
        r#"[
            {"part_num": "3001", "name": "Brick 2 x 4", "part_url": "https://rebrickable.com/parts/3001/"},
            {"part_num": "3002", "name": "Brick 2 x 3"},
            {"name": "No key"}
        ]"#,
    );
    fixture
        .exec("INSERT INTO parts (part_num, name) VALUES ('3001', 'Brick 2 x 4')")
        .await;

    let server = MockServer::start().await;

    let report = fixture
        .coordinator(&server)
        .run(EntityKind::Part)
        .await
        .unwrap();

    let summary = report.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.not_found, 1);
    assert_eq!(summary.malformed, 1);
    assert!(report.ensure_complete().is_err());

    let all = fixture
        .store
        .fetch_all(EntityKind::Part.descriptor())
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_repeated_runs_are_idempotent() {
    let fixture = Fixture::new().await;
    fixture.write_snapshot(
        EntityKind::Minifig,
        r#"[{"set_num": "fig-000001", "name": "Toy Story Minifig", "set_url": "https://rebrickable.com/minifigs/fig-000001/", "last_modified_dt": "2020-01-01T00:00:00Z"}]"#,
    );
    fixture
        .exec("INSERT INTO minifigs (fig_num, name, num_owned) VALUES ('fig-000001', 'Toy Story Minifig', 1)")
        .await;

    let server = MockServer::start().await;
    let coordinator = fixture.coordinator(&server);

    coordinator.run(EntityKind::Minifig).await.unwrap();
    let first = fixture
        .store
        .fetch_all(EntityKind::Minifig.descriptor())
        .await
        .unwrap();

    coordinator.run(EntityKind::Minifig).await.unwrap();
    let second = fixture
        .store
        .fetch_all(EntityKind::Minifig.descriptor())
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        second.records()[0].get("fig_url"),
        Some(&json!("https://rebrickable.com/minifigs/fig-000001/"))
    );
}

#[tokio::test]
async fn test_large_collection_with_bounded_fan_out() {
    let fixture = Fixture::new().await;

    let records: Vec<_> = (0..200)
        .map(|id| json!({ "id": id, "name": format!("Category {}", id), "part_count": id * 2 }))
        .collect();
    fixture.write_snapshot(
        EntityKind::PartCategory,
        &serde_json::to_string(&records).unwrap(),
    );
    for id in 0..200 {
        sqlx::query("INSERT INTO part_categories (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(format!("Category {}", id))
            .execute(fixture.store.pool())
            .await
            .unwrap();
    }

    let server = MockServer::start().await;
    let report = fixture
        .coordinator(&server)
        .run(EntityKind::PartCategory)
        .await
        .unwrap()
        .ensure_complete()
        .unwrap();

    assert_eq!(report.summary().updated, 200);

    let row = fixture
        .store
        .fetch_one(EntityKind::PartCategory.descriptor(), &key("150"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.get("part_count"), Some(&json!(300)));
}
