//! File-backed store lifecycle tests.
//!
//! - Schema init on a fresh file, reopen keeps data
//! - Ids stay unique and increasing across reopen
//! - Seeding flag survives reopen

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use pravo_core::entities::NewIncident;
use pravo_core::geo::Coordinates;
use pravo_db::PravoDb;

fn db_path(dir: &TempDir) -> String {
    dir.path().join("incidents.db").to_string_lossy().into_owned()
}

#[tokio::test]
async fn theft_scenario_on_fresh_store() {
    let dir = TempDir::new().unwrap();
    let db = PravoDb::open_local(&db_path(&dir)).await.unwrap();

    let draft = NewIncident::new("Крадіжка", "Викрадення гаманця")
        .with_coordinates(Coordinates::new(49.8397, 24.0297).unwrap());
    let id = db.insert_incident(&draft).await.unwrap();

    let incidents = db.list_incidents().await.unwrap();
    assert_eq!(id, 1);
    assert_eq!(incidents, vec![draft.into_incident(1)]);
}

#[tokio::test]
async fn reopen_keeps_rows_and_continues_ids() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    {
        let db = PravoDb::open_local(&path).await.unwrap();
        db.insert_incident(&NewIncident::new("перший", "a"))
            .await
            .unwrap();
        db.insert_incident(&NewIncident::new("другий", "b"))
            .await
            .unwrap();
    }

    let db = PravoDb::open_local(&path).await.unwrap();
    assert_eq!(db.count_incidents().await.unwrap(), 2);

    let id = db
        .insert_incident(&NewIncident::new("третій", "c"))
        .await
        .unwrap();
    assert_eq!(id, 3);

    let ids: Vec<i64> = db
        .list_incidents()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[tokio::test]
async fn ids_not_reused_after_manual_delete() {
    let dir = TempDir::new().unwrap();
    let db = PravoDb::open_local(&db_path(&dir)).await.unwrap();

    let first = db
        .insert_incident(&NewIncident::new("a", "b"))
        .await
        .unwrap();
    db.conn()
        .execute("DELETE FROM incidents WHERE id = ?1", [first])
        .await
        .unwrap();

    let second = db
        .insert_incident(&NewIncident::new("c", "d"))
        .await
        .unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn seeding_flag_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = db_path(&dir);

    let first_count = {
        let db = PravoDb::open_local(&path).await.unwrap();
        db.seed_examples().await.unwrap();
        db.count_incidents().await.unwrap()
    };

    let db = PravoDb::open_local(&path).await.unwrap();
    assert_eq!(db.seed_examples().await.unwrap(), 0);
    assert_eq!(db.count_incidents().await.unwrap(), first_count);
}
