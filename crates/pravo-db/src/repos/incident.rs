//! Incident repository: insert, list, get, count.

use pravo_core::entities::{Incident, NewIncident};

use crate::PravoDb;
use crate::error::DatabaseError;
use crate::helpers::{count_to_u64, get_opt_f64, get_text_or_empty};

fn row_to_incident(row: &libsql::Row) -> Result<Incident, DatabaseError> {
    Ok(Incident {
        id: row.get::<i64>(0)?,
        title: get_text_or_empty(row, 1)?,
        description: get_text_or_empty(row, 2)?,
        image_uri: row.get::<Option<String>>(3)?,
        latitude: get_opt_f64(row, 4)?,
        longitude: get_opt_f64(row, 5)?,
    })
}

impl PravoDb {
    /// Insert one incident and return its store-assigned id.
    ///
    /// The draft is stored as given; callers validate user input first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on constraint or I/O failure.
    pub async fn insert_incident(&self, incident: &NewIncident) -> Result<i64, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO incidents (title, description, image_uri, latitude, longitude)
             VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    incident.title.as_str(),
                    incident.description.as_str(),
                    incident.image_uri.as_deref(),
                    incident.latitude,
                    incident.longitude
                ],
            )
            .await?;

        let id = self.conn().last_insert_rowid();
        tracing::debug!(id, title = %incident.title, "incident inserted");
        Ok(id)
    }

    /// All incidents in insertion order. An empty store yields an empty vec.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on read failure.
    pub async fn list_incidents(&self) -> Result<Vec<Incident>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, title, description, image_uri, latitude, longitude
             FROM incidents ORDER BY id",
                (),
            )
            .await?;

        let mut incidents = Vec::new();
        while let Some(row) = rows.next().await? {
            incidents.push(row_to_incident(&row)?);
        }
        Ok(incidents)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no incident has this id.
    pub async fn get_incident(&self, id: i64) -> Result<Incident, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, title, description, image_uri, latitude, longitude
             FROM incidents WHERE id = ?1",
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_incident(&row)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` on read failure.
    pub async fn count_incidents(&self) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM incidents", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        count_to_u64(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pravo_core::geo::Coordinates;

    use super::*;
    use crate::test_support::helpers::test_db;

    fn theft() -> NewIncident {
        NewIncident::new("Крадіжка", "Викрадення гаманця")
            .with_coordinates(Coordinates::new(49.8397, 24.0297).unwrap())
    }

    #[tokio::test]
    async fn list_empty_store() {
        let db = test_db().await;
        let incidents = db.list_incidents().await.unwrap();
        assert!(incidents.is_empty());
    }

    #[tokio::test]
    async fn insert_then_list_on_fresh_store() {
        let db = test_db().await;
        let draft = theft();

        let id = db.insert_incident(&draft).await.unwrap();
        assert_eq!(id, 1);

        let incidents = db.list_incidents().await.unwrap();
        assert_eq!(incidents, vec![draft.into_incident(1)]);
    }

    #[tokio::test]
    async fn ids_strictly_increase() {
        let db = test_db().await;
        let mut last = 0;
        for i in 0..5 {
            let id = db
                .insert_incident(&NewIncident::new(format!("title {i}"), "desc"))
                .await
                .unwrap();
            assert!(id > last, "id {id} should be greater than {last}");
            last = id;
        }
        assert_eq!(db.count_incidents().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let db = test_db().await;
        for title in ["перший", "другий", "третій"] {
            db.insert_incident(&NewIncident::new(title, "desc"))
                .await
                .unwrap();
        }
        let titles: Vec<String> = db
            .list_incidents()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, ["перший", "другий", "третій"]);
    }

    #[tokio::test]
    async fn empty_image_uri_is_stored_verbatim() {
        let db = test_db().await;
        let draft = NewIncident::new("a", "b").with_image_uri("");

        let id = db.insert_incident(&draft).await.unwrap();

        let incidents = db.list_incidents().await.unwrap();
        assert_eq!(incidents, vec![draft.into_incident(id)]);
        assert_eq!(incidents[0].image_uri.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn missing_optionals_read_back_as_none() {
        let db = test_db().await;
        let id = db
            .insert_incident(&NewIncident::new("Шум", "Гучна музика вночі"))
            .await
            .unwrap();

        let incident = db.get_incident(id).await.unwrap();
        assert!(incident.image_uri.is_none());
        assert!(incident.latitude.is_none());
        assert!(incident.longitude.is_none());
        assert!(incident.coordinates().is_none());
    }

    #[tokio::test]
    async fn image_uri_roundtrips() {
        let db = test_db().await;
        let draft = NewIncident::new("Вандалізм", "Графіті на стіні")
            .with_image_uri("https://res.cloudinary.com/demo/image/upload/v1/wall.jpg");
        let id = db.insert_incident(&draft).await.unwrap();

        let incident = db.get_incident(id).await.unwrap();
        assert_eq!(incident.image_uri, draft.image_uri);
    }

    #[tokio::test]
    async fn store_accepts_unvalidated_draft() {
        let db = test_db().await;
        let id = db
            .insert_incident(&NewIncident::new("", ""))
            .await
            .unwrap();
        let incident = db.get_incident(id).await.unwrap();
        assert_eq!(incident.title, "");
    }

    #[tokio::test]
    async fn null_title_reads_as_empty() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO incidents (title) VALUES (NULL)", ())
            .await
            .unwrap();
        let incidents = db.list_incidents().await.unwrap();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].title, "");
        assert_eq!(incidents[0].description, "");
    }

    #[tokio::test]
    async fn get_missing_incident() {
        let db = test_db().await;
        let result = db.get_incident(42).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }
}
