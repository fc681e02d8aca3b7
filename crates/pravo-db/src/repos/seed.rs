//! Example incidents for demos and first runs.
//!
//! Seeding is guarded by the `examples_seeded` row in `store_meta`, so it can
//! be invoked on every start without piling up duplicate rows.

use pravo_core::entities::NewIncident;
use pravo_core::geo::Coordinates;

use crate::PravoDb;
use crate::error::DatabaseError;

const SEEDED_KEY: &str = "examples_seeded";

/// The fixed illustrative set.
#[must_use]
pub fn example_incidents() -> Vec<NewIncident> {
    let at = |lat, lon| Coordinates {
        latitude: lat,
        longitude: lon,
    };
    vec![
        NewIncident::new("Крадіжка", "Викрадення гаманця в громадському транспорті")
            .with_coordinates(at(49.8397, 24.0297)),
        NewIncident::new("Вандалізм", "Пошкодження лавок у парку")
            .with_coordinates(at(49.8419, 24.0315)),
        NewIncident::new("Порушення ПДР", "Проїзд на червоне світло")
            .with_coordinates(at(50.4501, 30.5234)),
        NewIncident::new("Незаконне паркування", "Автомобіль на тротуарі біля школи"),
    ]
}

impl PravoDb {
    /// Whether the example set has already been written to this store.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on read failure.
    pub async fn examples_seeded(&self) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT 1 FROM store_meta WHERE key = ?1", [SEEDED_KEY])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Insert the example incidents once. Returns how many rows were written
    /// (0 when the store was already seeded).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails; nothing is written then.
    pub async fn seed_examples(&self) -> Result<u32, DatabaseError> {
        if self.examples_seeded().await? {
            tracing::debug!("examples already seeded; skipping");
            return Ok(0);
        }

        let examples = example_incidents();
        let tx = self.conn().transaction().await?;
        let written = async {
            for incident in &examples {
                tx.execute(
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
            }
            tx.execute(
                "INSERT INTO store_meta (key, value) VALUES (?1, '1')",
                [SEEDED_KEY],
            )
            .await?;
            Ok::<(), DatabaseError>(())
        }
        .await;

        if let Err(error) = written {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(%rollback, "failed to roll back example seeding");
            }
            return Err(error);
        }
        tx.commit().await?;

        let inserted = u32::try_from(examples.len())
            .map_err(|e| DatabaseError::Other(anyhow::anyhow!(e)))?;
        tracing::debug!(inserted, "example incidents seeded");
        Ok(inserted)
    }
}
