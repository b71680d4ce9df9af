//! `SQLite` implementation of [`ServicioRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use catalogo_app::ports::ServicioRepository;
use catalogo_domain::error::CatalogoError;
use catalogo_domain::id::ServicioCodigo;
use catalogo_domain::servicio::{NewServicio, Servicio};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Servicio`].
struct Wrapper(Servicio);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Servicio> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Servicio {
            codigo: ServicioCodigo::new(row.try_get("codigo")?),
            nombre: row.try_get("nombre")?,
            descripcion: row.try_get("descripcion")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO servicios (nombre, descripcion) VALUES (?, ?)";
const SELECT_BY_CODIGO: &str = "SELECT * FROM servicios WHERE codigo = ?";
const SELECT_ALL: &str = "SELECT * FROM servicios ORDER BY codigo";

/// `SQLite`-backed servicio repository.
pub struct SqliteServicioRepository {
    pool: SqlitePool,
}

impl SqliteServicioRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServicioRepository for SqliteServicioRepository {
    fn create(
        &self,
        servicio: NewServicio,
    ) -> impl Future<Output = Result<Servicio, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&servicio.nombre)
                .bind(&servicio.descripcion)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(servicio.with_codigo(ServicioCodigo::new(result.last_insert_rowid())))
        }
    }

    fn get_by_codigo(
        &self,
        codigo: ServicioCodigo,
    ) -> impl Future<Output = Result<Option<Servicio>, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_CODIGO)
                .bind(codigo.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Servicio>, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteServicioRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteServicioRepository::new(db.pool().clone())
    }

    fn peluqueria() -> NewServicio {
        NewServicio::builder()
            .nombre("Peluquería")
            .descripcion("Cortes y peinados")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_servicio_when_valid() {
        let repo = setup().await;

        let created = repo.create(peluqueria()).await.unwrap();

        let fetched = repo.get_by_codigo(created.codigo).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.descripcion.as_deref(), Some("Cortes y peinados"));
    }

    #[tokio::test]
    async fn should_return_none_when_servicio_not_found() {
        let repo = setup().await;
        let result = repo.get_by_codigo(ServicioCodigo::new(1)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_servicios_in_codigo_order() {
        let repo = setup().await;
        let first = repo.create(peluqueria()).await.unwrap();
        let second = repo
            .create(NewServicio::builder().nombre("Estética").build().unwrap())
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        let codigos: Vec<_> = all.iter().map(|s| s.codigo).collect();
        assert_eq!(codigos, vec![first.codigo, second.codigo]);
        assert!(all[1].descripcion.is_none());
    }
}
