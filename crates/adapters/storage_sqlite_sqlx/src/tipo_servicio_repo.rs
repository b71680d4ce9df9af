//! `SQLite` implementation of [`TipoServicioRepository`].
//!
//! Reads always join `servicios` so the returned records carry their
//! servicio fully loaded.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use catalogo_app::ports::TipoServicioRepository;
use catalogo_domain::error::CatalogoError;
use catalogo_domain::id::{ServicioCodigo, TipoServicioCodigo};
use catalogo_domain::servicio::Servicio;
use catalogo_domain::tipo_servicio::{NewTipoServicio, TipoServicio};

use crate::error::StorageError;

/// Wrapper for converting joined rows into domain [`TipoServicio`].
struct Wrapper(TipoServicio);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<TipoServicio> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let servicio = Servicio {
            codigo: ServicioCodigo::new(row.try_get("servicio_codigo")?),
            nombre: row.try_get("servicio_nombre")?,
            descripcion: row.try_get("servicio_descripcion")?,
        };

        Ok(Self(TipoServicio {
            codigo_tipo: TipoServicioCodigo::new(row.try_get("codigo_tipo")?),
            nombre: row.try_get("nombre")?,
            descripcion: row.try_get("descripcion")?,
            duracion_estimada: row.try_get("duracion_estimada")?,
            precio_base: row.try_get("precio_base")?,
            servicio,
        }))
    }
}

const INSERT: &str = "INSERT INTO tipos_servicio (nombre, descripcion, duracion_estimada, precio_base, servicio_codigo) VALUES (?, ?, ?, ?, ?)";
const SELECT_JOINED: &str = "SELECT t.codigo_tipo, t.nombre, t.descripcion, t.duracion_estimada, t.precio_base, \
     s.codigo AS servicio_codigo, s.nombre AS servicio_nombre, s.descripcion AS servicio_descripcion \
     FROM tipos_servicio t JOIN servicios s ON s.codigo = t.servicio_codigo";
const UPDATE: &str = "UPDATE tipos_servicio SET nombre = ?, descripcion = ?, duracion_estimada = ?, precio_base = ?, servicio_codigo = ? WHERE codigo_tipo = ?";
const DELETE_BY_CODIGO: &str = "DELETE FROM tipos_servicio WHERE codigo_tipo = ?";

/// `SQLite`-backed tipo de servicio repository.
pub struct SqliteTipoServicioRepository {
    pool: SqlitePool,
}

impl SqliteTipoServicioRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TipoServicioRepository for SqliteTipoServicioRepository {
    fn create(
        &self,
        tipo: NewTipoServicio,
    ) -> impl Future<Output = Result<TipoServicio, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&tipo.nombre)
                .bind(&tipo.descripcion)
                .bind(tipo.duracion_estimada)
                .bind(tipo.precio_base)
                .bind(tipo.servicio.codigo.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(tipo.with_codigo(TipoServicioCodigo::new(result.last_insert_rowid())))
        }
    }

    fn get_by_codigo(
        &self,
        codigo_tipo: TipoServicioCodigo,
    ) -> impl Future<Output = Result<Option<TipoServicio>, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = format!("{SELECT_JOINED} WHERE t.codigo_tipo = ?");
            let row: Option<Wrapper> = sqlx::query_as(&query)
                .bind(codigo_tipo.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<TipoServicio>, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = format!("{SELECT_JOINED} ORDER BY t.codigo_tipo");
            let rows: Vec<Wrapper> = sqlx::query_as(&query)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        tipo: TipoServicio,
    ) -> impl Future<Output = Result<Option<TipoServicio>, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&tipo.nombre)
                .bind(&tipo.descripcion)
                .bind(tipo.duracion_estimada)
                .bind(tipo.precio_base)
                .bind(tipo.servicio.codigo.get())
                .bind(tipo.codigo_tipo.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok((result.rows_affected() > 0).then_some(tipo))
        }
    }

    fn delete(
        &self,
        codigo_tipo: TipoServicioCodigo,
    ) -> impl Future<Output = Result<bool, CatalogoError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_CODIGO)
                .bind(codigo_tipo.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use crate::servicio_repo::SqliteServicioRepository;
    use catalogo_app::ports::ServicioRepository;
    use catalogo_domain::servicio::NewServicio;

    struct Fixture {
        repo: SqliteTipoServicioRepository,
        peluqueria: Servicio,
        estetica: Servicio,
    }

    async fn setup() -> Fixture {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let servicios = SqliteServicioRepository::new(db.pool().clone());
        let peluqueria = servicios
            .create(NewServicio::builder().nombre("Peluquería").build().unwrap())
            .await
            .unwrap();
        let estetica = servicios
            .create(NewServicio::builder().nombre("Estética").build().unwrap())
            .await
            .unwrap();

        Fixture {
            repo: SqliteTipoServicioRepository::new(db.pool().clone()),
            peluqueria,
            estetica,
        }
    }

    fn corte(servicio: &Servicio) -> NewTipoServicio {
        NewTipoServicio {
            nombre: Some("Corte".to_string()),
            descripcion: Some("Corte básico".to_string()),
            duracion_estimada: Some(30.0),
            precio_base: Some(15.0),
            servicio: servicio.clone(),
        }
    }

    #[tokio::test]
    async fn should_create_and_retrieve_with_servicio_loaded() {
        let fx = setup().await;

        let created = fx.repo.create(corte(&fx.peluqueria)).await.unwrap();

        let fetched = fx
            .repo
            .get_by_codigo(created.codigo_tipo)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.servicio.nombre, "Peluquería");
    }

    #[tokio::test]
    async fn should_store_null_scalar_fields() {
        let fx = setup().await;
        let tipo = NewTipoServicio {
            nombre: None,
            descripcion: None,
            duracion_estimada: None,
            precio_base: None,
            servicio: fx.peluqueria.clone(),
        };

        let created = fx.repo.create(tipo).await.unwrap();

        let fetched = fx
            .repo
            .get_by_codigo(created.codigo_tipo)
            .await
            .unwrap()
            .unwrap();
        assert!(fetched.nombre.is_none());
        assert!(fetched.duracion_estimada.is_none());
        assert!(fetched.precio_base.is_none());
    }

    #[tokio::test]
    async fn should_round_trip_fractional_duracion() {
        let fx = setup().await;
        let mut tipo = corte(&fx.peluqueria);
        tipo.duracion_estimada = Some(45.75);

        let created = fx.repo.create(tipo).await.unwrap();

        let fetched = fx
            .repo
            .get_by_codigo(created.codigo_tipo)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.duracion_estimada, Some(45.75));
    }

    #[tokio::test]
    async fn should_assign_increasing_codigos() {
        let fx = setup().await;
        let first = fx.repo.create(corte(&fx.peluqueria)).await.unwrap();
        let second = fx.repo.create(corte(&fx.peluqueria)).await.unwrap();
        assert!(second.codigo_tipo > first.codigo_tipo);
    }

    #[tokio::test]
    async fn should_return_none_when_not_found() {
        let fx = setup().await;
        let result = fx
            .repo
            .get_by_codigo(TipoServicioCodigo::new(123))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_with_servicios_in_codigo_order() {
        let fx = setup().await;
        fx.repo.create(corte(&fx.peluqueria)).await.unwrap();
        fx.repo.create(corte(&fx.estetica)).await.unwrap();

        let all = fx.repo.get_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert!(all[0].codigo_tipo < all[1].codigo_tipo);
        assert_eq!(all[0].servicio.nombre, "Peluquería");
        assert_eq!(all[1].servicio.nombre, "Estética");
    }

    #[tokio::test]
    async fn should_update_fields_and_servicio_when_exists() {
        let fx = setup().await;
        let mut tipo = fx.repo.create(corte(&fx.peluqueria)).await.unwrap();

        tipo.precio_base = Some(20.0);
        tipo.descripcion = None;
        tipo.servicio = fx.estetica.clone();
        let saved = fx.repo.update(tipo.clone()).await.unwrap();
        assert_eq!(saved, Some(tipo.clone()));

        let fetched = fx
            .repo
            .get_by_codigo(tipo.codigo_tipo)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.precio_base, Some(20.0));
        assert!(fetched.descripcion.is_none());
        assert_eq!(fetched.servicio.codigo, fx.estetica.codigo);
    }

    #[tokio::test]
    async fn should_return_none_when_updating_missing_row() {
        let fx = setup().await;
        let ghost = corte(&fx.peluqueria).with_codigo(TipoServicioCodigo::new(999));
        let result = fx.repo.update(ghost).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_reject_update_pointing_at_missing_servicio() {
        let fx = setup().await;
        let mut tipo = fx.repo.create(corte(&fx.peluqueria)).await.unwrap();
        tipo.servicio.codigo = ServicioCodigo::new(404);

        let result = fx.repo.update(tipo).await;
        assert!(matches!(result, Err(CatalogoError::Storage(_))));
    }

    #[tokio::test]
    async fn should_delete_when_exists() {
        let fx = setup().await;
        let tipo = fx.repo.create(corte(&fx.peluqueria)).await.unwrap();

        assert!(fx.repo.delete(tipo.codigo_tipo).await.unwrap());

        let result = fx.repo.get_by_codigo(tipo.codigo_tipo).await.unwrap();
        assert!(result.is_none());
        assert!(!fx.repo.delete(tipo.codigo_tipo).await.unwrap());
    }
}
