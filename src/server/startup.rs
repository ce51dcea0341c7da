use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::directory::{HttpUserDirectory, UserDirectory},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. The migrations also seed the time slot catalog. This function must
/// complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for calls to other services.
///
/// Redirects are disabled so a directory response can never bounce requests to
/// another host. The request timeout matches the directory lookup timeout.
///
/// # Arguments
/// - `config` - Application configuration containing the directory timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalError)` - The TLS backend could not be initialised
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.directory_timeout)
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Creates the user directory backed by the auth service.
pub fn setup_directory(config: &Config, http_client: reqwest::Client) -> Arc<dyn UserDirectory> {
    Arc::new(HttpUserDirectory::new(
        http_client,
        config.directory_url.clone(),
        config.directory_timeout,
    ))
}
