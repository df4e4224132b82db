mod cli;
mod infra;
mod map;
mod routes;
mod server;

use visa_forms::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
