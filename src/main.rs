use config::{Config, Environment, File, FileFormat};
use wedding_manager::models::config::ServerConfig;
use wedding_manager::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let server_config = Config::builder()
        .set_default("address", "127.0.0.1")
        .map_err(std::io::Error::other)?
        .set_default("port", 8080)
        .map_err(std::io::Error::other)?
        .set_default("sheets_dir", "sheets")
        .map_err(std::io::Error::other)?
        .set_default("data_file", "wedding-data.json")
        .map_err(std::io::Error::other)?
        .add_source(File::new("config", FileFormat::Yaml).required(false))
        .add_source(Environment::default())
        .build()
        .map_err(std::io::Error::other)?;

    let server_config: ServerConfig = server_config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    run(server_config).await
}
