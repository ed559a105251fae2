use crate::cli::args::{Cli, Commands};
use conndial_rs::connect::{build_connection_string, resolve_pool_settings, validate};
use conndial_rs::dialects::{self, DatabaseType};
use conndial_rs::model::Config;
use log::{debug, error, info};

pub fn handle(cli: Cli) {
    // Load configuration
    let config = match Config::load(cli.config.as_deref(), cli.env.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Commands::Check => {
            let database = config.database.as_ref();
            if let Err(e) = validate(database) {
                error!("Configuration invalid: {}", e);
                std::process::exit(1);
            }

            // validate() only passes when the section is present
            let Some(db) = database else {
                error!("Configuration invalid: database section missing");
                std::process::exit(1);
            };

            let pool = resolve_pool_settings(db);
            info!("Configuration ok: {} on {}", db.name, db.host);
            info!(
                "Pool settings: max_idle={} max_open={} max_lifetime={}s",
                pool.max_idle, pool.max_open, pool.max_lifetime_seconds
            );
        }

        Commands::ConnString => {
            match build_connection_string(config.database.as_ref()) {
                Ok(conn_str) => println!("{}", conn_str),
                Err(e) => {
                    error!("Cannot build connection string: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Dialect { name } => {
            let db_type: DatabaseType = match name.parse() {
                Ok(db_type) => db_type,
                Err(e) => {
                    error!("{}", e);
                    std::process::exit(1);
                }
            };

            let facts = dialects::facts(db_type);
            println!("dialect:            {}", db_type);
            println!("driver:             {}", facts.driver_name);
            println!("mssql family:       {}", dialects::is_mssql(db_type));
            println!("datetime format:    {}", facts.datetime_format);
            println!("savepoints:         {}", facts.supports_savepoints);
            println!("set savepoint:      {}", facts.savepoint_syntax.set_sql("name"));
            println!("rollback savepoint: {}", facts.savepoint_syntax.rollback_sql("name"));
        }

        Commands::Detect { connection_string } => match dialects::detect(&connection_string) {
            Some(db_type) => println!("{}", db_type),
            None => {
                error!("No dialect matched the connection string");
                std::process::exit(1);
            }
        },

        Commands::InitConfig { path } => {
            if let Err(e) = Config::generate_default_config(&path) {
                error!("Failed to write config file: {}", e);
                std::process::exit(1);
            }
            info!("Wrote starter configuration to {}", path);
        }
    }
}
