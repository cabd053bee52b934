use anyhow::{bail, Context, Result};
use custom_entities::config::Config;
use custom_entities::data::CustomEntity;
use custom_entities::definitions::{CustomEntityDefinitionRegistry, DefinitionValidator};
use custom_entities::manifest;
use custom_entities::routing::{CustomEntityRouteMapper, JsonRoutingDataMapper};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("custom_entities=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    // Step 1: Load and validate definitions
    info!("Loading custom entity definitions from {}", config.definitions_file);
    let definitions = manifest::load_manifest(&config.definitions_file)?.into_definitions();

    let report = DefinitionValidator::validate(&definitions);
    if !report.is_valid() {
        for violation in &report.violations {
            error!("{}", violation);
        }
        bail!(
            "{} invalid custom entity definition(s) in {}",
            report.len(),
            config.definitions_file
        );
    }

    let registry = CustomEntityDefinitionRegistry::new(definitions)?;
    info!("Registered {} custom entity definitions", registry.len());

    let mut registered: Vec<_> = registry.get_all().collect();
    registered.sort_by(|a, b| {
        a.custom_entity_definition_code()
            .cmp(b.custom_entity_definition_code())
    });
    for definition in registered {
        info!(
            "  {} - {}",
            definition.custom_entity_definition_code(),
            definition.name()
        );
    }

    // Step 2: Optionally preview routes for stored rows
    let Some(rows_file) = &config.rows_file else {
        return Ok(());
    };

    info!("Mapping custom entity rows from {}", rows_file);
    let json = std::fs::read_to_string(rows_file)
        .with_context(|| format!("Failed to read custom entity rows at {}", rows_file))?;
    let entities: Vec<CustomEntity> =
        serde_json::from_str(&json).context("Failed to parse custom entity rows")?;

    let mapper =
        CustomEntityRouteMapper::new(JsonRoutingDataMapper::new(config.routing_data_properties));

    let mut routes = Vec::with_capacity(entities.len());
    for entity in &entities {
        if !registry.contains_code(&entity.custom_entity_definition_code) {
            warn!(
                "Skipping custom entity {}: definition {} is not registered",
                entity.custom_entity_id, entity.custom_entity_definition_code
            );
            continue;
        }

        let route = mapper
            .map(Some(entity), config.default_locale.as_ref())
            .with_context(|| format!("Failed to map custom entity {}", entity.custom_entity_id))?;
        routes.push(route);
    }

    info!("Mapped {} of {} custom entities", routes.len(), entities.len());
    println!("{}", serde_json::to_string_pretty(&routes)?);

    Ok(())
}
