//! Example demonstrating repository pattern usage.
//!
//! This example shows how the repository layer feeds the delivery analytics
//! without going through the Python bindings.

use std::sync::Arc;

use antaran_rust::db::{
    models::Courier, CourierRepository, DeliveryEventRepository, FullRepository, LocalRepository,
    RepositoryError, RepositoryFactory,
};
use antaran_rust::parsing::parse_delivery_events_str;
use antaran_rust::services;
use chrono::NaiveDate;

/// One courier's morning, as the dashboard would hand it over.
const SEED_EVENTS: &str = r#"[
    {
        "connote": "CN001",
        "produk": "PKH",
        "status_antaran": "DELIVERED",
        "id_petugas": "P017",
        "id_kantor": "40115",
        "waktu_kejadian": "2024-03-01 08:00:00"
    },
    {
        "connote": "CN002",
        "produk": "PKH",
        "status_antaran": "FAILED_ADDRESS_NOT_FOUND",
        "id_petugas": "P017",
        "id_kantor": "40115",
        "waktu_kejadian": "2024-03-01 08:20:00"
    },
    {
        "connote": "CN003",
        "produk": "QCOM",
        "status_antaran": "DELIVERED",
        "id_petugas": "P017",
        "id_kantor": "40115",
        "waktu_kejadian": "2024-03-01 09:00:00"
    }
]"#;

async fn seed(repo: &dyn FullRepository) -> Result<(), Box<dyn std::error::Error>> {
    repo.store_courier(&Courier::new("P017", "Budi Santoso", "40115"))
        .await?;
    let events = parse_delivery_events_str(SEED_EVENTS)?;
    repo.store_delivery_events(&events).await?;
    Ok(())
}

/// Example 1: Basic usage with automatic configuration
async fn example_basic_usage() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Example 1: Basic Usage ===");

    // Create repository from environment (defaults to the local backend)
    let repo = RepositoryFactory::from_env()?;

    // Check connection health
    let is_healthy = repo.health_check().await?;
    println!("Store healthy: {}", is_healthy);

    seed(&*repo).await?;

    // List couriers of one delivery office
    let couriers = repo.list_couriers("40115").await?;
    println!("Found {} couriers at office 40115", couriers.len());

    for courier in couriers.iter().take(5) {
        println!("  - {}", courier.display_label());
    }

    Ok(())
}

/// Example 2: Explicit configuration from a TOML file
async fn example_config_file() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 2: Configuration File ===");

    let config = toml::from_str(
        r#"
        [repository]
        type = "local"
        "#,
    )?;

    let repo = RepositoryFactory::from_config(&config)?;
    println!("Created repository from config");
    println!("Health check: {}", repo.health_check().await?);

    Ok(())
}

/// Example 3: Dependency injection pattern
struct DaySummaryService {
    repo: Arc<dyn DeliveryEventRepository>,
}

impl DaySummaryService {
    pub fn new(repo: Arc<dyn DeliveryEventRepository>) -> Self {
        Self { repo }
    }

    pub async fn day_summary(
        &self,
        courier_id: &str,
        office_id: &str,
        date: NaiveDate,
    ) -> Result<String, RepositoryError> {
        let events = self
            .repo
            .fetch_delivery_events(courier_id, office_id, date)
            .await?;
        let resume = services::compute_delivery_resume(&events);

        Ok(format!(
            "Courier {} handled {} shipments: {} delivered ({:.0}%), {} failed",
            courier_id, resume.total, resume.delivered, resume.pct_delivered, resume.failed
        ))
    }
}

async fn example_dependency_injection() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 3: Dependency Injection ===");

    let repo = Arc::new(LocalRepository::new());
    seed(&*repo).await?;

    // Inject into service
    let service = DaySummaryService::new(repo);

    let date = NaiveDate::from_ymd_opt(2024, 3, 1).ok_or("bad date")?;
    println!("{}", service.day_summary("P017", "40115", date).await?);

    Ok(())
}

/// Example 4: Error handling
async fn example_error_handling() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 4: Error Handling ===");

    let repo = RepositoryFactory::create_local();

    // Try to look up a courier that was never seeded
    match repo.get_courier("P999", "40115").await {
        Ok(courier) => println!("Found courier: {}", courier.display_label()),
        Err(RepositoryError::NotFound(msg)) => {
            println!("Expected error - courier not found: {}", msg);
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    Ok(())
}

/// Example 5: Switching implementations
async fn example_switching_implementations() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Example 5: Switching Implementations ===");

    // Function that works with any repository
    async fn count_couriers(
        repo: &dyn CourierRepository,
        office_id: &str,
    ) -> Result<usize, RepositoryError> {
        let couriers = repo.list_couriers(office_id).await?;
        Ok(couriers.len())
    }

    // Use the local repository; a SQL-backed implementation of the same
    // traits would drop in without touching this function
    let local_repo = LocalRepository::new();
    let count = count_couriers(&local_repo, "40115").await?;
    println!("Local repository courier count: {}", count);

    Ok(())
}


#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Repository Pattern Examples\n");

    example_basic_usage().await?;
    example_config_file().await?;
    example_dependency_injection().await?;
    example_error_handling().await?;
    example_switching_implementations().await?;

    println!("\nAll examples completed successfully!");
    Ok(())
}
