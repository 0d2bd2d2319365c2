//! main.rs

use std::net::TcpListener;
use contact_intake::startup::run;
use contact_intake::configurations::get_configuration;
use contact_intake::identity::DomainAllowList;
use contact_intake::storage_client::StorageClient;
use contact_intake::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("contact-intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    let timeout = configuration.storage.timeout();
    let storage_client = StorageClient::new(
        configuration.storage.base_url,
        configuration.storage.table,
        configuration.storage.api_token,
        timeout,
    );
    let allow_list = DomainAllowList::from(configuration.identity);
    let addr = format!("{}:{}", configuration.application.host, configuration.application.port);
    let listener = TcpListener::bind(addr)?;
    run(listener, storage_client, allow_list)?.await
}
