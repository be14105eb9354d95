//! Champion reference data from Data Dragon

use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_public;
use super::urls::{ddragon_champion_url, ddragon_versions_url};
use crate::error::AppError;
use crate::models::{ChampionCatalog, ChampionDataResponse};

/// Newest game version published by Data Dragon.
///
/// The versions feed lists releases newest first.
pub async fn latest_version(client: &Client, ddragon_base: &str) -> Result<String, AppError> {
    let url = ddragon_versions_url(ddragon_base);
    let versions: Vec<String> = fetch_public(client, &url).await?;
    versions
        .into_iter()
        .next()
        .ok_or_else(|| AppError::api_no_data("Versions list is empty", url))
}

/// Downloads the champion feed of the newest version and indexes it.
///
/// Data Dragon is public; no API key is sent and no rate-limit backoff applies.
#[instrument(skip(client))]
pub async fn fetch_champion_catalog(
    client: &Client,
    ddragon_base: &str,
) -> Result<ChampionCatalog, AppError> {
    let version = latest_version(client, ddragon_base).await?;
    let url = ddragon_champion_url(ddragon_base, &version);
    let response: ChampionDataResponse = fetch_public(client, &url).await?;

    let catalog = ChampionCatalog::from(response);
    info!(
        "Loaded {} champions from Data Dragon {}",
        catalog.len(),
        catalog.version()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::riot_api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn champion_feed() -> serde_json::Value {
        json!({
            "type": "champion",
            "format": "standAloneComplex",
            "version": "10.25.1",
            "data": {
                "Ahri": {"id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox"},
                "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong", "title": "the Monkey King"}
            }
        })
    }

    #[tokio::test]
    async fn test_fetch_champion_catalog_uses_first_version() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/versions.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["10.25.1", "10.24.1"])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/cdn/10.25.1/data/en_US/champion.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(champion_feed()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let catalog = fetch_champion_catalog(&client, &mock_server.uri())
            .await
            .unwrap();

        assert_eq!(catalog.version(), "10.25.1");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name_for_id(62), Some("Wukong"));
        assert_eq!(catalog.id_for_name("Ahri"), Some(103));
    }

    #[tokio::test]
    async fn test_empty_versions_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/versions.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_champion_catalog(&client, &mock_server.uri()).await;
        assert!(matches!(result, Err(AppError::ApiNoData { .. })));
    }

    #[tokio::test]
    async fn test_champion_feed_with_wrong_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/versions.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["10.25.1"])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/cdn/10.25.1/data/en_US/champion.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"champions": []})))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_champion_catalog(&client, &mock_server.uri()).await;
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }
}
