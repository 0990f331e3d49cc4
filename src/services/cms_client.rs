// ============================================================================
// CMS CLIENT - headless CMS query API
// ============================================================================
// Content lists (events, publications, resources) come from the CMS. The
// list controller treats this exactly like the REST backend: page + search
// + filters in, up to page_size typed records out.
// ============================================================================

use std::rc::Rc;

use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::models::{Event, Publication, ResourceItem};
use crate::services::error::{ApiError, ErrorBody};
use crate::state::list::{ListQuery, PageFetcher, PageResult};

/// CMS list responses wrap the records in an `items` array
#[derive(Deserialize)]
struct CmsPage<T> {
    items: Vec<T>,
}

#[derive(Clone)]
pub struct CmsClient {
    base_url: String,
    timeout_ms: u32,
}

impl CmsClient {
    pub fn new() -> Self {
        let config = AppConfig::from_env();
        Self {
            base_url: config.cms_url.clone(),
            timeout_ms: config.network_timeout_ms(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        content_type: &str,
        query: &ListQuery,
    ) -> Result<Vec<T>, ApiError> {
        let url = format!(
            "{}/api/content/{}?{}",
            self.base_url,
            content_type,
            query.query_string()
        );

        let request = Request::get(&url).send();
        let timeout = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(request);
        futures::pin_mut!(timeout);

        let response = match select(request, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::Network(e.to_string()))?
            }
            Either::Right((_, _)) => {
                log::warn!("⏱️ CMS query timed out: {}", content_type);
                return Err(ApiError::Timeout);
            }
        };

        if !response.ok() {
            let body_message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::from_status(
                response.status(),
                body_message,
                &response.status_text(),
            ));
        }

        let page = response
            .json::<CmsPage<T>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;
        log::info!("📰 CMS {}: {} items", content_type, page.items.len());
        Ok(page.items)
    }
}

impl Default for CmsClient {
    fn default() -> Self {
        Self::new()
    }
}

// --- PageFetcher adapters, one per content list ---

pub struct EventsFetcher {
    client: CmsClient,
}

impl EventsFetcher {
    pub fn new(client: CmsClient) -> Rc<Self> {
        Rc::new(Self { client })
    }
}

#[async_trait(?Send)]
impl PageFetcher<Event> for EventsFetcher {
    async fn fetch_page(&self, query: &ListQuery) -> Result<PageResult<Event>, ApiError> {
        let items = self.client.fetch_list::<Event>("events", query).await?;
        Ok(PageResult { items, total: None })
    }
}

pub struct PublicationsFetcher {
    client: CmsClient,
}

impl PublicationsFetcher {
    pub fn new(client: CmsClient) -> Rc<Self> {
        Rc::new(Self { client })
    }
}

#[async_trait(?Send)]
impl PageFetcher<Publication> for PublicationsFetcher {
    async fn fetch_page(&self, query: &ListQuery) -> Result<PageResult<Publication>, ApiError> {
        let items = self
            .client
            .fetch_list::<Publication>("publications", query)
            .await?;
        Ok(PageResult { items, total: None })
    }
}

pub struct ResourcesFetcher {
    client: CmsClient,
}

impl ResourcesFetcher {
    pub fn new(client: CmsClient) -> Rc<Self> {
        Rc::new(Self { client })
    }
}

#[async_trait(?Send)]
impl PageFetcher<ResourceItem> for ResourcesFetcher {
    async fn fetch_page(&self, query: &ListQuery) -> Result<PageResult<ResourceItem>, ApiError> {
        let items = self
            .client
            .fetch_list::<ResourceItem>("resources", query)
            .await?;
        Ok(PageResult { items, total: None })
    }
}
