use std::rc::Rc;

use async_trait::async_trait;

use crate::models::{DirectoryResponse, MemberRecord};
use crate::services::api_client::ApiClient;
use crate::services::error::ApiError;
use crate::state::list::{ListQuery, PageFetcher, PageResult};
use crate::state::session::SessionService;

/// Member directory pages come from the REST backend and require a signed-in
/// member; the bearer token is read from the session at fetch time. This is
/// the one list whose backend returns an exact total - it is displayed, but
/// Next/Previous enablement still runs off the has_more heuristic like every
/// other list.
pub struct DirectoryFetcher {
    api: ApiClient,
    session: SessionService,
}

impl DirectoryFetcher {
    pub fn new(api: ApiClient, session: SessionService) -> Rc<Self> {
        Rc::new(Self { api, session })
    }
}

#[async_trait(?Send)]
impl PageFetcher<MemberRecord> for DirectoryFetcher {
    async fn fetch_page(&self, query: &ListQuery) -> Result<PageResult<MemberRecord>, ApiError> {
        let path = format!("/v1/members?{}", query.query_string());
        let token = self.session.token();
        let response: DirectoryResponse = self.api.get_json(&path, token.as_deref()).await?;
        Ok(PageResult {
            items: response.members,
            total: response.total,
        })
    }
}
