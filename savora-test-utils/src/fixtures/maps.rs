use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

pub struct MapsFixture<'a> {
    server: &'a mut ServerGuard,
}

impl<'a> MapsFixture<'a> {
    pub fn new(server: &'a mut ServerGuard) -> Self {
        Self { server }
    }

    /// Mock the text-search endpoint; `body` is typically built with
    /// [`crate::fixtures::factory::search_response`]
    pub fn with_search_endpoint(&mut self, body: &Value) -> Mock {
        self.server
            .mock("GET", "/maps/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    pub fn with_details_endpoint(&mut self, external_id: &str, body: &Value) -> Mock {
        self.server
            .mock("GET", format!("/maps/details/{}", external_id).as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }

    /// Mock a search endpoint that always fails with a server error
    pub fn with_failing_search_endpoint(&mut self) -> Mock {
        self.server
            .mock("GET", "/maps/search")
            .match_query(Matcher::Any)
            .with_status(503)
            .create()
    }
}
