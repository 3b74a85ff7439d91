use mockito::{Mock, ServerGuard};

use crate::fixtures::factory;

pub struct LlmFixture<'a> {
    server: &'a mut ServerGuard,
}

impl<'a> LlmFixture<'a> {
    pub fn new(server: &'a mut ServerGuard) -> Self {
        Self { server }
    }

    pub fn with_completion_endpoint(&mut self, content: &str) -> Mock {
        self.server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(factory::completion_response(content).to_string())
            .create()
    }

    pub fn with_failing_completion_endpoint(&mut self) -> Mock {
        self.server
            .mock("POST", "/v1/chat/completions")
            .with_status(500)
            .create()
    }
}
