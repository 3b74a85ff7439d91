use mockito::{Matcher, Mock, ServerGuard};

pub struct StorageFixture<'a> {
    server: &'a mut ServerGuard,
}

impl<'a> StorageFixture<'a> {
    pub fn new(server: &'a mut ServerGuard) -> Self {
        Self { server }
    }

    /// Accept any number of PUTs under the bucket prefix
    pub fn with_put_endpoint(&mut self, bucket: &str) -> Mock {
        self.server
            .mock("PUT", Matcher::Regex(format!("^/{}/.*$", bucket)))
            .with_status(200)
            .expect_at_least(1)
            .create()
    }

    pub fn with_failing_put_endpoint(&mut self, bucket: &str) -> Mock {
        self.server
            .mock("PUT", Matcher::Regex(format!("^/{}/.*$", bucket)))
            .with_status(500)
            .expect_at_least(1)
            .create()
    }

    pub fn with_delete_endpoint(&mut self, bucket: &str) -> Mock {
        self.server
            .mock("DELETE", Matcher::Regex(format!("^/{}/.*$", bucket)))
            .with_status(200)
            .create()
    }
}
