use crate::error::ClientError;
use crate::executor::RequestExecutor;
use crate::request::{Request, ResponseBody};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Executor that records requests and replays scripted responses in order
#[derive(Default)]
pub struct MockExecutor {
    responses: Mutex<VecDeque<Result<ResponseBody, ClientError>>>,
    requests: Mutex<Vec<Request>>,
}

impl MockExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, value: Value) {
        self.push(Ok(ResponseBody::Json(value)));
    }

    pub fn push_raw(&self, text: &str) {
        self.push(Ok(ResponseBody::Raw(text.to_string())));
    }

    pub fn push_error(&self, error: ClientError) {
        self.push(Err(error));
    }

    fn push(&self, response: Result<ResponseBody, ClientError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(&self, request: Request) -> Result<ResponseBody, ClientError> {
        let url = request.url.clone();
        let method = request.method;
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClientError::Status {
                    method,
                    url,
                    status: 500,
                    body: "no scripted response".to_string(),
                })
            })
    }
}
