//! Recording transport for driving API and session logic in unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use super::api::{ApiError, Transport};
use super::types::ApiRequest;

#[derive(Default)]
pub(crate) struct FakeTransport {
    sent: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<Value, ApiError>>>,
}

impl FakeTransport {
    pub(crate) fn replying(replies: impl IntoIterator<Item = Result<Value, ApiError>>) -> Self {
        Self { sent: RefCell::default(), replies: RefCell::new(replies.into_iter().collect()) }
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no reply queued".to_owned())))
    }
}
