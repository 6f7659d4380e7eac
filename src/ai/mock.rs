use super::{ImageGenerationService, TextGenerationService};
use crate::models::{AspectRatio, ResponseMode};
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Scripted text-generation mock. Responses are consumed cyclically.
#[derive(Clone)]
pub struct MockTextClient {
    responses: Arc<Mutex<Vec<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockTextClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerationService for MockTextClient {
    async fn generate(&self, _prompt: &str, _mode: &ResponseMode) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("{}".to_string())
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// One scripted reply of the image mock.
#[derive(Clone)]
enum MockImageReply {
    Image(String),
    Empty,
    Failure(String),
}

/// Scripted image-generation mock. Replies are consumed cyclically; the
/// call counter only advances when a request would actually be issued, so
/// tests can assert that gated or empty-prompt positions stay offline.
#[derive(Clone)]
pub struct MockImageClient {
    replies: Arc<Mutex<Vec<MockImageReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_image_response(self, base64_data: String) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockImageReply::Image(base64_data));
        self
    }

    /// Queue a response carrying no inline image.
    pub fn with_empty_response(self) -> Self {
        self.replies.lock().unwrap().push(MockImageReply::Empty);
        self
    }

    /// Queue a transport-level failure.
    pub fn with_failure(self, message: String) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(MockImageReply::Failure(message));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageClient {
    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> Result<Option<String>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            // Tiny valid PNG, base64-encoded.
            return Ok(Some("iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAIAAACQd1PeAAAADElEQVQImWP4z8AAAAMBAQDJ/pLvAAAAAElFTkSuQmCC".to_string()));
        }

        let index = (*count - 1) % replies.len();
        match replies[index].clone() {
            MockImageReply::Image(data) => Ok(Some(data)),
            MockImageReply::Empty => Ok(None),
            MockImageReply::Failure(message) => Err(Error::AiProvider(message)),
        }
    }
}
