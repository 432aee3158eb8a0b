use std::fmt;

pub mod configs;
pub mod error;
pub mod handler;
pub mod http;
pub mod runtime;
pub mod server;
pub mod vault;

#[derive(Clone)]
pub struct SharedData {
    pub handler: handler::SecretFetchHandler,
}

impl SharedData {
    pub fn new(handler: handler::SecretFetchHandler) -> Self {
        Self { handler }
    }
}

impl fmt::Debug for SharedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedData")
            .field("secret_path", &self.handler.secret_path())
            .finish()
    }
}
