pub mod http;
pub mod worker;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// A single call against the backend REST surface.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    Get { path: String },
    Post { path: String, body: Value },
}

impl Request {
    pub fn get(path: &str) -> Self {
        Request::Get { path: path.to_string() }
    }

    pub fn post(path: &str, body: Value) -> Self {
        Request::Post {
            path: path.to_string(),
            body,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Request::Get { path } | Request::Post { path, .. } => path,
        }
    }
}

/// Status and raw body of a completed call.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub trait Backend: Send + Sync {
    fn send(&self, request: &Request) -> Result<Reply>;
}
