#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use httpmock::MockServer;
use plaid_rs::{HttpRequest, HttpResponse, Plaid, PlaidClient, Transport, TransportFuture};
use serde_json::{Map, Value};

pub const CLIENT_ID: &str = "test_client_id";
pub const SECRET: &str = "test_secret";
pub const PUBLIC_KEY: &str = "test_public_key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Sandbox facade pointed at a mock server.
pub fn plaid_for(server: &MockServer) -> Plaid {
    Plaid::builder(CLIENT_ID, SECRET, PUBLIC_KEY)
        .environment("sandbox")
        .host(format!("{}/", server.base_url()))
        .build()
        .unwrap()
}

pub fn client_for(server: &MockServer) -> PlaidClient {
    plaid_for(server).client().clone()
}

pub fn private(params: Value) -> Value {
    let mut body = Map::new();
    body.insert("client_id".into(), CLIENT_ID.into());
    body.insert("secret".into(), SECRET.into());
    body.extend(params.as_object().cloned().unwrap());
    Value::Object(body)
}

pub fn public(params: Value) -> Value {
    let mut body = Map::new();
    body.insert("public_key".into(), PUBLIC_KEY.into());
    body.extend(params.as_object().cloned().unwrap());
    Value::Object(body)
}

/// In-process transport: answers every request with a fixed status and body,
/// or echoes the request body back when `echo` is set.
#[derive(Debug)]
pub struct Recorder {
    status: u16,
    body: Vec<u8>,
    echo: bool,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Recorder {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Self::replying_bytes(status, body.as_bytes())
    }

    pub fn replying_bytes(status: u16, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_vec(),
            echo: false,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn echo() -> Arc<Self> {
        Arc::new(Self {
            status: 200,
            body: Vec::new(),
            echo: true,
            seen: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub fn last_body(&self) -> Value {
        serde_json::from_slice(&self.last().body).unwrap()
    }
}

impl Transport for Recorder {
    fn send<'a>(&'a self, request: &'a HttpRequest) -> TransportFuture<'a> {
        self.seen.lock().unwrap().push(request.clone());
        let body = if self.echo {
            request.body.clone()
        } else {
            self.body.clone()
        };
        let status = self.status;
        Box::pin(async move { Ok::<_, plaid_rs::PlaidError>(HttpResponse { status, body }) })
    }
}

/// Sandbox facade wired to `transport`.
pub fn plaid_with(transport: Arc<Recorder>) -> Plaid {
    Plaid::builder(CLIENT_ID, SECRET, PUBLIC_KEY)
        .environment("sandbox")
        .transport(transport)
        .build()
        .unwrap()
}
