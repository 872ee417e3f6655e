//! Plaintext loopback server speaking the `google.cloud.speech.v1.Speech`
//! unary method, for exercising the real client stack in tests.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tonic::body::BoxBody;
use tonic::codegen::{BoxFuture, Service};
use tonic::server::{NamedService, UnaryService};
use tonic::transport::server::TcpIncoming;
use tonic::transport::Server;

use super::proto;

/// One call as the server saw it
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub path: String,
    pub authorization: Option<String>,
    pub request: proto::RecognizeRequest,
}

#[derive(Clone)]
struct SpeechStub {
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
    reply: proto::NonStreamingRecognizeResponse,
}

struct Recognize {
    stub: SpeechStub,
    path: String,
}

impl UnaryService<proto::RecognizeRequest> for Recognize {
    type Response = proto::NonStreamingRecognizeResponse;
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<proto::RecognizeRequest>) -> Self::Future {
        let authorization = request
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        if let Ok(mut calls) = self.stub.calls.lock() {
            calls.push(ReceivedCall {
                path: self.path.clone(),
                authorization,
                request: request.into_inner(),
            });
        }

        let reply = self.stub.reply.clone();
        Box::pin(async move { Ok(tonic::Response::new(reply)) })
    }
}

impl Service<http::Request<BoxBody>> for SpeechStub {
    type Response = http::Response<BoxBody>;
    type Error = Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<BoxBody>) -> Self::Future {
        let method = Recognize {
            stub: self.clone(),
            path: req.uri().path().to_string(),
        };
        Box::pin(async move {
            let mut grpc = tonic::server::Grpc::new(tonic::codec::ProstCodec::default());
            Ok(grpc.unary(method, req).await)
        })
    }
}

impl NamedService for SpeechStub {
    const NAME: &'static str = "google.cloud.speech.v1.Speech";
}

/// Running loopback server; dropped with the test runtime
pub struct LoopbackSpeech {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<ReceivedCall>>>,
}

impl LoopbackSpeech {
    /// Serve `reply` to every call on an ephemeral loopback port
    pub async fn start(reply: proto::NonStreamingRecognizeResponse) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let incoming = TcpIncoming::from_listener(listener, true, None).unwrap();

        let calls = Arc::new(Mutex::new(Vec::new()));
        let stub = SpeechStub {
            calls: Arc::clone(&calls),
            reply,
        };
        tokio::spawn(
            Server::builder()
                .add_service(stub)
                .serve_with_incoming(incoming),
        );

        Self { addr, calls }
    }

    pub fn uri(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.calls.lock().unwrap().clone()
    }
}
