//! In-memory [`BackendGateway`] for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{BackendGateway, ChatExchangeResult, GatewayError, Readiness};
use crate::i18n::Language;

type Hook = Box<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeCall {
    pub user_id: String,
    pub message: String,
    pub language: Language,
}

pub struct MockGateway {
    healthy: AtomicBool,
    readiness: Mutex<Option<Readiness>>,
    replies: Mutex<VecDeque<Result<ChatExchangeResult, GatewayError>>>,
    reset_ok: AtomicBool,
    on_exchange: Mutex<Option<Hook>>,
    pub health_calls: AtomicUsize,
    pub readiness_calls: AtomicUsize,
    pub exchanges: Mutex<Vec<ExchangeCall>>,
    pub resets: Mutex<Vec<String>>,
}

impl MockGateway {
    /// A backend that is live, ready, and answers "ok" to everything.
    pub fn ready() -> Self {
        Self {
            healthy: AtomicBool::new(true),
            readiness: Mutex::new(Some(Readiness {
                has_primary_model: true,
                has_search_provider: true,
            })),
            replies: Mutex::new(VecDeque::new()),
            reset_ok: AtomicBool::new(true),
            on_exchange: Mutex::new(None),
            health_calls: AtomicUsize::new(0),
            readiness_calls: AtomicUsize::new(0),
            exchanges: Mutex::new(Vec::new()),
            resets: Mutex::new(Vec::new()),
        }
    }

    pub fn down() -> Self {
        let gateway = Self::ready();
        gateway.set_down();
        gateway
    }

    pub fn set_down(&self) {
        self.healthy.store(false, Ordering::SeqCst);
        *self.readiness.lock().unwrap() = None;
        self.reset_ok.store(false, Ordering::SeqCst);
    }

    pub fn set_readiness(&self, healthy: bool, readiness: Option<Readiness>) {
        self.healthy.store(healthy, Ordering::SeqCst);
        *self.readiness.lock().unwrap() = readiness;
    }

    pub fn push_reply(&self, reply: Result<ChatExchangeResult, GatewayError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Runs `hook` inside every `exchange` call, before it resolves.
    pub fn on_exchange(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_exchange.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn exchange_calls(&self) -> Vec<ExchangeCall> {
        self.exchanges.lock().unwrap().clone()
    }

    pub fn health_call_count(&self) -> usize {
        self.health_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendGateway for MockGateway {
    async fn check_health(&self) -> bool {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.healthy.load(Ordering::SeqCst)
    }

    async fn check_readiness(&self) -> Option<Readiness> {
        self.readiness_calls.fetch_add(1, Ordering::SeqCst);
        *self.readiness.lock().unwrap()
    }

    async fn exchange(
        &self,
        user_id: &str,
        message: &str,
        language: Language,
    ) -> Result<ChatExchangeResult, GatewayError> {
        self.exchanges.lock().unwrap().push(ExchangeCall {
            user_id: user_id.to_string(),
            message: message.to_string(),
            language,
        });
        if let Some(hook) = self.on_exchange.lock().unwrap().as_ref() {
            hook();
        }
        tokio::task::yield_now().await;
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ChatExchangeResult::reply("ok")))
    }

    async fn reset_session(&self, user_id: &str) -> bool {
        self.resets.lock().unwrap().push(user_id.to_string());
        self.reset_ok.load(Ordering::SeqCst)
    }
}
