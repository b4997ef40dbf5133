use anyhow::Result;

use super::load_config;
use crate::chat::{ChatConfig, ChatSession};
use crate::config::ResolveOptions;

pub struct ChatOptions {
    pub resolve: ResolveOptions,
    pub user_id: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let resolved = load_config(&options.resolve)?;
    let mut session = ChatSession::new(ChatConfig::new(resolved, options.user_id))?;
    session.run().await
}
