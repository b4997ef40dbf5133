//! Chat mode UI components.

use crate::gateway::ChatResource;
use crate::i18n::Language;
use crate::session::{Message, Notice, Role};
use crate::ui::Style;

use super::session::ChatConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &ChatConfig) {
    println!(
        "{} {} - {}",
        Style::header("counsel"),
        Style::version(format!("v{VERSION}")),
        Style::secondary(&config.base_url)
    );
    println!(
        "{}",
        Style::hint("Type a message to chat, /resources for reading material, /help for commands")
    );
    println!();
}

pub fn print_goodbye(language: Language) {
    println!("{}", Style::success(language.t("goodbye")));
}

pub fn print_config(config: &ChatConfig, language: Language, user_id: Option<&str>) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("base_url"),
        Style::secondary(&config.base_url)
    );
    println!(
        "  {}   {}",
        Style::label("language"),
        Style::value(language)
    );
    println!(
        "  {}    {}",
        Style::label("user_id"),
        user_id.map_or_else(|| Style::secondary("(not assigned yet)"), Style::value)
    );
    println!(
        "  {}     {}",
        Style::label("health"),
        Style::secondary(format!("every {}s", config.health_interval.as_secs()))
    );
    println!();
}

pub fn print_about(language: Language) {
    println!("{}", Style::header(language.t("about")));
    println!(
        "  The Playground provides mental health support and resources. This is a\n  \
         demonstration interface for testing the chatbot with AI assistance."
    );
    println!();
    println!(
        "  {} This tool is not a substitute for professional medical advice. If you\n  \
         are experiencing a mental health crisis, please contact emergency services\n  \
         or a mental health professional immediately.",
        Style::warning("Disclaimer:")
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let rows = [
        ("/resources", "Get 3-5 resources on your latest message"),
        ("/lang <code>", "Change language (en, hi)"),
        ("/status", "Show API health and readiness"),
        ("/history", "Show the conversation so far"),
        ("/reset", "Clear the assistant's memory of this conversation"),
        ("/config", "Show current configuration"),
        ("/about", "About this assistant and its limits"),
        ("/help", "Show this help"),
        ("/quit", "Exit chat mode"),
    ];
    for (cmd, desc) in rows {
        println!("  {:14} {}", Style::command(cmd), Style::secondary(desc));
    }
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}

pub fn print_notice(notice: &Notice) {
    eprintln!("{} {}", Style::error("!"), notice);
    eprintln!("  {}", Style::secondary(&notice.error));
    eprintln!();
}

pub fn print_reply(text: &str) {
    println!("{} {text}", Style::assistant("AI"));
    println!();
}

/// Prints the resource list. An empty list is only mentioned when `show_empty`.
pub fn print_resources(resources: &[ChatResource], language: Language, show_empty: bool) {
    if resources.is_empty() {
        if show_empty {
            println!("{}", Style::secondary(language.t("noResources")));
            println!();
        }
        return;
    }

    println!("{}", Style::header(language.t("resources")));
    for (i, resource) in resources.iter().enumerate() {
        let title = resource
            .title
            .as_deref()
            .or(resource.url.as_deref())
            .unwrap_or("(untitled)");
        println!("  {}. {}", i + 1, Style::value(title));
        if let Some(url) = &resource.url {
            println!("     {}", Style::secondary(url));
        }
        if let Some(snippet) = &resource.snippet {
            println!("     {}", Style::hint(snippet));
        }
    }
    println!();
}

pub fn print_suggestions(suggestions: &[String], language: Language) {
    if suggestions.is_empty() {
        return;
    }
    println!("{}", Style::header(language.t("suggestions")));
    for suggestion in suggestions {
        println!("  - {}", Style::secondary(suggestion));
    }
    println!();
}

pub fn print_history(messages: &[Message]) {
    if messages.is_empty() {
        println!("{}", Style::secondary("(no messages yet)"));
    }
    for message in messages {
        let who = match message.role {
            Role::User => Style::user("You"),
            Role::Assistant => Style::assistant("AI"),
        };
        println!("{who} {}", message.text);
    }
    println!();
}
