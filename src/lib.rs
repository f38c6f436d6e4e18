pub mod config;
pub mod llm_client;
pub mod modernize;
pub mod parser;
pub mod prompts;
pub mod recommend;
pub mod server;
