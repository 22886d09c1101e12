pub mod agent;
pub mod artifact;
pub mod checklist;
pub mod config;
pub mod context;
pub mod pipeline;
pub mod response_parser;
