mod app_config;
mod client_flow;
mod support;
