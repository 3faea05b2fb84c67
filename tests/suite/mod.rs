mod config;
mod search;
