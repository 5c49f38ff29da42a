#![allow(dead_code)]

pub mod app_builder;
pub mod websocket;
pub mod websocket_client;

pub use app_builder::TestAppBuilder;
pub use harness::TestHarness;
