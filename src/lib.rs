pub mod analysis;
pub mod config;
pub mod game;
pub mod models;
pub mod routes;
pub mod state;
pub mod websocket;
