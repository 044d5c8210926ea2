pub mod alerts;
pub mod capture;
pub mod combinations;
pub mod config;
pub mod coordinator;
pub mod matcher;
pub mod model;
pub mod snapshot;
