// Application layer - Fetching, view updates and the refresh workflow
pub mod dashboard_service;
pub mod data_source;
pub mod fetcher;
pub mod surface;
pub mod updaters;
