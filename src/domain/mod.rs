// Domain layer - Sales dashboard models, chart configurations and formatting
pub mod chart;
pub mod format;
pub mod resource;
pub mod sales;
