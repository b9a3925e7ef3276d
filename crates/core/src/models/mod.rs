pub mod analytics;
pub mod chart;
pub mod dashboard;
pub mod date;
pub mod heatmap;
pub mod money;
pub mod overview;
pub mod ranking;
pub mod settings;
pub mod window;
pub mod yearly;
