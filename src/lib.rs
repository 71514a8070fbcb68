//! Dashboard core: fetches pre-aggregated video stats from the REST backend
//! and turns them into declarative ECharts option trees plus summary scalars.

pub mod api;
pub mod charts;
pub mod config;
pub mod logging;
pub mod page;
pub mod payload;
pub mod transform;
