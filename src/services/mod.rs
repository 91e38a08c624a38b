pub mod aggregator;
pub mod catalog;
pub mod chart_history;
pub mod genre;
pub mod resolver;
pub mod spotify;

#[cfg(test)]
pub mod test_support;

pub use catalog::CatalogClient;
pub use chart_history::ChartHistory;
pub use resolver::EnrichmentResolver;
pub use spotify::SpotifyClient;
