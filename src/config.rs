use std::collections::HashSet;
use std::env;

/// Billboard Hot 100 as mirrored by the catalog.
pub const DEFAULT_CHART_PLAYLIST_ID: &str = "6UeSakyzhiEt4NB3UAd6NQ";

pub const DEFAULT_GENRE_PROBES: [&str; 4] = ["pop", "rap", "dance", "country"];

#[derive(Debug, Clone)]
pub struct Config {
    pub spotify_client_id: String,
    pub spotify_client_secret: String,
    pub spotify_api_url: String,
    pub spotify_auth_url: String,
    pub chart_playlist_id: String,
    /// Genres that get an `is_<genre>` column in the tabular view
    pub genre_probes: Vec<String>,
    /// Path to the historical weekly chart CSV (date,title,artist,rank,...)
    pub chart_history_path: Option<String>,
    pub http_timeout_secs: u64,
    pub server_host: String,
    pub server_port: u16,
    /// Allowed CORS origins (comma-separated). Use "*" for any origin (development only).
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let spotify_client_id = env::var("SPOTIFY_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("SPOTIFY_CLIENT_ID environment variable must be set"))?;
        let spotify_client_secret = env::var("SPOTIFY_CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("SPOTIFY_CLIENT_SECRET environment variable must be set"))?;

        let genre_probes = env::var("GENRE_PROBES")
            .map(|raw| parse_list(&raw))
            .unwrap_or_else(|_| DEFAULT_GENRE_PROBES.iter().map(|g| g.to_string()).collect());

        if genre_probes.is_empty() {
            return Err(anyhow::anyhow!("GENRE_PROBES must name at least one genre"));
        }

        let cors_origins = parse_list(
            &env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://localhost:8000".to_string()),
        );

        Ok(Config {
            spotify_client_id,
            spotify_client_secret,
            spotify_api_url: env::var("SPOTIFY_API_URL")
                .unwrap_or_else(|_| "https://api.spotify.com/v1".to_string()),
            spotify_auth_url: env::var("SPOTIFY_AUTH_URL")
                .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string()),
            chart_playlist_id: env::var("CHART_PLAYLIST_ID")
                .unwrap_or_else(|_| DEFAULT_CHART_PLAYLIST_ID.to_string()),
            genre_probes,
            chart_history_path: env::var("CHART_HISTORY_PATH").ok(),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
            cors_origins,
        })
    }
}

/// Split a comma-separated setting, dropping blanks and repeats.
fn parse_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && seen.insert(*s))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_drops_blanks() {
        assert_eq!(
            parse_list(" pop, rap ,,country "),
            vec!["pop".to_string(), "rap".to_string(), "country".to_string()]
        );
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_repeated_probes_keep_first_occurrence() {
        assert_eq!(
            parse_list("pop,rap, pop,country,rap"),
            vec!["pop".to_string(), "rap".to_string(), "country".to_string()]
        );
    }
}
