pub mod clans;
pub mod download;
pub mod leaderboards;
pub mod maps;
pub mod mapsets;
pub mod multiplayer;
pub mod playlists;
pub mod scores;
pub mod server_stats;
pub mod users;
