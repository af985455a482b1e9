mod content;
mod tmdb;

pub use content::{Content, ContentKind, MediaKind, WatchEvent};
pub use tmdb::{
    CastMember, Credits, CrewMember, EpisodeDetails, EpisodeMatch, FindResponse, MovieDetails,
    MovieMatch, Named, TvDetails,
};
